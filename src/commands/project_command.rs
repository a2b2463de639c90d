//! Single coordinate projection command

use clap::ArgMatches;
use log::info;

use crate::api::ParcelKit;
use crate::commands::command_traits::Command;
use crate::commands::config_from_args;
use crate::coordinate::Point;
use crate::geojson::errors::{GeoError, GeoResult};
use crate::parcel::ConversionConfig;

/// Command for projecting one `x,y` position
pub struct ProjectCommand {
    /// Position to project
    point: Point,
    /// Project from the target CRS back to the source CRS
    inverse: bool,
    config: ConversionConfig,
}

impl ProjectCommand {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?;

        Ok(ProjectCommand {
            point: Point::from_string(coordinate)?,
            inverse: args.get_flag("inverse"),
            config: config_from_args(args)?,
        })
    }
}

impl Command for ProjectCommand {
    fn execute(&self) -> GeoResult<()> {
        let kit = ParcelKit::new(self.config.clone())?;
        let result = if self.inverse {
            kit.unproject_point(&self.point)?
        } else {
            kit.project_point(&self.point)?
        };

        let formatted = match result.z {
            Some(z) => format!("{},{},{}", result.x, result.y, z),
            None => format!("{},{}", result.x, result.y),
        };

        info!("Projected ({}, {}) -> {}", self.point.x, self.point.y, formatted);
        println!("{}", formatted);

        Ok(())
    }
}
