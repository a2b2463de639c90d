//! Parcel inspection command
//!
//! Converts the input like the convert command, then reports each parcel's
//! properties and the overall extent instead of writing GeoJSON.

use clap::ArgMatches;
use log::info;

use crate::api::ParcelKit;
use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, required_input};
use crate::geojson::errors::GeoResult;
use crate::parcel::ConversionConfig;
use crate::utils::io_utils::read_input;
use crate::utils::logger::Logger;

/// Command for listing parcel properties and extent
pub struct InspectCommand<'a> {
    input_file: String,
    config: ConversionConfig,
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        Ok(InspectCommand {
            input_file: required_input(args)?,
            config: config_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let kit = ParcelKit::new(self.config.clone())?;
        let report = kit.convert_json(&read_input(&self.input_file)?)?;

        info!("Inspected {} features, {} records skipped ({} failed)",
              report.converted_count(), report.skipped.len(), report.failure_count());

        println!("Parcel Inspection Results:");
        println!("  Features: {}", report.converted_count());
        println!("  Skipped records: {}", report.skipped.len());

        for (i, feature) in report.collection.features.iter().enumerate() {
            let title = format!("Feature #{}", i);
            let lines = feature.property_lines();
            println!("\n{}", title);
            for line in &lines {
                println!("  {}", line);
            }
            self.logger.log_section(&title, &lines)?;
        }

        match &report.bounds {
            Some(bounds) => {
                let center = bounds.center();
                println!("\nBounds ({}): {}", self.config.target_crs, bounds);
                println!("  Center: {}, {}", center.x, center.y);
                self.logger.log(&format!("Bounds: {}", bounds))?;
            }
            None => println!("\nBounds: no features converted"),
        }

        Ok(())
    }
}
