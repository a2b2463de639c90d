use log::info;
use serde_json::Value;

use crate::coordinate::Point;
use crate::geojson::errors::GeoResult;
use crate::geojson::{GeoJson, Reprojector};
use crate::parcel::{parse_input, ConversionConfig, ConversionReport, ParcelConverter};

/// Main interface to the parcelproj library
pub struct ParcelKit {
    reprojector: Reprojector,
    config: ConversionConfig,
}

impl ParcelKit {
    /// Create a ParcelKit for the configured CRS pair
    ///
    /// # Arguments
    /// * `config` - Source/target CRS and batch settings
    ///
    /// # Returns
    /// A ParcelKit instance, or an error if either CRS cannot be resolved
    pub fn new(config: ConversionConfig) -> GeoResult<Self> {
        let reprojector = Reprojector::from_crs(&config.source_crs, &config.target_crs)?;
        info!("Reprojecting {} -> {}",
              reprojector.transformer().source().description(),
              reprojector.transformer().target().description());
        Ok(ParcelKit { reprojector, config })
    }

    /// ParcelKit for California zone 5 feet to WGS84, skipping bad records
    pub fn with_defaults() -> GeoResult<Self> {
        Self::new(ConversionConfig::default())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn reprojector(&self) -> &Reprojector {
        &self.reprojector
    }

    /// Adapt and reproject a batch of already-decoded records
    pub fn convert_records(&self, records: Vec<Value>) -> GeoResult<ConversionReport> {
        self.converter().convert_records(records)
    }

    /// Parse JSON text and convert it
    ///
    /// Feature and FeatureCollection input keeps its `id`, `name`, and other
    /// members; only coordinates change.
    ///
    /// # Arguments
    /// * `input` - A JSON array of records, one record, or a Feature/FeatureCollection
    pub fn convert_json(&self, input: &str) -> GeoResult<ConversionReport> {
        self.converter().convert_input(parse_input(input)?)
    }

    fn converter(&self) -> ParcelConverter<'_> {
        ParcelConverter::new(&self.reprojector, self.config.policy)
            .with_progress(self.config.show_progress)
    }

    /// Reproject a GeoJSON value that is already Feature shaped
    pub fn reproject(&self, geojson: &GeoJson) -> GeoResult<GeoJson> {
        self.reprojector.reproject(geojson)
    }

    /// Project one position from the source to the target CRS
    pub fn project_point(&self, point: &Point) -> GeoResult<Point> {
        self.reprojector.project_point(point)
    }

    /// Project one position from the target CRS back to the source CRS
    pub fn unproject_point(&self, point: &Point) -> GeoResult<Point> {
        self.reprojector.transformer().inverse().transform_point(point)
    }
}
