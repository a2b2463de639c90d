//! Batch conversion of raw parcel records into reprojected Features

use std::fmt;

use log::{debug, error, info, warn};
use serde_json::{Map, Value};

use super::config::BatchPolicy;
use super::records::{feature_from_value, ParcelInput};
use crate::coordinate::BoundingBox;
use crate::geojson::errors::GeoResult;
use crate::geojson::{Feature, FeatureAdapter, FeatureCollection, Reprojector};
use crate::utils::progress::ProgressTracker;

/// Why a record did not make it into the output
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The record carries no geometry; nothing to draw
    MissingGeometry,
    /// Adapting or reprojecting the record failed
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingGeometry => write!(f, "no geometry"),
            SkipReason::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// A record left out of the output, by its position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of converting a batch
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Converted features, in input order
    pub collection: FeatureCollection,
    /// Records that were left out
    pub skipped: Vec<SkippedRecord>,
    /// Extent of the converted features in the target CRS
    pub bounds: Option<BoundingBox>,
}

impl ConversionReport {
    pub fn converted_count(&self) -> usize {
        self.collection.len()
    }

    /// Number of records skipped because they failed, not because they lacked geometry
    pub fn failure_count(&self) -> usize {
        self.skipped.iter()
            .filter(|s| matches!(s.reason, SkipReason::Failed(_)))
            .count()
    }
}

/// Runs the adapter and reprojector over a batch of records
pub struct ParcelConverter<'a> {
    reprojector: &'a Reprojector,
    policy: BatchPolicy,
    show_progress: bool,
}

impl<'a> ParcelConverter<'a> {
    /// Create a converter
    ///
    /// # Arguments
    /// * `reprojector` - Reprojector for the configured CRS pair
    /// * `policy` - What to do when a record fails
    pub fn new(reprojector: &'a Reprojector, policy: BatchPolicy) -> Self {
        ParcelConverter {
            reprojector,
            policy,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Convert one record
    ///
    /// # Returns
    /// `Ok(None)` when the record has no geometry, the reprojected Feature
    /// otherwise, or the error that stopped it
    pub fn convert_record(&self, record: Value) -> GeoResult<Option<Feature>> {
        self.convert_feature(FeatureAdapter::adapt_value(record)?)
    }

    /// Reproject an adapted Feature, keeping its `id` and other members
    pub fn convert_feature(&self, feature: Feature) -> GeoResult<Option<Feature>> {
        if feature.geometry.is_none() {
            return Ok(None);
        }
        self.reprojector.reproject_feature(&feature).map(Some)
    }

    /// Convert whatever `parse_input` produced
    pub fn convert_input(&self, input: ParcelInput) -> GeoResult<ConversionReport> {
        match input {
            ParcelInput::Records(records) => self.convert_records(records),
            ParcelInput::Features { features, collection } => self.convert_features(features, collection),
        }
    }

    /// Convert a batch of records
    ///
    /// Records without geometry are always skipped. Other failures are
    /// skipped or abort the batch according to the policy.
    pub fn convert_records(&self, records: Vec<Value>) -> GeoResult<ConversionReport> {
        info!("Converting {} parcel records", records.len());
        self.convert_batch(records, Map::new(), |record| self.convert_record(record))
    }

    /// Convert the members of a `features` array
    ///
    /// Same policy as `convert_records`. The collection members are copied
    /// onto the output collection.
    pub fn convert_features(&self, features: Vec<Value>, collection: Map<String, Value>) -> GeoResult<ConversionReport> {
        info!("Converting {} parcel features", features.len());
        self.convert_batch(features, collection, |value| self.convert_feature(feature_from_value(value)?))
    }

    fn convert_batch<F>(&self, items: Vec<Value>, members: Map<String, Value>, convert: F) -> GeoResult<ConversionReport>
    where
        F: Fn(Value) -> GeoResult<Option<Feature>>,
    {
        let progress = if self.show_progress {
            ProgressTracker::new(items.len() as u64, "Reprojecting parcels")
        } else {
            ProgressTracker::hidden()
        };

        let mut features = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for (index, item) in items.into_iter().enumerate() {
            match convert(item) {
                Ok(Some(feature)) => features.push(feature),
                Ok(None) => {
                    debug!("Record {} has no geometry, skipping", index);
                    skipped.push(SkippedRecord { index, reason: SkipReason::MissingGeometry });
                }
                Err(e) => match self.policy {
                    BatchPolicy::Abort => {
                        progress.finish();
                        error!("Aborting batch at record {}: {}", index, e);
                        return Err(e);
                    }
                    BatchPolicy::Skip => {
                        warn!("Skipping record {}: {}", index, e);
                        skipped.push(SkippedRecord { index, reason: SkipReason::Failed(e.to_string()) });
                    }
                },
            }
            progress.increment(1);
        }
        progress.finish();

        let mut collection = FeatureCollection::new(features);
        collection.foreign = members;
        let bounds = collection.bounds();

        info!("Converted {} features, skipped {}", collection.len(), skipped.len());
        if let Some(b) = &bounds {
            debug!("Converted extent: {}", b);
        }

        Ok(ConversionReport {
            collection,
            skipped,
            bounds,
        })
    }
}
