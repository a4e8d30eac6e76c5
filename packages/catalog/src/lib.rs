//! Crop Catalog for the smart irrigation service
//!
//! Static descriptive metadata for every crop the recommendation model knows
//! about. The catalog is independent of the trained model: it never changes at
//! runtime and every lookup succeeds, falling back to a generic record for
//! names it does not recognise.

use serde::Serialize;
use utoipa::ToSchema;

mod crops;


pub use crops::DEFAULT_CROP;

/// Inclusive min/max bounds of an optimal growing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct OptimalRange {
    pub min: i16,
    pub max: i16,
}

impl OptimalRange {
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }
}

/// Descriptive record for a single crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CropMetadata {
    #[schema(value_type = String)]
    pub icon: &'static str,
    #[schema(value_type = String)]
    pub season: &'static str,
    #[schema(value_type = String)]
    pub water_requirement: &'static str,
    #[schema(value_type = String)]
    pub growth_period: &'static str,
    pub optimal_temp: OptimalRange,
    pub optimal_humidity: OptimalRange,
    #[schema(value_type = Vec<String>)]
    pub benefits: &'static [&'static str],
    #[schema(value_type = String)]
    pub description: &'static str,
}

/// Look up a crop by name, ignoring case and surrounding whitespace.
///
/// Unknown names yield [`DEFAULT_CROP`]; this never fails.
pub fn lookup(name: &str) -> &'static CropMetadata {
    get(name).unwrap_or(&DEFAULT_CROP)
}

/// Like [`lookup`], but `None` for names outside the catalog.
pub fn get(name: &str) -> Option<&'static CropMetadata> {
    let name = name.trim();
    crops::CROPS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, meta)| meta)
}

pub fn contains(name: &str) -> bool {
    get(name).is_some()
}
