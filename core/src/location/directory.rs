//! Lookup of administrative regions and their environmental data.

use super::types::{LocationData, Region};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../data/regions.json");

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("Unknown state: {0}")]
    UnknownState(u32),
    #[error("Unknown district: {0}")]
    UnknownDistrict(u32),
    #[error("Region lookup unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed region catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate state id {0} in region catalog")]
    DuplicateState(u32),
    #[error("Duplicate district id {0} in region catalog")]
    DuplicateDistrict(u32),
}

/// Source of the state → district → location data hierarchy.
pub trait RegionDirectory: Send + Sync {
    /// All states, in display order.
    fn states(&self) -> Result<Vec<Region>, LookupError>;

    /// Districts of one state, in display order.
    fn districts(&self, state_id: u32) -> Result<Vec<Region>, LookupError>;

    /// Environmental data for one district.
    fn location_data(&self, district_id: u32) -> Result<LocationData, LookupError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DistrictEntry {
    id: u32,
    name: String,
    location_data: LocationData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateEntry {
    id: u32,
    name: String,
    #[serde(default)]
    districts: Vec<DistrictEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    states: Vec<StateEntry>,
}

/// In-memory region directory loaded from a JSON catalog.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    states: Vec<StateEntry>,
    /// district id -> (state index, district index)
    district_index: HashMap<u32, (usize, usize)>,
}

impl RegionCatalog {
    /// Catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::build(file.states)
    }

    fn build(states: Vec<StateEntry>) -> Result<Self, CatalogError> {
        let mut seen_states = HashSet::new();
        let mut district_index = HashMap::new();

        for (si, state) in states.iter().enumerate() {
            if !seen_states.insert(state.id) {
                return Err(CatalogError::DuplicateState(state.id));
            }
            for (di, district) in state.districts.iter().enumerate() {
                if district_index.insert(district.id, (si, di)).is_some() {
                    return Err(CatalogError::DuplicateDistrict(district.id));
                }
            }
        }

        Ok(Self {
            states,
            district_index,
        })
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn district_count(&self) -> usize {
        self.district_index.len()
    }
}

impl RegionDirectory for RegionCatalog {
    fn states(&self) -> Result<Vec<Region>, LookupError> {
        Ok(self
            .states
            .iter()
            .map(|s| Region { id: s.id, name: s.name.clone() })
            .collect())
    }

    fn districts(&self, state_id: u32) -> Result<Vec<Region>, LookupError> {
        let state = self
            .states
            .iter()
            .find(|s| s.id == state_id)
            .ok_or(LookupError::UnknownState(state_id))?;

        Ok(state
            .districts
            .iter()
            .map(|d| Region { id: d.id, name: d.name.clone() })
            .collect())
    }

    fn location_data(&self, district_id: u32) -> Result<LocationData, LookupError> {
        let &(si, di) = self
            .district_index
            .get(&district_id)
            .ok_or(LookupError::UnknownDistrict(district_id))?;
        Ok(self.states[si].districts[di].location_data.clone())
    }
}
