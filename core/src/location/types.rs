//! Site environmental data records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seismic zone per IS 1893.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeismicZone {
    #[default]
    II,
    III,
    IV,
    V,
}

impl SeismicZone {
    pub const ALL: [SeismicZone; 4] = [Self::II, Self::III, Self::IV, Self::V];

    /// Zone factor Z for this zone.
    pub fn zone_factor(&self) -> f64 {
        match self {
            Self::II => 0.10,
            Self::III => 0.16,
            Self::IV => 0.24,
            Self::V => 0.36,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "V" => Some(Self::V),
            _ => None,
        }
    }
}

impl fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::II => write!(f, "II"),
            Self::III => write!(f, "III"),
            Self::IV => write!(f, "IV"),
            Self::V => write!(f, "V"),
        }
    }
}

/// Loading parameters for a site, either looked up or tabulated by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Basic wind speed, m/s
    pub basic_wind_speed: f64,
    pub seismic_zone: SeismicZone,
    pub zone_factor: f64,
    /// Shade air temperatures, °C
    pub max_shade_air_temp: f64,
    pub min_shade_air_temp: f64,
}

/// Id and display name of a state or district, as listed in dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
}
