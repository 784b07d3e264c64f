//! Hand-tabulated loading parameters, used when the site is not picked
//! from the region directory.

use super::types::{LocationData, SeismicZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationField {
    BasicWindSpeed,
    MaxShadeAirTemp,
    MinShadeAirTemp,
}

impl LocationField {
    pub const ALL: [LocationField; 3] = [
        LocationField::BasicWindSpeed,
        LocationField::MaxShadeAirTemp,
        LocationField::MinShadeAirTemp,
    ];
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CustomLocationError {
    #[error("Required")]
    Required(Vec<LocationField>),
    #[error("Must be a number")]
    NotANumber(LocationField),
}

#[derive(Debug, Clone, Default)]
pub struct CustomLocationForm {
    basic_wind_speed: Option<f64>,
    seismic_zone: SeismicZone,
    max_shade_air_temp: Option<f64>,
    min_shade_air_temp: Option<f64>,
    errors: BTreeMap<LocationField, String>,
}

impl CustomLocationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seismic_zone(&self) -> SeismicZone {
        self.seismic_zone
    }

    /// Read-only, follows the selected zone.
    pub fn zone_factor(&self) -> f64 {
        self.seismic_zone.zone_factor()
    }

    pub fn value(&self, field: LocationField) -> Option<f64> {
        match field {
            LocationField::BasicWindSpeed => self.basic_wind_speed,
            LocationField::MaxShadeAirTemp => self.max_shade_air_temp,
            LocationField::MinShadeAirTemp => self.min_shade_air_temp,
        }
    }

    pub fn errors(&self) -> &BTreeMap<LocationField, String> {
        &self.errors
    }

    pub fn set(&mut self, field: LocationField, value: Option<f64>) {
        match field {
            LocationField::BasicWindSpeed => self.basic_wind_speed = value,
            LocationField::MaxShadeAirTemp => self.max_shade_air_temp = value,
            LocationField::MinShadeAirTemp => self.min_shade_air_temp = value,
        }
        self.errors.remove(&field);
    }

    /// Set a field from user text. Blank text clears it.
    pub fn set_text(&mut self, field: LocationField, raw: &str) -> Result<(), CustomLocationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.set(field, None);
            return Ok(());
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                self.set(field, Some(v));
                Ok(())
            }
            _ => {
                let e = CustomLocationError::NotANumber(field);
                self.errors.insert(field, e.to_string());
                Err(e)
            }
        }
    }

    pub fn set_seismic_zone(&mut self, zone: SeismicZone) {
        self.seismic_zone = zone;
    }

    /// Select the zone from its dropdown value ("II".."V"). Unknown values
    /// leave the current zone selected.
    pub fn set_seismic_zone_text(&mut self, raw: &str) -> Option<SeismicZone> {
        let zone = SeismicZone::parse(raw)?;
        self.set_seismic_zone(zone);
        Some(zone)
    }

    /// Validate and produce the tabulated data. Missing fields are marked
    /// "Required" and nothing is returned.
    pub fn save(&mut self) -> Result<LocationData, CustomLocationError> {
        self.errors.clear();

        if let (Some(basic_wind_speed), Some(max_shade_air_temp), Some(min_shade_air_temp)) =
            (self.basic_wind_speed, self.max_shade_air_temp, self.min_shade_air_temp)
        {
            return Ok(LocationData {
                basic_wind_speed,
                seismic_zone: self.seismic_zone,
                zone_factor: self.zone_factor(),
                max_shade_air_temp,
                min_shade_air_temp,
            });
        }

        let missing: Vec<LocationField> = LocationField::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_none())
            .collect();
        for field in &missing {
            self.errors.insert(*field, "Required".to_string());
        }
        Err(CustomLocationError::Required(missing))
    }
}
