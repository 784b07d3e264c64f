//! Basic inputs form: structure type, project location, geometric details
//! and material grades.
//!
//! The form is a plain record mutated by setter calls. Numeric fields are
//! validated as they change and their messages kept in a per-field error
//! map; switching the structure type to "Other" disables the form.

use crate::geometry::{BridgeGeometry, FinalizeError, GeometrySession};
use crate::location::{
    CustomLocationError, CustomLocationForm, LocationData, Region, RegionDirectory,
};
use crate::materials::{ConcreteGrade, SteelGrade};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};


pub const SPAN_MIN: f64 = 5.0;
pub const SPAN_MAX: f64 = 100.0;
pub const CARRIAGEWAY_MIN: f64 = 3.0;
pub const CARRIAGEWAY_MAX: f64 = 50.0;
/// Skew angles above this need a detailed analysis per IRC 24 (2010).
pub const SKEW_LIMIT_DEG: f64 = 20.0;

pub const OUT_OF_RANGE: &str = "Outside the software range.";
pub const SKEW_WARNING: &str = "IRC 24 (2010) requires detailed analysis for skew angles > 20°";
pub const OTHER_STRUCTURE_WARNING: &str = "Other structures not included.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    #[default]
    Highway,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Pick state and district, data comes from the directory.
    #[default]
    Location,
    /// Tabulate loading parameters by hand.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Footpath {
    #[default]
    None,
    Single,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Span,
    CarriagewayWidth,
    SkewAngle,
}

/// Lenient number parsing for form text. Blank or non-numeric text is `None`.
pub fn parse_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Default)]
pub struct BasicInputs {
    structure_type: StructureType,
    location_mode: LocationMode,

    states: Vec<Region>,
    districts: Vec<Region>,
    selected_state: Option<u32>,
    selected_district: Option<u32>,
    location_data: Option<LocationData>,
    custom_location_data: Option<LocationData>,

    span: Option<f64>,
    carriageway_width: Option<f64>,
    skew_angle: Option<f64>,
    pub footpath: Footpath,

    pub girder_steel: SteelGrade,
    pub bracing_steel: SteelGrade,
    pub deck_concrete: ConcreteGrade,

    geometry: Option<BridgeGeometry>,
    errors: BTreeMap<InputField, String>,
}

impl BasicInputs {
    pub fn new() -> Self {
        Self::default()
    }

    // --- structure type -------------------------------------------------

    pub fn structure_type(&self) -> StructureType {
        self.structure_type
    }

    pub fn set_structure_type(&mut self, structure_type: StructureType) {
        self.structure_type = structure_type;
        if structure_type == StructureType::Other {
            self.errors.clear();
        }
    }

    /// All inputs other than the structure type are locked for "Other".
    pub fn is_disabled(&self) -> bool {
        self.structure_type == StructureType::Other
    }

    pub fn structure_warning(&self) -> Option<&'static str> {
        self.is_disabled().then_some(OTHER_STRUCTURE_WARNING)
    }

    // --- project location -----------------------------------------------

    pub fn location_mode(&self) -> LocationMode {
        self.location_mode
    }

    pub fn set_location_mode(&mut self, mode: LocationMode) {
        self.location_mode = mode;
        match mode {
            LocationMode::Location => self.custom_location_data = None,
            LocationMode::Custom => {
                self.location_data = None;
                self.selected_state = None;
                self.selected_district = None;
            }
        }
    }

    pub fn states(&self) -> &[Region] {
        &self.states
    }

    pub fn districts(&self) -> &[Region] {
        &self.districts
    }

    pub fn selected_state(&self) -> Option<u32> {
        self.selected_state
    }

    pub fn selected_district(&self) -> Option<u32> {
        self.selected_district
    }

    /// Populate the state dropdown. A failed lookup keeps the current list.
    pub fn load_states(&mut self, directory: &dyn RegionDirectory) {
        match directory.states() {
            Ok(states) => self.states = states,
            Err(e) => error!("Error fetching states: {}", e),
        }
    }

    /// Select a state and load its districts, resetting the district choice.
    pub fn select_state(&mut self, state_id: Option<u32>, directory: &dyn RegionDirectory) {
        self.selected_state = state_id;
        let Some(id) = state_id else {
            return;
        };

        match directory.districts(id) {
            Ok(districts) => {
                info!("Loaded {} districts for state {}", districts.len(), id);
                self.districts = districts;
                self.selected_district = None;
                self.location_data = None;
            }
            Err(e) => error!("Error fetching districts: {}", e),
        }
    }

    /// Select a district and resolve its environmental data.
    pub fn select_district(&mut self, district_id: Option<u32>, directory: &dyn RegionDirectory) {
        self.selected_district = district_id;
        let Some(id) = district_id else {
            return;
        };

        match directory.location_data(id) {
            Ok(data) => self.location_data = Some(data),
            Err(e) => error!("Error fetching location data: {}", e),
        }
    }

    pub fn can_open_custom_location(&self) -> bool {
        !self.is_disabled() && self.location_mode == LocationMode::Custom
    }

    pub fn open_custom_location(&self) -> Option<CustomLocationForm> {
        self.can_open_custom_location().then(CustomLocationForm::new)
    }

    /// Save the custom loading popup into the form.
    pub fn save_custom_location(&mut self, form: &mut CustomLocationForm) -> Result<(), CustomLocationError> {
        let data = form.save()?;
        self.custom_location_data = Some(data);
        Ok(())
    }

    /// Environmental data for the active location mode, if resolved.
    pub fn display_location_data(&self) -> Option<&LocationData> {
        match self.location_mode {
            LocationMode::Location => self.location_data.as_ref(),
            LocationMode::Custom => self.custom_location_data.as_ref(),
        }
    }

    // --- geometric details ----------------------------------------------

    pub fn span(&self) -> Option<f64> {
        self.span
    }

    pub fn carriageway_width(&self) -> Option<f64> {
        self.carriageway_width
    }

    pub fn skew_angle(&self) -> Option<f64> {
        self.skew_angle
    }

    pub fn set_span(&mut self, value: Option<f64>) {
        self.span = value;
        self.check_range(InputField::Span, value, SPAN_MIN, SPAN_MAX);
    }

    pub fn set_carriageway_width(&mut self, value: Option<f64>) {
        self.carriageway_width = value;
        self.check_range(InputField::CarriagewayWidth, value, CARRIAGEWAY_MIN, CARRIAGEWAY_MAX);
    }

    /// Skew is optional; only angles beyond the code limit are flagged.
    pub fn set_skew_angle(&mut self, value: Option<f64>) {
        self.skew_angle = value;
        match value {
            Some(v) if v > SKEW_LIMIT_DEG => {
                self.errors.insert(InputField::SkewAngle, SKEW_WARNING.to_string());
            }
            _ => {
                self.errors.remove(&InputField::SkewAngle);
            }
        }
    }

    /// Text setters used by the form's inputs. Unparsable text is treated
    /// like a blank field.
    pub fn set_span_text(&mut self, raw: &str) {
        self.set_span(parse_input(raw));
    }

    pub fn set_carriageway_width_text(&mut self, raw: &str) {
        self.set_carriageway_width(parse_input(raw));
    }

    pub fn set_skew_angle_text(&mut self, raw: &str) {
        self.set_skew_angle(parse_input(raw));
    }

    fn check_range(&mut self, field: InputField, value: Option<f64>, min: f64, max: f64) {
        match value {
            Some(v) if (min..=max).contains(&v) => {
                self.errors.remove(&field);
            }
            _ => {
                self.errors.insert(field, OUT_OF_RANGE.to_string());
            }
        }
    }

    pub fn errors(&self) -> &BTreeMap<InputField, String> {
        &self.errors
    }

    pub fn error(&self, field: InputField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    // --- additional geometry --------------------------------------------

    pub fn geometry(&self) -> Option<&BridgeGeometry> {
        self.geometry.as_ref()
    }

    pub fn can_open_geometry(&self) -> bool {
        !self.is_disabled() && self.carriageway_width.is_some()
    }

    /// Open the geometry popup for the current carriageway, seeded with the
    /// last saved layout.
    pub fn open_geometry(&self) -> Option<GeometrySession> {
        if !self.can_open_geometry() {
            return None;
        }
        let width = self.carriageway_width?;
        Some(GeometrySession::open(width, self.geometry.as_ref()))
    }

    /// Finalize the popup and keep its layout. A refused finalize leaves the
    /// previously saved layout in place.
    pub fn save_geometry(&mut self, session: &GeometrySession) -> Result<&BridgeGeometry, FinalizeError> {
        let geometry = session.finalize()?;
        info!(
            "Saved geometry: {} girders at {:.2} m, overhang {:.2} m",
            geometry.num_girders, geometry.girder_spacing, geometry.deck_overhang
        );
        Ok(&*self.geometry.insert(geometry))
    }
}
