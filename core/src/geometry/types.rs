//! Value types shared by the geometry solver and the popup session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed allowance for footpaths and parapets added to the carriageway, in meters.
pub const FOOTPATH_ALLOWANCE: f64 = 5.0;

/// Minimum number of longitudinal girders a deck can be carried on.
pub const MIN_GIRDERS: u32 = 2;

/// Overall bridge width for a given carriageway width.
pub fn overall_width(carriageway_width: f64) -> f64 {
    carriageway_width + FOOTPATH_ALLOWANCE
}

/// The three secondary geometry quantities linked by the girder layout relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryField {
    GirderSpacing,
    NumGirders,
    DeckOverhang,
}

impl GeometryField {
    pub const ALL: [GeometryField; 3] = [
        GeometryField::GirderSpacing,
        GeometryField::NumGirders,
        GeometryField::DeckOverhang,
    ];

    /// Wire name, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::GirderSpacing => "girder_spacing",
            Self::NumGirders => "num_girders",
            Self::DeckOverhang => "deck_overhang",
        }
    }

    /// The two fields other than `self`, in declaration order.
    pub fn others(&self) -> [GeometryField; 2] {
        match self {
            Self::GirderSpacing => [Self::NumGirders, Self::DeckOverhang],
            Self::NumGirders => [Self::GirderSpacing, Self::DeckOverhang],
            Self::DeckOverhang => [Self::GirderSpacing, Self::NumGirders],
        }
    }
}

impl fmt::Display for GeometryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GirderSpacing => write!(f, "Girder spacing"),
            Self::NumGirders => write!(f, "Number of girders"),
            Self::DeckOverhang => write!(f, "Deck overhang"),
        }
    }
}

/// Partially known girder layout, as entered by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryInput {
    pub girder_spacing: Option<f64>,
    pub num_girders: Option<u32>,
    pub deck_overhang: Option<f64>,
}

impl GeometryInput {
    pub fn new(girder_spacing: Option<f64>, num_girders: Option<u32>, deck_overhang: Option<f64>) -> Self {
        Self {
            girder_spacing,
            num_girders,
            deck_overhang,
        }
    }

    pub fn is_set(&self, field: GeometryField) -> bool {
        match field {
            GeometryField::GirderSpacing => self.girder_spacing.is_some(),
            GeometryField::NumGirders => self.num_girders.is_some(),
            GeometryField::DeckOverhang => self.deck_overhang.is_some(),
        }
    }

    /// Number of the three fields that currently hold a value.
    pub fn known_count(&self) -> usize {
        GeometryField::ALL.iter().filter(|f| self.is_set(**f)).count()
    }
}

/// A fully resolved girder layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedGeometry {
    pub girder_spacing: f64,
    pub num_girders: u32,
    pub deck_overhang: f64,
}

impl From<SolvedGeometry> for GeometryInput {
    fn from(s: SolvedGeometry) -> Self {
        Self::new(Some(s.girder_spacing), Some(s.num_girders), Some(s.deck_overhang))
    }
}

/// Finalized deck geometry handed back to the parent form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgeGeometry {
    pub carriageway_width: f64,
    pub girder_spacing: f64,
    pub num_girders: u32,
    pub deck_overhang: f64,
    pub overall_width: f64,
}

impl BridgeGeometry {
    pub fn new(carriageway_width: f64, solved: SolvedGeometry) -> Self {
        Self {
            carriageway_width,
            girder_spacing: solved.girder_spacing,
            num_girders: solved.num_girders,
            deck_overhang: solved.deck_overhang,
            overall_width: overall_width(carriageway_width),
        }
    }

    pub fn as_input(&self) -> GeometryInput {
        GeometryInput::new(
            Some(self.girder_spacing),
            Some(self.num_girders),
            Some(self.deck_overhang),
        )
    }
}
