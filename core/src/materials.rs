//! Material grade selectors for girders, bracing and deck.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural steel grade per IS 2062.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    #[default]
    E250,
    E350,
    E450,
}

impl SteelGrade {
    pub const ALL: [SteelGrade; 3] = [Self::E250, Self::E350, Self::E450];

    /// Nominal yield strength fy, MPa
    pub fn yield_strength(&self) -> f64 {
        match self {
            Self::E250 => 250.0,
            Self::E350 => 350.0,
            Self::E450 => 450.0,
        }
    }
}

impl fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.yield_strength() as u32)
    }
}

/// Deck concrete grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConcreteGrade {
    #[default]
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
    M55,
    M60,
}

impl ConcreteGrade {
    pub const ALL: [ConcreteGrade; 8] = [
        Self::M25,
        Self::M30,
        Self::M35,
        Self::M40,
        Self::M45,
        Self::M50,
        Self::M55,
        Self::M60,
    ];

    /// Characteristic cube strength fck, MPa
    pub fn characteristic_strength(&self) -> f64 {
        match self {
            Self::M25 => 25.0,
            Self::M30 => 30.0,
            Self::M35 => 35.0,
            Self::M40 => 40.0,
            Self::M45 => 45.0,
            Self::M50 => 50.0,
            Self::M55 => 55.0,
            Self::M60 => 60.0,
        }
    }
}

impl fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.characteristic_strength() as u32)
    }
}
