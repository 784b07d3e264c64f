//! Deck cross-section geometry: the girder layout solver and the popup
//! session that drives it.

pub mod types;
pub mod solver;
pub mod session;

#[cfg(test)]
mod tests_solver;
#[cfg(test)]
mod tests_session;

pub use types::{
    overall_width, BridgeGeometry, GeometryField, GeometryInput, SolvedGeometry,
    FOOTPATH_ALLOWANCE, MIN_GIRDERS,
};
pub use solver::{solve, solve_target, validate, GeometryError, GeometryResult};
pub use session::{CommitOutcome, FinalizeError, GeometrySession};

pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for SolvedGeometry {
    fn approx_eq(&self, other: &Self) -> bool {
        self.num_girders == other.num_girders
            && self.girder_spacing.approx_eq(&other.girder_spacing)
            && self.deck_overhang.approx_eq(&other.deck_overhang)
    }
}
