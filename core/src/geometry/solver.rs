//! Girder layout solver.
//!
//! The deck cross-section is governed by a single relation between the
//! overall width `W`, the girder spacing `s`, the girder count `n` and the
//! deck overhang `o`:
//!
//! ```text
//! (W - 2o) / s = n        W = carriageway + 5
//! ```
//!
//! Given any two of `{s, n, o}` the third follows. The field the user just
//! edited selects which of the remaining two is recomputed, so the solve is
//! a pure function of its inputs.

use super::EPSILON;
use super::types::{overall_width, GeometryField, GeometryInput, SolvedGeometry, MIN_GIRDERS};
use thiserror::Error;

/// A rejected geometry, tagged with the field it belongs to.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Carriageway width must be a positive number")]
    InvalidCarriageway(f64),

    #[error("Enter at least two of girder spacing, number of girders and deck overhang")]
    Underdetermined,

    #[error("{field} must be a number")]
    NotANumber { field: GeometryField },

    #[error("{field} must be greater than zero")]
    NotPositive { field: GeometryField, value: f64 },

    #[error("{field} cannot be negative")]
    Negative { field: GeometryField, value: f64 },

    #[error("{field} must be less than overall width ({limit:.1} m)")]
    ExceedsOverallWidth { field: GeometryField, value: f64, limit: f64 },

    #[error("At least {} girders are required", MIN_GIRDERS)]
    TooFewGirders { count: i64 },

    #[error("Number of girders must be a whole number")]
    NotWholeNumber { value: f64 },

    #[error("{count} girders do not fit the girder spacing and deck overhang (expected {expected})")]
    Inconsistent { count: u32, expected: i64 },
}

impl GeometryError {
    /// Field the error should be displayed against. `None` for errors that
    /// concern the request as a whole.
    pub fn field(&self) -> Option<GeometryField> {
        match self {
            Self::InvalidCarriageway(_) | Self::Underdetermined => None,
            Self::NotANumber { field }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::ExceedsOverallWidth { field, .. } => Some(*field),
            Self::TooFewGirders { .. } | Self::NotWholeNumber { .. } | Self::Inconsistent { .. } => {
                Some(GeometryField::NumGirders)
            }
        }
    }
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Which field is recomputed after `changed` was edited.
///
/// A missing field among the other two is always the target. When both are
/// present the selector is fixed: an edited spacing recomputes the girder
/// count, while an edited count or overhang recomputes the spacing.
pub fn solve_target(input: &GeometryInput, changed: GeometryField) -> GeometryResult<GeometryField> {
    if !input.is_set(changed) {
        return Err(GeometryError::Underdetermined);
    }

    let [a, b] = changed.others();
    match (input.is_set(a), input.is_set(b)) {
        (false, false) => Err(GeometryError::Underdetermined),
        (false, true) => Ok(a),
        (true, false) => Ok(b),
        (true, true) => Ok(match changed {
            GeometryField::GirderSpacing => GeometryField::NumGirders,
            GeometryField::NumGirders | GeometryField::DeckOverhang => GeometryField::GirderSpacing,
        }),
    }
}

/// Resolve the full layout from the user's partial input.
pub fn solve(
    carriageway_width: f64,
    input: GeometryInput,
    changed: GeometryField,
) -> GeometryResult<SolvedGeometry> {
    let width = checked_overall_width(carriageway_width)?;
    let target = solve_target(&input, changed)?;

    let solved = match target {
        GeometryField::NumGirders => {
            let spacing = check_spacing(input.girder_spacing, width)?;
            let overhang = check_overhang(input.deck_overhang, width)?;
            let count = ((width - 2.0 * overhang) / spacing).round();
            SolvedGeometry {
                girder_spacing: spacing,
                num_girders: check_count_f64(count, width)?,
                deck_overhang: overhang,
            }
        }
        GeometryField::GirderSpacing => {
            let count = check_count(input.num_girders, width)?;
            let overhang = check_overhang(input.deck_overhang, width)?;
            let spacing = (width - 2.0 * overhang) / count as f64;
            SolvedGeometry {
                girder_spacing: check_spacing(Some(spacing), width)?,
                num_girders: count,
                deck_overhang: overhang,
            }
        }
        GeometryField::DeckOverhang => {
            let spacing = check_spacing(input.girder_spacing, width)?;
            let count = check_count(input.num_girders, width)?;
            let mut overhang = (width - spacing * count as f64) / 2.0;
            // A flush deck edge should not fail on rounding noise
            if overhang.abs() < EPSILON {
                overhang = 0.0;
            }
            SolvedGeometry {
                girder_spacing: spacing,
                num_girders: count,
                deck_overhang: check_overhang(Some(overhang), width)?,
            }
        }
    };

    Ok(solved)
}

/// Check a complete layout without solving anything: every value in range,
/// and the girder count equal to `round((W - 2o) / s)`.
///
/// The rounded form accepts every layout [`solve`] produces, including a
/// computed count whose exact quotient is fractional.
pub fn validate(carriageway_width: f64, geometry: &SolvedGeometry) -> GeometryResult<()> {
    let width = checked_overall_width(carriageway_width)?;
    check_spacing(Some(geometry.girder_spacing), width)?;
    check_count(Some(geometry.num_girders), width)?;
    check_overhang(Some(geometry.deck_overhang), width)?;

    let fitted = ((width - 2.0 * geometry.deck_overhang) / geometry.girder_spacing).round();
    if fitted != f64::from(geometry.num_girders) {
        return Err(GeometryError::Inconsistent {
            count: geometry.num_girders,
            expected: fitted as i64,
        });
    }
    Ok(())
}

/// Convert a raw girder count (as typed or sent over the wire) to an integer.
///
/// Only the representation is checked here; the minimum count and the width
/// limit are enforced by [`solve`] and [`validate`].
pub fn girder_count_from_f64(value: f64) -> GeometryResult<u32> {
    let field = GeometryField::NumGirders;
    if !value.is_finite() || value > u32::MAX as f64 {
        return Err(GeometryError::NotANumber { field });
    }
    if value.fract() != 0.0 {
        return Err(GeometryError::NotWholeNumber { value });
    }
    if value < 0.0 {
        return Err(GeometryError::NotPositive { field, value });
    }
    Ok(value as u32)
}

fn checked_overall_width(carriageway_width: f64) -> GeometryResult<f64> {
    if !carriageway_width.is_finite() || carriageway_width <= 0.0 {
        return Err(GeometryError::InvalidCarriageway(carriageway_width));
    }
    Ok(overall_width(carriageway_width))
}

fn check_below_width(field: GeometryField, value: f64, width: f64) -> GeometryResult<f64> {
    if value >= width {
        return Err(GeometryError::ExceedsOverallWidth { field, value, limit: width });
    }
    Ok(value)
}

fn check_spacing(value: Option<f64>, width: f64) -> GeometryResult<f64> {
    let field = GeometryField::GirderSpacing;
    let value = value.ok_or(GeometryError::Underdetermined)?;
    if !value.is_finite() {
        return Err(GeometryError::NotANumber { field });
    }
    if value <= 0.0 {
        return Err(GeometryError::NotPositive { field, value });
    }
    check_below_width(field, value, width)
}

fn check_overhang(value: Option<f64>, width: f64) -> GeometryResult<f64> {
    let field = GeometryField::DeckOverhang;
    let value = value.ok_or(GeometryError::Underdetermined)?;
    if !value.is_finite() {
        return Err(GeometryError::NotANumber { field });
    }
    if value < 0.0 {
        return Err(GeometryError::Negative { field, value });
    }
    check_below_width(field, value, width)
}

fn check_count(value: Option<u32>, width: f64) -> GeometryResult<u32> {
    let count = value.ok_or(GeometryError::Underdetermined)?;
    if count < MIN_GIRDERS {
        return Err(GeometryError::TooFewGirders { count: count as i64 });
    }
    check_below_width(GeometryField::NumGirders, count as f64, width)?;
    Ok(count)
}

fn check_count_f64(count: f64, width: f64) -> GeometryResult<u32> {
    if !count.is_finite() || count > u32::MAX as f64 {
        return Err(GeometryError::NotANumber { field: GeometryField::NumGirders });
    }
    if count < MIN_GIRDERS as f64 {
        return Err(GeometryError::TooFewGirders { count: count as i64 });
    }
    check_below_width(GeometryField::NumGirders, count, width)?;
    Ok(count as u32)
}
