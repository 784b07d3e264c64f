//! Editing session behind the "Modify Additional Geometry" popup.
//!
//! The session owns the three layout fields while the popup is open. Edits
//! only store values; committing a field (leaving it) runs the solver and
//! either replaces all three fields with a consistent layout or records an
//! error against the offending field. Nothing reaches the parent form until
//! [`GeometrySession::finalize`] succeeds.

use super::solver::{self, GeometryError};
use super::types::{overall_width, BridgeGeometry, GeometryField, GeometryInput, SolvedGeometry};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinalizeError {
    #[error("Please fill all fields correctly before saving.")]
    Incomplete,
    #[error(transparent)]
    Invalid(#[from] GeometryError),
}

/// Result of committing a field.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Not enough values yet to solve; nothing changed.
    Skipped,
    /// All three fields now hold the solved layout.
    Solved(SolvedGeometry),
    /// The solve was rejected; the error is recorded on its field.
    Rejected(GeometryError),
}

#[derive(Debug, Clone)]
pub struct GeometrySession {
    carriageway_width: f64,
    input: GeometryInput,
    errors: BTreeMap<GeometryField, String>,
}

impl GeometrySession {
    /// Open a session, seeded from a previously saved layout if there is one.
    pub fn open(carriageway_width: f64, prior: Option<&BridgeGeometry>) -> Self {
        Self {
            carriageway_width,
            input: prior.map(BridgeGeometry::as_input).unwrap_or_default(),
            errors: BTreeMap::new(),
        }
    }

    pub fn carriageway_width(&self) -> f64 {
        self.carriageway_width
    }

    pub fn overall_width(&self) -> f64 {
        overall_width(self.carriageway_width)
    }

    pub fn input(&self) -> &GeometryInput {
        &self.input
    }

    pub fn value(&self, field: GeometryField) -> Option<f64> {
        match field {
            GeometryField::GirderSpacing => self.input.girder_spacing,
            GeometryField::NumGirders => self.input.num_girders.map(f64::from),
            GeometryField::DeckOverhang => self.input.deck_overhang,
        }
    }

    pub fn errors(&self) -> &BTreeMap<GeometryField, String> {
        &self.errors
    }

    pub fn error(&self, field: GeometryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Store a value for `field` (or clear it with `None`) without solving.
    ///
    /// Girder counts must be whole, non-negative numbers; anything else is
    /// recorded as an error and the stored value is left alone.
    pub fn edit(&mut self, field: GeometryField, value: Option<f64>) -> Result<(), GeometryError> {
        match field {
            GeometryField::GirderSpacing => self.input.girder_spacing = value,
            GeometryField::DeckOverhang => self.input.deck_overhang = value,
            GeometryField::NumGirders => match value.map(solver::girder_count_from_f64).transpose() {
                Ok(count) => self.input.num_girders = count,
                Err(e) => {
                    self.errors.insert(field, e.to_string());
                    return Err(e);
                }
            },
        }
        self.errors.remove(&field);
        Ok(())
    }

    /// Store user text for `field`. Blank text clears the field.
    pub fn edit_text(&mut self, field: GeometryField, raw: &str) -> Result<(), GeometryError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return self.edit(field, None);
        }
        match raw.parse::<f64>() {
            Ok(v) => self.edit(field, Some(v)),
            Err(_) => {
                let e = GeometryError::NotANumber { field };
                self.errors.insert(field, e.to_string());
                Err(e)
            }
        }
    }

    /// Commit `field` after editing, solving for the dependent field when
    /// at least one other value is present.
    pub fn commit(&mut self, field: GeometryField) -> CommitOutcome {
        let [a, b] = field.others();
        if !self.input.is_set(field) || !(self.input.is_set(a) || self.input.is_set(b)) {
            return CommitOutcome::Skipped;
        }

        match solver::solve(self.carriageway_width, self.input, field) {
            Ok(solved) => {
                self.input = solved.into();
                self.errors.clear();
                CommitOutcome::Solved(solved)
            }
            Err(e) => {
                debug!("Geometry solve rejected after editing {}: {}", field.key(), e);
                self.errors.insert(e.field().unwrap_or(field), e.to_string());
                CommitOutcome::Rejected(e)
            }
        }
    }

    /// Freeze the layout for the parent form. Values typed but never
    /// committed must still satisfy the width relation. Leaves the session
    /// untouched.
    pub fn finalize(&self) -> Result<BridgeGeometry, FinalizeError> {
        let (Some(girder_spacing), Some(num_girders), Some(deck_overhang)) = (
            self.input.girder_spacing,
            self.input.num_girders,
            self.input.deck_overhang,
        ) else {
            return Err(FinalizeError::Incomplete);
        };
        if self.has_errors() {
            return Err(FinalizeError::Incomplete);
        }

        let solved = SolvedGeometry {
            girder_spacing,
            num_girders,
            deck_overhang,
        };
        solver::validate(self.carriageway_width, &solved)?;
        Ok(BridgeGeometry::new(self.carriageway_width, solved))
    }
}
