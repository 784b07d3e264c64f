//! Project location: environmental loading data, resolved either from the
//! state/district directory or tabulated by hand.

pub mod types;
pub mod directory;
pub mod custom;


pub use types::{LocationData, Region, SeismicZone};
pub use directory::{CatalogError, LookupError, RegionCatalog, RegionDirectory};
pub use custom::{CustomLocationError, CustomLocationForm, LocationField};
