pub mod geometry;
pub mod inputs;
pub mod location;
pub mod materials;
