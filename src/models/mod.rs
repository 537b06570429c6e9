//! Domain models
//!
//! Grid geometry, the galaxy jump graph, sectors and the routes built from
//! them. Models are plain data with the small amount of logic that belongs
//! to the data itself (line walks, spiral enumeration, id encoding).

pub mod constants;
pub mod errors;
pub mod galaxy;
pub mod hazards;
pub mod point;
pub mod route;
pub mod sector;
pub mod segment;
