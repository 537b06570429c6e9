//! Star Navigation Planner
//!
//! Route planning for a space game galaxy: jump plans across connected star
//! systems, and hazard-avoiding waypoints inside each system's 16x16 grid.
//!
//! # Overview
//!
//! A route is planned in two layers. The interstellar planner picks the
//! shortest sequence of systems through the wormhole graph; then, inside
//! every system on the way, the local search connects the entry and exit
//! cells with as few straight legs as it can while staying clear of storms
//! and obstacles.
//!
//! # Modules
//!
//! - [`navigator`] - Facade owning the shared galaxy and planner options
//! - [`models`] - Domain models (Point, Segment, Sector, GalaxyGraph, Route, etc.)
//! - [`services`] - Planning services (local search, jump plans, assembly)
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Route and map presenters
//! - [`cli`] - Command-line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use starnav::{Hazards, Navigator};
//!
//! let navigator = Navigator::vendetta()?;
//! let start = navigator.parse_sector("dau F-11")?;
//! let end = navigator.parse_sector("ukari I-8")?;
//! let route = navigator.plan_route(&start, &end, &Hazards::new())?;
//! println!("{route}");
//! # Ok::<(), starnav::NavError>(())
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod navigator;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::errors::{NavError, NavResult, NoRoute};
pub use models::galaxy::{GalaxyBuilder, GalaxyGraph};
pub use models::hazards::{Hazards, Strategy};
pub use models::point::Point;
pub use models::route::{JumpPlan, Route};
pub use models::sector::{Sector, System};
pub use models::segment::Segment;
pub use navigator::{Navigator, NavigatorOptions};
