//! Presentation
//!
//! Presenters format routes, jump plans and system maps for the user,
//! keeping formatting out of the planner.

pub mod presenters;
