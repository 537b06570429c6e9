//! Route planning
//!
//! Local waypoint search inside one system's grid, jump plans across the
//! galaxy, and the assembler that combines the two.

pub mod assembler;
pub mod deadline;
pub mod interstellar;
pub mod local;

pub use assembler::{navigate, navigate_within, plan_route, plan_route_within};
pub use deadline::Deadline;
pub use interstellar::{all_jump_plans, shortest_jump_plans, shortest_jump_plans_within};
pub use local::Path;
