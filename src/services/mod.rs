//! Planning services
//!
//! Business logic over the domain models. Everything here is synchronous
//! and reads the galaxy without mutating it.

pub mod navigation;
