//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod walk;

pub use walk::WalkService;
