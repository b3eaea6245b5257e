//! ECS Components
//!
//! The trail field, agents, and per-frame state.

pub mod agent;
pub mod field;
pub mod frame;

pub use agent::*;
pub use field::*;
pub use frame::*;
