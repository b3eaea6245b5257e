//! World Setup
//!
//! Resource initialization and agent spawning.

pub mod swarm;
pub mod world;

pub use swarm::*;
pub use world::*;
