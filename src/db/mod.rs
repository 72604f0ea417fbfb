//! Databases for holding information relevant to reasoning.
//!
//!   - [The world](crate::db::world)
//!     + The propositions held to be true, bucketed by kind.
//!       The world is the only mutable structure during reasoning, and is mutated only by recording a proposition or a reset.

pub mod world;
