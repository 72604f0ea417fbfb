//! Procedures for reasoning about a world.
//!
//! - [Evaluation](evaluate) determines whether a proposition is true in a world, by the introduction rules of the proposition.
//! - [Assertion](mod@assert) records a proposition as true in a world, together with whatever follows by the elimination rules of the proposition.
//! - [Hypothetical worlds](hypothetical) support both, by extending a snapshot of a world with some hypothesis.
//!
//! Each procedure takes a world explicitly.
//! For a world held together with a configuration, see the [context](crate::context).

pub mod assert;
pub mod evaluate;
pub mod hypothetical;

pub use assert::assert;
pub use evaluate::eval;
