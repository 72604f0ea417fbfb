//! A small natural deduction evaluator for propositional logic.
//!
//! otter_nd determines whether a proposition follows from a collection of propositions held to be true, using the introduction and elimination rules of natural deduction.
//! It is a reference semantics for small, hand-built, propositions, and makes no attempt at efficiency.
//!
//! # Orientation
//!
//! The library is built around a [world](crate::db::world) of propositions held to be true.
//!
//! - [Propositions](crate::structures::proposition) are immutable trees of atoms, ⊥, negations, conjunctions, disjunctions, and conditionals.
//! - A proposition is [asserted](mod@crate::procedures::assert) to a world by applying its elimination rule to derive further propositions, asserting those, and then recording the proposition.
//! - A proposition is [evaluated](crate::procedures::evaluate) against a world by checking whether any of its introduction rules hold.
//!   Rules which require a supposition (for example, that of the antecedent of a conditional) are checked against a [hypothetical](crate::procedures::hypothetical) world.
//!
//! Each procedure takes a world explicitly.
//! For convenience, a [context](crate::context) holds a world together with a [configuration](crate::config).
//!
//! # Examples
//!
//! + Disjunctive syllogism, of a sort.
//!
//! ```rust
//! # use otter_nd::db::world::World;
//! # use otter_nd::procedures::{assert, eval};
//! use otter_nd::structures::proposition::Proposition;
//!
//! let mut world = World::default();
//!
//! let p = Proposition::atom("p");
//! let q = Proposition::atom("q");
//! let r = Proposition::atom("r");
//!
//! assert!(assert(Proposition::disjunction(p.clone(), q.clone()), &mut world).is_ok());
//! assert!(assert(Proposition::conditional(p.clone(), r.clone()), &mut world).is_ok());
//! assert!(assert(Proposition::conditional(q.clone(), r.clone()), &mut world).is_ok());
//!
//! assert!(eval(&r, &world));
//! ```
//!
//! + A contradiction.
//!
//! ```rust
//! # use otter_nd::context::Context;
//! # use otter_nd::structures::proposition::Proposition;
//! let mut the_context = Context::default();
//! let p = Proposition::atom("p");
//!
//! assert!(the_context.assert(p.clone()).is_ok());
//! assert!(the_context.is_false(&Proposition::Bottom));
//!
//! assert!(the_context.assert(Proposition::negation(p)).is_ok());
//! assert!(the_context.is_true(&Proposition::Bottom));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to saturation can be filtered with `RUST_LOG=saturation …` or,
//! - Every evaluation, including those against hypothetical worlds, can be found with `RUST_LOG=evaluation=trace …`

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
