//! Key structures.
//!
//! ## Propositions
//!
//! A [proposition] is a tree built from atoms and the bottom constant ⊥ by negation, conjunction, disjunction, and the conditional.
//! Propositions are immutable, and subtrees are shared through reference counting.
//!
//! ## Truth
//!
//! Propositions do not carry a value.
//! Instead, whether a proposition is true is relative to a [world](crate::db::world), and is determined by the introduction rules of the proposition.
//! Likewise, what follows from a proposition being true is determined by the elimination rules of the proposition.
//!
//! See the [procedures](crate::procedures) for details of both.

pub mod proposition;
