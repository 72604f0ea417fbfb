/*!
A world, of propositions held to be true.

Propositions are stored in one of six buckets, by [kind](Kind).
Within a bucket propositions are stored in the order they were recorded, though the order is of no significance to reasoning.

The world is passive.
Propositions are recorded by [assert_raw](World::assert_raw), without any validation or derivation of consequences.
Recording a proposition with its consequences is the task of the [assert](mod@crate::procedures::assert) procedure, which also maintains the invariant that a world contains at most one instance of bottom.

# Snapshots

A [snapshot](World::snapshot) of a world is an independent copy of the world: the propositions of the world are shared, but the buckets are not.
So, a snapshot may be extended with hypotheses without any change to the world it was taken from.
*/

use std::rc::Rc;

use crate::{
    config::{dbs::WorldConfig, Config},
    misc::log::targets::{self},
    structures::proposition::{Kind, Proposition},
};

/// A world of propositions held to be true.
#[derive(Clone, Debug)]
pub struct World {
    /// Propositions, bucketed by kind.
    buckets: [Vec<Rc<Proposition>>; Kind::ALL.len()],

    /// A local configuration, typically derived from the configuration of a context.
    pub config: WorldConfig,
}

impl Default for World {
    fn default() -> Self {
        World::from_config(&Config::default())
    }
}

impl World {
    /// A fresh world, with the default configuration.
    pub fn new() -> Self {
        World::default()
    }

    pub fn from_config(config: &Config) -> Self {
        World {
            buckets: Default::default(),
            config: WorldConfig::from(config),
        }
    }

    /// Removes every proposition from the world.
    pub fn reset(&mut self) {
        log::debug!(target: targets::WORLD, "Reset");
        self.buckets = Default::default();
    }

    /// Records a proposition to the bucket of its kind.
    ///
    /// No check is made on whether the proposition is already recorded, or whether recording the proposition breaks an invariant of the world.
    pub fn assert_raw(&mut self, proposition: Rc<Proposition>) {
        let kind = proposition.kind();
        log::trace!(target: targets::WORLD, "Recorded {proposition} to {kind}");
        self.buckets[kind.index()].push(proposition);
    }

    /// An independent copy of the world.
    pub fn snapshot(&self) -> World {
        self.clone()
    }

    /// The propositions of the given kind, in the order recorded.
    pub fn bucket(&self, kind: Kind) -> &[Rc<Proposition>] {
        &self.buckets[kind.index()]
    }

    /// Every proposition in the world, bucket by bucket.
    pub fn propositions(&self) -> impl Iterator<Item = &Rc<Proposition>> {
        Kind::ALL
            .into_iter()
            .flat_map(move |kind| self.bucket(kind))
    }

    /// A count of every proposition in the world, including duplicates.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    pub fn has_bottom(&self) -> bool {
        !self.bucket(Kind::Bottom).is_empty()
    }

    /// Whether some proposition structurally equal to the given proposition has been recorded.
    pub fn holds(&self, proposition: &Proposition) -> bool {
        match proposition {
            Proposition::Bottom => self.has_bottom(),
            _ => self
                .bucket(proposition.kind())
                .iter()
                .any(|recorded| recorded.as_ref() == proposition),
        }
    }

    /// Every subformula of every proposition in the world, without structural duplicates.
    ///
    /// Subformulas are listed in the order first seen, and each subformula follows its own subformulas.
    pub fn subformulas(&self) -> Vec<Rc<Proposition>> {
        let mut subformulas: Vec<Rc<Proposition>> = Vec::default();
        for proposition in self.propositions() {
            for subformula in proposition.subformulas() {
                if !subformulas.iter().any(|seen| seen == &subformula) {
                    subformulas.push(subformula);
                }
            }
        }
        subformulas
    }
}
