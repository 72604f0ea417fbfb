/*!
Hypothetical worlds.

A hypothetical world is a [snapshot](crate::db::world::World::snapshot) of some world, extended by [asserting](mod@crate::procedures::assert) a hypothesis.
Hypothetical worlds are used by the introduction rules of negation and the conditional, and by the elimination rule of disjunction.

If the hypothesis already holds in the world the snapshot is returned as is.
In particular, supposing ⊥ in a world containing ⊥ is not an error.

Otherwise, the hypothesis is asserted as usual, though the hypothetical world is [saturated](mod@crate::procedures::assert#saturation) over conditionals only.
If the assertion derives a second ⊥ it is refused, and the hypothetical world is returned as it stood.
As the world contains ⊥, every proposition is true in the world, as it should be for an absurd hypothesis.
*/

use std::rc::Rc;

use crate::{
    db::world::World,
    misc::log::targets::{self},
    procedures::assert::assert_hypothesis,
    structures::proposition::Proposition,
};

/// A snapshot of the world, with the hypothesis asserted.
pub fn hypothetical(world: &World, hypothesis: Rc<Proposition>) -> World {
    let mut supposition = world.snapshot();

    if supposition.holds(&hypothesis) {
        log::trace!(target: targets::HYPOTHETICAL, "{hypothesis} already holds");
        return supposition;
    }

    log::trace!(target: targets::HYPOTHETICAL, "Supposing {hypothesis}");
    // Assertion is refused only for a duplicate ⊥.
    if let Err(e) = assert_hypothesis(hypothesis, &mut supposition) {
        log::debug!(target: targets::HYPOTHETICAL, "Absurd supposition: {e:?}");
    }

    supposition
}
