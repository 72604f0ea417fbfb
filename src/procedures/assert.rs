/*!
Assertion of a proposition to a world.

To assert a proposition is to record the proposition as true, together with everything which follows from the proposition by its elimination rule.
Elimination rules are applied before the proposition is recorded, and each derived proposition is itself asserted, and so on.

| Proposition | Derives |
|---|---|
| p | nothing |
| ⊥ | nothing |
| ¬p | q, if p is ¬q (when [classical](crate::config::Config::classical)) |
| p ∧ q | p and q |
| p ∨ q | each r true both in the world extended with p and in the world extended with q |
| p → q | q, if p is true |

Every derived proposition is recorded, even if it already holds.
The one exception is a proposition equal to one whose derivations are in progress, as a disjunction may derive an equal disjunction, which in turn derives the first, and so on.

# Bottom

Asserting ⊥ is special.
A world may contain at most one instance of ⊥, and so an attempt to assert ⊥ to a world containing ⊥ is refused with a [DuplicateBottom](err::WorldError::DuplicateBottom) error, and the world is not modified.

The same holds when ⊥ is derived, e.g. when asserting ⊥ ∧ p to a world containing ⊥.
In this case the error is returned as soon as ⊥ is reached, and anything recorded before ⊥ remains.

# Saturation

The elimination rules of the conditional and disjunction depend on the world, and so a proposition asserted later may allow some earlier assertion to derive more.
If [saturation](crate::config::Config::saturation) is enabled, after each assertion the elimination rules of every conditional and disjunction in the world are applied again, until nothing new is derived.

For example, after asserting p ∨ q, p → r, and q → r (in that order), r is derived only on saturation.

During saturation only propositions which do not already hold are recorded, and a rule is applied again only if the world has grown since the rule was last applied.
So, saturation terminates, as every derived proposition is a subformula of some proposition in the world.

Hypothetical worlds are saturated over conditionals only.
Saturating over disjunctions requires a pair of hypothetical worlds for each disjunction, each of which would be saturated in turn, and the count of worlds grows exponentially with the count of disjunctions.

# Disjunction

The candidates for derivation by a disjunction are the subformulas of the propositions in the world, rather than the propositions in the world alone.
Candidates which already hold are passed over.
*/

use std::rc::Rc;

use crate::{
    db::world::World,
    misc::log::targets::{self},
    procedures::{eval, hypothetical::hypothetical},
    structures::proposition::{Kind, Proposition},
    types::err::{self, ErrorKind},
};

/// Kinds of proposition whose elimination rules are reapplied when saturating a world.
const SATURATING_KINDS: [Kind; 2] = [Kind::Disjunction, Kind::Conditional];

/// Kinds of proposition whose elimination rules are reapplied when saturating a hypothetical world.
const HYPOTHETICAL_SATURATING_KINDS: [Kind; 1] = [Kind::Conditional];

/// Asserts the proposition to the world, together with its consequences.
///
/// ```rust
/// # use otter_nd::db::world::World;
/// # use otter_nd::procedures::{assert, eval};
/// # use otter_nd::structures::proposition::Proposition;
/// # use otter_nd::types::err::{ErrorKind, WorldError};
/// let mut world = World::default();
/// let p = Proposition::atom("p");
/// let q = Proposition::atom("q");
///
/// assert!(assert(Proposition::conditional(p.clone(), q.clone()), &mut world).is_ok());
/// assert!(!eval(&q, &world));
///
/// assert!(assert(p, &mut world).is_ok());
/// assert!(eval(&q, &world));
///
/// assert!(assert(Proposition::bottom(), &mut world).is_ok());
/// assert_eq!(
///     assert(Proposition::bottom(), &mut world),
///     Err(ErrorKind::World(WorldError::DuplicateBottom))
/// );
/// ```
pub fn assert(proposition: Rc<Proposition>, world: &mut World) -> Result<(), ErrorKind> {
    log::debug!(target: targets::ASSERTION, "Asserting {proposition}");

    record(proposition, world, &mut Vec::default())?;

    if world.config.saturation.value {
        saturate_over(world, &SATURATING_KINDS)?;
    }

    Ok(())
}

/// Asserts a hypothesis to a hypothetical world.
pub(crate) fn assert_hypothesis(
    hypothesis: Rc<Proposition>,
    world: &mut World,
) -> Result<(), ErrorKind> {
    record(hypothesis, world, &mut Vec::default())?;

    if world.config.saturation.value {
        saturate_over(world, &HYPOTHETICAL_SATURATING_KINDS)?;
    }

    Ok(())
}

/// Records the proposition after recording everything derived from the proposition.
///
/// `pending` holds the propositions whose derivations are in progress.
fn record(
    proposition: Rc<Proposition>,
    world: &mut World,
    pending: &mut Vec<Rc<Proposition>>,
) -> Result<(), ErrorKind> {
    if let Proposition::Bottom = proposition.as_ref() {
        return record_bottom(proposition, world);
    }

    let derivations = eliminate(&proposition, world);

    pending.push(Rc::clone(&proposition));
    for derived in derivations {
        if pending.iter().any(|in_progress| in_progress == &derived) {
            log::trace!(target: targets::ASSERTION, "{derived} is in progress");
            continue;
        }
        log::trace!(target: targets::ASSERTION, "{proposition} derives {derived}");
        record(derived, world, pending)?;
    }
    pending.pop();

    world.assert_raw(proposition);
    Ok(())
}

fn record_bottom(bottom: Rc<Proposition>, world: &mut World) -> Result<(), ErrorKind> {
    if world.has_bottom() {
        log::info!(target: targets::ASSERTION, "Refused a duplicate ⊥");
        return Err(err::WorldError::DuplicateBottom.into());
    }

    world.assert_raw(bottom);
    Ok(())
}

/// The propositions derived from the proposition by its elimination rule, relative to the world.
pub fn eliminate(proposition: &Proposition, world: &World) -> Vec<Rc<Proposition>> {
    match proposition {
        Proposition::Atom(_) | Proposition::Bottom => Vec::default(),

        Proposition::Negation(inner) => match inner.as_ref() {
            Proposition::Negation(double) if world.config.classical.value => {
                vec![Rc::clone(double)]
            }
            _ => Vec::default(),
        },

        Proposition::Conjunction(left, right) => vec![Rc::clone(left), Rc::clone(right)],

        Proposition::Disjunction(left, right) => {
            let left_world = hypothetical(world, Rc::clone(left));
            let right_world = hypothetical(world, Rc::clone(right));

            world
                .subformulas()
                .into_iter()
                .filter(|candidate| !world.holds(candidate))
                .filter(|candidate| eval(candidate, &left_world) && eval(candidate, &right_world))
                .collect()
        }

        Proposition::Conditional(antecedent, consequent) => match eval(antecedent, world) {
            true => vec![Rc::clone(consequent)],
            false => Vec::default(),
        },
    }
}

/// Applies the elimination rules of every conditional and disjunction in the world until nothing new is derived.
pub fn saturate(world: &mut World) -> Result<(), ErrorKind> {
    saturate_over(world, &SATURATING_KINDS)
}

fn saturate_over(world: &mut World, kinds: &[Kind]) -> Result<(), ErrorKind> {
    // For each kind, the size of the world when each rule of the kind was last applied.
    let mut marks: Vec<Vec<usize>> = vec![Vec::default(); kinds.len()];

    let mut pass = 0;
    loop {
        pass += 1;
        let mut fresh = false;

        for (kind, kind_marks) in kinds.iter().zip(marks.iter_mut()) {
            let mut index = 0;
            while index < world.bucket(*kind).len() {
                let size = world.len();
                match kind_marks.get_mut(index) {
                    Some(mark) if *mark == size => {
                        index += 1;
                        continue;
                    }
                    Some(mark) => *mark = size,
                    None => kind_marks.push(size),
                }

                let rule = Rc::clone(&world.bucket(*kind)[index]);
                for derived in eliminate(&rule, world) {
                    if world.holds(&derived) {
                        continue;
                    }
                    log::debug!(target: targets::SATURATION, "{rule} derives {derived}");
                    record(derived, world, &mut Vec::default())?;
                    fresh = true;
                }
                index += 1;
            }
        }

        if !fresh {
            log::trace!(target: targets::SATURATION, "Saturated after {pass} passes");
            return Ok(());
        }
    }
}
