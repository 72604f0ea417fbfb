/*!
Evaluation of a proposition against a world.

A proposition is true in a world just in case one of its introduction rules holds in the world.

Every proposition has the introduction rule of *explosion*: if the world contains ⊥, the proposition is true.
In addition, each kind of proposition has its own rule:

| Proposition | True when |
|---|---|
| p | p is recorded in the world |
| ⊥ | some ¬q is recorded in the world, and q is true |
| ¬p | ⊥ is true in the world extended with p |
| p ∧ q | p is true and q is true |
| p ∨ q | p is true or q is true |
| p → q | q is true in the world extended with p |

Extended worlds are [hypothetical](crate::procedures::hypothetical), and so evaluation never mutates the world given.

# Cycles

Through the introduction rule for ⊥ evaluation may return to some earlier query against the same world.
For example, in a world containing both p and ¬¬p, evaluating ⊥ requires evaluating ¬p, which requires evaluating ⊥ in the world extended with p, and this is the same world.
Queries in progress are kept on a stack, and a repeated query is false.

Along any chain of queries each world extends the world before, and so a pair of worlds in the chain with the same count of propositions are the same world.
*/

use std::rc::Rc;

use crate::{
    db::world::World,
    misc::log::targets::{self},
    procedures::hypothetical::hypothetical,
    structures::proposition::{Kind, Proposition},
};

/// Queries in progress, as a proposition paired with the count of propositions in the world queried.
type Goals = Vec<(Proposition, usize)>;

/// Whether the proposition is true in the world.
///
/// ```rust
/// # use otter_nd::db::world::World;
/// # use otter_nd::procedures::{assert, eval};
/// # use otter_nd::structures::proposition::Proposition;
/// let mut world = World::default();
/// let p = Proposition::atom("p");
/// let q = Proposition::atom("q");
///
/// assert!(!eval(&p, &world));
/// assert!(eval(&Proposition::conditional(p.clone(), p.clone()), &world));
///
/// assert!(assert(Proposition::conjunction(p.clone(), q.clone()), &mut world).is_ok());
/// assert!(eval(&p, &world));
/// assert!(eval(&Proposition::disjunction(q, Proposition::bottom()), &world));
/// ```
pub fn eval(proposition: &Proposition, world: &World) -> bool {
    let mut goals = Goals::default();
    eval_goal(proposition, world, &mut goals)
}

fn eval_goal(proposition: &Proposition, world: &World, goals: &mut Goals) -> bool {
    if explosion(world) {
        log::trace!(target: targets::EVALUATION, "{proposition} by explosion");
        return true;
    }

    let size = world.len();
    if goals
        .iter()
        .any(|(goal, goal_size)| *goal_size == size && goal == proposition)
    {
        log::trace!(target: targets::EVALUATION, "Cycle on {proposition}");
        return false;
    }

    goals.push((proposition.clone(), size));
    let value = introduction(proposition, world, goals);
    goals.pop();

    log::trace!(target: targets::EVALUATION, "{proposition} is {value}");
    value
}

/// Ex falso quodlibet.
fn explosion(world: &World) -> bool {
    world.has_bottom()
}

fn introduction(proposition: &Proposition, world: &World, goals: &mut Goals) -> bool {
    match proposition {
        Proposition::Atom(predicate) => world.bucket(Kind::Atom).iter().any(|atom| {
            matches!(atom.as_ref(), Proposition::Atom(recorded) if recorded == predicate)
        }),

        Proposition::Bottom => world
            .bucket(Kind::Negation)
            .iter()
            .any(|negation| match negation.as_ref() {
                Proposition::Negation(inner) => eval_goal(inner, world, goals),
                _ => false,
            }),

        Proposition::Negation(inner) => {
            let supposition = hypothetical(world, Rc::clone(inner));
            eval_goal(&Proposition::Bottom, &supposition, goals)
        }

        Proposition::Conjunction(left, right) => {
            eval_goal(left, world, goals) && eval_goal(right, world, goals)
        }

        Proposition::Disjunction(left, right) => {
            eval_goal(left, world, goals) || eval_goal(right, world, goals)
        }

        Proposition::Conditional(antecedent, consequent) => {
            let supposition = hypothetical(world, Rc::clone(antecedent));
            eval_goal(consequent, &supposition, goals)
        }
    }
}
