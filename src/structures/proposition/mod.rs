/*!
Propositions of propositional logic.

A proposition is one of six variants:

| Variant | Notation |
|---|---|
| [Atom](Proposition::Atom) | p |
| [Bottom](Proposition::Bottom) | ⊥ |
| [Negation](Proposition::Negation) | ¬p |
| [Conjunction](Proposition::Conjunction) | p ∧ q |
| [Disjunction](Proposition::Disjunction) | p ∨ q |
| [Conditional](Proposition::Conditional) | p → q |

Propositions are built through the constructors on [Proposition], each of which returns a reference counted proposition.
As propositions are never mutated, a subtree may be shared by any number of parents.

```rust
# use otter_nd::structures::proposition::{Kind, Proposition};
let p = Proposition::atom("p");
let q = Proposition::atom("q");

let p_and_q = Proposition::conjunction(p.clone(), q.clone());
let q_and_p = Proposition::conjunction(q.clone(), p.clone());

assert_eq!(p_and_q, q_and_p);
assert_eq!(p_and_q.kind(), Kind::Conjunction);
assert_eq!(format!("{p_and_q}"), "(p ∧ q)");

let p_to_q = Proposition::conditional(p.clone(), q.clone());
let q_to_p = Proposition::conditional(q, p);

assert_ne!(p_to_q, q_to_p);
```

# Equality

Equality of propositions is structural, with conjunction and disjunction treated as commutative.
So, equality is not suitable for hashing, and propositions do not implement [Hash](std::hash::Hash).
*/

#[doc(hidden)]
mod display;
#[doc(hidden)]
mod equality;
mod kind;
pub use kind::Kind;

use std::rc::Rc;

/// A proposition.
#[derive(Clone, Debug)]
pub enum Proposition {
    /// An atomic proposition, identified by a predicate.
    Atom(String),

    /// The absurd proposition.
    Bottom,

    /// The negation of a proposition.
    Negation(Rc<Proposition>),

    /// The conjunction of a pair of propositions.
    Conjunction(Rc<Proposition>, Rc<Proposition>),

    /// The disjunction of a pair of propositions.
    Disjunction(Rc<Proposition>, Rc<Proposition>),

    /// A conditional, from an antecedent to a consequent.
    Conditional(Rc<Proposition>, Rc<Proposition>),
}

impl Proposition {
    pub fn atom(predicate: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::Atom(predicate.into()))
    }

    pub fn bottom() -> Rc<Self> {
        Rc::new(Self::Bottom)
    }

    pub fn negation(proposition: Rc<Proposition>) -> Rc<Self> {
        Rc::new(Self::Negation(proposition))
    }

    pub fn conjunction(left: Rc<Proposition>, right: Rc<Proposition>) -> Rc<Self> {
        Rc::new(Self::Conjunction(left, right))
    }

    pub fn disjunction(left: Rc<Proposition>, right: Rc<Proposition>) -> Rc<Self> {
        Rc::new(Self::Disjunction(left, right))
    }

    pub fn conditional(antecedent: Rc<Proposition>, consequent: Rc<Proposition>) -> Rc<Self> {
        Rc::new(Self::Conditional(antecedent, consequent))
    }

    /// The kind of the proposition.
    pub fn kind(&self) -> Kind {
        Kind::from(self)
    }

    /// Every subformula of the proposition, with each subformula following its own subformulas.
    ///
    /// The proposition is always the last subformula.
    /// A subformula which occurs multiple times is listed once for each occurrence.
    ///
    /// ```rust
    /// # use otter_nd::structures::proposition::Proposition;
    /// let p = Proposition::atom("p");
    /// let not_p = Proposition::negation(p.clone());
    /// let p_or_not_p = Proposition::disjunction(p.clone(), not_p.clone());
    ///
    /// let subformulas = p_or_not_p.subformulas();
    /// assert_eq!(subformulas, vec![p.clone(), p, not_p, p_or_not_p]);
    /// ```
    pub fn subformulas(self: &Rc<Self>) -> Vec<Rc<Proposition>> {
        let mut subformulas = Vec::default();
        self.extend_subformulas(&mut subformulas);
        subformulas
    }

    fn extend_subformulas(self: &Rc<Self>, subformulas: &mut Vec<Rc<Proposition>>) {
        match self.as_ref() {
            Self::Atom(_) | Self::Bottom => {}

            Self::Negation(inner) => inner.extend_subformulas(subformulas),

            Self::Conjunction(left, right)
            | Self::Disjunction(left, right)
            | Self::Conditional(left, right) => {
                left.extend_subformulas(subformulas);
                right.extend_subformulas(subformulas);
            }
        }
        subformulas.push(self.clone());
    }
}
