//! Structural equality of propositions.

use super::Proposition;

impl PartialEq for Proposition {
    fn eq(&self, other: &Self) -> bool {
        use Proposition::*;
        match (self, other) {
            (Atom(a), Atom(b)) => a == b,

            // Bottom is a constant, its uniqueness in a world is checked by the world.
            (Bottom, Bottom) => true,

            (Negation(a), Negation(b)) => a == b,

            (Conjunction(a1, a2), Conjunction(b1, b2)) | (Disjunction(a1, a2), Disjunction(b1, b2)) => {
                (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1)
            }

            (Conditional(a1, a2), Conditional(b1, b2)) => a1 == b1 && a2 == b2,

            _ => false,
        }
    }
}

impl Eq for Proposition {}

#[cfg(test)]
mod tests {
    use crate::structures::proposition::Proposition;

    #[test]
    fn commutative_connectives() {
        let p = Proposition::atom("p");
        let q = Proposition::negation(Proposition::atom("q"));

        assert_eq!(
            Proposition::conjunction(p.clone(), q.clone()),
            Proposition::conjunction(q.clone(), p.clone())
        );
        assert_eq!(
            Proposition::disjunction(p.clone(), q.clone()),
            Proposition::disjunction(q.clone(), p.clone())
        );
    }

    #[test]
    fn ordered_conditional() {
        let p = Proposition::atom("p");
        let q = Proposition::atom("q");

        assert_ne!(
            Proposition::conditional(p.clone(), q.clone()),
            Proposition::conditional(q.clone(), p.clone())
        );
        assert_eq!(
            Proposition::conditional(p.clone(), q.clone()),
            Proposition::conditional(Proposition::atom("p"), Proposition::atom("q"))
        );
    }

    #[test]
    fn kinds_differ() {
        let p = Proposition::atom("p");
        let q = Proposition::atom("q");

        assert_ne!(
            Proposition::conjunction(p.clone(), q.clone()),
            Proposition::disjunction(p.clone(), q.clone())
        );
        assert_ne!(p, Proposition::negation(p.clone()));
        assert_ne!(p, q);
    }

    #[test]
    fn nested() {
        let p = Proposition::atom("p");
        let q = Proposition::atom("q");
        let r = Proposition::atom("r");

        let left = Proposition::negation(Proposition::conjunction(
            Proposition::disjunction(p.clone(), q.clone()),
            r.clone(),
        ));
        let right = Proposition::negation(Proposition::conjunction(
            r.clone(),
            Proposition::disjunction(q.clone(), p.clone()),
        ));

        assert_eq!(left, right);
    }
}
