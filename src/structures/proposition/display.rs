use super::Proposition;

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(predicate) => write!(f, "{predicate}"),
            Self::Bottom => write!(f, "⊥"),
            Self::Negation(inner) => write!(f, "¬{inner}"),
            Self::Conjunction(left, right) => write!(f, "({left} ∧ {right})"),
            Self::Disjunction(left, right) => write!(f, "({left} ∨ {right})"),
            Self::Conditional(antecedent, consequent) => {
                write!(f, "({antecedent} → {consequent})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::proposition::Proposition;

    #[test]
    fn notation() {
        let p = Proposition::atom("p");
        let q = Proposition::atom("q");

        let proposition = Proposition::conditional(
            Proposition::negation(Proposition::disjunction(p.clone(), Proposition::bottom())),
            Proposition::conjunction(q, Proposition::negation(Proposition::negation(p))),
        );

        assert_eq!(proposition.to_string(), "(¬(p ∨ ⊥) → (q ∧ ¬¬p))");
    }
}
