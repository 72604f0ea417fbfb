use super::Proposition;

/// The syntactic kind of a proposition.
///
/// Kinds are ordered as the buckets of a [world](crate::db::world).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Atom,
    Bottom,
    Negation,
    Disjunction,
    Conjunction,
    Conditional,
}

impl Kind {
    /// Every kind, in bucket order.
    pub const ALL: [Kind; 6] = [
        Kind::Atom,
        Kind::Bottom,
        Kind::Negation,
        Kind::Disjunction,
        Kind::Conjunction,
        Kind::Conditional,
    ];

    /// The index of the bucket for propositions of the kind.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<&Proposition> for Kind {
    fn from(proposition: &Proposition) -> Self {
        match proposition {
            Proposition::Atom(_) => Kind::Atom,
            Proposition::Bottom => Kind::Bottom,
            Proposition::Negation(_) => Kind::Negation,
            Proposition::Disjunction(_, _) => Kind::Disjunction,
            Proposition::Conjunction(_, _) => Kind::Conjunction,
            Proposition::Conditional(_, _) => Kind::Conditional,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom => write!(f, "atoms"),
            Self::Bottom => write!(f, "bottom"),
            Self::Negation => write!(f, "negations"),
            Self::Disjunction => write!(f, "disjunctions"),
            Self::Conjunction => write!(f, "conjunctions"),
            Self::Conditional => write!(f, "conditionals"),
        }
    }
}
