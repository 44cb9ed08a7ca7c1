use std::fmt;

/// Errors produced by ring perception.
///
/// A molecule without rings is not an error: it yields an all-zero result.
/// These variants signal that the analysis could not be completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The ring-block walk found a cycle closure to an atom that is not on
    /// the current path.
    DetachedClosure { atom: usize, join: usize },
    /// Two consecutive ring atoms have no bond between them.
    MissingRingBond { a: usize, b: usize },
    /// Ring enumeration needed more path extensions than allowed.
    SearchBudgetExceeded { limit: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetachedClosure { atom, join } => write!(
                f,
                "ring closure from atom {} to atom {} off the search path",
                atom, join
            ),
            Self::MissingRingBond { a, b } => {
                write!(f, "no bond between ring atoms {} and {}", a, b)
            }
            Self::SearchBudgetExceeded { limit } => write!(
                f,
                "ring enumeration exceeded {} path extensions",
                limit
            ),
        }
    }
}

impl std::error::Error for RingError {}
