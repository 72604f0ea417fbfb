//! Error types used in the library.
//!
//! - Evaluation is total, and so has no errors.
//! - Assertion may be refused, though only in the case of asserting or deriving [Bottom](crate::structures::proposition::Proposition::Bottom) in a world which already contains an instance of bottom.
//!
//! Names of the error enums overlap with the corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type of the library, wrapping the errors of particular structures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    World(WorldError),
}

/// Errors when recording propositions to a [world](crate::db::world).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorldError {
    /// An attempt to assert bottom to a world which already contains bottom.
    ///
    /// The world is left without a second instance of bottom, though propositions recorded before bottom was derived remain.
    DuplicateBottom,
}

impl From<WorldError> for ErrorKind {
    fn from(e: WorldError) -> Self {
        ErrorKind::World(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_component() {
        let e: ErrorKind = WorldError::DuplicateBottom.into();
        assert_eq!(format!("{e:?}"), "World(DuplicateBottom)");
    }
}
