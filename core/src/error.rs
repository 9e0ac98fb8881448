//! Error types for builder operations.
//!
//! Every builder call that breaks a constraint fails immediately with a
//! [`BuilderError`]. The three categories mirror what went wrong:
//!
//! - [`ValidationError`]: a value fails a textual or size constraint.
//! - [`BuilderError::TypeMismatch`]: a child resolved to the wrong kind.
//! - [`StructuralError`]: siblings of incompatible kinds were mixed.

use thiserror::Error;

use crate::types::ApplicationCommandOptionType;

/// A value failed a textual or size constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was never set.
    #[error("expected {field} to be set before serialization")]
    Missing {
        /// Field label (`name`, `description`).
        field: &'static str,
    },

    /// A name does not match `^[a-z0-9_-]{1,32}$`.
    #[error("expected name to match \"^[a-z0-9_-]{{1,32}}$\", got {value:?} instead")]
    InvalidName {
        /// The rejected name.
        value: String,
    },

    /// A string is shorter or longer than allowed.
    #[error("expected {field} to have length between {min} and {max}, got {length} ({value:?})")]
    InvalidLength {
        /// Field label (`description`, `string choice name`, ...).
        field: &'static str,
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters.
        max: usize,
        /// Actual length in characters.
        length: usize,
        /// The rejected value.
        value: String,
    },

    /// A collection is over its ceiling (or has no room left for an addition).
    #[error("expected {field} to have at most {max} items, got {count}")]
    TooManyItems {
        /// Collection label (`options`, `choices`).
        field: &'static str,
        /// The ceiling.
        max: usize,
        /// Item count including the rejected addition.
        count: usize,
    },

    /// A choice value does not fit the owning option's kind.
    #[error("expected {field} to be {expected}, got {received} instead")]
    InvalidChoiceValue {
        /// Field label (`string choice value`, `integer choice value`).
        field: &'static str,
        /// Description of what is accepted.
        expected: &'static str,
        /// Description of the rejected value.
        received: String,
    },
}

/// Siblings of incompatible kinds were mixed under one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Sub-commands and sub-command groups share the root level.
    #[error("you cannot mix sub commands and sub command groups at the root level")]
    MixedSubcommandsAndGroups,
    /// Leaf options and sub-commands (or groups) share the root level.
    #[error("you cannot mix options with sub commands or sub command groups at the root level")]
    MixedOptionsAndSubcommands,
}

/// Errors raised by builder setters, adders, and serialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// Textual or size constraint failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A direct value or configurator result was not of the expected kind.
    #[error("expected to receive a {} builder back, got {received} instead", .expected.builder_name())]
    TypeMismatch {
        /// The kind the adder accepts.
        expected: ApplicationCommandOptionType,
        /// Best-effort description of what was received.
        received: String,
    },

    /// Sibling kinds were mixed.
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

/// Convenience alias for results with [`BuilderError`].
pub type Result<T> = std::result::Result<T, BuilderError>;
