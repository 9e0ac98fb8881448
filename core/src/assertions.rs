//! Validation engine shared by every builder.
//!
//! Each assertion is a pure function returning [`ValidationError`] with the
//! field, the constraint, and the offending value. Builders call these
//! before mutating, and again from `to_json()`.
//!
//! # Examples
//!
//! ```
//! use slash_command_core::assertions::*;
//!
//! assert!(validate_name("ping").is_ok());
//! assert!(validate_name("Ping").is_err());
//! assert!(validate_description("").is_err());
//!
//! let (name, description) = validate_required_parameters(Some("ping"), Some("pong"), &[0u8; 3]).unwrap();
//! assert_eq!((name, description), ("ping", "pong"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{ApplicationCommandOptionType, ChoiceValue};

/// Maximum number of options, sub-commands, or groups in one container.
pub const MAX_OPTIONS: usize = 25;
/// Maximum number of choices on one option.
pub const MAX_CHOICES: usize = 25;
/// Maximum name length in characters.
pub const MAX_NAME_LENGTH: usize = 32;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 100;
/// Maximum choice name length in characters.
pub const MAX_CHOICE_NAME_LENGTH: usize = 100;
/// Maximum string choice value length in characters.
pub const MAX_CHOICE_VALUE_LENGTH: usize = 100;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]{1,32}$").expect("static regex must compile"));

/// Validates a command or option name against `^[a-z0-9_-]{1,32}$`.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName {
            value: name.to_string(),
        })
    }
}

/// Validates a description is 1–100 characters.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    validate_length("description", description, 1, MAX_DESCRIPTION_LENGTH)
}

/// Validates a child collection holds at most [`MAX_OPTIONS`] entries.
pub fn validate_max_options_length<T>(options: &[T]) -> Result<(), ValidationError> {
    validate_count("options", options.len(), MAX_OPTIONS)
}

/// Validates a choice collection holds at most [`MAX_CHOICES`] entries.
pub fn validate_max_choices_length<T>(choices: &[T]) -> Result<(), ValidationError> {
    validate_count("choices", choices.len(), MAX_CHOICES)
}

/// Validates one more child fits under [`MAX_OPTIONS`].
pub fn validate_options_capacity<T>(options: &[T]) -> Result<(), ValidationError> {
    validate_count("options", options.len() + 1, MAX_OPTIONS)
}

/// Validates one more choice fits under [`MAX_CHOICES`].
pub fn validate_choices_capacity<T>(choices: &[T]) -> Result<(), ValidationError> {
    validate_count("choices", choices.len() + 1, MAX_CHOICES)
}

/// Validates the fields every composite needs before serialization.
///
/// Runs [`validate_name`], [`validate_description`], and
/// [`validate_max_options_length`] in that order and hands back the
/// validated name and description.
pub fn validate_required_parameters<'a, T>(
    name: Option<&'a str>,
    description: Option<&'a str>,
    options: &[T],
) -> Result<(&'a str, &'a str), ValidationError> {
    let name = name.ok_or(ValidationError::Missing { field: "name" })?;
    validate_name(name)?;

    let description = description.ok_or(ValidationError::Missing {
        field: "description",
    })?;
    validate_description(description)?;

    validate_max_options_length(options)?;

    Ok((name, description))
}

/// Validates a choice name is 1–100 characters.
pub fn validate_choice_name(
    kind: ApplicationCommandOptionType,
    name: &str,
) -> Result<(), ValidationError> {
    let field = match kind {
        ApplicationCommandOptionType::Integer => "integer choice name",
        _ => "string choice name",
    };
    validate_length(field, name, 1, MAX_CHOICE_NAME_LENGTH)
}

/// Validates a choice value against the owning option's kind.
///
/// String options take text of at most 100 characters; integer options take
/// finite numbers. Any other pairing is rejected.
pub fn validate_choice_value(
    kind: ApplicationCommandOptionType,
    value: &ChoiceValue,
) -> Result<(), ValidationError> {
    match (kind, value) {
        (ApplicationCommandOptionType::String, ChoiceValue::String(s)) => {
            validate_length("string choice value", s, 0, MAX_CHOICE_VALUE_LENGTH)
        }
        (ApplicationCommandOptionType::String, other) => Err(ValidationError::InvalidChoiceValue {
            field: "string choice value",
            expected: "a string",
            received: other.describe(),
        }),
        (ApplicationCommandOptionType::Integer, ChoiceValue::Number(n)) if n.is_finite() => Ok(()),
        (ApplicationCommandOptionType::Integer, other) => Err(ValidationError::InvalidChoiceValue {
            field: "integer choice value",
            expected: "a finite number",
            received: other.describe(),
        }),
        (_, other) => Err(ValidationError::InvalidChoiceValue {
            field: "choice value",
            expected: "an option kind that supports choices",
            received: other.describe(),
        }),
    }
}

fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength {
            field,
            min,
            max,
            length,
            value: value.to_string(),
        })
    }
}

fn validate_count(field: &'static str, count: usize, max: usize) -> Result<(), ValidationError> {
    if count <= max {
        Ok(())
    } else {
        Err(ValidationError::TooManyItems { field, max, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_pattern() {
        let longest = "x".repeat(32);
        for name in ["a", "ping", "user-info", "snake_case", "v2", longest.as_str()] {
            assert!(validate_name(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_validate_name_rejects_bad_names() {
        let too_long = "x".repeat(33);
        for name in ["", "Ping", "has space", "dot.name", "émoji", too_long.as_str()] {
            assert_eq!(
                validate_name(name),
                Err(ValidationError::InvalidName {
                    value: name.to_string()
                }),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_description_bounds() {
        assert!(validate_description("d").is_ok());
        assert!(validate_description(&"d".repeat(100)).is_ok());
        assert!(validate_description("").is_err());

        let err = validate_description(&"d".repeat(101)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidLength {
                field: "description",
                length: 101,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_description_counts_characters() {
        assert!(validate_description(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_max_lengths_and_capacity() {
        let full = vec![(); MAX_OPTIONS];
        assert!(validate_max_options_length(&full).is_ok());
        assert!(validate_options_capacity(&full[..24]).is_ok());
        assert_eq!(
            validate_options_capacity(&full),
            Err(ValidationError::TooManyItems {
                field: "options",
                max: 25,
                count: 26
            })
        );

        let over = vec![(); MAX_CHOICES + 1];
        assert!(validate_max_choices_length(&over).is_err());
        assert!(validate_choices_capacity(&over[..25]).is_err());
    }

    #[test]
    fn test_required_parameters_missing_fields() {
        let none: [(); 0] = [];
        assert_eq!(
            validate_required_parameters(None, Some("d"), &none),
            Err(ValidationError::Missing { field: "name" })
        );
        assert_eq!(
            validate_required_parameters(Some("n"), None, &none),
            Err(ValidationError::Missing {
                field: "description"
            })
        );
        assert!(validate_required_parameters(Some("n"), Some("d"), &[(); 26]).is_err());
    }

    #[test]
    fn test_choice_value_matches_kind() {
        use ApplicationCommandOptionType as Kind;

        assert!(validate_choice_value(Kind::String, &ChoiceValue::from("x")).is_ok());
        assert!(validate_choice_value(Kind::String, &ChoiceValue::from("")).is_ok());
        assert!(validate_choice_value(Kind::String, &ChoiceValue::from("x".repeat(101))).is_err());
        assert!(validate_choice_value(Kind::String, &ChoiceValue::from(5)).is_err());

        assert!(validate_choice_value(Kind::Integer, &ChoiceValue::from(5)).is_ok());
        assert!(validate_choice_value(Kind::Integer, &ChoiceValue::from(f64::NAN)).is_err());
        assert!(validate_choice_value(Kind::Integer, &ChoiceValue::from(f64::INFINITY)).is_err());
        assert!(validate_choice_value(Kind::Integer, &ChoiceValue::from("5")).is_err());

        assert!(validate_choice_value(Kind::Boolean, &ChoiceValue::from(1)).is_err());
    }

    #[test]
    fn test_choice_name_label_follows_kind() {
        let err = validate_choice_name(ApplicationCommandOptionType::Integer, "").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidLength {
                field: "integer choice name",
                ..
            }
        ));
        assert!(validate_choice_name(ApplicationCommandOptionType::String, &"n".repeat(100)).is_ok());
    }
}
