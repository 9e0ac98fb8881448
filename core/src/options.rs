//! Leaf option builders and the child sum type.
//!
//! The seven leaf kinds share [`SlashCommandOptionBase`] (discriminant,
//! name, description, `required`). String and integer options also carry
//! choices through [`SharedOptionWithChoices`].
//!
//! Every child a container can hold (leaf options, sub-commands, groups) is
//! wrapped in [`ApplicationCommandOption`], whose [`kind`](ApplicationCommandOption::kind)
//! tag is what adders check before accepting a value.

use tracing::trace;

use crate::assertions::{
    validate_choice_name, validate_choice_value, validate_choices_capacity,
    validate_required_parameters,
};
use crate::error::Result;
use crate::shared::{NameAndDescription, SharedNameAndDescription};
use crate::subcommands::{SlashCommandSubcommandBuilder, SlashCommandSubcommandGroupBuilder};
use crate::types::{
    ApiApplicationCommandOption, ApiApplicationCommandOptionChoice,
    ApplicationCommandOptionType, ChoiceValue,
};

/// Fields shared by every leaf option.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandOptionBase {
    kind: ApplicationCommandOptionType,
    meta: NameAndDescription,
    required: bool,
}

impl SlashCommandOptionBase {
    fn new(kind: ApplicationCommandOptionType) -> Self {
        Self {
            kind,
            meta: NameAndDescription::default(),
            required: false,
        }
    }

    /// Returns the option discriminant.
    pub fn kind(&self) -> ApplicationCommandOptionType {
        self.kind
    }

    fn to_json(&self) -> Result<ApiApplicationCommandOption> {
        let (name, description) =
            validate_required_parameters::<()>(self.meta.name(), self.meta.description(), &[])?;
        trace!(kind = %self.kind, name, "serializing option");

        Ok(ApiApplicationCommandOption {
            kind: self.kind,
            name: name.to_string(),
            description: description.to_string(),
            required: Some(self.required),
            choices: None,
            options: None,
        })
    }
}

/// Behavior shared by the seven leaf option builders.
pub trait SlashCommandOptionBuilder: SharedNameAndDescription + Into<ApplicationCommandOption> {
    /// Discriminant emitted for this option kind.
    const KIND: ApplicationCommandOptionType;

    #[doc(hidden)]
    fn base(&self) -> &SlashCommandOptionBase;

    #[doc(hidden)]
    fn base_mut(&mut self) -> &mut SlashCommandOptionBase;

    /// Marks the option as required (defaults to `false`).
    fn set_required(&mut self, required: bool) -> &mut Self {
        self.base_mut().required = required;
        self
    }

    /// Returns whether the option is required.
    fn required(&self) -> bool {
        self.base().required
    }

    /// Serializes the option after re-validating its name and description.
    fn to_json(&self) -> Result<ApiApplicationCommandOption> {
        self.base().to_json()
    }
}

/// Choice support for string and integer options.
///
/// # Examples
///
/// ```
/// use slash_command_core::*;
///
/// let mut color = SlashCommandStringOption::new();
/// color
///     .set_name("color")?
///     .set_description("Pick a color")?
///     .add_choice("Red", "red")?
///     .add_choices(vec![("Green", "green"), ("Blue", "blue")])?;
/// assert_eq!(color.choices().map(|c| c.len()), Some(3));
///
/// // A number is not a valid value for a string option.
/// assert!(color.add_choice("Five", 5).is_err());
/// # Ok::<(), BuilderError>(())
/// ```
pub trait SharedOptionWithChoices: SlashCommandOptionBuilder {
    #[doc(hidden)]
    fn choices_mut(&mut self) -> &mut Option<Vec<ApiApplicationCommandOptionChoice>>;

    /// Returns the choices added so far, or `None` if none were added.
    fn choices(&self) -> Option<&[ApiApplicationCommandOptionChoice]>;

    /// Adds one choice.
    ///
    /// Checks, in order: the 25-choice ceiling, the name length (1–100),
    /// and the value against this option's kind.
    fn add_choice(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ChoiceValue>,
    ) -> Result<&mut Self> {
        let name = name.into();
        let value = value.into();

        validate_choices_capacity(self.choices().unwrap_or_default())?;
        validate_choice_name(Self::KIND, &name)?;
        validate_choice_value(Self::KIND, &value)?;

        self.choices_mut()
            .get_or_insert_with(Vec::new)
            .push(ApiApplicationCommandOptionChoice { name, value });
        Ok(self)
    }

    /// Adds several `(name, value)` choices in iteration order.
    ///
    /// Accepts anything iterable over pairs: arrays, vectors, `BTreeMap`s
    /// (name order), `HashMap`s (unspecified order). Stops at the first
    /// failure; choices added before it are kept.
    fn add_choices<I, N, V>(&mut self, choices: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<ChoiceValue>,
    {
        for (name, value) in choices {
            self.add_choice(name, value)?;
        }
        Ok(self)
    }
}

macro_rules! plain_option {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            base: SlashCommandOptionBase,
        }

        impl $name {
            /// Creates the option with no name or description set.
            pub fn new() -> Self {
                Self {
                    base: SlashCommandOptionBase::new(ApplicationCommandOptionType::$kind),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl SharedNameAndDescription for $name {
            fn name_and_description(&self) -> &NameAndDescription {
                &self.base.meta
            }

            fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
                &mut self.base.meta
            }
        }

        impl SlashCommandOptionBuilder for $name {
            const KIND: ApplicationCommandOptionType = ApplicationCommandOptionType::$kind;

            fn base(&self) -> &SlashCommandOptionBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut SlashCommandOptionBase {
                &mut self.base
            }
        }

        impl From<$name> for ApplicationCommandOption {
            fn from(option: $name) -> Self {
                ApplicationCommandOption::$kind(option)
            }
        }
    };
}

plain_option!(
    /// Boolean option (`type: 5`).
    SlashCommandBooleanOption => Boolean
);
plain_option!(
    /// User option (`type: 6`).
    SlashCommandUserOption => User
);
plain_option!(
    /// Channel option (`type: 7`).
    SlashCommandChannelOption => Channel
);
plain_option!(
    /// Role option (`type: 8`).
    SlashCommandRoleOption => Role
);
plain_option!(
    /// Mentionable (user or role) option (`type: 9`).
    SlashCommandMentionableOption => Mentionable
);

/// String option with optional choices (`type: 3`).
///
/// Choice values must be text of at most 100 characters.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandStringOption {
    base: SlashCommandOptionBase,
    choices: Option<Vec<ApiApplicationCommandOptionChoice>>,
}

/// Integer option with optional choices (`type: 4`).
///
/// Choice values must be finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandIntegerOption {
    base: SlashCommandOptionBase,
    choices: Option<Vec<ApiApplicationCommandOptionChoice>>,
}

macro_rules! choice_option {
    ($name:ident => $kind:ident) => {
        impl $name {
            /// Creates the option with no name, description, or choices set.
            pub fn new() -> Self {
                Self {
                    base: SlashCommandOptionBase::new(ApplicationCommandOptionType::$kind),
                    choices: None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl SharedNameAndDescription for $name {
            fn name_and_description(&self) -> &NameAndDescription {
                &self.base.meta
            }

            fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
                &mut self.base.meta
            }
        }

        impl SlashCommandOptionBuilder for $name {
            const KIND: ApplicationCommandOptionType = ApplicationCommandOptionType::$kind;

            fn base(&self) -> &SlashCommandOptionBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut SlashCommandOptionBase {
                &mut self.base
            }

            fn to_json(&self) -> Result<ApiApplicationCommandOption> {
                let mut json = self.base.to_json()?;
                json.choices = self.choices.clone();
                Ok(json)
            }
        }

        impl SharedOptionWithChoices for $name {
            fn choices_mut(&mut self) -> &mut Option<Vec<ApiApplicationCommandOptionChoice>> {
                &mut self.choices
            }

            fn choices(&self) -> Option<&[ApiApplicationCommandOptionChoice]> {
                self.choices.as_deref()
            }
        }

        impl From<$name> for ApplicationCommandOption {
            fn from(option: $name) -> Self {
                ApplicationCommandOption::$kind(option)
            }
        }
    };
}

choice_option!(SlashCommandStringOption => String);
choice_option!(SlashCommandIntegerOption => Integer);

/// Any child a container can hold, tagged by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationCommandOption {
    /// A sub-command.
    Subcommand(SlashCommandSubcommandBuilder),
    /// A sub-command group.
    SubcommandGroup(SlashCommandSubcommandGroupBuilder),
    /// A string option.
    String(SlashCommandStringOption),
    /// An integer option.
    Integer(SlashCommandIntegerOption),
    /// A boolean option.
    Boolean(SlashCommandBooleanOption),
    /// A user option.
    User(SlashCommandUserOption),
    /// A channel option.
    Channel(SlashCommandChannelOption),
    /// A role option.
    Role(SlashCommandRoleOption),
    /// A mentionable option.
    Mentionable(SlashCommandMentionableOption),
}

impl ApplicationCommandOption {
    /// Returns the discriminant of the wrapped builder.
    pub fn kind(&self) -> ApplicationCommandOptionType {
        match self {
            Self::Subcommand(_) => ApplicationCommandOptionType::Subcommand,
            Self::SubcommandGroup(_) => ApplicationCommandOptionType::SubcommandGroup,
            Self::String(_) => ApplicationCommandOptionType::String,
            Self::Integer(_) => ApplicationCommandOptionType::Integer,
            Self::Boolean(_) => ApplicationCommandOptionType::Boolean,
            Self::User(_) => ApplicationCommandOptionType::User,
            Self::Channel(_) => ApplicationCommandOptionType::Channel,
            Self::Role(_) => ApplicationCommandOptionType::Role,
            Self::Mentionable(_) => ApplicationCommandOptionType::Mentionable,
        }
    }

    /// Returns the name of the wrapped builder, if set.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Subcommand(b) => b.name(),
            Self::SubcommandGroup(b) => b.name(),
            Self::String(o) => o.name(),
            Self::Integer(o) => o.name(),
            Self::Boolean(o) => o.name(),
            Self::User(o) => o.name(),
            Self::Channel(o) => o.name(),
            Self::Role(o) => o.name(),
            Self::Mentionable(o) => o.name(),
        }
    }

    /// Serializes the wrapped builder.
    pub fn to_json(&self) -> Result<ApiApplicationCommandOption> {
        match self {
            Self::Subcommand(b) => b.to_json(),
            Self::SubcommandGroup(b) => b.to_json(),
            Self::String(o) => o.to_json(),
            Self::Integer(o) => o.to_json(),
            Self::Boolean(o) => o.to_json(),
            Self::User(o) => o.to_json(),
            Self::Channel(o) => o.to_json(),
            Self::Role(o) => o.to_json(),
            Self::Mentionable(o) => o.to_json(),
        }
    }

    pub(crate) fn describe(&self) -> String {
        let name = self
            .name()
            .map(|n| format!("{n:?}"))
            .unwrap_or_else(|| "Unknown".to_string());
        format!("{name} ({})", self.kind())
    }
}

/// Serializes children in order, stopping at the first invalid one.
pub(crate) fn serialize_options(
    options: &[ApplicationCommandOption],
) -> Result<Vec<ApiApplicationCommandOption>> {
    options.iter().map(ApplicationCommandOption::to_json).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::{BuilderError, ValidationError};

    use super::*;

    fn string_option() -> SlashCommandStringOption {
        let mut option = SlashCommandStringOption::new();
        option
            .set_name("query")
            .unwrap()
            .set_description("What to search for")
            .unwrap();
        option
    }

    fn integer_option() -> SlashCommandIntegerOption {
        let mut option = SlashCommandIntegerOption::new();
        option
            .set_name("count")
            .unwrap()
            .set_description("How many")
            .unwrap();
        option
    }

    #[test]
    fn test_plain_option_serializes_flat_shape() {
        let mut option = SlashCommandChannelOption::new();
        option
            .set_name("where")
            .unwrap()
            .set_description("Target channel")
            .unwrap()
            .set_required(true);

        assert_eq!(
            serde_json::to_value(option.to_json().unwrap()).unwrap(),
            json!({"type": 7, "name": "where", "description": "Target channel", "required": true})
        );
    }

    #[test]
    fn test_required_defaults_to_false() {
        let mut option = SlashCommandBooleanOption::new();
        assert!(!option.required());
        option.set_name("flag").unwrap().set_description("A flag").unwrap();
        assert_eq!(option.to_json().unwrap().required, Some(false));
    }

    #[test]
    fn test_to_json_requires_name_and_description() {
        let mut option = SlashCommandRoleOption::new();
        assert_eq!(
            option.to_json(),
            Err(BuilderError::Validation(ValidationError::Missing { field: "name" }))
        );

        option.set_name("role").unwrap();
        assert_eq!(
            option.to_json(),
            Err(BuilderError::Validation(ValidationError::Missing {
                field: "description"
            }))
        );
    }

    #[test]
    fn test_string_choice_round_trip() {
        let mut option = string_option();
        option.add_choice("a", "x").unwrap();

        assert_eq!(
            serde_json::to_value(option.to_json().unwrap()).unwrap(),
            json!({
                "type": 3,
                "name": "query",
                "description": "What to search for",
                "required": false,
                "choices": [{"name": "a", "value": "x"}]
            })
        );
    }

    #[test]
    fn test_integer_choice_accepts_number() {
        let mut option = integer_option();
        option.add_choice("a", 5).unwrap();

        let json = serde_json::to_value(option.to_json().unwrap()).unwrap();
        assert_eq!(json["choices"], json!([{"name": "a", "value": 5}]));
    }

    #[test]
    fn test_choice_value_must_match_kind() {
        let mut string = string_option();
        assert!(matches!(
            string.add_choice("b", 5),
            Err(BuilderError::Validation(ValidationError::InvalidChoiceValue { .. }))
        ));
        assert!(string.choices().is_none());

        let mut integer = integer_option();
        assert!(integer.add_choice("b", "five").is_err());
        assert!(integer.add_choice("inf", f64::INFINITY).is_err());
    }

    #[test]
    fn test_choice_name_length() {
        let mut option = string_option();
        assert!(option.add_choice("", "x").is_err());
        assert!(option.add_choice("n".repeat(101), "x").is_err());
        assert!(option.add_choice("n".repeat(100), "x").is_ok());
    }

    #[test]
    fn test_choices_absent_until_added() {
        let mut option = string_option();
        option.add_choices(Vec::<(String, String)>::new()).unwrap();
        let json = serde_json::to_value(option.to_json().unwrap()).unwrap();
        assert!(json.get("choices").is_none());
    }

    #[test]
    fn test_twenty_sixth_choice_fails() {
        let mut option = integer_option();
        for i in 0..25 {
            option.add_choice(format!("c{i}"), i).unwrap();
        }
        assert!(matches!(
            option.add_choice("c25", 25),
            Err(BuilderError::Validation(ValidationError::TooManyItems {
                field: "choices",
                count: 26,
                ..
            }))
        ));
        assert_eq!(option.choices().map(<[_]>::len), Some(25));
    }

    #[test]
    fn test_add_choices_keeps_prefix_on_failure() {
        let mut option = string_option();
        let result = option.add_choices([("one", "1"), ("", "2"), ("three", "3")]);
        assert!(result.is_err());

        let names: Vec<&str> = option
            .choices()
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["one"]);
    }

    #[test]
    fn test_add_choices_from_map_in_key_order() {
        let mut option = integer_option();
        let map = std::collections::BTreeMap::from([("b", 2), ("a", 1)]);
        option.add_choices(map).unwrap();

        let names: Vec<&str> = option
            .choices()
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_sum_type_reports_kind_and_name() {
        let option: ApplicationCommandOption = string_option().into();
        assert_eq!(option.kind(), ApplicationCommandOptionType::String);
        assert_eq!(option.name(), Some("query"));
        assert_eq!(option.describe(), "\"query\" (STRING)");

        let unnamed: ApplicationCommandOption = SlashCommandUserOption::new().into();
        assert_eq!(unnamed.describe(), "Unknown (USER)");
    }
}
