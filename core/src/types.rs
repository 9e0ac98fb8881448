//! Wire type definitions for command registration payloads.
//!
//! These are the plain-data shapes produced by the builders' `to_json()`
//! methods. Field names and discriminant values follow the registration API
//! exactly; the types serialize with [`serde`] into the JSON body the remote
//! service expects.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Version of the registration API the payloads target.
pub const API_VERSION: u8 = 8;

/// Discriminant of a command option.
///
/// Serialized as its integer value (`SUB_COMMAND = 1` through
/// `MENTIONABLE = 9`).
///
/// # Examples
///
/// ```
/// use slash_command_core::ApplicationCommandOptionType;
///
/// let kind = ApplicationCommandOptionType::Boolean;
/// assert_eq!(u8::from(kind), 5);
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "5");
/// assert!(kind.is_leaf());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ApplicationCommandOptionType {
    /// A nested command holding leaf options.
    Subcommand,
    /// A folder of sub-commands.
    SubcommandGroup,
    /// String parameter, may carry choices.
    String,
    /// Integer parameter, may carry choices.
    Integer,
    /// Boolean flag.
    Boolean,
    /// User reference.
    User,
    /// Channel reference.
    Channel,
    /// Role reference.
    Role,
    /// User or role reference.
    Mentionable,
}

impl ApplicationCommandOptionType {
    /// Returns `true` for the seven leaf kinds (everything except
    /// sub-commands and groups).
    pub fn is_leaf(self) -> bool {
        !matches!(self, Self::Subcommand | Self::SubcommandGroup)
    }

    /// Returns `true` for the kinds that accept choices.
    pub fn supports_choices(self) -> bool {
        matches!(self, Self::String | Self::Integer)
    }

    /// Name of the builder type that produces this kind.
    pub fn builder_name(self) -> &'static str {
        match self {
            Self::Subcommand => "SlashCommandSubcommandBuilder",
            Self::SubcommandGroup => "SlashCommandSubcommandGroupBuilder",
            Self::String => "SlashCommandStringOption",
            Self::Integer => "SlashCommandIntegerOption",
            Self::Boolean => "SlashCommandBooleanOption",
            Self::User => "SlashCommandUserOption",
            Self::Channel => "SlashCommandChannelOption",
            Self::Role => "SlashCommandRoleOption",
            Self::Mentionable => "SlashCommandMentionableOption",
        }
    }
}

impl From<ApplicationCommandOptionType> for u8 {
    fn from(kind: ApplicationCommandOptionType) -> Self {
        match kind {
            ApplicationCommandOptionType::Subcommand => 1,
            ApplicationCommandOptionType::SubcommandGroup => 2,
            ApplicationCommandOptionType::String => 3,
            ApplicationCommandOptionType::Integer => 4,
            ApplicationCommandOptionType::Boolean => 5,
            ApplicationCommandOptionType::User => 6,
            ApplicationCommandOptionType::Channel => 7,
            ApplicationCommandOptionType::Role => 8,
            ApplicationCommandOptionType::Mentionable => 9,
        }
    }
}

impl TryFrom<u8> for ApplicationCommandOptionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Subcommand,
            2 => Self::SubcommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            other => return Err(format!("unknown application command option type: {other}")),
        })
    }
}

impl fmt::Display for ApplicationCommandOptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Subcommand => "SUB_COMMAND",
            Self::SubcommandGroup => "SUB_COMMAND_GROUP",
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::User => "USER",
            Self::Channel => "CHANNEL",
            Self::Role => "ROLE",
            Self::Mentionable => "MENTIONABLE",
        };
        f.write_str(label)
    }
}

/// Value of a choice: text for string options, a number for integer options.
///
/// Whole numbers serialize as JSON integers (`5`, not `5.0`).
///
/// # Examples
///
/// ```
/// use slash_command_core::ChoiceValue;
///
/// assert_eq!(serde_json::to_string(&ChoiceValue::from(5)).unwrap(), "5");
/// assert_eq!(serde_json::to_string(&ChoiceValue::from(2.5)).unwrap(), "2.5");
/// assert_eq!(serde_json::to_string(&ChoiceValue::from("x")).unwrap(), "\"x\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceValue {
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl ChoiceValue {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::String(s) => format!("string {s:?}"),
            Self::Number(n) => format!("number {n}"),
        }
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for ChoiceValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Largest integer magnitude an `f64` holds without rounding (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Fails for values beyond [`MAX_SAFE_INTEGER`], which `f64` cannot
/// represent exactly.
impl TryFrom<i64> for ChoiceValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
            return Err(ValidationError::InvalidChoiceValue {
                field: "integer choice value",
                expected: "an integer between -(2^53 - 1) and 2^53 - 1",
                received: format!("number {value}"),
            });
        }
        Ok(Self::Number(value as f64))
    }
}

impl From<u32> for ChoiceValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Serialize for ChoiceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for ChoiceValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            String(String),
            Number(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::String(s) => Self::String(s),
            Raw::Number(n) => Self::Number(n),
        })
    }
}

/// A fixed name/value pair offered for a string or integer option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiApplicationCommandOptionChoice {
    /// Display name (1–100 characters).
    pub name: String,
    /// Value sent back when the choice is picked.
    pub value: ChoiceValue,
}

/// Serialized option: a leaf option, a sub-command, or a sub-command group.
///
/// Leaf options carry `required` (and `choices` for string/integer kinds
/// once a choice was added); sub-commands and groups carry `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiApplicationCommandOption {
    /// Option discriminant.
    #[serde(rename = "type")]
    pub kind: ApplicationCommandOptionType,
    /// Option name.
    pub name: String,
    /// Option description.
    pub description: String,
    /// Whether the user must supply the option (leaf options only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Predefined choices (string and integer options only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ApiApplicationCommandOptionChoice>>,
    /// Nested options (sub-commands and groups only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApiApplicationCommandOption>>,
}

/// Serialized root command: the registration request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiApplicationCommand {
    /// Command name.
    pub name: String,
    /// Command description.
    pub description: String,
    /// Top-level options, sub-commands, or groups.
    pub options: Vec<ApiApplicationCommandOption>,
}
