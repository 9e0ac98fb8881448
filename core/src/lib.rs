//! Validating builders for slash command registration payloads.
//!
//! A command is assembled in place through setters and adders that check
//! every value before storing it, then serialized with `to_json()` into the
//! body a chat platform expects at registration time:
//!
//! - [`SlashCommandBuilder`]: top-level command holding leaf options,
//!   sub-commands, or sub-command groups.
//! - [`SlashCommandSubcommandGroupBuilder`]: folder of sub-commands.
//! - [`SlashCommandSubcommandBuilder`]: sub-command holding leaf options.
//! - Seven leaf option builders, from [`SlashCommandStringOption`] to
//!   [`SlashCommandMentionableOption`].
//!
//! Shared behavior lives in capability traits ([`SharedNameAndDescription`],
//! [`SharedSlashCommandOptions`], [`SlashCommandOptionBuilder`],
//! [`SharedOptionWithChoices`]); bring them into scope with
//! `use slash_command_core::*`.
//!
//! Failures surface as [`BuilderError`]: a [`ValidationError`] for a bad
//! value, `TypeMismatch` for a child of the wrong kind, or a
//! [`StructuralError`] for incompatible siblings. The [`assertions`] module
//! exposes the underlying checks, and [`formatters`] holds markdown and
//! mention helpers for message content.
//!
//! # Example
//!
//! ```
//! use slash_command_core::*;
//!
//! let mut command = SlashCommandBuilder::new();
//! command
//!     .set_name("echo")?
//!     .set_description("Replies with your input")?
//!     .add_string_option_with(|mut input| {
//!         input
//!             .set_name("input")?
//!             .set_description("The input to echo back")?
//!             .set_required(true);
//!         Ok(input)
//!     })?
//!     .add_boolean_option_with(|mut ephemeral| {
//!         ephemeral
//!             .set_name("ephemeral")?
//!             .set_description("Only you see the reply")?;
//!         Ok(ephemeral)
//!     })?;
//!
//! let body = serde_json::to_value(command.to_json()?).unwrap();
//! assert_eq!(body["options"][0]["type"], 3);
//! assert_eq!(body["options"][1]["required"], false);
//!
//! // Leaf options rule out sub-commands on the same command.
//! assert!(command.add_subcommand(SlashCommandSubcommandBuilder::new()).is_err());
//! # Ok::<(), BuilderError>(())
//! ```

pub mod assertions;
mod builder;
mod error;
pub mod formatters;
mod options;
mod shared;
mod subcommands;
mod types;

pub use builder::{
    SlashCommandBuilder, SlashCommandOptionsOnlyBuilder, SlashCommandSubcommandGroupsOnlyBuilder,
    SlashCommandSubcommandsOnlyBuilder,
};
pub use error::{BuilderError, Result, StructuralError, ValidationError};
pub use options::{
    ApplicationCommandOption, SharedOptionWithChoices, SlashCommandBooleanOption,
    SlashCommandChannelOption, SlashCommandIntegerOption, SlashCommandMentionableOption,
    SlashCommandOptionBase, SlashCommandOptionBuilder, SlashCommandRoleOption,
    SlashCommandStringOption, SlashCommandUserOption,
};
pub use shared::{NameAndDescription, SharedNameAndDescription, SharedSlashCommandOptions};
pub use subcommands::{SlashCommandSubcommandBuilder, SlashCommandSubcommandGroupBuilder};
pub use types::*;
