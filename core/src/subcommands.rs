//! Sub-command and sub-command group builders.
//!
//! A group is a folder of sub-commands; a sub-command holds leaf options.
//! Neither nests any deeper.

use tracing::trace;

use crate::assertions::{validate_options_capacity, validate_required_parameters};
use crate::error::Result;
use crate::options::{ApplicationCommandOption, serialize_options};
use crate::shared::{
    NameAndDescription, SharedNameAndDescription, SharedSlashCommandOptions, append_child,
    resolve_child,
};
use crate::types::{ApiApplicationCommandOption, ApplicationCommandOptionType};

/// Folder of sub-commands (`type: 2`).
///
/// # Examples
///
/// ```
/// use slash_command_core::*;
///
/// let mut group = SlashCommandSubcommandGroupBuilder::new();
/// group
///     .set_name("admin")?
///     .set_description("admin tools")?
///     .add_subcommand_with(|mut sub| {
///         sub.set_name("ping")?.set_description("pings")?;
///         Ok(sub)
///     })?;
///
/// let json = group.to_json()?;
/// assert_eq!(u8::from(json.kind), 2);
/// # Ok::<(), BuilderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlashCommandSubcommandGroupBuilder {
    meta: NameAndDescription,
    options: Vec<ApplicationCommandOption>,
}

impl SlashCommandSubcommandGroupBuilder {
    /// Creates an empty group with no name or description set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an already-built sub-command.
    ///
    /// # Errors
    ///
    /// Fails if the group already holds 25 sub-commands, or if `subcommand`
    /// is not a sub-command.
    pub fn add_subcommand(
        &mut self,
        subcommand: impl Into<ApplicationCommandOption>,
    ) -> Result<&mut Self> {
        self.push_subcommand(|| Ok(subcommand.into()))?;
        Ok(self)
    }

    /// Adds the sub-command produced by `configure` from a fresh builder.
    pub fn add_subcommand_with<F, R>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(SlashCommandSubcommandBuilder) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        self.push_subcommand(|| configure(SlashCommandSubcommandBuilder::new()).map(Into::into))?;
        Ok(self)
    }

    /// Serializes the group and its sub-commands.
    pub fn to_json(&self) -> Result<ApiApplicationCommandOption> {
        let (name, description) =
            validate_required_parameters(self.meta.name(), self.meta.description(), &self.options)?;
        trace!(name, subcommands = self.options.len(), "serializing sub command group");

        Ok(ApiApplicationCommandOption {
            kind: ApplicationCommandOptionType::SubcommandGroup,
            name: name.to_string(),
            description: description.to_string(),
            required: None,
            choices: None,
            options: Some(serialize_options(&self.options)?),
        })
    }

    fn push_subcommand(
        &mut self,
        resolve: impl FnOnce() -> Result<ApplicationCommandOption>,
    ) -> Result<()> {
        validate_options_capacity(&self.options)?;
        let candidate = resolve_child(ApplicationCommandOptionType::Subcommand, resolve)?;
        append_child(&mut self.options, candidate);
        Ok(())
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandGroupBuilder {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.meta
    }
}

impl From<SlashCommandSubcommandGroupBuilder> for ApplicationCommandOption {
    fn from(group: SlashCommandSubcommandGroupBuilder) -> Self {
        ApplicationCommandOption::SubcommandGroup(group)
    }
}

/// Sub-command holding leaf options (`type: 1`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlashCommandSubcommandBuilder {
    meta: NameAndDescription,
    options: Vec<ApplicationCommandOption>,
}

impl SlashCommandSubcommandBuilder {
    /// Creates an empty sub-command with no name or description set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the sub-command and its options.
    pub fn to_json(&self) -> Result<ApiApplicationCommandOption> {
        let (name, description) =
            validate_required_parameters(self.meta.name(), self.meta.description(), &self.options)?;
        trace!(name, options = self.options.len(), "serializing sub command");

        Ok(ApiApplicationCommandOption {
            kind: ApplicationCommandOptionType::Subcommand,
            name: name.to_string(),
            description: description.to_string(),
            required: None,
            choices: None,
            options: Some(serialize_options(&self.options)?),
        })
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandBuilder {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.meta
    }
}

impl SharedSlashCommandOptions for SlashCommandSubcommandBuilder {
    type Chain<'a> = &'a mut Self;

    fn options(&self) -> &[ApplicationCommandOption] {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Vec<ApplicationCommandOption> {
        &mut self.options
    }

    fn chain(&mut self) -> &mut Self {
        self
    }
}

impl From<SlashCommandSubcommandBuilder> for ApplicationCommandOption {
    fn from(subcommand: SlashCommandSubcommandBuilder) -> Self {
        ApplicationCommandOption::Subcommand(subcommand)
    }
}
