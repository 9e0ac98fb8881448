//! Root command builder and its restricted views.
//!
//! A root command holds either leaf options, or sub-commands, or
//! sub-command groups, never a mix. Once the first child is added the
//! adders hand back a view that only exposes the calls still legal:
//!
//! - leaf adders → [`SlashCommandOptionsOnlyBuilder`]
//! - [`add_subcommand`](SlashCommandBuilder::add_subcommand) →
//!   [`SlashCommandSubcommandsOnlyBuilder`]
//! - [`add_subcommand_group`](SlashCommandBuilder::add_subcommand_group) →
//!   [`SlashCommandSubcommandGroupsOnlyBuilder`]
//!
//! Calls made on the root builder directly are checked at runtime and fail
//! with a [`StructuralError`].

use tracing::debug;

use crate::assertions::{validate_options_capacity, validate_required_parameters};
use crate::error::{Result, StructuralError};
use crate::options::{ApplicationCommandOption, serialize_options};
use crate::shared::{
    NameAndDescription, SharedNameAndDescription, SharedSlashCommandOptions, append_child,
    resolve_child,
};
use crate::subcommands::{SlashCommandSubcommandBuilder, SlashCommandSubcommandGroupBuilder};
use crate::types::{ApiApplicationCommand, ApplicationCommandOptionType};

/// Builder for a top-level command.
///
/// # Examples
///
/// ```
/// use slash_command_core::*;
///
/// let mut command = SlashCommandBuilder::new();
/// command
///     .set_name("bot")?
///     .set_description("bot commands")?
///     .add_subcommand_group_with(|mut group| {
///         group
///             .set_name("admin")?
///             .set_description("admin tools")?
///             .add_subcommand_with(|mut sub| {
///                 sub.set_name("ping")?.set_description("pings")?;
///                 Ok(sub)
///             })?;
///         Ok(group)
///     })?;
///
/// let body = serde_json::to_value(command.to_json()?).unwrap();
/// assert_eq!(body["options"][0]["options"][0]["name"], "ping");
/// # Ok::<(), BuilderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlashCommandBuilder {
    meta: NameAndDescription,
    options: Vec<ApplicationCommandOption>,
}

impl SlashCommandBuilder {
    /// Creates an empty command with no name or description set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the command into the registration request body.
    ///
    /// Name, description, and the option ceiling are checked before any
    /// child is serialized.
    pub fn to_json(&self) -> Result<ApiApplicationCommand> {
        let (name, description) =
            validate_required_parameters(self.meta.name(), self.meta.description(), &self.options)?;
        debug!(command = name, options = self.options.len(), "serializing command");

        Ok(ApiApplicationCommand {
            name: name.to_string(),
            description: description.to_string(),
            options: serialize_options(&self.options)?,
        })
    }

    /// Adds an already-built sub-command group.
    ///
    /// # Errors
    ///
    /// Fails if the command already holds 25 children, holds a sub-command
    /// or a leaf option, or if `group` is not a sub-command group.
    pub fn add_subcommand_group(
        &mut self,
        group: impl Into<ApplicationCommandOption>,
    ) -> Result<SlashCommandSubcommandGroupsOnlyBuilder<'_>> {
        self.push_nested(ApplicationCommandOptionType::SubcommandGroup, || {
            Ok(group.into())
        })?;
        Ok(SlashCommandSubcommandGroupsOnlyBuilder { command: self })
    }

    /// Adds the sub-command group produced by `configure` from a fresh
    /// builder.
    pub fn add_subcommand_group_with<F, R>(
        &mut self,
        configure: F,
    ) -> Result<SlashCommandSubcommandGroupsOnlyBuilder<'_>>
    where
        F: FnOnce(SlashCommandSubcommandGroupBuilder) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        self.push_nested(ApplicationCommandOptionType::SubcommandGroup, || {
            configure(SlashCommandSubcommandGroupBuilder::new()).map(Into::into)
        })?;
        Ok(SlashCommandSubcommandGroupsOnlyBuilder { command: self })
    }

    /// Adds an already-built sub-command.
    ///
    /// # Errors
    ///
    /// Fails if the command already holds 25 children, holds a sub-command
    /// group or a leaf option, or if `subcommand` is not a sub-command.
    pub fn add_subcommand(
        &mut self,
        subcommand: impl Into<ApplicationCommandOption>,
    ) -> Result<SlashCommandSubcommandsOnlyBuilder<'_>> {
        self.push_nested(ApplicationCommandOptionType::Subcommand, || {
            Ok(subcommand.into())
        })?;
        Ok(SlashCommandSubcommandsOnlyBuilder { command: self })
    }

    /// Adds the sub-command produced by `configure` from a fresh builder.
    pub fn add_subcommand_with<F, R>(
        &mut self,
        configure: F,
    ) -> Result<SlashCommandSubcommandsOnlyBuilder<'_>>
    where
        F: FnOnce(SlashCommandSubcommandBuilder) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        self.push_nested(ApplicationCommandOptionType::Subcommand, || {
            configure(SlashCommandSubcommandBuilder::new()).map(Into::into)
        })?;
        Ok(SlashCommandSubcommandsOnlyBuilder { command: self })
    }

    fn push_nested(
        &mut self,
        expected: ApplicationCommandOptionType,
        resolve: impl FnOnce() -> Result<ApplicationCommandOption>,
    ) -> Result<()> {
        validate_options_capacity(&self.options)?;

        let sibling = match expected {
            ApplicationCommandOptionType::SubcommandGroup => ApplicationCommandOptionType::Subcommand,
            _ => ApplicationCommandOptionType::SubcommandGroup,
        };
        if self.options.iter().any(|o| o.kind() == sibling) {
            return Err(StructuralError::MixedSubcommandsAndGroups.into());
        }
        if self.options.iter().any(|o| o.kind().is_leaf()) {
            return Err(StructuralError::MixedOptionsAndSubcommands.into());
        }

        let candidate = resolve_child(expected, resolve)?;
        append_child(&mut self.options, candidate);
        Ok(())
    }
}

impl SharedNameAndDescription for SlashCommandBuilder {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.meta
    }
}

impl SharedSlashCommandOptions for SlashCommandBuilder {
    type Chain<'a> = SlashCommandOptionsOnlyBuilder<'a>;

    fn options(&self) -> &[ApplicationCommandOption] {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Vec<ApplicationCommandOption> {
        &mut self.options
    }

    fn chain(&mut self) -> SlashCommandOptionsOnlyBuilder<'_> {
        SlashCommandOptionsOnlyBuilder { command: self }
    }

    fn ensure_accepts_options(&self) -> Result<()> {
        if self.options.iter().any(|o| !o.kind().is_leaf()) {
            return Err(StructuralError::MixedOptionsAndSubcommands.into());
        }
        Ok(())
    }
}

/// View of a command that holds leaf options.
///
/// Exposes name/description setters, the leaf adders, and
/// [`to_json`](Self::to_json).
#[derive(Debug)]
pub struct SlashCommandOptionsOnlyBuilder<'a> {
    command: &'a mut SlashCommandBuilder,
}

impl SlashCommandOptionsOnlyBuilder<'_> {
    /// Serializes the underlying command.
    pub fn to_json(&self) -> Result<ApiApplicationCommand> {
        self.command.to_json()
    }
}

impl SharedNameAndDescription for SlashCommandOptionsOnlyBuilder<'_> {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.command.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.command.meta
    }
}

impl SharedSlashCommandOptions for SlashCommandOptionsOnlyBuilder<'_> {
    type Chain<'a>
        = &'a mut Self
    where
        Self: 'a;

    fn options(&self) -> &[ApplicationCommandOption] {
        &self.command.options
    }

    fn options_mut(&mut self) -> &mut Vec<ApplicationCommandOption> {
        &mut self.command.options
    }

    fn chain(&mut self) -> &mut Self {
        self
    }

    fn ensure_accepts_options(&self) -> Result<()> {
        self.command.ensure_accepts_options()
    }
}

/// View of a command that holds sub-commands.
#[derive(Debug)]
pub struct SlashCommandSubcommandsOnlyBuilder<'a> {
    command: &'a mut SlashCommandBuilder,
}

impl SlashCommandSubcommandsOnlyBuilder<'_> {
    /// Adds another already-built sub-command.
    pub fn add_subcommand(
        &mut self,
        subcommand: impl Into<ApplicationCommandOption>,
    ) -> Result<&mut Self> {
        self.command
            .push_nested(ApplicationCommandOptionType::Subcommand, || {
                Ok(subcommand.into())
            })?;
        Ok(self)
    }

    /// Adds another sub-command produced by `configure`.
    pub fn add_subcommand_with<F, R>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(SlashCommandSubcommandBuilder) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        self.command
            .push_nested(ApplicationCommandOptionType::Subcommand, || {
                configure(SlashCommandSubcommandBuilder::new()).map(Into::into)
            })?;
        Ok(self)
    }

    /// Serializes the underlying command.
    pub fn to_json(&self) -> Result<ApiApplicationCommand> {
        self.command.to_json()
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandsOnlyBuilder<'_> {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.command.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.command.meta
    }
}

/// View of a command that holds sub-command groups.
#[derive(Debug)]
pub struct SlashCommandSubcommandGroupsOnlyBuilder<'a> {
    command: &'a mut SlashCommandBuilder,
}

impl SlashCommandSubcommandGroupsOnlyBuilder<'_> {
    /// Adds another already-built sub-command group.
    pub fn add_subcommand_group(
        &mut self,
        group: impl Into<ApplicationCommandOption>,
    ) -> Result<&mut Self> {
        self.command
            .push_nested(ApplicationCommandOptionType::SubcommandGroup, || {
                Ok(group.into())
            })?;
        Ok(self)
    }

    /// Adds another sub-command group produced by `configure`.
    pub fn add_subcommand_group_with<F, R>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(SlashCommandSubcommandGroupBuilder) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        self.command
            .push_nested(ApplicationCommandOptionType::SubcommandGroup, || {
                configure(SlashCommandSubcommandGroupBuilder::new()).map(Into::into)
            })?;
        Ok(self)
    }

    /// Serializes the underlying command.
    pub fn to_json(&self) -> Result<ApiApplicationCommand> {
        self.command.to_json()
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandGroupsOnlyBuilder<'_> {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.command.meta
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.command.meta
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BuilderError;
    use crate::options::{SlashCommandBooleanOption, SlashCommandOptionBuilder};

    use super::*;

    fn flag(name: &str) -> SlashCommandBooleanOption {
        let mut option = SlashCommandBooleanOption::new();
        option
            .set_name(name)
            .unwrap()
            .set_description("flag")
            .unwrap()
            .set_required(false);
        option
    }

    fn sub(name: &str) -> SlashCommandSubcommandBuilder {
        let mut sub = SlashCommandSubcommandBuilder::new();
        sub.set_name(name).unwrap().set_description("sub").unwrap();
        sub
    }

    fn group(name: &str) -> SlashCommandSubcommandGroupBuilder {
        let mut group = SlashCommandSubcommandGroupBuilder::new();
        group.set_name(name).unwrap().set_description("group").unwrap();
        group
    }

    #[test]
    fn test_options_view_chains_into_same_command() {
        let mut command = SlashCommandBuilder::new();
        command
            .add_boolean_option(flag("a"))
            .unwrap()
            .set_name("cmd")
            .unwrap()
            .add_boolean_option(flag("b"))
            .unwrap();

        assert_eq!(command.name(), Some("cmd"));
        assert_eq!(command.options().len(), 2);
    }

    #[test]
    fn test_subcommands_view_chains() {
        let mut command = SlashCommandBuilder::new();
        command
            .add_subcommand(sub("one"))
            .unwrap()
            .add_subcommand(sub("two"))
            .unwrap()
            .set_description("described through the view")
            .unwrap();

        assert_eq!(command.options().len(), 2);
        assert_eq!(command.description(), Some("described through the view"));
    }

    #[test]
    fn test_group_after_subcommand_is_structural_error() {
        let mut command = SlashCommandBuilder::new();
        command.add_subcommand(sub("one")).unwrap();
        assert_eq!(
            command.add_subcommand_group(group("g")).unwrap_err(),
            BuilderError::Structural(StructuralError::MixedSubcommandsAndGroups)
        );
    }

    #[test]
    fn test_subcommand_after_group_is_structural_error() {
        let mut command = SlashCommandBuilder::new();
        command.add_subcommand_group(group("g")).unwrap();
        assert_eq!(
            command.add_subcommand(sub("one")).unwrap_err(),
            BuilderError::Structural(StructuralError::MixedSubcommandsAndGroups)
        );
    }

    #[test]
    fn test_options_and_subcommands_are_exclusive() {
        let mut command = SlashCommandBuilder::new();
        command.add_boolean_option(flag("a")).unwrap();
        assert_eq!(
            command.add_subcommand(sub("one")).unwrap_err(),
            BuilderError::Structural(StructuralError::MixedOptionsAndSubcommands)
        );

        let mut command = SlashCommandBuilder::new();
        command.add_subcommand_group(group("g")).unwrap();
        assert_eq!(
            command.add_boolean_option(flag("a")).unwrap_err(),
            BuilderError::Structural(StructuralError::MixedOptionsAndSubcommands)
        );
    }

    #[test]
    fn test_structural_check_runs_before_configurator() {
        let mut command = SlashCommandBuilder::new();
        command.add_subcommand(sub("one")).unwrap();

        let mut invoked = false;
        let result = command.add_subcommand_group_with(|g| {
            invoked = true;
            Ok(g)
        });
        assert!(result.is_err());
        assert!(!invoked);
    }

    #[test]
    fn test_wrong_kind_for_subcommand_group() {
        let mut command = SlashCommandBuilder::new();
        let err = command.add_subcommand_group(sub("one")).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::TypeMismatch {
                expected: ApplicationCommandOptionType::SubcommandGroup,
                ..
            }
        ));
        assert!(command.options().is_empty());
    }

    #[test]
    fn test_root_serialization_omits_type() {
        let mut command = SlashCommandBuilder::new();
        command.set_name("bare").unwrap().set_description("no options").unwrap();

        let value = serde_json::to_value(command.to_json().unwrap()).unwrap();
        assert!(value.get("type").is_none());
        assert_eq!(value["options"], serde_json::json!([]));
    }
}
