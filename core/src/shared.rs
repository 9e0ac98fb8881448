//! Capabilities shared by otherwise unrelated builders.
//!
//! - [`SharedNameAndDescription`] adds validated `set_name` /
//!   `set_description` to anything owning a [`NameAndDescription`].
//! - [`SharedSlashCommandOptions`] adds one pair of adders per leaf option
//!   kind to anything owning a child list.
//!
//! Both are traits with provided methods: a builder opts in by exposing its
//! component, and gets the behavior without sharing a base type with the
//! other builders.

use tracing::debug;

use crate::assertions::{validate_description, validate_name, validate_options_capacity};
use crate::error::{BuilderError, Result};
use crate::options::{
    ApplicationCommandOption, SlashCommandBooleanOption, SlashCommandChannelOption,
    SlashCommandIntegerOption, SlashCommandMentionableOption, SlashCommandRoleOption,
    SlashCommandStringOption, SlashCommandUserOption,
};
use crate::types::ApplicationCommandOptionType;

/// Name and description storage, unset until the setters succeed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAndDescription {
    name: Option<String>,
    description: Option<String>,
}

impl NameAndDescription {
    /// Returns the name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated name and description setters.
///
/// A failed call leaves the previous value in place.
///
/// # Examples
///
/// ```
/// use slash_command_core::*;
///
/// let mut option = SlashCommandUserOption::new();
/// option.set_name("target")?.set_description("Who to poke")?;
/// assert_eq!(option.name(), Some("target"));
///
/// assert!(option.set_name("Not Valid").is_err());
/// assert_eq!(option.name(), Some("target"));
/// # Ok::<(), BuilderError>(())
/// ```
pub trait SharedNameAndDescription {
    #[doc(hidden)]
    fn name_and_description(&self) -> &NameAndDescription;

    #[doc(hidden)]
    fn name_and_description_mut(&mut self) -> &mut NameAndDescription;

    /// Sets the name after checking it against `^[a-z0-9_-]{1,32}$`.
    fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        self.name_and_description_mut().name = Some(name);
        Ok(self)
    }

    /// Sets the description after checking it is 1–100 characters.
    fn set_description(&mut self, description: impl Into<String>) -> Result<&mut Self> {
        let description = description.into();
        validate_description(&description)?;
        self.name_and_description_mut().description = Some(description);
        Ok(self)
    }

    /// Returns the name, if set.
    fn name(&self) -> Option<&str> {
        self.name_and_description().name()
    }

    /// Returns the description, if set.
    fn description(&self) -> Option<&str> {
        self.name_and_description().description()
    }
}

/// Adders for the seven leaf option kinds.
///
/// Every kind has two adders: `add_<kind>_option` takes an already-built
/// option, `add_<kind>_option_with` hands a fresh builder to a configurator
/// and adds whatever it returns. Both check the 25-option ceiling before
/// anything else runs, and reject a value whose kind does not match the
/// adder with [`BuilderError::TypeMismatch`].
///
/// [`Chain`](Self::Chain) is what the adders return: the builder itself for
/// sub-commands, an options-only view for a root command.
///
/// # Examples
///
/// ```
/// use slash_command_core::*;
///
/// let mut sub = SlashCommandSubcommandBuilder::new();
/// sub.set_name("ban")?
///     .set_description("Ban a member")?
///     .add_user_option_with(|mut user| {
///         user.set_name("member")?.set_description("Who to ban")?.set_required(true);
///         Ok(user)
///     })?
///     .add_integer_option_with(|mut days| {
///         days.set_name("days")?
///             .set_description("Messages to delete")?
///             .add_choices([("none", 0), ("week", 7)])?;
///         Ok(days)
///     })?;
///
/// let json = sub.to_json()?;
/// assert_eq!(json.options.map(|o| o.len()), Some(2));
///
/// // The configurator must hand back the kind the adder expects.
/// let err = sub
///     .add_string_option_with(|_| Ok(SlashCommandBooleanOption::new()))
///     .unwrap_err();
/// assert!(matches!(err, BuilderError::TypeMismatch { .. }));
/// # Ok::<(), BuilderError>(())
/// ```
pub trait SharedSlashCommandOptions {
    /// Value the adders hand back for further chaining.
    type Chain<'a>
    where
        Self: 'a;

    #[doc(hidden)]
    fn options(&self) -> &[ApplicationCommandOption];

    #[doc(hidden)]
    fn options_mut(&mut self) -> &mut Vec<ApplicationCommandOption>;

    #[doc(hidden)]
    fn chain(&mut self) -> Self::Chain<'_>;

    /// Structural gate checked after the ceiling and before the new option
    /// is resolved.
    fn ensure_accepts_options(&self) -> Result<()> {
        Ok(())
    }

    /// Adds a boolean option.
    fn add_boolean_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::Boolean, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds a boolean option built by `configure`.
    fn add_boolean_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandBooleanOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::Boolean, || {
            configure(SlashCommandBooleanOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds a user option.
    fn add_user_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::User, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds a user option built by `configure`.
    fn add_user_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandUserOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::User, || {
            configure(SlashCommandUserOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds a channel option.
    fn add_channel_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::Channel, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds a channel option built by `configure`.
    fn add_channel_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandChannelOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::Channel, || {
            configure(SlashCommandChannelOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds a role option.
    fn add_role_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::Role, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds a role option built by `configure`.
    fn add_role_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandRoleOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::Role, || {
            configure(SlashCommandRoleOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds a mentionable option.
    fn add_mentionable_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::Mentionable, || {
            Ok(option.into())
        })?;
        Ok(self.chain())
    }

    /// Adds a mentionable option built by `configure`.
    fn add_mentionable_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandMentionableOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::Mentionable, || {
            configure(SlashCommandMentionableOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds a string option.
    fn add_string_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::String, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds a string option built by `configure`.
    fn add_string_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandStringOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::String, || {
            configure(SlashCommandStringOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }

    /// Adds an integer option.
    fn add_integer_option(
        &mut self,
        option: impl Into<ApplicationCommandOption>,
    ) -> Result<Self::Chain<'_>> {
        push_option(self, ApplicationCommandOptionType::Integer, || Ok(option.into()))?;
        Ok(self.chain())
    }

    /// Adds an integer option built by `configure`.
    fn add_integer_option_with<F, R>(&mut self, configure: F) -> Result<Self::Chain<'_>>
    where
        F: FnOnce(SlashCommandIntegerOption) -> Result<R>,
        R: Into<ApplicationCommandOption>,
    {
        push_option(self, ApplicationCommandOptionType::Integer, || {
            configure(SlashCommandIntegerOption::new()).map(Into::into)
        })?;
        Ok(self.chain())
    }
}

fn push_option<C>(
    container: &mut C,
    expected: ApplicationCommandOptionType,
    resolve: impl FnOnce() -> Result<ApplicationCommandOption>,
) -> Result<()>
where
    C: SharedSlashCommandOptions + ?Sized,
{
    validate_options_capacity(container.options())?;
    container.ensure_accepts_options()?;
    let candidate = resolve_child(expected, resolve)?;
    append_child(container.options_mut(), candidate);
    Ok(())
}

/// Produces the candidate child and checks its kind against `expected`.
pub(crate) fn resolve_child(
    expected: ApplicationCommandOptionType,
    resolve: impl FnOnce() -> Result<ApplicationCommandOption>,
) -> Result<ApplicationCommandOption> {
    let candidate = resolve()?;
    if candidate.kind() != expected {
        return Err(BuilderError::TypeMismatch {
            expected,
            received: candidate.describe(),
        });
    }
    Ok(candidate)
}

pub(crate) fn append_child(
    children: &mut Vec<ApplicationCommandOption>,
    child: ApplicationCommandOption,
) {
    debug!(
        kind = %child.kind(),
        name = child.name().unwrap_or("<unset>"),
        position = children.len(),
        "adding child option"
    );
    children.push(child);
}
