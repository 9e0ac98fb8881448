//! Command builder example.
//!
//! Demonstrates assembling a command tree with the validating builders,
//! serializing it into a registration body, and the errors raised when a
//! rule is broken.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p slash-command-demos --example build_command
//! ```

use slash_command_core::*;

fn main() -> Result<()> {
    // A flat command with leaf options
    let mut ban = SlashCommandBuilder::new();
    ban.set_name("ban")?
        .set_description("Ban a member")?
        .add_user_option_with(|mut member| {
            member
                .set_name("member")?
                .set_description("Who to ban")?
                .set_required(true);
            Ok(member)
        })?
        .add_integer_option_with(|mut days| {
            days.set_name("days")?
                .set_description("Days of messages to delete")?
                .add_choices([("none", 0), ("day", 1), ("week", 7)])?;
            Ok(days)
        })?;

    println!("=== Flat command ===");
    print_payload(&ban)?;

    // A command with a sub-command group
    let mut bot = SlashCommandBuilder::new();
    bot.set_name("bot")?
        .set_description("Bot administration")?
        .add_subcommand_group_with(|mut admin| {
            admin
                .set_name("admin")?
                .set_description("Admin tools")?
                .add_subcommand_with(|mut ping| {
                    ping.set_name("ping")?.set_description("Check latency")?;
                    Ok(ping)
                })?
                .add_subcommand_with(|mut reload| {
                    reload
                        .set_name("reload")?
                        .set_description("Reload a module")?
                        .add_string_option_with(|mut module| {
                            module
                                .set_name("module")?
                                .set_description("Module to reload")?
                                .add_choice("Moderation", "moderation")?
                                .add_choice("Music", "music")?;
                            Ok(module)
                        })?;
                    Ok(reload)
                })?;
            Ok(admin)
        })?;

    println!();
    println!("=== Nested command ===");
    print_payload(&bot)?;

    // Rule violations surface as typed errors
    println!();
    println!("=== Rejected calls ===");
    report("name with spaces", ban.set_name("ban member").map(drop));
    report(
        "sub-command next to options",
        ban.add_subcommand(SlashCommandSubcommandBuilder::new()).map(drop),
    );
    report(
        "sub-command next to a group",
        bot.add_subcommand(SlashCommandSubcommandBuilder::new()).map(drop),
    );
    report(
        "boolean handed to the string adder",
        SlashCommandSubcommandBuilder::new()
            .add_string_option(SlashCommandBooleanOption::new())
            .map(drop),
    );
    report(
        "text choice on an integer option",
        SlashCommandIntegerOption::new()
            .add_choice("one", "1")
            .map(drop),
    );
    report("serializing without a name", SlashCommandBuilder::new().to_json().map(drop));

    Ok(())
}

fn print_payload(command: &SlashCommandBuilder) -> Result<()> {
    let payload = command.to_json()?;
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("could not encode payload: {e}"),
    }
    Ok(())
}

fn report(label: &str, result: Result<()>) {
    match result {
        Ok(()) => println!("  {label}: accepted"),
        Err(e) => println!("  {label}: {e}"),
    }
}
