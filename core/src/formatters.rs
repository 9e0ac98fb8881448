//! Markdown and mention helpers for message content.
//!
//! Each helper wraps its input in the markup the chat client renders; none of
//! them escape the input.
//!
//! # Examples
//!
//! ```
//! use slash_command_core::formatters::*;
//!
//! assert_eq!(bold("done"), "**done**");
//! assert_eq!(user_mention(80351110224678912u64), "<@80351110224678912>");
//! assert_eq!(
//!     time(1_618_953_630, Some(TimestampStyles::RelativeTime)),
//!     "<t:1618953630:R>"
//! );
//! ```

use std::fmt;

/// Wraps content in a fenced code block, optionally tagged with a language.
pub fn code_block(content: impl fmt::Display, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("```{language}\n{content}\n```"),
        None => format!("```\n{content}\n```"),
    }
}

pub fn inline_code(content: impl fmt::Display) -> String {
    format!("`{content}`")
}

pub fn italic(content: impl fmt::Display) -> String {
    format!("_{content}_")
}

pub fn bold(content: impl fmt::Display) -> String {
    format!("**{content}**")
}

pub fn underscore(content: impl fmt::Display) -> String {
    format!("__{content}__")
}

pub fn strikethrough(content: impl fmt::Display) -> String {
    format!("~~{content}~~")
}

/// Single-line quote.
pub fn quote(content: impl fmt::Display) -> String {
    format!("> {content}")
}

/// Quote spanning the rest of the message.
pub fn block_quote(content: impl fmt::Display) -> String {
    format!(">>> {content}")
}

/// Wraps a URL in angle brackets so the client does not embed it.
pub fn hide_link_embed(url: impl fmt::Display) -> String {
    format!("<{url}>")
}

/// Masked link, with an optional hover title.
pub fn hyperlink(content: impl fmt::Display, url: impl fmt::Display, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("[{content}]({url} \"{title}\")"),
        None => format!("[{content}]({url})"),
    }
}

pub fn spoiler(content: impl fmt::Display) -> String {
    format!("||{content}||")
}

pub fn user_mention(user_id: impl fmt::Display) -> String {
    format!("<@{user_id}>")
}

/// Mention rendered with the member's server nickname.
pub fn member_nickname_mention(member_id: impl fmt::Display) -> String {
    format!("<@!{member_id}>")
}

pub fn channel_mention(channel_id: impl fmt::Display) -> String {
    format!("<#{channel_id}>")
}

pub fn role_mention(role_id: impl fmt::Display) -> String {
    format!("<@&{role_id}>")
}

/// Display styles for [`time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampStyles {
    /// `16:20`
    ShortTime,
    /// `16:20:30`
    LongTime,
    /// `20/04/2021`
    ShortDate,
    /// `20 April 2021`
    LongDate,
    /// `20 April 2021 16:20`
    ShortDateTime,
    /// `Tuesday, 20 April 2021 16:20`
    LongDateTime,
    /// `2 months ago`
    RelativeTime,
}

impl TimestampStyles {
    /// Style flag used in the timestamp markup.
    pub fn flag(self) -> char {
        match self {
            Self::ShortTime => 't',
            Self::LongTime => 'T',
            Self::ShortDate => 'd',
            Self::LongDate => 'D',
            Self::ShortDateTime => 'f',
            Self::LongDateTime => 'F',
            Self::RelativeTime => 'R',
        }
    }
}

impl fmt::Display for TimestampStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Timestamp the client renders in the reader's locale.
///
/// `seconds` is a Unix timestamp in whole seconds. Without a style the
/// client falls back to [`TimestampStyles::ShortDateTime`].
pub fn time(seconds: i64, style: Option<TimestampStyles>) -> String {
    match style {
        Some(style) => format!("<t:{seconds}:{style}>"),
        None => format!("<t:{seconds}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block() {
        assert_eq!(code_block("let x = 1;", None), "```\nlet x = 1;\n```");
        assert_eq!(code_block("let x = 1;", Some("rs")), "```rs\nlet x = 1;\n```");
    }

    #[test]
    fn test_text_styles() {
        assert_eq!(inline_code("cargo"), "`cargo`");
        assert_eq!(italic("soft"), "_soft_");
        assert_eq!(bold("loud"), "**loud**");
        assert_eq!(underscore("line"), "__line__");
        assert_eq!(strikethrough("gone"), "~~gone~~");
        assert_eq!(spoiler("ending"), "||ending||");
    }

    #[test]
    fn test_quotes() {
        assert_eq!(quote("one line"), "> one line");
        assert_eq!(block_quote("a\nb"), ">>> a\nb");
    }

    #[test]
    fn test_links() {
        let url = "https://example.com/docs";
        assert_eq!(hide_link_embed(url), "<https://example.com/docs>");
        assert_eq!(hyperlink("docs", url, None), "[docs](https://example.com/docs)");
        assert_eq!(
            hyperlink("docs", url, Some("Read me")),
            "[docs](https://example.com/docs \"Read me\")"
        );
    }

    #[test]
    fn test_mentions() {
        let id = 987654321987654321u64;
        assert_eq!(user_mention(id), "<@987654321987654321>");
        assert_eq!(member_nickname_mention(id), "<@!987654321987654321>");
        assert_eq!(channel_mention("123"), "<#123>");
        assert_eq!(role_mention("456"), "<@&456>");
    }

    #[test]
    fn test_time_styles() {
        assert_eq!(time(1_618_953_630, None), "<t:1618953630>");

        let expected = [
            (TimestampStyles::ShortTime, "<t:1618953630:t>"),
            (TimestampStyles::LongTime, "<t:1618953630:T>"),
            (TimestampStyles::ShortDate, "<t:1618953630:d>"),
            (TimestampStyles::LongDate, "<t:1618953630:D>"),
            (TimestampStyles::ShortDateTime, "<t:1618953630:f>"),
            (TimestampStyles::LongDateTime, "<t:1618953630:F>"),
            (TimestampStyles::RelativeTime, "<t:1618953630:R>"),
        ];
        for (style, markup) in expected {
            assert_eq!(time(1_618_953_630, Some(style)), markup);
        }
    }

    #[test]
    fn test_time_before_epoch() {
        assert_eq!(time(-60, Some(TimestampStyles::LongDate)), "<t:-60:D>");
    }
}
