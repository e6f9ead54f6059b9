//! Commit Message Rendering
//!
//! Turns a collected [`CommitMessage`] into the ordered list of `-m` message
//! fragments, the argv for `git commit`, and the human preview shown at the
//! final confirmation. Rendering is pure: the same message and config always
//! produce byte-identical output.

use std::fmt::Write;

use crate::config::Config;

/// One commit's worth of user answers. Ephemeral: built by the prompt
/// session, rendered once, then discarded.
///
/// `subject` is never empty; the prompt validates it before construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitMessage {
    /// Key into `Config.types`.
    pub commit_type: String,

    /// Affected subsystem/package, possibly empty.
    pub scope: String,

    pub subject: String,

    /// Free-form multi-line body, possibly empty.
    pub description: String,
}

/// Renders the message fragments: the main commit line first, then one
/// fragment per non-empty description line, in original order.
///
/// The main line is `type(scope): <emoji> subject`, where the scope segment
/// is omitted when the scope is empty and the emoji prefix is the first
/// character of the selected type's title. An unknown type key or an empty
/// title omits the prefix without leaving a leading space.
#[must_use]
pub fn render_fragments(message: &CommitMessage, config: &Config) -> Vec<String> {
    let mut main_line = message.commit_type.clone();

    if !message.scope.is_empty() {
        let _ = write!(main_line, "({})", message.scope);
    }

    let emoji = config
        .types
        .get(&message.commit_type)
        .and_then(|commit_type| commit_type.title.chars().next())
        .map(|first| format!("{first} "))
        .unwrap_or_default();

    let _ = write!(main_line, ": {emoji}{}", message.subject);

    let mut fragments = vec![main_line];
    fragments.extend(
        message
            .description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );

    fragments
}

/// Builds the argument vector for `git`, one `-m` flag per fragment.
#[must_use]
pub fn commit_args(fragments: &[String]) -> Vec<String> {
    let mut args = vec!["commit".to_string()];

    for fragment in fragments {
        args.push("-m".to_string());
        args.push(fragment.clone());
    }

    args
}

/// Renders the one-command preview shown before execution.
///
/// Continuation `-m` arguments go on their own indented lines; the
/// indentation is display-only and never part of the executed command.
/// Fragments are debug-quoted so embedded spaces and quotes read
/// unambiguously.
#[must_use]
pub fn preview(fragments: &[String]) -> String {
    let mut parts = fragments.iter();

    let mut rendered = match parts.next() {
        Some(main_line) => format!("git commit -m {main_line:?}"),
        None => return "git commit".to_string(),
    };

    for fragment in parts {
        let _ = write!(rendered, "\n    -m {fragment:?}");
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommitType, Config};

    fn config_with(key: &str, title: &str) -> Config {
        let mut config = Config::default();
        config.types.insert(
            key.to_string(),
            CommitType {
                name: None,
                emoji: None,
                title: title.to_string(),
                semver: None,
                description: None,
            },
        );

        config
    }

    fn message(commit_type: &str, scope: &str, subject: &str, description: &str) -> CommitMessage {
        CommitMessage {
            commit_type: commit_type.to_string(),
            scope: scope.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_render_scoped_subject_only() {
        let config = config_with("feat", "🚀 Enhancements");
        let fragments = render_fragments(&message("feat", "cli", "add flag", ""), &config);

        assert_eq!(fragments, vec!["feat(cli): 🚀 add flag"]);
    }

    #[test]
    fn test_render_description_lines_become_fragments() {
        let config = config_with("fix", "🩹 Fixes");
        let fragments = render_fragments(&message("fix", "", "x", "line1\n\nline2"), &config);

        assert_eq!(fragments, vec!["fix: 🩹 x", "line1", "line2"]);
    }

    #[test]
    fn test_render_trims_description_lines() {
        let config = config_with("fix", "🩹 Fixes");
        let fragments =
            render_fragments(&message("fix", "", "x", "  padded  \n   \nplain"), &config);

        assert_eq!(fragments, vec!["fix: 🩹 x", "padded", "plain"]);
    }

    #[test]
    fn test_render_empty_title_omits_emoji_prefix() {
        let config = config_with("fix", "");
        let fragments = render_fragments(&message("fix", "", "x", ""), &config);

        assert_eq!(fragments, vec!["fix: x"]);
    }

    #[test]
    fn test_render_unknown_type_omits_emoji_prefix() {
        let config = Config::default();
        let fragments = render_fragments(&message("oops", "core", "x", ""), &config);

        assert_eq!(fragments, vec!["oops(core): x"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = config_with("feat", "🚀 增强功能 / Enhancements");
        let msg = message("feat", "cli", "add flag", "body line\n\nsecond");

        assert_eq!(
            render_fragments(&msg, &config),
            render_fragments(&msg, &config)
        );
    }

    #[test]
    fn test_commit_args_one_m_per_fragment() {
        let fragments = vec!["feat: 🚀 x".to_string(), "body".to_string()];

        assert_eq!(
            commit_args(&fragments),
            vec!["commit", "-m", "feat: 🚀 x", "-m", "body"]
        );
    }

    #[test]
    fn test_preview_indents_continuation_fragments() {
        let fragments = vec![
            "feat(cli): 🚀 add flag".to_string(),
            "line1".to_string(),
            "line2".to_string(),
        ];

        assert_eq!(
            preview(&fragments),
            "git commit -m \"feat(cli): 🚀 add flag\"\n    -m \"line1\"\n    -m \"line2\""
        );
    }

    #[test]
    fn test_preview_quotes_embedded_spaces() {
        let fragments = vec!["fix: two words".to_string()];
        assert_eq!(preview(&fragments), "git commit -m \"fix: two words\"");
    }
}
