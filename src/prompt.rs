//! Interactive Prompt Session
//!
//! Drives the two-stage commit form: type + scope first, then summary +
//! description. The option building, preset matching and placeholder logic
//! are plain functions so they stay testable without a terminal; only the
//! thin `collect` wrapper talks to `inquire`.

use std::{fmt, path::Path};

use inquire::{
    CustomUserError, Editor, InquireError, Select, Text,
    autocompletion::{Autocomplete, Replacement},
    validator::{MaxLengthValidator, ValueRequiredValidator},
};

use crate::{
    config::Config,
    errors::{InputError, Result, RczError},
    message::CommitMessage,
    scopes::{discover_package_scopes, scope_suggestions},
};

const SCOPE_MAX_LEN: usize = 50;
const SUMMARY_MAX_LEN: usize = 70;
const DESCRIPTION_MAX_LEN: usize = 80;

/// One selectable commit type: the config key and its display title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeOption {
    pub key: String,
    pub title: String,
}

impl fmt::Display for TypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Builds the type-picker options in sorted-key order.
#[must_use]
pub fn build_type_options(config: &Config) -> Vec<TypeOption> {
    config
        .sorted_types()
        .into_iter()
        .map(|(key, commit_type)| TypeOption {
            key: key.to_string(),
            title: commit_type.title.clone(),
        })
        .collect()
}

/// Finds the option pre-selected by a preset type prefix: the first option
/// whose key starts with the prefix, in presentation order.
#[must_use]
pub fn preselect_index(options: &[TypeOption], preset: &str) -> Option<usize> {
    options
        .iter()
        .position(|option| option.key.starts_with(preset))
}

/// Placeholder for the scope field: up to the first three suggestions as an
/// example, or a generic hint when there are none.
#[must_use]
pub fn scope_placeholder(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "e.g. api, cli".to_string()
    } else {
        suggestions[..suggestions.len().min(3)].join(", ")
    }
}

/// Prefix autocompletion over the merged scope suggestions.
#[derive(Clone)]
struct ScopeCompleter {
    suggestions: Vec<String>,
}

impl Autocomplete for ScopeCompleter {
    fn get_suggestions(
        &mut self,
        input: &str,
    ) -> std::result::Result<Vec<String>, CustomUserError> {
        Ok(self
            .suggestions
            .iter()
            .filter(|suggestion| suggestion.starts_with(input))
            .cloned()
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> std::result::Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

fn map_prompt_error(error: InquireError) -> RczError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            RczError::Cancelled
        }
        other => RczError::Input(InputError::Prompt(other)),
    }
}

/// Runs the interactive session and collects a [`CommitMessage`].
///
/// Preset values are initial values only: a non-empty `preset_type` moves the
/// picker cursor to the first key it prefixes, and a non-empty
/// `preset_message` pre-fills the summary. Both remain editable.
///
/// # Errors
/// * `RczError::Cancelled` - The user aborted the session (Esc or Ctrl-C)
/// * `RczError::Input` - Any other prompt-engine failure
pub fn collect(
    config: &Config,
    preset_type: Option<&str>,
    preset_message: Option<&str>,
) -> Result<CommitMessage> {
    let options = build_type_options(config);

    let starting_cursor = preset_type
        .filter(|preset| !preset.is_empty())
        .and_then(|preset| preselect_index(&options, preset))
        .unwrap_or(0);

    let selected = Select::new("Type:", options)
        .with_starting_cursor(starting_cursor)
        .prompt()
        .map_err(map_prompt_error)?;

    let suggestions = scope_suggestions(discover_package_scopes(Path::new(".")), &config.scopes);
    let placeholder = scope_placeholder(&suggestions);

    let scope = Text::new("Scope:")
        .with_placeholder(&placeholder)
        .with_autocomplete(ScopeCompleter { suggestions })
        .with_validator(MaxLengthValidator::new(SCOPE_MAX_LEN))
        .prompt()
        .map_err(map_prompt_error)?;

    let mut summary_prompt = Text::new("Summary:")
        .with_placeholder("Brief description")
        .with_validator(ValueRequiredValidator::new("Required"))
        .with_validator(MaxLengthValidator::new(SUMMARY_MAX_LEN));

    if let Some(preset) = preset_message.filter(|preset| !preset.is_empty()) {
        summary_prompt = summary_prompt.with_initial_value(preset);
    }

    let subject = summary_prompt.prompt().map_err(map_prompt_error)?;

    let description = Editor::new("Details:")
        .with_help_message("Detailed description, leave empty to skip the body")
        .with_validator(MaxLengthValidator::new(DESCRIPTION_MAX_LEN))
        .prompt()
        .map_err(map_prompt_error)?;

    Ok(CommitMessage {
        commit_type: selected.key,
        scope,
        subject,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitType;

    fn config_with_keys(keys: &[&str]) -> Config {
        let mut config = Config::default();
        for key in keys {
            config.types.insert(
                (*key).to_string(),
                CommitType {
                    name: None,
                    emoji: None,
                    title: format!("title for {key}"),
                    semver: None,
                    description: None,
                },
            );
        }

        config
    }

    #[test]
    fn test_build_type_options_sorted_by_key() {
        let config = config_with_keys(&["wip", "feat", "build", "fix"]);
        let options = build_type_options(&config);

        let keys: Vec<&str> = options.iter().map(|option| option.key.as_str()).collect();
        assert_eq!(keys, vec!["build", "feat", "fix", "wip"]);
    }

    #[test]
    fn test_type_option_displays_title() {
        let config = config_with_keys(&["feat"]);
        let options = build_type_options(&config);

        assert_eq!(options[0].to_string(), "title for feat");
    }

    #[test]
    fn test_preselect_matches_key_prefix() {
        let config = config_with_keys(&["feat", "fix", "wip"]);
        let options = build_type_options(&config);

        assert_eq!(preselect_index(&options, "fi"), Some(1));
        assert_eq!(preselect_index(&options, "w"), Some(2));
    }

    #[test]
    fn test_preselect_first_match_wins() {
        // "f" prefixes both feat and fix; feat comes first in sorted order.
        let config = config_with_keys(&["fix", "feat"]);
        let options = build_type_options(&config);

        assert_eq!(preselect_index(&options, "f"), Some(0));
        assert_eq!(options[0].key, "feat");
    }

    #[test]
    fn test_preselect_no_match() {
        let config = config_with_keys(&["feat", "fix"]);
        let options = build_type_options(&config);

        assert_eq!(preselect_index(&options, "zzz"), None);
    }

    #[test]
    fn test_scope_placeholder_truncates_to_three() {
        let suggestions: Vec<String> = ["api", "cli", "web", "docs"]
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(scope_placeholder(&suggestions), "api, cli, web");
    }

    #[test]
    fn test_scope_placeholder_short_list() {
        let suggestions = vec!["api".to_string()];
        assert_eq!(scope_placeholder(&suggestions), "api");
    }

    #[test]
    fn test_scope_placeholder_generic_fallback() {
        assert_eq!(scope_placeholder(&[]), "e.g. api, cli");
    }

    #[test]
    fn test_cancel_maps_to_cancelled() {
        assert!(matches!(
            map_prompt_error(InquireError::OperationCanceled),
            RczError::Cancelled
        ));
        assert!(matches!(
            map_prompt_error(InquireError::OperationInterrupted),
            RczError::Cancelled
        ));
    }

    #[test]
    fn test_other_prompt_errors_are_input_errors() {
        assert!(matches!(
            map_prompt_error(InquireError::NotTTY),
            RczError::Input(InputError::Prompt(_))
        ));
    }
}
