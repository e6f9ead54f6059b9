//! User-Facing Output Helpers
//!
//! Consistent formatting for error, success and informational messages, plus
//! the blocking error dialog shown before the process exits with status 1.

use std::fmt::Display;

use inquire::Confirm;

use crate::errors::RczError;

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The emoji prefix for each message type (e.g., "🚨 ERROR")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;
}

// Define the message types
struct Error;
struct Success;

impl MessageType for Error {
    const PREFIX: &'static str = "🚨 ERROR";
    const TO_STDERR: bool = true;
}

impl MessageType for Success {
    const PREFIX: &'static str = "✅ SUCCESS";
}

/// # `format_message_with_suggestion`
/// Formats a message with suggestion.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
/// * `suggestion` - The suggestion for the message.
///
/// ## Returns
/// * String - The formatted message.
fn format_message_with_suggestion<T: MessageType>(
    title: &str,
    details: &str,
    suggestion: &str,
) -> String {
    format!("{}: {title}\n\n{details}\n\n{suggestion}", T::PREFIX)
}

fn print_message<T: MessageType>(message: &str) {
    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error.
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    print_message::<Error>(&format_message_with_suggestion::<Error>(
        title, details, suggestion,
    ));
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    print_message::<Success>(&format!("{}: {title}\n\n{details}", Success::PREFIX));
}

/// # `format_list`
/// Formats a list of items with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `items`: The list of items to format.
///
/// ## Returns
/// * String - A formatted string representation of the list.
pub fn format_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// # `show_error_dialog`
/// Prints the error with its category and suggestion, then blocks on an
/// acknowledgement dialog.
///
/// The dialog degrades gracefully when no terminal is attached (CI, pipes):
/// the printed error alone is the report, and the caller's exit code is
/// unaffected.
pub fn show_error_dialog(error: &RczError) {
    print_error(error.category(), &error.to_string(), error.suggestion());

    let _ = Confirm::new("Acknowledge and exit?")
        .with_default(true)
        .prompt();
}
