use rcz::{cli::run, errors::RczError, utils::show_error_dialog};

fn main() {
    match run() {
        Ok(()) => {}
        // User-driven cancellation is a deliberate, silent, zero-status exit.
        Err(RczError::Cancelled) => {}
        Err(error) => {
            show_error_dialog(&error);
            std::process::exit(1);
        }
    }
}
