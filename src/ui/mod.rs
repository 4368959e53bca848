use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Prints an error in the same shape `main` uses for fatal errors.
pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{} {message}", Style::error("Error:"));
}

/// Check if the inquire error is a user cancellation (Esc) or interruption (Ctrl+C).
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive command, treating Ctrl+C or Escape as a clean exit.
///
/// On cancellation a newline is printed to tidy the terminal and `Ok(())` is
/// returned; any other error is propagated.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}
