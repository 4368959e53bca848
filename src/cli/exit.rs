use exitcode::ExitCode;

use crate::translation::TranslateError;

/// Chooses the process exit code for an error that reached `main`.
///
/// Translation failures map by kind; other errors are classified by the
/// first recognised cause in their chain.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if let Some(translate_error) = err.downcast_ref::<TranslateError>() {
        return match translate_error {
            TranslateError::MissingCredential { .. } => exitcode::CONFIG,
            TranslateError::MissingInput { .. } => exitcode::USAGE,
            TranslateError::Call(_) => exitcode::UNAVAILABLE,
        };
    }

    for cause in err.chain() {
        if cause.is::<toml::de::Error>() {
            return exitcode::CONFIG;
        }
        if cause.is::<std::io::Error>() {
            return exitcode::IOERR;
        }
    }

    exitcode::SOFTWARE
}
