use anyhow::{Error, anyhow};
use thiserror::Error;
use tracing::error;

/// A mistake on the caller's side (validation, illegal transition), as opposed to a storage or
/// internal failure.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct UserError(#[from] pub anyhow::Error);

pub fn is_user_error(error: &Error) -> bool {
    error.is::<UserError>() || error.chain().any(|cause| cause.is::<UserError>())
}

pub fn deduplicate_error_chain(error: &mut Error) {
    let mut error_chain: Vec<String> = error.chain().map(|err| err.to_string()).collect();

    error_chain.dedup();

    let mut error_chain = error_chain.into_iter().rev();
    let Some(root) = error_chain.next() else {
        return;
    };
    let mut new_error = anyhow!(root);

    for message in error_chain {
        new_error = new_error.context(message);
    }

    *error = new_error;
}

fn user_error_message(error: &Error) -> String {
    format!("## You seem to have made a mistake\n{error:?}")
}

fn internal_error_message(error: &Error) -> String {
    format!("## Internal Error\n{error:?}\nThe action was not completed; nothing was retried.")
}

/// Logs a failed action and writes a blocking notice to stderr. Failures are scoped to the
/// action that triggered them.
pub fn report_error(mut error: Error) {
    let message = if is_user_error(&error) {
        deduplicate_error_chain(&mut error);
        error!("User error while running command: {error:#}");
        user_error_message(&error)
    } else {
        deduplicate_error_chain(&mut error);
        error!("Failed to run command: {error:#}");
        internal_error_message(&error)
    };

    eprintln!("{message}");
}
