use std::process::ExitCode;

use thiserror::Error;
use todo_core::ApiError;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CliError {
    /// 1 for bad user input, 2 when talking to the service failed.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Input(_) => ExitCode::from(1),
            CliError::Api(_) => ExitCode::from(2),
        }
    }
}
