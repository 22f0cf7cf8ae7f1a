//! src/error.rs

use actix_web::http::StatusCode;
use actix_web::ResponseError;

pub type CrelyzorResult<T> = Result<T, Error>;

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error("Failed to read configuration")]
    Configuration(#[from] config::ConfigError),
    #[error("`{0}` is not a supported environment. Use either `local` or `production`.")]
    UnknownEnvironment(String),
    #[error("`{0}` is not a valid form endpoint")]
    InvalidEndpoint(String, #[source] anyhow::Error),
    #[error("I/O failure of the landing page server")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
