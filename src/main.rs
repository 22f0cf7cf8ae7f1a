//! main.rs

use crelyzor::configuration::get_configuration;
use crelyzor::error::CrelyzorResult;
use crelyzor::startup::Application;
use crelyzor::telemetry::{get_subscriber, init_subscriber};
use std::fmt::{Debug, Display};
use tokio::task::JoinError;

#[tokio::main]
async fn main() -> CrelyzorResult<()> {
    let subscriber = get_subscriber("crelyzor".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Landing page is being served");

    let outcome = tokio::spawn(application.run_until_stopped()).await;
    report_exit("Landing page server", outcome);

    Ok(())
}

fn report_exit(task_name: &str, outcome: Result<Result<(), impl Debug + Display>, JoinError>) {
    match outcome {
        Ok(Ok(())) => {
            tracing::info!("{} has exited", task_name)
        }
        Ok(Err(e)) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} failed",
                task_name
            )
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} task failed to complete",
                task_name
            )
        }
    }
}
