//! src/configuration.rs

use crate::error::{CrelyzorResult, Error};
use crate::waitlist_client::WaitlistClient;
use reqwest::Url;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub waitlist: WaitlistSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// The two hosted form endpoints every signup is delivered to.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct WaitlistSettings {
    pub primary_endpoint: String,
    pub secondary_endpoint: String,
}

impl WaitlistSettings {
    pub fn client(&self) -> CrelyzorResult<WaitlistClient> {
        let primary = parse_endpoint(&self.primary_endpoint)?;
        let secondary = parse_endpoint(&self.secondary_endpoint)?;
        Ok(WaitlistClient::new(primary, secondary))
    }
}

fn parse_endpoint(endpoint: &str) -> CrelyzorResult<Url> {
    Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint(endpoint.to_owned(), e.into()))
}

pub fn get_configuration() -> CrelyzorResult<Settings> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_WAITLIST__PRIMARY_ENDPOINT=https://...` sets `Settings.waitlist.primary_endpoint`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Error::UnknownEnvironment(s)),
        }
    }
}
