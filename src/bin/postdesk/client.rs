#![deny(clippy::all, clippy::pedantic)]

use postdesk::config::{LoadError, Settings};
use postdesk::infra::error::InfraError;
use postdesk::infra::http::{ApiClient, ClientError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{notice}: {source}")]
    Notice {
        notice: &'static str,
        #[source]
        source: ClientError,
    },
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to render output: {0}")]
    Render(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: ApiClient,
    pub page_size: u32,
    pub json: bool,
}

impl Ctx {
    pub fn new(settings: &Settings, json: bool) -> Result<Self, CliError> {
        let client = ApiClient::from_settings(&settings.api)?;
        Ok(Self {
            client,
            page_size: settings.api.page_size.get(),
            json,
        })
    }
}
