use iplookup::builder::{ClientBuilder, Error as BuilderError};
use iplookup::Client;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    base_url: Option<String>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let reader = std::fs::File::open(path).map_err(|err| err.to_string())?;
        let result = serde_json::from_reader(reader).map_err(|err| err.to_string())?;
        Ok(result)
    }

    /// Loads the file when it exists, a missing default file is not an error.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, String> {
        if explicit || path.exists() {
            Self::from_path(path)
        } else {
            tracing::debug!("no configuration file at {path:?}, using environment");
            Ok(Self::default())
        }
    }

    /// The base url given on the command line wins over the file, which wins over the environment.
    pub fn build(self, base_url: Option<String>) -> Result<Client, BuilderError> {
        let mut builder = ClientBuilder::from_env();
        if let Some(value) = base_url.or(self.base_url) {
            builder.set_base_url(value);
        }
        builder.build()
    }
}
