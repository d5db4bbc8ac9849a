//! Client for an IP geolocation lookup service and the view controller
//! rendering its results.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = iplookup::Client::new("http://localhost:8080")?;
//! let result = client.lookup(Some("8.8.8.8")).await?;
//! println!("{} is in {:?}", result.ip, result.country);
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod builder;
mod error;
pub mod health;
pub mod lookup;
pub mod prelude;
mod request;
pub mod view;

pub use error::{Error, FALLBACK_MESSAGE, UNEXPECTED_MESSAGE};

/// The default base url, pointing at a locally running lookup service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the lookup service HTTP API.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client targeting the given base url with the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`builder::Error::Reqwest`] if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<Self, builder::Error> {
        builder::ClientBuilder::default()
            .with_base_url(base_url)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
