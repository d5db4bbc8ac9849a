use std::borrow::Cow;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URL of the lookup service and optionally
/// customizing the inner `reqwest::ClientBuilder`.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` targeting [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL)
    /// with the default `reqwest::ClientBuilder`.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::DEFAULT_BASE_URL),
            client_builder: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// Uses `IPLOOKUP_BASE_URL` for the endpoint and falls back to the default
    /// base url if it's not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("IPLOOKUP_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::DEFAULT_BASE_URL));

        Self {
            base_url,
            client_builder: None,
        }
    }
}

impl ClientBuilder {
    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        let base_url = match self.base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
        tracing::debug!("building client for {base_url}");
        Ok(crate::Client {
            base_url,
            inner: builder.build()?,
        })
    }
}
