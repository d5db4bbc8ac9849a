/// Status reported by the lookup service
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl crate::Client {
    /// Checks that the lookup service is up.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the service cannot be reached or answers with a failure.
    pub async fn health(&self) -> crate::Result<Health> {
        self.get_request("/health", &[]).await
    }
}
