//! The plumbing shared by the requests sent to the lookup service

use crate::lookup::LookupError;
use crate::Error;

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.bytes().await?;
    if status.is_success() {
        serde_json::from_slice(&body).map_err(Error::from)
    } else {
        Err(rejection(status.as_u16(), &body))
    }
}

fn rejection(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<LookupError>(body) {
        Ok(LookupError { error, .. }) if !error.is_empty() => Error::Service {
            status,
            message: error,
        },
        Ok(_) => Error::Rejected { status },
        Err(err) => {
            tracing::debug!("unable to read error body: {err}");
            Error::Rejected { status }
        }
    }
}

impl crate::Client {
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let res = self.inner.get(uri).query(params).send().await?;
        read_response(res).await
    }
}
