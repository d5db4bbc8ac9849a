use crate::lookup::LookupResult;
use crate::Result;

/// Anything able to resolve the geolocation of an address.
///
/// The view controller only depends on this, [`Client`](crate::Client) being the
/// implementation talking to the service.
#[async_trait::async_trait]
pub trait Lookup {
    async fn lookup(&self, ip: Option<&str>) -> Result<LookupResult>;
}

#[async_trait::async_trait]
impl Lookup for crate::Client {
    async fn lookup(&self, ip: Option<&str>) -> Result<LookupResult> {
        crate::Client::lookup(self, ip).await
    }
}
