//! Resources needed to resolve the geolocation of an IP address
//!
//! ```no_run
//! use iplookup::lookup::{Field, LookupOptions};
//!
//! # async fn example(client: &iplookup::Client) -> iplookup::Result<()> {
//! let options = LookupOptions::default()
//!     .with_field(Field::Country)
//!     .with_field(Field::Asn);
//! let result = client.lookup_with_options(Some("1.1.1.1"), &options).await?;
//! println!("{:?}", result.country);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

/// The path of the lookup endpoint
pub const LOOKUP_PATH: &str = "/api/ip";

/// Geolocation data of a resolved IP address
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LookupResult {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_eu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Credit line of the data source, always displayed as is.
    pub attribution: String,
}

impl LookupResult {
    pub fn new(ip: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            country: None,
            iso_code: None,
            in_eu: None,
            city: None,
            region: None,
            latitude: None,
            longitude: None,
            timezone: None,
            asn: None,
            organization: None,
            attribution: attribution.into(),
        }
    }

    /// Checks the values the type system can't.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`](crate::Error::MalformedResponse)
    /// when the attribution is blank.
    pub fn validate(self) -> crate::Result<Self> {
        if self.attribution.trim().is_empty() {
            return Err(crate::Error::MalformedResponse("blank attribution".into()));
        }
        Ok(self)
    }
}

/// Body returned by the service when a lookup fails
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LookupError {
    pub error: String,
    // only the message is needed to report the failure
    #[serde(default)]
    pub attribution: String,
}

/// The optional fields the service can be asked to restrict its answer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    IsoCode,
    InEu,
    City,
    Region,
    Latitude,
    Longitude,
    Timezone,
    Asn,
    Organization,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Self::Country,
        Self::IsoCode,
        Self::InEu,
        Self::City,
        Self::Region,
        Self::Latitude,
        Self::Longitude,
        Self::Timezone,
        Self::Asn,
        Self::Organization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::IsoCode => "iso_code",
            Self::InEu => "in_eu",
            Self::City => "city",
            Self::Region => "region",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Timezone => "timezone",
            Self::Asn => "asn",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown field {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    // the service compares names case insensitively
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == lower)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

/// Optional parameters of a lookup
#[derive(Clone, Debug, Default)]
pub struct LookupOptions {
    fields: Vec<Field>,
}

impl LookupOptions {
    /// Asks the service to only return the given field, next to the ip and the attribution.
    ///
    /// Can be called several times.
    pub fn set_field(&mut self, field: Field) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.set_field(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().for_each(|field| self.set_field(field));
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn to_http_params(&self, ip: Option<&str>) -> Vec<(&'static str, String)> {
        let mut res = Vec::with_capacity(self.fields.len() + 1);
        // an empty address means the caller
        if let Some(ip) = ip.filter(|ip| !ip.is_empty()) {
            res.push(("ip", ip.to_string()));
        }
        for field in self.fields.iter() {
            res.push(("return", field.as_str().to_string()));
        }
        res
    }
}

impl crate::Client {
    /// Resolves the geolocation of the given address, or of the caller when `None`.
    ///
    /// The address isn't validated locally, the service decides whether it's valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`](crate::Error::Service) with the message of the
    /// service when it rejects the address, or another [`crate::Error`] when the
    /// service cannot be reached or answers something unexpected.
    pub async fn lookup(&self, ip: Option<&str>) -> crate::Result<LookupResult> {
        self.lookup_with_options(ip, &LookupOptions::default()).await
    }

    /// Same as [`lookup`](crate::Client::lookup) with field filtering.
    pub async fn lookup_with_options(
        &self,
        ip: Option<&str>,
        options: &LookupOptions,
    ) -> crate::Result<LookupResult> {
        let result: LookupResult = self
            .get_request(LOOKUP_PATH, &options.to_http_params(ip))
            .await?;
        result.validate()
    }
}
