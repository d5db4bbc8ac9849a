//! The elements the controller renders to, resolved once from a [`Document`]

pub const LOADING: &str = "loading";
pub const RESULTS: &str = "results";
pub const ERROR: &str = "error";
pub const ERROR_MESSAGE: &str = "error-message";
pub const LOOKUP_FORM: &str = "lookup-form";
pub const IP_INPUT: &str = "ip-input";
/// Identifiers of the fields of the results region, in display order.
pub const RESULT_FIELDS: [&str; 12] = [
    "result-ip",
    "result-country",
    "result-iso-code",
    "result-in-eu",
    "result-city",
    "result-region",
    "result-latitude",
    "result-longitude",
    "result-timezone",
    "result-asn",
    "result-organization",
    "result-attribution",
];

/// A handle on a single element of a document.
pub trait Element {
    fn set_text(&self, text: &str);
    fn set_hidden(&self, hidden: bool);
    /// The current value, for input elements.
    fn value(&self) -> String;
}

/// Gives access to the elements of a page by identifier.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("element {0:?} not found in document")]
    MissingElement(&'static str),
}

fn require<D: Document>(document: &D, id: &'static str) -> Result<D::Element, Error> {
    document
        .element_by_id(id)
        .ok_or(Error::MissingElement(id))
}

/// One value per field of the results region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultFields<T> {
    pub ip: T,
    pub country: T,
    pub iso_code: T,
    pub in_eu: T,
    pub city: T,
    pub region: T,
    pub latitude: T,
    pub longitude: T,
    pub timezone: T,
    pub asn: T,
    pub organization: T,
    pub attribution: T,
}

impl<T> ResultFields<T> {
    fn try_from_fn<F, Err>(mut build: F) -> Result<Self, Err>
    where
        F: FnMut(&'static str) -> Result<T, Err>,
    {
        let [
            ip,
            country,
            iso_code,
            in_eu,
            city,
            region,
            latitude,
            longitude,
            timezone,
            asn,
            organization,
            attribution,
        ] = RESULT_FIELDS;
        Ok(Self {
            ip: build(ip)?,
            country: build(country)?,
            iso_code: build(iso_code)?,
            in_eu: build(in_eu)?,
            city: build(city)?,
            region: build(region)?,
            latitude: build(latitude)?,
            longitude: build(longitude)?,
            timezone: build(timezone)?,
            asn: build(asn)?,
            organization: build(organization)?,
            attribution: build(attribution)?,
        })
    }

    /// Iterates over the element identifiers and their value, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        RESULT_FIELDS.into_iter().zip([
            &self.ip,
            &self.country,
            &self.iso_code,
            &self.in_eu,
            &self.city,
            &self.region,
            &self.latitude,
            &self.longitude,
            &self.timezone,
            &self.asn,
            &self.organization,
            &self.attribution,
        ])
    }
}

impl<E: Element> ResultFields<E> {
    pub(crate) fn fill(&self, texts: &ResultFields<String>) {
        for ((_, element), (_, text)) in self.iter().zip(texts.iter()) {
            element.set_text(text);
        }
    }
}

/// Every element the controller touches.
#[derive(Clone, Debug)]
pub struct Surface<E> {
    pub loading: E,
    pub results: E,
    pub error: E,
    pub error_message: E,
    pub fields: ResultFields<E>,
    /// The form is optional, without it only the initial lookup is displayed.
    pub form: Option<E>,
    pub input: Option<E>,
}

impl<E: Element> Surface<E> {
    /// Resolves all the elements at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] with the first required identifier not found.
    pub fn resolve<D>(document: &D) -> Result<Self, Error>
    where
        D: Document<Element = E>,
    {
        Ok(Self {
            loading: require(document, LOADING)?,
            results: require(document, RESULTS)?,
            error: require(document, ERROR)?,
            error_message: require(document, ERROR_MESSAGE)?,
            fields: ResultFields::try_from_fn(|id| require(document, id))?,
            form: document.element_by_id(LOOKUP_FORM),
            input: document.element_by_id(IP_INPUT),
        })
    }

    pub(crate) fn show_loading(&self) {
        self.results.set_hidden(true);
        self.error.set_hidden(true);
        self.loading.set_hidden(false);
    }

    pub(crate) fn show_results(&self, texts: &ResultFields<String>) {
        self.loading.set_hidden(true);
        self.error.set_hidden(true);
        self.fields.fill(texts);
        self.results.set_hidden(false);
    }

    pub(crate) fn show_error(&self, message: &str) {
        self.loading.set_hidden(true);
        self.results.set_hidden(true);
        self.error_message.set_text(message);
        self.error.set_hidden(false);
    }
}
