//! Renders lookups into the three regions of the page
//!
//! ```no_run
//! use iplookup::view::memory::MemoryDocument;
//! use iplookup::view::ViewController;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = iplookup::Client::new("http://localhost:8080")?;
//! let document = MemoryDocument::with_template();
//! let controller = ViewController::from_document(client, &document)?;
//! controller.init().await;
//! println!("{:?}", document.text("result-country"));
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod render;
pub mod surface;

pub use surface::{Document, Element, Error, ResultFields, Surface};

use crate::prelude::Lookup;
use std::sync::atomic::{AtomicU64, Ordering};

/// The region displayed once a lookup is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Results,
    Error,
}

/// What happened to the response of a lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered(State),
    /// A more recent lookup started while waiting, the response was dropped.
    Discarded,
}

/// Binds the lookups to the page.
///
/// Every failure ends up in the error region, none are returned.
pub struct ViewController<L, E> {
    lookup: L,
    surface: Surface<E>,
    sequence: AtomicU64,
}

impl<L, E> ViewController<L, E>
where
    L: Lookup,
    E: Element,
{
    pub fn new(lookup: L, surface: Surface<E>) -> Self {
        Self {
            lookup,
            surface,
            sequence: AtomicU64::new(0),
        }
    }

    /// Resolves the surface from the document and creates the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if the document lacks a required element.
    pub fn from_document<D>(lookup: L, document: &D) -> Result<Self, Error>
    where
        D: Document<Element = E>,
    {
        Surface::resolve(document).map(|surface| Self::new(lookup, surface))
    }

    /// Whether the page has a form to submit lookups from.
    pub fn accepts_submissions(&self) -> bool {
        self.surface.form.is_some()
    }

    /// Displays the geolocation of the caller, to be called once the page is ready.
    pub async fn init(&self) -> Outcome {
        self.handle_lookup(None).await
    }

    /// Handles a submission of the lookup form with the current value of the input.
    pub async fn submit_form(&self) -> Outcome {
        let raw = self
            .surface
            .input
            .as_ref()
            .map(Element::value)
            .unwrap_or_default();
        self.submit(&raw).await
    }

    /// Handles a submission with the given raw input, a blank one looks up the caller.
    pub async fn submit(&self, raw: &str) -> Outcome {
        let ip = raw.trim();
        self.handle_lookup((!ip.is_empty()).then_some(ip)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle_lookup(&self, ip: Option<&str>) -> Outcome {
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.show_loading();

        let result = self.lookup.lookup(ip).await;

        let latest = self.sequence.load(Ordering::SeqCst);
        if latest != ticket {
            tracing::debug!(
                "discarding response of lookup {ticket}, lookup {latest} started since"
            );
            return Outcome::Discarded;
        }

        match result {
            Ok(data) => {
                self.surface.show_results(&ResultFields::render(&data));
                Outcome::Rendered(State::Results)
            }
            Err(err) => {
                tracing::warn!("lookup failed: {err:?}");
                self.surface.show_error(&err.to_string());
                Outcome::Rendered(State::Error)
            }
        }
    }
}
