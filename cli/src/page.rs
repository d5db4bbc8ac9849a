use iplookup::lookup::{LookupOptions, LookupResult};
use iplookup::prelude::Lookup;
use iplookup::view::memory::{MemoryDocument, MemoryElement};
use iplookup::view::{Outcome, State, ViewController};
use iplookup::Client;

/// Sends every lookup with the same field filter.
pub struct FilteredLookup {
    client: Client,
    options: LookupOptions,
}

impl FilteredLookup {
    pub fn new(client: Client, options: LookupOptions) -> Self {
        Self { client, options }
    }
}

#[async_trait::async_trait]
impl Lookup for FilteredLookup {
    async fn lookup(&self, ip: Option<&str>) -> iplookup::Result<LookupResult> {
        self.client.lookup_with_options(ip, &self.options).await
    }
}

/// The lookup page, rendered on the terminal once each lookup is over.
pub struct Page {
    pub document: MemoryDocument,
    pub controller: ViewController<FilteredLookup, MemoryElement>,
}

impl Page {
    pub fn new(lookup: FilteredLookup) -> Result<Self, iplookup::view::Error> {
        let document = MemoryDocument::with_template();
        let controller = ViewController::from_document(lookup, &document)?;
        Ok(Self {
            document,
            controller,
        })
    }

    pub fn print(&self) {
        let stdout = std::io::stdout();
        if let Err(err) = crate::terminal::print_page(&self.document, &mut stdout.lock()) {
            tracing::error!("unable to write to stdout: {err:?}");
        }
    }
}

/// Exit code matching what ended up on the page.
pub fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Rendered(State::Results) => exitcode::OK,
        Outcome::Rendered(State::Error) => exitcode::UNAVAILABLE,
        Outcome::Discarded => exitcode::SOFTWARE,
    }
}
