use crate::page::{exit_code, FilteredLookup, Page};
use iplookup::lookup::{Field, LookupOptions};
use iplookup::Client;

#[derive(clap::Parser)]
pub struct Command {
    /// Address to look up. Looks up the address of the caller when missing.
    ip: Option<String>,
    /// Only return the given field, can be repeated.
    /// Valid values: country, iso_code, in_eu, city, region, latitude, longitude,
    /// timezone, asn, organization.
    #[clap(short, long = "field")]
    fields: Vec<Field>,
}

impl Command {
    pub async fn execute(self, client: Client) -> i32 {
        let options = LookupOptions::default().with_fields(self.fields);
        let page = match Page::new(FilteredLookup::new(client, options)) {
            Ok(page) => page,
            Err(err) => {
                tracing::error!("unable to build page: {err:?}");
                return exitcode::SOFTWARE;
            }
        };
        let outcome = match self.ip {
            Some(ref ip) => page.controller.submit(ip).await,
            None => page.controller.init().await,
        };
        page.print();
        exit_code(outcome)
    }
}
