use crate::page::{FilteredLookup, Page};
use iplookup::lookup::{Field, LookupOptions};
use iplookup::view::surface::IP_INPUT;
use iplookup::Client;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Looks up the caller, then every line typed is submitted as a new lookup.
/// An empty line looks up the caller again.
#[derive(clap::Parser)]
pub struct Command {
    /// Only return the given field, can be repeated.
    #[clap(short, long = "field")]
    fields: Vec<Field>,
}

fn prompt() {
    let mut stderr = std::io::stderr();
    if let Err(err) = write!(stderr, "> ").and_then(|_| stderr.flush()) {
        tracing::error!("unable to write to stderr: {err:?}");
    }
}

/// Submits every line of the input as the content of the ip field, until the end of the input.
pub(crate) async fn submit_lines<R>(page: &Page, input: R) -> i32
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        prompt();
        match lines.next_line().await {
            Ok(Some(line)) => {
                page.document.set_value(IP_INPUT, line);
                page.controller.submit_form().await;
                page.print();
            }
            Ok(None) => return exitcode::OK,
            Err(err) => {
                tracing::error!("unable to read from stdin: {err:?}");
                return exitcode::IOERR;
            }
        }
    }
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

        page.controller.init().await;
        page.print();

        submit_lines(&page, BufReader::new(tokio::io::stdin())).await
    }
}
