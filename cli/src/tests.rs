use crate::app::Command;
use clap::Parser;
use mockito::Matcher;

const ATTRIBUTION: &str = "IP Geolocation by DB-IP (https://db-ip.com)";

pub(crate) fn init() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter("iplookup=debug,iplookup_cli=trace")
        .with_test_writer()
        .try_init()
    {
        tracing::debug!("tracer error: {:?}", err);
    }
}

fn parse(url: &str, args: &[&str]) -> Command {
    let mut argv = vec!["iplookup-cli", "--base-url", url];
    argv.extend_from_slice(args);
    Command::try_parse_from(argv).unwrap()
}

async fn run(url: &str, args: &[&str]) -> i32 {
    let cmd = parse(url, args);
    let client = cmd.build_client().unwrap();
    cmd.execute(client).await
}

#[tokio::test]
async fn lookup_with_fields() {
    init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ip".into(), "8.8.8.8".into()),
            Matcher::UrlEncoded("return".into(), "country".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"ip": "8.8.8.8", "country": "United States", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;
    let code = run(&server.url(), &["lookup", "8.8.8.8", "--field", "country"]).await;
    assert_eq!(code, exitcode::OK);
    m.assert_async().await;
}

#[tokio::test]
async fn lookup_own_address() {
    init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(format!(
            r#"{{"ip": "203.0.113.7", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;
    let code = run(&server.url(), &["lookup"]).await;
    assert_eq!(code, exitcode::OK);
    m.assert_async().await;
}

#[tokio::test]
async fn lookup_invalid_address() {
    init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::UrlEncoded("ip".into(), "invalid".into()))
        .with_status(400)
        .with_body(format!(
            r#"{{"error": "Invalid IP address", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;
    let code = run(&server.url(), &["lookup", "invalid"]).await;
    assert_eq!(code, exitcode::UNAVAILABLE);
    m.assert_async().await;
}

#[tokio::test]
async fn health() {
    init();
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;
    let code = run(&server.url(), &["health"]).await;
    assert_eq!(code, exitcode::OK);
    m.assert_async().await;
}

#[test]
fn rejects_unknown_field() {
    let argv = ["iplookup-cli", "lookup", "--field", "postal"];
    assert!(Command::try_parse_from(argv).is_err());
}

#[tokio::test]
async fn interactive_submits_each_line() {
    use crate::page::{FilteredLookup, Page};
    use iplookup::lookup::LookupOptions;

    init();
    let mut server = mockito::Server::new_async().await;
    let own = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(format!(
            r#"{{"ip": "203.0.113.7", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .expect(2)
        .create_async()
        .await;
    let google = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::UrlEncoded("ip".into(), "8.8.8.8".into()))
        .with_status(200)
        .with_body(format!(
            r#"{{"ip": "8.8.8.8", "asn": 15169, "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;
    let invalid = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::UrlEncoded("ip".into(), "invalid".into()))
        .with_status(400)
        .with_body(format!(
            r#"{{"error": "Invalid IP address", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;

    let client = iplookup::Client::new(server.url()).unwrap();
    let page = Page::new(FilteredLookup::new(client, LookupOptions::default())).unwrap();
    page.controller.init().await;

    // the blank line looks up the caller again
    let input: &[u8] = b" 8.8.8.8 \n\ninvalid\n";
    let code = crate::interactive::submit_lines(&page, input).await;
    assert_eq!(code, exitcode::OK);
    assert!(page.document.is_visible("error"));
    assert_eq!(
        page.document.text("error-message").as_deref(),
        Some("Invalid IP address")
    );
    // the texts of the last results are left behind the hidden region
    assert_eq!(
        page.document.text("result-ip").as_deref(),
        Some("203.0.113.7")
    );
    assert_eq!(page.document.text("result-asn").as_deref(), Some("-"));

    own.assert_async().await;
    google.assert_async().await;
    invalid.assert_async().await;
}

#[tokio::test]
async fn interactive_stops_at_end_of_input() {
    use crate::page::{FilteredLookup, Page};
    use iplookup::lookup::LookupOptions;

    init();
    let client = iplookup::Client::new("http://127.0.0.1:1").unwrap();
    let page = Page::new(FilteredLookup::new(client, LookupOptions::default())).unwrap();
    let input: &[u8] = b"";
    let code = crate::interactive::submit_lines(&page, input).await;
    assert_eq!(code, exitcode::OK);
    assert!(!page.document.is_visible("loading"));
}
