mod common;

use common::{init, ATTRIBUTION};
use iplookup::view::memory::MemoryDocument;
use iplookup::view::{Outcome, State, ViewController};
use iplookup::Client;
use mockito::Matcher;

#[tokio::test]
async fn page_lifecycle() {
    init();
    let mut server = mockito::Server::new_async().await;
    let own = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"ip": "198.51.100.4", "country": "Germany", "iso_code": "DE", "in_eu": true, "city": "Berlin", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;
    let google = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::UrlEncoded("ip".into(), "8.8.8.8".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{
    "ip": "8.8.8.8",
    "country": "United States",
    "iso_code": "US",
    "in_eu": false,
    "city": "Mountain View",
    "region": "California",
    "latitude": 37.4056789,
    "longitude": -122.0775123,
    "timezone": "America/Los_Angeles",
    "asn": 15169,
    "organization": "Google LLC",
    "attribution": "{ATTRIBUTION}"
}}"#
        ))
        .create_async()
        .await;
    let invalid = server
        .mock("GET", "/api/ip")
        .match_query(Matcher::UrlEncoded("ip".into(), "invalid".into()))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"error": "Invalid IP address", "attribution": "{ATTRIBUTION}"}}"#
        ))
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let document = MemoryDocument::with_template();
    let controller = ViewController::from_document(client, &document).unwrap();
    assert!(controller.accepts_submissions());

    // the page shows the caller without any interaction
    assert_eq!(controller.init().await, Outcome::Rendered(State::Results));
    assert_eq!(document.text("result-country").as_deref(), Some("Germany"));
    assert_eq!(document.text("result-in-eu").as_deref(), Some("Yes"));
    assert_eq!(document.text("result-latitude").as_deref(), Some("-"));
    own.assert_async().await;

    document.set_value("ip-input", "8.8.8.8");
    assert_eq!(
        controller.submit_form().await,
        Outcome::Rendered(State::Results)
    );
    assert_eq!(
        document.text("result-country").as_deref(),
        Some("United States")
    );
    assert_eq!(document.text("result-latitude").as_deref(), Some("37.4057"));
    assert_eq!(document.text("result-asn").as_deref(), Some("AS15169"));
    assert_eq!(document.text("result-in-eu").as_deref(), Some("No"));
    assert_eq!(
        document.text("result-attribution").as_deref(),
        Some(ATTRIBUTION)
    );
    google.assert_async().await;

    document.set_value("ip-input", "invalid");
    assert_eq!(controller.submit_form().await, Outcome::Rendered(State::Error));
    assert!(document.is_visible("error"));
    assert!(!document.is_visible("results"));
    assert_eq!(
        document.text("error-message").as_deref(),
        Some("Invalid IP address")
    );
    invalid.assert_async().await;
}

#[tokio::test]
async fn unreachable_service_shows_fallback() {
    init();
    let client = Client::new("http://127.0.0.1:1").unwrap();
    let document = MemoryDocument::with_template();
    let controller = ViewController::from_document(client, &document).unwrap();
    assert_eq!(controller.init().await, Outcome::Rendered(State::Error));
    assert_eq!(
        document.text("error-message").as_deref(),
        Some(iplookup::FALLBACK_MESSAGE)
    );
    assert!(!document.is_visible("loading"));
}
