pub const ATTRIBUTION: &str = "IP Geolocation by DB-IP (https://db-ip.com)";

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "iplookup=debug".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
