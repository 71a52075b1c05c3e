//! Logging setup

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cafe_api=info,tower_http=info";

/// Initialize the global subscriber
///
/// The filter comes from `RUST_LOG`; `LOG_FORMAT=json` switches to JSON lines.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
