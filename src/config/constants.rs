//! Configuration constants.
//!
//! Endpoint paths, storage keys, defaults and the user-facing messages surfaced
//! through `LookupState::error_message`.

/// Default base URL of the geolocation API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds.
/// Cancellation lives entirely at the transport; the lookup core imposes none.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted by `Config::validate` for `timeout_seconds`
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default User-Agent header value
pub const DEFAULT_USER_AGENT: &str = concat!("ipgeo_client/", env!("CARGO_PKG_VERSION"));

// Endpoints (appended to the base URL)
/// Login endpoint
pub const LOGIN_PATH: &str = "/api/login";
/// Geolocation lookup endpoint
pub const IP_INFO_PATH: &str = "/api/ip-info";

// Query parameters
/// Address to look up; omitted to request the caller's own address
pub const IP_QUERY_PARAM: &str = "ip";
/// Millisecond timestamp appended to every GET so intermediaries never serve a cached answer
pub const CACHE_BUSTER_PARAM: &str = "_t";

// Environment overrides read by `Config::from_env`
/// Overrides `Config::api_base_url`
pub const ENV_API_BASE_URL: &str = "IPGEO_API_BASE_URL";
/// Overrides `Config::timeout_seconds`
pub const ENV_TIMEOUT_SECS: &str = "IPGEO_TIMEOUT_SECS";
/// Overrides `Config::user_agent`
pub const ENV_USER_AGENT: &str = "IPGEO_USER_AGENT";
/// Overrides `Config::response_ordering` (`last-write-wins` or `latest-request-wins`)
pub const ENV_RESPONSE_ORDERING: &str = "IPGEO_RESPONSE_ORDERING";
/// Overrides `Config::log_level` (`error`, `warn`, `info`, `debug` or `trace`)
pub const ENV_LOG_LEVEL: &str = "IPGEO_LOG_LEVEL";
/// Overrides `Config::log_format` (`plain` or `json`)
pub const ENV_LOG_FORMAT: &str = "IPGEO_LOG_FORMAT";

// Session storage keys
/// Key holding the JSON-encoded user identity
pub const SESSION_USER_KEY: &str = "user";
/// Key holding the bearer credential
pub const SESSION_TOKEN_KEY: &str = "token";

// User-facing messages
/// Blank search input
pub const MSG_EMPTY_INPUT: &str = "Please enter an IP address";
/// Search input that is not a dotted quad
pub const MSG_MALFORMED_INPUT: &str = "Invalid IP address format. Please check and try again.";
/// Own-address lookup failed
pub const MSG_CURRENT_FAILED: &str = "Failed to fetch current IP information";
/// Searched-address lookup failed
pub const MSG_SEARCH_FAILED: &str = "Failed to fetch IP information. Please check the IP address.";
/// Lookup started from the history list failed
pub const MSG_HISTORY_FAILED: &str = "Failed to fetch IP information. Please try again.";
/// Lookup attempted without a session
pub const MSG_SIGN_IN_REQUIRED: &str = "Please sign in to look up IP addresses";
/// Login rejected without a server-provided message
pub const MSG_LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Label used on the map marker when the record carries no city
pub const MAP_LABEL_FALLBACK: &str = "Location";

/// Placeholder shown in the info card for absent fields
pub const INFO_FIELD_FALLBACK: &str = "N/A";
