//! ipgeo_client library: session and lookup state core for an IP geolocation client
//!
//! This library authenticates a user, resolves geolocation metadata for the
//! caller's own address or any queried address, keeps a deduplicated search
//! history, and projects whichever result is authoritative onto a map target.
//! Rendering, the map widget, and form UI are left to the consuming
//! application, which reads `LookupEngine::state()` after each operation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use ipgeo_client::{
//!     Config, HistoryLedger, HttpApiClient, LookupEngine, MemorySessionStorage, SessionStore,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! ipgeo_client::initialization::init_logger(&config)?;
//! let api = Arc::new(HttpApiClient::new(&config)?);
//!
//! let session = Arc::new(SessionStore::restore(Arc::new(MemorySessionStorage::new())));
//! if !session.is_authenticated() {
//!     session
//!         .authenticate(api.as_ref(), "admin@example.com", "password123")
//!         .await?;
//! }
//!
//! let history = Arc::new(Mutex::new(HistoryLedger::new()));
//! let engine = LookupEngine::new(api, session, history)
//!     .with_ordering(config.response_ordering);
//!
//! engine.load_current().await;
//! engine.search("8.8.8.8").await;
//! if let Some(target) = engine.map_target() {
//!     println!("{} at {},{}", target.label, target.latitude, target.longitude);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and expect a Tokio runtime (the HTTP transport is
//! `reqwest`).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod display;
pub mod engine;
pub mod error_handling;
pub mod fingerprint;
pub mod geoip;
pub mod history;
pub mod initialization;
pub mod session;

// Re-export public API
pub use api::HttpApiClient;
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, ResponseOrdering};
pub use display::{project, project_info, project_record, InfoCard, MapTarget};
pub use engine::{LookupEngine, LookupState, Phase, Slot};
pub use error_handling::{AuthError, IndexError, InitializationError, LookupError, ValidationError};
pub use fingerprint::{validate, ValidIp};
pub use geoip::{Coordinates, GeoLookup, GeoRecord, LookupRequest};
pub use history::HistoryLedger;
pub use session::{
    AuthService, Credential, LoginResponse, MemorySessionStorage, Session, SessionStorage,
    SessionStore, UserIdentity,
};
