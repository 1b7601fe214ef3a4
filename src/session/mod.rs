//! Session identity.
//!
//! `SessionStore` owns the authenticated identity for the lifetime of the
//! process and persists it through a `SessionStorage`. The lookup engine reads
//! it only to decide whether a request may be issued and which bearer
//! credential to attach.

mod auth;
mod storage;
mod store;
mod types;

// Re-export public API
pub use auth::AuthService;
pub use storage::{MemorySessionStorage, SessionStorage};
pub use store::SessionStore;
pub use types::{Credential, LoginResponse, Session, UserIdentity};
