//! Lookup engine.
//!
//! Orchestrates lookups for the caller's own address (`current`) and for
//! user-entered addresses (`searched`), owns the shared phase/error pair, and
//! informs the history ledger of successful queries.
//!
//! Concurrency: the state lives behind a mutex that is never held across an
//! await, so operations can overlap. Starting a lookup never cancels an
//! earlier one. Under the default `ResponseOrdering::LastWriteWins` whichever
//! response completes last overwrites its slot, regardless of which request
//! was issued last. `ResponseOrdering::LatestRequestWins` drops responses
//! that have been superseded instead: a search by a newer search, and any
//! in-flight search by a successful own-address lookup.
//!
//! When both locks are needed the state lock is taken before the history lock.

mod sequence;
mod state;

pub use state::{LookupState, Phase, Slot};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

use crate::config::{
    ResponseOrdering, MSG_CURRENT_FAILED, MSG_HISTORY_FAILED, MSG_SEARCH_FAILED,
    MSG_SIGN_IN_REQUIRED,
};
use crate::display::{project, MapTarget};
use crate::fingerprint::{validate, ValidIp};
use crate::geoip::{GeoLookup, LookupRequest};
use crate::history::HistoryLedger;
use crate::session::{Credential, SessionStore};
use sequence::{RequestSequence, Ticket};

/// Where a search came from; decides the failure message and input echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOrigin {
    Input,
    History,
}

impl SearchOrigin {
    fn failure_message(self) -> &'static str {
        match self {
            SearchOrigin::Input => MSG_SEARCH_FAILED,
            SearchOrigin::History => MSG_HISTORY_FAILED,
        }
    }
}

#[derive(Debug, Default)]
struct EngineInner {
    state: LookupState,
    sequence: RequestSequence,
}

/// Owns `LookupState` and drives every lookup.
///
/// Callers observe outcomes through `state()`; no operation returns an
/// error. Lookups are gated on an active session in the `SessionStore`.
pub struct LookupEngine {
    lookup: Arc<dyn GeoLookup>,
    session: Arc<SessionStore>,
    history: Arc<Mutex<HistoryLedger>>,
    ordering: ResponseOrdering,
    inner: Mutex<EngineInner>,
}

impl LookupEngine {
    /// Creates an idle engine using last-write-wins ordering.
    pub fn new(
        lookup: Arc<dyn GeoLookup>,
        session: Arc<SessionStore>,
        history: Arc<Mutex<HistoryLedger>>,
    ) -> Self {
        Self {
            lookup,
            session,
            history,
            ordering: ResponseOrdering::LastWriteWins,
            inner: Mutex::new(EngineInner::default()),
        }
    }

    /// Selects how out-of-order responses are reconciled.
    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.lock().state.clone()
    }

    /// Map target for the current state, recomputed on every call.
    pub fn map_target(&self) -> Option<MapTarget> {
        project(&self.lock().state)
    }

    /// The injected history ledger.
    pub fn history(&self) -> &Arc<Mutex<HistoryLedger>> {
        &self.history
    }

    /// Snapshot of the history entries, most recent first.
    pub fn history_entries(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .list()
    }

    /// Replaces the search input echo.
    pub fn set_input(&self, input: &str) {
        self.lock().state.input = input.to_string();
    }

    /// Looks up the caller's own address.
    ///
    /// On success sets `current`, clears `searched` (handing authority back to
    /// `current`), the input echo and the error. On failure sets the error and
    /// leaves any previous `current` on display.
    pub async fn load_current(&self) {
        let Some((ticket, credential)) = self.begin(Slot::Current) else {
            return;
        };
        debug!("Looking up own address");

        let result = self
            .lookup
            .lookup(LookupRequest::own_address(credential))
            .await;

        let mut inner = self.lock();
        if !inner.sequence.accepts(ticket, self.ordering) {
            debug!("Discarding superseded own-address response");
            return;
        }
        match result {
            Ok(record) => {
                info!("Own address resolved to {}", record.ip());
                // `searched` is cleared below, so searches still in flight
                // must not bring it back.
                inner.sequence.supersede(Slot::Searched);
                let state = &mut inner.state;
                state.current = Some(record);
                state.searched = None;
                state.input.clear();
                state.succeed();
            }
            Err(e) => {
                error!("Own-address lookup failed: {}", e);
                inner.state.fail(Slot::Current, MSG_CURRENT_FAILED);
            }
        }
    }

    /// Validates `raw` and looks it up.
    ///
    /// Invalid input sets the validation message and makes no network call.
    /// On success sets `searched`, clears the input echo and records the
    /// validated address in the history ledger unless already present. On
    /// failure sets the error and keeps any previous `searched` on display.
    pub async fn search(&self, raw: &str) {
        self.validated_search(raw, SearchOrigin::Input).await;
    }

    /// Searches for the current input echo.
    pub async fn submit(&self) {
        let raw = self.lock().state.input.clone();
        self.search(&raw).await;
    }

    /// Re-runs a search picked from the history list.
    ///
    /// Behaves like `search`, except the input echo is set to `ip` on success
    /// and the failure message invites a retry. Recording is idempotent, so an
    /// entry already in the ledger is neither duplicated nor moved.
    pub async fn select_from_history(&self, ip: &str) {
        self.validated_search(ip, SearchOrigin::History).await;
    }

    /// Clears `searched`, the input echo and the error, then reloads `current`.
    pub async fn reset(&self) {
        {
            let mut inner = self.lock();
            let state = &mut inner.state;
            state.searched = None;
            state.input.clear();
            state.error_message = None;
            state.phase = Phase::Idle;
        }
        debug!("Lookup state reset");
        self.load_current().await;
    }

    async fn validated_search(&self, raw: &str, origin: SearchOrigin) {
        let ip = match validate(raw) {
            Ok(ip) => ip,
            Err(e) => {
                debug!("Rejected search input {:?}: {:?}", raw, e);
                self.lock().state.fail(Slot::Searched, &e.to_string());
                return;
            }
        };
        self.run_search(ip, origin).await;
    }

    async fn run_search(&self, ip: ValidIp, origin: SearchOrigin) {
        let Some((ticket, credential)) = self.begin(Slot::Searched) else {
            return;
        };
        debug!("Looking up {}", ip);

        let result = self
            .lookup
            .lookup(LookupRequest::for_ip(ip.as_str(), credential))
            .await;

        let mut inner = self.lock();
        if !inner.sequence.accepts(ticket, self.ordering) {
            debug!("Discarding superseded response for {}", ip);
            return;
        }
        match result {
            Ok(record) => {
                info!("Resolved {}", ip);
                let state = &mut inner.state;
                state.searched = Some(record);
                state.input = match origin {
                    SearchOrigin::Input => String::new(),
                    SearchOrigin::History => ip.to_string(),
                };
                state.succeed();

                // Still under the state lock so `searched` and the ledger
                // change together. Lock order is always state, then history.
                // The validated string is recorded, not the service's echo.
                self.history
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .record(&ip);
            }
            Err(e) => {
                error!("Lookup for {} failed: {}", ip, e);
                inner.state.fail(Slot::Searched, origin.failure_message());
            }
        }
    }

    /// Checks the session gate and, if open, marks `slot` as loading and
    /// issues a ticket.
    fn begin(&self, slot: Slot) -> Option<(Ticket, Option<Credential>)> {
        let session = self.session.current_session();
        let mut inner = self.lock();

        let Some(session) = session else {
            warn!("{} lookup refused: no active session", slot);
            inner.state.fail(slot, MSG_SIGN_IN_REQUIRED);
            return None;
        };

        let ticket = inner.sequence.issue(slot);
        inner.state.start(slot);
        Some((ticket, session.token))
    }

    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
