// Shared test helpers: a scripted lookup service and pre-authenticated sessions.
//
// `ScriptedLookup` hands every request a oneshot receiver queued for that
// address, so a test decides when (and in what order) each response arrives.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use ipgeo_client::{
    GeoLookup, GeoRecord, HistoryLedger, LookupEngine, LookupError, LookupRequest,
    MemorySessionStorage, ResponseOrdering, SessionStorage, SessionStore,
};

pub type Reply = Result<GeoRecord, LookupError>;

/// Key used for lookups of the caller's own address.
pub const OWN: Option<&str> = None;

/// Lookup service whose responses are released by the test.
#[derive(Default)]
pub struct ScriptedLookup {
    pending: Mutex<HashMap<Option<String>, VecDeque<oneshot::Receiver<Reply>>>>,
    requests: Mutex<Vec<LookupRequest>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedLookup {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a response slot for the next lookup of `ip` and returns the
    /// sender that releases it.
    pub fn expect(&self, ip: Option<&str>) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .entry(ip.map(str::to_string))
            .or_default()
            .push_back(rx);
        tx
    }

    /// Queues a response that is available immediately.
    pub fn reply(&self, ip: Option<&str>, reply: Reply) {
        let _ = self.expect(ip).send(reply);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoLookup for ScriptedLookup {
    async fn lookup(&self, request: LookupRequest) -> Result<GeoRecord, LookupError> {
        self.requests.lock().unwrap().push(request.clone());
        let rx = self
            .pending
            .lock()
            .unwrap()
            .get_mut(&request.ip)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("unexpected lookup for {:?}", request.ip));
        rx.await
            .unwrap_or_else(|_| Err(LookupError::Transport("responder dropped".into())))
    }
}

/// Session store that is already signed in, with a bearer token.
#[allow(dead_code)]
pub fn signed_in_session() -> Arc<SessionStore> {
    let storage = Arc::new(MemorySessionStorage::new());
    storage.set("user", r#"{"email":"admin@example.com"}"#.to_string());
    storage.set("token", "test-token".to_string());
    Arc::new(SessionStore::restore(storage))
}

/// Session store with nobody signed in.
#[allow(dead_code)]
pub fn signed_out_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::restore(Arc::new(MemorySessionStorage::new())))
}

/// A located record for `ip`.
#[allow(dead_code)]
pub fn located(ip: &str, city: &str, lat: f64, lon: f64) -> GeoRecord {
    GeoRecord::new(ip).with_city(city).with_location(lat, lon)
}

/// Engine wired to a scripted lookup and a fresh ledger.
#[allow(dead_code)]
pub struct Harness {
    pub engine: LookupEngine,
    pub lookup: Arc<ScriptedLookup>,
    pub history: Arc<Mutex<HistoryLedger>>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self::with(signed_in_session(), ResponseOrdering::LastWriteWins)
    }

    pub fn with(session: Arc<SessionStore>, ordering: ResponseOrdering) -> Self {
        let lookup = ScriptedLookup::new();
        let history = Arc::new(Mutex::new(HistoryLedger::new()));
        let engine = LookupEngine::new(lookup.clone(), session, history.clone())
            .with_ordering(ordering);
        Self {
            engine,
            lookup,
            history,
        }
    }

    pub fn history_list(&self) -> Vec<String> {
        self.history.lock().unwrap().list()
    }
}

/// Yields to the runtime until `condition` holds.
///
/// Used inside `tokio::join!` so in-flight engine operations get polled
/// between releases.
#[allow(dead_code)]
pub async fn settle<F: Fn() -> bool>(condition: F) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
