//! Lookup state.

use strum_macros::Display;

use crate::geoip::GeoRecord;

/// Request lifecycle shared by both slots.
///
/// `Idle -> Loading -> {Success, Error}`, with `reset` returning to `Idle`.
/// A new request re-enters `Loading` from any phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Phase {
    /// Nothing requested yet, or just reset
    #[default]
    Idle,
    /// A request has been issued and its slot has not resolved
    Loading,
    /// The most recently resolved request succeeded
    Success,
    /// The most recently resolved request (or validation) failed
    Error,
}

/// Which result slot a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Slot {
    /// The caller's own address
    Current,
    /// An address the user asked about
    Searched,
}

impl Slot {
    pub(crate) fn index(self) -> usize {
        match self {
            Slot::Current => 0,
            Slot::Searched => 1,
        }
    }
}

/// Snapshot of everything the lookup engine owns.
///
/// `phase` and `error_message` are shared by both slots and describe
/// whichever request was issued or resolved most recently; `last_requested`
/// says which slot that was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    /// Record for the caller's own address
    pub current: Option<GeoRecord>,
    /// Record for the last successful search; takes display precedence
    pub searched: Option<GeoRecord>,
    /// Shared request phase
    pub phase: Phase,
    /// Human-readable failure, shown alongside any stale data
    pub error_message: Option<String>,
    /// Echo of the search input
    pub input: String,
    /// Slot the shared phase/error refer to
    pub last_requested: Option<Slot>,
}

impl LookupState {
    /// The record to display and map: `searched` if present, else `current`.
    pub fn authoritative(&self) -> Option<&GeoRecord> {
        self.searched.as_ref().or(self.current.as_ref())
    }

    /// Slot currently providing the authoritative record.
    pub fn authoritative_slot(&self) -> Option<Slot> {
        if self.searched.is_some() {
            Some(Slot::Searched)
        } else if self.current.is_some() {
            Some(Slot::Current)
        } else {
            None
        }
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub(crate) fn start(&mut self, slot: Slot) {
        self.phase = Phase::Loading;
        self.error_message = None;
        self.last_requested = Some(slot);
    }

    pub(crate) fn fail(&mut self, slot: Slot, message: &str) {
        self.phase = Phase::Error;
        self.error_message = Some(message.to_string());
        self.last_requested = Some(slot);
    }

    pub(crate) fn succeed(&mut self) {
        self.phase = Phase::Success;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authoritative_prefers_searched() {
        let mut state = LookupState::default();
        assert!(state.authoritative().is_none());
        assert_eq!(state.authoritative_slot(), None);

        state.current = Some(GeoRecord::new("203.0.113.7"));
        assert_eq!(state.authoritative().unwrap().ip(), "203.0.113.7");
        assert_eq!(state.authoritative_slot(), Some(Slot::Current));

        state.searched = Some(GeoRecord::new("8.8.8.8"));
        assert_eq!(state.authoritative().unwrap().ip(), "8.8.8.8");
        assert_eq!(state.authoritative_slot(), Some(Slot::Searched));

        state.searched = None;
        assert_eq!(state.authoritative().unwrap().ip(), "203.0.113.7");
    }

    #[test]
    fn test_start_clears_error() {
        let mut state = LookupState::default();
        state.fail(Slot::Current, "boom");
        assert_eq!(state.phase, Phase::Error);

        state.start(Slot::Searched);
        assert!(state.is_loading());
        assert_eq!(state.error_message, None);
        assert_eq!(state.last_requested, Some(Slot::Searched));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Loading.to_string(), "Loading");
        assert_eq!(Slot::Searched.to_string(), "Searched");
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
