//! Per-slot request counters for the optional stale-response guard.

use super::state::Slot;
use crate::config::ResponseOrdering;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket {
    pub(crate) slot: Slot,
    pub(crate) generation: u64,
}

/// Monotonic request counters, one per slot.
#[derive(Debug, Default)]
pub(crate) struct RequestSequence {
    issued: [u64; 2],
}

impl RequestSequence {
    /// Issues the next ticket for `slot`.
    pub(crate) fn issue(&mut self, slot: Slot) -> Ticket {
        let counter = &mut self.issued[slot.index()];
        *counter += 1;
        Ticket {
            slot,
            generation: *counter,
        }
    }

    /// Marks every outstanding request for `slot` as superseded.
    pub(crate) fn supersede(&mut self, slot: Slot) {
        self.issued[slot.index()] += 1;
    }

    /// Whether a response for `ticket` may be applied under `ordering`.
    pub(crate) fn accepts(&self, ticket: Ticket, ordering: ResponseOrdering) -> bool {
        match ordering {
            ResponseOrdering::LastWriteWins => true,
            ResponseOrdering::LatestRequestWins => {
                ticket.generation == self.issued[ticket.slot.index()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_accepts_everything() {
        let mut seq = RequestSequence::default();
        let first = seq.issue(Slot::Searched);
        let _second = seq.issue(Slot::Searched);
        assert!(seq.accepts(first, ResponseOrdering::LastWriteWins));
    }

    #[test]
    fn test_latest_request_wins_rejects_older() {
        let mut seq = RequestSequence::default();
        let first = seq.issue(Slot::Searched);
        let second = seq.issue(Slot::Searched);
        assert!(!seq.accepts(first, ResponseOrdering::LatestRequestWins));
        assert!(seq.accepts(second, ResponseOrdering::LatestRequestWins));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut seq = RequestSequence::default();
        let search = seq.issue(Slot::Searched);
        let _current = seq.issue(Slot::Current);
        assert!(seq.accepts(search, ResponseOrdering::LatestRequestWins));
    }

    #[test]
    fn test_supersede_invalidates_outstanding() {
        let mut seq = RequestSequence::default();
        let search = seq.issue(Slot::Searched);
        seq.supersede(Slot::Searched);
        assert!(!seq.accepts(search, ResponseOrdering::LatestRequestWins));
    }
}
