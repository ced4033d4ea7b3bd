//! Edit Session and Request Sequencing
//!
//! Which entry the form is editing, and tokens that let late responses
//! recognise they have been superseded.

/// Form mode: creating a new entry or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Editing(u32),
}

/// Identifies one edit session; a later start or cancel invalidates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket {
    pub id: u32,
    generation: u64,
}

/// At most one entry is edited at a time. Every transition bumps the generation.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    editing: Option<u32>,
    generation: u64,
}

impl EditSession {
    pub fn mode(&self) -> EditMode {
        match self.editing {
            Some(id) => EditMode::Editing(id),
            None => EditMode::Idle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start editing `id`, silently replacing any current session
    pub fn start(&mut self, id: u32) -> EditTicket {
        self.generation += 1;
        self.editing = Some(id);
        EditTicket { id, generation: self.generation }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.editing = None;
    }

    pub fn ticket(&self) -> Option<EditTicket> {
        self.editing.map(|id| EditTicket { id, generation: self.generation })
    }

    pub fn is_current(&self, ticket: EditTicket) -> bool {
        self.ticket() == Some(ticket)
    }

    /// End the session only if `ticket` still identifies it
    pub fn end_if_current(&mut self, ticket: EditTicket) -> bool {
        if self.is_current(ticket) {
            self.cancel();
            true
        } else {
            false
        }
    }
}

/// Issued when a list load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic tokens for entry-list loads; only the newest token's response is applied
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_cancel() {
        let mut session = EditSession::default();
        assert_eq!(session.mode(), EditMode::Idle);

        let ticket = session.start(5);
        assert_eq!(session.mode(), EditMode::Editing(5));
        assert!(session.is_current(ticket));

        session.cancel();
        assert_eq!(session.mode(), EditMode::Idle);
        assert!(session.ticket().is_none());
        assert!(!session.is_current(ticket));
    }

    #[test]
    fn test_new_edit_replaces_old() {
        let mut session = EditSession::default();
        let first = session.start(1);
        let second = session.start(2);
        assert_eq!(session.mode(), EditMode::Editing(2));
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn test_restarting_same_entry_invalidates_old_ticket() {
        let mut session = EditSession::default();
        let first = session.start(4);
        session.cancel();
        session.start(4);
        assert!(!session.end_if_current(first));
        assert_eq!(session.mode(), EditMode::Editing(4));
    }

    #[test]
    fn test_end_if_current() {
        let mut session = EditSession::default();
        let ticket = session.start(9);
        assert!(session.end_if_current(ticket));
        assert_eq!(session.mode(), EditMode::Idle);
        assert!(!session.end_if_current(ticket));
    }

    #[test]
    fn test_sequencer_only_latest_wins() {
        let mut seq = RequestSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));

        let c = seq.begin();
        assert!(!seq.is_latest(b));
        assert!(seq.is_latest(c));
    }
}
