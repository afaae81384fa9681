//! Single in-flight request guard.
//!
//! One guard exists per session. It enforces mutual exclusion for outbound
//! calls (Idle/Busy) and carries a monotonically increasing generation
//! counter so a response that settles after the session has moved on (mode
//! switch, cleared form) can be recognized as stale and discarded.

/// Whether a classification call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No call in flight; submission allowed.
    #[default]
    Idle,
    /// A call is in flight; further submissions are rejected.
    Busy,
}

/// Proof that the holder owns the single in-flight slot.
///
/// Not `Clone`: releasing the guard consumes the ticket, so a slot cannot
/// be released twice.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    /// Generation the ticket was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Idle/Busy state plus the session generation counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    state: RequestState,
    generation: u64,
}

impl RequestGuard {
    /// Create an Idle guard at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current Idle/Busy state.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// True while a call is in flight.
    pub fn is_busy(&self) -> bool {
        self.state == RequestState::Busy
    }

    /// Current session generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Claim the in-flight slot.
    ///
    /// Returns `None` when already Busy. Otherwise moves to Busy, advances
    /// the generation and returns a ticket stamped with it.
    pub fn try_acquire(&mut self) -> Option<Ticket> {
        if self.is_busy() {
            return None;
        }
        self.state = RequestState::Busy;
        self.generation += 1;
        Some(Ticket {
            generation: self.generation,
        })
    }

    /// Advance the generation without touching Idle/Busy.
    ///
    /// Any ticket issued before this call becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Release the slot. Always returns to Idle.
    ///
    /// Returns `true` when the ticket is still current, i.e. its result may
    /// be rendered.
    pub fn release(&mut self, ticket: Ticket) -> bool {
        self.state = RequestState::Idle;
        ticket.generation == self.generation
    }
}
