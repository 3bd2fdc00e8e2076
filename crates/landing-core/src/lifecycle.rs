//! Mount bookkeeping for the page session.
//!
//! Mounting is asynchronous (the GPU adapter is awaited), so a teardown can
//! arrive before the session exists. Each mount takes a ticket; a teardown
//! retires it, and the mount only installs its session if its ticket is still
//! live once the awaits are done.

/// Proof of one mount attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Debug, Default)]
pub struct MountGate {
    generation: u64,
    live: Option<u64>,
}

impl MountGate {
    /// Start a mount. `None` while another mount is pending or installed.
    pub fn begin(&mut self) -> Option<MountTicket> {
        if self.live.is_some() {
            return None;
        }
        self.generation += 1;
        self.live = Some(self.generation);
        Some(MountTicket(self.generation))
    }

    pub fn is_live(&self, ticket: MountTicket) -> bool {
        self.live == Some(ticket.0)
    }

    /// Give up on a mount that failed. A newer mount is left alone.
    pub fn abandon(&mut self, ticket: MountTicket) {
        if self.is_live(ticket) {
            self.live = None;
        }
    }

    /// Retire the current mount, pending or installed. Returns whether there
    /// was one.
    pub fn retire(&mut self) -> bool {
        self.live.take().is_some()
    }
}

/// Whether a `pagehide` should tear the session down. A page entering the
/// back/forward cache (`persisted`) comes back as-is, so it keeps its session.
#[inline]
pub fn pagehide_tears_down(persisted: bool) -> bool {
    !persisted
}
