//! Connectivity and route-transition status for the whole site.
//!
//! DESIGN
//! ======
//! `SiteStatus` is the single owner of the online flag and the
//! "transitioning" flag. Components hold it in an `RwSignal` from context and
//! only ever change it through the event methods below, so the precedence
//! rules live in one place:
//!
//! - offline beats transitioning,
//! - while offline, navigations are recorded but never start a transition,
//! - every distinct navigation restarts the transition window.
//!
//! Timers are owned by the caller. Each transition hands out a
//! `TransitionTicket`; a timer that fires with an outdated ticket is ignored,
//! so a superseded or cancelled timer can never reveal content early.

use crate::routes::page_key;

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// How long the loading placeholder is shown after a navigation.
pub const TRANSITION_DELAY_MS: u32 = 1000;

/// What the page body should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Online and settled: render the routed page.
    Content,
    /// Inside the post-navigation loading window.
    Transitioning,
    /// The browser reports no connectivity.
    Offline,
}

/// Proof that a specific navigation armed the transition timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteStatus {
    online: bool,
    transitioning: bool,
    path: Option<String>,
    generation: u64,
}

impl Default for SiteStatus {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SiteStatus {
    /// Status seeded from the connectivity the browser reports at mount.
    #[must_use]
    pub fn new(online: bool) -> Self {
        Self { online, transitioning: false, path: None, generation: 0 }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.online {
            Phase::Offline
        } else if self.transitioning {
            Phase::Transitioning
        } else {
            Phase::Content
        }
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase() == Phase::Transitioning
    }

    /// Last path recorded by `navigate`.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Label for the loading placeholder.
    #[must_use]
    pub fn loading_page(&self) -> &str {
        page_key(self.path.as_deref().unwrap_or("/"))
    }

    /// Apply a connectivity reading (mount check, `online`/`offline` event,
    /// or a visibility re-check). Returns `true` when the flag changed.
    ///
    /// Going offline drops any in-flight transition; coming back online shows
    /// the current route's content immediately.
    pub fn set_online(&mut self, online: bool) -> bool {
        if self.online == online {
            return false;
        }
        self.online = online;
        if !online {
            self.invalidate_transition();
        }
        true
    }

    /// Record a navigation to `path`.
    ///
    /// Returns a ticket when the caller must (re)arm the transition timer.
    /// Repeating the current path, or navigating while offline, returns
    /// `None`. Any previously issued ticket becomes stale either way once the
    /// path changes.
    pub fn navigate(&mut self, path: &str) -> Option<TransitionTicket> {
        if self.path.as_deref() == Some(path) {
            return None;
        }
        self.path = Some(path.to_owned());
        self.generation += 1;
        if !self.online {
            self.transitioning = false;
            return None;
        }
        self.transitioning = true;
        Some(TransitionTicket(self.generation))
    }

    /// The transition timer fired. Returns `true` when it ended the current
    /// transition; stale tickets are ignored.
    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        if !self.transitioning || ticket.0 != self.generation {
            return false;
        }
        self.transitioning = false;
        true
    }

    /// The loader unmounted: drop any in-flight transition so an orphaned
    /// timer cannot act on it.
    pub fn cancel_transition(&mut self) {
        self.invalidate_transition();
    }

    fn invalidate_transition(&mut self) {
        self.transitioning = false;
        self.generation += 1;
    }
}
