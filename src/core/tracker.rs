//! Per-test navigation deduplication.
//!
//! The host reports every location change through a [`NavigationObserver`].
//! Events are queued and only acted on at the end-of-step checkpoint, where
//! the tracker decides whether the final pending destination still needs a
//! scan. A destination is scanned at most once per test.

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    PendingScan(String),
}

/// Cloneable handle the host uses to signal location changes.
#[derive(Debug, Clone)]
pub struct NavigationObserver {
    sender: Sender<String>,
}

impl NavigationObserver {
    pub fn notify(&self, destination: impl Into<String>) {
        // The tracker owns the receiver; once it is gone there is nobody to tell.
        let _ = self.sender.send(destination.into());
    }
}

#[derive(Debug)]
pub struct NavigationTracker {
    state: TrackerState,
    last_destination: Option<String>,
    seen_destinations: HashSet<String>,
    sender: Sender<String>,
    events: Receiver<String>,
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationTracker {
    pub fn new() -> Self {
        let (sender, events) = mpsc::channel();
        Self {
            state: TrackerState::Idle,
            last_destination: None,
            seen_destinations: HashSet::new(),
            sender,
            events,
        }
    }

    pub fn observer(&self) -> NavigationObserver {
        NavigationObserver {
            sender: self.sender.clone(),
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn last_destination(&self) -> Option<&str> {
        self.last_destination.as_deref()
    }

    pub fn has_seen(&self, destination: &str) -> bool {
        self.seen_destinations.contains(destination)
    }

    /// Start-of-test reset. Events queued before the test began are dropped.
    pub fn reset(&mut self) {
        while self.events.try_recv().is_ok() {}
        self.state = TrackerState::Idle;
        self.last_destination = None;
        self.seen_destinations.clear();
    }

    /// Apply a single navigation event.
    ///
    /// A repeat of the last destination is suppressed; anything else becomes
    /// the pending scan, replacing whatever was pending before.
    pub fn navigate(&mut self, destination: &str) {
        if self.last_destination.as_deref() == Some(destination) {
            tracing::debug!("Ignoring repeated navigation to {}", destination);
            return;
        }

        tracing::debug!("Navigation to {} pending scan", destination);
        self.last_destination = Some(destination.to_string());
        self.state = TrackerState::PendingScan(destination.to_string());
    }

    /// End-of-step checkpoint.
    ///
    /// Drains queued events in arrival order, then resolves the pending scan.
    /// Returns the destination to scan, already marked as seen, or `None`
    /// when nothing is pending or the destination was scanned earlier in this
    /// test. The tracker is `Idle` afterwards either way.
    pub fn checkpoint(&mut self) -> Option<String> {
        while let Ok(destination) = self.events.try_recv() {
            self.navigate(&destination);
        }

        let TrackerState::PendingScan(destination) =
            std::mem::replace(&mut self.state, TrackerState::Idle)
        else {
            return None;
        };

        if !self.seen_destinations.insert(destination.clone()) {
            tracing::debug!("{} already scanned in this test, skipping", destination);
            return None;
        }

        Some(destination)
    }
}
