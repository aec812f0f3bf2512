//! Session counters for the interactive shell.
//!
//! Tracks what happened during one session so a summary can be logged on exit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for one shell session.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    /// Contacts successfully added
    contacts_added_total: Arc<AtomicU64>,

    /// Contacts successfully deleted
    contacts_deleted_total: Arc<AtomicU64>,

    /// Search requests, hit or miss
    searches_total: Arc<AtomicU64>,

    /// Delete or search requests that found no contact
    lookups_missed_total: Arc<AtomicU64>,

    /// Input lines rejected by validation, uniqueness or menu parsing
    inputs_rejected_total: Arc<AtomicU64>,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
            lookups_missed_total: Arc::new(AtomicU64::new(0)),
            inputs_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.contacts_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_missed(&self) {
        self.lookups_missed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_input_rejected(&self) {
        self.inputs_rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    pub fn lookups_missed_total(&self) -> u64 {
        self.lookups_missed_total.load(Ordering::Relaxed)
    }

    pub fn inputs_rejected_total(&self) -> u64 {
        self.inputs_rejected_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_added_total: self.contacts_added_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
            searches_total: self.searches_total(),
            lookups_missed_total: self.lookups_missed_total(),
            inputs_rejected_total: self.inputs_rejected_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub contacts_added_total: u64,
    pub contacts_deleted_total: u64,
    pub searches_total: u64,
    pub lookups_missed_total: u64,
    pub inputs_rejected_total: u64,
}
