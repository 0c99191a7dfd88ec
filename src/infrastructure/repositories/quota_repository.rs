use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub resets_at: DateTime<Utc>,
}

/// Keyed fixed-window rate limiter.
/// Behind a trait so a shared/external store can replace the in-memory
/// map without touching the orchestrator.
pub trait QuotaStore: Send + Sync {
    /// Check admission for a caller and consume one unit if allowed.
    /// Rejected checks consume nothing.
    fn check_and_consume(&self, caller_id: &str, limit: u32, window: Duration) -> QuotaDecision;

    /// Current window state for a caller without consuming anything
    fn snapshot(&self, caller_id: &str, limit: u32, window: Duration) -> QuotaDecision;
}

#[derive(Debug, Clone, Copy)]
struct QuotaRecord {
    count: u32,
    resets_at: DateTime<Utc>,
}

/// Process-wide in-memory quota map.
///
/// No persistence: a restart resets every window. No eviction: stale
/// records are only replaced when their caller returns after the window,
/// so memory grows with the number of distinct callers. Both are known,
/// accepted limitations of the in-memory store.
pub struct InMemoryQuotaStore {
    records: Mutex<HashMap<String, QuotaRecord>>,
}

impl InMemoryQuotaStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    fn check_and_consume_at(
        &self,
        caller_id: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> QuotaDecision {
        let mut records = self.records.lock();

        match records.get_mut(caller_id) {
            Some(record) if now < record.resets_at => {
                if record.count < limit {
                    record.count += 1;
                    QuotaDecision {
                        allowed: true,
                        remaining: limit - record.count,
                        resets_at: record.resets_at,
                    }
                } else {
                    // Over quota: the record is left untouched
                    QuotaDecision {
                        allowed: false,
                        remaining: 0,
                        resets_at: record.resets_at,
                    }
                }
            }
            _ => {
                // First sight of this caller, or the stored window elapsed:
                // the record is replaced, never merged
                let resets_at = now + window;
                records.insert(
                    caller_id.to_string(),
                    QuotaRecord {
                        count: 1,
                        resets_at,
                    },
                );
                QuotaDecision {
                    allowed: true,
                    remaining: limit.saturating_sub(1),
                    resets_at,
                }
            }
        }
    }

    fn snapshot_at(
        &self,
        caller_id: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> QuotaDecision {
        let records = self.records.lock();
        match records.get(caller_id) {
            Some(record) if now < record.resets_at => QuotaDecision {
                allowed: record.count < limit,
                remaining: limit.saturating_sub(record.count),
                resets_at: record.resets_at,
            },
            _ => QuotaDecision {
                allowed: true,
                remaining: limit,
                resets_at: now + window,
            },
        }
    }
}

impl Default for InMemoryQuotaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaStore for InMemoryQuotaStore {
    fn check_and_consume(&self, caller_id: &str, limit: u32, window: Duration) -> QuotaDecision {
        self.check_and_consume_at(caller_id, limit, window, Utc::now())
    }

    fn snapshot(&self, caller_id: &str, limit: u32, window: Duration) -> QuotaDecision {
        self.snapshot_at(caller_id, limit, window, Utc::now())
    }
}
