use chrono::{DateTime, Duration, Utc};
use larkstone::booking::{BookingEnquiry, BookingStore, SessionId};
use larkstone::i18n::Locale;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

struct StoredSlot {
    enquiry: BookingEnquiry,
    stored_at: DateTime<Utc>,
}

/// Session store backing the deployed site: one slot per session id,
/// overwritten on resubmission and dropped once it outlives the
/// configured time-to-live. Every write sweeps expired slots, whatever
/// session they belong to; reads reap the requested slot if it expired.
pub(crate) struct InMemorySessionStore {
    ttl: Duration,
    slots: Mutex<HashMap<SessionId, StoredSlot>>,
}

impl InMemorySessionStore {
    pub(crate) fn new(ttl_secs: u32) -> Self {
        Self {
            ttl: Duration::seconds(i64::from(ttl_secs)),
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl BookingStore for InMemorySessionStore {
    fn put(&self, session: SessionId, enquiry: BookingEnquiry) {
        let now = Utc::now();
        let mut guard = self.slots.lock().expect("session store mutex poisoned");
        guard.retain(|_, slot| now - slot.stored_at < self.ttl);
        guard.insert(
            session,
            StoredSlot {
                enquiry,
                stored_at: now,
            },
        );
    }

    fn get(&self, session: &SessionId) -> Option<BookingEnquiry> {
        let mut guard = self.slots.lock().expect("session store mutex poisoned");
        match guard.get(session) {
            Some(slot) if Utc::now() - slot.stored_at < self.ttl => Some(slot.enquiry.clone()),
            Some(_) => {
                guard.remove(session);
                None
            }
            None => None,
        }
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::from_code(raw.trim()).ok_or_else(|| {
        let supported: Vec<&str> = Locale::ALL.iter().map(|locale| locale.code()).collect();
        format!("unsupported locale '{raw}' (supported: {})", supported.join(", "))
    })
}
