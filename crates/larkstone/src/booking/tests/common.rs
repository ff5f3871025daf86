use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::booking::domain::{BookingEnquiry, EnquiryDraft, SubmissionReceipt};
use crate::booking::router::{booking_router, SiteState};
use crate::booking::service::{EnquiryService, SubmissionError, SubmissionGate};
use crate::booking::store::{BookingStore, SessionId};
use crate::booking::validation::EnquirySchema;

pub(super) fn draft() -> EnquiryDraft {
    EnquiryDraft {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "1234567890".to_string(),
        company: "Test Company".to_string(),
        group_size: "1-10".to_string(),
        arrival_date: "2024-12-01".to_string(),
        departure_date: "2024-12-05".to_string(),
        location: "London".to_string(),
        requirements: String::new(),
    }
}

pub(super) fn enquiry() -> BookingEnquiry {
    EnquirySchema::default()
        .validate(&draft())
        .expect("fixture draft is valid")
}

#[derive(Default)]
pub(super) struct MemoryStore {
    slots: Mutex<HashMap<SessionId, BookingEnquiry>>,
}

impl MemoryStore {
    pub(super) fn slot_count(&self) -> usize {
        self.slots.lock().expect("store mutex poisoned").len()
    }
}

impl BookingStore for MemoryStore {
    fn put(&self, session: SessionId, enquiry: BookingEnquiry) {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .insert(session, enquiry);
    }

    fn get(&self, session: &SessionId) -> Option<BookingEnquiry> {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .get(session)
            .cloned()
    }
}

pub(super) struct CountingGate {
    inner: EnquiryService,
    calls: AtomicUsize,
}

impl Default for CountingGate {
    fn default() -> Self {
        Self {
            inner: EnquiryService::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl CountingGate {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl SubmissionGate for CountingGate {
    fn submit(&self, draft: &EnquiryDraft) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.submit(draft)
    }
}

pub(super) struct FailingGate;

impl SubmissionGate for FailingGate {
    fn submit(&self, _draft: &EnquiryDraft) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Unavailable(
            "booking backend offline".to_string(),
        ))
    }
}

pub(super) fn build_site() -> (Router, Arc<MemoryStore>, Arc<CountingGate>) {
    let store = Arc::new(MemoryStore::default());
    let gate = Arc::new(CountingGate::default());
    let state = Arc::new(SiteState {
        store: store.clone(),
        gate: gate.clone(),
    });
    (booking_router(state), store, gate)
}

pub(super) fn failing_site() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = Arc::new(SiteState {
        store: store.clone(),
        gate: Arc::new(FailingGate),
    });
    (booking_router(state), store)
}

pub(super) fn form_body(draft: &EnquiryDraft) -> String {
    [
        ("firstName", &draft.first_name),
        ("lastName", &draft.last_name),
        ("email", &draft.email),
        ("phone", &draft.phone),
        ("company", &draft.company),
        ("groupSize", &draft.group_size),
        ("arrivalDate", &draft.arrival_date),
        ("departureDate", &draft.departure_date),
        ("location", &draft.location),
        ("requirements", &draft.requirements),
    ]
    .iter()
    .map(|(name, value)| format!("{name}={}", value.replace(' ', "+")))
    .collect::<Vec<_>>()
    .join("&")
}

pub(super) fn form_request(path: &str, body: String) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) fn json_request(path: &str, payload: &Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

pub(super) fn page_request(path: &str) -> Request<Body> {
    Request::get(path)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
