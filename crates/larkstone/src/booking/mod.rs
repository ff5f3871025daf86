//! Group booking enquiry intake: the domain model, the shared validation
//! schema, the session-scoped store seam, the submission gate, and the
//! HTTP surface (pages and router) that ties them together.

pub mod domain;
pub mod pages;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{BookingEnquiry, EnquiryDraft, EnquiryField, GroupSize, SubmissionReceipt};
pub use router::{booking_router, SiteState};
pub use service::{EnquiryService, SubmissionError, SubmissionGate};
pub use store::{BookingStore, SessionId};
pub use validation::{EnquirySchema, FieldError, FieldErrors};
