use chrono::Utc;
use tracing::{info, warn};

use super::domain::{EnquiryDraft, SubmissionReceipt};
use super::validation::{EnquirySchema, FieldErrors};

/// Boundary that accepts candidate enquiries, sitting behind both the
/// form flow and `POST /api/bookings`.
pub trait SubmissionGate: Send + Sync {
    fn submit(&self, draft: &EnquiryDraft) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Error raised by a submission gate.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("enquiry failed validation")]
    Rejected(FieldErrors),
    #[error("booking backend unavailable: {0}")]
    Unavailable(String),
}

/// Production gate: validates with the default-locale schema and logs the
/// intake. There is no durable persistence behind it; the log line is the
/// whole downstream effect.
pub struct EnquiryService {
    schema: EnquirySchema,
}

impl EnquiryService {
    pub fn new() -> Self {
        Self {
            schema: EnquirySchema::default(),
        }
    }
}

impl Default for EnquiryService {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGate for EnquiryService {
    fn submit(&self, draft: &EnquiryDraft) -> Result<SubmissionReceipt, SubmissionError> {
        match self.schema.validate(draft) {
            Ok(enquiry) => {
                info!(
                    company = %enquiry.company,
                    location = %enquiry.location,
                    group_size = %enquiry.group_size,
                    "received group booking enquiry"
                );
                Ok(SubmissionReceipt {
                    enquiry,
                    received_at: Utc::now(),
                })
            }
            Err(errors) => {
                warn!(fields = errors.len(), "rejected group booking enquiry");
                Err(SubmissionError::Rejected(errors))
            }
        }
    }
}
