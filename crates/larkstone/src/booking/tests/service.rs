use chrono::Utc;

use super::common::draft;
use crate::booking::domain::{EnquiryDraft, EnquiryField};
use crate::booking::service::{EnquiryService, SubmissionError, SubmissionGate};

#[test]
fn submit_acknowledges_valid_drafts() {
    let service = EnquiryService::new();
    let receipt = service.submit(&draft()).expect("fixture draft is accepted");

    assert_eq!(receipt.enquiry.first_name, "John");
    assert_eq!(receipt.enquiry.company, "Test Company");
    assert!(receipt.enquiry.requirements.is_empty());
    assert!(receipt.received_at <= Utc::now());
}

#[test]
fn submit_rejects_invalid_drafts_with_field_errors() {
    let service = EnquiryService::new();

    match service.submit(&EnquiryDraft::default()) {
        Err(SubmissionError::Rejected(errors)) => {
            assert_eq!(errors.len(), 9);
            assert_eq!(
                errors.message_for(EnquiryField::Email),
                Some("Invalid email address")
            );
        }
        other => panic!("expected a validation rejection, got {other:?}"),
    }
}

#[test]
fn submit_preserves_requirements_in_the_receipt() {
    let mut candidate = draft();
    candidate.requirements = "Projector in the main room".to_string();

    let receipt = EnquiryService::new()
        .submit(&candidate)
        .expect("draft with requirements is accepted");
    assert_eq!(receipt.enquiry.requirements, "Projector in the main room");
}
