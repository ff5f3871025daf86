use serde::Serialize;

use crate::i18n::messages::Messages;
use crate::i18n::Locale;

use super::domain::{BookingEnquiry, EnquiryDraft, EnquiryField};

/// A single rejected field with its localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: EnquiryField,
    pub message: &'static str,
}

/// Ordered validation failures, one entry per rejected field, in schema
/// order. Never empty: `validate` returns `Ok` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for one field, if that field was rejected.
    pub fn message_for(&self, field: EnquiryField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

/// The booking enquiry validation rules, bound to one locale's messages.
///
/// Both consumers share this type: the form flow builds one for the
/// request's locale, the API endpoint uses the default. Rules are
/// evaluated independently so every failing field reports at once.
#[derive(Debug, Clone)]
pub struct EnquirySchema {
    locale: Locale,
    messages: &'static Messages,
}

impl EnquirySchema {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            messages: Messages::for_locale(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Check a draft against every rule and either normalize it into a
    /// `BookingEnquiry` or report all failing fields.
    ///
    /// Presence checks do not trim, so whitespace-only input satisfies
    /// them. No ordering is enforced between arrival and departure dates.
    pub fn validate(&self, draft: &EnquiryDraft) -> Result<BookingEnquiry, FieldErrors> {
        let m = self.messages;
        let mut errors = Vec::new();

        if draft.first_name.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::FirstName,
                message: m.error_first_name,
            });
        }
        if draft.last_name.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::LastName,
                message: m.error_last_name,
            });
        }
        if !email_is_valid(&draft.email) {
            errors.push(FieldError {
                field: EnquiryField::Email,
                message: m.error_email,
            });
        }
        if draft.phone.chars().count() < 10 {
            errors.push(FieldError {
                field: EnquiryField::Phone,
                message: m.error_phone,
            });
        }
        if draft.company.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::Company,
                message: m.error_company,
            });
        }
        if draft.group_size.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::GroupSize,
                message: m.error_group_size,
            });
        }
        if draft.arrival_date.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::ArrivalDate,
                message: m.error_arrival_date,
            });
        }
        if draft.departure_date.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::DepartureDate,
                message: m.error_departure_date,
            });
        }
        if draft.location.is_empty() {
            errors.push(FieldError {
                field: EnquiryField::Location,
                message: m.error_location,
            });
        }

        if !errors.is_empty() {
            return Err(FieldErrors(errors));
        }

        Ok(BookingEnquiry {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            company: draft.company.clone(),
            group_size: draft.group_size.clone(),
            arrival_date: draft.arrival_date.clone(),
            departure_date: draft.departure_date.clone(),
            location: draft.location.clone(),
            requirements: draft.requirements.clone(),
        })
    }
}

impl Default for EnquirySchema {
    fn default() -> Self {
        Self::for_locale(Locale::DEFAULT)
    }
}

/// Email grammar check: non-empty local part without whitespace, a single
/// `@`, and a dotted domain of alphanumeric/hyphen labels ending in a
/// letters-only label of at least two characters.
fn email_is_valid(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
