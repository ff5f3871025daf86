use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw candidate input for a group booking, before validation.
///
/// Every field defaults to an empty string so missing JSON keys or form
/// fields surface as presence failures instead of deserialization errors,
/// matching how the form treats untouched inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub group_size: String,
    pub arrival_date: String,
    pub departure_date: String,
    pub location: String,
    pub requirements: String,
}

/// A validated group booking enquiry, the sole domain entity.
///
/// All fields are textual; `group_size` stays a string because validation
/// is presence-only and the closed option set lives in the form control.
/// `requirements` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEnquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub group_size: String,
    pub arrival_date: String,
    pub departure_date: String,
    pub location: String,
    pub requirements: String,
}

/// Fields that can fail validation, in schema order. Serialized with the
/// same camelCase keys the wire shape uses so API consumers can match
/// errors to payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnquiryField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    GroupSize,
    ArrivalDate,
    DepartureDate,
    Location,
}

impl EnquiryField {
    /// The camelCase wire key, also used as the form input name.
    pub const fn key(self) -> &'static str {
        match self {
            EnquiryField::FirstName => "firstName",
            EnquiryField::LastName => "lastName",
            EnquiryField::Email => "email",
            EnquiryField::Phone => "phone",
            EnquiryField::Company => "company",
            EnquiryField::GroupSize => "groupSize",
            EnquiryField::ArrivalDate => "arrivalDate",
            EnquiryField::DepartureDate => "departureDate",
            EnquiryField::Location => "location",
        }
    }
}

/// The closed set of group sizes offered by the form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSize {
    OneToTen,
    ElevenToTwenty,
    TwentyOneToFifty,
    FiftyOnePlus,
}

impl GroupSize {
    /// Every option, in the order the select element lists them.
    pub const ALL: [GroupSize; 4] = [
        GroupSize::OneToTen,
        GroupSize::ElevenToTwenty,
        GroupSize::TwentyOneToFifty,
        GroupSize::FiftyOnePlus,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            GroupSize::OneToTen => "1-10",
            GroupSize::ElevenToTwenty => "11-20",
            GroupSize::TwentyOneToFifty => "21-50",
            GroupSize::FiftyOnePlus => "51+",
        }
    }
}

/// Acknowledgement produced by the submission gate for an accepted
/// enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub enquiry: BookingEnquiry,
    pub received_at: DateTime<Utc>,
}
