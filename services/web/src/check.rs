use clap::Args;
use larkstone::booking::{EnquiryDraft, EnquirySchema};
use larkstone::error::AppError;
use larkstone::i18n::Locale;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Path to a JSON file holding one booking enquiry payload
    pub(crate) payload: PathBuf,
    /// Locale whose catalog supplies the validation messages
    #[arg(long, default_value = "en-GB", value_parser = crate::infra::parse_locale)]
    pub(crate) locale: Locale,
}

/// Validate a payload file offline, printing the same verdict the JSON
/// endpoint would return. Malformed payloads and rejections are reported
/// on stdout, not as process failures.
pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs { payload, locale } = args;

    let raw = fs::read_to_string(&payload)?;
    let draft: EnquiryDraft = match serde_json::from_str(&raw) {
        Ok(draft) => draft,
        Err(err) => {
            println!("Payload is not a booking enquiry: {err}");
            return Ok(());
        }
    };

    let schema = EnquirySchema::for_locale(locale);
    match schema.validate(&draft) {
        Ok(enquiry) => {
            println!("Enquiry accepted");
            println!("  Company: {}", enquiry.company);
            println!(
                "  Contact: {} {} <{}>",
                enquiry.first_name, enquiry.last_name, enquiry.email
            );
            println!("  Group size: {}", enquiry.group_size);
            println!(
                "  Stay: {} to {} at {}",
                enquiry.arrival_date, enquiry.departure_date, enquiry.location
            );
            if !enquiry.requirements.is_empty() {
                println!("  Requirements: {}", enquiry.requirements);
            }
        }
        Err(errors) => {
            println!("Enquiry rejected with {} error(s):", errors.len());
            for error in errors.iter() {
                println!("  - {}: {}", error.field.key(), error.message);
            }
        }
    }

    Ok(())
}
