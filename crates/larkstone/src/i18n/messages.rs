use super::Locale;

/// All localized user-facing strings for one locale.
///
/// Strings are stored raw; page rendering escapes user input but inserts
/// these catalog entries verbatim.
#[derive(Debug, Clone)]
pub struct Messages {
    // ---- chrome ----
    pub brand: &'static str,
    pub page_title: &'static str,
    pub language_label: &'static str,

    // ---- landing page ----
    pub landing_heading: &'static str,
    pub landing_intro: &'static str,
    pub landing_cta: &'static str,

    // ---- booking form ----
    pub form_heading: &'static str,
    pub form_intro: &'static str,
    pub label_first_name: &'static str,
    pub label_last_name: &'static str,
    pub label_email: &'static str,
    pub label_phone: &'static str,
    pub label_company: &'static str,
    pub label_group_size: &'static str,
    pub label_arrival_date: &'static str,
    pub label_departure_date: &'static str,
    pub label_location: &'static str,
    pub label_requirements: &'static str,
    pub group_size_placeholder: &'static str,
    pub submit_label: &'static str,
    /// Form-level notice shown when the submission gate fails.
    pub submission_failed: &'static str,

    // ---- validation messages, one per required rule ----
    pub error_first_name: &'static str,
    pub error_last_name: &'static str,
    pub error_email: &'static str,
    pub error_phone: &'static str,
    pub error_company: &'static str,
    pub error_group_size: &'static str,
    pub error_arrival_date: &'static str,
    pub error_departure_date: &'static str,
    pub error_location: &'static str,

    // ---- confirmation page ----
    pub success_heading: &'static str,
    pub success_intro: &'static str,
    pub no_booking: &'static str,
    pub done_label: &'static str,

    // ---- not found ----
    pub not_found_heading: &'static str,
    pub not_found_body: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::EnGb => &EN_GB,
            Locale::DeDe => &DE_DE,
        }
    }
}

pub const EN_GB: Messages = Messages {
    brand: "Larkstone Hotels",
    page_title: "Larkstone Hotels Group Booking",
    language_label: "Language",

    landing_heading: "Larkstone Hotels",
    landing_intro: "Welcome to the Larkstone Hotels Group Booking Portal. We offer comfortable accommodations for groups of all sizes.",
    landing_cta: "Book us now",

    form_heading: "Group Booking",
    form_intro: "Planning a stay for your team or event? Tell us what you need and we will get back to you.",
    label_first_name: "First Name",
    label_last_name: "Last Name",
    label_email: "Email Address",
    label_phone: "Phone Number",
    label_company: "Company Name",
    label_group_size: "Group Size",
    label_arrival_date: "Arrival Date",
    label_departure_date: "Departure Date",
    label_location: "Preferred Location",
    label_requirements: "Special Requirements",
    group_size_placeholder: "Select group size",
    submit_label: "Submit Booking",
    submission_failed: "Something went wrong while submitting your enquiry. Please try again.",

    error_first_name: "First name is required",
    error_last_name: "Last name is required",
    error_email: "Invalid email address",
    error_phone: "Phone number must be at least 10 digits",
    error_company: "Company name is required",
    error_group_size: "Group size is required",
    error_arrival_date: "Arrival date is required",
    error_departure_date: "Departure date is required",
    error_location: "Location is required",

    success_heading: "Booking Confirmed",
    success_intro: "Thank you for your booking enquiry. Our team will be in touch shortly.",
    no_booking: "No booking data found",
    done_label: "Done",

    not_found_heading: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
};

pub const DE_DE: Messages = Messages {
    brand: "Larkstone Hotels",
    page_title: "Larkstone Hotels Gruppenbuchung",
    language_label: "Sprache",

    landing_heading: "Larkstone Hotels",
    landing_intro: "Willkommen im Gruppenbuchungsportal von Larkstone Hotels. Wir bieten komfortable Unterkünfte für Gruppen jeder Größe.",
    landing_cta: "Jetzt buchen",

    form_heading: "Gruppenbuchung",
    form_intro: "Sie planen einen Aufenthalt für Ihr Team oder Ihre Veranstaltung? Sagen Sie uns, was Sie brauchen, und wir melden uns bei Ihnen.",
    label_first_name: "Vorname",
    label_last_name: "Nachname",
    label_email: "E-Mail-Adresse",
    label_phone: "Telefonnummer",
    label_company: "Firmenname",
    label_group_size: "Gruppengröße",
    label_arrival_date: "Anreisedatum",
    label_departure_date: "Abreisedatum",
    label_location: "Bevorzugter Standort",
    label_requirements: "Besondere Wünsche",
    group_size_placeholder: "Gruppengröße wählen",
    submit_label: "Buchung absenden",
    submission_failed: "Beim Absenden Ihrer Anfrage ist ein Fehler aufgetreten. Bitte versuchen Sie es erneut.",

    error_first_name: "Vorname ist erforderlich",
    error_last_name: "Nachname ist erforderlich",
    error_email: "Ungültige E-Mail-Adresse",
    error_phone: "Telefonnummer muss mindestens 10 Zeichen haben",
    error_company: "Firmenname ist erforderlich",
    error_group_size: "Gruppengröße ist erforderlich",
    error_arrival_date: "Anreisedatum ist erforderlich",
    error_departure_date: "Abreisedatum ist erforderlich",
    error_location: "Standort ist erforderlich",

    success_heading: "Buchung bestätigt",
    success_intro: "Vielen Dank für Ihre Buchungsanfrage. Unser Team meldet sich in Kürze bei Ihnen.",
    no_booking: "Keine Buchungsdaten gefunden",
    done_label: "Fertig",

    not_found_heading: "Seite nicht gefunden",
    not_found_body: "Die gesuchte Seite existiert nicht.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_locale_resolves_to_its_catalog() {
        assert_eq!(
            Messages::for_locale(Locale::EnGb).error_first_name,
            "First name is required"
        );
        assert_eq!(
            Messages::for_locale(Locale::DeDe).error_first_name,
            "Vorname ist erforderlich"
        );
    }

    #[test]
    fn catalogs_share_the_brand() {
        for locale in Locale::ALL {
            assert_eq!(Messages::for_locale(locale).brand, "Larkstone Hotels");
        }
    }
}
