use axum::response::Html;

use crate::i18n::messages::Messages;
use crate::i18n::{switch_locale_path, Locale};

use super::domain::{BookingEnquiry, EnquiryDraft, EnquiryField, GroupSize};
use super::validation::FieldErrors;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #2d2a26; background: #f5f2ec; }
main { max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
.site-header { display: flex; justify-content: space-between; align-items: baseline; max-width: 640px; margin: 1.5rem auto 0; padding: 0 1rem; }
.brand { font-weight: 700; letter-spacing: 0.02em; }
.switcher a, .switcher .current { margin-left: 0.75rem; }
.switcher .current { font-weight: 600; }
.card { background: #fff; border: 1px solid #ddd6ca; border-radius: 8px; padding: 1.5rem; }
.field { margin-bottom: 1rem; }
.field label { display: block; margin-bottom: 0.25rem; font-weight: 600; }
.field input, .field select, .field textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; border: 1px solid #c7beae; border-radius: 4px; font: inherit; }
.field-error { margin: 0.25rem 0 0; color: #9d2323; font-size: 0.875rem; }
.notice { margin-bottom: 1rem; padding: 0.75rem; border: 1px solid #9d2323; border-radius: 4px; color: #9d2323; }
.button { display: inline-block; padding: 0.6rem 1.2rem; background: #4a235a; color: #fff; border: 0; border-radius: 4px; font: inherit; text-decoration: none; cursor: pointer; }
.summary dt { font-weight: 600; margin-top: 0.75rem; }
.summary dd { margin: 0.1rem 0 0; }
.empty-state { font-size: 1.1rem; }
"#;

/// Escape a user-provided value for safe interpolation into HTML text or
/// attribute positions. Catalog strings are inserted verbatim.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(locale: Locale, title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        lang = locale.code(),
    ))
}

fn language_switcher(current: Locale, current_path: &str, label: &str) -> String {
    let mut links = String::new();
    for target in Locale::ALL {
        if target == current {
            links.push_str(&format!(
                r#"<span class="current" aria-current="true">{}</span>"#,
                target.native_name()
            ));
        } else {
            links.push_str(&format!(
                r#"<a href="{href}" hreflang="{code}">{name}</a>"#,
                href = switch_locale_path(current_path, target),
                code = target.code(),
                name = target.native_name(),
            ));
        }
    }
    format!(r#"<nav class="switcher" aria-label="{label}">{links}</nav>"#)
}

fn text_field(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    error: Option<&'static str>,
) -> String {
    let invalid = if error.is_some() {
        r#" aria-invalid="true""#
    } else {
        ""
    };
    let error_html = match error {
        Some(message) => format!(r#"<p class="field-error" role="alert">{message}</p>"#),
        None => String::new(),
    };
    format!(
        r#"<div class="field">
<label for="{name}">{label}</label>
<input type="{kind}" id="{name}" name="{name}" value="{value}"{invalid}>
{error_html}</div>"#,
        value = escape_html(value),
    )
}

fn group_size_field(messages: &Messages, value: &str, error: Option<&'static str>) -> String {
    let mut options = format!(
        r#"<option value="" disabled{selected}>{placeholder}</option>"#,
        selected = if value.is_empty() { " selected" } else { "" },
        placeholder = messages.group_size_placeholder,
    );
    for option in GroupSize::ALL {
        let selected = if value == option.value() {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = option.value(),
        ));
    }

    let invalid = if error.is_some() {
        r#" aria-invalid="true""#
    } else {
        ""
    };
    let error_html = match error {
        Some(message) => format!(r#"<p class="field-error" role="alert">{message}</p>"#),
        None => String::new(),
    };
    format!(
        r#"<div class="field">
<label for="groupSize">{label}</label>
<select id="groupSize" name="groupSize"{invalid}>{options}</select>
{error_html}</div>"#,
        label = messages.label_group_size,
    )
}

fn requirements_field(label: &str, value: &str) -> String {
    format!(
        r#"<div class="field">
<label for="requirements">{label}</label>
<textarea id="requirements" name="requirements" rows="4">{value}</textarea>
</div>"#,
        value = escape_html(value),
    )
}

/// Landing page at `/`. Unlocalized entry point, rendered in the default
/// locale with a single call to action into the booking form.
pub fn landing_page() -> Html<String> {
    let m = Messages::for_locale(Locale::DEFAULT);
    let body = format!(
        r#"<main class="card">
<h1>{heading}</h1>
<p>{intro}</p>
<a class="button" href="/{code}">{cta}</a>
</main>"#,
        heading = m.landing_heading,
        intro = m.landing_intro,
        code = Locale::DEFAULT.code(),
        cta = m.landing_cta,
    );
    layout(Locale::DEFAULT, m.page_title, &body)
}

/// The booking form, optionally re-rendered with per-field errors and a
/// form-level failure notice. Entered values reappear escaped.
pub fn form_page(
    locale: Locale,
    draft: &EnquiryDraft,
    errors: Option<&FieldErrors>,
    notice: Option<&'static str>,
) -> Html<String> {
    let m = Messages::for_locale(locale);
    let path = format!("/{}", locale.code());
    let message = |field: EnquiryField| errors.and_then(|errors| errors.message_for(field));

    let notice_html = match notice {
        Some(text) => format!(r#"<div class="notice" role="alert">{text}</div>"#),
        None => String::new(),
    };

    let fields = [
        text_field(
            m.label_first_name,
            "firstName",
            "text",
            &draft.first_name,
            message(EnquiryField::FirstName),
        ),
        text_field(
            m.label_last_name,
            "lastName",
            "text",
            &draft.last_name,
            message(EnquiryField::LastName),
        ),
        text_field(
            m.label_email,
            "email",
            "email",
            &draft.email,
            message(EnquiryField::Email),
        ),
        text_field(
            m.label_phone,
            "phone",
            "tel",
            &draft.phone,
            message(EnquiryField::Phone),
        ),
        text_field(
            m.label_company,
            "company",
            "text",
            &draft.company,
            message(EnquiryField::Company),
        ),
        group_size_field(m, &draft.group_size, message(EnquiryField::GroupSize)),
        text_field(
            m.label_arrival_date,
            "arrivalDate",
            "date",
            &draft.arrival_date,
            message(EnquiryField::ArrivalDate),
        ),
        text_field(
            m.label_departure_date,
            "departureDate",
            "date",
            &draft.departure_date,
            message(EnquiryField::DepartureDate),
        ),
        text_field(
            m.label_location,
            "location",
            "text",
            &draft.location,
            message(EnquiryField::Location),
        ),
        requirements_field(m.label_requirements, &draft.requirements),
    ];

    let body = format!(
        r#"<header class="site-header"><span class="brand">{brand}</span>{switcher}</header>
<main class="card">
<h1>{heading}</h1>
<p>{intro}</p>
{notice_html}<form method="post" action="{path}">
{fields}<button class="button" type="submit">{submit}</button>
</form>
</main>"#,
        brand = m.brand,
        switcher = language_switcher(locale, &path, m.language_label),
        heading = m.form_heading,
        intro = m.form_intro,
        fields = fields.join("\n"),
        submit = m.submit_label,
    );
    layout(locale, m.page_title, &body)
}

/// The confirmation page. With a stored enquiry every field is rendered
/// read-only (requirements only when non-empty) plus a Done link home;
/// without one, the explicit empty state and nothing else.
pub fn success_page(locale: Locale, enquiry: Option<&BookingEnquiry>) -> Html<String> {
    let m = Messages::for_locale(locale);
    let body = match enquiry {
        Some(enquiry) => {
            let mut rows = String::new();
            let pairs = [
                (m.label_first_name, &enquiry.first_name),
                (m.label_last_name, &enquiry.last_name),
                (m.label_email, &enquiry.email),
                (m.label_phone, &enquiry.phone),
                (m.label_company, &enquiry.company),
                (m.label_group_size, &enquiry.group_size),
                (m.label_arrival_date, &enquiry.arrival_date),
                (m.label_departure_date, &enquiry.departure_date),
                (m.label_location, &enquiry.location),
            ];
            for (label, value) in pairs {
                rows.push_str(&format!(
                    "<dt>{label}</dt><dd>{value}</dd>\n",
                    value = escape_html(value),
                ));
            }
            if !enquiry.requirements.is_empty() {
                rows.push_str(&format!(
                    "<dt>{label}</dt><dd>{value}</dd>\n",
                    label = m.label_requirements,
                    value = escape_html(&enquiry.requirements),
                ));
            }
            format!(
                r#"<main class="card">
<h1>{heading}</h1>
<p>{intro}</p>
<dl class="summary">
{rows}</dl>
<a class="button" href="/{code}">{done}</a>
</main>"#,
                heading = m.success_heading,
                intro = m.success_intro,
                code = locale.code(),
                done = m.done_label,
            )
        }
        None => format!(
            r#"<main class="card">
<p class="empty-state">{no_booking}</p>
</main>"#,
            no_booking = m.no_booking,
        ),
    };
    layout(locale, m.page_title, &body)
}

/// Not-found page for unknown locales and unmatched routes.
pub fn not_found_page() -> Html<String> {
    let m = Messages::for_locale(Locale::DEFAULT);
    let body = format!(
        r#"<main class="card">
<h1>{heading}</h1>
<p>{body}</p>
</main>"#,
        heading = m.not_found_heading,
        body = m.not_found_body,
    );
    layout(Locale::DEFAULT, m.not_found_heading, &body)
}
