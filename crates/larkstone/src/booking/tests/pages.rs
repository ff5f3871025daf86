use super::common::{draft, enquiry};
use crate::booking::domain::EnquiryDraft;
use crate::booking::pages::{escape_html, form_page, success_page};
use crate::booking::validation::EnquirySchema;
use crate::i18n::Locale;

#[test]
fn escape_html_neutralizes_markup_characters() {
    assert_eq!(escape_html(r#"<b>&"'"#), "&lt;b&gt;&amp;&quot;&#39;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn form_page_escapes_entered_values() {
    let mut candidate = draft();
    candidate.first_name = r#""><script>alert(1)</script>"#.to_string();

    let html = form_page(Locale::EnGb, &candidate, None, None).0;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn form_page_marks_each_failing_field() {
    let errors = EnquirySchema::for_locale(Locale::EnGb)
        .validate(&EnquiryDraft::default())
        .expect_err("empty draft is rejected");

    let html = form_page(Locale::EnGb, &EnquiryDraft::default(), Some(&errors), None).0;
    assert_eq!(html.matches(r#"<p class="field-error""#).count(), 9);
    assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 9);
    assert!(html.contains("First name is required"));
    assert!(html.contains("Group size is required"));
}

#[test]
fn form_page_posts_back_to_its_own_locale() {
    let html = form_page(Locale::DeDe, &EnquiryDraft::default(), None, None).0;
    assert!(html.contains(r#"<form method="post" action="/de-DE">"#));
    assert!(html.contains(r#"lang="de-DE""#));
    assert!(html.contains("Buchung absenden"));
}

#[test]
fn switcher_links_only_to_the_other_locale() {
    let html = form_page(Locale::EnGb, &EnquiryDraft::default(), None, None).0;
    assert!(html.contains(r#"<a href="/de-DE" hreflang="de-DE">Deutsch</a>"#));
    assert!(html.contains(r#"<span class="current" aria-current="true">English</span>"#));
    assert_eq!(html.matches("hreflang=").count(), 1);

    let html = form_page(Locale::DeDe, &EnquiryDraft::default(), None, None).0;
    assert!(html.contains(r#"<a href="/en-GB" hreflang="en-GB">English</a>"#));
}

#[test]
fn group_size_select_offers_the_closed_option_set() {
    let html = form_page(Locale::EnGb, &EnquiryDraft::default(), None, None).0;
    for option in ["1-10", "11-20", "21-50", "51+"] {
        assert!(
            html.contains(&format!(r#"<option value="{option}">{option}</option>"#)),
            "missing option {option}"
        );
    }
    assert!(html.contains(r#"<option value="" disabled selected>Select group size</option>"#));
}

#[test]
fn group_size_select_keeps_the_entered_choice() {
    let html = form_page(Locale::EnGb, &draft(), None, None).0;
    assert!(html.contains(r#"<option value="1-10" selected>1-10</option>"#));
    assert!(html.contains(r#"<option value="" disabled>Select group size</option>"#));
}

#[test]
fn form_notice_renders_above_the_form() {
    let html = form_page(
        Locale::EnGb,
        &draft(),
        None,
        Some("Something went wrong while submitting your enquiry. Please try again."),
    )
    .0;
    assert!(html.contains(r#"<div class="notice" role="alert">"#));
}

#[test]
fn success_page_lists_every_field() {
    let html = success_page(Locale::EnGb, Some(&enquiry())).0;
    for value in [
        "John",
        "Doe",
        "john@example.com",
        "1234567890",
        "Test Company",
        "1-10",
        "2024-12-01",
        "2024-12-05",
        "London",
    ] {
        assert!(html.contains(value), "missing {value}");
    }
    assert!(html.contains("Booking Confirmed"));
    assert!(html.contains(r#"<a class="button" href="/en-GB">Done</a>"#));
}

#[test]
fn success_page_hides_blank_requirements() {
    let html = success_page(Locale::EnGb, Some(&enquiry())).0;
    assert!(!html.contains("Special Requirements"));

    let mut filled = enquiry();
    filled.requirements = "Step-free access".to_string();
    let html = success_page(Locale::EnGb, Some(&filled)).0;
    assert!(html.contains("Special Requirements"));
    assert!(html.contains("Step-free access"));
}

#[test]
fn empty_confirmation_renders_only_the_empty_state() {
    let html = success_page(Locale::EnGb, None).0;
    assert!(html.contains("No booking data found"));
    for label in ["First Name", "Preferred Location", "Done"] {
        assert!(!html.contains(label), "unexpected {label}");
    }
}

#[test]
fn german_confirmation_uses_the_german_catalog() {
    let html = success_page(Locale::DeDe, Some(&enquiry())).0;
    assert!(html.contains("Vorname"));
    assert!(html.contains("Fertig"));
    assert!(html.contains(r#"href="/de-DE""#));
}
