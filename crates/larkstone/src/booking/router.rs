use std::sync::Arc;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    extract::{Form, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use crate::i18n::messages::Messages;
use crate::i18n::Locale;

use super::domain::EnquiryDraft;
use super::pages;
use super::service::{SubmissionError, SubmissionGate};
use super::store::{BookingStore, SessionId};
use super::validation::EnquirySchema;

const SESSION_COOKIE: &str = "sid";

/// Shared state for the site: the session-scoped store and the submission
/// gate.
pub struct SiteState<S, G> {
    pub store: Arc<S>,
    pub gate: Arc<G>,
}

/// Router builder exposing the whole booking surface: landing page,
/// locale-prefixed form and confirmation pages, and the JSON endpoint.
pub fn booking_router<S, G>(state: Arc<SiteState<S, G>>) -> Router
where
    S: BookingStore + 'static,
    G: SubmissionGate + 'static,
{
    Router::new()
        .route("/", get(landing_handler))
        .route("/api/bookings", post(api_submit_handler::<S, G>))
        .route(
            "/:locale",
            get(form_page_handler).post(form_submit_handler::<S, G>),
        )
        .route("/:locale/success", get(success_page_handler::<S, G>))
        .with_state(state)
}

pub(crate) async fn landing_handler() -> Response {
    pages::landing_page().into_response()
}

pub(crate) async fn form_page_handler(
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found_response();
    };

    let page = pages::form_page(locale, &EnquiryDraft::default(), None, None);
    match session_from_headers(&headers) {
        Some(_) => page.into_response(),
        None => {
            let cookie = session_cookie(&SessionId::new());
            ([(header::SET_COOKIE, cookie)], page).into_response()
        }
    }
}

pub(crate) async fn form_submit_handler<S, G>(
    State(state): State<Arc<SiteState<S, G>>>,
    Path(locale): Path<String>,
    headers: HeaderMap,
    payload: Result<Form<EnquiryDraft>, FormRejection>,
) -> Response
where
    S: BookingStore + 'static,
    G: SubmissionGate + 'static,
{
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found_response();
    };

    let draft = match payload {
        Ok(Form(draft)) => draft,
        Err(rejection) => {
            warn!(error = %rejection, "malformed booking form post");
            return rejection.into_response();
        }
    };

    let schema = EnquirySchema::for_locale(locale);
    if let Err(errors) = schema.validate(&draft) {
        return pages::form_page(locale, &draft, Some(&errors), None).into_response();
    }

    match state.gate.submit(&draft) {
        Ok(receipt) => {
            let (session, issued) = match session_from_headers(&headers) {
                Some(session) => (session, false),
                None => (SessionId::new(), true),
            };
            state.store.put(session, receipt.enquiry);

            let redirect = Redirect::to(&format!("/{}/success", locale.code()));
            if issued {
                ([(header::SET_COOKIE, session_cookie(&session))], redirect).into_response()
            } else {
                redirect.into_response()
            }
        }
        Err(err) => {
            warn!(error = %err, "group booking submission failed");
            let failed = Messages::for_locale(locale).submission_failed;
            pages::form_page(locale, &draft, None, Some(failed)).into_response()
        }
    }
}

pub(crate) async fn success_page_handler<S, G>(
    State(state): State<Arc<SiteState<S, G>>>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response
where
    S: BookingStore + 'static,
    G: SubmissionGate + 'static,
{
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found_response();
    };

    let enquiry =
        session_from_headers(&headers).and_then(|session| state.store.get(&session));
    pages::success_page(locale, enquiry.as_ref()).into_response()
}

pub(crate) async fn api_submit_handler<S, G>(
    State(state): State<Arc<SiteState<S, G>>>,
    payload: Result<Json<EnquiryDraft>, JsonRejection>,
) -> Response
where
    S: BookingStore + 'static,
    G: SubmissionGate + 'static,
{
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            warn!(error = %rejection, "malformed booking payload");
            let payload = json!({ "error": "Invalid form data" });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match state.gate.submit(&draft) {
        Ok(receipt) => {
            let payload = json!({ "success": true, "enquiry": receipt.enquiry });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(SubmissionError::Rejected(errors)) => {
            let payload = json!({ "error": "Invalid form data", "fields": errors });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, pages::not_found_page()).into_response()
}

fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            SessionId::parse(value)
        } else {
            None
        }
    })
}

fn session_cookie(session: &SessionId) -> String {
    format!("{SESSION_COOKIE}={session}; Path=/; HttpOnly; SameSite=Lax")
}
