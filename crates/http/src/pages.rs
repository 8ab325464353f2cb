//! Server-rendered page shells and embedded static assets.
//!
//! The pages keep the record in the browser's local storage; their scripts
//! only call the stateless JSON endpoints for coercion and chart data.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use bankdash_core::bank_details::{FIELD_DEFINITIONS, FieldDefinition};
use bankdash_core::constants::{
    BANK_DETAILS_STORAGE_KEY, DEFAULT_PASSWORD, DEFAULT_USERNAME, LOGIN_REDIRECT_DELAY_MS,
};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::AppState;

const LOGIN_HTML: &str = include_str!("pages/login.html");
const BANK_FORM_HTML: &str = include_str!("pages/bank_form.html");
const DASHBOARD_HTML: &str = include_str!("pages/dashboard.html");
const NAVBAR_HTML: &str = include_str!("pages/navbar.html");

const APP_CSS: &str = include_str!("assets/app.css");
const APP_JS: &str = include_str!("assets/app.js");
const BRAND_LOGO_SVG: &str = include_str!("assets/brand_logo.svg");

/// Replace each `{{NAME}}` placeholder in `template`.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_owned(), |page, (name, value)| {
        page.replace(&format!("{{{{{name}}}}}"), value)
    })
}

fn render_field(out: &mut String, def: &FieldDefinition) {
    let name = encode_double_quoted_attribute(def.name);
    let step = def.kind.step().map(|s| format!(r#" step="{s}""#)).unwrap_or_default();
    out.push_str(&format!(
        r#"
      <div class="input-group">
        <label for="{name}">{label}</label>
        <input id="{name}" name="{name}" type="{input_type}"{step} data-required="{required}">
        <p class="error-text" data-error-for="{name}"></p>
      </div>"#,
        label = encode_text(def.label),
        input_type = def.kind.input_type(),
        required = encode_double_quoted_attribute(def.required_message),
    ));
}

/// The fifteen inputs in display order.
pub(crate) fn render_form_fields() -> String {
    let mut out = String::new();
    for def in &FIELD_DEFINITIONS {
        render_field(&mut out, def);
    }
    out
}

const DEMO_NOTE_HTML: &str = r#"<p class="security-note">
      <strong>Demo Credentials:</strong> <code>{{USERNAME}}</code> / <code>{{PASSWORD}}</code>
    </p>"#;

/// Only the built-in demo pair is ever printed; injected credentials stay off the page.
fn demo_note(state: &AppState) -> String {
    if state.auth.uses_demo_credentials() {
        render(DEMO_NOTE_HTML, &[("USERNAME", DEFAULT_USERNAME), ("PASSWORD", DEFAULT_PASSWORD)])
    } else {
        String::new()
    }
}

pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render(
        LOGIN_HTML,
        &[("DEMO_NOTE", &demo_note(&state)), ("REDIRECT_MS", &LOGIN_REDIRECT_DELAY_MS.to_string())],
    ))
}

pub async fn bank_form_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render(
        BANK_FORM_HTML,
        &[
            ("NAVBAR", NAVBAR_HTML),
            ("FIELDS", &render_form_fields()),
            ("STORAGE_KEY", BANK_DETAILS_STORAGE_KEY),
            ("REDIRECT_MS", &state.form_redirect_ms.to_string()),
        ],
    ))
}

pub async fn dashboard_page() -> Html<String> {
    Html(render(
        DASHBOARD_HTML,
        &[("NAVBAR", NAVBAR_HTML), ("STORAGE_KEY", BANK_DETAILS_STORAGE_KEY)],
    ))
}

fn asset(content_type: &'static str, body: &'static str) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

pub async fn app_css() -> Response {
    asset("text/css; charset=utf-8", APP_CSS)
}

pub async fn app_js() -> Response {
    asset("text/javascript; charset=utf-8", APP_JS)
}

pub async fn brand_logo() -> Response {
    asset("image/svg+xml", BRAND_LOGO_SVG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let page = render("{{A}}-{{B}}-{{A}}", &[("A", "x"), ("B", "y")]);
        assert_eq!(page, "x-y-x");
    }

    #[test]
    fn test_form_has_fifteen_inputs() {
        let fields = render_form_fields();
        assert_eq!(fields.matches("<input ").count(), 15);
        assert!(fields.contains(r#"id="loanAmount" name="loanAmount" type="number" step="any""#));
        assert!(fields.contains(r#"id="loanTenure" name="loanTenure" type="number" data-required"#));
        assert!(fields.contains(r#"type="date""#));
        assert!(fields.contains("Account Type (e.g., Savings)"));
    }

    #[test]
    fn test_field_markup_is_encoded() {
        use bankdash_core::bank_details::FieldKind;

        let def = FieldDefinition {
            name: "odd\"name",
            label: "Rate <%> & fees",
            kind: FieldKind::Text,
            required_message: "Say \"yes\"",
        };
        let mut out = String::new();
        render_field(&mut out, &def);
        assert!(out.contains(r#"id="odd&quot;name""#));
        assert!(out.contains("Rate &lt;%&gt; &amp; fees</label>"));
        assert!(out.contains(r#"data-required="Say &quot;yes&quot;""#));
    }

    #[test]
    fn test_demo_note_only_for_default_pair() {
        let state = AppState::default();
        assert!(demo_note(&state).contains("<code>user123</code> / <code>password123</code>"));

        let mut state = AppState::default();
        state.auth.password = "Pr0d-Secret!".to_owned();
        assert!(demo_note(&state).is_empty());
    }
}
