//! Server-rendered pages for browser clients

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use super::state::AppState;
use super::types::{ApiError, ContactForm};

/// GET /
pub async fn home() -> Html<String> {
    Html(render_page(
        "Homeworth",
        "<h1>Homeworth</h1>\
         <p>House price estimates for Vadodara.</p>\
         <p><a href=\"/predict\">Get an estimate</a> &middot; \
         <a href=\"/about\">About</a> &middot; \
         <a href=\"/contact\">Contact</a></p>",
    ))
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(render_page(
        "About",
        "<h1>About</h1>\
         <p>Homeworth estimates house prices from type, location, room counts \
         and built-up area. When a trained model is available it is used; \
         otherwise a fixed linear heuristic provides the estimate.</p>",
    ))
}

/// GET /charts
pub async fn charts() -> Html<String> {
    Html("<h2 style='text-align:center;color:#00c4b4;'>Charts Coming Soon...</h2>".to_string())
}

/// GET /contact
pub async fn contact_page() -> Html<String> {
    Html(render_contact_page(None))
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match state
        .contact_log
        .append(&form.name, &form.email, &form.message)
    {
        Ok(()) => {
            let msg = format!(
                "\u{2705} Thank you {}, your message has been received successfully!",
                form.name
            );
            Html(render_contact_page(Some(&msg))).into_response()
        }
        Err(err) => {
            error!(error = %err, "Failed to record contact message");
            let api_error = ApiError::from(err);
            (
                api_error.status,
                Html(render_contact_page(Some("Failed to save your message, please try again."))),
            )
                .into_response()
        }
    }
}

fn render_contact_page(message: Option<&str>) -> String {
    let notice = message
        .map(|m| format!("<p class=\"notice\">{}</p>", escape_html(m)))
        .unwrap_or_default();

    render_page(
        "Contact",
        &format!(
            "<h1>Contact</h1>{notice}\
             <form method=\"post\" action=\"/contact\">\
             <label>Name <input type=\"text\" name=\"name\" required></label>\
             <label>Email <input type=\"email\" name=\"email\" required></label>\
             <label>Message <textarea name=\"message\" required></textarea></label>\
             <button type=\"submit\">Send</button>\
             </form>"
        ),
    )
}

/// The prediction form, optionally carrying a result or an error banner.
pub fn render_predict_page(
    locations: &[String],
    prediction: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut options = String::new();
    for location in locations {
        let escaped = escape_html(location);
        options.push_str(&format!(
            "<option value=\"{escaped}\">{escaped}</option>"
        ));
    }

    let banner = match (prediction, error) {
        (Some(text), _) => format!(
            "<p class=\"prediction\">Estimated price: {}</p>",
            escape_html(text)
        ),
        (None, Some(message)) => {
            format!("<p class=\"error\">{}</p>", escape_html(message))
        }
        (None, None) => String::new(),
    };

    render_page(
        "Estimate",
        &format!(
            "<h1>House Price Estimate</h1>{banner}\
             <form method=\"post\" action=\"/predict\">\
             <label>House type \
             <select name=\"house_type\">\
             <option value=\"Apartment\">Apartment</option>\
             <option value=\"Independent House\">Independent House</option>\
             <option value=\"Villa\">Villa</option>\
             </select></label>\
             <label>Location <select name=\"location\">{options}</select></label>\
             <label>BHK <input type=\"number\" name=\"bhk\" min=\"1\" required></label>\
             <label>Bathrooms <input type=\"number\" name=\"bathrooms\" min=\"1\" required></label>\
             <label>Balconies <input type=\"number\" name=\"balcony\" min=\"1\" required></label>\
             <label>Area (sq.ft.) <input type=\"text\" name=\"area_sqft\" required></label>\
             <button type=\"submit\">Estimate</button>\
             </form>"
        ),
    )
}

fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{} - Homeworth</title></head>\
         <body>{}</body>\
         </html>",
        escape_html(title),
        body
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_page_lists_locations() {
        let locations = ["Alkapuri".to_string(), "Gotri".to_string()];
        let page = render_predict_page(&locations, None, None);
        assert!(page.contains("<option value=\"Alkapuri\">Alkapuri</option>"));
        assert!(page.contains("<option value=\"Gotri\">Gotri</option>"));
    }

    #[test]
    fn test_predict_page_shows_prediction() {
        let page = render_predict_page(&[], Some("\u{20b9} 29.2 Lakh"), None);
        assert!(page.contains("Estimated price:"));
        assert!(page.contains("29.2 Lakh"));
    }

    #[test]
    fn test_predict_page_shows_error() {
        let page = render_predict_page(&[], None, Some("Missing field: location"));
        assert!(page.contains("class=\"error\""));
        assert!(page.contains("Missing field: location"));
    }

    #[test]
    fn test_location_names_escaped() {
        let locations = ["A<b>".to_string()];
        let page = render_predict_page(&locations, None, None);
        assert!(page.contains("A&lt;b&gt;"));
        assert!(!page.contains("A<b>"));
    }
}
