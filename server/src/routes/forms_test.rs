use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::post;
use serde_json::json;

use super::*;
use crate::config::{FormspreeConfig, RelayRateLimit, RelayTimeouts};
use crate::rate_limit::RateLimiter;
use crate::routes::api_routes;
use crate::services::formspree::FormspreeClient;

type Captured = Arc<Mutex<Vec<Value>>>;

async fn spawn_formspree(status: StatusCode) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let seen = captured.clone();
    let app = Router::new().route(
        "/f/test",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(body);
                status
            }
        }),
    );
    (format!("{}/f/test", serve(app).await), captured)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve the API routes backed by `endpoint`; returns the base URL.
async fn spawn_app(endpoint: &str, limit: usize) -> String {
    let relay = FormspreeClient::new(&FormspreeConfig {
        endpoint: endpoint.to_owned(),
        timeouts: RelayTimeouts { request: Duration::from_secs(5), connect: Duration::from_secs(2) },
    })
    .unwrap();
    let limiter = RateLimiter::new(RelayRateLimit { limit, window: Duration::from_secs(60) });
    serve(api_routes(AppState::new(relay, limiter))).await
}

async fn post_form(base: &str, path: &str, ip: &str, body: &Value) -> (StatusCode, SubmissionResponse) {
    let response = reqwest::Client::new()
        .post(format!("{base}{path}"))
        .header("x-forwarded-for", ip)
        .json(body)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    (status, response.json().await.unwrap())
}

fn contact_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "company": "Analytical Engines",
        "message": "We need a new landing page.",
        "projectType": "website",
        "budget": "5k-10k",
    })
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn client_ip_prefers_first_forwarded_entry() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"));
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
    assert_eq!(client_ip(&headers), "203.0.113.7");
}

#[test]
fn client_ip_falls_back_to_real_ip_then_unknown() {
    let mut headers = HeaderMap::new();
    assert_eq!(client_ip(&headers), "unknown");
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
    assert_eq!(client_ip(&headers), "198.51.100.2");
}

#[test]
fn email_shape_check() {
    assert!(valid_email("ada@example.com"));
    assert!(valid_email(" ada.l+site@mail.example.org "));
    assert!(!valid_email("ada"));
    assert!(!valid_email("@example.com"));
    assert!(!valid_email("ada@localhost"));
    assert!(!valid_email("ada@example..com"));
    assert!(!valid_email("ada@@example.com"));
    assert!(!valid_email("ada lovelace@example.com"));
}

#[test]
fn contact_requires_name_email_and_message() {
    let mut form = ContactSubmission {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
        ..ContactSubmission::default()
    };
    assert_eq!(form.validate(), Ok(()));

    form.message = "   ".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::Missing { field: "message" }));

    form.message = "Hello".to_owned();
    form.budget = "x".repeat(51);
    assert_eq!(form.validate(), Err(ValidationError::TooLong { field: "budget", max: 50 }));
}

#[test]
fn waitlist_interests_are_optional() {
    let form = WaitlistSubmission {
        name: "Grace".to_owned(),
        email: "grace@example.com".to_owned(),
        interests: String::new(),
    };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn error_statuses() {
    assert_eq!(validation_error_to_status(&ValidationError::InvalidEmail), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(validation_error_to_status(&ValidationError::MalformedBody), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        rate_limit_error_to_status(&RateLimitError::PerClientExceeded { limit: 5, window_secs: 60 }),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(relay_error_to_status(&RelayError::Request("refused".to_owned())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        relay_error_to_status(&RelayError::Rejected { status: 500, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
}

// =============================================================================
// ROUTES
// =============================================================================

#[tokio::test]
async fn contact_is_relayed_with_envelope() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 5).await;

    let (status, reply) = post_form(&base, "/api/contact", "203.0.113.7", &contact_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, SubmissionResponse { success: true, message: CONTACT_RECEIVED.to_owned() });
    let seen = captured.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["form_type"], "Contact Form");
    assert_eq!(seen[0]["_subject"], "New Contact Form Submission from Ada Lovelace");
    assert_eq!(seen[0]["project_type"], "website");
}

#[tokio::test]
async fn waitlist_is_relayed_with_envelope() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 5).await;
    let body = json!({ "name": "Grace", "email": "grace@example.com", "interests": "Online Courses" });

    let (status, reply) = post_form(&base, "/api/ai-waitlist", "203.0.113.7", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, WAITLIST_JOINED);
    let seen = captured.lock().unwrap();
    assert_eq!(seen[0]["form_type"], "AI Waitlist");
    assert_eq!(seen[0]["_subject"], "New AI Waitlist Signup from Grace");
}

#[tokio::test]
async fn invalid_submission_is_not_forwarded() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 5).await;
    let body = json!({ "name": "Ada", "email": "ada@example.com", "message": "" });

    let (status, reply) = post_form(&base, "/api/contact", "203.0.113.7", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!reply.success);
    assert_eq!(reply.message, "message is required");
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let (endpoint, _captured) = spawn_formspree(StatusCode::INTERNAL_SERVER_ERROR).await;
    let base = spawn_app(&endpoint, 5).await;

    let (status, reply) = post_form(&base, "/api/contact", "203.0.113.7", &contact_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(reply, SubmissionResponse { success: false, message: RELAY_FAILED.to_owned() });
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited_per_ip() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 2).await;

    for _ in 0..2 {
        let (status, _) = post_form(&base, "/api/contact", "203.0.113.7", &contact_body()).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (blocked, reply) = post_form(&base, "/api/contact", "203.0.113.7", &contact_body()).await;
    assert_eq!(blocked, StatusCode::TOO_MANY_REQUESTS);
    assert!(!reply.success);

    let (other, _) = post_form(&base, "/api/contact", "198.51.100.2", &contact_body()).await;
    assert_eq!(other, StatusCode::OK);
    assert_eq!(captured.lock().unwrap().len(), 3);
}

async fn post_raw(base: &str, ip: &str, content_type: &str, body: &'static str) -> (StatusCode, SubmissionResponse) {
    let response = reqwest::Client::new()
        .post(format!("{base}/api/contact"))
        .header("x-forwarded-for", ip)
        .header("content-type", content_type)
        .body(body)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn malformed_body_gets_json_reply() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 5).await;

    let (status, reply) = post_raw(&base, "203.0.113.7", "application/json", "{not json").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        reply,
        SubmissionResponse { success: false, message: ValidationError::MalformedBody.to_string() }
    );

    let (status, reply) = post_raw(&base, "203.0.113.8", "text/plain", "name=Ada").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!reply.success);
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_bodies_count_against_rate_limit() {
    let (endpoint, captured) = spawn_formspree(StatusCode::OK).await;
    let base = spawn_app(&endpoint, 1).await;

    let (first, _) = post_raw(&base, "203.0.113.7", "application/json", "{not json").await;
    assert_eq!(first, StatusCode::UNPROCESSABLE_ENTITY);
    let (second, _) = post_raw(&base, "203.0.113.7", "application/json", "{not json").await;
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);

    let (valid, reply) = post_form(&base, "/api/contact", "203.0.113.7", &contact_body()).await;
    assert_eq!(valid, StatusCode::TOO_MANY_REQUESTS);
    assert!(!reply.success);
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_app("http://127.0.0.1:9/f/test", 5).await;
    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
