// End-to-end flows over the real router with in-memory infrastructure.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use events_api::modules::admission::core::limiter::AdmissionLimiter;
use events_api::modules::admission::core::policy::RatePolicy;
use events_api::modules::events::adapters::outbound::store_in_memory::InMemoryEventStore;
use events_api::shell::config::Environment;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

const CREATE_BODY: &str = r#"{"name":"Team Offsite","phone":"+31612345678","date_time":"2099-06-01T18:00:00+00:00","location":"Amsterdam","cost_per_person":"$25.00","description":"Annual summer offsite"}"#;
const UPDATE_BODY: &str = r#"{"name":"Winter Offsite","phone":"","date_time":"2099-12-01T18:00:00+00:00","location":"Utrecht","cost_per_person":"","description":""}"#;

fn make_app(create_policy: RatePolicy) -> Router {
    router(AppState {
        store: Arc::new(InMemoryEventStore::new()),
        limiter: Arc::new(AdmissionLimiter::new()),
        environment: Environment::Production,
        create_policy,
        update_policy: RatePolicy::moderate(),
    })
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn event_lifecycle_over_http() {
    let app = make_app(RatePolicy::strict());

    // Create.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/events", CREATE_BODY))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    let id = created["event"]["id"].as_str().unwrap().to_string();

    // List.
    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["events"][0]["id"], id.as_str());

    // Get.
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["event"]["data"]["name"], "Team Offsite");

    // Update.
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/events/{id}"), UPDATE_BODY))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await["event"]["data"]["name"], "Winter Offsite");

    // Delete, then the id is gone.
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creation_is_throttled_per_caller() {
    let app = make_app(RatePolicy::new("strict", Duration::from_secs(60), 2));

    let from = |addr: &str| {
        Request::post("/events")
            .header("content-type", "application/json")
            .header("x-forwarded-for", addr.to_string())
            .body(Body::from(CREATE_BODY))
            .unwrap()
    };

    for _ in 0..2 {
        let response = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers().get("X-RateLimit-Limit").unwrap(), "2");
    assert_eq!(response.headers().get("X-RateLimit-Remaining").unwrap(), "0");
    assert!(response.headers().contains_key("X-RateLimit-Reset"));
    assert!(response.headers().contains_key("Retry-After"));
    let throttled = body_json(response).await;
    assert_eq!(throttled["error"], "Too many requests. Please try again later.");

    // Another caller is unaffected; throttled requests created nothing extra.
    let response = app.clone().oneshot(from("198.51.100.23")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await["count"], 3);
}
