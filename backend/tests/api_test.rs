use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinic_backend::routes;
use clinic_backend::test_util::{test_state, test_state_with_qr_upstream};

fn app() -> Router {
    routes::app(test_state())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = if let Some(body) = body {
        builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, token, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, username: &str, pin: &str) -> String {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": username, "pin": pin})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {}", username);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[rstest]
#[case("Mary", "5678", true)]
#[case("mary", "5678", true)]
#[case("MARY", "5678", true)]
#[case("Elton", "E301277", true)]
#[case("Sarah", "1234", true)]
#[case("Mary", "0000", false)]
#[case("Mary", "567", false)]
#[case("Nobody", "5678", false)]
#[tokio::test]
async fn login_matrix(#[case] username: &str, #[case] pin: &str, #[case] ok: bool) {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": username, "pin": pin})),
    )
    .await;

    if ok {
        assert_eq!(status, StatusCode::OK);
        assert!(body["token"].as_str().is_some());
    } else {
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "invalid_credentials");
    }
}

#[tokio::test]
async fn login_sets_session_identity() {
    let app = app();
    let token = login(&app, "Mary", "5678").await;

    let (status, me) = send_json(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["firstName"], "Mary");
    assert_eq!(me["role"], "reception");
    // The PIN never leaves the directory
    assert!(me.get("pin").is_none());
}

#[tokio::test]
async fn logout_clears_session_idempotently() {
    let app = app();
    let token = login(&app, "Mary", "5678").await;

    let (status, _) = send(&app, Method::POST, "/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A second logout with the same dead token is still a success
    let (status, _) = send(&app, Method::POST, "/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // So is a logout with no token at all
    let (status, _) = send(&app, Method::POST, "/auth/logout", None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[case("/auth/me")]
#[case("/nav")]
#[case("/patients")]
#[case("/doctors")]
#[case("/appointments")]
#[case("/dashboard/stats")]
#[case("/qr/link")]
#[tokio::test]
async fn gated_routes_require_session(#[case] uri: &str) {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "{} was reachable", uri);
    assert_eq!(body["error"]["type"], "unauthenticated");
}

#[tokio::test]
async fn nav_is_scoped_to_the_session_role() {
    let app = app();
    let token = login(&app, "Mary", "5678").await;

    let (status, nav) = send_json(&app, Method::GET, "/nav", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nav["role"], "reception");
    let paths: Vec<&str> = nav["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/appointments", "/qr-generator"]);
}

#[tokio::test]
async fn user_directory_is_admin_only() {
    let app = app();

    let reception = login(&app, "Mary", "5678").await;
    let (status, body) = send_json(&app, Method::GET, "/users", Some(&reception), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["type"], "forbidden");

    let admin = login(&app, "Elton", "E301277").await;
    let (status, body) = send_json(&app, Method::GET, "/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn created_user_can_log_in_until_deactivated() {
    let app = app();
    let admin = login(&app, "Elton", "E301277").await;

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(&admin),
        Some(json!({
            "firstName": "Ana",
            "lastName": "Lopez",
            "email": "ana.lopez@clinic.com",
            "role": "reception",
            "pin": "4321"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isActive"], true);
    let id = created["id"].as_str().unwrap().to_string();

    // The new identity passes the gate
    login(&app, "Ana", "4321").await;

    // Deactivation stops future logins
    let uri = format!("/users/{}/toggle-active", id);
    let (status, toggled) = send_json(&app, Method::POST, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["isActive"], false);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": "Ana", "pin": "4321"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_is_reachable_without_a_session() {
    let app = app();

    let (status, context) = send_json(&app, Method::GET, "/book/context", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(context["doctors"].as_array().unwrap().len(), 2);
    assert_eq!(context["availableTimes"].as_array().unwrap().len(), 12);
    assert_eq!(context["appointmentTypes"].as_array().unwrap().len(), 4);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/book",
        None,
        Some(json!({
            "firstName": "Paula",
            "lastName": "Reyes",
            "phone": "+1-555-0199",
            "email": "paula@example.com",
            "doctorId": "2",
            "date": "2024-09-02",
            "time": "09:30:00",
            "type": "consultation"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["reference"].as_str().is_some());
}

#[tokio::test]
async fn booking_rejects_incomplete_requests() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/book",
        None,
        Some(json!({
            "firstName": " ",
            "lastName": "Reyes",
            "phone": "+1-555-0199",
            "email": "paula@example.com",
            "doctorId": "2",
            "date": "2024-09-02",
            "time": "09:30:00",
            "type": "consultation"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request");

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/book",
        None,
        Some(json!({
            "firstName": "Paula",
            "lastName": "Reyes",
            "phone": "+1-555-0199",
            "email": "paula@example.com",
            "doctorId": "99",
            "date": "2024-09-02",
            "time": "09:30:00",
            "type": "consultation"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patient_crud_round_trip() {
    let app = app();
    let token = login(&app, "Elton", "E301277").await;

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/patients",
        Some(&token),
        Some(json!({
            "firstName": "Carla",
            "lastName": "Mendez",
            "dateOfBirth": "1990-01-30",
            "gender": "female",
            "phone": "+1-555-0150",
            "email": "carla@example.com",
            "address": "789 Pine Rd, City, State 12345",
            "emergencyContact": {
                "name": "Luis Mendez",
                "phone": "+1-555-0151",
                "relationship": "Husband"
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, found) =
        send_json(&app, Method::GET, "/patients?search=mendez", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["total"], 1);

    let uri = format!("/patients/{}", id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn appointments_filter_by_doctor() {
    let app = app();
    let token = login(&app, "Mary", "5678").await;

    let (status, body) =
        send_json(&app, Method::GET, "/appointments?doctorId=2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0]["patientId"], "1");

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/appointments?status=confirmed",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0]["doctorId"], "4");
}

#[tokio::test]
async fn qr_link_clamps_the_requested_size() {
    let app = app();
    let token = login(&app, "Mary", "5678").await;

    let (status, body) =
        send_json(&app, Method::GET, "/qr/link?size=5000", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["size"], 800);
    assert_eq!(body["bookingUrl"], "http://localhost:8080/book");
    assert!(body["imageUrl"].as_str().unwrap().contains("size=800x800"));
}

#[tokio::test]
async fn qr_image_proxies_the_upstream_png() {
    let upstream = MockServer::start().await;
    let png = b"\x89PNG\r\n\x1a\nfakeimage".to_vec();
    Mock::given(method("GET"))
        .and(path("/qr"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png.clone()))
        .mount(&upstream)
        .await;

    let app = routes::app(test_state_with_qr_upstream(&format!("{}/qr", upstream.uri())));
    let token = login(&app, "Mary", "5678").await;

    let (status, body) = send(&app, Method::GET, "/qr/image", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.to_vec(), png);
}

#[tokio::test]
async fn qr_image_upstream_failure_is_a_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qr"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let app = routes::app(test_state_with_qr_upstream(&format!("{}/qr", upstream.uri())));
    let token = login(&app, "Mary", "5678").await;

    let (status, body) = send_json(&app, Method::GET, "/qr/image", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["type"], "upstream_error");
}
