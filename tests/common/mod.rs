#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use tableside::router::init_router;
use tableside::state::AppState;
use tableside_config::{CorsConfig, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret-with-enough-length";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `name=value` of the session cookie set by this response.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("token="))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    pub fn id(&self) -> Uuid {
        self.body["id"]
            .as_str()
            .and_then(|id| id.parse().ok())
            .unwrap_or_else(|| panic!("response has no id: {}", self.body))
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().simple().to_string()[..12])
}

/// Signs up a fresh owner. Returns the session cookie and owner id.
pub async fn sign_up_owner(app: &Router) -> (String, Uuid) {
    let response = send(
        app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({
            "username": unique_username("owner"),
            "password": "strongpassword"
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

    let cookie = response.session_cookie().expect("sign-up sets a session cookie");
    (cookie, response.id())
}

pub async fn create_restaurant(app: &Router, owner_cookie: &str) -> Uuid {
    let response = send(
        app,
        Method::POST,
        "/api/restaurants",
        Some(owner_cookie),
        Some(json!({ "name": unique_username("restaurant") })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.id()
}

/// Registers a staff member under `restaurant_id` and signs them in.
/// Returns the staff session cookie and staff id.
pub async fn staff_session(app: &Router, owner_cookie: &str, restaurant_id: Uuid) -> (String, Uuid) {
    let username = unique_username("staff");
    let response = send(
        app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_id}/staff"),
        Some(owner_cookie),
        Some(json!({ "username": username, "password": "1234" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let staff_id = response.id();

    let response = send(
        app,
        Method::POST,
        "/api/auth/staff/sign-in",
        None,
        Some(json!({ "username": username, "password": "1234" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);

    let cookie = response.session_cookie().expect("sign-in sets a session cookie");
    (cookie, staff_id)
}

pub async fn create_product(
    app: &Router,
    owner_cookie: &str,
    restaurant_id: Uuid,
    title: &str,
    unit_price: f64,
) -> Uuid {
    let response = send(
        app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_id}/products"),
        Some(owner_cookie),
        Some(json!({
            "title": title,
            "description": format!("{title} description"),
            "unit_price": unit_price
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.id()
}

/// Owner with one restaurant, one staff member and one product.
pub struct Venue {
    pub owner_cookie: String,
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub staff_cookie: String,
    pub staff_id: Uuid,
    pub product_id: Uuid,
}

pub async fn setup_venue(app: &Router) -> Venue {
    let (owner_cookie, owner_id) = sign_up_owner(app).await;
    let restaurant_id = create_restaurant(app, &owner_cookie).await;
    let (staff_cookie, staff_id) = staff_session(app, &owner_cookie, restaurant_id).await;
    let product_id = create_product(app, &owner_cookie, restaurant_id, "Wagyu Beef", 12.5).await;

    Venue {
        owner_cookie,
        owner_id,
        restaurant_id,
        staff_cookie,
        staff_id,
        product_id,
    }
}
