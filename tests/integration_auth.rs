mod common;

use axum::http::{Method, StatusCode, header};
use serde_json::json;
use sqlx::PgPool;

use common::{send, setup_test_app, staff_session, create_restaurant, sign_up_owner, unique_username};

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_owner_sign_up_sets_http_only_cookie(pool: PgPool) {
    let app = setup_test_app(pool);
    let username = unique_username("senku");

    let response = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({ "username": username, "password": "strongpassword" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["username"], username);
    assert_eq!(response.body["role"], "owner");
    assert!(response.body.get("password_hash").is_none());

    let set_cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_duplicate_owner_sign_up_conflicts(pool: PgPool) {
    let app = setup_test_app(pool);
    let body = json!({ "username": "kohaku", "password": "strongpassword" });

    let first = send(&app, Method::POST, "/api/auth/owners/sign-up", None, Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = send(&app, Method::POST, "/api/auth/owners/sign-up", None, Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.session_cookie().is_none());
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_sign_up_validation(pool: PgPool) {
    let app = setup_test_app(pool);

    let short_password = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({ "username": "chrome", "password": "short" })),
    )
    .await;
    assert_eq!(short_password.status, StatusCode::UNPROCESSABLE_ENTITY);

    let missing_password = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({ "username": "chrome" })),
    )
    .await;
    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_password.body["error"], "password is required");
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_owner_sign_in(pool: PgPool) {
    let app = setup_test_app(pool);
    let username = unique_username("gen");
    send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({ "username": username, "password": "strongpassword" })),
    )
    .await;

    let ok = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-in",
        None,
        Some(json!({ "username": username, "password": "strongpassword" })),
    )
    .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.session_cookie().is_some());

    let wrong_password = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-in",
        None,
        Some(json!({ "username": username, "password": "wrongpassword" })),
    )
    .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);

    let unknown = send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-in",
        None,
        Some(json!({ "username": "nobody-here", "password": "strongpassword" })),
    )
    .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_owner_cannot_sign_in_as_staff(pool: PgPool) {
    let app = setup_test_app(pool);
    let username = unique_username("ryusui");
    send(
        &app,
        Method::POST,
        "/api/auth/owners/sign-up",
        None,
        Some(json!({ "username": username, "password": "strongpassword" })),
    )
    .await;

    let response = send(
        &app,
        Method::POST,
        "/api/auth/staff/sign-in",
        None,
        Some(json!({ "username": username, "password": "strongpassword" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_me_reports_session_identity(pool: PgPool) {
    let app = setup_test_app(pool);
    let (owner_cookie, owner_id) = sign_up_owner(&app).await;
    let restaurant_id = create_restaurant(&app, &owner_cookie).await;
    let (staff_cookie, staff_id) = staff_session(&app, &owner_cookie, restaurant_id).await;

    let owner = send(&app, Method::GET, "/api/auth/me", Some(&owner_cookie), None).await;
    assert_eq!(owner.status, StatusCode::OK);
    assert_eq!(owner.id(), owner_id);
    assert_eq!(owner.body["role"], "owner");

    let staff = send(&app, Method::GET, "/api/auth/me", Some(&staff_cookie), None).await;
    assert_eq!(staff.status, StatusCode::OK);
    assert_eq!(staff.id(), staff_id);
    assert_eq!(staff.body["role"], "staff");
}

#[sqlx::test(migrator = "tableside_db::MIGRATOR")]
async fn test_staff_sign_in_with_wrong_pin(pool: PgPool) {
    let app = setup_test_app(pool);
    let (owner_cookie, _) = sign_up_owner(&app).await;
    let restaurant_id = create_restaurant(&app, &owner_cookie).await;
    let username = unique_username("taiju");

    let registered = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_id}/staff"),
        Some(&owner_cookie),
        Some(json!({ "username": username, "password": "1234" })),
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED);
    assert!(registered.session_cookie().is_none());

    let response = send(
        &app,
        Method::POST,
        "/api/auth/staff/sign-in",
        None,
        Some(json!({ "username": username, "password": "4321" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
