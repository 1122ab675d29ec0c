use actix_web::http::StatusCode;
use serde_json::json;

use crate::models::ErrorCode;
use crate::services::test_support::{ADMIN_PASSWORD, TestContext, init_app, send, token_from};

#[actix_web::test]
async fn test_admin_profile_and_create() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (status, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["temp_password"], false);
    let token = token_from(&body);

    let (status, body) = send(&app, ctx.get_as(&token, "/api/v1/admin").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["aid"], aid);
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/create",
            json!({
                "firstname": "Frances",
                "lastname": "Allen",
                "dob": "1932-08-04",
                "email": "frances@home.test"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let new_aid = body["data"]["aid"].as_str().unwrap().to_string();
    assert_ne!(new_aid, aid);
    assert_eq!(body["data"]["temp_password"], true);

    let temp = ctx.mailer.last_password_for("frances@home.test").unwrap();
    let (status, _) = send(&app, ctx.login("admin", &new_aid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_admin_login_does_not_lock() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;

    let max = crate::config::AppConfig::get().auth.max_login_attempts;
    for _ in 0..max {
        let (status, _) = send(&app, ctx.login("admin", &aid, "Wrong9Guess").to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    let (status, _) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_lockers() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/createLocker",
            json!({ "lockernumber": "A-7", "combo": "10-20-30" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["locker_number"], "A-7");

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/createLocker",
            json!({ "lockernumber": "A-7", "combo": "00-00-00" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::LockerAlreadyExists as i32);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/updateLockerCombo",
            json!({ "lockernumber": "A-7", "newlockercombo": "31-41-59" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["combo"], "31-41-59");

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/updateLockerCombo",
            json!({ "lockernumber": "Z-1", "newlockercombo": "1-2-3" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_renable_unknown_account() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/renableTeacher",
            json!({ "tid": "999999" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::TeacherNotFound as i32);

    let (status, body) = send(
        &app,
        ctx.post_as(&token, "/api/v1/admin/renableStudent", json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], json!(["sid"]));
}

#[actix_web::test]
async fn test_admin_routes_require_admin() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let (status, _) = send(
        &app,
        ctx.post("/api/v1/admin/createLocker", json!({ "lockernumber": "1", "combo": "1" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = actix_web::test::TestRequest::post()
        .uri("/api/v1/admin/login")
        .peer_addr("10.255.255.1:1".parse().unwrap())
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);
}
