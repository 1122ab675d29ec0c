use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::json;

use crate::config::AppConfig;
use crate::models::{ErrorCode, accounts::AccountRole};
use crate::services::test_support::{ADMIN_PASSWORD, TestContext, init_app, send, token_from};

#[actix_web::test]
async fn test_login_sets_cookie_and_cookie_authenticates() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let cookie_name = AppConfig::get().jwt.cookie_name.clone();

    let resp =
        actix_test::call_service(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request())
            .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == cookie_name)
        .expect("jwt cookie")
        .into_owned();
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert!(!cookie.value().is_empty());

    // 仅携带 Cookie，不带 Authorization 头
    let req = actix_test::TestRequest::get()
        .uri("/api/v1/admin")
        .cookie(Cookie::new(cookie_name, cookie.value().to_string()))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["aid"], aid);
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let cookie_name = AppConfig::get().jwt.cookie_name.clone();

    let resp =
        actix_test::call_service(&app, ctx.post("/api/v1/logout", json!({})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == cookie_name)
        .expect("cleared jwt cookie")
        .into_owned();
    assert!(cookie.value().is_empty());
    assert_eq!(
        cookie.max_age(),
        Some(actix_web::cookie::time::Duration::seconds(0))
    );
}

#[actix_web::test]
async fn test_token_of_disabled_account_rejected() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let admin_token = token_from(&body);

    let (_, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/teacher/register",
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
    let tid = body["data"]["tid"].as_str().unwrap().to_string();
    let temp = ctx.mailer.last_password_for("frances@home.test").unwrap();
    let (_, body) = send(&app, ctx.login("teacher", &tid, &temp).to_request()).await;
    let token = token_from(&body);

    let (status, _) = send(&app, ctx.get_as(&token, "/api/v1/teacher").to_request()).await;
    assert_eq!(status, StatusCode::OK);

    ctx.storage
        .update_login_state(AccountRole::Teacher, &tid, 0, true)
        .await
        .unwrap();

    // 令牌仍在有效期内，但账号已被禁用
    let (status, body) = send(&app, ctx.get_as(&token, "/api/v1/teacher").to_request()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::AccountDisabled as i32);
}
