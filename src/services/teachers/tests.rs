use actix_web::http::StatusCode;
use serde_json::json;

use crate::models::ErrorCode;
use crate::services::test_support::{ADMIN_PASSWORD, TestContext, init_app, send, token_from};

#[actix_web::test]
async fn test_register_and_self_service() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let admin_token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/teacher/register",
            json!({
                "firstname": "Edsger",
                "lastname": "Dijkstra",
                "dob": "1930-05-11",
                "email": "edsger@home.test"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let tid = body["data"]["tid"].as_str().unwrap().to_string();
    assert!(body["data"]["middle_name"].is_null());
    assert_eq!(body["data"]["account"]["temp_password"], true);

    let temp = ctx.mailer.last_password_for("edsger@home.test").unwrap();
    let (status, body) = send(&app, ctx.login("teacher", &tid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "teacher");
    let teacher_token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.get_as(&teacher_token, "/api/v1/teacher").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tid"], tid);

    // 教师本人可以更新头像
    let (status, body) = send(
        &app,
        ctx.post_as(
            &teacher_token,
            "/api/v1/teacher/updatePhoto",
            json!({ "tid": tid, "url": "https://cdn.test/ewd.png" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["photo"].is_string());

    // 修改姓名仅限管理员
    let (status, _) = send(
        &app,
        ctx.post_as(
            &teacher_token,
            "/api/v1/teacher/updateName",
            json!({ "tid": tid, "firstname": "E", "lastname": "D" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/teacher/updateHomeroom",
            json!({ "tid": tid, "homeroom": "C3" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["homeroom"], "C3");

    let (status, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/teacher/updateAddress",
            json!({
                "tid": tid,
                "address": "1 Main St",
                "city": "Austin",
                "province": "Texas",
                "postal": "78701"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Austin");
}

#[actix_web::test]
async fn test_update_password_rules() {
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
                "firstname": "Barbara",
                "lastname": "Liskov",
                "dob": "1939-11-07",
                "email": "barbara@home.test"
            }),
        )
        .to_request(),
    )
    .await;
    let tid = body["data"]["tid"].as_str().unwrap().to_string();
    let temp = ctx.mailer.last_password_for("barbara@home.test").unwrap();
    let (_, body) = send(&app, ctx.login("teacher", &tid, &temp).to_request()).await;
    let token = token_from(&body);

    let attempt = |current: &str, p1: &str, p2: &str| {
        ctx.post_as(
            &token,
            "/api/v1/teacher/updatePassword",
            json!({ "currentPassword": current, "newPassword1": p1, "newPassword2": p2 }),
        )
        .to_request()
    };

    let (status, body) = send(&app, attempt("Nope1234x", "Substitut10n", "Substitut10n")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::IncorrectPassword as i32);

    let (status, body) = send(&app, attempt(&temp, "Substitut10n", "Substitut10m")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PasswordMismatch as i32);

    let (status, body) = send(&app, attempt(&temp, "short", "short")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PasswordInvalid as i32);

    let (status, _) = send(&app, attempt(&temp, "Substitut10n", "Substitut10n")).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_teacher_update() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/teacher/updateEmail",
            json!({ "tid": "999999", "email": "nobody@home.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::TeacherNotFound as i32);
}

#[actix_web::test]
async fn test_teacher_lockout_and_renable() {
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
                "firstname": "John",
                "lastname": "Backus",
                "dob": "1924-12-03",
                "email": "john@home.test"
            }),
        )
        .to_request(),
    )
    .await;
    let tid = body["data"]["tid"].as_str().unwrap().to_string();
    let temp = ctx.mailer.last_password_for("john@home.test").unwrap();

    let max = crate::config::AppConfig::get().auth.max_login_attempts;
    for _ in 1..max {
        let (status, body) =
            send(&app, ctx.login("teacher", &tid, "Wrong9Guess").to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::IncorrectPassword as i32);
    }
    let (status, body) =
        send(&app, ctx.login("teacher", &tid, "Wrong9Guess").to_request()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], ErrorCode::AccountDisabled as i32);

    let (status, _) = send(&app, ctx.login("teacher", &tid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/admin/renableTeacher",
            json!({ "tid": tid }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, ctx.login("teacher", &tid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
}
