use actix_web::http::StatusCode;
use serde_json::json;

use crate::models::{ErrorCode, accounts::AccountRole};
use crate::services::test_support::{ADMIN_PASSWORD, TestContext, init_app, send, token_from};

fn enroll_body(first: &str, last: &str, email: &str) -> serde_json::Value {
    json!({
        "firstname": first,
        "lastname": last,
        "age": 14,
        "gradelevel": "9",
        "dob": "2012-04-01",
        "email": email,
        "province": "Ontario",
        "city": "Toronto",
        "address": "12 King St",
        "postal": "M5H 1A1"
    })
}

#[actix_web::test]
async fn test_enroll_login_and_change_password() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let admin_token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "ada@home.test"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let sid = body["data"]["sid"].as_str().unwrap().to_string();
    assert_eq!(sid.len(), 6);
    assert_eq!(
        body["data"]["school_email"],
        format!("ada.lovelace@{}", crate::config::AppConfig::get().school.email_domain)
    );
    assert_eq!(body["data"]["account"]["temp_password"], true);
    assert_eq!(body["data"]["account"]["attempts"], 0);
    assert!(body["data"].get("password_hash").is_none());

    // 临时密码通过邮件发送到个人邮箱
    let temp = ctx.mailer.last_password_for("ada@home.test").unwrap();
    let (status, body) = send(&app, ctx.login("student", &sid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["temp_password"], true);
    let student_token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.get_as(&student_token, "/api/v1/student").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["student"]["sid"], sid);
    assert!(body["data"]["locker"].is_null());
    assert_eq!(body["data"]["contacts"], json!([]));

    let (status, _) = send(
        &app,
        ctx.post_as(
            &student_token,
            "/api/v1/student/updatePassword",
            json!({
                "currentPassword": temp,
                "newPassword1": "Analytical9Engine",
                "newPassword2": "Analytical9Engine"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        ctx.login("student", &sid, "Analytical9Engine").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["temp_password"], false);
}

#[actix_web::test]
async fn test_enroll_validation() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/enroll",
            json!({ "firstname": "Ada", "age": "14" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::MissingFields as i32);
    assert_eq!(body["data"], json!(["lastname", "gradelevel", "dob", "email"]));

    let mut bad_age = enroll_body("Ada", "Lovelace", "ada@home.test");
    bad_age["age"] = json!("fourteen");
    let (status, _) = send(
        &app,
        ctx.post_as(&token, "/api/v1/student/enroll", bad_age)
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_grade = enroll_body("Ada", "Lovelace", "ada@home.test");
    bad_grade["gradelevel"] = json!("13");
    let (status, _) = send(
        &app,
        ctx.post_as(&token, "/api/v1/student/enroll", bad_grade)
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "not-an-email"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::EmailInvalid as i32);
    assert!(ctx.mailer.sent().is_empty());
}

#[actix_web::test]
async fn test_enroll_mail_failure_creates_nothing() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    ctx.mailer.set_failing(true);
    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "ada@home.test"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], ErrorCode::MailDeliveryFailed as i32);

    let domain = &crate::config::AppConfig::get().school.email_domain;
    assert!(
        !ctx.storage
            .school_email_exists(&format!("ada.lovelace@{domain}"))
            .await
            .unwrap()
    );
}

#[actix_web::test]
async fn test_lockout_and_renable() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let admin_token = token_from(&body);

    let (_, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/student/enroll",
            enroll_body("Alan", "Turing", "alan@home.test"),
        )
        .to_request(),
    )
    .await;
    let sid = body["data"]["sid"].as_str().unwrap().to_string();
    let temp = ctx.mailer.last_password_for("alan@home.test").unwrap();

    let max = crate::config::AppConfig::get().auth.max_login_attempts;
    for _ in 1..max {
        let (status, body) = send(&app, ctx.login("student", &sid, "Wrong9Guess").to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::IncorrectPassword as i32);
    }
    // 达到上限的那次失败直接禁用
    let (status, body) = send(&app, ctx.login("student", &sid, "Wrong9Guess").to_request()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account is Disabled, contact an Admin");

    // 正确密码也无法登录
    let (status, _) = send(&app, ctx.login("student", &sid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let account = ctx
        .storage
        .get_account(AccountRole::Student, &sid)
        .await
        .unwrap()
        .unwrap();
    assert!(account.status.disabled);
    assert_eq!(account.status.attempts, 0);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/admin/renableStudent",
            json!({ "sid": sid }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, ctx.login("student", &sid, &temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_student_login() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let (status, body) = send(&app, ctx.login("student", "123456", "Whatever1").to_request()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::AuthFailed as i32);
}

#[actix_web::test]
async fn test_role_enforcement() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let admin_token = token_from(&body);

    let (_, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "ada@home.test"),
        )
        .to_request(),
    )
    .await;
    let sid = body["data"]["sid"].as_str().unwrap().to_string();
    let (_, body) = send(
        &app,
        ctx.post_as(
            &admin_token,
            "/api/v1/student/enroll",
            enroll_body("Alan", "Turing", "alan@home.test"),
        )
        .to_request(),
    )
    .await;
    let other_sid = body["data"]["sid"].as_str().unwrap().to_string();

    let temp = ctx.mailer.last_password_for("ada@home.test").unwrap();
    let (_, body) = send(&app, ctx.login("student", &sid, &temp).to_request()).await;
    let student_token = token_from(&body);

    // 无令牌
    let (status, _) = send(
        &app,
        ctx.post("/api/v1/student/updateYOG", json!({ "sid": sid }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 学生调用管理员端点
    let (status, body) = send(
        &app,
        ctx.post_as(
            &student_token,
            "/api/v1/student/updateYOG",
            json!({ "sid": sid }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], ErrorCode::Forbidden as i32);

    // 本人可以修改邮箱，不能修改他人
    let (status, body) = send(
        &app,
        ctx.post_as(
            &student_token,
            "/api/v1/student/updateEmail",
            json!({ "sid": sid, "email": "ada@new.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ada@new.test");

    let (status, _) = send(
        &app,
        ctx.post_as(
            &student_token,
            "/api/v1/student/updateEmail",
            json!({ "sid": other_sid, "email": "x@new.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 学生令牌不能访问教师档案
    let (status, _) = send(
        &app,
        ctx.get_as(&student_token, "/api/v1/teacher").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_admin_updates() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (_, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "ada@home.test"),
        )
        .to_request(),
    )
    .await;
    let sid = body["data"]["sid"].as_str().unwrap().to_string();
    let yog = body["data"]["yog"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        ctx.post_as(&token, "/api/v1/student/updateYOG", json!({ "sid": sid }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["yog"].as_i64().unwrap(), yog + 1);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateName",
            json!({ "sid": sid, "firstname": "Augusta", "middlename": "Ada", "lastname": "King" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "Augusta");
    assert_eq!(body["data"]["middle_name"], "Ada");
    assert_eq!(body["data"]["last_name"], "King");

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateGradeLevel",
            json!({ "sid": sid, "gradelevel": 10 }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["grade_level"], 10);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateHomeroom",
            json!({ "sid": sid, "homeroom": "B12" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["homeroom"], "B12");

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updatePhoto",
            json!({ "sid": sid, "url": "https://cdn.test/ada.png" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["photo"].is_string());

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateHomeroom",
            json!({ "sid": "999999", "homeroom": "B12" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "student not found");
}

#[actix_web::test]
async fn test_locker_assignment() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let mut sids = Vec::new();
    for (first, email) in [("Ada", "ada@home.test"), ("Alan", "alan@home.test")] {
        let (_, body) = send(
            &app,
            ctx.post_as(
                &token,
                "/api/v1/student/enroll",
                enroll_body(first, "Student", email),
            )
            .to_request(),
        )
        .await;
        sids.push(body["data"]["sid"].as_str().unwrap().to_string());
    }

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/admin/createLocker",
            json!({ "lockernumber": 101, "combo": "12-34-56" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateLocker",
            json!({ "sid": sids[0], "lockerNumber": "101" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 已分配给其他学生
    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateLocker",
            json!({ "sid": sids[1], "lockerNumber": "101" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::LockerAlreadyAssigned as i32);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/updateLocker",
            json!({ "sid": sids[1], "lockerNumber": "404" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::LockerNotFound as i32);
}

#[actix_web::test]
async fn test_reset_password() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (_, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/enroll",
            enroll_body("Ada", "Lovelace", "ada@home.test"),
        )
        .to_request(),
    )
    .await;
    let sid = body["data"]["sid"].as_str().unwrap().to_string();
    let first_temp = ctx.mailer.last_password_for("ada@home.test").unwrap();

    let (status, body) = send(
        &app,
        ctx.post(
            "/api/v1/student/resetPassword",
            json!({ "sid": sid, "email": "someone@else.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::PersonalEmailMismatch as i32);

    let (status, _) = send(
        &app,
        ctx.post(
            "/api/v1/student/resetPassword",
            json!({ "sid": sid, "email": "ADA@home.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let second_temp = ctx.mailer.last_password_for("ada@home.test").unwrap();
    assert_ne!(first_temp, second_temp);
    let (status, body) = send(&app, ctx.login("student", &sid, &second_temp).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["temp_password"], true);
}
