use actix_web::http::StatusCode;
use serde_json::json;

use crate::models::ErrorCode;
use crate::services::test_support::{ADMIN_PASSWORD, TestContext, init_app, send, token_from};

fn contact_body(sid: &str, first: &str, priority: &str) -> serde_json::Value {
    json!({
        "sid": sid,
        "firstname": first,
        "lastname": "Lovelace",
        "homephone": "416-555-0100",
        "email": format!("{}@family.test", first.to_lowercase()),
        "priority": priority,
        "relation": "parent"
    })
}

#[actix_web::test]
async fn test_contact_lifecycle() {
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
            json!({
                "firstname": "Ada",
                "lastname": "Lovelace",
                "age": "9",
                "gradelevel": "4",
                "dob": "2017-12-10",
                "email": "ada@home.test"
            }),
        )
        .to_request(),
    )
    .await;
    let sid = body["data"]["sid"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/createContact",
            contact_body(&sid, "Anne", "2"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let anne = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/createContact",
            contact_body(&sid, "George", "1"),
        )
        .to_request(),
    )
    .await;
    let george = body["data"]["id"].as_str().unwrap().to_string();

    // 按优先级排序
    let contacts = ctx.storage.list_student_contacts(&sid).await.unwrap();
    let ids: Vec<_> = contacts.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![george.clone(), anne.clone()]);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/contact/updatePriority",
            json!({ "id": anne, "priority": 0 }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["priority"], 0);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/contact/updateWorkPhone",
            json!({ "id": anne, "newnumber": "416-555-0199" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["work_phone"], "416-555-0199");

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/contact/updatePriority",
            json!({ "id": anne, "priority": "first" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 已关联的联系人不能重复关联
    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/addContact",
            json!({ "sid": sid, "contactId": anne }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::ContactAlreadyLinked as i32);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/removeContact",
            json!({ "sid": sid, "contactId": anne }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/addContact",
            json!({ "sid": sid, "contactId": anne }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/contact/deleteContact",
            json!({ "id": george }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let contacts = ctx.storage.list_student_contacts(&sid).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, anne);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/contact/updateEmail",
            json!({ "id": george, "email": "george@family.test" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::ContactNotFound as i32);
}

#[actix_web::test]
async fn test_create_contact_for_unknown_student() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let aid = ctx.seed_admin().await;
    let (_, body) = send(&app, ctx.login("admin", &aid, ADMIN_PASSWORD).to_request()).await;
    let token = token_from(&body);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/createContact",
            contact_body("999999", "Anne", "1"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::StudentNotFound as i32);

    let (status, body) = send(
        &app,
        ctx.post_as(
            &token,
            "/api/v1/student/createContact",
            contact_body("999999", "Anne", "soon"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::InvalidField as i32);
}
