mod harness;

use faultline_core::ErrorCategory;
use faultline_responder::Severity;
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::json;

const BAD_REQUEST: &str = "Invalid data or fields sent. Bad request.";

async fn assert_bad_request(resp: reqwest::Response) {
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.text().await.unwrap(), BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_body() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/items"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_bad_request(resp).await;

    let entries = server.log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, ErrorCategory::ValidationFailure);
    assert_eq!(entries[0].severity, Severity::Info);
}

#[tokio::test]
async fn wrong_field_types() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/items"))
        .json(&json!({ "name": "widget", "quantity": "lots" }))
        .send()
        .await
        .unwrap();

    assert_bad_request(resp).await;
}

#[tokio::test]
async fn constraint_violation_from_handler() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/items"))
        .json(&json!({ "name": "widget", "quantity": -1 }))
        .send()
        .await
        .unwrap();

    assert_bad_request(resp).await;
    assert!(server.log().entries()[0].detail.contains("quantity"));

    let resp = server
        .client()
        .post(server.url("/items"))
        .json(&json!({ "name": "widget", "quantity": 3 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    assert_eq!(resp.text().await.unwrap(), "widget");
    assert_eq!(server.log().len(), 1);
}

#[tokio::test]
async fn missing_query_parameter() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().get(server.url("/search?limit=5")).send().await.unwrap();
    assert_bad_request(resp).await;

    let resp = server.client().get(server.url("/lookup")).send().await.unwrap();
    assert_bad_request(resp).await;

    let entries = server.log().entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[1].detail.contains("key"));
}

#[tokio::test]
async fn unparseable_path_segment() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().get(server.url("/items/abc")).send().await.unwrap();

    assert_bad_request(resp).await;
    assert_eq!(server.log().entries()[0].category, ErrorCategory::ValidationFailure);
}

#[tokio::test]
async fn rejection_forwarded_with_question_mark() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/echo"))
        .header("content-type", "application/json")
        .body("[1, 2,")
        .send()
        .await
        .unwrap();

    assert_bad_request(resp).await;

    let resp = server
        .client()
        .post(server.url("/echo"))
        .json(&json!({ "ok": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<serde_json::Value>().await.unwrap(), json!({ "ok": true }));
}

#[tokio::test]
async fn plain_json_extractor_is_answered_by_the_responder() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/plain/items"))
        .json(&json!({ "name": "widget", "quantity": "lots" }))
        .send()
        .await
        .unwrap();

    assert_bad_request(resp).await;

    let entries = server.log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, ErrorCategory::ValidationFailure);
    assert_eq!(entries[0].path.as_deref(), Some("/plain/items"));
    assert!(entries[0].detail.contains("invalid type"), "{}", entries[0].detail);
    assert!(entries[0].error_type.as_deref().is_some_and(|t| t.ends_with("UnmarkedResponse")));
}

#[tokio::test]
async fn plain_extractors_cover_content_type_and_path() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/plain/items"))
        .header("content-type", "text/plain")
        .body("widget")
        .send()
        .await
        .unwrap();
    assert_bad_request(resp).await;

    let resp = server.client().get(server.url("/plain/items/abc")).send().await.unwrap();
    assert_bad_request(resp).await;

    let resp = server
        .client()
        .post(server.url("/plain/items"))
        .json(&json!({ "name": "widget", "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.text().await.unwrap(), "widget x2");

    assert_eq!(server.log().len(), 2);
}
