mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use common::{FakeStore, FakeTable};
use serde_json::{Value, json};
use site_content::api::handlers::{service_handler, service_list_handler, service_slugs_handler};
use site_content::domain::entities::RawBulletPoints;
use site_content::web;
use std::sync::Arc;

fn make_server(store: &FakeStore) -> TestServer {
    let state = common::create_test_state(store);
    let app = Router::new()
        .route("/api/services", get(service_list_handler))
        .route("/api/services/slugs", get(service_slugs_handler))
        .route("/api/services/{slug}", get(service_handler))
        .merge(web::routes::page_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_service_without_bullets_gets_three_defaults() {
    let store = FakeStore::with_offerings(vec![common::offering(
        1,
        "executive-search",
        "Executive Search",
        1,
    )]);
    let server = make_server(&store);

    let response = server.get("/api/services/executive-search").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let bullets = json["hero_bulletpoints"].as_array().unwrap();

    assert_eq!(bullets.len(), 3);
    assert!(
        bullets
            .iter()
            .all(|b| b.as_str().unwrap().contains("Executive Search"))
    );
    assert_eq!(json["hero_title"], "Executive Search");
    assert_eq!(json["hero_image"], "/landing/pexels-executive-3184292.jpg");
}

#[tokio::test]
async fn test_service_malformed_bullets_get_defaults() {
    let mut record = common::offering(1, "consulting", "Consulting", 1);
    record.hero_bulletpoints = Some(RawBulletPoints::Encoded("{not json".to_string()));

    let store = FakeStore::with_offerings(vec![record]);
    let server = make_server(&store);

    let json = server.get("/api/services/consulting").await.json::<Value>();

    assert_eq!(json["hero_bulletpoints"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_service_keeps_stored_bullets() {
    let mut record = common::offering(1, "staffing", "Staffing", 1);
    record.hero_bulletpoints = Some(RawBulletPoints::List(vec![
        "Temporary".to_string(),
        "Permanent".to_string(),
    ]));

    let store = FakeStore::with_offerings(vec![record]);
    let server = make_server(&store);

    let json = server.get("/api/services/staffing").await.json::<Value>();

    assert_eq!(json["hero_bulletpoints"], json!(["Temporary", "Permanent"]));
}

#[tokio::test]
async fn test_services_list_and_slugs() {
    let store = FakeStore::with_offerings(vec![
        common::offering(1, "recruitment", "Recruitment", 2),
        common::offering(2, "consulting", "Consulting", 1),
    ]);
    let server = make_server(&store);

    let json = server.get("/api/services").await.json::<Value>();
    assert_eq!(json["items"][0]["slug"], "consulting");
    assert_eq!(json["items"][1]["slug"], "recruitment");

    let slugs = server.get("/api/services/slugs").await.json::<Value>();
    assert_eq!(slugs["items"], json!(["consulting", "recruitment"]));
}

#[tokio::test]
async fn test_service_unknown_slug_is_not_found() {
    let store = FakeStore::empty();
    let server = make_server(&store);

    server
        .get("/api/services/unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_gives_empty_services() {
    let store = FakeStore::with_offerings(vec![common::offering(1, "consulting", "Consulting", 1)]);
    store.fail_all();
    let server = make_server(&store);

    let response = server.get("/api/services").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["items"], json!([]));
}

#[tokio::test]
async fn test_services_page_empty_state() {
    let store = FakeStore::empty();
    let server = make_server(&store);

    let response = server.get("/services").await;

    response.assert_status_ok();
    assert!(response.text().contains("No services are listed right now"));
}

#[tokio::test]
async fn test_services_page_renders_defaults_and_testimonials() {
    let store = FakeStore {
        offerings: Arc::new(FakeTable::new(vec![common::offering(
            1,
            "consulting",
            "Consulting",
            1,
        )])),
        testimonials: Arc::new(FakeTable::new(vec![
            common::testimonial(1, "Grace", true, common::day(2)),
            common::testimonial(2, "Alan", false, common::day(3)),
        ])),
        ..FakeStore::empty()
    };
    let server = make_server(&store);

    let html = server.get("/services").await.text();

    assert!(html.contains("Proven Consulting results"));
    assert!(html.contains("Grace"));
    assert!(!html.contains("Alan"));
}
