mod common;

use dalil_core::core::error::AppError;
use dalil_core::features::directory::dtos::{CategoryInput, OfferInput};
use dalil_core::features::directory::models::{EntityId, UserRecord};
use dalil_core::features::directory::Resource;
use httpmock::prelude::*;
use serde_json::json;

use common::harness;

#[tokio::test]
async fn null_data_is_an_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(200)
            .json_body(json!({"status": "success", "data": null}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/offers");
        then.status(200).json_body(json!({"status": "success"}));
    });

    let h = harness(&server, None).await;
    assert!(h.gateway.public_categories().await.unwrap().is_empty());
    assert!(h.gateway.public_offers().await.unwrap().is_empty());
}

#[tokio::test]
async fn public_reads_do_not_require_a_session() {
    let server = MockServer::start();
    let services_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/services")
            .header_missing("authorization");
        then.status(200).json_body(json!({
            "status": "success",
            "data": [
                {"id": 1, "name": "Plumbing", "category": {"id": 2, "name": "Home"}, "users_count": "3"},
                {"id": "s-2", "name": "Car wash", "category_id": 5}
            ]
        }));
    });

    let h = harness(&server, None).await;
    let services = h.gateway.public_services().await.unwrap();

    services_mock.assert_calls(1);
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].id, EntityId::Number(1));
    assert_eq!(services[0].users_count, Some(3));
    assert_eq!(services[1].id, EntityId::Text("s-2".to_string()));
}

#[tokio::test]
async fn wrong_data_shape_fails_closed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/offers");
        then.status(200)
            .json_body(json!({"status": "success", "data": {"id": 1}}));
    });

    let h = harness(&server, Some("tok")).await;
    assert!(matches!(
        h.gateway.offers().await,
        Err(AppError::Decode(_))
    ));
}

#[tokio::test]
async fn summary_without_data_is_an_empty_map() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/dashboard")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({"status": "success"}));
    });

    let h = harness(&server, Some("tok")).await;
    assert!(h.gateway.summary().await.unwrap().is_empty());
}

#[tokio::test]
async fn summary_returns_server_counters() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard");
        then.status(200).json_body(json!({
            "status": "success",
            "data": {"workers_count": 12, "offers_count": 3}
        }));
    });

    let h = harness(&server, Some("tok")).await;
    let summary = h.gateway.summary().await.unwrap();
    assert_eq!(summary.get("workers_count"), Some(&json!(12)));
    assert_eq!(summary.len(), 2);
}

#[tokio::test]
async fn workers_listing_decodes_nested_services() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/workers");
        then.status(200).json_body(json!({
            "status": "success",
            "data": [{
                "id": 4,
                "name": "Salem",
                "mobile": "0550000000",
                "services": [{"id": 1, "name": "Plumbing", "category": {"name": "Home"}}, 7],
                "services_details": [{"id": 1, "pivot": {"details": "Leaks"}}]
            }]
        }));
    });

    let h = harness(&server, Some("tok")).await;
    let workers: Vec<UserRecord> = h.gateway.workers().await.unwrap();

    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].services().len(), 2);
    assert_eq!(workers[0].services()[1].id(), Some(&EntityId::Number(7)));
}

#[tokio::test]
async fn update_targets_item_path_and_returns_data() {
    let server = MockServer::start();
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/dashboard/offers/15")
            .header("authorization", "Bearer tok")
            .body_includes("name=\"start_date\"")
            .body_includes("2024-06-01");
        then.status(200).json_body(json!({
            "status": "success",
            "data": {"id": 15, "name": "Summer"}
        }));
    });

    let h = harness(&server, Some("tok")).await;
    let updated = h
        .gateway
        .update(
            Resource::Offers,
            &EntityId::from(15),
            OfferInput {
                name: "Summer".to_string(),
                details: "Half price".to_string(),
                category_id: EntityId::from(2),
                start_date: "2024-06-01".to_string(),
                end_date: "2024-06-30".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();

    update_mock.assert_calls(1);
    assert_eq!(updated, json!({"id": 15, "name": "Summer"}));
}

#[tokio::test]
async fn delete_without_data_returns_whole_body() {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/dashboard/categories/abc");
        then.status(200)
            .json_body(json!({"status": "success", "message": "Deleted"}));
    });

    let h = harness(&server, Some("tok")).await;
    let deleted = h
        .gateway
        .delete(Resource::Categories, &EntityId::from("abc"))
        .await
        .unwrap();

    delete_mock.assert_calls(1);
    assert_eq!(deleted, json!({"status": "success", "message": "Deleted"}));
}

#[tokio::test]
async fn category_form_is_sent_as_multipart() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/dashboard/categories")
            .body_includes("name=\"name\"")
            .body_includes("Home")
            .body_includes("name=\"description\"");
        then.status(201)
            .json_body(json!({"status": "success", "data": {"id": 3}}));
    });

    let h = harness(&server, Some("tok")).await;
    let created = h
        .gateway
        .create(
            Resource::Categories,
            CategoryInput {
                name: "Home".to_string(),
                description: "Around the house".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();

    create_mock.assert_calls(1);
    assert_eq!(created, json!({"id": 3}));
}

#[tokio::test]
async fn write_rejected_by_api_surfaces_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/dashboard/services/9");
        then.status(200)
            .json_body(json!({"status": "error", "message": "Service has workers"}));
    });

    let h = harness(&server, Some("tok")).await;
    match h.gateway.delete(Resource::Services, &EntityId::from(9)).await {
        Err(AppError::Api(message)) => assert_eq!(message, "Service has workers"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(h.client.is_authenticated().await);
}

#[tokio::test]
async fn loose_user_fields_do_not_fail_category_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(200).json_body(json!({
            "status": "success",
            "data": [{
                "id": 1,
                "name": "Home",
                "services": [{
                    "id": 10,
                    "name": "Plumbing",
                    "users": [{"id": 3, "name": "Khaled", "phone": 501234567}]
                }]
            }]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/offers");
        then.status(200).json_body(json!({
            "status": "success",
            "data": [{"id": 1, "start_date": "2024-01-01", "startDate": "2024-01-01"}]
        }));
    });

    let h = harness(&server, None).await;

    let categories = h.gateway.public_categories().await.unwrap();
    let user = &categories[0].services()[0].users()[0];
    assert_eq!(user.phone.as_deref(), Some("501234567"));

    let offers = h.gateway.public_offers().await.unwrap();
    assert_eq!(offers[0].start_date(), Some("2024-01-01"));
}
