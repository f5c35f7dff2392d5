//! Router-level tests driven through `tower::ServiceExt` against a mock
//! database, so they run without Postgres.
//!
//! Covers the CORS preflight contract, the action dispatch and validation
//! 400s, the 404/405 fallbacks, and response serialization for the list
//! endpoints.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use tower::ServiceExt;

use podryad_api::{AppState, create_router};
use podryad_db::entities::sea_orm_active_enums::{
    EstimateStatus, ItemType, PaymentStatus, PaymentType, ProjectStatus,
};
use podryad_db::entities::{companies, contractors, estimates, items, payments, projects};

fn app(db: DatabaseConnection) -> Router {
    create_router(AppState { db: Arc::new(db) })
}

fn empty_mock() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn timestamp(y: i32, mo: u32, d: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap().into()
}

fn company_model(id: i32, name: &str) -> companies::Model {
    companies::Model {
        id,
        name: name.to_string(),
        inn: "7701234567".to_string(),
        kpp: String::new(),
        ogrn: String::new(),
        legal_address: String::new(),
        actual_address: String::new(),
        bank_name: String::new(),
        bik: String::new(),
        correspondent_account: String::new(),
        account_number: String::new(),
        contact_person: "Контактное лицо".to_string(),
        email: "info@example.ru".to_string(),
        phone: "+7 495 000-00-00".to_string(),
        created_at: timestamp(2026, 1, 10),
    }
}

fn contractor_model(id: i32, name: &str) -> contractors::Model {
    contractors::Model {
        id,
        name: name.to_string(),
        specialization: "Электрика".to_string(),
        email: "c@example.ru".to_string(),
        phone: String::new(),
        hourly_rate: dec!(1800),
        created_at: timestamp(2026, 1, 10),
    }
}

fn payment_model(
    id: i32,
    project_id: i32,
    contractor_id: Option<i32>,
    amount: rust_decimal::Decimal,
    status: PaymentStatus,
) -> payments::Model {
    payments::Model {
        id,
        project_id,
        contractor_id,
        payment_type: PaymentType::Expense,
        amount,
        description: String::new(),
        payment_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        status,
        created_at: timestamp(2026, 6, 15),
    }
}

fn estimate_model(id: i32, company_id: i32) -> estimates::Model {
    estimates::Model {
        id,
        company_id,
        title: format!("Смета {id}"),
        description: String::new(),
        estimated_cost: Some(dec!(100000)),
        estimated_hours: dec!(40),
        status: EstimateStatus::Draft,
        created_at: timestamp(2026, 5, 1),
    }
}

fn project_model(id: i32, company_id: i32, estimate_id: Option<i32>) -> projects::Model {
    projects::Model {
        id,
        company_id,
        estimate_id,
        title: format!("Проект {id}"),
        description: String::new(),
        budget: dec!(500000),
        actual_cost: dec!(120000),
        status: ProjectStatus::InProgress,
        start_date: NaiveDate::from_ymd_opt(2026, 4, 1),
        end_date: None,
        created_at: timestamp(2026, 4, 1),
    }
}

fn item_model(id: i32, name: &str, default_price: Option<rust_decimal::Decimal>) -> items::Model {
    items::Model {
        id,
        name: name.to_string(),
        description: String::new(),
        item_type: ItemType::Material,
        unit: "шт".to_string(),
        default_price,
        created_at: timestamp(2026, 1, 10),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// CORS / method / action contract
// ============================================================================

#[tokio::test]
async fn options_preflight_returns_200_with_cors_headers() {
    for path in ["/api/v1/companies", "/api/v1/stats", "/api/v1/manage"] {
        let response = app(empty_mock())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(path)
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "path {path}");
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*"),
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_MAX_AGE)
                .map(|v| v.to_str().unwrap()),
            Some("86400"),
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn unsupported_method_returns_405_json() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn unknown_path_returns_404_json() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .uri("/api/v1/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn missing_action_returns_400() {
    for path in ["/api/v1/companies", "/api/v1/items", "/api/v1/manage"] {
        let response = app(empty_mock())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "path {path}");
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid action");
    }
}

#[tokio::test]
async fn unknown_action_returns_400() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .uri("/api/v1/companies?action=drop-tables")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn company_projects_without_company_id_returns_400() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .uri("/api/v1/companies?action=company-projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "company_id is required");
}

// ============================================================================
// Companies
// ============================================================================

#[tokio::test]
async fn companies_list_maps_summary_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            company_model(1, "ИнноТех"),
            company_model(2, "ТехноСтрой"),
        ]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/companies?action=companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "ИнноТех");
    assert_eq!(body[0]["contact_person"], "Контактное лицо");
    assert!(body[0].get("inn").is_none(), "summary must not leak requisites");
}

#[tokio::test]
async fn companies_list_serves_fallback_on_database_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_string())])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/companies?action=companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "ТехноСтрой");
}

#[tokio::test]
async fn companies_with_stats_zero_project_company_reports_zeroes() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![company_model(1, "ИнноТех")]])
        .append_query_results([Vec::<projects::Model>::new()])
        .append_query_results([Vec::<payments::Model>::new()])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/companies?action=companies-with-stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let row = &body[0];
    assert_eq!(row["total_projects"], 0);
    assert_eq!(row["active_projects"], 0);
    assert_eq!(row["total_budget"], "0.00");
    assert_eq!(row["total_profit"], "0.00");
    assert_eq!(row["pending_payments"], "0.00");
}

#[tokio::test]
async fn create_company_without_inn_returns_400() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/companies?action=create-company")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "ИнноТех"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "name and inn are required");
}

#[tokio::test]
async fn create_company_returns_positive_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![company_model(42, "ИнноТех")]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/companies?action=create-company")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "ИнноТех", "inn": "7709876543"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 42);
    assert!(body["id"].as_i64().unwrap() > 0);
}

// ============================================================================
// Contractors
// ============================================================================

#[tokio::test]
async fn contractors_ordered_by_total_earned_descending() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            contractor_model(1, "Алексей"),
            contractor_model(2, "Мария"),
        ]])
        .append_query_results([vec![
            payment_model(1, 1, Some(1), dec!(100), PaymentStatus::Completed),
            payment_model(2, 1, Some(2), dec!(500), PaymentStatus::Pending),
            payment_model(3, 1, Some(2), dec!(50), PaymentStatus::Completed),
        ]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/contractors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows[0]["name"], "Мария");
    assert_eq!(rows[0]["total_earned"], "550.00");
    assert_eq!(rows[0]["total_projects"], 2);
    assert_eq!(rows[0]["pending_payments"], 1);
    assert_eq!(rows[1]["name"], "Алексей");
    assert_eq!(rows[1]["total_earned"], "100.00");
}

#[tokio::test]
async fn create_contractor_missing_fields_returns_400() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/contractors?action=create-contractor")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Мария", "email": "m@example.ru"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Projects & Estimates
// ============================================================================

#[tokio::test]
async fn projects_list_derives_profit_and_payment_totals() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project_model(1, 1, Some(9))]])
        .append_query_results([vec![company_model(1, "ТехноСтрой")]])
        .append_query_results([vec![estimate_model(9, 1)]])
        .append_query_results([vec![
            payment_model(1, 1, None, dec!(100.50), PaymentStatus::Completed),
            payment_model(2, 1, None, dec!(49.50), PaymentStatus::Pending),
        ]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let row = &body[0];
    assert_eq!(row["company_name"], "ТехноСтрой");
    assert_eq!(row["estimate_title"], "Смета 9");
    assert_eq!(row["profit"], "380000.00");
    assert_eq!(row["payment_count"], 2);
    assert_eq!(row["total_paid"], "150.00");
    assert_eq!(row["status"], "in_progress");
}

#[tokio::test]
async fn estimates_conversion_flag_follows_project_references() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![estimate_model(1, 1), estimate_model(2, 1)]])
        .append_query_results([vec![company_model(1, "ТехноСтрой")]])
        .append_query_results([vec![project_model(10, 1, Some(2))]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/estimates")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    let converted: Vec<bool> = rows
        .iter()
        .map(|r| r["converted_to_project"].as_bool().unwrap())
        .collect();
    assert_eq!(converted, vec![false, true]);
}

// ============================================================================
// Items
// ============================================================================

#[tokio::test]
async fn items_default_price_is_string_and_zero_when_unset() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            item_model(1, "Кабель", Some(dec!(85))),
            item_model(2, "Проектирование", None),
        ]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/items?action=items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["default_price"], "85.00");
    assert_eq!(body[1]["default_price"], "0.00");
    assert_eq!(body[0]["type"], "material");
}

// ============================================================================
// Manage
// ============================================================================

#[tokio::test]
async fn create_payment_without_contractor_persists_null_reference() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment_model(
            7,
            1,
            None,
            dec!(36000),
            PaymentStatus::Pending,
        )]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/manage?action=create-payment")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"project_id": 1, "type": "expense", "amount": "36000", "payment_date": "2026-08-01"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["message"], "Payment created successfully");
}

#[tokio::test]
async fn create_payment_missing_required_fields_returns_400() {
    let response = app(empty_mock())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/manage?action=create-payment")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"project_id": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_project_inserts_project_and_line_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![company_model(1, "ТехноСтрой")]])
        .append_query_results([vec![project_model(3, 1, None)]])
        .append_query_results([vec![podryad_db::entities::project_items::Model {
            id: 1,
            project_id: 3,
            item_id: 2,
            quantity: dec!(10),
            unit_price: dec!(450),
        }]])
        .append_query_results([vec![podryad_db::entities::project_contractors::Model {
            id: 1,
            project_id: 3,
            contractor_id: 5,
            role: "Электромонтаж".to_string(),
            hourly_rate: dec!(1800),
        }]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/manage?action=create-project")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{
                        "company_id": 1,
                        "title": "Отделка шоурума",
                        "budget": "600000",
                        "items": [{"item_id": 2, "quantity": "10", "unit_price": "450"}],
                        "contractors": [{"contractor_id": 5, "role": "Электромонтаж", "hourly_rate": "1800"}]
                    }"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn create_project_for_unknown_company_returns_400() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/manage?action=create-project")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"company_id": 99, "title": "Призрак"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Company not found");
}

#[tokio::test]
async fn manage_get_items_passthrough_matches_items_route() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![item_model(1, "Кабель", Some(dec!(85)))]])
        .into_connection();

    let response = app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/manage?action=items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Кабель");
    assert_eq!(body[0]["default_price"], "85.00");
}
