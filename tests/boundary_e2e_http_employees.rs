//! Boundary E2E Test: HTTP → Router → Service → Store (employee paths)
//!
//! Exercises the employee write paths (salary records, advances) and
//! the assets/liabilities position they feed into.

mod common;

use common::spawn_app;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_employee(client: &reqwest::Client, base: &str, name: &str) -> Value {
    let response = client
        .post(format!("{}/api/employees", base))
        .json(&json!({ "name": name, "salary": "1200" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("invalid json")
}

#[tokio::test]
async fn test_salary_record_visible_in_employee_list() {
    let (base, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let employee = create_employee(&client, &base, "nadia").await;

    let response = client
        .post(format!("{}/api/employees/{}/salaries", base, employee["id"].as_str().unwrap()))
        .json(&json!({ "month": "2025-06-01", "amount": "1200" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("invalid json");
    assert_eq!(body["salaries"].as_array().unwrap().len(), 1);
    assert_eq!(body["salaries"][0]["amount"], "1200");
    assert!(body["salaries"][0]["paidAt"].is_null());

    let response = client
        .get(format!("{}/api/employees", base))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let list: Value = response.json().await.expect("invalid json");
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "nadia");
    assert_eq!(list[0]["salaries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_salary_record_for_unknown_employee_is_404() {
    let (base, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{}/api/employees/00000000-0000-0000-0000-000000000000/salaries",
            base
        ))
        .json(&json!({ "month": "2025-06-01", "amount": "1200" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("invalid json");
    assert!(body["error"].as_str().unwrap().contains("employee not found"));
}

#[tokio::test]
async fn test_negative_advance_rejected_with_400() {
    let (base, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let employee = create_employee(&client, &base, "sami").await;

    let response = client
        .post(format!("{}/api/employees/{}/advances", base, employee["id"].as_str().unwrap()))
        .json(&json!({ "amount": "-50" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assets_liabilities_position_over_http() {
    let (base, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    // 1000 cash collected, a 500 credit invoice outstanding.
    let response = client
        .post(format!("{}/api/transactions", base))
        .json(&json!({
            "type": "SALES_PAYMENT",
            "amount": "1000",
            "method": "CASH",
            "date": "2025-06-05T10:00:00Z",
            "recordedBy": "tester"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .post(format!("{}/api/sales/invoices", base))
        .json(&json!({
            "number": "INV-1",
            "customer": "acme",
            "total": "500",
            "date": "2025-06-05T09:00:00Z"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    // One employee with an unsettled 1200 salary and a 200 advance.
    let employee = create_employee(&client, &base, "nadia").await;
    let id = employee["id"].as_str().unwrap();
    let response = client
        .post(format!("{}/api/employees/{}/salaries", base, id))
        .json(&json!({ "month": "2025-06-01", "amount": "1200" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = client
        .post(format!("{}/api/employees/{}/advances", base, id))
        .json(&json!({ "amount": "200", "date": "2025-06-02T09:00:00Z" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .get(format!(
            "{}/api/reports/assets-liabilities?startDate=2025-06-01&endDate=2025-06-30",
            base
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("invalid json");
    // Assets: 1000 cash + 500 receivables + 200 advances.
    assert_eq!(body["assets"]["total"], "1700");
    let asset_names: Vec<&str> = body["assets"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        asset_names,
        ["Liquid cash", "Customer receivables", "Employee advances"]
    );
    // Liabilities: 1200 unpaid salary, no payables.
    assert_eq!(body["liabilities"]["total"], "1200");
    assert_eq!(body["netPosition"], "500");
}

#[tokio::test]
async fn test_settled_salary_drops_out_of_liabilities() {
    let (base, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let employee = create_employee(&client, &base, "sami").await;
    let response = client
        .post(format!("{}/api/employees/{}/salaries", base, employee["id"].as_str().unwrap()))
        .json(&json!({
            "month": "2025-05-01",
            "amount": "900",
            "paidAt": "2025-06-01T08:00:00Z"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .get(format!("{}/api/reports/assets-liabilities", base))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("invalid json");
    assert_eq!(body["liabilities"]["total"], "0");
    assert_eq!(body["netPosition"], "0");
}
