//! End-to-end tests for the HTTP API against a server on an ephemeral port.

use std::io::Write;
use std::sync::Arc;

use budget_api::api::{app, AppState, ErrorResponse, HealthResponse};
use budget_api::Config;
use budget_core::{BudgetResponse, CatalogError, Locale, Material, MaterialCatalog};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn spawn_app_with(catalog: MaterialCatalog, locale: Locale) -> String {
    spawn_state(AppState::new(Arc::new(catalog), locale)).await
}

async fn spawn_state(state: AppState) -> String {
    let state = Arc::new(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_app() -> String {
    spawn_app_with(MaterialCatalog::builtin(), Locale::PtBr).await
}

async fn post_calculate(base: &str, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/calculate", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

fn assert_error(status: StatusCode, body: &Value, code: &str, message: &str) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(error.code, code);
    assert_eq!(error.message, message);
}

#[tokio::test]
async fn test_blackout_medium() {
    let base = spawn_app().await;
    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 200, "heightCm": 150, "materialId": "blackout" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: BudgetResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.material_name, "Tecido Blackout");
    assert_eq!(response.area_m2, 3.0);
    assert_eq!(response.price_per_m2, 120.0);
    assert_eq!(response.total, 360.0);
}

#[tokio::test]
async fn test_all_materials() {
    let base = spawn_app().await;
    let cases = [
        (200, 150, "blackout", "Tecido Blackout", 120.0, 3.0, 360.0),
        (300, 200, "linho", "Tecido Linho", 90.0, 6.0, 540.0),
        (100, 100, "persiana-pvc", "Persiana PVC", 150.0, 1.0, 150.0),
    ];

    for (w, h, id, name, price, area, total) in cases {
        let (status, body) = post_calculate(
            &base,
            json!({ "widthCm": w, "heightCm": h, "materialId": id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "material {}", id);
        assert_eq!(body["materialName"], name);
        assert_eq!(body["pricePerM2"], price);
        assert_eq!(body["areaM2"], area);
        assert_eq!(body["total"], total);
    }
}

#[tokio::test]
async fn test_boundary_values() {
    let base = spawn_app().await;

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 1, "heightCm": 1, "materialId": "blackout" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["areaM2"], 0.0);
    assert_eq!(body["total"], 0.01);

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 10, "heightCm": 10, "materialId": "blackout" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["areaM2"], 0.01);
    assert_eq!(body["total"], 1.2);
}

#[tokio::test]
async fn test_half_cent_results_follow_stored_value() {
    let base = spawn_app().await;
    let cases = [
        (1, 3, "persiana-pvc", 0.0, 0.04),
        (1, 19, "persiana-pvc", 0.0, 0.28),
        (50, 1, "blackout", 0.01, 0.6),
        (201, 50, "linho", 1.0, 90.45),
    ];

    for (w, h, id, area, total) in cases {
        let (status, body) = post_calculate(
            &base,
            json!({ "widthCm": w, "heightCm": h, "materialId": id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["areaM2"], area, "{} x {} {}", w, h, id);
        assert_eq!(body["total"], total, "{} x {} {}", w, h, id);
    }
}

#[tokio::test]
async fn test_zero_width_missing_material() {
    let base = spawn_app().await;
    let (status, body) = post_calculate(&base, json!({ "widthCm": 0, "heightCm": 150 })).await;
    assert_error(status, &body, "INVALID_PARAMETERS", "Parâmetros inválidos para cálculo");
}

#[tokio::test]
async fn test_zero_width() {
    let base = spawn_app().await;
    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 0, "heightCm": 150, "materialId": "blackout" }),
    )
    .await;
    assert_error(status, &body, "INVALID_PARAMETERS", "Parâmetros inválidos para cálculo");
}

#[tokio::test]
async fn test_negative_height() {
    let base = spawn_app().await;
    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 200, "heightCm": -10, "materialId": "linho" }),
    )
    .await;
    assert_error(status, &body, "INVALID_PARAMETERS", "Parâmetros inválidos para cálculo");
}

#[tokio::test]
async fn test_missing_material_variants() {
    let base = spawn_app().await;
    let bodies = [
        json!({ "widthCm": 200, "heightCm": 150, "materialId": "" }),
        json!({ "widthCm": 200, "heightCm": 150, "materialId": null }),
        json!({ "widthCm": 200, "heightCm": 150 }),
    ];

    for body in bodies {
        let (status, response) = post_calculate(&base, body.clone()).await;
        assert_error(status, &response, "INVALID_PARAMETERS", "Parâmetros inválidos para cálculo");
    }
}

#[tokio::test]
async fn test_unknown_material() {
    let base = spawn_app().await;
    for id in ["unknown-id", "non-existent-material", "Blackout"] {
        let (status, body) = post_calculate(
            &base,
            json!({ "widthCm": 200, "heightCm": 150, "materialId": id }),
        )
        .await;
        assert_error(status, &body, "MATERIAL_NOT_FOUND", "Material não encontrado");
    }
}

#[tokio::test]
async fn test_wrong_types_are_invalid_parameters() {
    let base = spawn_app().await;
    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": "wide", "heightCm": 150, "materialId": "blackout" }),
    )
    .await;
    assert_error(status, &body, "INVALID_PARAMETERS", "Parâmetros inválidos para cálculo");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_parameters() {
    let base = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/calculate", base))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.code, "INVALID_PARAMETERS");
}

#[tokio::test]
async fn test_body_without_content_type() {
    let base = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/calculate", base))
        .body(r#"{"widthCm":200,"heightCm":150,"materialId":"blackout"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: BudgetResponse = response.json().await.unwrap();
    assert_eq!(body.area_m2, 3.0);
    assert_eq!(body.total, 360.0);
}

#[tokio::test]
async fn test_english_locale() {
    let base = spawn_app_with(MaterialCatalog::builtin(), Locale::En).await;

    let (status, body) = post_calculate(&base, json!({ "heightCm": 150, "materialId": "linho" })).await;
    assert_error(status, &body, "INVALID_PARAMETERS", "Invalid parameters for calculation");

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 200, "heightCm": 150, "materialId": "seda" }),
    )
    .await;
    assert_error(status, &body, "MATERIAL_NOT_FOUND", "Material not found");
}

#[tokio::test]
async fn test_idempotent() {
    let base = spawn_app().await;
    let request = json!({ "widthCm": 187, "heightCm": 243, "materialId": "linho" });
    let first = post_calculate(&base, request.clone()).await;
    let second = post_calculate(&base, request).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_materials() {
    let base = spawn_app().await;
    let materials: Vec<Material> = reqwest::get(format!("{}/api/materials", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(materials, MaterialCatalog::builtin().materials().to_vec());
}

#[tokio::test]
async fn test_custom_catalog() {
    let catalog = MaterialCatalog::new(vec![Material::new("veludo", "Veludo", 200.0)]).unwrap();
    let base = spawn_app_with(catalog, Locale::PtBr).await;

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 50, "heightCm": 50, "materialId": "veludo" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 50.0);

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 50, "heightCm": 50, "materialId": "blackout" }),
    )
    .await;
    assert_error(status, &body, "MATERIAL_NOT_FOUND", "Material não encontrado");
}

#[tokio::test]
async fn test_health() {
    let base = spawn_app().await;
    let health: HealthResponse = reqwest::get(format!("{}/api/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.materials, 3);
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_catalog_file_from_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[materials]]
id = "voil"
name = "Voil"
price_per_square_meter = 80.0
"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = Config {
        catalog_path: Some(file.path().to_path_buf()),
        locale: Locale::En,
        ..Config::default()
    };
    let base = spawn_state(AppState::from_config(&config).unwrap()).await;

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 100, "heightCm": 50, "materialId": "voil" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["materialName"], "Voil");
    assert_eq!(body["total"], 40.0);

    let (status, body) = post_calculate(
        &base,
        json!({ "widthCm": 100, "heightCm": 50, "materialId": "blackout" }),
    )
    .await;
    assert_error(status, &body, "MATERIAL_NOT_FOUND", "Material not found");

    let materials: Vec<Material> = reqwest::get(format!("{}/api/materials", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(materials, vec![Material::new("voil", "Voil", 80.0)]);
}

#[test]
fn test_invalid_catalog_file_fails_startup() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{ "id": "voil", "name": "Voil", "pricePerSquareMeter": -1 }}]"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = Config {
        catalog_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    assert!(matches!(
        AppState::from_config(&config),
        Err(CatalogError::InvalidPrice { .. })
    ));
}
