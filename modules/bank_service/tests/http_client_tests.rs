//! HTTP client tests against a mock server and against the real router

mod common;

use axum::http::{Method, StatusCode};
use bank_service::api::http::HttpBankClient;
use bank_service::api::rest::{BancoCatalog, BankCatalog};
use bank_service::config::SelfQueryConfig;
use bank_service::{BankApi, BankError, Catalog, Config, FieldViolation, SelfQueryMode};
use common::{input, module_with, print_test_header, send};
use httpmock::{Method as MockMethod, MockServer};
use serde_json::json;

#[tokio::test]
async fn test_list_decodes_catalog_records() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(MockMethod::GET).path("/api/bancos");
            then.status(200).json_body(json!([{
                "id": 1,
                "codigo": "B001",
                "nombre": "Banco Central",
                "pais": "España",
                "activo": true,
                "fechaCreacion": "2025-01-01T00:00:00Z"
            }]));
        })
        .await;

    let client = HttpBankClient::<BancoCatalog>::new(server.base_url());
    let banks = client.list_banks().await.unwrap();

    mock.assert_async().await;
    assert_eq!(client.catalog(), Catalog::Banco);
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].code, "B001");
    assert_eq!(banks[0].country.as_deref(), Some("España"));
}

#[tokio::test]
async fn test_not_found_is_rebuilt() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(MockMethod::GET).path("/api/banks/7");
            then.status(404).json_body(json!({
                "status": 404,
                "message": "Bank not found with id: 7",
                "timestamp": "2025-01-01T00:00:00Z"
            }));
        })
        .await;

    let client = HttpBankClient::<BankCatalog>::new(server.base_url());
    let err = client.get_bank(7).await.unwrap_err();

    assert_eq!(
        err,
        BankError::NotFound {
            catalog: Catalog::Bank,
            id: 7
        }
    );
}

#[tokio::test]
async fn test_conflict_is_rebuilt_as_duplicate_code() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(MockMethod::POST).path("/api/banks");
            then.status(409).json_body(json!({
                "status": 409,
                "message": "A bank with the code already exists: B001",
                "timestamp": "2025-01-01T00:00:00Z"
            }));
        })
        .await;

    let client = HttpBankClient::<BankCatalog>::new(server.base_url());
    let err = client.create_bank(input("B001", "Name")).await.unwrap_err();

    assert_eq!(
        err,
        BankError::DuplicateCode {
            catalog: Catalog::Bank,
            code: "B001".to_string()
        }
    );
}

#[tokio::test]
async fn test_bad_request_is_parsed_into_violations() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(MockMethod::PUT).path("/api/bancos/3");
            then.status(400).json_body(json!({
                "status": 400,
                "message": "Error de validación: codigo: El código es obligatorio; nombre: El nombre es obligatorio",
                "timestamp": "2025-01-01T00:00:00Z"
            }));
        })
        .await;

    let client = HttpBankClient::<BancoCatalog>::new(server.base_url());
    let err = client.update_bank(3, input("", "")).await.unwrap_err();

    assert_eq!(
        err,
        BankError::Validation {
            catalog: Catalog::Banco,
            violations: vec![
                FieldViolation::new("codigo", "El código es obligatorio"),
                FieldViolation::new("nombre", "El nombre es obligatorio"),
            ],
        }
    );
}

#[tokio::test]
async fn test_server_error_and_transport_failure_are_internal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(MockMethod::DELETE).path("/api/banks/1");
            then.status(500).body("boom");
        })
        .await;

    let client = HttpBankClient::<BankCatalog>::new(server.base_url());
    assert_eq!(client.delete_bank(1).await.unwrap_err(), BankError::Internal);

    // Nothing listens on port 1
    let unreachable = HttpBankClient::<BankCatalog>::new("http://127.0.0.1:1");
    assert_eq!(unreachable.list_banks().await.unwrap_err(), BankError::Internal);
}

#[tokio::test]
async fn test_self_query_in_http_mode_relays_remote_listing() {
    print_test_header(
        "test_self_query_in_http_mode_relays_remote_listing",
        "In http mode the self-query endpoint calls the configured base URL",
    );
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(MockMethod::GET).path("/api/banks");
            then.status(200).json_body(json!([{
                "id": 41,
                "code": "REMOTE",
                "name": "Remote Bank",
                "country": null,
                "active": false,
                "creationDate": "2025-01-01T00:00:00Z"
            }]));
        })
        .await;

    let config = Config {
        self_query: SelfQueryConfig {
            mode: SelfQueryMode::Http,
            base_url: Some(server.base_url()),
        },
    };
    let module = module_with(config).await;
    let router = module.register_rest(axum::Router::new()).unwrap();

    let (status, body) = send(&router, Method::GET, "/api/banks/internal-query", None).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["code"], "REMOTE");
    assert_eq!(body[0]["active"], false);
}

#[tokio::test]
async fn test_http_mode_without_base_url_is_rejected() {
    let config = Config {
        self_query: SelfQueryConfig {
            mode: SelfQueryMode::Http,
            base_url: None,
        },
    };
    let db = common::memory_db().await;
    assert!(bank_service::BankServiceModule::init(config, db).is_err());
}

#[tokio::test]
async fn test_client_against_live_router() {
    print_test_header(
        "test_client_against_live_router",
        "HttpBankClient drives the real REST surface end to end",
    );
    let module = module_with(Config::default()).await;
    let router = module.register_rest(axum::Router::new()).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });

    let client = HttpBankClient::<BancoCatalog>::new(format!("http://{addr}"));

    let created = client
        .create_bank(input("B001", "Banco Central"))
        .await
        .unwrap();
    assert_eq!(client.get_bank(created.id).await.unwrap(), created);

    let err = client
        .create_bank(input("B001", "Otro"))
        .await
        .unwrap_err();
    assert!(matches!(err, BankError::DuplicateCode { .. }));

    let err = client.create_bank(input("", "Sin código")).await.unwrap_err();
    assert_eq!(
        err,
        BankError::Validation {
            catalog: Catalog::Banco,
            violations: vec![FieldViolation::new("codigo", "El código es obligatorio")],
        }
    );

    client.delete_bank(created.id).await.unwrap();
    assert_eq!(
        client.delete_bank(created.id).await.unwrap_err(),
        BankError::NotFound {
            catalog: Catalog::Banco,
            id: created.id
        }
    );
    assert!(client.list_banks().await.unwrap().is_empty());
}
