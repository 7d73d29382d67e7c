//! Retry, error mapping and body decoding against a mock Asaas API.

mod common;

use std::time::Duration;

use asaas::{Asaas, AsaasError, ClientConfig, FieldError, NewCustomer};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, config, customer, API_KEY};

#[tokio::test]
async fn persistent_5xx_is_retried_max_retries_times() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/cus_1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = Asaas::with_config(config(&server).with_max_retries(2)).unwrap();
    let err = client.customers().get("cus_1").await.unwrap_err();

    assert!(matches!(err, AsaasError::Api { status: 503, .. }));
    assert_eq!(err.to_string(), "API error: 503 - HTTP 503");
    server.verify().await;
}

#[tokio::test]
async fn transient_5xx_recovers_on_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/finance/balance"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/finance/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": 1250.75})))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client(&server).finance().get_balance().await.unwrap();
    assert_eq!(balance["balance"], 1250.75);
}

#[tokio::test]
async fn post_is_never_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/customers"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .customers()
        .create(&NewCustomer::new("Ana", "24971563792"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    server.verify().await;
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "description": "Customer not found"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).customers().get("missing").await.unwrap_err();

    assert!(matches!(err, AsaasError::NotFound { status: 404, .. }));
    assert_eq!(err.to_string(), "not found: [not_found] Customer not found");
}

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/payments/pay_1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"code": "invalid_access_token", "description": "A chave de API informada não é válida"}]
        })))
        .mount(&server)
        .await;

    let err = client(&server).payments().get("pay_1").await.unwrap_err();

    match err {
        AsaasError::Authentication { status, errors, .. } => {
            assert_eq!(status, 401);
            assert_eq!(errors[0].code, "invalid_access_token");
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/wallets/"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).wallets().get().await.unwrap_err();
    assert!(matches!(err, AsaasError::RateLimit { status: 429, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn validation_errors_round_trip() {
    let server = MockServer::start().await;
    let errors = json!([
        {"code": "invalid_cpfCnpj", "description": "O CPF/CNPJ informado é inválido."},
        {"code": "invalid_email", "description": "O email informado é inválido."}
    ]);
    Mock::given(method("POST"))
        .and(path("/v3/customers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "errors": errors })))
        .mount(&server)
        .await;

    let err = client(&server)
        .customers()
        .create(&NewCustomer::new("Ana", "000"))
        .await
        .unwrap_err();

    let expected: Vec<FieldError> = serde_json::from_value(errors).unwrap();
    assert_eq!(err.errors(), expected.as_slice());
    assert!(matches!(err, AsaasError::Validation { status: 400, .. }));
}

#[tokio::test]
async fn sends_auth_and_content_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/myAccount/status/"))
        .and(header("access_token", API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"general": "APPROVED"})))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server).my_account().get_status().await.unwrap();
    assert_eq!(status["general"], "APPROVED");
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/cus_1"))
        .and(header("user-agent", "billing-worker/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer("cus_1", "Ana")))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        Asaas::with_config(config(&server).with_user_agent("billing-worker/2.1")).unwrap();
    client.customers().get("cus_1").await.unwrap();
}

#[tokio::test]
async fn empty_and_non_json_bodies_become_records() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/webhooks/wh_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/webhooks/wh_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/payments/pay_1/refunds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"value": 10.0}])))
        .mount(&server)
        .await;

    let client = client(&server);

    assert!(client.webhooks().delete("wh_1").await.unwrap().is_empty());

    let raw = client.webhooks().get("wh_1").await.unwrap();
    assert_eq!(raw["raw"], "OK");

    let wrapped = client.payments().list_refunds("pay_1").await.unwrap();
    assert_eq!(wrapped["data"][0]["value"], 10.0);
}

#[tokio::test]
async fn non_json_error_body_still_maps_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/checkouts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .checkouts()
        .create(&json!({"billingTypes": ["PIX"]}))
        .await
        .unwrap_err();

    assert!(matches!(err, AsaasError::Api { status: 502, .. }));
    assert!(err.errors().is_empty());
}

#[tokio::test]
async fn slow_responses_time_out_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/cus_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(customer("cus_1", "Ana"))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = Asaas::with_config(
        config(&server)
            .with_timeout(Duration::from_millis(100))
            .with_max_retries(1),
    )
    .unwrap();

    let err = client.customers().get("cus_1").await.unwrap_err();
    assert!(matches!(err, AsaasError::Timeout(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn refused_connection_maps_to_connection_error() {
    let client = Asaas::with_config(
        ClientConfig::new(API_KEY)
            .with_base_url("http://127.0.0.1:9")
            .with_max_retries(1)
            .with_backoff_factor(0.0),
    )
    .unwrap();

    let err = client.customers().get("cus_1").await.unwrap_err();
    assert!(matches!(err, AsaasError::Connection(_)), "got {err:?}");
    assert!(err.is_retryable());
}
