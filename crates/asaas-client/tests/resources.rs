//! Resource clients against a mock Asaas API.

mod common;

use asaas::{
    Asaas, AsaasError, BillingType, CashReceipt, Cycle, FileUpload, NewPayment, NewSubscription,
    NewWebhook, Params, RefundRequest, SubscriptionFilter,
};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, config, customer, page};

#[tokio::test]
async fn customer_survives_delete_and_restore() {
    let server = MockServer::start().await;
    let original = customer("cus_000005401844", "João Silva");

    Mock::given(method("POST"))
        .and(path("/v3/customers"))
        .and(body_json(json!({"name": "João Silva", "cpfCnpj": "24971563792"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(original.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/customers/cus_000005401844"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"deleted": true, "id": "cus_000005401844"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/customers/cus_000005401844/restore"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(original.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/customers/cus_000005401844"))
        .respond_with(ResponseTemplate::new(200).set_body_json(original.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let customers = client.customers();

    let created = customers
        .create(&asaas::NewCustomer::new("João Silva", "24971563792"))
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let deleted = customers.delete(id).await.unwrap();
    assert_eq!(deleted["deleted"], true);

    customers.restore(id).await.unwrap();
    let fetched = customers.get(id).await.unwrap();

    assert_eq!(serde_json::Value::Object(fetched), original);
}

#[tokio::test]
async fn payment_create_and_actions_use_api_paths() {
    let server = MockServer::start().await;
    let due = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();

    Mock::given(method("POST"))
        .and(path("/v3/payments/"))
        .and(body_json(json!({
            "customer": "cus_1",
            "billingType": "BOLETO",
            "value": 100.0,
            "dueDate": "2024-12-20"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "PENDING"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/payments/pay_1/receiveInCash"))
        .and(body_json(json!({"paymentDate": "2024-12-19", "value": 100.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "RECEIVED_IN_CASH"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/payments/pay_1/refund"))
        .and(body_json(json!({"value": 25.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "REFUNDED"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/payments/pay_1/pixQrCode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"payload": "000201..."})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let payments = client.payments();

    let payment = payments
        .create(&NewPayment::new("cus_1", BillingType::Boleto, 100.0, due))
        .await
        .unwrap();
    assert_eq!(payment["status"], "PENDING");

    let receipt = CashReceipt {
        payment_date: NaiveDate::from_ymd_opt(2024, 12, 19).unwrap(),
        value: 100.0,
        notification_disabled: None,
    };
    let received = payments.receive_in_cash("pay_1", &receipt).await.unwrap();
    assert_eq!(received["status"], "RECEIVED_IN_CASH");

    let refund = RefundRequest {
        value: Some(25.5),
        description: None,
    };
    let refunded = payments.refund("pay_1", &refund).await.unwrap();
    assert_eq!(refunded["status"], "REFUNDED");

    let qr = payments.get_pix_qr_code("pay_1").await.unwrap();
    assert_eq!(qr["payload"], "000201...");
}

#[tokio::test]
async fn subscription_filters_map_to_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/subscriptions"))
        .and(query_param("customer", "cus_1"))
        .and(query_param("billingType", "CREDIT_CARD"))
        .and(query_param("includeDeleted", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "sub_1", "cycle": "MONTHLY"})],
            0,
            10,
            false,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let filter = SubscriptionFilter {
        customer: Some("cus_1".into()),
        billing_type: Some(BillingType::CreditCard),
        include_deleted: Some(true),
        ..SubscriptionFilter::default()
    };
    let page = client(&server).subscriptions().list(&filter).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0]["cycle"], "MONTHLY");
}

#[tokio::test]
async fn subscription_create_sends_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/subscriptions/"))
        .and(body_json(json!({
            "customer": "cus_1",
            "billingType": "PIX",
            "value": 29.9,
            "nextDueDate": "2025-02-01",
            "cycle": "MONTHLY",
            "description": "Plano Pro"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "sub_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let subscription = NewSubscription::new(
        "cus_1",
        BillingType::Pix,
        29.9,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        Cycle::Monthly,
    )
    .with_description("Plano Pro");

    let created = client(&server)
        .subscriptions()
        .create(&subscription)
        .await
        .unwrap();
    assert_eq!(created["id"], "sub_1");
}

#[tokio::test]
async fn payment_document_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/payments/pay_1/documents"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("filename=\"contrato.pdf\""))
        .and(body_string_contains("availableAfterPayment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "doc_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileUpload::new("contrato.pdf", b"%PDF-1.4 test".to_vec())
        .with_content_type("application/pdf");
    let fields = Params::new()
        .set("availableAfterPayment", true)
        .set("type", "DOCUMENT");

    let document = client(&server)
        .payments()
        .upload_document("pay_1", &file, &fields)
        .await
        .unwrap();
    assert_eq!(document["id"], "doc_1");
}

#[tokio::test]
async fn account_document_upload_targets_document_group() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/myAccount/documents/grp_1"))
        .and(body_string_contains("filename=\"rg.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "file_1", "status": "PENDING"})))
        .expect(1)
        .mount(&server)
        .await;

    let uploaded = client(&server)
        .my_account()
        .upload_document("grp_1", &FileUpload::new("rg.png", b"PNGDATA".to_vec()))
        .await
        .unwrap();
    assert_eq!(uploaded["status"], "PENDING");
}

#[tokio::test]
async fn delete_account_sends_reason_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/myAccount/"))
        .and(query_param("removeReason", "Encerramento das atividades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"observations": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .my_account()
        .delete_account("Encerramento das atividades")
        .await
        .unwrap();
}

#[tokio::test]
async fn sandbox_actions_hit_sandbox_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/sandbox/payment/pay_1/confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "CONFIRMED"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/sandbox/payment/pay_2/overdue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_2", "status": "OVERDUE"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Asaas::with_config(config(&server).with_sandbox(true)).unwrap();
    let sandbox = client.sandbox_actions();

    assert_eq!(sandbox.confirm_payment("pay_1").await.unwrap()["status"], "CONFIRMED");
    assert_eq!(sandbox.force_overdue("pay_2").await.unwrap()["status"], "OVERDUE");
}

#[tokio::test]
async fn sandbox_actions_send_nothing_in_production() {
    let server = MockServer::start().await;

    let err = client(&server)
        .sandbox_actions()
        .force_overdue("pay_1")
        .await
        .unwrap_err();

    assert!(matches!(err, AsaasError::Configuration(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn webhook_create_and_remove_backoff() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/webhooks"))
        .and(body_json(json!({
            "url": "https://example.com/hooks/asaas",
            "email": "ops@example.com",
            "enabled": true,
            "authToken": "s3cret-token",
            "events": ["PAYMENT_RECEIVED", "PAYMENT_OVERDUE"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wh_1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/webhooks/wh_1/removeBackoff"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"interrupted": false})))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = NewWebhook {
        enabled: Some(true),
        auth_token: Some("s3cret-token".into()),
        events: Some(vec!["PAYMENT_RECEIVED".into(), "PAYMENT_OVERDUE".into()]),
        ..NewWebhook::new("https://example.com/hooks/asaas", "ops@example.com")
    };

    let client = client(&server);
    let created = client.webhooks().create(&webhook).await.unwrap();
    let resumed = client
        .webhooks()
        .remove_backoff(created["id"].as_str().unwrap())
        .await
        .unwrap();
    assert_eq!(resumed["interrupted"], false);
}

#[tokio::test]
async fn untyped_bodies_are_sent_verbatim() {
    let server = MockServer::start().await;
    let transfer = json!({
        "value": 150.0,
        "operationType": "PIX",
        "pixAddressKey": "ana@example.com",
        "pixAddressKeyType": "EMAIL"
    });
    Mock::given(method("POST"))
        .and(path("/v3/transfers/"))
        .and(body_json(transfer.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "tra_1", "status": "PENDING"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/transfers/tra_1/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "tra_1", "status": "CANCELLED"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let created = client.transfers().create(&transfer).await.unwrap();
    let cancelled = client
        .transfers()
        .cancel(created["id"].as_str().unwrap())
        .await
        .unwrap();
    assert_eq!(cancelled["status"], "CANCELLED");
}

#[tokio::test]
async fn installment_splits_are_wrapped() {
    let server = MockServer::start().await;
    let splits = vec![json!({"walletId": "wal_1", "percentualValue": 10})];
    Mock::given(method("PUT"))
        .and(path("/v3/installments/ins_1/splits"))
        .and(body_json(json!({"splits": splits})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"splits": splits})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server)
        .installments()
        .update_splits("ins_1", &splits)
        .await
        .unwrap();
    assert_eq!(updated["splits"][0]["walletId"], "wal_1");
}
