//! Request inputs and list filters for the most used endpoints.
//!
//! Inputs serialize to the API's camelCase JSON and omit unset fields.
//! Endpoints without a typed input accept any `serde::Serialize` body,
//! typically a `serde_json::json!` value.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use asaas_core::Params;

/// How a payment is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    /// Bank slip.
    Boleto,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Instant payment.
    Pix,
    /// Let the customer choose.
    Undefined,
}

impl BillingType {
    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boleto => "BOLETO",
            Self::CreditCard => "CREDIT_CARD",
            Self::DebitCard => "DEBIT_CARD",
            Self::Pix => "PIX",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cycle {
    /// Every week.
    Weekly,
    /// Every two weeks.
    Biweekly,
    /// Every month.
    Monthly,
    /// Every two months.
    Bimonthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    Semiannually,
    /// Every year.
    Yearly,
}

/// Payload for `POST /v3/customers`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Full name.
    pub name: String,
    /// CPF or CNPJ, digits only.
    pub cpf_cnpj: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Landline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Address number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    /// Address complement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// Neighbourhood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// CEP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Caller's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Disable Asaas notifications for this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    /// Comma-separated additional emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    /// Municipal registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipal_inscription: Option<String>,
    /// State registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_inscription: Option<String>,
    /// Internal notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// Customer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Customer is outside Brazil.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_customer: Option<bool>,
}

impl NewCustomer {
    /// Customer with the two required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, cpf_cnpj: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpf_cnpj: cpf_cnpj.into(),
            ..Self::default()
        }
    }
}

/// Payload for `PUT /v3/customers/{id}`. Only set fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// CPF or CNPJ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Landline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Address number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    /// Address complement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// Neighbourhood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// CEP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Caller's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Disable Asaas notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    /// Comma-separated additional emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    /// Internal notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// Customer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Filters for `GET /v3/customers`.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    /// Page offset (ignored by `list_all`).
    pub offset: Option<u64>,
    /// Page size (ignored by `list_all`).
    pub limit: Option<u32>,
    /// Name.
    pub name: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// CPF or CNPJ.
    pub cpf_cnpj: Option<String>,
    /// Customer group.
    pub group_name: Option<String>,
    /// Caller's own identifier.
    pub external_reference: Option<String>,
}

impl CustomerFilter {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set_opt("offset", self.offset)
            .set_opt("limit", self.limit)
            .set_opt("name", self.name.as_ref())
            .set_opt("email", self.email.as_ref())
            .set_opt("cpfCnpj", self.cpf_cnpj.as_ref())
            .set_opt("groupName", self.group_name.as_ref())
            .set_opt("externalReference", self.external_reference.as_ref())
    }
}

/// Payload for `POST /v3/payments/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    /// Customer id.
    pub customer: String,
    /// Payment method.
    pub billing_type: BillingType,
    /// Amount in BRL.
    pub value: f64,
    /// Due date.
    pub due_date: NaiveDate,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    /// Value of each installment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    /// Discount settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Value>,
    /// Interest settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Value>,
    /// Fine settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Value>,
    /// Mail the bank slip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    /// Split configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Value>>,
    /// Redirect after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
    /// Raw card data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<Value>,
    /// Card holder data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<Value>,
    /// Token from `credit_card().tokenize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,
    /// Authorize without capturing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_only: Option<bool>,
    /// Payer IP, required for card payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
}

impl NewPayment {
    /// Payment with the four required fields.
    #[must_use]
    pub fn new(
        customer: impl Into<String>,
        billing_type: BillingType,
        value: f64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            customer: customer.into(),
            billing_type,
            value,
            due_date,
            description: None,
            external_reference: None,
            installment_count: None,
            installment_value: None,
            discount: None,
            interest: None,
            fine: None,
            postal_service: None,
            split: None,
            callback: None,
            credit_card: None,
            credit_card_holder_info: None,
            credit_card_token: None,
            authorized_only: None,
            remote_ip: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the external reference.
    #[must_use]
    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }
}

/// Payload for `PUT /v3/payments/{id}`. Only set fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    /// Amount in BRL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Discount settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Value>,
    /// Interest settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Value>,
    /// Fine settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Value>,
    /// Mail the bank slip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    /// Split configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Value>>,
    /// Redirect after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
}

/// Filters for `GET /v3/payments`.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Page offset (ignored by `list_all`).
    pub offset: Option<u64>,
    /// Page size (ignored by `list_all`).
    pub limit: Option<u32>,
    /// Customer id.
    pub customer: Option<String>,
    /// Customer group.
    pub customer_group_name: Option<String>,
    /// Payment method.
    pub billing_type: Option<BillingType>,
    /// Status, e.g. `PENDING`, `RECEIVED`, `OVERDUE`.
    pub status: Option<String>,
    /// Subscription id.
    pub subscription: Option<String>,
    /// Installment id.
    pub installment: Option<String>,
    /// Caller's own identifier.
    pub external_reference: Option<String>,
    /// Exact payment date.
    pub payment_date: Option<NaiveDate>,
    /// Only anticipated payments.
    pub anticipated: Option<bool>,
    /// Created on or after.
    pub date_created_ge: Option<NaiveDate>,
    /// Created on or before.
    pub date_created_le: Option<NaiveDate>,
    /// Paid on or after.
    pub payment_date_ge: Option<NaiveDate>,
    /// Paid on or before.
    pub payment_date_le: Option<NaiveDate>,
    /// Estimated credit on or after.
    pub estimated_credit_date_ge: Option<NaiveDate>,
    /// Estimated credit on or before.
    pub estimated_credit_date_le: Option<NaiveDate>,
    /// Due on or after.
    pub due_date_ge: Option<NaiveDate>,
    /// Due on or before.
    pub due_date_le: Option<NaiveDate>,
    /// Email of the user who created the payment.
    pub user: Option<String>,
}

impl PaymentFilter {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set_opt("offset", self.offset)
            .set_opt("limit", self.limit)
            .set_opt("customer", self.customer.as_ref())
            .set_opt("customerGroupName", self.customer_group_name.as_ref())
            .set_opt("billingType", self.billing_type)
            .set_opt("status", self.status.as_ref())
            .set_opt("subscription", self.subscription.as_ref())
            .set_opt("installment", self.installment.as_ref())
            .set_opt("externalReference", self.external_reference.as_ref())
            .set_opt("paymentDate", self.payment_date)
            .set_opt("anticipated", self.anticipated)
            .set_opt("dateCreated[ge]", self.date_created_ge)
            .set_opt("dateCreated[le]", self.date_created_le)
            .set_opt("paymentDate[ge]", self.payment_date_ge)
            .set_opt("paymentDate[le]", self.payment_date_le)
            .set_opt("estimatedCreditDate[ge]", self.estimated_credit_date_ge)
            .set_opt("estimatedCreditDate[le]", self.estimated_credit_date_le)
            .set_opt("dueDate[ge]", self.due_date_ge)
            .set_opt("dueDate[le]", self.due_date_le)
            .set_opt("user", self.user.as_ref())
    }
}

/// Payload for `POST /v3/payments/{id}/refund`. Empty refunds the full value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Partial refund value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Reason shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `POST /v3/payments/{id}/receiveInCash`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashReceipt {
    /// Date the cash was received.
    pub payment_date: NaiveDate,
    /// Amount received.
    pub value: f64,
    /// Suppress the payer notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

/// Card data for paying an existing charge or replacing a subscription card.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardPayment {
    /// Raw card data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<Value>,
    /// Card holder data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<Value>,
    /// Previously tokenized card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,
    /// Payer IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
}

/// Payload for `POST /v3/creditCard/tokenizeCreditCard`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeCreditCard {
    /// Customer owning the card.
    pub customer: String,
    /// Card number, holder name, expiry and CCV.
    pub credit_card: Value,
    /// Card holder data.
    pub credit_card_holder_info: Value,
    /// Payer IP.
    pub remote_ip: String,
}

/// Payload for `POST /v3/subscriptions/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    /// Customer id.
    pub customer: String,
    /// Payment method.
    pub billing_type: BillingType,
    /// Amount per cycle.
    pub value: f64,
    /// First due date.
    pub next_due_date: NaiveDate,
    /// Recurrence.
    pub cycle: Cycle,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller's own identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Discount settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Value>,
    /// Interest settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Value>,
    /// Fine settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Value>,
    /// Last date a charge is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Maximum number of charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_payments: Option<u32>,
    /// Split configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Value>>,
    /// Redirect after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
    /// Raw card data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<Value>,
    /// Card holder data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<Value>,
    /// Previously tokenized card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,
    /// Payer IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
}

impl NewSubscription {
    /// Subscription with the five required fields.
    #[must_use]
    pub fn new(
        customer: impl Into<String>,
        billing_type: BillingType,
        value: f64,
        next_due_date: NaiveDate,
        cycle: Cycle,
    ) -> Self {
        Self {
            customer: customer.into(),
            billing_type,
            value,
            next_due_date,
            cycle,
            description: None,
            external_reference: None,
            discount: None,
            interest: None,
            fine: None,
            end_date: None,
            max_payments: None,
            split: None,
            callback: None,
            credit_card: None,
            credit_card_holder_info: None,
            credit_card_token: None,
            remote_ip: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Filters for `GET /v3/subscriptions`.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionFilter {
    /// Page offset (ignored by `list_all`).
    pub offset: Option<u64>,
    /// Page size (ignored by `list_all`).
    pub limit: Option<u32>,
    /// Customer id.
    pub customer: Option<String>,
    /// Customer group.
    pub customer_group_name: Option<String>,
    /// Payment method.
    pub billing_type: Option<BillingType>,
    /// `ACTIVE`, `EXPIRED` or `INACTIVE`.
    pub status: Option<String>,
    /// Only removed subscriptions.
    pub deleted_only: Option<bool>,
    /// Include removed subscriptions.
    pub include_deleted: Option<bool>,
    /// Caller's own identifier.
    pub external_reference: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
}

impl SubscriptionFilter {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set_opt("offset", self.offset)
            .set_opt("limit", self.limit)
            .set_opt("customer", self.customer.as_ref())
            .set_opt("customerGroupName", self.customer_group_name.as_ref())
            .set_opt("billingType", self.billing_type)
            .set_opt("status", self.status.as_ref())
            .set_opt("deletedOnly", self.deleted_only)
            .set_opt("includeDeleted", self.include_deleted)
            .set_opt("externalReference", self.external_reference.as_ref())
            .set_opt("order", self.order.as_ref())
            .set_opt("sort", self.sort.as_ref())
    }
}

/// Payload for `POST /v3/webhooks`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebhook {
    /// Endpoint receiving the events.
    pub url: String,
    /// Contact for delivery problems.
    pub email: String,
    /// Whether deliveries are active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether the delivery queue is paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<bool>,
    /// Event payload version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    /// Token echoed in the `asaas-access-token` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Event names to deliver, e.g. `PAYMENT_RECEIVED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

impl NewWebhook {
    /// Webhook with the two required fields.
    #[must_use]
    pub fn new(url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_customer_omits_unset_fields() {
        let customer = NewCustomer {
            email: Some("joao@example.com".into()),
            mobile_phone: Some("11999999999".into()),
            ..NewCustomer::new("João Silva", "12345678901")
        };

        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({
                "name": "João Silva",
                "cpfCnpj": "12345678901",
                "email": "joao@example.com",
                "mobilePhone": "11999999999"
            })
        );
    }

    #[test]
    fn new_payment_uses_wire_names() {
        let due = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let payment = NewPayment::new("cus_1", BillingType::CreditCard, 150.5, due)
            .with_description("Pedido 42");

        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({
                "customer": "cus_1",
                "billingType": "CREDIT_CARD",
                "value": 150.5,
                "dueDate": "2024-12-31",
                "description": "Pedido 42"
            })
        );
    }

    #[test]
    fn subscription_cycle_serializes_upper_case() {
        let due = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let sub = NewSubscription::new("cus_1", BillingType::Pix, 49.9, due, Cycle::Semiannually);
        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(value["cycle"], "SEMIANNUALLY");
        assert_eq!(value["nextDueDate"], "2025-01-10");
        assert!(value.get("endDate").is_none());
    }

    #[test]
    fn payment_filter_builds_range_params() {
        let filter = PaymentFilter {
            billing_type: Some(BillingType::Boleto),
            due_date_ge: NaiveDate::from_ymd_opt(2024, 1, 1),
            due_date_le: NaiveDate::from_ymd_opt(2024, 1, 31),
            anticipated: Some(false),
            ..PaymentFilter::default()
        };
        let params = filter.to_params();

        assert_eq!(params.get("billingType"), Some("BOLETO"));
        assert_eq!(params.get("dueDate[ge]"), Some("2024-01-01"));
        assert_eq!(params.get("dueDate[le]"), Some("2024-01-31"));
        assert_eq!(params.get("anticipated"), Some("false"));
        assert_eq!(params.get("customer"), None);
    }

    #[test]
    fn customer_filter_maps_camel_case_keys() {
        let filter = CustomerFilter {
            cpf_cnpj: Some("24971563792".into()),
            group_name: Some("vip".into()),
            limit: Some(5),
            ..CustomerFilter::default()
        };
        let params = filter.to_params();
        assert_eq!(params.get("cpfCnpj"), Some("24971563792"));
        assert_eq!(params.get("groupName"), Some("vip"));
        assert_eq!(params.get("limit"), Some("5"));
    }
}
