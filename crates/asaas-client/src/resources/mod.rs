//! Resource clients, one per API resource group.
//!
//! Each client borrows the transport of the [`Asaas`](crate::Asaas) handle
//! that produced it and maps its methods one to one onto REST endpoints
//! under `/v3`. Write calls that have no typed input accept any
//! `serde::Serialize` body; list calls without a typed filter take
//! [`Params`](asaas_core::Params).

#![allow(clippy::missing_errors_doc)] // Every call returns the transport's mapped AsaasError

mod accounts;
mod anticipations;
mod bill;
mod chargebacks;
mod checkouts;
mod credit_bureau_report;
mod credit_card;
mod customers;
mod escrow;
mod finance;
mod financial_transactions;
mod fiscal_info;
mod installments;
mod invoices;
mod lean;
mod mobile_phone_recharges;
mod my_account;
mod notifications;
mod payment_dunnings;
mod payment_links;
mod payments;
mod pix;
mod sandbox;
mod subscriptions;
mod transfers;
mod wallets;
mod webhooks;

pub use accounts::Accounts;
pub use anticipations::Anticipations;
pub use bill::Bill;
pub use chargebacks::Chargebacks;
pub use checkouts::Checkouts;
pub use credit_bureau_report::CreditBureauReport;
pub use credit_card::CreditCard;
pub use customers::Customers;
pub use escrow::Escrow;
pub use finance::Finance;
pub use financial_transactions::FinancialTransactions;
pub use fiscal_info::FiscalInfo;
pub use installments::Installments;
pub use invoices::Invoices;
pub use lean::LeanPayments;
pub use mobile_phone_recharges::MobilePhoneRecharges;
pub use my_account::MyAccount;
pub use notifications::Notifications;
pub use payment_dunnings::PaymentDunnings;
pub use payment_links::PaymentLinks;
pub use payments::Payments;
pub use pix::Pix;
pub use sandbox::Sandbox;
pub use subscriptions::Subscriptions;
pub use transfers::Transfers;
pub use wallets::Wallets;
pub use webhooks::Webhooks;
