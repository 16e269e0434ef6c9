//! Down-payment mode (spec §4.7): a thin composition over the installment
//! plan engine.

pub mod models;
pub mod service;

pub use models::{DownPaymentParams, DownPaymentResponse, DownPaymentResponses};
pub use service::calculate_down_payment;
