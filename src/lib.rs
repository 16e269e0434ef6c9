//! Brazilian consumer-credit installment-plan engine.
//!
//! Given a principal, a disbursement date, an installment count, and a
//! tax/fee configuration, computes a reconciled installment plan for every
//! prefix length, plus two adjacent modes that reuse the same engine:
//! down-payment planning and reimbursement/repurchase valuation.

pub mod config;
pub mod core;
pub mod modules;

pub use core::{AppError, Result};
pub use modules::down_payment::{calculate_down_payment, DownPaymentParams, DownPaymentResponses};
pub use modules::plan::{calculate_plan, PlanParams, PlanResponses};
pub use modules::reimbursement::{
    calculate_reimbursement, Invoice, InvoiceRepurchase, InvoiceStatus, ReimbursementParams,
    ReimbursementResponse,
};
