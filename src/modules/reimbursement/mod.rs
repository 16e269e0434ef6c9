//! Reimbursement / repurchase valuation mode (spec §4.8): a thin,
//! non-iterative composition that does not reuse the plan engine directly
//! but shares its calendar and rounding conventions.

pub mod models;
pub mod service;

pub use models::{
    Invoice, InvoiceRepurchase, InvoiceStatus, ReimbursementParams, ReimbursementResponse,
};
pub use service::calculate_reimbursement;
