use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Spec §6: `InvoiceStatusReimbursement ∈ {OPEN=0, PAID=1, READJUSTED=2}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Open,
    Paid,
    Readjusted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: u64,
    pub due_at: NaiveDate,
    pub original_amount: f64,
    pub main_iof_tac: f64,
    pub status: InvoiceStatus,
}

/// Inputs to reimbursement / repurchase valuation mode (spec §4.8).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReimbursementParams {
    pub invoices: Vec<Invoice>,
    pub base_date: NaiveDate,
    /// Absolute amount in this mode, not a rate (spec §4.8).
    pub mdr: f64,
    pub invoice_cost: f64,
    /// Monthly rate; converted internally to a daily rate (spec §4.8).
    pub interest_rate: f64,
    pub fee: f64,
    pub max_reimbursement_payment_days: i64,
    pub max_repurchase_payment_days: i64,
}

impl ReimbursementParams {
    pub fn validate(&self) -> Result<()> {
        if self.invoices.is_empty() {
            return Err(AppError::validation("reimbursement requires at least one invoice"));
        }
        if self.interest_rate <= -1.0 {
            return Err(AppError::validation("interest_rate must be > -1"));
        }
        Ok(())
    }
}

/// Per-invoice repurchase metadata (spec §4.8).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceRepurchase {
    pub id: u64,
    pub days_difference: i64,
    pub present_value_repurchase: f64,
}

/// Output of reimbursement mode (spec §4.8).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReimbursementResponse {
    pub interest_rate_daily: f64,
    pub invoices: Vec<InvoiceRepurchase>,
    pub total_present_value_repurchase: f64,
    pub subsidy_for_cancellation: f64,
    pub customer_charge_back_amount: f64,
    pub reimbursement_value: f64,
    pub reimbursement_invoice_due_date: NaiveDate,
}
