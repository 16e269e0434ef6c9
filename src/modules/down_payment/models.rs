use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::plan::{PlanParams, PlanResponses};

/// Inputs to down-payment mode (spec §4.7).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownPaymentParams {
    /// Template for the residual financing; `requested_amount` here is the
    /// full purchase price before the down payment is subtracted.
    pub plan: PlanParams,
    /// Due date of the first down-payment installment.
    pub first_payment_date: NaiveDate,
    /// Total amount to be paid as a down payment (across all `m` installments).
    pub requested_amount: f64,
    /// Maximum down-payment installment count `m` to evaluate.
    pub installments: u32,
    /// Candidates whose per-installment down-payment amount falls below
    /// this are dropped.
    pub min_installment_amount: f64,
}

impl DownPaymentParams {
    pub fn validate(&self) -> Result<()> {
        if self.installments == 0 {
            return Err(AppError::validation("down-payment installments must be >= 1"));
        }
        if self.requested_amount <= 0.0 {
            return Err(AppError::validation("down-payment requested_amount must be positive"));
        }
        self.plan.validate()
    }
}

/// One down-payment candidate, covering installment counts `m ∈ [1, installments]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownPaymentResponse {
    /// The down-payment installment count this candidate covers.
    pub installments: u32,
    /// `requested_amount / installments`.
    pub installment_amount: f64,
    /// Monthly due dates for the down-payment installments themselves.
    pub due_dates: Vec<NaiveDate>,
    /// The residual financing plan, computed over the purchase price minus
    /// this candidate's down payment.
    pub plans: PlanResponses,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DownPaymentResponses {
    pub responses: Vec<DownPaymentResponse>,
}

impl DownPaymentResponses {
    pub fn new(responses: Vec<DownPaymentResponse>) -> Self {
        Self { responses }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
