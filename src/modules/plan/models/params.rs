use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Inputs to the installment-plan engine (spec §3).
///
/// All monetary fields and rates are `f64` — the engine is required to
/// reproduce reference values to the last ULP (spec §1), which rules out
/// `rust_decimal`'s scaled-integer representation for this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanParams {
    /// Principal the merchant wants settled, in BRL.
    pub requested_amount: f64,
    /// The transaction date.
    pub requested_date: NaiveDate,
    /// Due date of installment 1. Must be >= `requested_date`.
    pub first_payment_date: NaiveDate,
    /// Maximum N for the plan grid.
    pub installments: u32,
    /// Nominal monthly rate used for installment sizing.
    pub interest_rate: f64,
    /// Merchant discount rate: fraction of principal kept by the acquirer.
    pub mdr: f64,
    /// Fixed setup fee as a fraction of principal.
    pub tac_percentage: f64,
    /// Upfront IOF surcharge rate (typically 0.0038).
    pub iof_overall: f64,
    /// Daily IOF rate.
    pub iof_percentage: f64,
    /// Optional merchant-side debit-service fee fraction.
    #[serde(default)]
    pub debit_service_percentage: f64,
    /// Lower bound: candidates whose installment amount falls below this
    /// are dropped from the grid.
    pub min_installment_amount: f64,
    /// Upper bound on total amount: candidates exceeding it are dropped.
    pub max_total_amount: f64,
    /// When true, the effective disbursement date is the next business day
    /// at or after `requested_date`.
    #[serde(default)]
    pub disbursement_only_on_business_days: bool,
}

impl PlanParams {
    /// Validates the request per spec §7's ValidationError cases.
    pub fn validate(&self) -> Result<()> {
        if self.installments == 0 {
            return Err(AppError::validation("installments must be >= 1"));
        }
        if self.requested_amount <= 0.0 {
            return Err(AppError::validation("requested_amount must be positive"));
        }
        if self.first_payment_date < self.requested_date {
            return Err(AppError::validation(
                "first_payment_date must not be before requested_date",
            ));
        }
        if self.interest_rate <= -1.0 {
            return Err(AppError::validation("interest_rate must be > -1"));
        }
        if self.iof_overall < 0.0 {
            return Err(AppError::validation("iof_overall must not be negative"));
        }
        if self.iof_percentage < 0.0 {
            return Err(AppError::validation("iof_percentage must not be negative"));
        }
        if self.mdr < 0.0 {
            return Err(AppError::validation("mdr must not be negative"));
        }
        if self.tac_percentage < 0.0 {
            return Err(AppError::validation("tac_percentage must not be negative"));
        }
        if self.debit_service_percentage < 0.0 {
            return Err(AppError::validation(
                "debit_service_percentage must not be negative",
            ));
        }
        Ok(())
    }

    /// The effective disbursement date, per spec §4.1's calendar policy.
    pub fn disbursement_date(&self) -> NaiveDate {
        if self.disbursement_only_on_business_days {
            crate::modules::calendar::Calendar::next_business_day(self.requested_date)
        } else {
            self.requested_date
        }
    }
}
