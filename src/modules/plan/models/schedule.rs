use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of an installment plan.
///
/// Built once per candidate N by the schedule builder (spec §4.2), then
/// mutated in place by the IOF model, plan solver, and rate solver, in that
/// strict order (spec §3 "Lifecycle"). The last row of a given N's
/// schedule is emitted as that N's [`crate::modules::plan::models::PlanResponse`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InstallmentRow {
    /// 1-based period index.
    pub installment: u32,
    /// Due date, computed as `first_payment_date` shifted by
    /// `installment - 1` calendar months (spec §4.1).
    pub due_date: NaiveDate,
    /// Effective disbursement date (spec §4.1).
    pub disbursement_date: NaiveDate,
    /// Signed calendar-day count from disbursement to `due_date`.
    pub accumulated_days: i64,
    /// `(1 + interest_rate)^(-accumulated_days / 30)`.
    pub days_index: f64,
    /// Running sum of `days_index` through this row, inclusive.
    pub accumulated_days_index: f64,

    // --- filled by the IOF model (spec §4.3) ---
    pub total_iof: f64,

    // --- filled by the plan solver (spec §4.4) ---
    pub installment_amount: f64,
    pub debit_service: f64,
    pub customer_debit_service_amount: f64,
    pub customer_amount: f64,
    pub merchant_debit_service_amount: f64,
    pub merchant_total_amount: f64,
    pub settled_to_merchant: f64,
    pub mdr_amount: f64,
    pub contract_amount: f64,
    pub contract_amount_without_tac: f64,
    pub tac_amount: f64,
    pub pre_disbursement_amount: f64,
    pub paid_total_iof: f64,
    pub paid_contract_amount: f64,
    pub total_amount: f64,

    // --- filled by the rate solver (spec §4.5) ---
    pub effective_interest_rate: f64,
    pub eir_monthly: f64,
    pub eir_yearly: f64,
    pub tec_monthly: f64,
    pub tec_yearly: f64,
    pub total_effective_cost: f64,
    pub calculation_basis_for_effective_interest_rate: f64,
}

impl InstallmentRow {
    /// Creates a row with the base (pre-monetary) schedule fields set; all
    /// monetary fields default to zero until later stages fill them in,
    /// matching the "all monetary fields are zero at this point" rule of
    /// the schedule builder (spec §4.2).
    pub fn new_base(
        installment: u32,
        due_date: NaiveDate,
        disbursement_date: NaiveDate,
        accumulated_days: i64,
        days_index: f64,
        accumulated_days_index: f64,
    ) -> Self {
        Self {
            installment,
            due_date,
            disbursement_date,
            accumulated_days,
            days_index,
            accumulated_days_index,
            total_iof: 0.0,
            installment_amount: 0.0,
            debit_service: 0.0,
            customer_debit_service_amount: 0.0,
            customer_amount: 0.0,
            merchant_debit_service_amount: 0.0,
            merchant_total_amount: 0.0,
            settled_to_merchant: 0.0,
            mdr_amount: 0.0,
            contract_amount: 0.0,
            contract_amount_without_tac: 0.0,
            tac_amount: 0.0,
            pre_disbursement_amount: 0.0,
            paid_total_iof: 0.0,
            paid_contract_amount: 0.0,
            total_amount: 0.0,
            effective_interest_rate: 0.0,
            eir_monthly: 0.0,
            eir_yearly: 0.0,
            tec_monthly: 0.0,
            tec_yearly: 0.0,
            total_effective_cost: 0.0,
            calculation_basis_for_effective_interest_rate: 0.0,
        }
    }
}
