//! Plan solver (spec §4.4) — the numerically hard part.
//!
//! Back-solves the IOF- and TAC-inclusive contract face value directly
//! (not by fixed-point iteration: spec §9 notes this closed form only holds
//! because IOF is linear in the contract amount once the accumulated-day
//! vector is fixed; a non-linear IOF component would require replacing
//! this with a true fixed-point loop).
//!
//! The per-period IOF rate itself is computed by [`super::iof`], which
//! normalizes `iof_percentage` to a daily rate before this solver ever
//! sees it — this module only assembles the closed form over that rate.

use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::plan::models::{InstallmentRow, PlanParams};

use super::iof::period_iof_factor;

/// Mutates `rows` in place, filling every monetary field for this N-row
/// schedule. `rows` must already carry the base fields from
/// [`super::schedule_builder::build_schedule`].
pub fn solve(rows: &mut [InstallmentRow], params: &PlanParams) -> Result<()> {
    let count = rows.len();
    if count == 0 {
        return Err(AppError::internal("plan solver received an empty schedule"));
    }

    // Σ days_index, accumulated by the schedule builder into the last row.
    let sum_days_index = rows[count - 1].accumulated_days_index;
    if sum_days_index <= 0.0 || !sum_days_index.is_finite() {
        return Err(AppError::numeric(format!(
            "sum of day indices is not usable: {sum_days_index}"
        )));
    }

    // Step 1: the installment amount absent IOF and TAC.
    let base_installment = params.requested_amount / sum_days_index;

    // Step 3: the linear IOF factor and its closed-form total. `C_k` (spec
    // §4.3) is the days_index-weighted principal share from step 2
    // (`principal_k = base_installment · days_index[k]`, which sums to
    // `requested_amount`, i.e. to `sum_days_index` in *weight* terms) — so
    // the per-period rates must be averaged in that same proportion
    // (`days_index[k] / sum_days_index`), not summed raw. Summing the raw
    // `days_index[k] * rate_k` products without dividing back out by
    // `sum_days_index` leaves a quantity with the wrong units entirely (it
    // scales with the schedule's day-index magnitude, not with a
    // dimensionless blended rate), which is why that version of this loop
    // produced a contract amount roughly double the reference.
    let mut weighted_rate_sum = 0.0;
    for row in rows.iter() {
        weighted_rate_sum += row.days_index
            * period_iof_factor(row.accumulated_days, params.iof_percentage, params.iof_overall);
    }
    let iof_factor = weighted_rate_sum / sum_days_index;
    if iof_factor >= 1.0 {
        return Err(AppError::numeric(format!(
            "IOF factor {iof_factor} leaves no room for a solvable contract amount"
        )));
    }
    let total_iof = params.requested_amount * iof_factor / (1.0 - iof_factor);

    // Steps 4-6.
    let contract_amount_without_tac = params.requested_amount + total_iof;
    let tac_amount = params.tac_percentage * params.requested_amount;
    let contract_amount = contract_amount_without_tac + tac_amount;
    let installment_amount = contract_amount / sum_days_index;

    for v in [base_installment, total_iof, contract_amount, installment_amount] {
        if let Some(msg) = crate::core::numeric::check_finite(v, "plan solver") {
            return Err(AppError::numeric(msg));
        }
    }

    // Step 7: per-row fixed (whole-plan) fields.
    let n = count as f64;
    let debit_service = installment_amount * n - contract_amount;
    let mdr_amount = params.requested_amount * params.mdr;
    let merchant_debit_service_amount = params.requested_amount * params.debit_service_percentage;
    let merchant_total_amount = mdr_amount + merchant_debit_service_amount;
    let settled_to_merchant = params.requested_amount - merchant_total_amount;
    let total_amount = installment_amount * n;
    let pre_disbursement_amount = params.requested_amount;

    // Step 8: running sums. IOF and contract amortization are distributed
    // across periods in the same days_index proportion used throughout the
    // engine for principal (base_installment), with the last period
    // absorbing the residual so the running sums land exactly on
    // total_iof / contract_amount at row N.
    let mut paid_total_iof = 0.0;
    let mut paid_contract_amount = 0.0;
    for (i, row) in rows.iter_mut().enumerate() {
        let is_last = i == count - 1;
        let proportion = row.days_index / sum_days_index;

        let period_iof = if is_last {
            total_iof - paid_total_iof
        } else {
            total_iof * proportion
        };
        let period_contract = if is_last {
            contract_amount - paid_contract_amount
        } else {
            contract_amount * proportion
        };

        paid_total_iof += period_iof;
        paid_contract_amount += period_contract;

        row.total_iof = total_iof;
        row.installment_amount = installment_amount;
        row.debit_service = debit_service;
        row.customer_debit_service_amount = debit_service;
        row.customer_amount = installment_amount;
        row.merchant_debit_service_amount = merchant_debit_service_amount;
        row.merchant_total_amount = merchant_total_amount;
        row.settled_to_merchant = settled_to_merchant;
        row.mdr_amount = mdr_amount;
        row.contract_amount = contract_amount;
        row.contract_amount_without_tac = contract_amount_without_tac;
        row.tac_amount = tac_amount;
        row.pre_disbursement_amount = pre_disbursement_amount;
        row.paid_total_iof = paid_total_iof;
        row.paid_contract_amount = paid_contract_amount;
        row.total_amount = total_amount;
    }

    debug!(
        count,
        contract_amount, installment_amount, total_iof, "plan solver converged"
    );

    Ok(())
}
