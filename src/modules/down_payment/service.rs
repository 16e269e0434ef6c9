//! Down-payment mode (spec §4.7) — a thin composition over the plan engine.

use tracing::debug;

use crate::core::Result;
use crate::modules::calendar::Calendar;
use crate::modules::plan::calculate_plan;

use super::models::{DownPaymentParams, DownPaymentResponse, DownPaymentResponses};

/// For each candidate down-payment installment count `m ∈ [1, installments]`
/// whose per-installment amount clears `min_installment_amount`, computes
/// the down-payment due-date sequence and the embedded residual [`Plan`](
/// crate::modules::plan) over the purchase price minus the down payment.
pub fn calculate_down_payment(params: &DownPaymentParams) -> Result<DownPaymentResponses> {
    params.validate()?;

    let mut responses = Vec::new();

    for m in 1..=params.installments {
        let installment_amount = params.requested_amount / m as f64;
        if installment_amount < params.min_installment_amount {
            debug!(m, installment_amount, "down-payment candidate dropped: below min_installment_amount");
            continue;
        }

        let due_dates: Vec<_> = (1..=m)
            .map(|k| Calendar::add_months(params.first_payment_date, k - 1))
            .collect();

        // The down payment fully amortizes to `installment_amount * m ==
        // requested_amount`, so the residual owed on the purchase price is
        // constant across candidates; only the due-date sequencing (and
        // therefore the nested plan's first payment date) varies with m.
        let residual_principal = params.plan.requested_amount - params.requested_amount;
        let nested_first_payment_date = Calendar::add_months(params.first_payment_date, m);

        let mut nested_params = params.plan.clone();
        nested_params.requested_amount = residual_principal;
        nested_params.first_payment_date = nested_first_payment_date;

        let plans = calculate_plan(&nested_params)?;

        responses.push(DownPaymentResponse {
            installments: m,
            installment_amount,
            due_dates,
            plans,
        });
    }

    Ok(DownPaymentResponses::new(responses))
}
