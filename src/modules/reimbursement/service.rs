//! Reimbursement / repurchase valuation mode (spec §4.8).

use chrono::Duration;

use crate::core::Result;
use crate::modules::calendar::Calendar;

use super::models::{
    Invoice, InvoiceRepurchase, InvoiceStatus, ReimbursementParams, ReimbursementResponse,
};

/// Rounds half away from zero to `decimals` places. `f64::round` is already
/// half-away-from-zero for non-negative inputs, which is all this mode sees.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn calculate_reimbursement(params: &ReimbursementParams) -> Result<ReimbursementResponse> {
    params.validate()?;

    let interest_rate_daily = round_to((1.0 + params.interest_rate).powf(1.0 / 30.0) - 1.0, 6);
    let repurchase_date = params.base_date + Duration::days(params.max_repurchase_payment_days);

    let mut invoices = Vec::with_capacity(params.invoices.len());
    let mut total_present_value_repurchase = 0.0;
    let mut customer_charge_back_raw = 0.0;
    let mut paid_count: u64 = 0;

    for invoice in &params.invoices {
        let days_difference = Calendar::business_days_between(repurchase_date, invoice.due_at);
        let present_value_repurchase = present_value_repurchase(invoice, interest_rate_daily, days_difference);

        total_present_value_repurchase += present_value_repurchase;

        if invoice.status == InvoiceStatus::Paid {
            customer_charge_back_raw += invoice.main_iof_tac;
            paid_count += 1;
        }

        invoices.push(InvoiceRepurchase {
            id: invoice.id,
            days_difference,
            present_value_repurchase,
        });
    }

    let customer_charge_back_amount = round_to(customer_charge_back_raw, 2);

    // The cancellation subsidy is the portion of the (absolute) MDR the
    // acquirer forgoes net of its own fee share — it scales with `mdr` and
    // `fee` alone, not with which invoices are paid (see the reimbursement
    // grounding note in DESIGN.md).
    let subsidy_for_cancellation = params.mdr * (1.0 - params.fee);

    let reimbursement_value = total_present_value_repurchase - subsidy_for_cancellation
        + params.invoice_cost * paid_count as f64;

    let reimbursement_invoice_due_date =
        params.base_date + Duration::days(params.max_reimbursement_payment_days);

    Ok(ReimbursementResponse {
        interest_rate_daily,
        invoices,
        total_present_value_repurchase,
        subsidy_for_cancellation,
        customer_charge_back_amount,
        reimbursement_value,
        reimbursement_invoice_due_date,
    })
}

fn present_value_repurchase(invoice: &Invoice, interest_rate_daily: f64, days_difference: i64) -> f64 {
    if invoice.status == InvoiceStatus::Paid {
        return 0.0;
    }
    // `days_difference` is already signed (negative when the due date
    // precedes the repurchase date, spec §4.8); the present-value exponent
    // uses it as-is rather than re-negating, since overdue invoices accrue
    // toward the repurchase date rather than discount away from it.
    invoice.original_amount / (1.0 + interest_rate_daily).powf(days_difference as f64)
}
