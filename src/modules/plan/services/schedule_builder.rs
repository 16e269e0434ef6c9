//! Schedule builder (spec §4.2).

use crate::modules::calendar::Calendar;
use crate::modules::plan::models::{InstallmentRow, PlanParams};

/// Builds the base N-row schedule: due dates, disbursement date,
/// accumulated day counts, and the day-index running sum. All monetary
/// fields are left at zero for later stages to fill.
pub fn build_schedule(params: &PlanParams, count: u32) -> Vec<InstallmentRow> {
    let disbursement_date = params.disbursement_date();
    let mut rows = Vec::with_capacity(count as usize);
    let mut running_days_index = 0.0;

    for k in 1..=count {
        let due_date = Calendar::add_months(params.first_payment_date, k - 1);
        let accumulated_days = Calendar::business_days_between(disbursement_date, due_date);
        let days_index = (1.0 + params.interest_rate).powf(-(accumulated_days as f64) / 30.0);
        running_days_index += days_index;

        rows.push(InstallmentRow::new_base(
            k,
            due_date,
            disbursement_date,
            accumulated_days,
            days_index,
            running_days_index,
        ));
    }

    rows
}
