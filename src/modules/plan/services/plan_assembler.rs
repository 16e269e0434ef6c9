//! Plan assembler (spec §4.6) — the N = 1..`installments` grid of
//! installment-count candidates, each independently rebuilt and re-solved.

use tracing::{debug, warn};

use crate::core::{AppError, Result};
use crate::modules::plan::models::{PlanParams, PlanResponses};

use super::plan_solver;
use super::rate_solver::{self, CashFlow};
use super::schedule_builder::build_schedule;

/// Runs the full pipeline (schedule → IOF → plan solver → rate solver) for
/// every candidate N in `[1, params.installments]`, dropping candidates
/// that fail the `min_installment_amount` / `max_total_amount` filters.
///
/// Returns `EmptyGridError` (as `AppError::empty_grid`) if every candidate
/// is filtered out.
pub fn calculate_plan(params: &PlanParams) -> Result<PlanResponses> {
    params.validate()?;

    let mut responses = Vec::new();

    for n in 1..=params.installments {
        let mut rows = build_schedule(params, n);
        plan_solver::solve(&mut rows, params)?;
        solve_rates(&mut rows, params)?;

        let last = rows.last().copied().expect("build_schedule never returns an empty schedule for n >= 1");

        if last.installment_amount < params.min_installment_amount {
            debug!(n, amount = last.installment_amount, "dropped: below min_installment_amount");
            continue;
        }
        if last.total_amount > params.max_total_amount {
            debug!(n, total = last.total_amount, "dropped: above max_total_amount");
            continue;
        }

        responses.push(last);
    }

    if responses.is_empty() {
        warn!(installments = params.installments, "no candidate N survived the min/max filters");
        return Err(AppError::empty_grid(
            "no candidate installment count satisfied min_installment_amount/max_total_amount",
        ));
    }

    Ok(PlanResponses::new(responses))
}

/// Fills the EIR and TEC fields (spec §4.5) across all rows of a fully
/// solved N-row schedule. Every row shares the same whole-plan rate, so
/// this is a broadcast rather than a per-row solve.
fn solve_rates(rows: &mut [crate::modules::plan::models::InstallmentRow], params: &PlanParams) -> Result<()> {
    let flows: Vec<CashFlow> = rows
        .iter()
        .map(|r| CashFlow {
            amount: r.installment_amount,
            days: r.accumulated_days,
        })
        .collect();

    let contract_amount_without_tac = rows
        .last()
        .map(|r| r.contract_amount_without_tac)
        .unwrap_or(0.0);
    let settled_to_merchant = rows.last().map(|r| r.settled_to_merchant).unwrap_or(0.0);

    let eir_monthly = rate_solver::solve_rate(&flows, contract_amount_without_tac, params.interest_rate)?;
    let tec_monthly = rate_solver::solve_rate(&flows, settled_to_merchant, params.interest_rate)?;
    let eir_yearly = rate_solver::annualize(eir_monthly);
    let tec_yearly = rate_solver::annualize(tec_monthly);

    for row in rows.iter_mut() {
        row.effective_interest_rate = eir_monthly;
        row.eir_monthly = eir_monthly;
        row.eir_yearly = eir_yearly;
        row.tec_monthly = tec_monthly;
        row.tec_yearly = tec_yearly;
        row.total_effective_cost = tec_monthly;
        row.calculation_basis_for_effective_interest_rate = contract_amount_without_tac;
    }

    Ok(())
}
