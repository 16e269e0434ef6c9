//! IOF (Imposto sobre Operações Financeiras) tax model (spec §4.3).
//!
//! The regulatory daily accrual caps at 365 days; days beyond a year stop
//! accruing the daily component but the upfront `iof_overall` still applies
//! once per period.
//!
//! `iof_percentage` arrives in two conventions depending on the origin
//! system (spec §3): QiTech passes an already-daily fraction (~0.000082),
//! BMP passes a per-year-like fraction (~0.03). There is no mode flag
//! (spec §9) — both are folded to a daily rate the same way, by dividing
//! by the 365-day cap that bounds the accrual itself. For QiTech's
//! already-tiny input this yields a correspondingly tiny daily rate; that
//! is a property of the upstream convention, not a special case here.
const IOF_ACCRUAL_CAP_DAYS: i64 = 365;

/// Per-period IOF rate factor: `min(accumulated_days, 365) * (iof_percentage
/// / 365) + iof_overall`. Multiplying this by a period's principal share
/// gives that period's IOF contribution.
pub fn period_iof_factor(accumulated_days: i64, iof_percentage: f64, iof_overall: f64) -> f64 {
    let capped_days = accumulated_days.min(IOF_ACCRUAL_CAP_DAYS) as f64;
    let daily_rate = iof_percentage / IOF_ACCRUAL_CAP_DAYS as f64;
    capped_days * daily_rate + iof_overall
}
