//! Rate solver (spec §4.5) — EIR and TEC via Newton-Raphson with bisection
//! fallback over an IRR-style present-value equation.
//!
//! Grounded on the "Newton-safe" shape used across numerical solver
//! libraries: take the Newton step when it stays inside the maintained
//! bracket and is making adequate progress, otherwise bisect. Spec §9
//! flags this fallback as load-bearing — pure Newton diverges on short
//! plans (N=1, 2) where an overshooting first guess can push `(1 + r)`
//! negative.

use tracing::trace;

use crate::core::{AppError, Result};

const MAX_ITERATIONS: u32 = 100;
const ACCURACY: f64 = 1e-10;
const BRACKET_LO: f64 = -0.9999;
const BRACKET_HI: f64 = 10.0;

/// One cash-flow leg of the present-value equation: `amount` discounted by
/// `days / 30` months at the trial rate.
#[derive(Debug, Clone, Copy)]
pub struct CashFlow {
    pub amount: f64,
    pub days: i64,
}

/// Solves for the monthly rate `r` such that
/// `Σ amount_k * (1 + r)^(-days_k / 30) == target`.
///
/// `initial_guess` seeds Newton's method; the search is bracketed to
/// `[-0.9999, 10.0]` per spec §4.5.
pub fn solve_rate(flows: &[CashFlow], target: f64, initial_guess: f64) -> Result<f64> {
    if flows.is_empty() {
        return Err(AppError::internal("rate solver received no cash flows"));
    }

    let f = |r: f64| present_value(flows, r) - target;
    let df = |r: f64| present_value_derivative(flows, r);

    let mut lo = BRACKET_LO;
    let mut hi = BRACKET_HI;
    let mut r = initial_guess.clamp(lo, hi);

    for iteration in 0..MAX_ITERATIONS {
        let fr = f(r);
        if fr.abs() < ACCURACY {
            trace!(iteration, r, "rate solver converged");
            return Ok(r);
        }

        // Maintain a sign-bracketing invariant so the bisection fallback
        // always has a valid interval to shrink.
        if fr > 0.0 {
            lo = r;
        } else {
            hi = r;
        }

        let dfr = df(r);
        let newton_step = if dfr.abs() > 1e-14 { Some(fr / dfr) } else { None };
        let newton_candidate = newton_step.map(|step| r - step);

        r = match newton_candidate {
            Some(candidate) if candidate > lo && candidate < hi => candidate,
            _ => 0.5 * (lo + hi),
        };

        if !r.is_finite() {
            return Err(AppError::numeric("rate solver produced a non-finite rate"));
        }
    }

    Err(AppError::numeric(format!(
        "rate solver did not converge within {MAX_ITERATIONS} iterations"
    )))
}

fn present_value(flows: &[CashFlow], r: f64) -> f64 {
    let mut total = 0.0;
    for flow in flows {
        total += flow.amount * (1.0 + r).powf(-(flow.days as f64) / 30.0);
    }
    total
}

fn present_value_derivative(flows: &[CashFlow], r: f64) -> f64 {
    let mut total = 0.0;
    for flow in flows {
        let exponent = -(flow.days as f64) / 30.0;
        total += exponent * flow.amount * (1.0 + r).powf(exponent - 1.0);
    }
    total
}

/// `(1 + monthly)^12 - 1`, per spec §4.5's annualization step.
pub fn annualize(monthly: f64) -> f64 {
    (1.0 + monthly).powi(12) - 1.0
}
