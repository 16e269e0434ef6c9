use parcelamento_engine::modules::plan::services::rate_solver::{annualize, solve_rate, CashFlow};

#[test]
fn single_installment_recovers_exact_monthly_rate() {
    let flows = vec![CashFlow {
        amount: 206.0,
        days: 30,
    }];
    let r = solve_rate(&flows, 200.0, 0.01).unwrap();
    assert!((r - 0.03).abs() < 1e-7, "got {r}");
}

#[test]
fn annuity_of_twenty_four_installments_converges() {
    let flows: Vec<CashFlow> = (1..=24)
        .map(|k| CashFlow {
            amount: 100.0,
            days: 30 * k,
        })
        .collect();
    let target: f64 = flows
        .iter()
        .map(|f| f.amount * 1.015_f64.powf(-(f.days as f64) / 30.0))
        .sum();
    let r = solve_rate(&flows, target, 0.02).unwrap();
    assert!((r - 0.015).abs() < 1e-7, "got {r}");
}

#[test]
fn annualize_of_zero_monthly_rate_is_zero() {
    assert!((annualize(0.0)).abs() < 1e-12);
}

#[test]
fn negative_target_still_converges_within_bracket() {
    // A target above the sum of undiscounted flows forces a negative rate.
    let flows = vec![CashFlow {
        amount: 100.0,
        days: 30,
    }];
    let r = solve_rate(&flows, 105.0, 0.0).unwrap();
    assert!(r < 0.0 && r > -0.9999, "got {r}");
}
