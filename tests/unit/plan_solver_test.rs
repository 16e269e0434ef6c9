use chrono::NaiveDate;
use parcelamento_engine::modules::plan::services::plan_solver::solve;
use parcelamento_engine::modules::plan::services::schedule_builder::build_schedule;
use parcelamento_engine::modules::plan::PlanParams;

fn base_params() -> PlanParams {
    PlanParams {
        requested_amount: 8800.0,
        requested_date: NaiveDate::from_ymd_opt(2022, 3, 18).unwrap(),
        first_payment_date: NaiveDate::from_ymd_opt(2022, 4, 18).unwrap(),
        installments: 24,
        interest_rate: 0.0235,
        mdr: 0.05,
        tac_percentage: 0.0,
        iof_overall: 0.0038,
        iof_percentage: 0.03,
        debit_service_percentage: 0.0,
        min_installment_amount: 100.0,
        max_total_amount: 1_000_000.0,
        disbursement_only_on_business_days: false,
    }
}

#[test]
fn every_row_shares_the_same_whole_plan_fields() {
    let params = base_params();
    let mut rows = build_schedule(&params, 12);
    solve(&mut rows, &params).unwrap();
    let first = rows[0];
    for row in &rows {
        assert_eq!(row.contract_amount, first.contract_amount);
        assert_eq!(row.installment_amount, first.installment_amount);
        assert_eq!(row.total_iof, first.total_iof);
        assert_eq!(row.mdr_amount, first.mdr_amount);
    }
}

#[test]
fn higher_tac_percentage_strictly_increases_contract_amount() {
    let mut low = base_params();
    low.tac_percentage = 0.0;
    let mut high = base_params();
    high.tac_percentage = 0.02;

    let mut low_rows = build_schedule(&low, 12);
    solve(&mut low_rows, &low).unwrap();
    let mut high_rows = build_schedule(&high, 12);
    solve(&mut high_rows, &high).unwrap();

    assert!(high_rows.last().unwrap().contract_amount > low_rows.last().unwrap().contract_amount);
}

#[test]
fn zero_iof_leaves_contract_amount_equal_to_requested_amount() {
    let mut params = base_params();
    params.iof_overall = 0.0;
    params.iof_percentage = 0.0;
    let mut rows = build_schedule(&params, 6);
    solve(&mut rows, &params).unwrap();
    let last = rows.last().unwrap();
    assert!((last.contract_amount - params.requested_amount).abs() < 1e-9);
    assert!(last.total_iof.abs() < 1e-9);
}

#[test]
fn empty_schedule_is_rejected() {
    let params = base_params();
    let mut rows = Vec::new();
    assert!(solve(&mut rows, &params).is_err());
}
