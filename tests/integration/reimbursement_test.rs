use chrono::NaiveDate;
use parcelamento_engine::{calculate_reimbursement, Invoice, InvoiceStatus, ReimbursementParams};

fn bmp_reimbursement() -> ReimbursementParams {
    ReimbursementParams {
        invoices: vec![
            Invoice {
                id: 1,
                due_at: NaiveDate::from_ymd_opt(2024, 9, 19).unwrap(),
                original_amount: 1569.3233494592498,
                main_iof_tac: 1448.8733387743182,
                status: InvoiceStatus::Paid,
            },
            Invoice {
                id: 2,
                due_at: NaiveDate::from_ymd_opt(2024, 10, 19).unwrap(),
                original_amount: 1569.3233494592498,
                main_iof_tac: 1506.6833849914135,
                status: InvoiceStatus::Readjusted,
            },
        ],
        base_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
        mdr: 90.0,
        invoice_cost: 2.0,
        interest_rate: 0.039900000000000005,
        fee: 0.3,
        max_reimbursement_payment_days: 7,
        max_repurchase_payment_days: 3,
    }
}

/// Spec §8 scenario 6 — BMP Reimbursement.
#[test]
fn bmp_reimbursement_reproduces_reference_values() {
    let result = calculate_reimbursement(&bmp_reimbursement()).unwrap();

    assert!((result.interest_rate_daily - 0.001305).abs() < 1e-9);

    assert_eq!(result.invoices[0].days_difference, -49);
    assert_eq!(result.invoices[0].present_value_repurchase, 0.0);

    assert_eq!(result.invoices[1].days_difference, -19);
    assert!((result.invoices[1].present_value_repurchase - 1608.6951333084446).abs() < 1e-6);

    assert!((result.total_present_value_repurchase - 1608.6951333084446).abs() < 1e-6);
    assert!((result.subsidy_for_cancellation - 62.99999999999999).abs() < 1e-6);
    assert!((result.customer_charge_back_amount - 1448.87).abs() < 1e-9);
    assert!((result.reimbursement_value - 1547.6951333084446).abs() < 1e-6);
    assert_eq!(
        result.reimbursement_invoice_due_date,
        NaiveDate::from_ymd_opt(2024, 11, 11).unwrap()
    );
}

#[test]
fn an_all_open_invoice_set_has_no_chargeback_but_keeps_the_mdr_subsidy() {
    // `subsidy_for_cancellation` is `mdr * (1 - fee)` (spec §4.8, §9 open
    // question) — a function of the request-level MDR/fee, not of which
    // invoices happen to be paid, so it survives even when nothing is PAID.
    let mut params = bmp_reimbursement();
    for invoice in &mut params.invoices {
        invoice.status = InvoiceStatus::Open;
    }
    let result = calculate_reimbursement(&params).unwrap();
    assert!((result.subsidy_for_cancellation - params.mdr * (1.0 - params.fee)).abs() < 1e-9);
    assert_eq!(result.customer_charge_back_amount, 0.0);
    assert!(
        (result.reimbursement_value
            - (result.total_present_value_repurchase - result.subsidy_for_cancellation))
            .abs()
            < 1e-9
    );
}
