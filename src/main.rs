use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parcelamento_engine::config::Config;
use parcelamento_engine::modules::plan::PlanParams;
use parcelamento_engine::{calculate_plan, AppError};

/// Demo entry point for the installment-plan engine.
///
/// The production CLI dispatcher (length-delimited stdin/stdout binary
/// protocol, mode selection, UniFFI-style SDK bindings) lives outside this
/// crate's scope; this binary exists to exercise the engine end to end and
/// surface its structured logs.
fn main() {
    let config = Config::from_env().expect("failed to load configuration");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("parcelamento_engine={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting parcelamento-engine");

    if let Err(err) = run() {
        tracing::error!(error = %err, "plan calculation failed");
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let params = PlanParams {
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
    };

    let plan = calculate_plan(&params)?;
    let last = plan
        .for_count(params.installments)
        .expect("full N is always present when the grid is non-empty");

    tracing::info!(
        installments = last.installment,
        contract_amount = last.contract_amount,
        installment_amount = last.installment_amount,
        total_iof = last.total_iof,
        eir_monthly = last.eir_monthly,
        tec_monthly = last.tec_monthly,
        "plan computed"
    );

    Ok(())
}
