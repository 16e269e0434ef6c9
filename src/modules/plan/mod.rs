//! The installment-plan engine (spec §2–§4): calendar → schedule builder →
//! IOF model → plan solver → rate solver → plan assembler.

pub mod models;
pub mod services;

pub use models::{InstallmentRow, PlanParams, PlanResponse, PlanResponses};
pub use services::calculate_plan;
