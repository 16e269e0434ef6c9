pub mod params;
pub mod response;
pub mod schedule;

pub use params::PlanParams;
pub use response::{PlanResponse, PlanResponses};
pub use schedule::InstallmentRow;
