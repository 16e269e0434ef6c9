pub mod calendar;
pub mod down_payment;
pub mod plan;
pub mod reimbursement;
