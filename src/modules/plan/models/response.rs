use serde::{Deserialize, Serialize};

use super::schedule::InstallmentRow;

/// The last installment's row for one candidate N, plus the reconciled
/// summary figures the reference test suite pins values against (spec §3:
/// "the installment row for the LAST installment of the chosen N").
pub type PlanResponse = InstallmentRow;

/// The N = 1..`installments` grid of surviving plans, in ascending N order
/// (spec §4.6).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanResponses {
    pub responses: Vec<PlanResponse>,
}

impl PlanResponses {
    pub fn new(responses: Vec<PlanResponse>) -> Self {
        Self { responses }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The response for installment count N, if it survived the min/max
    /// filters.
    pub fn for_count(&self, n: u32) -> Option<&PlanResponse> {
        self.responses.iter().find(|r| r.installment == n)
    }
}
