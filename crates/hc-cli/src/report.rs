//! JSON report printed by `hc-interpret`.

use serde::Serialize;

use hc_context::DispatchResult;
use hc_protocol::{ControlPlan, ProcessedContext};

/// Interpretation plus the planning outcome. Exactly one of `plan` and
/// `plan_error` is non-null.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub context: ProcessedContext,
    pub plan: Option<ControlPlan>,
    pub plan_error: Option<String>,
}

impl Report {
    pub fn new(context: ProcessedContext, plan: DispatchResult<ControlPlan>) -> Self {
        let (plan, plan_error) = match plan {
            Ok(plan) => (Some(plan), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            context,
            plan,
            plan_error,
        }
    }
}
