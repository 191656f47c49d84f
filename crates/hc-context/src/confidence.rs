//! Overall confidence for one interpretation.

use hc_protocol::{DeviceMatch, Intent, Parameters};

pub const INTENT_WEIGHT: f64 = 0.3;
/// Cap on the contribution of the top device match.
pub const MATCH_CAP: f64 = 0.5;
pub const PARAMETER_WEIGHT: f64 = 0.2;

/// Combine intent, best device match and parameter signals into [0, 1].
///
/// `matches` must already be ranked; only the first entry counts.
pub fn aggregate(intent: Intent, matches: &[DeviceMatch], params: &Parameters) -> f64 {
    let mut confidence = 0.0;

    if intent.is_known() {
        confidence += INTENT_WEIGHT;
    }
    if let Some(top) = matches.first() {
        confidence += top.confidence.min(MATCH_CAP);
    }
    if !params.is_empty() {
        confidence += PARAMETER_WEIGHT;
    }

    confidence.clamp(0.0, 1.0)
}
