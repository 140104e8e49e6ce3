//! Cross-flow effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Capacity ratio substituted when `Cr = 0`, keeping `1/Cr` finite.
///
/// This approximates the `Cr -> 0` limit rather than using its closed form, so
/// a condensing stream in cross-flow gives a value very close to, but not
/// exactly, `1 - exp(-NTU)`.
pub const MIN_CAPACITY_RATIO: f64 = 1e-9;

/// Cross-flow heat exchanger arrangement with both streams unmixed.
///
/// Each plate channel keeps its stream confined, so neither stream mixes
/// across the flow width.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlow;

impl EffectivenessRelation for CrossFlow {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            let cr = if cr == 0. { MIN_CAPACITY_RATIO } else { cr };
            1. - ((ntu.powf(0.22) / cr) * ((-cr * ntu.powf(0.78)).exp() - 1.)).exp()
        })
    }
}
