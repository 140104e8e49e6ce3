//! Counter-flow effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Counter-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            if cr == 0. {
                1. - (-ntu).exp()
            } else {
                // Balanced streams (Cr = 1) make this 0/0, which the guard maps to 0.
                let decay = (-ntu * (1. - cr)).exp();
                let denominator = 1. - cr * decay;
                if denominator == 0. {
                    0.
                } else {
                    (1. - decay) / denominator
                }
            }
        })
    }
}
