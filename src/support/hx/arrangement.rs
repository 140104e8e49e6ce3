//! Flow arrangements supported by the plate exchanger.
//!
//! A plate exchanger routes its two streams through alternating channels,
//! either in opposite directions ([`CounterFlow`]) or at right angles
//! ([`CrossFlow`]). [`FlowArrangement`] selects between them at runtime and
//! parses the `"counter-flow"` / `"cross-flow"` names used in saved inputs.

mod counter_flow;
mod cross_flow;

use std::{fmt, str::FromStr};

use thiserror::Error;

pub use counter_flow::CounterFlow;
pub use cross_flow::{CrossFlow, MIN_CAPACITY_RATIO};

use super::{CapacityRatio, Effectiveness, EffectivenessRelation, Ntu};

/// Runtime selection of a supported flow arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowArrangement {
    CounterFlow,
    #[default]
    CrossFlow,
}

/// An error returned when a flow arrangement name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown flow configuration {0:?}, expected \"counter-flow\" or \"cross-flow\"")]
    UnknownFlowConfiguration(String),
}

impl FlowArrangement {
    /// The name used to identify this arrangement in text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CounterFlow => "counter-flow",
            Self::CrossFlow => "cross-flow",
        }
    }
}

impl fmt::Display for FlowArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlowArrangement {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counter-flow" => Ok(Self::CounterFlow),
            "cross-flow" => Ok(Self::CrossFlow),
            other => Err(ConfigurationError::UnknownFlowConfiguration(other.to_owned())),
        }
    }
}

impl EffectivenessRelation for FlowArrangement {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        match self {
            Self::CounterFlow => CounterFlow.effectiveness(ntu, capacity_ratio),
            Self::CrossFlow => CrossFlow.effectiveness(ntu, capacity_ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn parses_known_names() {
        assert_eq!("counter-flow".parse::<FlowArrangement>(), Ok(FlowArrangement::CounterFlow));
        assert_eq!("cross-flow".parse::<FlowArrangement>(), Ok(FlowArrangement::CrossFlow));
        assert_eq!(FlowArrangement::CrossFlow.to_string(), "cross-flow");
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["parallel-flow", "Counter-Flow", "counterflow", ""] {
            assert_eq!(
                name.parse::<FlowArrangement>(),
                Err(ConfigurationError::UnknownFlowConfiguration(name.to_owned()))
            );
        }
    }

    #[test]
    fn dispatches_to_arrangement() -> ConstraintResult<()> {
        let ntu = Ntu::new(2.)?;
        let cr = CapacityRatio::new(0.5)?;

        assert_eq!(
            FlowArrangement::CounterFlow.effectiveness(ntu, cr),
            CounterFlow.effectiveness(ntu, cr)
        );
        assert_eq!(
            FlowArrangement::CrossFlow.effectiveness(ntu, cr),
            CrossFlow.effectiveness(ntu, cr)
        );
        Ok(())
    }
}
