//! Fixed-effects membership counts.

use serde::{Deserialize, Serialize};

use crate::model::{EffectKind, PanelResult};

/// Count of distinct levels for one absorbed effect dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectCount {
    /// The effect dimension
    pub kind: EffectKind,
    /// Number of distinct levels, cast from the engine's float
    pub count: u64,
}

/// Extract the fixed-effects count table of a panel result.
///
/// Only effect kinds the fitted model actually absorbed appear, in
/// Entity-then-Time order; counts are cast to integers.
pub fn extract_fixed_effects(panel: &PanelResult) -> Vec<EffectCount> {
    [
        (EffectKind::Entity, panel.entity_count),
        (EffectKind::Time, panel.time_count),
    ]
    .into_iter()
    .filter(|(kind, _)| panel.included_effects.contains(kind))
    .map(|(kind, count)| EffectCount {
        kind,
        count: count as u64,
    })
    .collect()
}
