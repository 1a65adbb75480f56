//! The output of a [`crate::Paver::run`] invocation.

use crate::{graph::TotalWeight, mst::SpanningForest, usage::UsageReport};

/// Spanning forest plus the hub usage computed over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PavingPlan {
    forest: SpanningForest,
    usage: UsageReport,
    hubs: Vec<usize>,
}

impl PavingPlan {
    pub(crate) fn new(forest: SpanningForest, usage: UsageReport, hubs: Vec<usize>) -> Self {
        Self {
            forest,
            usage,
            hubs,
        }
    }

    /// Returns the minimum spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the used flags, aligned with [`SpanningForest::edges`].
    #[must_use]
    #[rustfmt::skip]
    pub fn usage(&self) -> &UsageReport { &self.usage }

    /// Returns the hubs the plan connects.
    #[must_use]
    #[rustfmt::skip]
    pub fn hubs(&self) -> &[usize] { &self.hubs }

    /// Returns the total weight of painted edges.
    #[must_use]
    pub fn painted_weight(&self) -> TotalWeight {
        self.usage.painted_weight()
    }
}
