use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    dfg::DirectlyFollowsGraph,
    event_log::{
        msd::{msd_witnesses, MinimumSelfDistanceWitnesses},
        variant_log::VariantLog,
    },
};

///
/// Directly-follows graph as handled during inductive discovery
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InductiveDFG {
    /// The directly-follows graph
    pub dfg: DirectlyFollowsGraph,
    /// Whether the behavior of this graph may be skipped entirely
    pub skip: bool,
}

impl InductiveDFG {
    /// Wrap a [`DirectlyFollowsGraph`] (not skippable)
    pub fn new(dfg: DirectlyFollowsGraph) -> Self {
        Self { dfg, skip: false }
    }
}

///
/// Input of a cut during inductive discovery
///
/// Either a compressed event log (when the event data is still available) or only a
/// directly-follows graph.
///
#[derive(Debug, Clone)]
pub enum IMDataStructure {
    /// Compressed event log
    Log(VariantLog),
    /// Directly-follows graph
    Dfg(InductiveDFG),
}

impl IMDataStructure {
    ///
    /// Directly-follows graph of the data
    ///
    /// Derived from the variants for [`IMDataStructure::Log`].
    ///
    pub fn dfg(&self) -> Cow<'_, DirectlyFollowsGraph> {
        match self {
            IMDataStructure::Log(log) => {
                Cow::Owned(DirectlyFollowsGraph::create_from_variant_log(log))
            }
            IMDataStructure::Dfg(idfg) => Cow::Borrowed(&idfg.dfg),
        }
    }

    /// Minimum self-distance witnesses (only available for [`IMDataStructure::Log`])
    pub fn msd_witnesses(&self) -> Option<MinimumSelfDistanceWitnesses> {
        match self {
            IMDataStructure::Log(log) => Some(msd_witnesses(log)),
            IMDataStructure::Dfg(_) => None,
        }
    }
}

impl From<VariantLog> for IMDataStructure {
    fn from(log: VariantLog) -> Self {
        IMDataStructure::Log(log)
    }
}

impl From<DirectlyFollowsGraph> for IMDataStructure {
    fn from(dfg: DirectlyFollowsGraph) -> Self {
        IMDataStructure::Dfg(InductiveDFG::new(dfg))
    }
}

impl From<InductiveDFG> for IMDataStructure {
    fn from(idfg: InductiveDFG) -> Self {
        IMDataStructure::Dfg(idfg)
    }
}
