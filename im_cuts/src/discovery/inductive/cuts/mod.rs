//! Cuts of the Inductive Miner
//!
//! A cut partitions the activities of the current (sub-)process into groups.
//! If a cut holds, the process tree node of the cut's operator is created and discovery
//! continues recursively on the projections of the input data onto each group.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::data_structure::IMDataStructure;

/// Concurrency (parallel) cut
pub mod concurrency;
/// Disjoint groups of activities
pub mod group_membership;

/// A group of activities
pub type ActivityGroup = BTreeSet<String>;

///
/// Operator of the process tree node introduced by a cut
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    /// Sequence operator
    Sequence,
    /// Exclusive choice operator
    ExclusiveChoice,
    /// Concurrency operator
    Concurrency,
    /// Loop operator
    Loop,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
/// Parameters for cut detection
pub struct CutParameters {
    /// Use minimum self-distance witnesses (only for log inputs) to prevent splitting activities
    /// that interleave in a loop-like fashion
    pub use_msd_witnesses: bool,
}

impl Default for CutParameters {
    fn default() -> Self {
        Self {
            use_msd_witnesses: true,
        }
    }
}

impl CutParameters {
    /// Serialize cut parameters to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
    /// Deserialize cut parameters from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

///
/// A cut of the Inductive Miner
///
pub trait Cut {
    /// Operator of the process tree node created for this cut
    fn operator() -> OperatorType;

    /// Find the groups of this cut, if the cut applies to the given data
    fn holds(data: &IMDataStructure, parameters: &CutParameters) -> Option<Vec<ActivityGroup>>;

    /// Project the data onto each of the groups (in the same order)
    fn project(
        data: &IMDataStructure,
        groups: &[ActivityGroup],
        parameters: &CutParameters,
    ) -> Vec<IMDataStructure>;

    /// Check if the cut holds and, if so, return the operator together with the projected data
    fn apply(
        data: &IMDataStructure,
        parameters: &CutParameters,
    ) -> Option<(OperatorType, Vec<IMDataStructure>)> {
        let groups = Self::holds(data, parameters)?;
        Some((Self::operator(), Self::project(data, &groups, parameters)))
    }
}
