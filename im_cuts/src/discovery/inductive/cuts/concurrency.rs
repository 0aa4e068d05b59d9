use std::collections::HashSet;

use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    dfg::DirectlyFollowsGraph,
    discovery::inductive::data_structure::{IMDataStructure, InductiveDFG},
    event_log::{msd::MinimumSelfDistanceWitnesses, variant_log::VariantLog},
};

use super::{
    group_membership::{GroupMembership, UnionFindGroups},
    ActivityGroup, Cut, CutParameters, OperatorType,
};

///
/// Concurrency cut of the Inductive Miner
///
/// Partitions the activities into groups that are pairwise connected in both directions in the
/// directly-follows graph, such that every group contains at least one start and one end activity.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrencyCut;

/// Returns `true` if `b` witnesses the minimum self-distance of `a`
fn is_witness(msdw: &MinimumSelfDistanceWitnesses, a: &str, b: &str) -> bool {
    msdw.get(a).is_some_and(|witnesses| witnesses.contains(b))
}

impl ConcurrencyCut {
    ///
    /// Find the concurrency groups of a directly-follows graph
    ///
    /// Two activities end up in the same group if they are not connected in both directions,
    /// or if (given `msdw`) one witnesses the minimum self-distance of the other.
    /// Groups without a start or without an end activity are then merged into their neighbor
    /// (in order of ascending group size).
    ///
    /// Returns `None` if fewer than two groups remain.
    ///
    pub fn holds_with_witnesses(
        dfg: &DirectlyFollowsGraph,
        msdw: Option<&MinimumSelfDistanceWitnesses>,
    ) -> Option<Vec<ActivityGroup>> {
        let alphabet: Vec<&str> = dfg.vertices().into_iter().collect();
        if alphabet.is_empty() {
            tracing::debug!("Concurrency cut: empty alphabet");
            return None;
        }
        let edges: HashSet<(&str, &str)> = dfg
            .directly_follows_relations
            .keys()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();

        let mut membership = UnionFindGroups::new(alphabet.len());
        for ((i, a), (j, b)) in alphabet
            .iter()
            .enumerate()
            .cartesian_product(alphabet.iter().enumerate())
        {
            if !edges.contains(&(*a, *b)) || !edges.contains(&(*b, *a)) {
                membership.merge(i, j);
            } else if let Some(msdw) = msdw {
                if is_witness(msdw, a, b) || is_witness(msdw, b, a) {
                    tracing::trace!(a, b, "Concurrency cut: merging msd witnesses");
                    membership.merge(i, j);
                }
            }
        }

        let mut groups: Vec<ActivityGroup> = membership
            .groups()
            .into_iter()
            .map(|group| group.into_iter().map(|i| alphabet[i].to_string()).collect())
            .collect();
        groups.sort_by_key(|g| g.len());

        let has_start_and_end = |g: &ActivityGroup| {
            g.iter().any(|a| dfg.is_start_activity(a)) && g.iter().any(|a| dfg.is_end_activity(a))
        };
        let mut i = 0;
        while i < groups.len() && groups.len() > 1 {
            if has_start_and_end(&groups[i]) {
                i += 1;
                continue;
            }
            let group = groups.remove(i);
            tracing::trace!(?group, "Concurrency cut: group lacks start or end activity");
            let neighbor = i.saturating_sub(1);
            groups[neighbor].extend(group);
        }

        if groups.len() > 1 {
            tracing::debug!(?groups, "Concurrency cut found");
            Some(groups)
        } else {
            tracing::debug!("Concurrency cut does not hold");
            None
        }
    }

    ///
    /// Project a compressed log onto each group
    ///
    /// Every variant is filtered to the activities of the group (keeping their order, possibly
    /// resulting in the empty variant). Counts of variants that collapse onto the same filtered
    /// variant are summed up.
    ///
    pub fn project_log(log: &VariantLog, groups: &[ActivityGroup]) -> Vec<VariantLog> {
        groups
            .par_iter()
            .map(|group| {
                let mut sub_log = VariantLog::new();
                for (variant, count) in log.variant_names() {
                    let filtered: Vec<&str> = variant
                        .into_iter()
                        .filter(|act| group.contains(*act))
                        .collect();
                    sub_log.add_variant(&filtered, count);
                }
                sub_log
            })
            .collect()
    }

    ///
    /// Project a directly-follows graph onto each group
    ///
    /// Keeps the activity frequencies, start activities, end activities and directly-follows
    /// relations inside the group (with unchanged frequencies). Relations leaving or entering the
    /// group are dropped.
    /// All resulting graphs are marked as not skippable.
    ///
    pub fn project_dfg(dfg: &DirectlyFollowsGraph, groups: &[ActivityGroup]) -> Vec<InductiveDFG> {
        groups
            .iter()
            .map(|group| {
                let mut sub_dfg = DirectlyFollowsGraph::new();
                for (act, freq) in &dfg.activities {
                    if group.contains(act) {
                        sub_dfg.add_activity(act.clone(), *freq);
                    }
                }
                for (act, freq) in &dfg.start_activities {
                    if group.contains(act) {
                        sub_dfg.add_start_activity(act.clone(), *freq);
                    }
                }
                for (act, freq) in &dfg.end_activities {
                    if group.contains(act) {
                        sub_dfg.add_end_activity(act.clone(), *freq);
                    }
                }
                for ((a, b), freq) in &dfg.directly_follows_relations {
                    if group.contains(a) && group.contains(b) {
                        sub_dfg.add_df_relation(a.clone(), b.clone(), *freq);
                    }
                }
                InductiveDFG {
                    dfg: sub_dfg,
                    skip: false,
                }
            })
            .collect()
    }
}

impl Cut for ConcurrencyCut {
    fn operator() -> OperatorType {
        OperatorType::Concurrency
    }

    fn holds(data: &IMDataStructure, parameters: &CutParameters) -> Option<Vec<ActivityGroup>> {
        let dfg = data.dfg();
        let msdw = if parameters.use_msd_witnesses {
            data.msd_witnesses()
        } else {
            None
        };
        Self::holds_with_witnesses(&dfg, msdw.as_ref())
    }

    fn project(
        data: &IMDataStructure,
        groups: &[ActivityGroup],
        _parameters: &CutParameters,
    ) -> Vec<IMDataStructure> {
        match data {
            IMDataStructure::Log(log) => Self::project_log(log, groups)
                .into_iter()
                .map(IMDataStructure::Log)
                .collect(),
            IMDataStructure::Dfg(idfg) => Self::project_dfg(&idfg.dfg, groups)
                .into_iter()
                .map(IMDataStructure::Dfg)
                .collect(),
        }
    }
}
