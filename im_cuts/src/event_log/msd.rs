//! Minimum self-distance of activities in a [`VariantLog`]
//!
//! The minimum self-distance of an activity `a` is the smallest number of events observed
//! strictly between two consecutive occurrences of `a` in any variant.
//! The activities occurring in such a minimal gap are the _witnesses_ of the minimum
//! self-distance of `a`.
use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use super::variant_log::VariantLog;

/// For every activity, the set of activities witnessing its minimum self-distance
pub type MinimumSelfDistanceWitnesses = HashMap<String, HashSet<String>>;

/// Positions of each activity (index) in a variant
fn positions_per_activity(variant: &[usize]) -> HashMap<usize, Vec<usize>> {
    let mut positions: HashMap<usize, Vec<usize>> = HashMap::new();
    for (pos, act) in variant.iter().enumerate() {
        positions.entry(*act).or_default().push(pos);
    }
    positions
}

///
/// Compute the minimum self-distance of all activities occurring at least twice in some variant
///
/// Activities that never repeat within a variant have no entry.
///
pub fn minimum_self_distances(log: &VariantLog) -> HashMap<String, usize> {
    let mut msd: HashMap<usize, usize> = HashMap::new();
    for variant in log.variants.keys() {
        for (act, positions) in positions_per_activity(variant) {
            for (i, j) in positions.iter().tuple_windows() {
                let dist = j - i - 1;
                msd.entry(act)
                    .and_modify(|d| *d = (*d).min(dist))
                    .or_insert(dist);
            }
        }
    }
    msd.into_iter()
        .filter_map(|(act, dist)| Some((log.activity(act)?.to_string(), dist)))
        .collect()
}

///
/// Compute the witnesses of the given minimum self-distances
///
/// Only activities with a positive minimum self-distance get an entry: a direct repetition
/// (distance 0) has no activity in between.
///
pub fn minimum_self_distance_witnesses(
    log: &VariantLog,
    msd: &HashMap<String, usize>,
) -> MinimumSelfDistanceWitnesses {
    let mut witnesses: MinimumSelfDistanceWitnesses = msd
        .iter()
        .filter(|(_, dist)| **dist > 0)
        .map(|(act, _)| (act.clone(), HashSet::new()))
        .collect();
    for variant in log.variants.keys() {
        for (act, positions) in positions_per_activity(variant) {
            let Some(name) = log.activity(act) else {
                continue;
            };
            let Some(act_witnesses) = witnesses.get_mut(name) else {
                continue;
            };
            let min_dist = msd[name];
            for (i, j) in positions.iter().tuple_windows() {
                if j - i - 1 == min_dist {
                    act_witnesses.extend(
                        variant[i + 1..*j]
                            .iter()
                            .filter_map(|b| log.activity(*b))
                            .map(String::from),
                    );
                }
            }
        }
    }
    witnesses
}

/// Compute minimum self-distances and their witnesses in one go
pub fn msd_witnesses(log: &VariantLog) -> MinimumSelfDistanceWitnesses {
    minimum_self_distance_witnesses(log, &minimum_self_distances(log))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(acts: &[&str]) -> HashSet<String> {
        acts.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn msd_of_repeating_activities() {
        let log: VariantLog = vec![
            (vec!["a", "b", "c", "a", "d", "a"], 1),
            (vec!["b", "b", "a"], 2),
            (vec!["c", "d", "e", "c"], 1),
        ]
        .into_iter()
        .collect();
        let msd = minimum_self_distances(&log);
        assert_eq!(msd.get("a"), Some(&1));
        assert_eq!(msd.get("b"), Some(&0));
        assert_eq!(msd.get("c"), Some(&2));
        assert_eq!(msd.get("d"), None);
        assert_eq!(msd.get("e"), None);
    }

    #[test]
    fn witnesses_only_at_minimal_distance() {
        let log: VariantLog = vec![
            (vec!["a", "b", "c", "a", "d", "a"], 1),
            (vec!["a", "e", "a"], 1),
            (vec!["b", "b", "a"], 2),
        ]
        .into_iter()
        .collect();
        let witnesses = msd_witnesses(&log);
        assert_eq!(witnesses.get("a"), Some(&set(&["d", "e"])));
        // direct repetition has no witnesses
        assert!(!witnesses.contains_key("b"));
        assert!(!witnesses.contains_key("c"));
    }

    #[test]
    fn mutual_witnesses_of_interleaved_activities() {
        let log: VariantLog = vec![(vec!["a", "b", "a"], 3), (vec!["b", "a", "b"], 2)]
            .into_iter()
            .collect();
        let witnesses = msd_witnesses(&log);
        assert_eq!(witnesses.get("a"), Some(&set(&["b"])));
        assert_eq!(witnesses.get("b"), Some(&set(&["a"])));
    }

    #[test]
    fn no_witnesses_without_repetitions() {
        let log: VariantLog = vec![(vec!["a", "b", "c"], 3), (vec!["b", "a", "c"], 2)]
            .into_iter()
            .collect();
        assert!(minimum_self_distances(&log).is_empty());
        assert!(msd_witnesses(&log).is_empty());
    }

    #[test]
    fn unknown_activity_indices_are_ignored() {
        let log = VariantLog {
            activities: vec!["a".to_string(), "b".to_string()],
            act_to_index: HashMap::from([("a".to_string(), 0), ("b".to_string(), 1)]),
            variants: HashMap::from([(vec![0, 1, 0, 7, 7], 1), (vec![9, 0, 9], 1)]),
        };
        let msd = minimum_self_distances(&log);
        assert_eq!(msd.get("a"), Some(&1));
        assert_eq!(msd.len(), 1);
        assert_eq!(msd_witnesses(&log).get("a"), Some(&set(&["b"])));
    }
}
