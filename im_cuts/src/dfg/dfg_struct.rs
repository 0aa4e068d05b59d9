use crate::event_log::variant_log::VariantLog;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::{BTreeSet, HashMap};

/// Activity in a directly-follows graph.
type Activity = String;

/// A directly-follows graph of [`Activity`]s.
/// Graph containing a set of activities, a set of directly-follows relations, a set of start
/// activities, and a set of end activities.
/// Activities, directly-follows relations as well as start and end activities are annotated
/// with their frequency.
///
/// Missing fields are treated as empty when deserializing.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectlyFollowsGraph {
    /// Activities
    #[serde(default)]
    pub activities: HashMap<Activity, u64>,
    /// Directly-follows relations
    #[serde_as(as = "Vec<(_, _)>")]
    #[serde(default)]
    pub directly_follows_relations: HashMap<(Activity, Activity), u64>,
    /// Start activities
    #[serde(default)]
    pub start_activities: HashMap<Activity, u64>,
    /// End activities
    #[serde(default)]
    pub end_activities: HashMap<Activity, u64>,
}

impl DirectlyFollowsGraph {
    /// Create new [`DirectlyFollowsGraph`] with no activities and directly-follows relations.
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
            directly_follows_relations: HashMap::new(),
            start_activities: HashMap::new(),
            end_activities: HashMap::new(),
        }
    }

    /// Construct a [`DirectlyFollowsGraph`] from a compressed [`VariantLog`]
    ///
    /// Every variant contributes its count to the frequencies of its activities, of its first and
    /// last activity (as start/end activity) and of all consecutive activity pairs.
    pub fn create_from_variant_log(log: &VariantLog) -> Self {
        log.variants
            .par_iter()
            .fold(Self::new, |mut dfg, (variant, count)| {
                let mut last_act: Option<&str> = None;
                for name in log.names_of(variant) {
                    dfg.add_activity(name.to_string(), *count);
                    match last_act {
                        Some(prev) => {
                            dfg.add_df_relation(prev.to_string(), name.to_string(), *count)
                        }
                        None => dfg.add_start_activity(name.to_string(), *count),
                    }
                    last_act = Some(name);
                }
                if let Some(last) = last_act {
                    dfg.add_end_activity(last.to_string(), *count);
                }
                dfg
            })
            .reduce(Self::new, |mut d1, d2| {
                d1.merge(d2);
                d1
            })
    }

    /// Add all frequencies of `other` to this graph
    fn merge(&mut self, other: Self) {
        for (act, freq) in other.activities {
            self.add_activity(act, freq);
        }
        for ((from, to), freq) in other.directly_follows_relations {
            self.add_df_relation(from, to, freq);
        }
        for (act, freq) in other.start_activities {
            self.add_start_activity(act, freq);
        }
        for (act, freq) in other.end_activities {
            self.add_end_activity(act, freq);
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// All vertices of the graph
    ///
    /// Includes every activity mentioned as activity, start activity, end activity or as endpoint
    /// of a directly-follows relation (sorted).
    pub fn vertices(&self) -> BTreeSet<&str> {
        self.activities
            .keys()
            .chain(self.start_activities.keys())
            .chain(self.end_activities.keys())
            .map(String::as_str)
            .chain(
                self.directly_follows_relations
                    .keys()
                    .flat_map(|(a, b)| [a.as_str(), b.as_str()]),
            )
            .collect()
    }

    /// Add an activity with a frequency.
    ///
    /// If the activity already exists, the frequency count is added to the existing activity.
    pub fn add_activity(&mut self, activity: Activity, frequency: u64) {
        *self.activities.entry(activity).or_default() += frequency;
    }

    /// Adds an activity to the start activities with the given frequency.
    pub fn add_start_activity(&mut self, activity: Activity, frequency: u64) {
        *self.start_activities.entry(activity).or_default() += frequency;
    }

    /// Adds an activity to the end activities with the given frequency.
    pub fn add_end_activity(&mut self, activity: Activity, frequency: u64) {
        *self.end_activities.entry(activity).or_default() += frequency;
    }

    /// Checks if an activity is a start activity in the directly-follows graph.
    pub fn is_start_activity<S: AsRef<str>>(&self, activity: S) -> bool {
        self.start_activities.contains_key(activity.as_ref())
    }

    /// Checks if an activity is an end activity in the directly-follows graph.
    pub fn is_end_activity<S: AsRef<str>>(&self, activity: S) -> bool {
        self.end_activities.contains_key(activity.as_ref())
    }

    /// Add a directly-follows relation with a frequency.
    ///
    /// If the directly-follows relation already exists, the frequency count is added to the
    /// existing directly-follows relation.
    pub fn add_df_relation(&mut self, from: Activity, to: Activity, frequency: u64) {
        *self
            .directly_follows_relations
            .entry((from, to))
            .or_default() += frequency;
    }

    /// Checks if a directly-follows relation is contained in the directly-follows graph.
    pub fn contains_df_relation<S: AsRef<str>>(&self, (a, b): (S, S)) -> bool {
        self.df_frequency(a, b).is_some()
    }

    /// Frequency of the directly-follows relation `a -> b` (if present)
    pub fn df_frequency<S: AsRef<str>>(&self, a: S, b: S) -> Option<u64> {
        self.directly_follows_relations
            .get(&(a.as_ref().to_string(), b.as_ref().to_string()))
            .copied()
    }
}
