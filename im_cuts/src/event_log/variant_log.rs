use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

///
/// Compressed event log: every distinct activity sequence (variant) is stored once together with
/// its number of occurrences
///
/// Activities are interned, i.e., variants are stored as sequences of indices into
/// [`VariantLog::activities`].
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<VariantEntry>", into = "Vec<VariantEntry>")]
pub struct VariantLog {
    /// Activity labels (indexed by activity index)
    pub activities: Vec<String>,
    /// Mapping of activity labels to their index
    pub act_to_index: HashMap<String, usize>,
    /// Variants (as activity indices) and their occurrence count
    pub variants: HashMap<Vec<usize>, u64>,
}

/// Serialized form of a single variant of a [`VariantLog`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Activity labels of the variant
    pub activities: Vec<String>,
    /// Number of occurrences
    pub count: u64,
}

impl VariantLog {
    /// Create a new empty [`VariantLog`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of an activity, adding it to the activity table if it is not yet known
    fn intern<S: AsRef<str>>(&mut self, activity: S) -> usize {
        let activity = activity.as_ref();
        if let Some(index) = self.act_to_index.get(activity) {
            return *index;
        }
        let new_act_index = self.activities.len();
        self.activities.push(activity.to_string());
        self.act_to_index
            .insert(activity.to_string(), new_act_index);
        new_act_index
    }

    /// Add `count` occurrences of a variant
    ///
    /// If the variant is already present, the counts are summed up.
    pub fn add_variant<S: AsRef<str>>(&mut self, variant: &[S], count: u64) {
        let variant: Vec<usize> = variant.iter().map(|act| self.intern(act)).collect();
        *self.variants.entry(variant).or_insert(0) += count;
    }

    /// Number of occurrences of the given variant (0 if it is not part of the log)
    pub fn count_of<S: AsRef<str>>(&self, variant: &[S]) -> u64 {
        let indices: Option<Vec<usize>> = variant
            .iter()
            .map(|act| self.act_to_index.get(act.as_ref()).copied())
            .collect();
        indices
            .and_then(|indices| self.variants.get(&indices).copied())
            .unwrap_or(0)
    }

    /// Label of the activity with the given index (`None` for unknown indices)
    pub fn activity(&self, index: usize) -> Option<&str> {
        self.activities.get(index).map(String::as_str)
    }

    /// Activity labels of a variant given as activity indices
    ///
    /// Indices without an activity label are skipped.
    pub fn names_of(&self, variant: &[usize]) -> Vec<&str> {
        variant
            .iter()
            .filter_map(|act| self.activity(*act))
            .collect()
    }

    /// All variants (as activity labels) together with their count
    pub fn variant_names(&self) -> impl Iterator<Item = (Vec<&str>, u64)> + '_ {
        self.variants
            .iter()
            .map(|(variant, count)| (self.names_of(variant), *count))
    }

    /// Activities occurring in at least one variant (sorted)
    pub fn alphabet(&self) -> BTreeSet<&str> {
        self.variants
            .keys()
            .flatten()
            .filter_map(|act| self.activity(*act))
            .collect()
    }

    /// Total number of traces (i.e., sum of all variant counts)
    pub fn num_traces(&self) -> u64 {
        self.variants.values().sum()
    }

    /// Number of distinct variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the log contains no variants
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<S: AsRef<str>> FromIterator<(Vec<S>, u64)> for VariantLog {
    fn from_iter<T: IntoIterator<Item = (Vec<S>, u64)>>(iter: T) -> Self {
        let mut log = Self::new();
        for (variant, count) in iter {
            log.add_variant(&variant, count);
        }
        log
    }
}

impl From<Vec<VariantEntry>> for VariantLog {
    fn from(entries: Vec<VariantEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.activities, entry.count))
            .collect()
    }
}

impl From<VariantLog> for Vec<VariantEntry> {
    fn from(log: VariantLog) -> Self {
        let mut entries: Vec<VariantEntry> = log
            .variant_names()
            .map(|(variant, count)| VariantEntry {
                activities: variant.into_iter().map(String::from).collect(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| a.activities.cmp(&b.activities));
        entries
    }
}
