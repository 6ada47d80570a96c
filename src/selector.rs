// Frequency balanced random selection.
// Options that have been picked the least are the only candidates, so every option of a table gets
// rolled once before any of them repeats, while the pick among equally due options stays random.
use crate::error::SelectionError;
use rand::Rng; // RNG utilities from the rand crate for picking among the least chosen options.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// A keyed pool of options. Keys identify an option in the ledger, values are what gets returned.
pub type OptionPool<V> = BTreeMap<String, V>;

/// Per option count of how many times it has been selected.
///
/// Serializes as a plain `{ "option_id": count }` object so hosts can persist it as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    counts: BTreeMap<String, u64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // Times the option has been chosen. Options missing from the ledger count as never chosen.
    pub fn count(&self, option_id: &str) -> u64 {
        self.counts.get(option_id).copied().unwrap_or(0)
    }

    pub fn get(&self, option_id: &str) -> Option<u64> {
        self.counts.get(option_id).copied()
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.counts.contains_key(option_id)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }

    // Record one more selection of the option. A count already at u64::MAX stays there.
    fn bump(&mut self, option_id: &str) {
        let count = self.counts.entry(option_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }
}

impl From<BTreeMap<String, u64>> for Ledger {
    fn from(counts: BTreeMap<String, u64>) -> Self {
        Self { counts }
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(id, count)| (id.into(), count)).collect(),
        }
    }
}

/// Result of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a, V> {
    /// An option was picked and its ledger entry incremented.
    Chosen { key: &'a str, payload: &'a V },
    /// Every option has already been chosen at least once and the caller asked to abort.
    Exhausted,
}

impl<'a, V> Selection<'a, V> {
    pub fn payload(&self) -> Option<&'a V> {
        match self {
            Selection::Chosen { payload, .. } => Some(*payload),
            Selection::Exhausted => None,
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        match self {
            Selection::Chosen { key, .. } => Some(*key),
            Selection::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Selection::Exhausted)
    }
}

// Options controlling a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selector {
    pub abort_if_exhausted: bool, // Return Exhausted instead of repeating once every option has had a turn.
    pub strict: bool, // Drop ledger entries for options that are no longer in the pool.
}

impl Default for Selector {
    fn default() -> Self {
        Selector {
            abort_if_exhausted: false,
            strict: true,
        }
    }
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort_if_exhausted(mut self, abort: bool) -> Self {
        self.abort_if_exhausted = abort;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    // Select with the thread local generator.
    pub fn select<'a, V>(
        &self,
        pool: &'a OptionPool<V>,
        ledger: &mut Ledger,
    ) -> Result<Selection<'a, V>, SelectionError> {
        let mut rng = rand::rng();
        self.select_with_rng(pool, ledger, &mut rng)
    }

    /// Reconcile the ledger against the pool, then pick one of the least chosen options.
    ///
    /// With `abort_if_exhausted` set, any positive minimum count is treated as exhaustion,
    /// even when the counts are not all equal (`{a: 1, b: 3}` is exhausted).
    pub fn select_with_rng<'a, V, R: Rng>(
        &self,
        pool: &'a OptionPool<V>,
        ledger: &mut Ledger,
        rng: &mut R,
    ) -> Result<Selection<'a, V>, SelectionError> {
        if pool.is_empty() {
            return Err(SelectionError::InvalidArgument(
                "cannot select from an empty option pool".to_string(),
            ));
        }

        reconcile(pool, ledger, self.strict);

        // How often the least chosen option has been chosen.
        let min_count = pool
            .keys()
            .map(|option_id| ledger.count(option_id))
            .min()
            .unwrap_or(0);

        if self.abort_if_exhausted && min_count > 0 {
            log::debug!("Selection exhausted, every option chosen at least {min_count} times");
            return Ok(Selection::Exhausted);
        }

        let least_chosen: Vec<(&'a String, &'a V)> = pool
            .iter()
            .filter(|(option_id, _)| ledger.count(option_id) == min_count)
            .collect();

        let (key, payload) = least_chosen[rng.random_range(0..least_chosen.len())];
        ledger.bump(key);
        log::debug!(
            "Selected '{key}' out of {} least chosen options (count was {min_count})",
            least_chosen.len()
        );

        Ok(Selection::Chosen {
            key: key.as_str(),
            payload,
        })
    }
}

/// Align the ledger's keys with the pool's keys.
///
/// Every pool key gets an entry (zero when new). With `strict`, entries for keys that are no
/// longer in the pool are removed; otherwise they are left untouched so several pools can share
/// one ledger.
pub fn reconcile<V>(pool: &OptionPool<V>, ledger: &mut Ledger, strict: bool) {
    for option_id in pool.keys() {
        if !ledger.contains(option_id) {
            ledger.counts.insert(option_id.clone(), 0);
        }
    }

    if strict {
        let before = ledger.len();
        ledger
            .counts
            .retain(|option_id, _| pool.contains_key(option_id));
        let removed = before - ledger.len();
        if removed > 0 {
            log::debug!("Removed {removed} stale ledger entries");
        }
    }
}

// Pick with the default strictness, as hooks usually call it.
pub fn select<'a, V>(
    pool: &'a OptionPool<V>,
    ledger: &mut Ledger,
    abort_if_exhausted: bool,
) -> Result<Selection<'a, V>, SelectionError> {
    Selector::new()
        .abort_if_exhausted(abort_if_exhausted)
        .select(pool, ledger)
}

pub fn select_with_rng<'a, V, R: Rng>(
    pool: &'a OptionPool<V>,
    ledger: &mut Ledger,
    abort_if_exhausted: bool,
    rng: &mut R,
) -> Result<Selection<'a, V>, SelectionError> {
    Selector::new()
        .abort_if_exhausted(abort_if_exhausted)
        .select_with_rng(pool, ledger, rng)
}
