use crate::error::SelectionError;
use crate::selector::{Ledger, OptionPool, Selection, Selector};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selection ledgers for every random table of a scenario, keyed by table name.
///
/// Tables are created on first use, so a scenario update that adds a new random table keeps
/// working with adventures saved before the table existed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionRecords {
    tables: BTreeMap<String, Ledger>,
}

impl SelectionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self, table: &str) -> Option<&Ledger> {
        self.tables.get(table)
    }

    // Ledger for the table, created empty if this is the first time it's rolled on.
    pub fn ledger_mut(&mut self, table: &str) -> &mut Ledger {
        self.tables.entry(table.to_string()).or_insert_with(|| {
            log::info!("Creating selection ledger for table '{table}'");
            Ledger::new()
        })
    }

    pub fn remove(&mut self, table: &str) -> Option<Ledger> {
        self.tables.remove(table)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    // Roll on a named table.
    pub fn select<'a, V>(
        &mut self,
        table: &str,
        pool: &'a OptionPool<V>,
        selector: &Selector,
    ) -> Result<Selection<'a, V>, SelectionError> {
        selector.select(pool, self.ledger_mut(table))
    }

    pub fn select_with_rng<'a, V, R: Rng>(
        &mut self,
        table: &str,
        pool: &'a OptionPool<V>,
        selector: &Selector,
        rng: &mut R,
    ) -> Result<Selection<'a, V>, SelectionError> {
        selector.select_with_rng(pool, self.ledger_mut(table), rng)
    }
}
