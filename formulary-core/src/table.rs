//! Compound table data structures

use serde::{Deserialize, Serialize};

/// Header of the column holding compound names
pub const DEFAULT_NAME_COLUMN: &str = "Name of the Chemical Compound";
/// Header of the column holding formulas
pub const DEFAULT_FORMULA_COLUMN: &str = "Formula";

/// A single row pairing a compound name with its normalized formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRecord {
    pub name: String,
    pub formula: String,
}

impl CompoundRecord {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// Outcome of looking up a compound by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> LookupResult<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Get the formula if the lookup matched a record
    pub fn formula(&self) -> Option<&'a str> {
        match self {
            LookupResult::Found(f) => Some(f),
            LookupResult::NotFound => None,
        }
    }
}

/// Ordered, read-only set of compound records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundTable {
    records: Vec<CompoundRecord>,
}

impl CompoundTable {
    pub fn new(records: Vec<CompoundRecord>) -> Self {
        Self { records }
    }

    /// Find the formula of the first record whose name equals `name` exactly.
    ///
    /// Matching is case-sensitive and does not trim whitespace.
    pub fn lookup(&self, name: &str) -> LookupResult<'_> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map_or(LookupResult::NotFound, |r| LookupResult::Found(r.formula.as_str()))
    }

    pub fn records(&self) -> &[CompoundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CompoundRecord> for CompoundTable {
    fn from_iter<I: IntoIterator<Item = CompoundRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Header labels used to locate the name and formula columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub name: String,
    pub formula: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_COLUMN.to_string(),
            formula: DEFAULT_FORMULA_COLUMN.to_string(),
        }
    }
}
