//! Import consolidation.
//!
//! Java imports one member per directive; Ceylon imports a brace-delimited
//! member list per package. [`ImportTable`] folds the directives of a unit
//! into one entry per package, in first-seen package order.

use crate::ast::{Import, ImportMember};

/// Ceylon's "import everything from this package" member.
pub const WILDCARD: &str = "...";

/// Members imported from one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEntry {
    /// Distinct names in first-seen order; never empty.
    Members(Vec<String>),
    Wildcard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: Vec<(String, ImportEntry)>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `imports` in order.
    pub fn from_imports<'a>(imports: impl IntoIterator<Item = &'a Import>) -> Self {
        let mut table = Self::new();
        for import in imports {
            table.add(import);
        }
        table
    }

    /// Record one directive. Once a package has seen a wildcard, it stays
    /// a wildcard no matter what arrives later.
    pub fn add(&mut self, import: &Import) {
        let index = match self.entries.iter().position(|(p, _)| *p == import.package) {
            Some(index) => index,
            None => {
                let entry = match &import.member {
                    ImportMember::Single(name) => ImportEntry::Members(vec![name.clone()]),
                    ImportMember::Wildcard => ImportEntry::Wildcard,
                };
                self.entries.push((import.package.clone(), entry));
                return;
            }
        };

        let entry = &mut self.entries[index].1;
        match (&import.member, entry) {
            (ImportMember::Wildcard, entry) => *entry = ImportEntry::Wildcard,
            (ImportMember::Single(_), ImportEntry::Wildcard) => {}
            (ImportMember::Single(name), ImportEntry::Members(names)) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, package: &str) -> Option<&ImportEntry> {
        self.entries
            .iter()
            .find(|(p, _)| p == package)
            .map(|(_, e)| e)
    }

    /// Packages with their entries, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }
}

impl ImportEntry {
    /// Member names as they appear inside the import braces.
    pub fn members(&self) -> Vec<&str> {
        match self {
            ImportEntry::Members(names) => names.iter().map(String::as_str).collect(),
            ImportEntry::Wildcard => vec![WILDCARD],
        }
    }
}
