//! The consolidated drug → journal → publication graph.
//!
//! Serializes as a single object keyed by drug name. Key order follows the
//! drug input order, so the map is written by hand instead of going through a
//! sorted map type.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::publication::SourceType;

/// One distinct publication under a journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRef {
    pub id: String,
    pub source: SourceType,
    pub date: Option<NaiveDate>,
}

/// Publications mentioning a drug, grouped under one journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalGroup {
    pub journal: String,
    pub mentions: Vec<PublicationRef>,
}

/// All journal groups for a single drug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugEntry {
    pub drug: String,
    pub journals: Vec<JournalGroup>,
}

impl DrugEntry {
    pub fn is_empty(&self) -> bool {
        self.journals.is_empty()
    }

    pub fn mention_count(&self) -> usize {
        self.journals.iter().map(|group| group.mentions.len()).sum()
    }
}

/// Final output of the pipeline. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionGraph {
    entries: Vec<DrugEntry>,
}

impl MentionGraph {
    pub fn from_entries(entries: Vec<DrugEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DrugEntry] {
        &self.entries
    }

    pub fn get(&self, drug: &str) -> Option<&DrugEntry> {
        self.entries.iter().find(|entry| entry.drug == drug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drug_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.drug.as_str())
    }

    /// Total publication references across all drugs.
    pub fn mention_count(&self) -> usize {
        self.entries.iter().map(DrugEntry::mention_count).sum()
    }
}

impl Serialize for MentionGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.drug, &entry.journals)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MentionGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GraphVisitor)
    }
}

struct GraphVisitor;

impl<'de> Visitor<'de> for GraphVisitor {
    type Value = MentionGraph;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of drug names to journal groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((drug, journals)) = access.next_entry::<String, Vec<JournalGroup>>()? {
            entries.push(DrugEntry { drug, journals });
        }
        Ok(MentionGraph { entries })
    }
}
