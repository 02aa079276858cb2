use serde::{Serialize, Deserialize};
use std::fmt;

/// Kinds of directory records that get their own search index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Group,
    Location,
    Event,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::User,
        EntityKind::Group,
        EntityKind::Location,
        EntityKind::Event,
    ];

    /// Groups and events are only searchable while public
    pub fn requires_public(&self) -> bool {
        matches!(self, EntityKind::Group | EntityKind::Event)
    }

    /// Locations are also found by their aliases
    pub fn indexes_aliases(&self) -> bool {
        matches!(self, EntityKind::Location)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Group => "group",
            EntityKind::Location => "location",
            EntityKind::Event => "event",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One display string registered for a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry<T> {
    pub text: String,
    pub value: T,
}

impl<T> IndexEntry<T> {
    pub fn new(text: impl Into<String>, value: T) -> Self {
        IndexEntry {
            text: text.into(),
            value,
        }
    }
}

/// The searchable part of a persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord<T> {
    pub id: T,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl<T: Clone> EntityRecord<T> {
    pub fn new(id: T, name: impl Into<String>) -> Self {
        EntityRecord {
            id,
            name: name.into(),
            aliases: Vec::new(),
            public: true,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn is_searchable(&self, kind: EntityKind) -> bool {
        self.public || !kind.requires_public()
    }

    /// Display strings to index for this record, empty when not searchable
    pub fn entries(&self, kind: EntityKind) -> Vec<IndexEntry<T>> {
        if !self.is_searchable(kind) {
            return Vec::new();
        }

        let mut entries = vec![IndexEntry::new(self.name.clone(), self.id.clone())];
        if kind.indexes_aliases() {
            entries.extend(
                self.aliases
                    .iter()
                    .map(|alias| IndexEntry::new(alias.clone(), self.id.clone())),
            );
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_event_has_no_entries() {
        let record = EntityRecord::new("E1", "Closed Rehearsal").with_public(false);
        assert!(record.entries(EntityKind::Event).is_empty());
        assert!(record.entries(EntityKind::Group).is_empty());
        assert_eq!(record.entries(EntityKind::User).len(), 1);
    }

    #[test]
    fn aliases_only_indexed_for_locations() {
        let record = EntityRecord::new("L1", "Engineering Hall").with_aliases(["EH", "Eng"]);
        let texts: Vec<_> = record
            .entries(EntityKind::Location)
            .into_iter()
            .map(|entry| entry.text)
            .collect();
        assert_eq!(texts, vec!["Engineering Hall", "EH", "Eng"]);
        assert_eq!(record.entries(EntityKind::Group).len(), 1);
    }

    #[test]
    fn record_defaults_from_json() {
        let record: EntityRecord<String> =
            serde_json::from_str(r#"{"id": "G1", "name": "Chess Club"}"#).unwrap();
        assert!(record.public);
        assert!(record.aliases.is_empty());
    }
}
