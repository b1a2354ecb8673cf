use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ────────────────────────────────────────────────────────────────────────────
// EntryType
// ────────────────────────────────────────────────────────────────────────────

/// A named entry-type classification (e.g. `article`, `book`).
///
/// Identity is the stable `key`; `display_name` is presentation text only.
/// Two types with the same key compare equal even if their display names
/// differ, so renaming a type in the UI never breaks identity checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryType {
    /// Stable lowercase identifier used for equality and catalog lookup.
    pub key: String,
    /// Human-readable name shown in menus.
    pub display_name: String,
}

impl EntryType {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
        }
    }
}

impl PartialEq for EntryType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for EntryType {}

impl Hash for EntryType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DataMode
// ────────────────────────────────────────────────────────────────────────────

/// The schema dialect of a library.
///
/// Determines which type catalogs apply and how the change-type menu is
/// grouped. Closed enum so assembler branching stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataMode {
    /// The modern default dialect.
    Biblatex,
    /// The legacy dialect, with the IEEETran extension set.
    Bibtex,
}

impl DataMode {
    /// Human-facing name, used for menu group labels in legacy mode.
    pub fn formatted_name(self) -> &'static str {
        match self {
            DataMode::Biblatex => "biblatex",
            DataMode::Bibtex => "BibTeX",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry / Library
// ────────────────────────────────────────────────────────────────────────────

/// A single bibliographic record.
///
/// `fields` preserves the insertion order of the source file (`author`,
/// `title`, …). This core carries the map but never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub entry_type: EntryType,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl Entry {
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            entry_type,
            fields: IndexMap::new(),
        }
    }

    /// Set a field, replacing any previous value, keeping insertion order.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
}

/// Record of one entry's type change. Captures enough state to reverse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeChange {
    /// Index of the changed entry in [`Library::entries`].
    pub entry_index: usize,
    pub old_type: EntryType,
    pub new_type: EntryType,
}

/// Owner of all entries in an open library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub entries: Vec<Entry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change one entry's type.
    ///
    /// Returns `None` when the entry already has that type or the index is
    /// out of range (both are silent no-ops, not errors); otherwise applies
    /// the change and returns the record needed to reverse it.
    pub fn set_entry_type(&mut self, index: usize, target: EntryType) -> Option<TypeChange> {
        let entry = self.entries.get_mut(index)?;
        if entry.entry_type == target {
            return None;
        }
        let old_type = std::mem::replace(&mut entry.entry_type, target.clone());
        Some(TypeChange {
            entry_index: index,
            old_type,
            new_type: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> EntryType {
        EntryType::new("article", "Article")
    }

    fn book() -> EntryType {
        EntryType::new("book", "Book")
    }

    #[test]
    fn test_entry_type_equality_by_key_only() {
        let a = EntryType::new("article", "Article");
        let b = EntryType::new("article", "Zeitschriftenartikel");
        assert_eq!(a, b);
        assert_ne!(a, book());
    }

    #[test]
    fn test_set_entry_type_returns_change_record() {
        let mut library = Library::new();
        library.entries.push(Entry::new(article()));

        let change = library.set_entry_type(0, book()).expect("type did change");
        assert_eq!(change.entry_index, 0);
        assert_eq!(change.old_type, article());
        assert_eq!(change.new_type, book());
        assert_eq!(library.entries[0].entry_type, book());
    }

    #[test]
    fn test_set_entry_type_same_type_is_noop() {
        let mut library = Library::new();
        library.entries.push(Entry::new(article()));

        assert!(library.set_entry_type(0, article()).is_none());
        assert_eq!(library.entries[0].entry_type, article());
    }

    #[test]
    fn test_set_entry_type_out_of_range_is_noop() {
        let mut library = Library::new();
        assert!(library.set_entry_type(3, article()).is_none());
    }

    #[test]
    fn test_entry_fields_preserve_insertion_order() {
        let mut entry = Entry::new(article());
        entry.set_field("author", "Knuth, D. E.");
        entry.set_field("title", "Literate Programming");
        entry.set_field("year", "1984");

        let names: Vec<&str> = entry.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["author", "title", "year"]);
    }
}
