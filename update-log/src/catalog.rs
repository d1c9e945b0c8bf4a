use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::category::{Category, classify_color, classify_icon};

const DEFAULT_CHANGELOG_DATA: &str = include_str!("../data/changelog.json");

/// A single change note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Raw category tag, kept verbatim so unknown tags survive a round trip
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ChangeItem {
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        Category::from_tag(&self.kind)
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        classify_icon(&self.kind)
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        classify_color(&self.kind)
    }
}

/// One released version and its change notes, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub version: String,
    /// `YYYY-MM-DD`, display only
    pub date: String,
    #[serde(default)]
    pub changes: Vec<ChangeItem>,
}

impl ReleaseEntry {
    /// Tally of change notes per category
    #[must_use]
    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for change in &self.changes {
            counts.add(change.category());
        }
        counts
    }
}

/// Per-category change counts, indexed in [`Category::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts([usize; 5]);

impl CategoryCounts {
    const fn slot(category: Category) -> usize {
        match category {
            Category::Feature => 0,
            Category::Balance => 1,
            Category::Fix => 2,
            Category::Ui => 3,
            Category::Other => 4,
        }
    }

    fn add(&mut self, category: Category) {
        self.0[Self::slot(category)] += 1;
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        self.0[Self::slot(category)]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Non-zero counts in display order
    pub fn non_zero(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|(_, count)| *count > 0)
    }
}

/// Ordered release history, newest first by authoring convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Changelog {
    #[serde(default)]
    entries: Vec<ReleaseEntry>,
}

impl Changelog {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn from_entries(entries: Vec<ReleaseEntry>) -> Self {
        Self { entries }
    }

    /// Load a changelog from a JSON document of the form `{"entries": [...]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into release entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse the changelog bundled with the crate. Malformed data yields an
    /// empty changelog.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(DEFAULT_CHANGELOG_DATA) {
            Ok(changelog) => {
                log::debug!("loaded {} release entries", changelog.len());
                changelog
            }
            Err(err) => {
                log::warn!("bundled changelog failed to parse: {err}");
                Self::empty()
            }
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ReleaseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get_by_version(&self, version: &str) -> Option<&ReleaseEntry> {
        self.entries.iter().find(|entry| entry.version == version)
    }

    /// First authored entry
    #[must_use]
    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a ReleaseEntry;
    type IntoIter = std::slice::Iter<'a, ReleaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Process-wide changelog, parsed once on first access
#[must_use]
pub fn catalog() -> &'static Changelog {
    static CATALOG: OnceLock<Changelog> = OnceLock::new();
    CATALOG.get_or_init(Changelog::load_from_static)
}

/// Every release entry in authored order
#[must_use]
pub fn entries() -> &'static [ReleaseEntry] {
    catalog().entries()
}
