//! Integrity checks over a changelog.
//!
//! Findings are advisory: a changelog with issues still loads and renders,
//! the audit only reports what an author probably got wrong. Unknown category
//! tags are valid data and are reported as notices, not errors.
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::catalog::Changelog;
use crate::category::Category;

/// A single audit finding
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum CatalogIssue {
    #[error("entry #{index} has an empty version")]
    EmptyVersion { index: usize },
    #[error("version {version} appears more than once (entry #{index})")]
    DuplicateVersion { index: usize, version: String },
    #[error("version {version} has date {date:?}, expected a YYYY-MM-DD calendar date")]
    MalformedDate {
        index: usize,
        version: String,
        date: String,
    },
    #[error("version {version} change #{change} uses unknown category {tag:?}")]
    UnknownCategory {
        index: usize,
        version: String,
        change: usize,
        tag: String,
    },
}

impl CatalogIssue {
    /// Whether the finding is an authoring error. Unknown category tags render
    /// with the default glyph and color, so they are only notices.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::UnknownCategory { .. })
    }
}

fn date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").ok())
        .as_ref()
}

const fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: u32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// `YYYY-MM-DD` naming a real calendar day (Gregorian, leap years included)
#[must_use]
pub fn is_valid_date(date: &str) -> bool {
    let Some(caps) = date_pattern().and_then(|re| re.captures(date)) else {
        return false;
    };
    let year: u32 = caps[1].parse().unwrap_or(0);
    let month: u8 = caps[2].parse().unwrap_or(0);
    let day: u8 = caps[3].parse().unwrap_or(0);
    day >= 1 && day <= days_in_month(year, month)
}

impl Changelog {
    /// Report authoring mistakes, in entry order
    #[must_use]
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (index, entry) in self.iter().enumerate() {
            if entry.version.trim().is_empty() {
                issues.push(CatalogIssue::EmptyVersion { index });
            } else if !seen.insert(entry.version.as_str()) {
                issues.push(CatalogIssue::DuplicateVersion {
                    index,
                    version: entry.version.clone(),
                });
            }

            if !is_valid_date(&entry.date) {
                issues.push(CatalogIssue::MalformedDate {
                    index,
                    version: entry.version.clone(),
                    date: entry.date.clone(),
                });
            }

            for (change, item) in entry.changes.iter().enumerate() {
                if item.category() == Category::Other {
                    issues.push(CatalogIssue::UnknownCategory {
                        index,
                        version: entry.version.clone(),
                        change,
                        tag: item.kind.clone(),
                    });
                }
            }
        }

        if !issues.is_empty() {
            log::debug!("changelog audit found {} issue(s)", issues.len());
        }
        issues
    }
}
