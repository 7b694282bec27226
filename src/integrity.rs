//! Read-only consistency checks over imported content.

use crate::database::ContentDatabase;
use serde_json::Value;
use std::collections::HashMap;

const SLUG_TABLES: [&str; 2] = ["posts", "pages"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Slugs claimed more than once across posts and pages, sorted.
    pub duplicate_slugs: Vec<String>,
    /// Tables that couldn't be checked, usually because they have no `slug` column.
    pub skipped_tables: Vec<&'static str>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_slugs.is_empty()
    }

    pub fn log(&self) {
        if !self.skipped_tables.is_empty() {
            tracing::warn!(tables = ?self.skipped_tables, "Slug check skipped some tables");
        }

        if self.is_clean() {
            tracing::info!("Integrity check passed: no duplicate slugs");
        } else {
            tracing::warn!(slugs = ?self.duplicate_slugs, "Duplicate slugs found");
        }
    }
}

// posts and pages share one URL space, so a slug must be unique across both tables
pub async fn check_slugs(db: &dyn ContentDatabase) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let mut slug_counts: HashMap<String, usize> = HashMap::new();

    for table in SLUG_TABLES {
        let sql = format!("SELECT slug FROM {} WHERE slug IS NOT NULL", table);

        let rows = match db.query(&sql).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::debug!(table, error = %e, "Could not read slugs");
                report.skipped_tables.push(table);
                continue;
            }
        };

        for row in rows {
            if let Some(slug) = row.get("slug").and_then(Value::as_str) {
                *slug_counts.entry(slug.to_string()).or_default() += 1;
            }
        }
    }

    report.duplicate_slugs = slug_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(slug, _)| slug)
        .collect();
    report.duplicate_slugs.sort();

    report
}
