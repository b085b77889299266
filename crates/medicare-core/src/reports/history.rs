//! Frequency analysis over the medical history.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Reports;

/// How many entries the top lists keep.
pub const TOP_LIMIT: usize = 5;

/// A value and how many entries carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frequency {
    pub value: String,
    pub count: usize,
}

/// Aggregates over the whole history table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryAnalysis {
    pub total_entries: usize,
    /// Most frequent exact diagnoses, ties in first-seen order
    pub top_diagnoses: Vec<Frequency>,
    /// Most frequent exact treatments, ties in first-seen order
    pub top_treatments: Vec<Frequency>,
    /// Entry counts keyed `YYYY-MM`, in first-seen order
    pub entries_by_month: IndexMap<String, usize>,
}

impl<'a> Reports<'a> {
    /// Diagnosis and treatment frequencies plus monthly volume.
    pub fn history_analysis(&self) -> HistoryAnalysis {
        let entries = self.db.history().rows();

        HistoryAnalysis {
            total_entries: entries.len(),
            top_diagnoses: top_frequencies(entries.iter().map(|e| e.diagnosis.as_str())),
            top_treatments: top_frequencies(entries.iter().map(|e| e.treatment.as_str())),
            entries_by_month: self.entries_by_month(),
        }
    }

    /// Entry counts per `YYYY-MM`, keys in the order first encountered.
    pub fn entries_by_month(&self) -> IndexMap<String, usize> {
        let mut months = IndexMap::new();
        for entry in self.db.history().rows() {
            *months
                .entry(entry.date.format("%Y-%m").to_string())
                .or_insert(0) += 1;
        }
        months
    }
}

fn top_frequencies<'s>(values: impl Iterator<Item = &'s str>) -> Vec<Frequency> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<Frequency> = counts
        .into_iter()
        .map(|(value, count)| Frequency {
            value: value.to_string(),
            count,
        })
        .collect();
    // Stable, so equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_LIMIT);
    ranked
}
