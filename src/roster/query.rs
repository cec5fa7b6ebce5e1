//! # Query Engine
//!
//! Pure functions over a slice of [`StudentRecord`]s: text search, the sort
//! criteria offered by the roster UI, the passing filter and the gender split.
//!
//! Every function borrows its input and returns a fresh `Vec`, so the loaded
//! roster is never reordered or trimmed in place. Sorts are stable: records
//! with equal keys keep their load order.

use crate::model::StudentRecord;
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Result of splitting a roster by gender.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenderPartition {
    pub female: Vec<StudentRecord>,
    pub male: Vec<StudentRecord>,
}

/// Case-insensitive substring match against `"first last"` or the email.
///
/// Blank terms are not special-cased here; callers that want "no filter"
/// semantics for a blank box check for it before calling.
pub fn search(records: &[StudentRecord], term: &str) -> Vec<StudentRecord> {
    let term_lower = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.full_name().to_lowercase().contains(&term_lower)
                || r.email.to_lowercase().contains(&term_lower)
        })
        .cloned()
        .collect()
}

pub fn sort_by_name(records: &[StudentRecord], direction: Direction) -> Vec<StudentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let (name_a, name_b) = (a.full_name(), b.full_name());
        match direction {
            Direction::Ascending => collate(&name_a, &name_b),
            Direction::Descending => collate(&name_b, &name_a),
        }
    });
    sorted
}

pub fn sort_by_marks(records: &[StudentRecord]) -> Vec<StudentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.marks.total_cmp(&b.marks));
    sorted
}

pub fn sort_by_class(records: &[StudentRecord]) -> Vec<StudentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.class);
    sorted
}

pub fn filter_passing(records: &[StudentRecord]) -> Vec<StudentRecord> {
    records.iter().filter(|r| r.passing).cloned().collect()
}

/// Splits records into female and male tables, keeping load order within each.
///
/// Records whose gender is neither label (case-insensitive) land in neither table.
pub fn partition_by_gender(records: &[StudentRecord]) -> GenderPartition {
    let mut partition = GenderPartition::default();
    for record in records {
        if record.is_female() {
            partition.female.push(record.clone());
        } else if record.is_male() {
            partition.male.push(record.clone());
        }
    }
    partition
}

/// Human-friendly name ordering: accents and case ignored first, then
/// lowercase before uppercase, then raw code points.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| swap_case(a).cmp(&swap_case(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased text with diacritics stripped, so "Émile" sorts with the E's.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn swap_case(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            let swapped: Vec<char> = if c.is_uppercase() {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            swapped
        })
        .collect()
}
