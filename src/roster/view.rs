//! # View State and View Model
//!
//! [`ViewState`] holds the loaded roster and the active [`ViewMode`]. The
//! controller in [`crate::api`] owns the only instance and is the only code
//! that mutates it.
//!
//! [`View`] is what a UI draws: either one table or the female/male pair.
//! Rows are pre-projected into [`RowView`]s so renderers (terminal templates,
//! JSON, HTML) only lay out strings and never touch [`StudentRecord`] logic.

use crate::error::RosterError;
use crate::model::StudentRecord;
use crate::query::GenderPartition;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const ALL_TITLE: &str = "Students";
pub const FEMALE_TITLE: &str = "Female Students";
pub const MALE_TITLE: &str = "Male Students";

/// Which layout searches render into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Gender,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => write!(f, "all"),
            ViewMode::Gender => write!(f, "gender"),
        }
    }
}

/// The sort triggers offered by the roster UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    NameAscending,
    NameDescending,
    Marks,
    Passing,
    Class,
    Gender,
}

impl SortAction {
    pub const ALL: [SortAction; 6] = [
        SortAction::NameAscending,
        SortAction::NameDescending,
        SortAction::Marks,
        SortAction::Passing,
        SortAction::Class,
        SortAction::Gender,
    ];

    /// Mode the view switches to once this action runs.
    pub fn target_mode(self) -> ViewMode {
        match self {
            SortAction::Gender => ViewMode::Gender,
            _ => ViewMode::All,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SortAction::NameAscending => "az",
            SortAction::NameDescending => "za",
            SortAction::Marks => "marks",
            SortAction::Passing => "passing",
            SortAction::Class => "class",
            SortAction::Gender => "gender",
        }
    }
}

impl fmt::Display for SortAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortAction {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        SortAction::ALL
            .into_iter()
            .find(|action| action.token() == lowered)
            .ok_or_else(|| {
                RosterError::Api(format!(
                    "Unknown sort '{}' (expected one of: az, za, marks, passing, class, gender)",
                    s.trim()
                ))
            })
    }
}

/// A user input the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Sort(SortAction),
}

/// Process-wide roster state: the loaded records and the active mode.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    records: Vec<StudentRecord>,
    mode: ViewMode,
}

impl ViewState {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            mode: ViewMode::All,
        }
    }

    /// Records in load order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }
}

/// One table row, already projected to display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: i64,
    pub avatar: String,
    pub name: String,
    pub gender: String,
    pub class: u32,
    pub marks: String,
    pub status: String,
    pub passing: bool,
    pub email: String,
}

impl From<&StudentRecord> for RowView {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: record.id,
            avatar: record.avatar(),
            name: record.full_name(),
            gender: record.gender.clone(),
            class: record.class,
            marks: record.marks_display(),
            status: record.status_label().to_string(),
            passing: record.passing,
            email: record.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn new(title: impl Into<String>, records: &[StudentRecord]) -> Self {
        Self {
            title: title.into(),
            rows: records.iter().map(RowView::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What the UI should show after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum View {
    Single { table: TableView },
    Partitioned { female: TableView, male: TableView },
}

impl View {
    pub fn single(records: &[StudentRecord]) -> Self {
        View::Single {
            table: TableView::new(ALL_TITLE, records),
        }
    }

    pub fn partitioned(partition: &GenderPartition) -> Self {
        View::Partitioned {
            female: TableView::new(FEMALE_TITLE, &partition.female),
            male: TableView::new(MALE_TITLE, &partition.male),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            View::Single { .. } => ViewMode::All,
            View::Partitioned { .. } => ViewMode::Gender,
        }
    }

    /// Ids of every row shown, in display order (female table first).
    pub fn ids(&self) -> Vec<i64> {
        self.tables()
            .into_iter()
            .flat_map(|t| t.rows.iter().map(|r| r.id))
            .collect()
    }

    pub fn tables(&self) -> Vec<&TableView> {
        match self {
            View::Single { table } => vec![table],
            View::Partitioned { female, male } => vec![female, male],
        }
    }
}
