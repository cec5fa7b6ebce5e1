//! # API Facade
//!
//! [`RosterApi`] is the input controller: the single entry point every UI goes
//! through. It owns the one [`ViewState`] of a session, turns user
//! [`Action`]s into query-engine calls and hands back the [`View`] to draw.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the roster once from its [`DataSource`]
//! - **Dispatches** actions to the pure functions in [`crate::query`]
//! - **Tracks the view mode** so later searches reuse the active layout
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! ## State Machine
//!
//! ```text
//!            sort(az|za|marks|passing|class)
//!   ┌─────────┐ ◄────────────────────────── ┌────────────┐
//!   │ AllView │                             │ GenderView │
//!   └─────────┘ ──────────────────────────► └────────────┘
//!        ▲ │          sort(gender)              ▲ │
//!        └─┘ search                             └─┘ search
//! ```
//!
//! Sorts and searches both start from the full roster in load order: a search
//! does not keep a previous sort, and a sort does not keep a previous search.
//!
//! ## Generic Over DataSource
//!
//! `RosterApi<S: DataSource>` runs against files and URLs in production and
//! against [`crate::source::memory::InMemorySource`] in tests.

use crate::error::{RosterError, Result};
use crate::model::StudentRecord;
use crate::query::{self, Direction};
use crate::source::DataSource;
use crate::view::{Action, SortAction, View, ViewMode, ViewState};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The outcome of a load or an action: the view to draw plus any notes for the user.
#[derive(Debug, Clone, Serialize)]
pub struct CmdResult {
    pub view: View,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(view: View) -> Self {
        Self {
            view,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// The roster controller.
///
/// Generic over `DataSource` to allow different resource locations.
/// All UI clients (CLI, shell, etc.) should interact through this API.
pub struct RosterApi<S: DataSource> {
    source: S,
    state: Option<ViewState>,
    current: Option<View>,
}

impl<S: DataSource> RosterApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: None,
            current: None,
        }
    }

    /// Fetches the roster and shows it unfiltered, in load order, as one table.
    ///
    /// On failure the controller stays unloaded and every action is refused.
    pub fn load(&mut self) -> Result<CmdResult> {
        let location = self.source.location();
        debug!(%location, "loading roster");

        let records = self.source.fetch_all().inspect_err(|e| {
            warn!(%location, error = %e, "failed to load roster");
        })?;
        info!(%location, count = records.len(), "roster loaded");

        let view = View::single(&records);
        let count = records.len();
        self.state = Some(ViewState::new(records));
        self.current = Some(view.clone());

        Ok(CmdResult::new(view).with_message(CmdMessage::info(format!(
            "Loaded {} from {}",
            pluralize(count, "student"),
            location
        ))))
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        match action {
            Action::Search(term) => self.search(&term),
            Action::Sort(sort) => self.sort(sort),
        }
    }

    /// Filters the full roster and redraws it with the active layout.
    ///
    /// A blank term shows the full roster.
    pub fn search(&mut self, term: &str) -> Result<CmdResult> {
        let state = self.loaded_state()?;
        let mode = state.mode();
        let total = state.records().len();

        let (view, note) = if term.trim().is_empty() {
            debug!(%mode, "blank search, showing full roster");
            (layout(mode, state.records()), None)
        } else {
            let found = query::search(state.records(), term);
            debug!(%mode, term, matches = found.len(), "search");
            let note = CmdMessage::info(format!(
                "{} of {} match \"{}\"",
                found.len(),
                pluralize(total, "student"),
                term
            ));
            (layout(mode, &found), Some(note))
        };

        let mut result = self.show(view);
        if let Some(note) = note {
            result.add_message(note);
        }
        Ok(result)
    }

    /// Applies a sort trigger to the full roster and switches the mode it implies.
    pub fn sort(&mut self, action: SortAction) -> Result<CmdResult> {
        let state = self.loaded_state_mut()?;
        let records = state.records();

        let view = match action {
            SortAction::NameAscending => {
                View::single(&query::sort_by_name(records, Direction::Ascending))
            }
            SortAction::NameDescending => {
                View::single(&query::sort_by_name(records, Direction::Descending))
            }
            SortAction::Marks => View::single(&query::sort_by_marks(records)),
            SortAction::Passing => View::single(&query::filter_passing(records)),
            SortAction::Class => View::single(&query::sort_by_class(records)),
            SortAction::Gender => layout(ViewMode::Gender, records),
        };

        let previous = state.mode();
        state.set_mode(action.target_mode());
        if previous != state.mode() {
            info!(from = %previous, to = %state.mode(), "view mode changed");
        }
        debug!(%action, "sort");

        let hidden = hidden_in_gender_view(state.records());
        let mut result = self.show(view);
        if action == SortAction::Gender && hidden > 0 {
            result.add_message(CmdMessage::warning(format!(
                "{} with a gender other than male or female not shown",
                pluralize(hidden, "student")
            )));
        }
        Ok(result)
    }

    /// The view produced by the most recent load or action.
    pub fn current_view(&self) -> Option<&View> {
        self.current.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.state.as_ref().map(ViewState::mode).unwrap_or_default()
    }

    /// Loaded records in load order (empty before a successful load).
    pub fn records(&self) -> &[StudentRecord] {
        self.state.as_ref().map(ViewState::records).unwrap_or(&[])
    }

    fn show(&mut self, view: View) -> CmdResult {
        self.current = Some(view.clone());
        CmdResult::new(view)
    }

    fn loaded_state(&self) -> Result<&ViewState> {
        self.state.as_ref().ok_or_else(not_loaded)
    }

    fn loaded_state_mut(&mut self) -> Result<&mut ViewState> {
        self.state.as_mut().ok_or_else(not_loaded)
    }
}

/// Renders `records` the way `mode` lays them out.
fn layout(mode: ViewMode, records: &[StudentRecord]) -> View {
    match mode {
        ViewMode::All => View::single(records),
        ViewMode::Gender => View::partitioned(&query::partition_by_gender(records)),
    }
}

fn hidden_in_gender_view(records: &[StudentRecord]) -> usize {
    records
        .iter()
        .filter(|r| !r.is_female() && !r.is_male())
        .count()
}

fn not_loaded() -> RosterError {
    RosterError::Api("Student data is not loaded".to_string())
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{bob_and_amy, student};
    use crate::source::memory::InMemorySource;

    fn loaded(records: Vec<StudentRecord>) -> RosterApi<InMemorySource> {
        let mut api = RosterApi::new(InMemorySource::new(records));
        api.load().unwrap();
        api
    }

    #[test]
    fn load_shows_load_order_in_single_table() {
        let mut api = RosterApi::new(InMemorySource::new(bob_and_amy()));
        let result = api.load().unwrap();
        assert_eq!(result.view.mode(), ViewMode::All);
        assert_eq!(result.view.ids(), vec![1, 2]);
        assert_eq!(api.mode(), ViewMode::All);
        assert!(result.messages[0].content.contains("Loaded 2 students"));
    }

    #[test]
    fn actions_are_refused_before_load() {
        let mut api = RosterApi::new(InMemorySource::new(bob_and_amy()));
        assert!(api.search("amy").is_err());
        assert!(api.sort(SortAction::Marks).is_err());
        assert!(api.current_view().is_none());
    }

    #[test]
    fn failed_load_leaves_controller_inert() {
        let mut api = RosterApi::new(InMemorySource::failing("offline"));
        let err = api.load().unwrap_err();
        assert!(err.is_load_failure());
        assert!(!api.is_loaded());
        assert!(api.dispatch(Action::Sort(SortAction::Gender)).is_err());
    }

    #[test]
    fn gender_sort_switches_to_partitioned_view() {
        let mut api = loaded(bob_and_amy());
        let result = api.sort(SortAction::Gender).unwrap();
        assert_eq!(api.mode(), ViewMode::Gender);
        match result.view {
            View::Partitioned { female, male } => {
                assert_eq!(female.rows[0].name, "Amy Ng");
                assert_eq!(male.rows[0].name, "Bob Lee");
            }
            other => panic!("expected partitioned view, got {other:?}"),
        }
    }

    #[test]
    fn search_keeps_gender_mode() {
        let mut api = loaded(bob_and_amy());
        api.sort(SortAction::Gender).unwrap();

        let result = api.search("bob").unwrap();
        assert_eq!(api.mode(), ViewMode::Gender);
        match result.view {
            View::Partitioned { female, male } => {
                assert!(female.is_empty());
                assert_eq!(male.len(), 1);
            }
            other => panic!("expected partitioned view, got {other:?}"),
        }
    }

    #[test]
    fn other_sorts_reset_to_all_mode() {
        let mut api = loaded(bob_and_amy());
        for action in SortAction::ALL {
            if action == SortAction::Gender {
                continue;
            }
            api.sort(SortAction::Gender).unwrap();
            let result = api.sort(action).unwrap();
            assert_eq!(api.mode(), ViewMode::All, "{action}");
            assert_eq!(result.view.mode(), ViewMode::All, "{action}");
        }
    }

    #[test]
    fn search_ignores_previous_sort() {
        let mut api = loaded(bob_and_amy());
        api.sort(SortAction::NameAscending).unwrap();
        let result = api.search("x.com").unwrap();
        assert_eq!(result.view.ids(), vec![1, 2]);
    }

    #[test]
    fn sort_ignores_previous_search() {
        let mut api = loaded(bob_and_amy());
        api.search("bob").unwrap();
        let result = api.sort(SortAction::Marks).unwrap();
        assert_eq!(result.view.ids(), vec![1, 2]);
    }

    #[test]
    fn blank_search_shows_everything_in_load_order() {
        let mut api = loaded(bob_and_amy());
        let result = api.search("   ").unwrap();
        assert_eq!(result.view.ids(), vec![1, 2]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_reports_match_count() {
        let mut api = loaded(bob_and_amy());
        let result = api.dispatch(Action::Search("zzz".into())).unwrap();
        assert!(result.view.ids().is_empty());
        assert_eq!(result.messages[0].content, "0 of 2 students match \"zzz\"");
    }

    #[test]
    fn passing_sort_filters_without_reordering() {
        let mut roster = bob_and_amy();
        roster.push(student(3, "Cy", "Ode", "male", 2, 75.0, true, "c@x.com"));
        let mut api = loaded(roster);
        let result = api.sort(SortAction::Passing).unwrap();
        assert_eq!(result.view.ids(), vec![2, 3]);
    }

    #[test]
    fn gender_sort_warns_about_hidden_students() {
        let mut roster = bob_and_amy();
        roster.push(student(3, "Jo", "Doe", "other", 2, 75.0, true, "j@x.com"));
        let mut api = loaded(roster);
        let result = api.sort(SortAction::Gender).unwrap();
        assert_eq!(result.view.ids(), vec![2, 1]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn current_view_tracks_last_action() {
        let mut api = loaded(bob_and_amy());
        api.sort(SortAction::NameAscending).unwrap();
        assert_eq!(api.current_view().unwrap().ids(), vec![2, 1]);
    }

    #[test]
    fn records_stay_in_load_order_after_actions() {
        let mut api = loaded(bob_and_amy());
        api.sort(SortAction::NameAscending).unwrap();
        api.sort(SortAction::Passing).unwrap();
        assert_eq!(api.records(), bob_and_amy().as_slice());
    }
}
