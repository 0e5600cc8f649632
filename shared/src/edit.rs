//! Inline edit and drag-and-drop sessions for the timetable.
//!
//! Both sessions only ever produce a [`SubjectCommit`]; sending it is the
//! caller's job. Anything rejected here never reaches the gateway.

use crate::error::ValidationError;
use crate::models::{DayRecord, SubjectPair};
use crate::render::TimetableCell;

/// New subject for one timetable day, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCommit {
    pub day_id: String,
    /// `None` clears the assignment
    pub subject: Option<SubjectPair>,
}

/// Raw text typed into the two edit fields of one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    day_id: String,
    pub week: String,
    pub number: String,
}

impl EditSession {
    /// Seed the fields from the day's current subject, or leave them blank
    pub fn start(record: &DayRecord) -> Self {
        let (week, number) = match record.subject {
            Some(pair) => (pair.week.to_string(), pair.number.to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            day_id: record.id.clone(),
            week,
            number,
        }
    }

    pub fn day_id(&self) -> &str {
        &self.day_id
    }

    /// Validate the two fields.
    ///
    /// Both blank clears the day; one blank, a non-integer or an out of range
    /// value is rejected.
    pub fn save(&self) -> Result<SubjectCommit, ValidationError> {
        let week = self.week.trim();
        let number = self.number.trim();

        let subject = match (week.is_empty(), number.is_empty()) {
            (true, true) => None,
            (true, false) | (false, true) => return Err(ValidationError::IncompleteSubject),
            (false, false) => {
                let week: i64 = week.parse().map_err(|_| ValidationError::NotANumber)?;
                let number: i64 = number.parse().map_err(|_| ValidationError::NotANumber)?;
                Some(SubjectPair::new(week, number)?)
            }
        };

        Ok(SubjectCommit {
            day_id: self.day_id.clone(),
            subject,
        })
    }
}

/// Subject picked up from the reference list, waiting to be dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    payload: Option<SubjectPair>,
}

impl DragSession {
    pub fn drag_start(&mut self, week: u32, number: u32) {
        self.payload = Some(SubjectPair { week, number });
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// Whether hovering `cell` should show the drop affordance
    pub fn drag_over(&self, cell: &TimetableCell<'_>) -> bool {
        self.is_dragging() && cell.accepts_drop()
    }

    /// Drop onto `cell`.
    ///
    /// A rejecting cell leaves the session untouched. Otherwise the payload is
    /// consumed and returned as a full replacement of the day's subject,
    /// whatever happens to the commit afterwards.
    pub fn drop_on(&mut self, cell: &TimetableCell<'_>) -> Option<SubjectCommit> {
        if !cell.accepts_drop() {
            return None;
        }
        let record = cell.record?;
        let subject = self.payload.take()?;
        Some(SubjectCommit {
            day_id: record.id.clone(),
            subject: Some(subject),
        })
    }

    /// Gesture ended somewhere that is not a drop target
    pub fn drag_end(&mut self) {
        self.payload = None;
    }
}

/// Everything transient on the timetable page besides the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableInteraction {
    editing: Option<EditSession>,
    pub drag: DragSession,
    validation_error: Option<ValidationError>,
}

impl TimetableInteraction {
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, day_id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.day_id() == day_id)
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn dismiss_validation_error(&mut self) {
        self.validation_error = None;
    }

    pub fn start_edit(&mut self, record: &DayRecord) {
        self.validation_error = None;
        self.editing = Some(EditSession::start(record));
    }

    pub fn set_week_text(&mut self, text: String) {
        if let Some(edit) = self.editing.as_mut() {
            edit.week = text;
        }
    }

    pub fn set_number_text(&mut self, text: String) {
        if let Some(edit) = self.editing.as_mut() {
            edit.number = text;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.validation_error = None;
    }

    /// Validate the open session. On failure the error is kept for display and
    /// nothing is returned.
    pub fn save_edit(&mut self) -> Option<SubjectCommit> {
        let edit = self.editing.as_ref()?;
        match edit.save() {
            Ok(commit) => {
                self.validation_error = None;
                Some(commit)
            }
            Err(err) => {
                log::debug!("✏️ Rejected subject edit for {}: {}", edit.day_id(), err);
                self.validation_error = Some(err);
                None
            }
        }
    }

    /// The backend accepted `day_id`'s new subject: close its edit session
    pub fn commit_succeeded(&mut self, day_id: &str) {
        if self.is_editing(day_id) {
            self.editing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarMonth, WeekStart};
    use crate::render::render_timetable;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, subject: Option<(u32, u32)>) -> DayRecord {
        DayRecord {
            id: id.to_string(),
            date: date(2024, 3, 5),
            subject: subject.map(SubjectPair::from),
        }
    }

    fn session(week: &str, number: &str) -> EditSession {
        let mut s = EditSession::start(&record("d1", None));
        s.week = week.to_string();
        s.number = number.to_string();
        s
    }

    #[test]
    fn test_start_edit_seeds_fields() {
        let s = EditSession::start(&record("d1", Some((2, 4))));
        assert_eq!((s.week.as_str(), s.number.as_str()), ("2", "4"));
        assert_eq!(s.day_id(), "d1");

        let blank = EditSession::start(&record("d2", None));
        assert_eq!((blank.week.as_str(), blank.number.as_str()), ("", ""));
    }

    #[test]
    fn test_save_both_blank_clears() {
        let commit = session("", "  ").save().unwrap();
        assert_eq!(commit.day_id, "d1");
        assert_eq!(commit.subject, None);
    }

    #[test]
    fn test_save_rejects_bad_input() {
        assert_eq!(session("2", "").save(), Err(ValidationError::IncompleteSubject));
        assert_eq!(session("", "3").save(), Err(ValidationError::IncompleteSubject));
        assert_eq!(session("two", "3").save(), Err(ValidationError::NotANumber));
        assert_eq!(session("2.5", "3").save(), Err(ValidationError::NotANumber));
        assert_eq!(session("5", "3").save(), Err(ValidationError::WeekOutOfRange(5)));
        assert_eq!(session("0", "3").save(), Err(ValidationError::WeekOutOfRange(0)));
        assert_eq!(session("-1", "3").save(), Err(ValidationError::WeekOutOfRange(-1)));
        assert_eq!(session("4", "7").save(), Err(ValidationError::NumberOutOfRange(7)));
    }

    #[test]
    fn test_save_valid_pair() {
        let commit = session(" 4 ", "6").save().unwrap();
        assert_eq!(commit.subject, Some(SubjectPair { week: 4, number: 6 }));
    }

    #[test]
    fn test_interaction_keeps_session_on_validation_error() {
        let mut ui = TimetableInteraction::default();
        ui.start_edit(&record("d1", None));
        ui.set_week_text("2".into());

        assert_eq!(ui.save_edit(), None);
        assert_eq!(ui.validation_error(), Some(&ValidationError::IncompleteSubject));
        assert!(ui.is_editing("d1"));

        ui.set_number_text("3".into());
        let commit = ui.save_edit().unwrap();
        assert_eq!(ui.validation_error(), None);
        assert!(ui.is_editing("d1"));

        ui.commit_succeeded(&commit.day_id);
        assert!(ui.editing().is_none());
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut ui = TimetableInteraction::default();
        ui.start_edit(&record("d1", Some((1, 1))));
        ui.cancel_edit();
        assert!(ui.editing().is_none());
        assert_eq!(ui.save_edit(), None);
    }

    #[test]
    fn test_drop_on_monday_is_noop() {
        let records = vec![DayRecord {
            id: "mon".to_string(),
            date: date(2024, 3, 4),
            subject: None,
        }];
        let march = CalendarMonth::new(2024, 3).unwrap();
        let cells = render_timetable(march, WeekStart::Sunday, &records);
        let monday = cells.iter().find(|c| c.date == date(2024, 3, 4)).unwrap();

        let mut drag = DragSession::default();
        drag.drag_start(1, 2);
        let before = drag.clone();

        assert!(!drag.drag_over(monday));
        assert_eq!(drag.drop_on(monday), None);
        assert_eq!(drag, before);
    }

    #[test]
    fn test_drop_consumes_payload() {
        let records = vec![DayRecord {
            id: "tue".to_string(),
            date: date(2024, 3, 5),
            subject: Some(SubjectPair { week: 4, number: 4 }),
        }];
        let march = CalendarMonth::new(2024, 3).unwrap();
        let cells = render_timetable(march, WeekStart::Sunday, &records);
        let tuesday = cells.iter().find(|c| c.date == date(2024, 3, 5)).unwrap();
        let wednesday = cells.iter().find(|c| c.date == date(2024, 3, 6)).unwrap();

        let mut drag = DragSession::default();
        assert!(!drag.drag_over(tuesday));
        drag.drag_start(2, 3);
        assert!(drag.drag_over(tuesday));

        // no record for Wednesday: rejected, payload kept
        assert_eq!(drag.drop_on(wednesday), None);
        assert!(drag.is_dragging());

        let commit = drag.drop_on(tuesday).unwrap();
        assert_eq!(commit.day_id, "tue");
        assert_eq!(commit.subject, Some(SubjectPair { week: 2, number: 3 }));
        assert!(!drag.is_dragging());

        // nothing left to drop
        assert_eq!(drag.drop_on(tuesday), None);
    }
}
