//! Build the two collections of a conversion run from export rows.
//!
//! ```text
//! Export rows                       Timetable
//! ┌──────────────────────────┐      ┌──────────────────────┐   ┌──────────────┐
//! │ CS101, A, Mon, LEC       │      │ CS101 A Mon  LEC     │   │ CS101 Intro  │
//! │ CS101, B, Tue, LAB       │  →   │ CS101 B Tue  LAB     │   │ CS102 Data   │
//! │ CS102, A, Wed, TUTORIALS │      │ CS102 A Wed  TUT     │   └──────────────┘
//! │ (no day)                 │      └──────────────────────┘       courses
//! └──────────────────────────┘            schedule
//! ```
//!
//! Schedule entries keep input order. Courses keep first-seen order and
//! are never overwritten by later rows with the same code.

use std::collections::HashSet;

use super::normalize::{classify_session_type, parse_time_slot};
use crate::models::{CourseInfo, ScheduleEntry, SourceRow};

/// Schedule entries and distinct courses of one run.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    schedule: Vec<ScheduleEntry>,
    courses: Vec<CourseInfo>,
    seen: HashSet<String>,
    skipped: usize,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one export row.
    ///
    /// Rows without a course code or day are counted as skipped and
    /// contribute nothing. Returns whether the row was kept.
    pub fn push_row(&mut self, row: &SourceRow) -> bool {
        if !row.is_complete() {
            self.skipped += 1;
            return false;
        }

        let entry = schedule_entry(row);

        if !self.seen.contains(&entry.course) {
            self.seen.insert(entry.course.clone());
            self.courses
                .push(CourseInfo::new(entry.course.clone(), row.course_name.trim()));
        }

        self.schedule.push(entry);
        true
    }

    /// Schedule entries in input order.
    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Distinct courses in first-seen order.
    pub fn courses(&self) -> &[CourseInfo] {
        &self.courses
    }

    /// Rows dropped for missing course code or day.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of data rows in the template: the longer of the two tables.
    pub fn row_count(&self) -> usize {
        self.schedule.len().max(self.courses.len())
    }
}

/// Build a timetable from export rows.
pub fn build_timetable<'a, I>(rows: I) -> Timetable
where
    I: IntoIterator<Item = &'a SourceRow>,
{
    let mut timetable = Timetable::new();
    for row in rows {
        timetable.push_row(row);
    }
    timetable
}

fn schedule_entry(row: &SourceRow) -> ScheduleEntry {
    let (start, end) = parse_time_slot(&row.slot);

    ScheduleEntry {
        course: row.course_code.trim().to_string(),
        section: row.section.trim().to_string(),
        day: row.day.trim().to_string(),
        start,
        end,
        location: row.room.trim().to_string(),
        lecturer: row.staff.trim().to_string(),
        session_type: classify_session_type(&row.teaching_method),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, name: &str, day: &str, method: &str) -> SourceRow {
        SourceRow {
            course_code: code.into(),
            course_name: name.into(),
            day: day.into(),
            teaching_method: method.into(),
            slot: "09:00-10:50".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_entry_fields_are_normalized() {
        let source = SourceRow {
            course_code: " CS101 ".into(),
            day: "Mon ".into(),
            slot: "09:00-10:50".into(),
            section: " A".into(),
            room: " B1 ".into(),
            staff: "Dr. X ".into(),
            teaching_method: "lec".into(),
            course_name: " Intro ".into(),
        };
        let timetable = build_timetable([&source]);

        let entry = &timetable.schedule()[0];
        assert_eq!(
            entry.cells(),
            ["CS101", "A", "Mon", "09:00", "10:50", "B1", "Dr. X", "LEC"]
        );
        assert_eq!(timetable.courses()[0].cells(), ["CS101", "Intro", "", "", ""]);
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let rows = vec![
            row("CS101", "Intro", "Mon", "LEC"),
            row("", "Ghost", "Tue", "LEC"),
            row("CS102", "Data", "  ", "LAB"),
            row("CS103", "Nets", "Wed", "LAB"),
        ];
        let timetable = build_timetable(&rows);

        assert_eq!(timetable.schedule().len(), 2);
        assert_eq!(timetable.skipped(), 2);
        let codes: Vec<_> = timetable.courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CS101", "CS103"]);
    }

    #[test]
    fn test_first_course_occurrence_wins() {
        let rows = vec![
            row("CS101", "Intro", "Mon", "LEC"),
            row("CS102", "Data", "Tue", "LAB"),
            row("CS101", "Renamed", "Wed", "Tutorials"),
        ];
        let timetable = build_timetable(&rows);

        assert_eq!(timetable.schedule().len(), 3);
        assert_eq!(timetable.courses().len(), 2);
        assert_eq!(timetable.courses()[0].name, "Intro");
        assert_eq!(timetable.schedule()[2].session_type, "TUT");
    }

    #[test]
    fn test_course_key_is_trimmed_code() {
        let rows = vec![row("CS101", "Intro", "Mon", "LEC"), row(" CS101 ", "Other", "Tue", "LEC")];
        let timetable = build_timetable(&rows);

        assert_eq!(timetable.courses().len(), 1);
    }

    #[test]
    fn test_courses_never_outnumber_schedule() {
        let rows = vec![
            row("A1", "", "Mon", ""),
            row("A1", "", "Tue", ""),
            row("B2", "", "Mon", ""),
            row("", "", "", ""),
        ];
        let timetable = build_timetable(&rows);

        assert!(timetable.courses().len() <= timetable.schedule().len());
        assert_eq!(timetable.row_count(), timetable.schedule().len());
        for course in timetable.courses() {
            assert!(timetable.schedule().iter().any(|e| e.course == course.code));
        }
    }
}
