//! Domain models for the schedule conversion.
//!
//! - [`SourceRow`] - the consumed columns of one downloaded export row
//! - [`ScheduleEntry`] - one class meeting in template layout
//! - [`CourseInfo`] - per-course metadata block, one per distinct code
//! - [`SessionType`] - normalized teaching method

// =============================================================================
// Input Row
// =============================================================================

/// One row of the downloaded export, keyed by header name.
///
/// Filled by [`crate::parser::parse_rows`]; columns absent from the
/// export read as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    /// "Course Code"
    pub course_code: String,
    pub day: String,
    pub slot: String,
    pub section: String,
    /// "Building/Room"
    pub room: String,
    /// "Staff Name"
    pub staff: String,
    pub teaching_method: String,
    pub course_name: String,
}

impl SourceRow {
    /// A row is usable only when both the course code and the day are present.
    pub fn is_complete(&self) -> bool {
        !self.course_code.trim().is_empty() && !self.day.trim().is_empty()
    }
}

// =============================================================================
// Session Type
// =============================================================================

/// Teaching method, normalized to a template type code.
///
/// The classifier is open: any unrecognized method is carried through
/// as [`SessionType::Other`] in its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionType {
    /// LEC
    Lecture,
    /// LAB
    Lab,
    /// TUT (exported as "TUTORIALS")
    Tutorial,
    /// Anything else, uppercased and trimmed.
    Other(String),
}

impl SessionType {
    /// Classify a free-text teaching method label.
    pub fn from_method(method: &str) -> Self {
        let normalized = method.trim().to_uppercase();
        match normalized.as_str() {
            "LEC" => Self::Lecture,
            "LAB" => Self::Lab,
            "TUTORIALS" => Self::Tutorial,
            _ => Self::Other(normalized),
        }
    }

    /// Template type code.
    pub fn code(&self) -> &str {
        match self {
            Self::Lecture => "LEC",
            Self::Lab => "LAB",
            Self::Tutorial => "TUT",
            Self::Other(code) => code,
        }
    }
}

// =============================================================================
// Schedule Entry
// =============================================================================

/// Number of schedule columns in the template.
pub const SCHEDULE_COLUMNS: usize = 8;

/// One class meeting, in template column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub course: String,
    pub section: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub lecturer: String,
    pub session_type: String,
}

impl ScheduleEntry {
    /// Cells in template order: course, class, day, start, end, location, lecturer, type.
    pub fn cells(&self) -> [&str; SCHEDULE_COLUMNS] {
        [
            self.course.as_str(),
            self.section.as_str(),
            self.day.as_str(),
            self.start.as_str(),
            self.end.as_str(),
            self.location.as_str(),
            self.lecturer.as_str(),
            self.session_type.as_str(),
        ]
    }
}

// =============================================================================
// Course Info
// =============================================================================

/// Number of course-info columns in the template.
pub const COURSE_COLUMNS: usize = 5;

/// Per-course metadata block.
///
/// Credit hours, level and program are not present in the downloaded
/// export, so they stay empty for the user to fill in by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInfo {
    pub code: String,
    pub name: String,
    pub credit_hours: String,
    pub level: String,
    pub program: String,
}

impl CourseInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit_hours: String::new(),
            level: String::new(),
            program: String::new(),
        }
    }

    /// Cells in template order: code, name, credit hours, level, program.
    pub fn cells(&self) -> [&str; COURSE_COLUMNS] {
        [
            self.code.as_str(),
            self.name.as_str(),
            self.credit_hours.as_str(),
            self.level.as_str(),
            self.program.as_str(),
        ]
    }
}
