//! Template layout and writer.
//!
//! The template holds two unrelated tables side by side, separated by one
//! blank column:
//!
//! ```text
//! course … type │ │ Course code … program
//! ──────────────┼─┼──────────────────────
//! schedule[0]   │ │ courses[0]
//! schedule[1]   │ │ courses[1]
//! schedule[2]   │ │
//! ```
//!
//! Row `i` pairs the i-th schedule entry with the i-th *distinct* course,
//! which is not necessarily the course that entry refers to. Downstream
//! readers treat the two halves independently, so this positional pairing
//! is kept as is.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::timetable::Timetable;
use crate::error::CsvResult;
use crate::models::{COURSE_COLUMNS, SCHEDULE_COLUMNS};

/// Total template width: schedule, separator, course info.
pub const OUTPUT_COLUMNS: usize = SCHEDULE_COLUMNS + 1 + COURSE_COLUMNS;

/// Template header row.
pub const OUTPUT_HEADER: [&str; OUTPUT_COLUMNS] = [
    "course",
    "class",
    "day",
    "start",
    "end",
    "location",
    "lecturer",
    "type",
    "",
    "Course code",
    "Course name",
    "Credit hours",
    "Level",
    "program",
];

/// Lay out the data rows of the template.
pub fn layout_rows(timetable: &Timetable) -> Vec<[&str; OUTPUT_COLUMNS]> {
    let schedule = timetable.schedule();
    let courses = timetable.courses();

    (0..timetable.row_count())
        .map(|i| {
            let mut row = [""; OUTPUT_COLUMNS];
            if let Some(entry) = schedule.get(i) {
                row[..SCHEDULE_COLUMNS].copy_from_slice(&entry.cells());
            }
            if let Some(course) = courses.get(i) {
                row[SCHEDULE_COLUMNS + 1..].copy_from_slice(&course.cells());
            }
            row
        })
        .collect()
}

/// Write the template (header + data rows) as comma-separated, CRLF-terminated CSV.
pub fn write_template<W: Write>(writer: W, timetable: &Timetable) -> CsvResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(OUTPUT_HEADER)?;
    for row in layout_rows(timetable) {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Create (or truncate) `path` and write the template into it.
pub fn write_template_file<P: AsRef<Path>>(path: P, timetable: &Timetable) -> CsvResult<()> {
    let file = File::create(path.as_ref())?;
    write_template(file, timetable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceRow;
    use crate::transform::timetable::build_timetable;

    fn row(code: &str, name: &str, day: &str) -> SourceRow {
        SourceRow {
            course_code: code.into(),
            course_name: name.into(),
            day: day.into(),
            slot: "09:00-10:50".into(),
            teaching_method: "LEC".into(),
            ..Default::default()
        }
    }

    fn render(timetable: &Timetable) -> String {
        let mut buf = Vec::new();
        write_template(&mut buf, timetable).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_literal() {
        let out = render(&Timetable::new());
        assert_eq!(
            out,
            "course,class,day,start,end,location,lecturer,type,,Course code,Course name,Credit hours,Level,program\r\n"
        );
    }

    #[test]
    fn test_rows_are_positional_not_joined() {
        let rows = vec![
            row("CS101", "Intro", "Mon"),
            row("CS101", "Intro", "Tue"),
            row("CS102", "Data", "Wed"),
        ];
        let timetable = build_timetable(&rows);
        let layout = layout_rows(&timetable);

        assert_eq!(layout.len(), 3);
        // Row 1 is a CS101 meeting but carries the second distinct course
        assert_eq!(layout[1][0], "CS101");
        assert_eq!(layout[1][9], "CS102");
        assert_eq!(&layout[2][9..], &["", "", "", "", ""]);
        assert!(layout.iter().all(|r| r[8].is_empty()));
    }

    #[test]
    fn test_every_row_is_fourteen_cells() {
        let rows = vec![row("A1", "Alpha", "Mon"), row("B2", "Beta", "Tue")];
        let out = render(&build_timetable(&rows));

        for line in out.lines() {
            assert_eq!(line.split(',').count(), OUTPUT_COLUMNS);
        }
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut source = row("CS101", "Intro, Part 1", "Mon");
        source.staff = "Smith, J.".into();
        let out = render(&build_timetable([&source]));

        let data = out.lines().nth(1).unwrap();
        assert_eq!(
            data,
            "CS101,,Mon,09:00,10:50,,\"Smith, J.\",LEC,,CS101,\"Intro, Part 1\",,,"
        );
    }
}
