#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::student::{Status, Student};

/// Formats grades as `[a, b, c]`.
pub fn format_grades(grades: &[i32]) -> String {
    format!("[{}]", grades.iter().join(", "))
}

/// Renders a status, green for adults and yellow for minors.
pub fn paint_status(status: Status) -> String {
    match status {
        Status::Adult => status.to_string().green().to_string(),
        Status::Minor => status.to_string().yellow().to_string(),
    }
}

#[derive(Tabled, Clone)]
/// One table row describing a student.
pub struct StudentRow {
    #[tabled(rename = "Name")]
    /// * `name`: normalized name
    pub(crate) name:    String,
    #[tabled(rename = "Age")]
    /// * `age`: age in years
    pub(crate) age:     u32,
    #[tabled(rename = "Adult")]
    /// * `adult`: whether the student is currently an adult
    pub(crate) adult:   bool,
    #[tabled(rename = "Grades")]
    /// * `grades`: grades in order
    pub(crate) grades:  String,
    #[tabled(rename = "Average")]
    /// * `average`: mean grade, or `-` without grades
    pub(crate) average: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            name:    student.name().to_string(),
            age:     student.age(),
            adult:   student.is_adult(),
            grades:  format_grades(student.grades()),
            average: student
                .average()
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_else(|_| "-".to_string()),
        }
    }
}

/// Renders `students` as a table under `title`. The rows read `is_adult`
/// rather than `status` so that rendering never freezes a status.
pub fn student_table<'a>(
    title: impl Display,
    students: impl IntoIterator<Item = &'a Student>,
) -> String {
    let rows: Vec<StudentRow> = students.into_iter().map(StudentRow::from).collect();
    Table::new(&rows)
        .with(Panel::header(title.to_string()))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
