#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::{
    config::Settings,
    group::Group,
    report::{format_grades, paint_status, student_table},
    source::{GradeSource, join_fetch, spawn_fetch},
    student::{Status, Student, student},
};

#[derive(Debug, Clone, Serialize)]
/// Everything the demonstration observed, in the order it happened.
pub struct Summary {
    /// Whether the first student was an adult after setting the age.
    pub first_is_adult:      bool,
    /// The first student's status at first read.
    pub first_status:        Status,
    /// Grades returned by the source.
    pub fetched_grades:      Vec<i32>,
    /// First student combined with the second.
    pub combined:            Student,
    /// Second student with every grade doubled.
    pub boosted:             Student,
    /// Name of the best student in the group.
    pub top_student:         String,
    /// First student's grades before the uniform bonus.
    pub grades_before_bonus: Vec<i32>,
    /// First student's grades after the uniform bonus.
    pub grades_after_bonus:  Vec<i32>,
    /// Final state of the first and second students.
    pub students:            Vec<Student>,
}

/// Points added to every grade at the end of the run.
pub const BONUS: i32 = 5;

/// Runs the demonstration against `source`, fetching under `settings`.
pub async fn run(settings: &Settings, source: Arc<dyn GradeSource>) -> Result<Summary> {
    run_with_cancel(settings, source, CancellationToken::new()).await
}

/// Same as [`run`], but the fetch stops early when `cancel` fires.
pub async fn run_with_cancel(
    settings: &Settings,
    source: Arc<dyn GradeSource>,
    cancel: CancellationToken,
) -> Result<Summary> {
    let mut first = Student::new("  alice  ");
    first.set_age(19);
    let first_is_adult = first.is_adult();
    let first_status = first.status();
    tracing::info!("Is adult: {first_is_adult}, Status: {first_status}");

    let pending = spawn_fetch(source, settings.timeout(), cancel);
    let fetched_grades = join_fetch(pending)
        .await
        .with_context(|| format!("Could not fetch grades for {}", first.name()))?;
    first.update_grades(fetched_grades.iter().copied());

    let second = student().name("Bob").age(20).grades(vec![60, 70, 80]).build();
    let combined = &first + &second;
    let boosted = &second * 2;

    let top_student = {
        let group = Group::new([&first, &second, &boosted]);
        group
            .top_student()
            .context("Could not pick a top student")?
            .name()
            .to_string()
    };
    tracing::info!("Top student: {top_student}");

    let grades_before_bonus = first.grades().to_vec();
    first.process_grades(|g| g + BONUS);
    let grades_after_bonus = first.grades().to_vec();
    tracing::info!(
        "{} grades: {} -> {}",
        first.name(),
        format_grades(&grades_before_bonus),
        format_grades(&grades_after_bonus)
    );

    Ok(Summary {
        first_is_adult,
        first_status,
        fetched_grades,
        combined,
        boosted,
        top_student,
        grades_before_bonus,
        grades_after_bonus,
        students: vec![first, second],
    })
}

impl Summary {
    /// Human readable rendering for the terminal.
    pub fn render(&self) -> String {
        let mut students: Vec<&Student> = self.students.iter().collect();
        students.push(&self.boosted);
        students.push(&self.combined);

        [
            format!(
                "Is adult: {}, Status: {}",
                self.first_is_adult,
                paint_status(self.first_status)
            ),
            format!("Fetched grades: {}", format_grades(&self.fetched_grades)),
            format!("Top student: {}", self.top_student),
            format!("Student1 grades: {}", format_grades(&self.grades_before_bonus)),
            format!(
                "Student1 grades after process: {}",
                format_grades(&self.grades_after_bonus)
            ),
            student_table("Students", students),
        ]
        .join("\n")
    }
}
