#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    ops::{Add, Mul},
    sync::OnceLock,
};

use bon::builder;
use serde::Serialize;

/// Age at which a student counts as an adult.
pub const ADULT_AGE: u32 = 18;

/// An enum to represent possible errors when deriving values from a student.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// The average was requested for a student without any grades.
    #[error("Cannot compute an average for `{0}`: no grades recorded.")]
    EmptyGrades(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Coarse classification of a student, frozen the first time it is read.
pub enum Status {
    /// Aged 18 or over at the time of first read.
    Adult,
    /// Under 18 at the time of first read.
    Minor,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Adult => write!(f, "Adult"),
            Status::Minor => write!(f, "Minor"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// A student with a normalized name, a non-negative age and a list of grades.
pub struct Student {
    /// Trimmed name with its first character upper-cased.
    name:   String,
    /// Age in years.
    age:    u32,
    /// Grades in insertion order.
    grades: Vec<i32>,
    /// Status computed on first access and never refreshed.
    #[serde(skip)]
    status: OnceLock<Status>,
}

/// Trims `raw` and upper-cases its first character, leaving the rest as is.
/// A first character whose upper-case form is more than one character (such
/// as `ß`) is kept unchanged.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => std::iter::once(uppercase_char(first)).chain(chars).collect(),
        None => String::new(),
    }
}

/// Single-character upper-case mapping of `c`, or `c` itself when the full
/// mapping would expand.
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl Student {
    /// Creates a new student with age 0 and no grades.
    ///
    /// * `name`: the raw name, normalized before it is stored.
    pub fn new(name: impl AsRef<str>) -> Self {
        let student = Self {
            name:   normalize_name(name.as_ref()),
            age:    0,
            grades: Vec::new(),
            status: OnceLock::new(),
        };
        tracing::info!("Student object created: {}", student.name);
        student
    }

    /// Creates a new student with all attributes supplied.
    ///
    /// * `name`: the raw name, normalized before it is stored.
    /// * `age`: applied through [`Student::set_age`], so a negative value
    ///   leaves the age at 0.
    /// * `grades`: the initial grades, in order.
    pub fn with_details(
        name: impl AsRef<str>,
        age: i64,
        grades: impl IntoIterator<Item = i32>,
    ) -> Self {
        let mut student = Self::new(name);
        student.set_age(age);
        student.grades = grades.into_iter().collect();
        student
    }

    /// Returns the normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name, normalizing the new value.
    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = normalize_name(name.as_ref());
    }

    /// Returns the age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Replaces the age if `age` is non-negative; otherwise does nothing.
    pub fn set_age(&mut self, age: i64) {
        match u32::try_from(age) {
            Ok(age) => self.age = age,
            Err(_) if age < 0 => {
                tracing::debug!("Ignoring negative age {age} for {}", self.name)
            }
            Err(_) => tracing::warn!("Ignoring out of range age {age} for {}", self.name),
        }
    }

    /// Returns the grades, in order.
    pub fn grades(&self) -> &[i32] {
        &self.grades
    }

    /// Replaces all grades with `grades`.
    pub fn update_grades(&mut self, grades: impl IntoIterator<Item = i32>) {
        self.grades = grades.into_iter().collect();
    }

    /// Applies `operation` to every grade in place.
    pub fn process_grades<F>(&mut self, operation: F)
    where
        F: FnMut(i32) -> i32,
    {
        self.grades = self.grades.iter().copied().map(operation).collect();
    }

    /// Arithmetic mean of the grades.
    pub fn average(&self) -> Result<f64, StudentError> {
        if self.grades.is_empty() {
            return Err(StudentError::EmptyGrades(self.name.clone()));
        }
        let sum: i64 = self.grades.iter().map(|&g| i64::from(g)).sum();
        Ok(sum as f64 / self.grades.len() as f64)
    }

    /// Whether the student is currently 18 or older.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Status as of the first call. Later age changes do not affect it.
    pub fn status(&self) -> Status {
        *self.status.get_or_init(|| {
            if self.is_adult() {
                Status::Adult
            } else {
                Status::Minor
            }
        })
    }

    /// Returns a new student with this student's name and age, and the grades
    /// of `self` followed by the grades of `other`.
    pub fn combine(&self, other: &Student) -> Student {
        let grades = self.grades.iter().chain(other.grades.iter()).copied();
        Student::with_details(&self.name, i64::from(self.age), grades)
    }

    /// Returns a new student with every grade multiplied by `multiplier`.
    pub fn scale_by(&self, multiplier: i32) -> Student {
        let grades = self.grades.iter().map(|g| g.wrapping_mul(multiplier));
        Student::with_details(&self.name, i64::from(self.age), grades)
    }

    /// Two students match when their names and averages are equal. Age and
    /// the individual grades are not compared.
    pub fn equals_by_name_and_average(&self, other: &Student) -> bool {
        if self.name != other.name {
            return false;
        }
        match (self.average(), other.average()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Builder-friendly constructor for `Student` with optional age and grades.
#[builder(finish_fn = build)]
pub fn student(
    #[builder(into)] name: String,
    age: Option<i64>,
    grades: Option<Vec<i32>>,
) -> Student {
    Student::with_details(name, age.unwrap_or(0), grades.unwrap_or_default())
}

impl Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}

/// Not reflexive for students without grades, hence no `Eq`.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.equals_by_name_and_average(other)
    }
}

impl Add<&Student> for &Student {
    type Output = Student;

    fn add(self, rhs: &Student) -> Student {
        self.combine(rhs)
    }
}

impl Add for Student {
    type Output = Student;

    fn add(self, rhs: Student) -> Student {
        self.combine(&rhs)
    }
}

impl Mul<i32> for &Student {
    type Output = Student;

    fn mul(self, rhs: i32) -> Student {
        self.scale_by(rhs)
    }
}

impl Mul<i32> for Student {
    type Output = Student;

    fn mul(self, rhs: i32) -> Student {
        self.scale_by(rhs)
    }
}
