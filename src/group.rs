#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, ops::Index};

use crate::student::{Student, StudentError};

/// An enum to represent possible errors when querying a group.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The group has no members.
    #[error("The group is empty, there is no top student.")]
    Empty,
    /// An index outside of `0..len` was requested.
    #[error("Index {index} is out of range for a group of {len} students.")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of students in the group.
        len:   usize,
    },
    /// A member's average could not be computed.
    #[error(transparent)]
    Student(#[from] StudentError),
}

#[derive(Debug, Clone, Default)]
/// A fixed, ordered set of students borrowed from their owners.
pub struct Group<'a> {
    /// Members in construction order.
    students: Vec<&'a Student>,
}

impl<'a> Group<'a> {
    /// Creates a group from `students`, keeping their order.
    pub fn new(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            students: students.into_iter().collect(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns the student at `index`.
    pub fn get(&self, index: usize) -> Result<&'a Student, GroupError> {
        self.students
            .get(index)
            .copied()
            .ok_or(GroupError::IndexOutOfRange {
                index,
                len: self.students.len(),
            })
    }

    /// Iterates over members in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Student> + '_ {
        self.students.iter().copied()
    }

    /// Returns the member with the highest average. On ties the earliest
    /// member wins.
    pub fn top_student(&self) -> Result<&'a Student, GroupError> {
        let mut best: Option<(&'a Student, f64)> = None;
        for student in self.iter() {
            let average = student.average()?;
            match best {
                Some((_, top)) if average.total_cmp(&top) != Ordering::Greater => {}
                _ => best = Some((student, average)),
            }
        }
        best.map(|(student, _)| student).ok_or(GroupError::Empty)
    }
}

impl<'a> From<Vec<&'a Student>> for Group<'a> {
    fn from(students: Vec<&'a Student>) -> Self {
        Self { students }
    }
}

impl<'a> FromIterator<&'a Student> for Group<'a> {
    fn from_iter<T: IntoIterator<Item = &'a Student>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Panics on an out-of-range index, like slice indexing.
impl Index<usize> for Group<'_> {
    type Output = Student;

    fn index(&self, index: usize) -> &Student {
        self.students[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reports_bounds() {
        let a = Student::with_details("a", 1, [1]);
        let group = Group::new([&a]);
        assert_eq!(group.get(0).map(Student::name), Ok("A"));
        assert_eq!(group.get(1).err(), Some(GroupError::IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn top_student_of_empty_group_fails() {
        let group = Group::default();
        assert_eq!(group.top_student().err(), Some(GroupError::Empty));
    }

    #[test]
    fn member_without_grades_propagates() {
        let a = Student::with_details("a", 1, [50]);
        let b = Student::new("b");
        let group = Group::new([&a, &b]);
        assert_eq!(
            group.top_student().err(),
            Some(GroupError::Student(StudentError::EmptyGrades("B".to_string())))
        );
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_end_panics() {
        let a = Student::with_details("a", 1, [1]);
        let group = Group::new([&a]);
        let _ = &group[3];
    }
}
