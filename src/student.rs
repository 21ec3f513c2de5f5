// Domain model: one student, the courses they are enrolled in, and a grade
// per course ID. Nothing here touches the console or the disk.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// A course as entered by the student. Field order is also the column
/// order of the course file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    pub instructor: String,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Course {
            course_id: course_id.into(),
            course_name: course_name.into(),
            instructor: instructor.into(),
        }
    }
}

/// Lookup failures for operations that address a course by ID.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("Course with ID {0} not found")]
    CourseNotFound(String),
}

/// The session's student record. Identity fields are set once at
/// onboarding; courses and grades change as the menu is used.
#[derive(Debug, Clone)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub email: String,
    courses: Vec<Course>,
    // Sorted by course ID, which fixes the order of the grade listing.
    grades: BTreeMap<String, i64>,
}

impl Student {
    pub fn new(
        name: String,
        email: String,
        student_id: String,
        age: i64,
        gender: String,
    ) -> Self {
        Student {
            student_id,
            name,
            age,
            gender,
            email,
            courses: Vec::new(),
            grades: BTreeMap::new(),
        }
    }

    /// Enrolled courses in enrollment order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn grades(&self) -> &BTreeMap<String, i64> {
        &self.grades
    }

    /// Append a course. Duplicate IDs are allowed.
    pub fn enroll(&mut self, course: Course) {
        debug!(course_id = %course.course_id, "enrolled course");
        self.courses.push(course);
    }

    /// First enrolled course with the given ID.
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    /// Remove the first course with the given ID and drop its grade.
    /// Other courses keep their relative order.
    pub fn remove_course(&mut self, course_id: &str) -> Result<Course, EnrollmentError> {
        let index = self
            .courses
            .iter()
            .position(|c| c.course_id == course_id)
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_id.to_string()))?;
        let removed = self.courses.remove(index);
        self.grades.remove(course_id);
        debug!(course_id, "removed course");
        Ok(removed)
    }

    /// Insert or overwrite the grade for an enrolled course.
    pub fn set_grade(&mut self, course_id: &str, grade: i64) -> Result<(), EnrollmentError> {
        if self.find_course(course_id).is_none() {
            return Err(EnrollmentError::CourseNotFound(course_id.to_string()));
        }
        self.grades.insert(course_id.to_string(), grade);
        debug!(course_id, grade, "recorded grade");
        Ok(())
    }

    /// Arithmetic mean of all recorded grades, `None` when there are none.
    pub fn gpa(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: f64 = self.grades.values().map(|&g| g as f64).sum();
        Some(total / self.grades.len() as f64)
    }
}
