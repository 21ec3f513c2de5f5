// Field validators: pure predicates over already-trimmed input.
// None of them trim; the UI trims before calling.

use regex::Regex;
use std::sync::LazyLock;

/// Genders accepted at onboarding, compared case-insensitively.
pub const VALID_GENDERS: &[&str] = &["m", "f", "male", "female"];

/// Top-level suffixes an email address may end with.
pub const VALID_EMAIL_SUFFIXES: &[&str] = &["com", "edu", "net"];

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("Invalid name regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = VALID_EMAIL_SUFFIXES.join("|");
    Regex::new(&format!(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.({suffixes})$"))
        .expect("Invalid email regex")
});

static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9/\s]+$").expect("Invalid student ID regex"));

static COURSE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid course ID regex"));

/// A person's name: letters and whitespace only, at least one character.
pub fn is_valid_name(name: &str) -> bool {
    LETTERS_AND_SPACES.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Student IDs are permissive: letters, digits, `/` and whitespace.
pub fn is_valid_student_id(student_id: &str) -> bool {
    STUDENT_ID.is_match(student_id)
}

pub fn is_valid_gender(gender: &str) -> bool {
    VALID_GENDERS
        .iter()
        .any(|valid| gender.eq_ignore_ascii_case(valid))
}

pub fn is_valid_course_name(name: &str) -> bool {
    LETTERS_AND_SPACES.is_match(name)
}

/// Course IDs are letters and digits with no separators.
pub fn is_valid_course_id(course_id: &str) -> bool {
    COURSE_ID.is_match(course_id)
}

pub fn is_valid_instructor(name: &str) -> bool {
    LETTERS_AND_SPACES.is_match(name)
}
