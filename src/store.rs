// Course file sink. Every created course is appended as one CSV row; the
// file is never read back. Each append opens, writes, flushes and closes.

use crate::student::Course;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default file name, relative to the working directory.
pub const DEFAULT_COURSE_FILE: &str = "courses.csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only CSV file of created courses.
#[derive(Debug, Clone)]
pub struct CourseFile {
    path: PathBuf,
}

impl CourseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CourseFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one course row, preceded by the
    /// `course_id,course_name,instructor` header if the file is empty.
    pub fn append(&self, course: &Course) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.open_error(source))?;
        let is_empty = file
            .metadata()
            .map_err(|source| self.open_error(source))?
            .len()
            == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);
        writer.serialize(course).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        writer.flush().map_err(|source| StoreError::Flush {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), course_id = %course.course_id, header = is_empty, "appended course row");
        Ok(())
    }

    fn open_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Open {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn header_written_once() {
        let dir = TempDir::new().unwrap();
        let store = CourseFile::new(dir.path().join("courses.csv"));
        store.append(&Course::new("C1", "Algebra", "Lee")).unwrap();
        store.append(&Course::new("C2", "Biology", "Kim")).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "course_id,course_name,instructor\nC1,Algebra,Lee\nC2,Biology,Kim\n"
        );
    }

    #[test]
    fn existing_file_gets_no_second_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courses.csv");
        std::fs::write(&path, "course_id,course_name,instructor\nC0,Art,Ray\n").unwrap();

        CourseFile::new(&path)
            .append(&Course::new("C1", "Algebra", "Lee"))
            .unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("course_id").count(), 1);
        assert!(contents.ends_with("C0,Art,Ray\nC1,Algebra,Lee\n"));
    }

    #[test]
    fn values_with_separators_are_quoted() {
        let dir = TempDir::new().unwrap();
        let store = CourseFile::new(dir.path().join("courses.csv"));
        store
            .append(&Course::new("C1", "Art, History", "Say \"Hi\""))
            .unwrap();
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.ends_with("C1,\"Art, History\",\"Say \"\"Hi\"\"\"\n"));
    }

    #[test]
    fn missing_directory_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let store = CourseFile::new(dir.path().join("missing").join("courses.csv"));
        let err = store.append(&Course::new("C1", "Algebra", "Lee")).unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
    }
}
