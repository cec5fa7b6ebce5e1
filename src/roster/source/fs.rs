use super::{parse_records, DataSource};
use crate::error::{RosterError, Result};
use crate::model::StudentRecord;
use std::fs;
use std::path::PathBuf;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch_all(&self) -> Result<Vec<StudentRecord>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| RosterError::fetch(self.location(), e))?;
        parse_records(&content)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
