use serde::{Deserialize, Serialize};

pub const FEMALE: &str = "female";
pub const MALE: &str = "male";

/// One student as loaded from the roster resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    // Missing genders load as "" and end up in neither gender table.
    #[serde(default)]
    pub gender: String,
    pub class: u32,
    pub marks: f64,
    pub passing: bool,
    pub email: String,
}

impl StudentRecord {
    /// `"first last"`, the key used by name search and name sorting.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-character avatar taken from the first name.
    pub fn avatar(&self) -> String {
        self.first_name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn is_female(&self) -> bool {
        self.gender.to_lowercase() == FEMALE
    }

    pub fn is_male(&self) -> bool {
        self.gender.to_lowercase() == MALE
    }

    pub fn status_label(&self) -> &'static str {
        if self.passing {
            "Passing"
        } else {
            "Failed"
        }
    }

    /// Marks without a trailing `.0` for whole numbers.
    pub fn marks_display(&self) -> String {
        if self.marks.fract() == 0.0 && self.marks.is_finite() {
            format!("{:.0}", self.marks)
        } else {
            format!("{}", self.marks)
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::StudentRecord;

    #[allow(clippy::too_many_arguments)]
    pub fn student(
        id: i64,
        first: &str,
        last: &str,
        gender: &str,
        class: u32,
        marks: f64,
        passing: bool,
        email: &str,
    ) -> StudentRecord {
        StudentRecord {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            gender: gender.to_string(),
            class,
            marks,
            passing,
            email: email.to_string(),
        }
    }

    /// The two-student roster used throughout the query and controller tests.
    pub fn bob_and_amy() -> Vec<StudentRecord> {
        vec![
            student(1, "Bob", "Lee", "Male", 5, 40.0, false, "b@x.com"),
            student(2, "Amy", "Ng", "Female", 5, 90.0, true, "a@x.com"),
        ]
    }
}
