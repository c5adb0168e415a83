use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldError, Result, ValidationErrors};

/// Minimum lengths enforced by the registration form.
pub const MIN_USER_ID_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The pre-login student registration form. The password is checked against
/// the length rule but never stored; signing in uses the fixed demo
/// credential rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSpec {
    pub name: String,
    pub user_id: String,
    pub password: String,
    pub ila: String,
}

impl StudentSpec {
    /// Check the form, reporting all failures at once. Length rules only
    /// apply once a field is present, matching the form's inline errors.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(FieldError::required("name", &self.name, "Name is required"));
        if self.user_id.trim().is_empty() {
            errors.push(FieldError::new("userId", "User ID is required"));
        } else if self.user_id.len() < MIN_USER_ID_LENGTH {
            errors.push(FieldError::new(
                "userId",
                format!("User ID must be at least {MIN_USER_ID_LENGTH} characters"),
            ));
        }
        if self.password.trim().is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        } else if self.password.len() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        errors.extend(FieldError::required("ila", &self.ila, "ILA is required"));
        errors
    }
}

/// A registered student. The password is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub user_id: String,
    pub ila: String,
}

/// Directory of registered students, in registration order.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a student. User ids must be unique.
    pub fn register(&mut self, spec: StudentSpec) -> Result<Student> {
        ValidationErrors::into_result(spec.validate())?;

        // Check user id uniqueness.
        if self.get(&spec.user_id).is_some() {
            return Err(Error::BadRequest(format!(
                "User ID already in use: {}",
                spec.user_id
            )));
        }

        let student = Student {
            name: spec.name,
            user_id: spec.user_id,
            ila: spec.ila,
        };
        info!("Student {} registered", student.user_id);
        self.students.push(student.clone());
        Ok(student)
    }

    /// Look up a student by user id.
    pub fn get(&self, user_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.user_id == user_id)
    }

    /// Every registered student, in registration order.
    pub fn all(&self) -> &[Student] {
        &self.students
    }
}
