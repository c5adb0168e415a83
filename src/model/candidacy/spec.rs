use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

use super::{CandidacyRequest, RequestId, RequestStatus};

/// A candidacy application form, as filled in by a voter. Turning it into a
/// [`CandidacyRequest`] goes through the registry, which validates it and
/// assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidacySpec {
    pub full_name: String,
    pub student_id: String,
    pub email: String,
    pub phone: String,
    pub election_type: String,
    pub party: String,
    pub manifesto: String,
    pub experience: String,
}

impl CandidacySpec {
    /// Check every required field, reporting all failures at once so the UI
    /// can mark each offending field inline.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(FieldError::required(
            "fullName",
            &self.full_name,
            "Full name is required",
        ));
        errors.extend(FieldError::required(
            "studentId",
            &self.student_id,
            "Student ID is required",
        ));
        errors.extend(FieldError::required("email", &self.email, "Email is required"));
        errors.extend(FieldError::required(
            "phone",
            &self.phone,
            "Phone number is required",
        ));
        errors.extend(FieldError::required(
            "electionType",
            &self.election_type,
            "Election type is required",
        ));
        errors.extend(FieldError::required(
            "party",
            &self.party,
            "Party affiliation is required",
        ));
        errors.extend(FieldError::required(
            "manifesto",
            &self.manifesto,
            "Manifesto is required",
        ));
        errors.extend(FieldError::required(
            "experience",
            &self.experience,
            "Experience is required",
        ));
        errors
    }

    /// Convert this spec into a pending request with the given id.
    pub(crate) fn into_request(self, id: RequestId, submitted_at: DateTime<Utc>) -> CandidacyRequest {
        CandidacyRequest {
            id,
            full_name: self.full_name,
            student_id: self.student_id,
            email: self.email,
            phone: self.phone,
            election_type: self.election_type,
            party: self.party,
            experience: self.experience,
            manifesto: self.manifesto,
            status: RequestStatus::Pending,
            submitted_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_reports_every_field() {
        let errors = CandidacySpec::default().validate();
        let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
        assert_eq!(
            fields,
            [
                "fullName",
                "studentId",
                "email",
                "phone",
                "electionType",
                "party",
                "manifesto",
                "experience",
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let spec = CandidacySpec {
            phone: "   ".to_string(),
            ..CandidacySpec::example()
        };
        let errors = spec.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
        assert_eq!(errors[0].message, "Phone number is required");
    }

    #[test]
    fn complete_form_passes() {
        assert!(CandidacySpec::example().validate().is_empty());
    }
}
