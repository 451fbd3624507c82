//! Input validation gate. Pure precondition check, no state.

use crate::domain::{DomainError, ProposalRequest};

/// Reject a request whose job description or skills text is blank.
///
/// The error message names every missing field.
pub fn validate(request: &ProposalRequest) -> Result<(), DomainError> {
    let mut missing = Vec::new();
    if request.job_description.trim().is_empty() {
        missing.push("job description");
    }
    if request.skills.trim().is_empty() {
        missing.push("skills");
    }
    if missing.is_empty() {
        return Ok(());
    }
    Err(DomainError::MissingInput(format!(
        "fill in the {}",
        missing.join(" and ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FailureKind, ResponseLength, Tone};

    fn request(job: &str, skills: &str) -> ProposalRequest {
        ProposalRequest::new(job, skills, Tone::ProfessionalDirect, ResponseLength::TweetSized)
    }

    #[test]
    fn test_accepts_filled_inputs() {
        assert!(validate(&request("Need a logo", "Illustrator")).is_ok());
    }

    #[test]
    fn test_rejects_blank_job() {
        let err = validate(&request("  \n", "Illustrator")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::MissingInput);
        assert_eq!(err.to_string(), "Missing data: fill in the job description");
    }

    #[test]
    fn test_rejects_empty_skills() {
        let err = validate(&request("Need a logo", "")).unwrap_err();
        assert_eq!(err, DomainError::MissingInput("fill in the skills".into()));
    }

    #[test]
    fn test_names_both_fields() {
        let err = validate(&request("", "")).unwrap_err();
        assert!(err.to_string().contains("job description and skills"));
    }
}
