use crate::domain::{
    entities::{FileSet, ProjectName, WorkflowState},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_state(state: &WorkflowState) -> Result<(), DomainError> {
        state.validate()
    }

    pub fn validate_file_set(files: &FileSet) -> Result<(), DomainError> {
        files.validate()
    }

    /// Field check for project-name prompts: normalizes or explains.
    pub fn check_project_name(raw: &str) -> Result<String, String> {
        ProjectName::parse(raw)
            .map(|name| name.to_string())
            .map_err(|e| e.to_string())
    }

    /// Field check for gateway URLs.
    pub fn check_gateway_url(raw: &str) -> Result<String, String> {
        let url = raw.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url.trim_end_matches('/').to_string())
        } else {
            Err("Gateway URL must start with http:// or https://".into())
        }
    }
}
