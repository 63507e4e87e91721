use thiserror::Error;

/// Errors surfaced by the loader and the terminal front-end.
///
/// The filter engine itself is infallible: missing fields, dangling
/// business references and unparsable salaries are data, not errors.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("unsupported dataset extension: .{ext}")]
    UnsupportedFormat { ext: String },

    #[error("company not found: {0}")]
    CompanyNotFound(String),

    #[error("job not found: {0}")]
    JobNotFound(String),

    #[error("invalid employment filter '{0}', expected 'full' or 'part'")]
    InvalidEmployment(String),

    #[error("invalid gallery mode '{0}', expected 'all', 'companies' or 'jobs'")]
    InvalidGalleryMode(String),
}
