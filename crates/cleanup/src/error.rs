use crate::ports::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    /// Catalog cannot be turned into a truncation statement. Fatal at startup.
    #[error("Invalid cleanup configuration: {0}")]
    Configuration(String),
    #[error("Database cleanup is only available under profile '{active_profile}', current profile is '{profile}'")]
    ProfileInactive {
        profile: String,
        active_profile: String,
    },
    /// Truncation failed against the backend. Fatal for the test being set up.
    #[error("Database cleanup failed: {0}")]
    Execution(#[from] SessionError),
}
