use thiserror::Error;

/// Result type for struct builder mutations
pub type Result<T> = std::result::Result<T, StructError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructError {
    /// A name-scoped mutation targeted a field that is not present.
    #[error("unable to {action} field '{field}' in '{fqn}': field does not exist, please use `add`")]
    NotFound {
        fqn: String,
        field: String,
        action: &'static str,
    },
}
