/// Domain failures raised by the processors.
///
/// Anything else that bubbles up through `anyhow` is treated as a data access
/// fault by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    NotFound(String),
    Validation(String),
}

impl TrackerError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::NotFound(what) => write!(f, "{} not found", what),
            TrackerError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TrackerError::not_found("Expense").to_string(), "Expense not found");
        assert_eq!(
            TrackerError::validation("amount must be positive").to_string(),
            "amount must be positive"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = TrackerError::not_found("Category").into();
        assert_eq!(
            err.downcast_ref::<TrackerError>(),
            Some(&TrackerError::NotFound("Category".to_string()))
        );
    }
}
