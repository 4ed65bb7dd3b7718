//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeError`]
//! via `From`. Nothing here is fatal: the interactive loop reports every
//! `HomeError` and carries on.

/// Top-level error for casita operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    /// A device addressed by index or name does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Propagated from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Detail for [`HomeError::NotFound`].
#[derive(Debug, thiserror::Error)]
#[error("no {entity} matching {key:?}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_not_found_detail() {
        let err: HomeError = NotFoundError {
            entity: "device",
            key: "7".to_string(),
        }
        .into();
        assert!(matches!(err, HomeError::NotFound(_)));
    }

    #[test]
    fn should_format_not_found_with_entity_and_key() {
        let err = NotFoundError {
            entity: "device",
            key: "Smart TV".to_string(),
        };
        assert_eq!(err.to_string(), "no device matching \"Smart TV\"");
    }
}
