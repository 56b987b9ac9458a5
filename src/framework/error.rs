//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-level failures travel
//! boxed inside [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or the boxed
    /// error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of beans")]
    struct OutOfBeans;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_into_entity_error_recovers_matching_type() {
        let err = FrameworkError::EntityError(Box::new(OutOfBeans));
        assert_eq!(err.into_entity_error::<OutOfBeans>().unwrap(), OutOfBeans);
    }

    #[test]
    fn test_into_entity_error_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<OutOfBeans>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.into_entity_error::<OutOfBeans>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
