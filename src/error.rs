use std::error::Error as StdError;

/// Failure of a driver operation.
///
/// The protocol carries no checksum, so the only thing that can fail is the bus itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport reported a failure part way through a transaction.
    #[error("{context}")]
    Transaction {
        context: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

impl Error {
    pub(crate) fn transaction(context: &'static str, source: anyhow::Error) -> Self {
        Error::Transaction {
            context,
            source: source.into(),
        }
    }

    /// The operation-specific message, e.g. `Failed to read model`.
    pub fn context(&self) -> &'static str {
        match self {
            Error::Transaction { context, .. } => context,
        }
    }
}

#[test]
fn test_display_and_source() {
    let err = Error::transaction("Failed to read model", anyhow::anyhow!("bus disconnected"));
    assert_eq!(err.to_string(), "Failed to read model");
    assert_eq!(err.context(), "Failed to read model");
    assert_eq!(err.source().map(|s| s.to_string()), Some("bus disconnected".to_string()));
}
