//! Error - Top-level error type of the core library

use crate::block::ConfigError;
use crate::path::PathError;
use crate::resource::ResourceKind;
use crate::stack::StackError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Unknown {kind} type '{resource_type}'")]
    UnknownType {
        kind: ResourceKind,
        resource_type: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_message() {
        let err: Error = ConfigError::missing("name").into();
        assert_eq!(err.to_string(), "Required property 'name' is missing");
    }

    #[test]
    fn unknown_type_names_the_kind() {
        let err = Error::UnknownType {
            kind: ResourceKind::DataSource,
            resource_type: "aws_ecs_nothing".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown data source type 'aws_ecs_nothing'");
    }
}
