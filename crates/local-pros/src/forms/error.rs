use super::domain::FieldErrors;
use super::transport::TransportError;

/// Why a flow refused to move forward.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("invalid fields: {0}")]
    Invalid(FieldErrors),
    #[error("cannot {action} from the {stage} stage")]
    WrongStage {
        stage: &'static str,
        action: &'static str,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FlowError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FlowError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
