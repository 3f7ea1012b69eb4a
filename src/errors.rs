use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid plan: {message}")]
    InvalidPlan {
        message: String,
    },

    #[error("arithmetic overflow while computing {context}")]
    Overflow {
        context: &'static str,
    },

    #[error("cannot parse {field} from {value:?}")]
    Parse {
        field: &'static str,
        value: String,
    },
}

impl CalcError {
    pub(crate) fn invalid_plan(message: impl Into<String>) -> Self {
        CalcError::InvalidPlan {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
