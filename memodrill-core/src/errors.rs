use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid {field}: {value:?}")]
    Parse { field: &'static str, value: String },
    #[error("quality must be between 0 and 5, got {0}")]
    InvalidQuality(i64),
}

impl CoreError {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>) -> Self {
        CoreError::Parse {
            field,
            value: value.into(),
        }
    }
}
