use std::fmt;

#[derive(Debug)]
pub enum HeadBobError {
    Io(String),
    Parse(String),
    InvalidSetting(String),
}

impl fmt::Display for HeadBobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadBobError::Io(msg) => write!(f, "failed to read head bob settings: {}", msg),
            HeadBobError::Parse(msg) => write!(f, "failed to parse head bob settings: {}", msg),
            HeadBobError::InvalidSetting(msg) => write!(f, "invalid head bob setting: {}", msg),
        }
    }
}

impl std::error::Error for HeadBobError {}

impl From<std::io::Error> for HeadBobError {
    fn from(error: std::io::Error) -> Self {
        HeadBobError::Io(error.to_string())
    }
}

impl From<ron::error::SpannedError> for HeadBobError {
    fn from(error: ron::error::SpannedError) -> Self {
        HeadBobError::Parse(error.to_string())
    }
}
