#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("No followed users found in line {0:?}")]
    BadFollowLine(String),

    #[error("No post text found after {0:?}")]
    BadPostLine(String),

    #[error("Invalid character in name {0:?}")]
    InvalidName(String),
}
