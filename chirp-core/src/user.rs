use std::{borrow::Borrow, fmt};

use crate::Error;

/// A user name as both input files spell it: non-empty, letters and digits only
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: &str) -> Result<UserName, Error> {
        if name.is_empty() || !name.chars().all(char::is_alphanumeric) {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(UserName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets maps keyed by UserName be looked up with a plain &str
impl Borrow<str> for UserName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
