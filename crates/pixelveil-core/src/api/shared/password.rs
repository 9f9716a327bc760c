use std::fmt::{self, Debug, Formatter};

#[derive(Default)]
pub struct Password(Option<String>);

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}
