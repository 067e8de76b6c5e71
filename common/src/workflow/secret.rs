use std::fmt;

/// The shared admin credential typed into a form.
///
/// It lives only in form state and in the mutating request that carries it. `Debug`
/// never prints the value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretCode(String);

impl SecretCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretCode(***)")
    }
}

impl From<&str> for SecretCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let code = SecretCode::new("hunter2");
        assert_eq!(format!("{:?}", code), "SecretCode(***)");
        assert_eq!(code.as_str(), "hunter2");
    }
}
