use derive_more::{AsRef, Display};

/// An account of the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub email: String,
    pub email_verified: bool,
}

/// Identifier assigned to an account by the identity provider.
#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(String);

impl UserID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for UserID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_id() {
        assert!(UserID::default().is_empty());
        assert_eq!(UserID::from("abc").to_string(), "abc");
        assert_eq!(UserID::from(String::from("abc")), UserID::from("abc"));
    }
}
