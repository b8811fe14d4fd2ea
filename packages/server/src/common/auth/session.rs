/// Opaque session presented by a caller.
///
/// The core never looks inside the token; `AccessControl::resolve` turns it
/// into an `Actor`. An absent token is an anonymous session.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Build a session from a raw header value, with or without the
    /// `Bearer ` prefix. Blank values count as anonymous.
    pub fn from_header_value(value: &str) -> Self {
        let value = value.trim();
        let token = match value.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
            _ if value.eq_ignore_ascii_case("bearer") => "",
            _ => value,
        };
        if token.is_empty() {
            Self::anonymous()
        } else {
            Self::bearer(token)
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token {
            Some(_) => f.write_str("Session(bearer)"),
            None => f.write_str("Session(anonymous)"),
        }
    }
}
