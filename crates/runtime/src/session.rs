use std::fmt;

/// Opaque handle for one browser-style session and its match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_session_label() {
        assert_eq!(SessionId(7).to_string(), "session-7");
        assert!(SessionId(1) < SessionId(2));
    }
}
