use tracing::debug;

/// The current session's user identity.
///
/// Resolved at most once per session, asynchronously and independently of
/// any match data. A failed resolution leaves it `Unresolved` indefinitely;
/// join attempts never block on it completing, so callers must tolerate the
/// unresolved state (see [`crate::coordinator::Eligibility::Unknown`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Unresolved,
    Resolved(String),
}

impl Identity {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::Unresolved => None,
            Identity::Resolved(id) => Some(id),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Identity::Resolved(_))
    }

    /// Record the resolved user id. First writer wins: once resolved the
    /// identity is immutable for the rest of the session, so a later
    /// authoritative id from a join response only backfills the unresolved
    /// case.
    pub fn resolve(&mut self, user_id: String) {
        match self {
            Identity::Unresolved => {
                debug!(%user_id, "identity resolved");
                *self = Identity::Resolved(user_id);
            }
            Identity::Resolved(existing) => {
                if *existing != user_id {
                    debug!(%user_id, %existing, "ignoring conflicting identity");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unresolved() {
        let identity = Identity::default();
        assert!(!identity.is_resolved());
        assert_eq!(identity.user_id(), None);
    }

    #[test]
    fn test_resolve_sets_user_id_once() {
        let mut identity = Identity::default();
        identity.resolve("u1".to_string());
        assert_eq!(identity.user_id(), Some("u1"));

        identity.resolve("u2".to_string());
        assert_eq!(identity.user_id(), Some("u1"));
    }
}
