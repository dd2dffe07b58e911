//! Key naming: `user:<user_id>:<kind>:<id>`
//!
//! `:` and `%` inside the user id and kind are percent-escaped, so one
//! user's prefix never covers another user's keys.

/// Keys for one user and one record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    user_id: String,
    kind: String,
}

impl Keyspace {
    pub fn new(user_id: &str, kind: &str) -> Self {
        Self {
            user_id: escape(user_id),
            kind: escape(kind),
        }
    }

    /// Prefix shared by every record of this kind
    pub fn prefix(&self) -> String {
        format!("user:{}:{}:", self.user_id, self.kind)
    }

    /// Full key for a single record
    pub fn key(&self, id: &str) -> String {
        format!("{}{}", self.prefix(), id)
    }
}

fn escape(segment: &str) -> String {
    segment.replace('%', "%25").replace(':', "%3A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let space = Keyspace::new("u42", "cycle");
        assert_eq!(space.key("abc"), "user:u42:cycle:abc");
    }

    #[test]
    fn test_prefix_does_not_match_other_kinds() {
        let cycles = Keyspace::new("u42", "cycle");
        let checkins = Keyspace::new("u42", "checkin");
        assert!(!checkins.key("1").starts_with(&cycles.prefix()));
    }

    #[test]
    fn test_colon_in_user_id_is_escaped() {
        let space = Keyspace::new("alice:cycle", "cycle");
        assert_eq!(space.prefix(), "user:alice%3Acycle:cycle:");

        let alice = Keyspace::new("alice", "cycle");
        assert!(!space.key("2024-01-01").starts_with(&alice.prefix()));
    }

    #[test]
    fn test_escaping_is_unambiguous() {
        let literal = Keyspace::new("a%3Ab", "cycle");
        let colon = Keyspace::new("a:b", "cycle");
        assert_ne!(literal.prefix(), colon.prefix());
    }
}
