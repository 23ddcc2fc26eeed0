//! Identifier assignment for new records.
//!
//! Every record gets a random v4 UUID exactly once, before it is handed to
//! storage. The store never assigns or rewrites identifiers.

use uuid::Uuid;

/// Generate a fresh record identifier.
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_non_nil_v4() {
        let id = generate();
        assert_ne!(id, Uuid::nil());
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate()));
        }
    }
}
