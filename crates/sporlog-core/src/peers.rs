//! Peer service registry: logical service keys to stable system identifiers.
//!
//! Each log record carries a `peer` field naming the internal or external
//! system the operation concerns. The registry maps short logical keys
//! (e.g. `"BRREG"`) to stable identifiers (e.g. a registration number) and is
//! frozen at initialize time, so every record in a process resolves against
//! the same snapshot.

use std::collections::HashMap;

use crate::defaults::INTERNAL_PEER;

/// Immutable mapping from logical service keys to stable peer identifiers.
///
/// Construction always inserts the reserved entry
/// `"INTERNAL" -> "INTERNAL"`, overwriting any caller-supplied value for
/// that key. The overwrite is silent and intentional: the reserved identifier
/// must be the same in every deployment or cross-service dashboards stop
/// lining up.
///
/// Read-only after construction; safe to share across concurrent callers.
#[derive(Debug, Clone)]
pub struct PeerServiceRegistry {
    entries: HashMap<String, String>,
}

impl PeerServiceRegistry {
    /// Build a registry from caller-supplied definitions. `definitions` may
    /// be empty; the reserved `INTERNAL` entry is always present.
    pub fn new(definitions: HashMap<String, String>) -> Self {
        let mut entries = definitions;
        entries.insert(INTERNAL_PEER.to_string(), INTERNAL_PEER.to_string());
        Self { entries }
    }

    /// Resolve a logical key to its peer identifier.
    ///
    /// Total and side-effect-free: unknown keys resolve to themselves, so a
    /// caller passing an already-resolved identifier gets it back unchanged.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Whether the key has an explicit mapping (the identity fallback does
    /// not count).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries, including the reserved one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the reserved entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PeerServiceRegistry {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_known_key_resolves_to_identifier() {
        let registry = PeerServiceRegistry::new(mappings(&[("BRREG", "SYS1234567")]));
        assert_eq!(registry.resolve("BRREG"), "SYS1234567");
    }

    #[test]
    fn test_unknown_key_resolves_to_itself() {
        let registry = PeerServiceRegistry::new(mappings(&[("BRREG", "SYS1234567")]));
        assert_eq!(registry.resolve("UNKNOWN"), "UNKNOWN");
    }

    #[test]
    fn test_internal_entry_always_present() {
        let registry = PeerServiceRegistry::default();
        assert_eq!(registry.resolve(INTERNAL_PEER), INTERNAL_PEER);
        assert!(registry.contains(INTERNAL_PEER));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_internal_override_is_discarded() {
        let registry = PeerServiceRegistry::new(mappings(&[("INTERNAL", "SYS0000001")]));
        assert_eq!(registry.resolve("INTERNAL"), "INTERNAL");
    }

    #[test]
    fn test_empty_definitions_allowed() {
        let registry = PeerServiceRegistry::new(HashMap::new());
        assert!(!registry.is_empty());
        assert_eq!(registry.resolve("anything"), "anything");
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry =
            std::sync::Arc::new(PeerServiceRegistry::new(mappings(&[("BRREG", "SYS1234567")])));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(registry.resolve("BRREG"), "SYS1234567");
                        assert_eq!(registry.resolve("INTERNAL"), "INTERNAL");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
