use crate::domain::model::{AddOutcome, EmailAddress};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

/// Versioned storage key; bumping the version is the only forward-compat
/// mechanism, there is no migration logic.
pub const WAITLIST_KEY: &str = "nova-ai.waitlist.v1";

/// Owns the deduplicated, insertion-ordered list of captured emails and is
/// the sole writer to its storage key.
pub struct WaitlistStore<S: KeyValueStore> {
    store: S,
    key: String,
    entries: Vec<EmailAddress>,
}

impl<S: KeyValueStore> WaitlistStore<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, WAITLIST_KEY)
    }

    /// Loads persisted entries, falling back to an empty list on any
    /// failure. Missing, unreadable, and corrupt values are all treated the
    /// same way: logged, never surfaced to the caller.
    pub fn load_with_key(store: S, key: &str) -> Self {
        let entries = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(values) => {
                    let mut entries: Vec<EmailAddress> = Vec::with_capacity(values.len());
                    for value in &values {
                        match EmailAddress::parse(value) {
                            Ok(email) if !entries.contains(&email) => entries.push(email),
                            Ok(_) => {}
                            Err(_) => {
                                tracing::warn!("Dropping malformed waitlist entry: {:?}", value);
                            }
                        }
                    }
                    entries
                }
                Err(e) => {
                    tracing::warn!("Corrupt waitlist value under {}, starting empty: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load waitlist from storage: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            key: key.to_string(),
            entries,
        }
    }

    /// Validates, normalizes, and appends an email, persisting the full
    /// list on success. A persist failure does NOT roll back the in-memory
    /// append: the session must keep reflecting the submission even when
    /// durability degrades.
    pub fn add(&mut self, raw_email: &str) -> AddOutcome {
        let email = match EmailAddress::parse(raw_email) {
            Ok(email) => email,
            Err(_) => return AddOutcome::InvalidEmail,
        };

        if self.entries.contains(&email) {
            return AddOutcome::AlreadyExists;
        }

        self.entries.push(email);
        match self.persist() {
            Ok(()) => AddOutcome::Added,
            Err(e) => {
                tracing::warn!("Failed to persist waitlist, entry kept in memory: {}", e);
                AddOutcome::PersistenceFailed
            }
        }
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.store.set(&self.key, &payload)
    }

    pub fn list(&self) -> &[EmailAddress] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;
    use crate::utils::error::LandingError;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(LandingError::StorageError {
                message: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_add_persists_normalized_entry() {
        let mut waitlist = WaitlistStore::load(MemoryStore::new());

        assert_eq!(waitlist.add("bob@co.io"), AddOutcome::Added);
        assert_eq!(waitlist.len(), 1);
        assert_eq!(waitlist.list()[0].as_str(), "bob@co.io");
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut waitlist = WaitlistStore::load(MemoryStore::new());

        assert_eq!(waitlist.add("bob@co.io"), AddOutcome::Added);
        assert_eq!(waitlist.add("bob@co.io"), AddOutcome::AlreadyExists);
        assert_eq!(waitlist.len(), 1);
    }

    #[test]
    fn test_add_normalizes_case_and_whitespace() {
        let mut waitlist = WaitlistStore::load(MemoryStore::new());

        assert_eq!(waitlist.add(" User@Example.com "), AddOutcome::Added);
        assert_eq!(waitlist.add("user@example.com"), AddOutcome::AlreadyExists);
        assert_eq!(waitlist.len(), 1);
        assert_eq!(waitlist.list()[0].as_str(), "user@example.com");
    }

    #[test]
    fn test_invalid_email_leaves_entries_unchanged() {
        let mut waitlist = WaitlistStore::load(MemoryStore::new());

        assert_eq!(waitlist.add("not-an-email"), AddOutcome::InvalidEmail);
        assert_eq!(waitlist.add(""), AddOutcome::InvalidEmail);
        assert_eq!(waitlist.add("missing@tld"), AddOutcome::InvalidEmail);
        assert!(waitlist.is_empty());
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_entry() {
        let mut waitlist = WaitlistStore::load(BrokenStore);

        assert_eq!(waitlist.add("bob@co.io"), AddOutcome::PersistenceFailed);
        assert_eq!(waitlist.len(), 1);
        assert_eq!(waitlist.list()[0].as_str(), "bob@co.io");
    }

    #[test]
    fn test_load_with_corrupt_value_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(WAITLIST_KEY, "definitely not json").unwrap();

        let waitlist = WaitlistStore::load(store);
        assert!(waitlist.is_empty());
    }

    #[test]
    fn test_load_drops_malformed_and_duplicate_entries() {
        let mut store = MemoryStore::new();
        store
            .set(
                WAITLIST_KEY,
                r#"["bob@co.io", "garbage", "bob@co.io", "eve@example.com"]"#,
            )
            .unwrap();

        let waitlist = WaitlistStore::load(store);
        assert_eq!(waitlist.len(), 2);
        assert_eq!(waitlist.list()[0].as_str(), "bob@co.io");
        assert_eq!(waitlist.list()[1].as_str(), "eve@example.com");
    }

    #[test]
    fn test_persisted_value_matches_entries() {
        let mut waitlist = WaitlistStore::load(MemoryStore::new());
        waitlist.add("bob@co.io");
        waitlist.add("eve@example.com");

        let stored = waitlist.store.get(WAITLIST_KEY).unwrap().unwrap();
        assert_eq!(stored, r#"["bob@co.io","eve@example.com"]"#);
    }
}
