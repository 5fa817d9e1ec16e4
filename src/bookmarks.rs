use tracing::warn;

/// Bookmarked fact ids in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    /// Reads the stored JSON array. Anything unreadable counts as no bookmarks.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(ids) => {
                let mut set = Self::default();
                for id in ids {
                    set.insert(id);
                }
                set
            }
            Err(err) => {
                warn!("ignoring unreadable bookmark list: {err}");
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Returns false and leaves the set untouched when `id` is already saved.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates() {
        let mut set = BookmarkSet::default();
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        let before = set.clone();

        assert!(!set.insert("a"));
        assert_eq!(set, before);
        assert_eq!(set.ids(), ["a", "b"]);
    }

    #[test]
    fn decode_reads_stored_list_in_order() {
        let set = BookmarkSet::decode(r#"["x","y","x"]"#);
        assert_eq!(set.ids(), ["x", "y"]);
        assert_eq!(set.encode(), r#"["x","y"]"#);
    }

    #[test]
    fn decode_garbage_is_empty() {
        assert!(BookmarkSet::decode("{oops").is_empty());
    }
}
