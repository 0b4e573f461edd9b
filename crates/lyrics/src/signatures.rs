//! Known lyrics-container signatures, one per page template version.

use indexmap::IndexMap;
use lyrics_core::Predicate;

/// Ordered collection of named container predicates.
///
/// Signatures are tried in insertion order, so the newest template goes
/// first. Supporting a new template is a single [`Signatures::add`] call.
#[derive(Debug, Clone)]
pub struct Signatures {
    entries: IndexMap<String, Predicate>,
}

impl Signatures {
    /// Create an empty signature list
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Signatures for the page templates seen so far, newest first
    pub fn known() -> Self {
        let mut signatures = Self::empty();
        signatures
            .add(
                "song-body",
                Predicate::element("div").with_attr("class", "song_body-lyrics"),
            )
            .add(
                "lyrics",
                Predicate::element("div").with_attr("class", "lyrics"),
            );
        signatures
    }

    /// Append a signature. Re-adding an existing name replaces the predicate
    /// but keeps its position.
    pub fn add(&mut self, name: &str, predicate: Predicate) -> &mut Self {
        self.entries.insert(name.to_string(), predicate);
        self
    }

    /// Remove a signature by name
    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.entries.shift_remove(name)
    }

    /// Look up a signature by name
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.entries.get(name)
    }

    /// Predicates in priority order
    pub fn predicates(&self) -> Vec<Predicate> {
        self.entries.values().cloned().collect()
    }

    /// Names in priority order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no signatures
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Signatures {
    fn default() -> Self {
        Self::known()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_order() {
        let signatures = Signatures::known();
        assert_eq!(
            signatures.names().collect::<Vec<_>>(),
            vec!["song-body", "lyrics"]
        );
        assert_eq!(
            signatures.get("lyrics"),
            Some(&Predicate::element("div").with_attr("class", "lyrics"))
        );
    }

    #[test]
    fn test_add_appends() {
        let mut signatures = Signatures::known();
        signatures.add(
            "container",
            Predicate::element("div").with_attr("data-lyrics-container", "true"),
        );
        assert_eq!(signatures.len(), 3);
        assert_eq!(signatures.names().last(), Some("container"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut signatures = Signatures::known();
        signatures.add("song-body", Predicate::element("section"));
        assert_eq!(signatures.names().next(), Some("song-body"));
        assert_eq!(signatures.predicates()[0], Predicate::element("section"));
    }

    #[test]
    fn test_remove() {
        let mut signatures = Signatures::known();
        assert!(signatures.remove("song-body").is_some());
        assert!(signatures.remove("song-body").is_none());
        assert_eq!(signatures.names().collect::<Vec<_>>(), vec!["lyrics"]);

        assert!(Signatures::empty().is_empty());
    }
}
