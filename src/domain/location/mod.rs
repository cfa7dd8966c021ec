//! Location catalog entity

/// Ordered set of distinct location names, built once at startup and shared
/// read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    names: Vec<String>,
}

impl LocationCatalog {
    /// Build a catalog from raw location values: trims, drops blanks,
    /// de-duplicates, and sorts.
    pub fn new(raw: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = raw
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_distinct() {
        let catalog = LocationCatalog::new(
            ["Gotri", "Alkapuri", "Gotri", "Manjalpur"]
                .map(String::from),
        );
        assert_eq!(catalog.names(), ["Alkapuri", "Gotri", "Manjalpur"]);
    }

    #[test]
    fn test_blanks_and_whitespace_dropped() {
        let catalog =
            LocationCatalog::new(["  Akota ", "", "   "].map(String::from));
        assert_eq!(catalog.names(), ["Akota"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = LocationCatalog::empty();
        assert!(catalog.is_empty());
    }
}
