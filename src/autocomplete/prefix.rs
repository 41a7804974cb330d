/// Ordered prefix index over typed values.
///
/// Keys are compared through the index's normaliser, so lookups can ignore
/// case or underscores as the caller needs. Searches are lazy, return entries
/// in insertion order and can be repeated freely.
#[derive(Debug, Clone)]
pub struct PrefixIndex<V> {
    entries: Vec<Entry<V>>,
    normalize: fn(&str) -> String,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    folded: String,
    value: V,
}

impl<V> PrefixIndex<V> {
    pub fn new(normalize: fn(&str) -> String) -> Self {
        Self {
            entries: Vec::new(),
            normalize,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let folded = (self.normalize)(&key);
        self.entries.push(Entry { key, folded, value });
    }

    /// Entries whose normalised key starts with the normalised `prefix`.
    pub fn search<'a>(&'a self, prefix: &str) -> impl Iterator<Item = (&'a str, &'a V)> + use<'a, V> {
        let prefix = (self.normalize)(prefix);
        self.entries
            .iter()
            .filter(move |e| e.folded.starts_with(&prefix))
            .map(|e| (e.key.as_str(), &e.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PrefixIndex<V> {
    /// Builds a case-insensitive index.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = PrefixIndex::new(str::to_lowercase);
        for (key, value) in iter {
            index.insert(key, value);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<V>(index: &PrefixIndex<V>, prefix: &str) -> Vec<String> {
        index.search(prefix).map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let index: PrefixIndex<()> = ["school", "work", "projects", "Scheme"]
            .into_iter()
            .map(|k| (k, ()))
            .collect();
        assert_eq!(keys(&index, ""), ["school", "work", "projects", "Scheme"]);
        assert_eq!(keys(&index, "SCH"), ["school", "Scheme"]);
        assert!(keys(&index, "x").is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn searches_are_restartable() {
        let index: PrefixIndex<usize> = [("a", 1), ("ab", 2)].into_iter().collect();
        let first: Vec<_> = index.search("a").map(|(_, v)| *v).collect();
        let second: Vec<_> = index.search("a").map(|(_, v)| *v).collect();
        assert_eq!(first, [1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn applies_the_normaliser_to_keys_and_prefixes() {
        let mut index = PrefixIndex::new(crate::normalize);
        index.insert("createdAt", 1);
        index.insert("created_by", 2);
        assert_eq!(keys(&index, "Created_"), ["createdAt", "created_by"]);
        assert_eq!(keys(&index, "createdb"), ["created_by"]);
    }
}
