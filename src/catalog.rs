//! Compiled-in registry of subjects, verbs, operators and SQL fields.
//!
//! Lookups are case-insensitive and ignore underscores, so `created_at`,
//! `CreatedAt` and `createdat` all resolve to the `createdAt` subject.
crate::reexport!(dtype);
crate::reexport!(operator);
crate::reexport!(subject);
crate::reexport!(field);

/// Canonical lookup form: lowercase with underscores removed.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every subject, in declaration order.
pub fn subjects() -> &'static [Subject] {
    SUBJECTS
}

/// Resolve a subject by name or alias.
pub fn subject(word: &str) -> Option<&'static Subject> {
    let word = normalize(word);
    SUBJECTS.iter().find(|s| s.names().any(|n| normalize(n) == word))
}

/// Resolve a SQL field by column name, falling back to the field a subject maps to.
pub fn field(name: &str) -> Option<&'static Field> {
    let column = normalize(name);
    FIELDS
        .iter()
        .find(|f| normalize(f.column) == column)
        .or_else(|| subject(name).and_then(|s| FIELDS.iter().find(|f| f.column == s.field)))
}
