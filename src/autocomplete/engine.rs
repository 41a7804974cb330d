use crate::*;
use itertools::Itertools;
use std::collections::HashMap;

/// Autocomplete engine over the compiled-in catalog and a caller-supplied tag list.
///
/// Everything is indexed once at construction; [`Engine::suggest`] only reads,
/// so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Engine {
    subjects: PrefixIndex<&'static Subject>,
    verbs: HashMap<&'static str, PrefixIndex<&'static Verb>>,
    connectors: PrefixIndex<TokenType>,
    tags: PrefixIndex<()>,
    limit: Option<usize>,
}

impl Engine {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut subjects = PrefixIndex::new(normalize);
        let mut verbs = HashMap::new();
        for subject in catalog::subjects() {
            for name in subject.names() {
                subjects.insert(name, subject);
            }
            let mut index = PrefixIndex::new(normalize);
            for verb in subject.verbs {
                for name in verb.names() {
                    index.insert(name, verb);
                }
            }
            verbs.insert(subject.name, index);
        }

        let connectors = [TokenType::And, TokenType::Or]
            .into_iter()
            .map(|kind| (kind.to_string(), kind))
            .collect();
        let tags: PrefixIndex<()> = tags.into_iter().map(|tag| (tag, ())).collect();
        debug!("Indexed {} subject names and {} tags", subjects.len(), tags.len());

        Self {
            subjects,
            verbs,
            connectors,
            tags,
            limit: config().max_suggestions,
        }
    }

    /// Cap the number of suggestions returned, overriding the configured limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Typed suggestions for what may follow `input`.
    ///
    /// Subjects and verbs match on any of their names but are always
    /// suggested by their canonical one.
    ///
    /// Malformed input yields no suggestions. Only internal inconsistencies
    /// are errors.
    pub fn suggestions(&self, input: &str) -> Result<Suggestions> {
        let Some(cursor) = Cursor::locate(input)? else {
            return Ok(vec![]);
        };
        let state = cursor.state();
        let prefix = cursor.prefix();
        // Nothing follows a top-level `(` and whitespace.
        if prefix.is_empty()
            && input.ends_with(char::is_whitespace)
            && state.last() == Some(TokenType::LParen)
            && state.depth() == 0
        {
            return Ok(vec![]);
        }
        debug!(
            "Completing {prefix:?} against {:?} at depth {}",
            state.expected(),
            state.depth()
        );

        let mut found = Vec::new();
        if state.expects(TokenType::Subject) {
            found.extend(
                self.subjects
                    .search(prefix)
                    .map(|(_, subject)| subject.name)
                    .unique()
                    .map(|name| Suggestion::Subject(name.to_string())),
            );
        }
        if state.expects(TokenType::Verb) {
            let subject = state
                .subject()
                .ok_or_else(|| Error::Internal("verb expected before any subject".into()))?;
            let index = self.verbs.get(subject.name).ok_or_else(|| {
                Error::Internal(format!("subject `{}` has no verb index", subject.name))
            })?;
            found.extend(
                index
                    .search(prefix)
                    .map(|(_, verb)| verb.name)
                    .unique()
                    .map(|name| Suggestion::Verb(name.to_string())),
            );
        }
        if state.expects(TokenType::Tag) {
            found.extend(
                self.tags
                    .search(prefix)
                    .map(|(tag, _)| Suggestion::Value(tag.to_string())),
            );
        }
        found.extend(
            self.connectors
                .search(prefix)
                .filter(|(_, kind)| state.expects(**kind))
                .map(|(_, kind)| Suggestion::Connector(*kind)),
        );

        Ok(found
            .into_iter()
            .unique()
            .take(self.limit.unwrap_or(usize::MAX))
            .collect())
    }

    /// [`Engine::suggestions`] rendered as strings.
    pub fn suggest(&self, input: &str) -> Result<Vec<String>> {
        Ok(self
            .suggestions(input)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}
