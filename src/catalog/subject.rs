use crate::{DType, Operator, normalize};

/// An operation name scoped to one [`Subject`], mapped to the operator it compiles to.
#[derive(Debug, PartialEq, Eq)]
pub struct Verb {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub operator: Operator,
}

impl Verb {
    /// Canonical name first, then aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    pub fn matches(&self, word: &str) -> bool {
        let word = normalize(word);
        self.names().any(|n| normalize(n) == word)
    }
}

/// A queryable field with the verbs and value types it accepts.
#[derive(Debug, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub verbs: &'static [Verb],
    pub types: &'static [DType],
    /// Column of the [`crate::Field`] conditions on this subject compile against.
    pub field: &'static str,
}

impl Subject {
    /// Canonical name first, then aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    pub fn matches(&self, word: &str) -> bool {
        let word = normalize(word);
        self.names().any(|n| normalize(n) == word)
    }

    /// Resolve one of this subject's verbs by name or alias.
    pub fn verb(&self, word: &str) -> Option<&'static Verb> {
        let verbs: &'static [Verb] = self.verbs;
        verbs.iter().find(|v| v.matches(word))
    }
}

const EQUALS: Verb = Verb {
    name: "equals",
    aliases: &["eq"],
    operator: Operator::Equals,
};
const NOT_EQUALS: Verb = Verb {
    name: "notequals",
    aliases: &["neq"],
    operator: Operator::NotEquals,
};
const BEFORE: Verb = Verb {
    name: "before",
    aliases: &[],
    operator: Operator::LessThan,
};
const AFTER: Verb = Verb {
    name: "after",
    aliases: &[],
    operator: Operator::GreaterThan,
};
const STARTS_WITH: Verb = Verb {
    name: "startswith",
    aliases: &[],
    operator: Operator::StartsWith,
};
const ENDS_WITH: Verb = Verb {
    name: "endswith",
    aliases: &[],
    operator: Operator::EndsWith,
};
const CONTAINS: Verb = Verb {
    name: "contains",
    aliases: &[],
    operator: Operator::Contains,
};
const LESS_THAN: Verb = Verb {
    name: "lessthan",
    aliases: &["lt"],
    operator: Operator::LessThan,
};
const GREATER_THAN: Verb = Verb {
    name: "greaterthan",
    aliases: &["gt"],
    operator: Operator::GreaterThan,
};
const LESS_THAN_OR_EQUAL: Verb = Verb {
    name: "lessthanorequal",
    aliases: &["lte"],
    operator: Operator::LessThanOrEquals,
};
const GREATER_THAN_OR_EQUAL: Verb = Verb {
    name: "greaterthanorequal",
    aliases: &["gte"],
    operator: Operator::GreaterThanOrEquals,
};

const TIMESTAMP_VERBS: &[Verb] = &[BEFORE, AFTER, EQUALS, NOT_EQUALS];
const TIMESTAMP_TYPES: &[DType] = &[DType::Date, DType::DateTime];
const IDENTITY_VERBS: &[Verb] = &[EQUALS, NOT_EQUALS];

/// The compiled-in subject registry, in suggestion order.
pub static SUBJECTS: &[Subject] = &[
    Subject {
        name: "title",
        aliases: &["name"],
        verbs: &[STARTS_WITH, ENDS_WITH, CONTAINS, EQUALS, NOT_EQUALS],
        types: &[DType::String],
        field: "title",
    },
    Subject {
        name: "due",
        aliases: &["deadline"],
        verbs: TIMESTAMP_VERBS,
        types: TIMESTAMP_TYPES,
        field: "due_date",
    },
    Subject {
        name: "status",
        aliases: &["state"],
        verbs: IDENTITY_VERBS,
        types: &[DType::String],
        field: "status",
    },
    Subject {
        name: "priority",
        aliases: &[],
        verbs: &[
            EQUALS,
            NOT_EQUALS,
            LESS_THAN,
            GREATER_THAN,
            LESS_THAN_OR_EQUAL,
            GREATER_THAN_OR_EQUAL,
        ],
        types: &[DType::Int],
        field: "priority",
    },
    Subject {
        name: "project",
        aliases: &[],
        verbs: IDENTITY_VERBS,
        types: &[DType::String],
        field: "project",
    },
    Subject {
        name: "createdAt",
        aliases: &[],
        verbs: TIMESTAMP_VERBS,
        types: TIMESTAMP_TYPES,
        field: "created_at",
    },
    Subject {
        name: "updatedAt",
        aliases: &[],
        verbs: TIMESTAMP_VERBS,
        types: TIMESTAMP_TYPES,
        field: "updated_at",
    },
    Subject {
        name: "completedAt",
        aliases: &[],
        verbs: TIMESTAMP_VERBS,
        types: TIMESTAMP_TYPES,
        field: "completed_at",
    },
    Subject {
        name: "createdBy",
        aliases: &[],
        verbs: IDENTITY_VERBS,
        types: &[DType::String],
        field: "created_by",
    },
    Subject {
        name: "tag",
        aliases: &[],
        verbs: IDENTITY_VERBS,
        types: &[DType::Tag],
        field: "tag",
    },
];

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn verbs_resolve_within_their_subject() {
        let tag = subject("tag").expect("tag subject");
        assert_eq!(tag.verb("eq").map(|v| v.operator), Some(Operator::Equals));
        assert_eq!(tag.verb("NEQ").map(|v| v.operator), Some(Operator::NotEquals));
        assert!(tag.verb("before").is_none());

        let due = subject("due").expect("due subject");
        assert_eq!(due.verb("before").map(|v| v.operator), Some(Operator::LessThan));
        assert_eq!(due.verb("after").map(|v| v.operator), Some(Operator::GreaterThan));
    }

    #[test]
    fn verb_names_lead_with_the_canonical_name() {
        let priority = subject("priority").expect("priority subject");
        let gte = priority.verb("gte").expect("gte alias");
        assert_eq!(gte.names().collect::<Vec<_>>(), ["greaterthanorequal", "gte"]);
    }
}
