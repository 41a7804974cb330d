use crate::Operator;

/// How a SQL column validates and renders condition values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FieldClass {
    /// ISO-8601 date or date-time, compared as a quoted literal.
    Date,
    /// `true`/`false` compared directly.
    Boolean,
    /// `true`/`false` folded into a predicate over `completed_at`.
    Completion,
    /// Integer compared directly.
    Numeric,
    /// Restricted-charset text, compared or matched with `LIKE`.
    Text,
    /// Tag id or title, compiled to a sub-select over the tag table.
    Tag,
}

impl FieldClass {
    /// Operators a condition on a field of this class may use.
    pub fn permits(self, op: Operator) -> bool {
        use Operator::*;
        match self {
            FieldClass::Date | FieldClass::Numeric => matches!(
                op,
                Equals
                    | NotEquals
                    | GreaterThan
                    | LessThan
                    | GreaterThanOrEquals
                    | LessThanOrEquals
            ),
            FieldClass::Boolean | FieldClass::Completion => matches!(op, Equals | NotEquals),
            FieldClass::Text | FieldClass::Tag => {
                matches!(op, Equals | NotEquals | Contains | StartsWith | EndsWith)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub column: &'static str,
    pub class: FieldClass,
}

const fn field(column: &'static str, class: FieldClass) -> Field {
    Field { column, class }
}

/// Every column a condition may target.
pub static FIELDS: &[Field] = &[
    field("due_date", FieldClass::Date),
    field("do_date", FieldClass::Date),
    field("created_at", FieldClass::Date),
    field("updated_at", FieldClass::Date),
    field("completed_at", FieldClass::Date),
    field("hide_from_calendar", FieldClass::Boolean),
    field("all_day", FieldClass::Boolean),
    field("completed", FieldClass::Completion),
    field("priority", FieldClass::Numeric),
    field("title", FieldClass::Text),
    field("description", FieldClass::Text),
    field("status", FieldClass::Text),
    field("project", FieldClass::Text),
    field("created_by", FieldClass::Text),
    field("tag", FieldClass::Tag),
];
