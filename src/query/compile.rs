//! Compiles a [`QueryExpr`] to a SQL predicate.
//!
//! Values are validated against their field's class and then spliced into the
//! SQL text. The validation is the only protection against injection: there
//! are no bind parameters.
use crate::*;
use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}:[0-9]{2}Z?)?$").expect("valid regex")
});
static SAFE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-/: ]+$").expect("valid regex"));

impl QueryExpr {
    /// Render this tree as a SQL predicate. Fails on the first condition whose
    /// field, operator or value does not check out.
    pub fn to_sql(&self) -> Result<String> {
        let sql = match self {
            QueryExpr::Condition(condition) => condition.to_sql()?,
            QueryExpr::Unary(unary) => match unary.operator {
                Operator::Not => format!("(NOT ({}))", unary.operand.to_sql()?),
                operator => return Err(CompileError::InvalidConnective { operator }.into()),
            },
            QueryExpr::Binary(binary) => match binary.operator {
                operator @ (Operator::And | Operator::Or | Operator::Xor) => format!(
                    "({} {} {})",
                    binary.left.to_sql()?,
                    operator.name(),
                    binary.right.to_sql()?
                ),
                operator => return Err(CompileError::InvalidConnective { operator }.into()),
            },
        };
        Ok(sql)
    }
}

impl Condition {
    pub fn to_sql(&self) -> Result<String, CompileError> {
        let field = catalog::field(&self.field)
            .ok_or_else(|| CompileError::UnknownField(self.field.clone()))?;
        if !field.class.permits(self.operator) {
            return Err(self.invalid_operator());
        }

        let column = field.column;
        let value = self.value.as_str();
        let sql = match field.class {
            FieldClass::Date => {
                self.check(ISO_DATE.is_match(value))?;
                format!("{column} {} '{value}'", self.symbol()?)
            }
            FieldClass::Numeric => {
                let number: i64 = value.parse().map_err(|_| self.invalid_value())?;
                format!("{column} {} {number}", self.symbol()?)
            }
            FieldClass::Boolean => {
                let flag = self.flag()?;
                format!("{column} {} {flag}", self.symbol()?)
            }
            FieldClass::Completion => {
                let completed = self.flag()? == (self.operator == Operator::Equals);
                if completed {
                    "completed_at < NOW()".to_string()
                } else {
                    "(completed_at > NOW() OR completed_at IS NULL)".to_string()
                }
            }
            FieldClass::Text => {
                self.check(SAFE_TEXT.is_match(value))?;
                match self.like_pattern(value) {
                    Some(pattern) => format!("{column} LIKE '{pattern}'"),
                    None => format!("{column} {} '{value}'", self.symbol()?),
                }
            }
            FieldClass::Tag => self.tag_sql()?,
        };
        debug!("Compiled {self} into {sql}");
        Ok(sql)
    }

    /// Tag conditions select through the tag table, by id for integer values
    /// and by title otherwise.
    fn tag_sql(&self) -> Result<String, CompileError> {
        let table = &config().tag_table;
        let value = self.value.as_str();

        if let Ok(id) = value.parse::<i64>() {
            if !matches!(self.operator, Operator::Equals | Operator::NotEquals) {
                return Err(self.invalid_operator());
            }
            return Ok(format!(
                "tag_id {} (SELECT id FROM {table} WHERE id = {id})",
                self.symbol()?
            ));
        }

        self.check(SAFE_TEXT.is_match(value))?;
        Ok(match self.like_pattern(value) {
            Some(pattern) => {
                format!("tag_id IN (SELECT id FROM {table} WHERE title LIKE '{pattern}')")
            }
            None => format!(
                "tag_id {} (SELECT id FROM {table} WHERE title = '{value}')",
                self.symbol()?
            ),
        })
    }

    fn like_pattern(&self, value: &str) -> Option<String> {
        match self.operator {
            Operator::Contains => Some(format!("%{value}%")),
            Operator::StartsWith => Some(format!("{value}%")),
            Operator::EndsWith => Some(format!("%{value}")),
            _ => None,
        }
    }

    fn symbol(&self) -> Result<&'static str, CompileError> {
        self.operator.symbol().ok_or_else(|| self.invalid_operator())
    }

    fn flag(&self) -> Result<bool, CompileError> {
        match self.value.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(self.invalid_value()),
        }
    }

    fn check(&self, valid: bool) -> Result<(), CompileError> {
        if valid { Ok(()) } else { Err(self.invalid_value()) }
    }

    fn invalid_operator(&self) -> CompileError {
        CompileError::InvalidOperator {
            field: self.field.clone(),
            operator: self.operator,
            value: self.value.clone(),
        }
    }

    fn invalid_value(&self) -> CompileError {
        CompileError::InvalidValue {
            field: self.field.clone(),
            operator: self.operator,
            value: self.value.clone(),
        }
    }
}
