//! Offline check that compiled predicates are well-formed PostgreSQL.
use crate::*;
use sqlparser::dialect::PostgreSqlDialect;
static POSTGRES: PostgreSqlDialect = PostgreSqlDialect {};

/// Parse `predicate` as the `WHERE` clause of a query over `tasks`.
pub fn verify_predicate(predicate: &str) -> Result {
    let sql = format!("SELECT id FROM tasks WHERE {predicate}");
    let statements = sqlparser::parser::Parser::parse_sql(&POSTGRES, &sql)?;
    if statements.len() != 1 {
        return Err(Error::Internal(format!(
            "predicate {predicate:?} produced {} statements",
            statements.len()
        )));
    }
    Ok(())
}

impl QueryExpr {
    /// [`QueryExpr::to_sql`], then [`verify_predicate`] on the result.
    pub fn to_verified_sql(&self) -> Result<String> {
        let sql = self.to_sql()?;
        verify_predicate(&sql)?;
        Ok(sql)
    }
}
