//! `ntql`: a small `subject.verb(value)` query language.
//!
//! A query such as `tag.equals(work) AND due.before(2024-01-01)` is scanned,
//! tokenized against the compiled-in subject catalog, parsed into a
//! [`QueryExpr`] and compiled to a SQL predicate. The [`Engine`] reuses the
//! same scanner and tokenizer to suggest what may be typed next.
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(catalog);
reexport!(syntax);
reexport!(query);
reexport!(autocomplete);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

/// Scan, tokenize and parse `input` into a bound query expression.
pub fn parse(input: &str) -> Result<QueryExpr> {
    let tokens = Lexer::new(input).tokenize()?;
    let expr = Parser::new(&tokens).parse()?;
    debug!("Parsed {input:?} into {expr}");
    Ok(expr)
}

/// Parse `input` and compile it straight to a SQL predicate.
pub fn compile(input: &str) -> Result<String> {
    parse(input)?.to_sql()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_full_query() {
        let sql = compile("tag.equals(work) AND due.before(2024-01-01)").expect("query compiles");
        assert_eq!(
            sql,
            "(tag_id = (SELECT id FROM atomic_tags WHERE title = 'work') AND due_date < '2024-01-01')"
        );
    }

    #[test]
    fn parse_never_returns_partial_results() {
        assert!(parse("tag.equals(work) AND").is_err());
        assert!(compile("priority.gt(3) AND title.contains(\"a;b\")").is_err());
    }
}
