#![cfg(test)]
use crate::*;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

pub const TAGS: [&str; 3] = ["school", "work", "projects"];

/// Engine over [`TAGS`] with no suggestion cap.
#[fixture]
pub fn engine() -> Engine {
    common_init();
    let engine = Engine::new(TAGS);
    engine.with_limit(usize::MAX)
}

/// Seeded generator of catalog-legal queries, as source text and as the tree
/// that source must parse into.
pub struct QueryGen {
    rng: StdRng,
}

impl QueryGen {
    pub fn new(seed: u64) -> Self {
        common_init();
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A single `subject.verb(value)` call.
    pub fn call(&mut self) -> (String, QueryExpr) {
        let subject = catalog::subjects().choose(&mut self.rng).expect("subjects");
        let verb = subject.verbs.choose(&mut self.rng).expect("verbs");
        let dtype = *subject.types.choose(&mut self.rng).expect("types");
        let value = self.value(dtype);
        let literal = match dtype {
            DType::String => format!("\"{value}\""),
            _ => value.clone(),
        };
        let verb_name = *verb.names().collect::<Vec<_>>().choose(&mut self.rng).expect("names");
        let source = format!("{}.{verb_name}({literal})", subject.name);
        (source, QueryExpr::condition(subject.name, verb.operator, value))
    }

    /// A random AND/OR/NOT tree of calls, fully parenthesised in the source.
    pub fn query(&mut self, depth: usize) -> (String, QueryExpr) {
        if depth == 0 || self.rng.random_bool(0.3) {
            return self.call();
        }
        match self.rng.random_range(0..3) {
            0 => {
                let (source, expr) = self.query(depth - 1);
                (format!("!({source})"), QueryExpr::not(expr))
            }
            n => {
                let (left_source, left) = self.query(depth - 1);
                let (right_source, right) = self.query(depth - 1);
                let (keyword, expr) = if n == 1 {
                    ("AND", QueryExpr::and(left, right))
                } else {
                    ("OR", QueryExpr::or(left, right))
                };
                (format!("({left_source} {keyword} {right_source})"), expr)
            }
        }
    }

    fn value(&mut self, dtype: DType) -> String {
        let values: &[&str] = match dtype {
            DType::String => &["plan", "Q1 review", "in-progress", "a/b: c"],
            DType::Int => &["0", "1", "3", "42"],
            DType::Date => &["2024-01-01", "2021-12-31"],
            DType::DateTime => &["2024-01-01T09:30:00Z", "2024-06-15T23:59:59"],
            DType::Tag => &["work", "school", "1", "17"],
        };
        values.choose(&mut self.rng).expect("values").to_string()
    }
}

mod properties {
    use super::*;

    const SEEDS: std::ops::Range<u64> = 0..64;

    #[test]
    fn legal_queries_parse_to_their_tree() {
        for seed in SEEDS {
            let (source, expected) = QueryGen::new(seed).query(3);
            assert_eq!(parse(&source), Ok(expected), "parsing {source:?}");
        }
    }

    #[test]
    fn legal_queries_compile_to_valid_sql() {
        for seed in SEEDS {
            let (source, expr) = QueryGen::new(seed).query(3);
            let sql = expr.to_verified_sql();
            assert!(sql.is_ok(), "{source:?} failed with {sql:?}");
        }
    }

    #[test]
    fn wire_round_trip_preserves_sql() {
        for seed in SEEDS {
            let (_, expr) = QueryGen::new(seed).query(3);
            let map = expr.to_map().expect("serializes");
            let decoded = QueryExpr::from_map(&map).expect("decodes");
            assert_eq!(decoded.to_sql(), expr.to_sql());
        }
    }

    #[test]
    fn and_always_nests_inside_or() {
        for seed in SEEDS {
            let mut generator = QueryGen::new(seed);
            let (a, a_expr) = generator.call();
            let (b, b_expr) = generator.call();
            let (c, c_expr) = generator.call();
            assert_eq!(
                parse(&format!("{a} AND {b} OR {c}")),
                Ok(QueryExpr::or(
                    QueryExpr::and(a_expr.clone(), b_expr.clone()),
                    c_expr.clone()
                ))
            );
            assert_eq!(
                parse(&format!("{a} OR {b} AND {c}")),
                Ok(QueryExpr::or(a_expr, QueryExpr::and(b_expr, c_expr)))
            );
        }
    }

    #[test]
    fn every_catalog_combination_compiles() {
        let mut generator = QueryGen::new(7);
        for subject in catalog::subjects() {
            for verb in subject.verbs {
                for &dtype in subject.types {
                    let value = generator.value(dtype);
                    let expr = QueryExpr::condition(subject.name, verb.operator, value);
                    let sql = expr.to_verified_sql();
                    assert!(sql.is_ok(), "{expr} failed with {sql:?}");
                }
            }
        }
    }
}
