//! Rebuilds a [`QueryExpr`] from its untyped wire form.
//!
//! Shapes are recognised by key: `field` marks a condition, `left` a binary
//! operation and `operand` a unary one. Operators are re-validated, so a map
//! naming an unknown operator, or a comparison where a connective belongs,
//! never becomes a tree.
use crate::*;
use serde_json::{Map, Value};

impl QueryExpr {
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        if map.is_empty() {
            return Err(DecodeError::Empty);
        }

        if map.contains_key("field") {
            let operator = operator(map, "operator")?;
            if !operator.is_comparison() {
                return Err(DecodeError::InvalidKey {
                    key: "operator",
                    expected: "a comparison operator",
                });
            }
            return Ok(QueryExpr::condition(
                string(map, "field")?,
                operator,
                scalar(map, "value")?,
            ));
        }

        if map.contains_key("left") {
            let operator = operator(map, "op")?;
            if !matches!(operator, Operator::And | Operator::Or | Operator::Xor) {
                return Err(DecodeError::InvalidKey {
                    key: "op",
                    expected: "AND, OR or XOR",
                });
            }
            return Ok(QueryExpr::binary(
                operator,
                Self::from_map(object(map, "left")?)?,
                Self::from_map(object(map, "right")?)?,
            ));
        }

        if map.contains_key("operand") {
            let operator = operator(map, "operator")?;
            if operator != Operator::Not {
                return Err(DecodeError::InvalidKey {
                    key: "operator",
                    expected: "NOT",
                });
            }
            return Ok(QueryExpr::unary(
                operator,
                Self::from_map(object(map, "operand")?)?,
            ));
        }

        Err(DecodeError::UnrecognizedShape)
    }

    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(Error::Internal(format!("query serialized to {other}"))),
            Err(e) => Err(Error::Internal(e.to_string())),
        }
    }
}

fn string<'m>(map: &'m Map<String, Value>, key: &'static str) -> Result<&'m str, DecodeError> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or(DecodeError::InvalidKey {
            key,
            expected: "a string",
        })
}

/// Strings pass through; numbers and booleans are accepted in their JSON spelling.
fn scalar(map: &Map<String, Value>, key: &'static str) -> Result<String, DecodeError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
        _ => Err(DecodeError::InvalidKey {
            key,
            expected: "a string, number or boolean",
        }),
    }
}

fn object<'m>(
    map: &'m Map<String, Value>,
    key: &'static str,
) -> Result<&'m Map<String, Value>, DecodeError> {
    map.get(key)
        .and_then(Value::as_object)
        .ok_or(DecodeError::InvalidKey {
            key,
            expected: "an object",
        })
}

fn operator(map: &Map<String, Value>, key: &'static str) -> Result<Operator, DecodeError> {
    string(map, key)?.parse()
}

impl TryFrom<Value> for QueryExpr {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => QueryExpr::from_map(&map),
            other => Err(DecodeError::NotAnObject(other.to_string())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for QueryExpr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        QueryExpr::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<QueryExpr, DecodeError> {
        QueryExpr::try_from(value)
    }

    #[test]
    fn decodes_every_shape() {
        let value = json!({
            "op": "AND",
            "left": {"field": "tag", "operator": "equals", "value": "work"},
            "right": {
                "operator": "NOT",
                "operand": {"field": "priority", "operator": ">", "value": 2}
            }
        });
        assert_eq!(
            decode(value),
            Ok(QueryExpr::and(
                QueryExpr::condition("tag", Operator::Equals, "work"),
                QueryExpr::not(QueryExpr::condition("priority", Operator::GreaterThan, "2")),
            ))
        );
    }

    #[test]
    fn stringifies_booleans() {
        assert_eq!(
            decode(json!({"field": "completed", "operator": "EQUALS", "value": true})),
            Ok(QueryExpr::condition("completed", Operator::Equals, "true"))
        );
    }

    #[test]
    fn round_trips_through_the_map() {
        let expr = parse("!(tag.eq(1) OR title.contains(\"plan\")) AND due.after(2024-03-01)")
            .expect("query parses");
        let map = expr.to_map().expect("serializes");
        let decoded = QueryExpr::from_map(&map).expect("decodes");
        assert_eq!(decoded, expr);
        assert_eq!(decoded.to_sql(), expr.to_sql());
    }

    #[test]
    fn deserializes_from_json_text() {
        let expr: QueryExpr =
            serde_json::from_str(r#"{"field": "due_date", "operator": "lessThan", "value": "2024-01-01"}"#)
                .expect("valid query");
        assert_eq!(expr.to_sql().as_deref(), Ok("due_date < '2024-01-01'"));

        let error = serde_json::from_str::<QueryExpr>(r#"{"field": "x", "operator": "like", "value": "y"}"#)
            .expect_err("unknown operator");
        assert!(error.to_string().contains("unknown operator `like`"));
    }

    #[test]
    fn accepts_temporal_verb_names_as_operators() {
        assert_eq!(
            decode(json!({"field": "due_date", "operator": "before", "value": "2024-01-01"}))
                .map(|expr| expr.to_sql()),
            Ok(Ok("due_date < '2024-01-01'".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_operators() {
        assert_eq!(
            decode(json!({"field": "tag", "operator": "resembles", "value": "work"})),
            Err(DecodeError::UnknownOperator("resembles".into()))
        );
    }

    #[test]
    fn rejects_misplaced_operators() {
        assert_eq!(
            decode(json!({"field": "tag", "operator": "AND", "value": "work"})),
            Err(DecodeError::InvalidKey {
                key: "operator",
                expected: "a comparison operator"
            })
        );
        assert!(matches!(
            decode(json!({"op": "equals", "left": {}, "right": {}})),
            Err(DecodeError::InvalidKey { key: "op", .. })
        ));
    }

    #[test]
    fn rejects_malformed_maps() {
        assert_eq!(decode(json!({})), Err(DecodeError::Empty));
        assert_eq!(decode(json!([1])), Err(DecodeError::NotAnObject("[1]".into())));
        assert_eq!(decode(json!({"colour": "red"})), Err(DecodeError::UnrecognizedShape));
        assert_eq!(
            decode(json!({"op": "OR", "left": "a", "right": {}})),
            Err(DecodeError::InvalidKey {
                key: "left",
                expected: "an object"
            })
        );
        assert_eq!(
            decode(json!({"field": "tag", "operator": "equals", "value": null})),
            Err(DecodeError::InvalidKey {
                key: "value",
                expected: "a string, number or boolean"
            })
        );
    }
}
