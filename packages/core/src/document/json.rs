//! `serde_json::Value` as a queryable document
//!
//! Map order follows insertion order through serde_json's `preserve_order`.

use serde_json::{Map, Value};

use super::{Document, MapAccess, Node, Scalar};

impl Document for Value {
    fn node(&self) -> Node<'_, Self> {
        match self {
            Value::Object(map) => Node::Map(map),
            Value::Array(items) => Node::List(items),
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(value) => Node::Scalar(Scalar::Bool(*value)),
            Value::String(value) => Node::Scalar(Scalar::String(value)),
            Value::Number(number) => Node::Scalar(match number.as_i64() {
                Some(integer) => Scalar::Integer(integer),
                // u64 above i64::MAX and decimals
                None => Scalar::Float(number.as_f64().unwrap_or(f64::NAN)),
            }),
        }
    }
}

impl MapAccess<Value> for Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn len(&self) -> usize {
        Map::len(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_values_map_to_nodes() {
        let document = json!({"b": 1, "a": [true, null, 2.5, "x"]});
        let Node::Map(map) = document.node() else {
            panic!("Expected map node");
        };
        let keys: Vec<&str> = map.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(map.len(), 2);

        let Some(Node::List(items)) = map.lookup("a").map(Document::node) else {
            panic!("Expected list node");
        };
        let scalars: Vec<Scalar<'_>> = items
            .iter()
            .filter_map(|item| match item.node() {
                Node::Scalar(scalar) => Some(scalar),
                _ => None,
            })
            .collect();
        assert_eq!(
            scalars,
            vec![
                Scalar::Bool(true),
                Scalar::Null,
                Scalar::Float(2.5),
                Scalar::String("x"),
            ]
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(json!({}).node().type_name(), "object");
        assert_eq!(json!([]).node().type_name(), "array");
        assert_eq!(json!(3).node().type_name(), "number");
        assert_eq!(json!("s").node().type_name(), "string");
    }
}
