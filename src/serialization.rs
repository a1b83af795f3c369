//! Module with JSON serialization helpers.

/// Tri-state [`Field`](crate::key::Field) serialization methods.
///
/// Must be combined with `#[serde(default)]` so that a missing property
/// deserializes to `Field::Absent`, and with
/// `#[serde(skip_serializing_if = "Field::is_absent")]` so that it is omitted
/// again on serialization.
pub mod field {
    use crate::key::Field;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Field<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Field::Present(value) => serializer.serialize_some(value),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Field<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let option = Option::<T>::deserialize(deserializer)?;
        Ok(option.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Field;
    use serde_json::{json, Value};

    fn from_json(value: Value) -> Field<String> {
        field::deserialize(value).unwrap()
    }

    #[test]
    fn field_deserialization() {
        assert_eq!(from_json(json!("04ab")), Field::Present("04ab".to_owned()));
        assert_eq!(from_json(Value::Null), Field::Null);
        assert!(field::deserialize::<_, String>(json!(42)).is_err());
    }

    #[test]
    fn field_serialization() {
        let to_json =
            |value: Field<&str>| field::serialize(&value, serde_json::value::Serializer).unwrap();
        assert_eq!(to_json(Field::Present("04ab")), json!("04ab"));
        assert_eq!(to_json(Field::Null), Value::Null);
    }
}
