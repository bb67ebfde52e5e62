//! Core data types for the storage layer.
//!
//! Every value is stored as text. Numeric interpretation happens lazily at
//! the call sites that need it (id range selection, bonus lookup, aggregate).

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, TinyDbError};

/// Name of the uniqueness key carried by every table schema.
pub const ID_FIELD: &str = "id";

/// Ordered, duplicate-free list of field names for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Build a schema from field names.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::InvalidInput` if a name repeats or if the
    /// `id` field is missing.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if names.contains(&field) {
                return Err(TinyDbError::InvalidInput(format!(
                    "Duplicate field name in schema: {}",
                    field
                )));
            }
            names.push(field);
        }
        if !names.iter().any(|name| name == ID_FIELD) {
            return Err(TinyDbError::InvalidInput(
                "Schema must contain an id field".to_string(),
            ));
        }
        Ok(Self { fields: names })
    }

    /// Schema inferred from a token count: `id, field1, field2, ...`.
    pub fn inferred(width: usize) -> Self {
        let mut fields = vec![ID_FIELD.to_string()];
        fields.extend((1..width.max(1)).map(|i| format!("field{}", i)));
        Self { fields }
    }

    pub(crate) fn fixed(names: &[&str]) -> Self {
        Self {
            fields: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One row: an ordered mapping from field name to text value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    /// Parse a whitespace-separated insert line against a schema.
    ///
    /// Tokens are zipped positionally with the schema fields. Excess tokens
    /// are dropped; fields without a token are stored as empty text, so the
    /// result always carries exactly the schema's fields.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::InvalidInput` if the line has no tokens.
    pub fn parse(schema: &Schema, raw: &str) -> Result<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(TinyDbError::InvalidInput(
                "Insert line is empty".to_string(),
            ));
        }
        let fields = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), tokens.get(i).copied().unwrap_or("").to_string()))
            .collect();
        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD)
    }

    /// Set a field, overwriting in place when it already exists.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Predicate shapes accepted by `Table::select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Inclusive numeric range over `id`.
    IdRange { start: i64, end: i64 },

    /// Exact text equality on a named field.
    FieldEquals { field: String, value: String },

    /// Numeric equality on `employee_id`.
    EmployeeId(i64),
}

impl Selection {
    pub fn id_range(start: i64, end: i64) -> Self {
        Selection::IdRange { start, end }
    }

    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Selection::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn employee_id(id: i64) -> Self {
        Selection::EmployeeId(id)
    }

    /// Short label used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Selection::IdRange { .. } => "id range",
            Selection::FieldEquals { .. } => "field equality",
            Selection::EmployeeId(_) => "employee id",
        }
    }

    pub(crate) fn matches(&self, record: &Record) -> Result<bool> {
        match self {
            Selection::IdRange { start, end } => {
                let id = parse_int(record, ID_FIELD)?;
                Ok(*start <= id && id <= *end)
            }
            Selection::FieldEquals { field, value } => Ok(record.get(field) == Some(value.as_str())),
            Selection::EmployeeId(employee_id) => {
                Ok(parse_int(record, "employee_id")? == *employee_id)
            }
        }
    }
}

fn parse_int(record: &Record, field: &str) -> Result<i64> {
    let raw = record.get(field).unwrap_or("");
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TinyDbError::non_numeric(field, raw))
}

/// Result of a single-column numeric aggregate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AggregateResult {
    pub sum: f64,
    pub count: usize,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_schema() -> Schema {
        Schema::fixed(&["id", "name", "age", "salary", "department_id"])
    }

    #[test]
    fn test_parse_zips_tokens_onto_schema() {
        let record = Record::parse(&employee_schema(), "1 Alice 30 70000 1").unwrap();
        let pairs: Vec<(&str, &str)> = record.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("id", "1"),
                ("name", "Alice"),
                ("age", "30"),
                ("salary", "70000"),
                ("department_id", "1"),
            ]
        );
    }

    #[test]
    fn test_parse_drops_excess_and_blanks_missing() {
        let schema = Schema::fixed(&["id", "department_name"]);
        let record = Record::parse(&schema, "7 Legal extra tokens").unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("department_name"), Some("Legal"));

        let record = Record::parse(&employee_schema(), "8 Zoe").unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(record.get("age"), Some(""));
    }

    #[test]
    fn test_parse_rejects_blank_line() {
        let err = Record::parse(&employee_schema(), "   ").unwrap_err();
        assert!(matches!(err, TinyDbError::InvalidInput(_)));
    }

    #[test]
    fn test_schema_rejects_duplicates_and_missing_id() {
        assert!(Schema::new(["id", "name", "name"]).is_err());
        assert!(Schema::new(["name"]).is_err());
        assert_eq!(Schema::new(["id", "name"]).unwrap().len(), 2);
    }

    #[test]
    fn test_inferred_schema_names() {
        let schema = Schema::inferred(3);
        assert_eq!(schema.fields(), &["id", "field1", "field2"]);
        assert_eq!(Schema::inferred(0).fields(), &["id"]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = Record::from_pairs([("id", "1"), ("name", "Alice")]);
        record.set("name", "Alicia");
        record.set("team", "blue");
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "name", "team"]);
        assert_eq!(record.get("name"), Some("Alicia"));
    }

    #[test]
    fn test_selection_matches() {
        let record = Record::from_pairs([("id", "5"), ("employee_id", "3")]);
        assert!(Selection::id_range(5, 6).matches(&record).unwrap());
        assert!(!Selection::id_range(6, 9).matches(&record).unwrap());
        assert!(Selection::employee_id(3).matches(&record).unwrap());
        assert!(Selection::field_equals("id", "5").matches(&record).unwrap());

        let bad = Record::from_pairs([("id", "x")]);
        let err = Selection::id_range(0, 10).matches(&bad).unwrap_err();
        assert!(matches!(err, TinyDbError::NonNumericField { .. }));
    }

    #[test]
    fn test_record_serializes_in_field_order() {
        let record = Record::from_pairs([("id", "2"), ("department_name", "Engineering")]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"2","department_name":"Engineering"}"#);
    }

    #[test]
    fn test_aggregate_result_uses_fixed_keys() {
        let result = AggregateResult {
            sum: 58.0,
            count: 2,
            max: 30.0,
            min: 28.0,
            avg: 29.0,
        };
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"SUM": 58.0, "COUNT": 2, "MAX": 30.0, "MIN": 28.0, "AVG": 29.0})
        );
    }
}
