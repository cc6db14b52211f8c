use serde_json::{Map, Number, Value};

/// A single parsed cell. In the records output `Int(1)` becomes `1` and
/// `Null` becomes `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infer a typed value from a raw CSV cell: empty becomes null, then
    /// boolean, integer, and float parses are tried in order, falling back
    /// to text.
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Null;
        }
        match raw {
            "true" | "True" | "TRUE" => return CellValue::Bool(true),
            "false" | "False" | "FALSE" => return CellValue::Bool(false),
            _ => {}
        }
        if let Ok(i) = raw.parse::<i64>() {
            return CellValue::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            // "inf" and "nan" parse as f64 but have no JSON representation
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }
        CellValue::Text(raw.to_string())
    }

    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Int(i) => Value::Number((*i).into()),
            CellValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            CellValue::Text(s) => Value::String(s.clone()),
        }
    }
}

/// In-memory table parsed from a CSV upload. Column order and row order
/// mirror the source exactly; every row holds one cell per column.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Serialize as a JSON array of records, one object per row, keyed by
    /// column header in original order.
    pub fn to_records_json(&self) -> String {
        let mut records = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut record = Map::with_capacity(self.columns.len());
            for (name, cell) in self.columns.iter().zip(row) {
                record.insert(name.clone(), cell.to_json());
            }
            records.push(Value::Object(record));
        }
        Value::Array(records).to_string()
    }
}
