//! Records and paginated list responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque API record, returned verbatim from the remote API.
pub type Record = Map<String, Value>;

/// Page size the API assumes when a list response omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// One page of a list endpoint.
///
/// Wire format: `{"hasMore": bool, "totalCount": n, "limit": n, "offset": n, "data": [...]}`.
/// Missing fields fall back to `false`, `0`, `10`, `0` and an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T = Record> {
    /// Whether more records exist after this page.
    #[serde(default)]
    pub has_more: bool,
    /// Total number of records matching the query.
    #[serde(default)]
    pub total_count: u64,
    /// Page size used by the server.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Offset of the first record of this page.
    #[serde(default)]
    pub offset: u64,
    /// Records in this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl<T> Page<T> {
    /// Number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Normalise a decoded response body into a [`Record`].
///
/// Objects are returned as-is; any other JSON value is wrapped as
/// `{"data": value}`; `null` becomes an empty record.
#[must_use]
pub fn into_record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        Value::Null => Record::new(),
        other => {
            let mut record = Record::new();
            record.insert("data".to_string(), other);
            record
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_parses_wire_format() {
        let page: Page = serde_json::from_value(json!({
            "object": "list",
            "hasMore": true,
            "totalCount": 42,
            "limit": 2,
            "offset": 4,
            "data": [{"id": "cus_1"}, {"id": "cus_2"}]
        }))
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.total_count, 42);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 4);
        assert_eq!(page.len(), 2);
        assert_eq!(page.data[1]["id"], "cus_2");
    }

    #[test]
    fn page_defaults_missing_fields() {
        let page: Page = serde_json::from_value(json!({})).unwrap();
        assert!(!page.has_more);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn page_into_typed_records() {
        #[derive(Debug, Deserialize)]
        struct Customer {
            id: String,
        }

        let page: Page<Customer> =
            serde_json::from_value(json!({"data": [{"id": "cus_9", "name": "Ana"}]})).unwrap();
        let ids: Vec<String> = page.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["cus_9"]);
    }

    #[test]
    fn into_record_wraps_non_objects() {
        assert_eq!(into_record(json!({"a": 1}))["a"], 1);
        assert!(into_record(Value::Null).is_empty());
        assert_eq!(into_record(json!([1, 2]))["data"], json!([1, 2]));
    }
}
