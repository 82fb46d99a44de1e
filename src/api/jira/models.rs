//
//  atlassian-client
//  api/jira/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira issue and attachment types.
//!
//! # Custom Fields and Update Operations
//!
//! Jira accepts custom field values under `fields` and edit operations under
//! `update`. Both are built separately and merged into the issue payload
//! right before it is sent:
//!
//! ```rust
//! use atlassian_client::api::jira::{CustomFields, IssueScheme, UpdateOperations};
//! use serde_json::json;
//!
//! let mut fields = CustomFields::new();
//! fields.number("customfield_10043", 1000.3232)?;
//!
//! let mut operations = UpdateOperations::new();
//! operations.add_array_operation("labels", &[("remove", "triaged")])?;
//!
//! let issue = IssueScheme::default();
//! assert_eq!(
//!     issue.merge_custom_fields(Some(&fields))?,
//!     json!({"fields": {"customfield_10043": 1000.3232}})
//! );
//! assert_eq!(
//!     issue.merge_operations(Some(&operations))?,
//!     json!({"update": {"labels": [{"remove": "triaged"}]}})
//! );
//! # Ok::<(), atlassian_client::api::ApiError>(())
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::api::common::{ApiError, Required};
use crate::api::validate::require;

/// Custom field values keyed by field id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFields {
    fields: Vec<(String, Value)>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw JSON value. The other setters are shorthands for this.
    ///
    /// # Errors
    ///
    /// `Missing(FieldId)` when `field_id` is empty.
    pub fn raw(&mut self, field_id: &str, value: Value) -> Result<&mut Self, ApiError> {
        require(&[(Required::FieldId, field_id)])?;
        self.fields.retain(|(id, _)| id != field_id);
        self.fields.push((field_id.to_string(), value));
        Ok(self)
    }

    pub fn number(&mut self, field_id: &str, value: f64) -> Result<&mut Self, ApiError> {
        self.raw(field_id, Value::from(value))
    }

    pub fn text(&mut self, field_id: &str, value: &str) -> Result<&mut Self, ApiError> {
        self.raw(field_id, Value::from(value))
    }

    pub fn labels<S: AsRef<str>>(&mut self, field_id: &str, labels: &[S]) -> Result<&mut Self, ApiError> {
        let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        self.raw(field_id, json!(labels))
    }

    /// Single select option, sent as `{"value": option}`.
    pub fn select(&mut self, field_id: &str, option: &str) -> Result<&mut Self, ApiError> {
        self.raw(field_id, json!({ "value": option }))
    }

    pub fn multi_select<S: AsRef<str>>(&mut self, field_id: &str, options: &[S]) -> Result<&mut Self, ApiError> {
        let options: Vec<Value> = options
            .iter()
            .map(|option| json!({ "value": option.as_ref() }))
            .collect();
        self.raw(field_id, Value::Array(options))
    }

    /// User picker, sent as `{"accountId": account_id}`.
    pub fn user(&mut self, field_id: &str, account_id: &str) -> Result<&mut Self, ApiError> {
        self.raw(field_id, json!({ "accountId": account_id }))
    }

    /// Date picker, sent as `YYYY-MM-DD`.
    pub fn date(&mut self, field_id: &str, value: NaiveDate) -> Result<&mut Self, ApiError> {
        self.raw(field_id, Value::from(value.format("%Y-%m-%d").to_string()))
    }

    /// Date time picker, sent as `YYYY-MM-DDTHH:MM:SS.sss+0000`.
    pub fn date_time(&mut self, field_id: &str, value: DateTime<Utc>) -> Result<&mut Self, ApiError> {
        self.raw(field_id, Value::from(value.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn to_map(&self) -> Map<String, Value> {
        self.fields.iter().cloned().collect()
    }
}

/// Edit operations (`add`, `set`, `remove`, ...) keyed by field id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOperations {
    fields: Vec<(String, Vec<Value>)>,
}

impl UpdateOperations {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field_id: &str, operation: Value) {
        match self.fields.iter_mut().find(|(id, _)| id == field_id) {
            Some((_, operations)) => operations.push(operation),
            None => self.fields.push((field_id.to_string(), vec![operation])),
        }
    }

    /// Adds one `{operation: value}` entry per pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atlassian_client::api::jira::UpdateOperations;
    ///
    /// let mut operations = UpdateOperations::new();
    /// operations.add_array_operation("labels", &[("add", "triaged"), ("remove", "blocker")])?;
    /// # Ok::<(), atlassian_client::api::ApiError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `Missing(FieldId)` when `field_id` is empty.
    pub fn add_array_operation(&mut self, field_id: &str, entries: &[(&str, &str)]) -> Result<&mut Self, ApiError> {
        require(&[(Required::FieldId, field_id)])?;

        for (operation, value) in entries {
            self.push(field_id, operation_entry(operation, Value::from(*value)));
        }
        Ok(self)
    }

    /// Adds a single `{operation: value}` entry.
    ///
    /// # Errors
    ///
    /// `Missing(FieldId)`, `Missing(EditOperator)` then `Missing(EditValue)`.
    pub fn add_string_operation(&mut self, field_id: &str, operation: &str, value: &str) -> Result<&mut Self, ApiError> {
        require(&[
            (Required::FieldId, field_id),
            (Required::EditOperator, operation),
            (Required::EditValue, value),
        ])?;

        self.push(field_id, operation_entry(operation, Value::from(value)));
        Ok(self)
    }

    /// Adds a single `{operation: value}` entry with an arbitrary JSON value.
    pub fn add_raw_operation(&mut self, field_id: &str, operation: &str, value: Value) -> Result<&mut Self, ApiError> {
        require(&[(Required::FieldId, field_id), (Required::EditOperator, operation)])?;

        self.push(field_id, operation_entry(operation, value));
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn to_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(id, operations)| (id.clone(), Value::Array(operations.clone())))
            .collect()
    }
}

fn operation_entry(operation: &str, value: Value) -> Value {
    let mut entry = Map::new();
    entry.insert(operation.to_string(), value);
    Value::Object(entry)
}

/// A Jira issue, as read and as sent on create/update.
///
/// `description` is plain text on API v2 and an Atlassian Document Format
/// object on v3, hence the raw JSON value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueScheme {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(rename = "self", default, skip_serializing_if = "String::is_empty")]
    pub self_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(rename = "issuetype", default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Reference by id or name (issue type, priority, status).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default)]
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

impl IssueScheme {
    /// Wraps `custom_fields` as `{"fields": {...}}`.
    ///
    /// # Errors
    ///
    /// `Missing(CustomFields)` when `custom_fields` is `None` or empty.
    pub fn merge_custom_fields(&self, custom_fields: Option<&CustomFields>) -> Result<Value, ApiError> {
        match custom_fields {
            Some(fields) if !fields.is_empty() => Ok(json!({ "fields": fields.to_map() })),
            _ => Err(ApiError::Missing(Required::CustomFields)),
        }
    }

    /// Wraps `operations` as `{"update": {...}}`.
    ///
    /// # Errors
    ///
    /// `Missing(Operations)` when `operations` is `None` or empty.
    pub fn merge_operations(&self, operations: Option<&UpdateOperations>) -> Result<Value, ApiError> {
        match operations {
            Some(operations) if !operations.is_empty() => Ok(json!({ "update": operations.to_map() })),
            _ => Err(ApiError::Missing(Required::Operations)),
        }
    }

    /// The request body for create/update: this issue with the custom
    /// fields folded into `fields` and the operations into `update`.
    pub fn to_payload(
        &self,
        custom_fields: Option<&CustomFields>,
        operations: Option<&UpdateOperations>,
    ) -> Result<Value, ApiError> {
        let mut body = serde_json::to_value(self).map_err(ApiError::Encode)?;

        if let Some(fields) = custom_fields.filter(|f| !f.is_empty()) {
            merge_section(&mut body, "fields", fields.to_map());
        }
        if let Some(operations) = operations.filter(|o| !o.is_empty()) {
            merge_section(&mut body, "update", operations.to_map());
        }

        Ok(body)
    }
}

fn merge_section(body: &mut Value, section: &str, entries: Map<String, Value>) {
    let Some(object) = body.as_object_mut() else {
        return;
    };

    let target = object
        .entry(section)
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(target) = target.as_object_mut() {
        target.extend(entries);
    }
}

/// Answer of an issue creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueCreated {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Attachment details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    #[serde(rename = "self")]
    pub self_link: String,
    pub id: String,
    pub filename: String,
    pub author: Option<UserRef>,
    pub created: String,
    pub size: u64,
    pub mime_type: String,
    pub content: String,
    pub thumbnail: Option<String>,
}

/// Attachment details as returned by the metadata endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentMetadata {
    pub id: i64,
    #[serde(rename = "self")]
    pub self_link: String,
    pub filename: String,
    pub author: Option<UserRef>,
    pub created: String,
    pub size: u64,
    pub mime_type: String,
    pub properties: Option<Value>,
    pub content: String,
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_custom_fields() {
        let mut fields = CustomFields::new();
        fields.number("customfield_10043", 1000.3232).unwrap();

        let issue = IssueScheme::default();
        assert_eq!(
            issue.merge_custom_fields(Some(&fields)).unwrap(),
            json!({"fields": {"customfield_10043": 1000.3232}})
        );

        assert!(matches!(
            issue.merge_custom_fields(None),
            Err(ApiError::Missing(Required::CustomFields))
        ));
        assert!(matches!(
            issue.merge_custom_fields(Some(&CustomFields::new())),
            Err(ApiError::Missing(Required::CustomFields))
        ));
    }

    #[test]
    fn test_merge_operations() {
        let mut operations = UpdateOperations::new();
        operations.add_array_operation("labels", &[("remove", "triaged")]).unwrap();

        let issue = IssueScheme::default();
        assert_eq!(
            issue.merge_operations(Some(&operations)).unwrap(),
            json!({"update": {"labels": [{"remove": "triaged"}]}})
        );

        assert!(matches!(
            issue.merge_operations(None),
            Err(ApiError::Missing(Required::Operations))
        ));
        assert!(matches!(
            issue.merge_operations(Some(&UpdateOperations::new())),
            Err(ApiError::Missing(Required::Operations))
        ));
    }

    #[test]
    fn test_add_array_operation_requires_field() {
        let mut operations = UpdateOperations::new();
        assert!(operations.add_array_operation("custom_field_id", &[("verb", "value1")]).is_ok());
        assert!(matches!(
            operations.add_array_operation("", &[("verb", "value1")]),
            Err(ApiError::Missing(Required::FieldId))
        ));
    }

    #[test]
    fn test_add_string_operation_validation_order() {
        let mut operations = UpdateOperations::new();
        assert!(operations
            .add_string_operation("custom_field_id", "operation_sample", "value_sample")
            .is_ok());

        let missing = |field: &str, op: &str, value: &str| {
            UpdateOperations::new()
                .add_string_operation(field, op, value)
                .err()
                .and_then(|e| e.missing())
        };
        assert_eq!(missing("", "operation_sample", "value_sample"), Some(Required::FieldId));
        assert_eq!(missing("custom_field_id", "", "value_sample"), Some(Required::EditOperator));
        assert_eq!(missing("custom_field_id", "operation_sample", ""), Some(Required::EditValue));
    }

    #[test]
    fn test_operations_accumulate_per_field() {
        let mut operations = UpdateOperations::new();
        operations
            .add_string_operation("labels", "add", "triaged")
            .unwrap()
            .add_string_operation("labels", "remove", "blocker")
            .unwrap();

        assert_eq!(
            IssueScheme::default().merge_operations(Some(&operations)).unwrap(),
            json!({"update": {"labels": [{"add": "triaged"}, {"remove": "blocker"}]}})
        );
    }

    #[test]
    fn test_custom_field_shapes() {
        let mut fields = CustomFields::new();
        fields
            .select("customfield_1", "Option A")
            .unwrap()
            .multi_select("customfield_2", &["A", "B"])
            .unwrap()
            .labels("customfield_3", &["x"])
            .unwrap()
            .user("customfield_4", "5b10a2844c20165700ede21g")
            .unwrap()
            .date("customfield_5", NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .unwrap();

        assert_eq!(
            IssueScheme::default().merge_custom_fields(Some(&fields)).unwrap(),
            json!({"fields": {
                "customfield_1": {"value": "Option A"},
                "customfield_2": [{"value": "A"}, {"value": "B"}],
                "customfield_3": ["x"],
                "customfield_4": {"accountId": "5b10a2844c20165700ede21g"},
                "customfield_5": "2024-01-31"
            }})
        );

        assert!(matches!(fields.text("", "x"), Err(ApiError::Missing(Required::FieldId))));
    }

    #[test]
    fn test_to_payload_folds_extras() {
        let issue = IssueScheme {
            fields: Some(IssueFields {
                summary: "New summary test".into(),
                project: Some(ProjectRef {
                    id: Some("10000".into()),
                    key: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut fields = CustomFields::new();
        fields.number("customfield_10043", 9000.0).unwrap();
        let mut operations = UpdateOperations::new();
        operations.add_string_operation("labels", "add", "triaged").unwrap();

        let payload = issue.to_payload(Some(&fields), Some(&operations)).unwrap();
        assert_eq!(
            payload,
            json!({
                "fields": {
                    "summary": "New summary test",
                    "project": {"id": "10000"},
                    "customfield_10043": 9000.0
                },
                "update": {"labels": [{"add": "triaged"}]}
            })
        );
    }
}
