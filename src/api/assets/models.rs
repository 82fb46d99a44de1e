//
//  atlassian-client
//  api/assets/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Assets object types.
//!
//! Every field is optional on the wire; missing values deserialize to their
//! defaults so partial responses still decode.

use serde::{Deserialize, Serialize};

use crate::api::common::{Continuation, Paginated};

/// An Assets object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Object {
    pub workspace_id: String,
    pub global_id: String,
    pub id: String,
    pub label: String,
    pub object_key: String,
    pub object_type: Option<ObjectType>,
    pub created: String,
    pub updated: String,
    pub has_avatar: bool,
    pub timestamp: i64,
    pub attributes: Vec<ObjectAttribute>,
    #[serde(rename = "_links")]
    pub links: Option<ObjectLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectType {
    pub workspace_id: String,
    pub global_id: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub object_schema_id: String,
    pub object_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// One attribute of an object together with its values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectAttribute {
    pub workspace_id: String,
    pub global_id: String,
    pub id: String,
    pub object_type_attribute_id: String,
    pub object_attribute_values: Vec<ObjectAttributeValue>,
    pub object_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectAttributeValue {
    pub value: Option<serde_json::Value>,
    pub searchvalue: String,
    pub referenced_type: bool,
    pub display_value: Option<serde_json::Value>,
}

/// One entry of an object's change history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectHistory {
    pub actor: Option<ObjectHistoryActor>,
    pub id: String,
    pub affected_attribute: String,
    pub old_value: String,
    pub new_value: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub created: String,
    pub object_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectHistoryActor {
    pub avatar_url: String,
    pub display_name: String,
    pub name: String,
    pub key: String,
    pub email_address: String,
}

/// Count of references from an object to one object type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectReferenceTypeInfo {
    pub reference_type: Option<serde_json::Value>,
    pub object_type: Option<ObjectType>,
    pub number_of_referenced_objects: i64,
}

/// Jira tickets connected to an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectTickets {
    pub tickets: Vec<ObjectTicket>,
    pub all_tickets_query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectTicket {
    pub key: String,
    pub id: i64,
    pub reporter: String,
    pub created: String,
    pub updated: String,
    pub title: String,
    pub status: Option<serde_json::Value>,
}

/// Body for object create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPayload {
    pub object_type_id: String,
    #[serde(default)]
    pub avatar_uuid: Option<String>,
    #[serde(default)]
    pub has_avatar: bool,
    #[serde(default)]
    pub attributes: Vec<ObjectPayloadAttribute>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPayloadAttribute {
    pub object_type_attribute_id: String,
    pub object_attribute_values: Vec<ObjectPayloadAttributeValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPayloadAttributeValue {
    pub value: String,
}

/// Body for the navigation list search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSearchParams {
    #[serde(rename = "qlQuery", skip_serializing_if = "String::is_empty", default)]
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub object_type_id: String,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub page: u32,
    #[serde(rename = "resultsPerPage", skip_serializing_if = "is_zero", default)]
    pub result_per_page: u32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub object_schema_id: String,
    #[serde(default)]
    pub include_attributes: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attributes_to_display: Option<AttributesToDisplay>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributesToDisplay {
    pub attributes_to_display_ids: Vec<u64>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Result page of an AQL filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectListResult {
    pub start_at: u64,
    pub max_results: u64,
    pub total: u64,
    pub values: Vec<Object>,
    pub object_type_attributes: Vec<serde_json::Value>,
    pub has_more_results: bool,
    pub last: bool,
    pub is_last: bool,
}

impl Paginated for ObjectListResult {
    fn continuation(&self) -> Continuation {
        if self.last || self.is_last {
            return Continuation::done();
        }
        Continuation::from_offset(self.start_at, self.values.len() as u64, self.total)
    }
}

/// Result page of a navigation list search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectList {
    pub object_entries: Vec<Object>,
    pub object_type_attributes: Vec<serde_json::Value>,
    pub object_type_id: i64,
    pub object_type_is_inherited: bool,
    pub abstract_object_type: bool,
    pub total_filter_count: u64,
    pub start_index: u64,
    pub to_index: u64,
    pub page_object_size: u64,
    pub page_number: u64,
    pub order_way: String,
    pub ql_query: String,
    pub ql_query_search_result: bool,
    pub iql: String,
    pub iql_search_result: bool,
    pub conversion_possible: bool,
}

impl Paginated for ObjectList {
    fn continuation(&self) -> Continuation {
        if self.object_entries.is_empty() {
            return Continuation::done();
        }
        Continuation::from_page(self.page_number, self.to_index, self.total_filter_count)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_params_serialization() {
        let params = ObjectSearchParams {
            query: "objectType = Office AND Name LIKE SYD".into(),
            object_type_id: "23".into(),
            page: 1,
            result_per_page: 25,
            object_schema_id: "6".into(),
            include_attributes: false,
            attributes_to_display: Some(AttributesToDisplay {
                attributes_to_display_ids: vec![135, 144],
            }),
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "qlQuery": "objectType = Office AND Name LIKE SYD",
                "objectTypeId": "23",
                "page": 1,
                "resultsPerPage": 25,
                "objectSchemaId": "6",
                "includeAttributes": false,
                "attributesToDisplay": {"attributesToDisplayIds": [135, 144]}
            })
        );
    }

    #[test]
    fn test_list_result_continuation() {
        let page: ObjectListResult = serde_json::from_value(json!({
            "startAt": 0,
            "maxResults": 2,
            "total": 5,
            "values": [{"id": "1"}, {"id": "2"}],
            "hasMoreResults": true
        }))
        .unwrap();

        let next = page.continuation();
        assert!(next.has_more);
        assert_eq!(next.next.as_deref(), Some("2"));

        let last: ObjectListResult = serde_json::from_value(json!({"isLast": true, "values": []})).unwrap();
        assert!(!last.has_next());
    }

    #[test]
    fn test_navlist_continuation_is_page_number() {
        let entries: Vec<_> = (1..=25).map(|id| json!({"id": id.to_string()})).collect();
        let page: ObjectList = serde_json::from_value(json!({
            "objectEntries": entries,
            "totalFilterCount": 60,
            "startIndex": 0,
            "toIndex": 25,
            "pageObjectSize": 25,
            "pageNumber": 1
        }))
        .unwrap();
        assert_eq!(page.continuation(), Continuation::more("2"));

        let last: ObjectList = serde_json::from_value(json!({
            "objectEntries": [{"id": "51"}],
            "totalFilterCount": 60,
            "startIndex": 50,
            "toIndex": 60,
            "pageObjectSize": 25,
            "pageNumber": 3
        }))
        .unwrap();
        assert!(!last.has_next());

        let empty: ObjectList = serde_json::from_value(json!({"totalFilterCount": 60, "pageNumber": 2})).unwrap();
        assert!(!empty.has_next());
    }
}
