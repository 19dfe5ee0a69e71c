use crate::{FileLink, Project, ProjectStatus};

use googletest::matchers::is_empty as empty;
use googletest::prelude::*;
use serde_json::json;

fn sample_project() -> Project {
    Project {
        id: "a1".to_string(),
        name: "张三 对 李四".to_string(),
        client: "张三".to_string(),
        opponent: "李四".to_string(),
        lawyer: "王律师".to_string(),
        stage: "一审".to_string(),
        completion: 40,
        status: ProjectStatus::InProgress,
        notes: "证据待补".to_string(),
        files: vec![FileLink {
            path: "/cases/a1/起诉状.pdf".to_string(),
            name: "起诉状.pdf".to_string(),
            extension: ".pdf".to_string(),
            is_folder: false,
        }],
        created_at: "2024-03-01T09:00:00".to_string(),
        updated_at: "2024-03-02T10:30:00".to_string(),
    }
}

#[test]
fn given_empty_object_when_from_value_then_all_defaults() {
    // When
    let project = Project::from_value(json!({})).unwrap();

    // Then
    assert_that!(project.id.as_str(), eq(""));
    assert_that!(project.completion, eq(0));
    assert_that!(project.status, eq(ProjectStatus::Waiting));
    assert_that!(project.files, empty());
    assert_that!(project.created_at.as_str(), eq(""));
}

#[test]
fn given_null_fields_when_from_value_then_null_becomes_default() {
    let project = Project::from_value(json!({
        "id": "x",
        "name": null,
        "completion": null,
        "status": null,
        "files": null,
        "created_at": null
    }))
    .unwrap();

    assert_that!(project.id.as_str(), eq("x"));
    assert_that!(project.name.as_str(), eq(""));
    assert_that!(project.completion, eq(0));
    assert_that!(project.status, eq(ProjectStatus::Waiting));
    assert_that!(project.files, empty());
}

#[test]
fn given_loosely_typed_completion_when_from_value_then_coerced_to_integer() {
    let from_string = Project::from_value(json!({ "completion": "75" })).unwrap();
    let from_float = Project::from_value(json!({ "completion": 33.9 })).unwrap();

    assert_that!(from_string.completion, eq(75));
    assert_that!(from_float.completion, eq(33));
}

#[test]
fn given_invalid_status_when_from_value_then_reset_to_first_status() {
    let project = Project::from_value(json!({ "status": "archived" })).unwrap();

    assert_that!(project.status, eq(ProjectStatus::default()));
}

#[test]
fn given_non_object_when_from_value_then_error() {
    assert!(Project::from_value(json!("not a project")).is_err());
    assert!(Project::from_value(json!([1, 2])).is_err());
}

#[test]
fn given_non_string_status_when_from_value_then_reset_to_first_status() {
    for status in [json!(1), json!(true), json!({}), json!(["已结案"])] {
        let project = Project::from_value(json!({ "id": "keep", "status": status })).unwrap();

        assert_that!(project.id.as_str(), eq("keep"));
        assert_that!(project.status, eq(ProjectStatus::Waiting));
    }
}

#[test]
fn given_alias_or_padded_status_when_from_value_then_reset_to_first_status() {
    let alias = Project::from_value(json!({ "status": "closed" })).unwrap();
    let padded = Project::from_value(json!({ "status": " 正在处理 " })).unwrap();

    assert_that!(alias.status, eq(ProjectStatus::Waiting));
    assert_that!(padded.status, eq(ProjectStatus::Waiting));
}

#[test]
fn given_wrongly_typed_text_fields_when_from_value_then_scalars_stringified() {
    let project = Project::from_value(json!({
        "id": 7,
        "name": 42,
        "client": true,
        "notes": ["not", "text"],
        "created_at": {}
    }))
    .unwrap();

    assert_that!(project.id.as_str(), eq("7"));
    assert_that!(project.name.as_str(), eq("42"));
    assert_that!(project.client.as_str(), eq("true"));
    assert_that!(project.notes.as_str(), eq(""));
    assert_that!(project.created_at.as_str(), eq(""));
}

#[test]
fn given_unusable_completion_when_from_value_then_zero_or_saturated() {
    let text = Project::from_value(json!({ "completion": "abc" })).unwrap();
    let decimal_text = Project::from_value(json!({ "completion": " 12.7 " })).unwrap();
    let huge = Project::from_value(json!({ "completion": 10_000_000_000i64 })).unwrap();
    let object = Project::from_value(json!({ "completion": {} })).unwrap();

    assert_that!(text.completion, eq(0));
    assert_that!(decimal_text.completion, eq(12));
    assert_that!(huge.completion, eq(i32::MAX));
    assert_that!(object.completion, eq(0));
}

#[test]
fn given_malformed_files_when_from_value_then_usable_links_kept() {
    let not_a_list = Project::from_value(json!({ "files": "x" })).unwrap();
    let mixed = Project::from_value(json!({
        "files": [
            "bare string",
            { "path": "/docs", "name": "docs", "is_folder": "true" },
            { "path": 3, "is_folder": 0 }
        ]
    }))
    .unwrap();

    assert_that!(not_a_list.files, empty());
    assert_that!(mixed.files.len(), eq(2));
    assert_that!(mixed.files[0].is_folder, eq(true));
    assert_that!(mixed.files[1].path.as_str(), eq("3"));
    assert_that!(mixed.files[1].is_folder, eq(false));
}

#[test]
fn given_project_when_to_value_then_round_trips_field_for_field() {
    let original = sample_project();

    let value = original.to_value().unwrap();
    let restored = Project::from_value(value.clone()).unwrap();

    assert_that!(restored, eq(&original));
    assert_that!(value["status"].as_str(), some(eq("正在处理")));
    assert_that!(value["files"][0]["extension"].as_str(), some(eq(".pdf")));
}

#[test]
fn given_project_when_to_value_then_keys_in_persisted_order() {
    let value = sample_project().to_value().unwrap();

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "id",
            "name",
            "client",
            "opponent",
            "lawyer",
            "stage",
            "completion",
            "status",
            "notes",
            "files",
            "created_at",
            "updated_at"
        ]
    );
}

#[test]
fn given_fresh_project_when_ensure_defaults_then_both_timestamps_set() {
    let mut project = Project::default();

    project.ensure_defaults_at("2024-05-01T08:00:00");

    assert_that!(project.created_at.as_str(), eq("2024-05-01T08:00:00"));
    assert_that!(project.updated_at.as_str(), eq("2024-05-01T08:00:00"));
}

#[test]
fn given_existing_created_at_when_ensure_defaults_then_only_updated_at_changes() {
    let mut project = sample_project();

    project.ensure_defaults_at("2024-06-01T12:00:00");

    assert_that!(project.created_at.as_str(), eq("2024-03-01T09:00:00"));
    assert_that!(project.updated_at.as_str(), eq("2024-06-01T12:00:00"));
}

#[test]
fn given_project_when_ensure_defaults_then_timestamp_has_second_precision() {
    let mut project = Project::default();

    project.ensure_defaults();

    assert_that!(project.updated_at.len(), eq(19));
    assert_that!(
        chrono::NaiveDateTime::parse_from_str(&project.updated_at, crate::TIMESTAMP_FORMAT),
        ok(anything())
    );
}

#[test]
fn given_missing_updated_at_when_sort_key_then_uses_created_at() {
    let mut project = sample_project();
    project.updated_at.clear();

    assert_that!(project.sort_key(), eq("2024-03-01T09:00:00"));
}
