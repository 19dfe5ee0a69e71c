use crate::ProjectStatus;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Waiting.as_str(), "等待接手");
    assert_eq!(ProjectStatus::InProgress.as_str(), "正在处理");
    assert_eq!(ProjectStatus::Closed.as_str(), "已结案");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("正在处理").unwrap(),
        ProjectStatus::InProgress
    );
    assert_eq!(
        ProjectStatus::from_str("closed").unwrap(),
        ProjectStatus::Closed
    );
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_default_is_first() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::ALL[0]);
    assert_eq!(ProjectStatus::default(), ProjectStatus::Waiting);
}

#[test]
fn given_unknown_status_when_deserialized_then_falls_back_to_default() {
    let status: ProjectStatus = serde_json::from_str(r#""暂停""#).unwrap();

    assert_that!(status, eq(ProjectStatus::Waiting));
}

#[test]
fn given_exact_label_when_from_label_then_matched_without_aliases() {
    assert_that!(ProjectStatus::from_label("已结案"), some(eq(ProjectStatus::Closed)));
    assert_that!(ProjectStatus::from_label("closed"), none());
    assert_that!(ProjectStatus::from_label(" 已结案"), none());
}

#[test]
fn given_numeric_status_when_deserialized_then_falls_back_to_default() {
    let status: ProjectStatus = serde_json::from_str("2").unwrap();

    assert_that!(status, eq(ProjectStatus::Waiting));
}

#[test]
fn given_null_status_when_deserialized_then_falls_back_to_default() {
    let status: ProjectStatus = serde_json::from_str("null").unwrap();

    assert_that!(status, eq(ProjectStatus::Waiting));
}

#[test]
fn given_status_when_serialized_then_uses_persisted_label() {
    let json = serde_json::to_string(&ProjectStatus::Closed).unwrap();

    assert_that!(json.as_str(), eq(r#""已结案""#));
}
