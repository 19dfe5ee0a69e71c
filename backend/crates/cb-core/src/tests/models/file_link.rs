use crate::{AttachmentState, FileLink};

use googletest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn given_directory_when_from_path_then_folder_without_extension() {
    // Given
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("卷宗.v2");
    std::fs::create_dir(&dir).unwrap();

    // When
    let link = FileLink::from_path(dir.to_str().unwrap());

    // Then
    assert_that!(link.is_folder, eq(true));
    assert_that!(link.extension.as_str(), eq(""));
    assert_that!(link.name.as_str(), eq("卷宗.v2"));
}

#[test]
fn given_tmp_when_from_path_then_is_folder() {
    let link = FileLink::from_path(std::env::temp_dir().to_str().unwrap());

    assert_that!(link.is_folder, eq(true));
    assert_that!(link.extension.as_str(), eq(""));
}

#[test]
fn given_file_with_uppercase_extension_when_from_path_then_extension_lowercased_with_dot() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Complaint.PDF");
    std::fs::write(&file, b"%PDF").unwrap();

    let link = FileLink::from_path(file.to_str().unwrap());

    assert_that!(link.is_folder, eq(false));
    assert_that!(link.extension.as_str(), eq(".pdf"));
    assert_that!(link.name.as_str(), eq("Complaint.PDF"));
    assert_that!(link.icon(), eq("📕"));
}

#[test]
fn given_nonexistent_path_when_from_path_then_treated_as_file() {
    let link = FileLink::from_path("/no/such/dir/evidence.docx");

    assert_that!(link.is_folder, eq(false));
    assert_that!(link.extension.as_str(), eq(".docx"));
    assert_that!(link.name.as_str(), eq("evidence.docx"));
}

#[test]
fn given_path_without_final_segment_when_from_path_then_name_is_full_path() {
    let link = FileLink::from_path("/");

    assert_that!(link.name.as_str(), eq("/"));
}

#[test]
fn given_empty_path_when_from_path_then_name_is_empty_and_state_empty() {
    let link = FileLink::from_path("");

    assert_that!(link.name.as_str(), eq(""));
    assert_that!(link.state(), eq(AttachmentState::Empty));
}

#[test]
fn given_deleted_file_when_state_then_missing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.txt");
    std::fs::write(&file, "x").unwrap();
    let link = FileLink::from_path(file.to_str().unwrap());
    assert_that!(link.state(), eq(AttachmentState::Ok));

    std::fs::remove_file(&file).unwrap();

    assert_that!(link.state(), eq(AttachmentState::Missing));
}

#[test]
fn given_empty_object_when_from_value_then_defaults() {
    let link = FileLink::from_value(json!({})).unwrap();

    assert_that!(link, eq(&FileLink::default()));
}

#[test]
fn given_link_when_to_value_then_has_persisted_keys() {
    let link = FileLink {
        path: "/cases/a.xlsx".to_string(),
        name: "a.xlsx".to_string(),
        extension: ".xlsx".to_string(),
        is_folder: false,
    };

    let value = link.to_value().unwrap();

    assert_that!(
        value,
        eq(&json!({
            "path": "/cases/a.xlsx",
            "name": "a.xlsx",
            "extension": ".xlsx",
            "is_folder": false
        }))
    );
}

#[test]
fn given_extensions_when_icon_then_matches_kind() {
    let icon = |ext: &str| FileLink {
        extension: ext.to_string(),
        ..FileLink::default()
    }
    .icon();

    assert_eq!(icon(".docx"), "📝");
    assert_eq!(icon(".xls"), "📊");
    assert_eq!(icon(".pptx"), "📈");
    assert_eq!(icon(".rar"), "🗜️");
    assert_eq!(icon(".jpeg"), "🖼️");
    assert_eq!(icon(".md"), "📄");
    assert_eq!(
        FileLink {
            is_folder: true,
            ..FileLink::default()
        }
        .icon(),
        "📁"
    );
}
