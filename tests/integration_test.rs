/// Integration tests for the application layer
mod test_utilities;

use ccli::ports::outbound::{DeleteOptions, ProfileEntry, RemotePart};
use ccli::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

fn write_record(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn stored_part(id: &str, fvc: &str) -> RemotePart {
    RemotePart {
        id: id.to_string(),
        name: "openssl".to_string(),
        version: "1.1.1n".to_string(),
        file_verification_code: fvc.to_string(),
        size: 9_832_116,
        license: "OpenSSL".to_string(),
        ..RemotePart::default()
    }
}

#[tokio::test]
async fn test_add_part_with_aliases_and_composites() {
    let dir = TempDir::new().unwrap();
    let path = write_record(
        &dir,
        "busybox.yml",
        r#"
format: 1.0
name: busybox
version: 1.35.0
type: binary
license:
  license_expression: GPL-2.0-only
  analysis_type: scanner
aliases:
  - busybox-static
  - bb
composite_list:
  - catalog_id: 6c1ef2c4-5a0e-4b8e-8d44-0cf1f5f7d2a1
    path: a
  - catalog_id: 9f0c2a54-3f0b-4a6b-8a2c-6f1b0b3b7c11
    path: b
  - catalog_id: 0b1e6c9d-2f4a-4d8e-9a7b-1c2d3e4f5a6b
    path: a
  - catalog_id: 7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d
    path: c
"#,
    );
    let client = MockCatalogClient::new().creating("P1");
    let reporter = MockProgressReporter::new();

    let use_case = AddPartUseCase::new(FileSystemReader::new(), client.clone(), reporter.clone());
    let report = use_case.execute(&path).await.unwrap();

    assert_eq!(report.catalog_id().as_str(), "P1");
    assert_eq!(
        client.operations(),
        vec![
            "createPart",
            "createAlias",
            "createAlias",
            "partHasPart",
            "partHasPart",
            "partHasPart"
        ]
    );

    let created = &client.payloads("createPart")[0];
    assert_eq!(created["name"], "busybox");
    assert_eq!(created["license"], "GPL-2.0-only");
    assert_eq!(created["license_rationale"], "scanner");

    let paths: Vec<String> = client
        .payloads("partHasPart")
        .iter()
        .map(|payload| payload["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["a", "b", "c"]);
    assert_eq!(
        client.payloads("partHasPart")[0]["child"],
        "6c1ef2c4-5a0e-4b8e-8d44-0cf1f5f7d2a1"
    );
    assert_eq!(report.applied.len(), 5);
    assert!(reporter.has_message_containing("added with catalog id P1"));
}

#[tokio::test]
async fn test_add_part_follow_up_failure_reports_partial_effect() {
    let dir = TempDir::new().unwrap();
    let path = write_record(
        &dir,
        "busybox.yml",
        "name: busybox\naliases:\n  - one\ncomposite_list:\n  - 6c1ef2c4-5a0e-4b8e-8d44-0cf1f5f7d2a1\n",
    );
    let client = MockCatalogClient::new()
        .creating("P1")
        .failing_on("partHasPart");
    let reporter = MockProgressReporter::new();

    let use_case = AddPartUseCase::new(FileSystemReader::new(), client.clone(), reporter.clone());
    let error = use_case.execute(&path).await.unwrap_err();

    let message = error.to_string();
    assert!(message.contains("Part P1 was created"));
    assert!(message.contains("1 of 2"));
    assert!(matches!(
        error.downcast_ref::<CatalogError>(),
        Some(CatalogError::RemoteCallFailed { .. })
    ));
    assert_eq!(
        client.operations(),
        vec!["createPart", "createAlias", "partHasPart"]
    );
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error: ")));
}

#[tokio::test]
async fn test_update_is_sparse() {
    let dir = TempDir::new().unwrap();
    let path = write_record(
        &dir,
        "update.yml",
        "catalog_id: X\ndescription: new desc\n",
    );
    let client = MockCatalogClient::new().with_part(stored_part("X", "FVC2-X"));

    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    let report = use_case.execute(&path, UpdateMode::Sparse).await.unwrap();

    assert_eq!(client.operations(), vec!["updatePart"]);
    assert_eq!(
        client.payloads("updatePart")[0],
        json!({"id": "X", "description": "new desc"})
    );
    assert_eq!(report.part.description, "new desc");
    assert_eq!(report.part.name, "openssl");
}

#[tokio::test]
async fn test_set_sends_every_field() {
    let dir = TempDir::new().unwrap();
    let path = write_record(&dir, "set.yml", "fvc: FVC2-X\nname: openssl\n");
    let client = MockCatalogClient::new().with_part(stored_part("X", "FVC2-X"));

    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    use_case.execute(&path, UpdateMode::Overwrite).await.unwrap();

    assert_eq!(client.operations(), vec!["part", "setPart"]);
    let payload = &client.payloads("setPart")[0];
    assert_eq!(payload["id"], "X");
    assert_eq!(payload["name"], "openssl");
    assert_eq!(payload["version"], "");
    assert_eq!(payload["description"], "");
    assert!(payload["comprised"].is_null());
}

#[tokio::test]
async fn test_update_without_identifier_makes_no_call() {
    let dir = TempDir::new().unwrap();
    let path = write_record(&dir, "update.yml", "name: openssl\nversion: 1.1.1n\n");
    let client = MockCatalogClient::new();

    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    let error = use_case
        .execute(&path, UpdateMode::Sparse)
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<CatalogError>(),
        Some(CatalogError::MissingIdentifier { .. })
    ));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_update_unknown_hash_names_the_value() {
    let dir = TempDir::new().unwrap();
    let path = write_record(&dir, "update.yml", "sha256: deadbeef\ndescription: x\n");
    let client = MockCatalogClient::new();

    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    let error = use_case
        .execute(&path, UpdateMode::Sparse)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("deadbeef"));
    assert_eq!(client.operations(), vec!["archive"]);
}

#[tokio::test]
async fn test_add_security_profile_by_verification_code() {
    let dir = TempDir::new().unwrap();
    let path = write_record(
        &dir,
        "profile_openssl.yml",
        r#"
profile: security
format: 1.0
name: openssl
version: 1.1.1n
fvc: C1
cve_list:
  - cve_id: CVE-2022-0778
    description: Infinite loop in BN_mod_sqrt()
    status: fixed
    references:
      - https://www.openssl.org/news/secadv/20220315.txt
"#,
    );
    let client = MockCatalogClient::new().with_part(stored_part("P7", "C1"));

    let use_case = AddProfileUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    let id = use_case.execute(&path).await.unwrap();

    assert_eq!(id.as_str(), "P7");
    assert_eq!(client.operations(), vec!["part", "attachDocument"]);
    let attached = &client.payloads("attachDocument")[0];
    assert_eq!(attached["id"], "P7");
    assert_eq!(attached["key"], "security");
    assert_eq!(
        attached["document"]["cve_list"][0]["cve_id"],
        "CVE-2022-0778"
    );
    assert!(attached["document"].get("profile").is_none());
}

#[tokio::test]
async fn test_add_unknown_profile_kind_passes_through() {
    let dir = TempDir::new().unwrap();
    let path = write_record(
        &dir,
        "export_control.yml",
        "profile: export_control\ncatalog_id: P9\neccn: 5D002\nreviewed: true\n",
    );
    let client = MockCatalogClient::new();

    let use_case = AddProfileUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    use_case.execute(&path).await.unwrap();

    let attached = &client.payloads("attachDocument")[0];
    assert_eq!(attached["key"], "export_control");
    assert_eq!(attached["document"], json!({"eccn": "5D002", "reviewed": true}));
}

#[tokio::test]
async fn test_find_search_results_and_empty_search() {
    let client = MockCatalogClient::new()
        .with_search_result("busybox", vec![stored_part("P1", "C1")]);
    let reporter = MockProgressReporter::new();
    let use_case = FindUseCase::new(client.clone(), reporter.clone());

    let found = use_case
        .execute(&FindRequest::Text("busybox".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found[0]["id"], "P1");

    let nothing = use_case
        .execute(&FindRequest::Text("nonexistent".to_string()))
        .await
        .unwrap();
    assert!(nothing.is_none());
    assert!(reporter.has_message_containing("No parts found for \"nonexistent\""));
}

#[tokio::test]
async fn test_find_profile_documents() {
    let client = MockCatalogClient::new().with_profile(
        "P1",
        "licensing",
        vec![ProfileEntry {
            title: "scan 2024-03".to_string(),
            document: json!({"legal_notices": "Copyright (c) OpenSSL Project"}),
        }],
    );
    let use_case = FindUseCase::new(client, MockProgressReporter::new());

    let found = use_case
        .execute(&FindRequest::Profile {
            kind: ProfileKind::Licensing,
            id: CatalogId::new("P1"),
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found[0]["title"], "scan 2024-03");
    assert_eq!(
        found[0]["document"]["legal_notices"],
        "Copyright (c) OpenSSL Project"
    );
}

#[tokio::test]
async fn test_export_then_update_round_trip() {
    let client = MockCatalogClient::new().with_part(stored_part("X", "FVC2-X"));

    let yaml = ExportUseCase::new(client.clone())
        .export_part(&PartLookup::Fvc("FVC2-X".to_string()))
        .await
        .unwrap();
    let record: PartRecord = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(record.catalog_id, "X");
    assert_eq!(record.fvc, "FVC2-X");
    assert_eq!(record.size, "9832116");
    assert_eq!(record.license.license_expression, "OpenSSL");

    let dir = TempDir::new().unwrap();
    let path = write_record(&dir, "exported.yml", &yaml);
    let use_case = UpdatePartUseCase::new(
        FileSystemReader::new(),
        client.clone(),
        MockProgressReporter::new(),
    );
    use_case.execute(&path, UpdateMode::Sparse).await.unwrap();

    let payload = &client.payloads("updatePart")[0];
    assert_eq!(payload["id"], "X");
    assert_eq!(payload["name"], "openssl");
}

#[tokio::test]
async fn test_delete_unknown_part_fails() {
    let client = MockCatalogClient::new();
    let use_case = DeletePartUseCase::new(client.clone(), MockProgressReporter::new());

    let result = use_case
        .execute(
            &CatalogId::new("adjb23-A4D3faTa-d95Xufs"),
            DeleteOptions {
                recursive: true,
                force: false,
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(
        client.payloads("deletePart")[0],
        json!({"part_id": "adjb23-A4D3faTa-d95Xufs", "recursive": true, "force": false})
    );
}

#[tokio::test]
async fn test_upload_reports_receipt() {
    let uploader = MockArchiveUploader::accepting("openssl-1.1.1n.tar.gz", "40dceb51", Some("P1"));
    let reporter = MockProgressReporter::new();

    let use_case = UploadArchiveUseCase::new(uploader.clone(), reporter.clone());
    let receipt = use_case
        .execute(Path::new("openssl-1.1.1n.tar.gz"))
        .await
        .unwrap();

    assert_eq!(receipt.part_id.as_deref(), Some("P1"));
    assert_eq!(
        uploader.uploaded(),
        vec![PathBuf::from("openssl-1.1.1n.tar.gz")]
    );
    assert!(reporter.has_message_containing("as part P1"));
}

#[tokio::test]
async fn test_upload_failure_names_the_archive() {
    let use_case =
        UploadArchiveUseCase::new(MockArchiveUploader::failing(), MockProgressReporter::new());

    let error = use_case
        .execute(Path::new("openssl-1.1.1n.tar.gz"))
        .await
        .unwrap_err();

    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::RemoteCallFailed { subject, .. }) => {
            assert_eq!(subject, "openssl-1.1.1n.tar.gz")
        }
        other => panic!("expected RemoteCallFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_query_passthrough() {
    let client = MockCatalogClient::new();
    let response = QueryUseCase::new(client.clone())
        .execute("{part(id:\"aR25sd-V8dDvs2-p3Gfae\"){file_verification_code}}")
        .await
        .unwrap();

    assert_eq!(response["part"]["file_verification_code"], "FVC2-ABC");
    assert_eq!(client.operations(), vec!["query"]);
}
