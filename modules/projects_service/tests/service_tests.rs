//! Domain service tests backed by the mock repository

use projects_service::domain::Service;
use projects_service::{NewProject, ProjectsError};
use std::sync::Arc;

mod common;
use common::{print_test_header, MockProjectsRepo};

fn create_test_service() -> (Service, MockProjectsRepo) {
    let repo = MockProjectsRepo::new();
    let service = Service::new(Arc::new(repo.clone()));
    (service, repo)
}

#[tokio::test]
async fn test_create_then_list() {
    print_test_header(
        "test_create_then_list",
        &["A created project is returned by the next listing."],
    );
    let (service, _repo) = create_test_service();

    let created = service
        .create_project(NewProject {
            name: "Widget".to_string(),
            description: "A thing that widgets".to_string(),
        })
        .await
        .unwrap();

    let projects = service.list_projects().await.unwrap();
    assert_eq!(projects, vec![created]);
}

#[tokio::test]
async fn test_submit_validates_before_storing() {
    print_test_header(
        "test_submit_validates_before_storing",
        &["Incomplete submissions are rejected with field errors and never stored."],
    );
    let (service, repo) = create_test_service();

    let err = service.submit_project(Some(""), None).await.unwrap_err();

    match err {
        ProjectsError::Validation { errors } => {
            assert_eq!(errors.get("name"), Some("Name is required."));
            assert_eq!(errors.get("description"), Some("Description is required."));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn test_submit_duplicate_name() {
    print_test_header(
        "test_submit_duplicate_name",
        &["A second submission with a taken name reports DuplicateName."],
    );
    let (service, repo) = create_test_service();
    service
        .submit_project(Some("Widget"), Some("first"))
        .await
        .unwrap();

    let err = service
        .submit_project(Some("Widget"), Some("second"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProjectsError::DuplicateName {
            name: "Widget".to_string()
        }
    );
    assert_eq!(repo.count(), 1);
    assert_eq!(repo.rows()[0].description, "first");
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    print_test_header(
        "test_store_failure_is_internal",
        &["Store failures surface as Internal for both operations."],
    );
    let (service, repo) = create_test_service();
    repo.set_unavailable(true);

    assert_eq!(
        service.list_projects().await.unwrap_err(),
        ProjectsError::Internal
    );
    assert_eq!(
        service
            .submit_project(Some("Widget"), Some("desc"))
            .await
            .unwrap_err(),
        ProjectsError::Internal
    );
}
