//! Integration tests for the typed API client against a mock backend.

mod helpers;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use talent_client::UploadFile;
use talent_core::error::ErrorKind;
use talent_entity::job::JobQuery;

use helpers::TestApp;

const RESUME_ID: &str = "7f1e2d3c-4b5a-4968-8776-a5b4c3d2e101";
const JOB_ID: &str = "9a8b7c6d-5e4f-4321-8fed-cba987654301";

#[tokio::test]
async fn test_job_list_sends_only_set_filters() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("GET"))
        .and(path("/job/list"))
        .and(query_param("skill", "rust"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2, "size": 10, "total": 11,
            "items": [{
                "id": JOB_ID,
                "recruiter_id": helpers::OTHER_ID,
                "title": "Backend Engineer",
                "description": "Build APIs",
                "skills": ["rust", "sql"],
                "location": "Remote",
                "created_at": "2026-02-20T08:00:00",
                "updated_at": "2026-02-20T08:00:00"
            }]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let page = app
        .client
        .list_jobs(&JobQuery {
            page: Some(2),
            skill: Some("rust".to_string()),
            ..JobQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());

    let requests = app.server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("location"));
    assert!(!query.contains("size"));
}

#[tokio::test]
async fn test_semantic_search() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("GET"))
        .and(path("/search/jobs"))
        .and(query_param("q", "data engineer"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("semantic", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "data engineer",
            "semantic": true,
            "page": 1, "size": 10, "total": 1,
            "items": [{"id": JOB_ID, "title": "Data Engineer", "location": "Berlin", "skills": ["python"]}]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let results = app
        .client
        .search_jobs("data engineer", 1, 10, true)
        .await
        .unwrap();
    assert_eq!(results.items[0].title, "Data Engineer");
}

#[tokio::test]
async fn test_validation_errors_are_joined() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("POST"))
        .and(path("/application/create"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "job_id"], "msg": "field required"},
                {"loc": ["body", "user_id"], "msg": "value is not a valid uuid"}
            ]
        })))
        .mount(&app.server)
        .await;

    let err = app
        .client
        .create_application(&talent_entity::application::ApplicationCreate {
            job_id: JOB_ID.parse().unwrap(),
            user_id: helpers::USER_ID.parse().unwrap(),
            resume_id: None,
            cover_letter_id: None,
            status: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "field required; value is not a valid uuid");
}

#[tokio::test]
async fn test_resume_upload_is_multipart() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("POST"))
        .and(path("/resume/upload"))
        .and(header("authorization", "Bearer a-1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": RESUME_ID,
            "original_filename": "cv.pdf",
            "file_path": "resumes/cv.pdf",
            "storage_backend": "local",
            "content_type": "application/pdf",
            "file_size": 4,
            "processing_status": "queued"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let file = UploadFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec());
    let upload = app.client.upload_resume(file).await.unwrap();
    assert_eq!(upload.processing_status, "queued");

    let requests = app.server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="file"; filename="cv.pdf""#));
    assert!(body.contains("%PDF"));
}

#[tokio::test]
async fn test_cover_letter_upload_sends_empty_description() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("POST"))
        .and(path("/cover-letter/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e01",
            "user_id": helpers::USER_ID,
            "resume_id": RESUME_ID,
            "job_description": "",
            "generated_text": "Dear team",
            "generator_source": "upload",
            "created_at": "2026-02-22T09:00:00",
            "updated_at": "2026-02-22T09:00:00"
        })))
        .mount(&app.server)
        .await;

    let file = UploadFile::new("letter.txt", "text/plain", b"Dear team".to_vec());
    app.client
        .upload_cover_letter(RESUME_ID.parse().unwrap(), None, file)
        .await
        .unwrap();

    let requests = app.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="resume_id""#));
    assert!(body.contains(RESUME_ID));
    assert!(body.contains(r#"name="job_description""#));
}

#[tokio::test]
async fn test_upload_failure_uses_upload_label() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("POST"))
        .and(path("/resume/upload"))
        .respond_with(ResponseTemplate::new(413).set_body_string("too large"))
        .mount(&app.server)
        .await;

    let file = UploadFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec());
    let err = app.client.upload_resume(file).await.unwrap_err();
    assert_eq!(err.message, "Upload failed (413)");
    assert_eq!(err.status, Some(413));
}

#[tokio::test]
async fn test_expired_token_surfaces_without_refresh() {
    let app = TestApp::with_tokens("stale", "r-1").await;
    app.mount_me(401, json!({"detail": "Token expired"})).await;

    let err = app.client.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Token expired");
    assert_eq!(app.hits("/auth/refresh").await, 0);
}

#[tokio::test]
async fn test_analytics_default_top_skills() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("GET"))
        .and(path("/analytics"))
        .and(query_param("top_skills", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "applications_per_job": [{"job_id": JOB_ID, "title": "Backend Engineer", "application_count": 4}],
            "popular_skills": [{"skill": "rust", "count": 7}]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let analytics = app
        .client
        .analytics(talent_client::api::analytics::DEFAULT_TOP_SKILLS)
        .await
        .unwrap();
    assert_eq!(analytics.popular_skills[0].count, 7);
}
