#![allow(clippy::unwrap_used)]
// Integration tests for `ContentClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_api::{
    ContactCreate, ContentClient, Error, ExperienceCreate, ProjectCreate, SkillCreate,
    SocialLinkCreate,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ContentClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ContentClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Read tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_projects() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Portfolio",
                "description": "This site",
                "tags": ["rust", "ratatui"],
                "github_url": "https://github.com/someone/portfolio",
                "featured": "true",
                "order_index": 0
            },
            {
                "id": 2,
                "title": "Bare",
                "description": "No optionals"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Portfolio");
    assert_eq!(projects[0].tags.as_deref().unwrap(), ["rust", "ratatui"]);
    assert_eq!(projects[0].featured.as_deref(), Some("true"));
    assert!(projects[1].tags.is_none());
    assert!(projects[1].order_index.is_none());
}

#[tokio::test]
async fn test_list_skill_categories_with_nested_skills() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/skills/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 3,
            "name": "Backend",
            "order_index": 1,
            "skills": [
                {"id": 10, "name": "Rust", "category_id": 3, "order_index": 0},
                {"id": 11, "name": "SQL", "category_id": 3, "order_index": 1}
            ]
        }])))
        .mount(&server)
        .await;

    let categories = client.list_skill_categories().await.unwrap();
    let skills = categories[0].skills.as_ref().unwrap();
    assert_eq!(categories[0].name, "Backend");
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[1].category_id, 3);
}

#[tokio::test]
async fn test_list_about_and_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/about/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "section": "intro", "content": "Hello", "order_index": 0}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "number": "5+", "label": "Years Experience"}
        ])))
        .mount(&server)
        .await;

    let about = client.list_about().await.unwrap();
    let stats = client.list_stats().await.unwrap();
    assert_eq!(about[0].content, "Hello");
    assert_eq!(stats[0].number, "5+");
}

#[tokio::test]
async fn test_health() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert_eq!(client.health().await.unwrap().status, "ok");
}

// ── Write tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_experience_sends_payload() {
    let (server, client) = setup().await;

    let body = ExperienceCreate {
        role: "Engineer".into(),
        company: "Acme".into(),
        period: "2021 - Present".into(),
        start_date: None,
        end_date: None,
        description: "Built things".into(),
        tags: vec!["react".into(), "node.js".into()],
        order_index: 2,
    };

    Mock::given(method("POST"))
        .and(path("/experiences/"))
        .and(body_json(json!({
            "role": "Engineer",
            "company": "Acme",
            "period": "2021 - Present",
            "description": "Built things",
            "tags": ["react", "node.js"],
            "order_index": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "role": "Engineer",
            "company": "Acme",
            "period": "2021 - Present",
            "description": "Built things",
            "tags": ["react", "node.js"],
            "order_index": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_experience(&body).await.unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_create_project_omits_empty_optionals() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/projects/"))
        .and(body_json(json!({
            "title": "CLI",
            "description": "A tool",
            "tags": [],
            "featured": "true",
            "order_index": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "title": "CLI", "description": "A tool", "featured": "true"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = ProjectCreate {
        title: "CLI".into(),
        description: "A tool".into(),
        image: None,
        tags: Vec::new(),
        live_url: None,
        github_url: None,
        featured: "true".into(),
        order_index: 0,
    };
    client.create_project(&body).await.unwrap();
}

#[tokio::test]
async fn test_create_social_link_and_skill() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/social-links/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4, "platform": "GitHub", "url": "https://github.com/x", "icon_name": "github"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/skills/"))
        .and(body_json(json!({"name": "Go", "category_id": 3, "order_index": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12, "name": "Go", "category_id": 3, "order_index": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let link = client
        .create_social_link(&SocialLinkCreate {
            platform: "GitHub".into(),
            url: "https://github.com/x".into(),
            icon_name: Some("github".into()),
            order_index: 0,
        })
        .await
        .unwrap();
    assert_eq!(link.icon_name.as_deref(), Some("github"));

    let skill = client
        .create_skill(&SkillCreate {
            name: "Go".into(),
            category_id: 3,
            order_index: 2,
        })
        .await
        .unwrap();
    assert_eq!(skill.id, 12);
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/skills/categories/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_skill_category(3).await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_carries_detail() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/contacts/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Contact not found"})),
        )
        .mount(&server)
        .await;

    let err = client.delete_contact(42).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Contact not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_on_contact_submit() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {
                    "loc": ["body", "email"],
                    "msg": "value is not a valid email address",
                    "type": "value_error"
                },
                {"loc": ["body", "message"], "msg": "Field required", "type": "missing"}
            ]
        })))
        .mount(&server)
        .await;

    let err = client
        .create_contact(&ContactCreate {
            name: "Ada".into(),
            email: "nope".into(),
            message: "Hi".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(&err, Error::Api { status: 422, message } if message == "value is not a valid email address"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_contacts().await;
    assert!(
        matches!(&result, Err(Error::Deserialization { body, .. }) if body.contains("oops")),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/experiences/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.list_experiences().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(
        matches!(&err, Error::Api { message, .. } if message == "HTTP 503 Service Unavailable"),
        "unexpected error: {err:?}"
    );
}
