#![allow(clippy::unwrap_used)]
// End-to-end tests for `Portfolio` against a wiremock content store.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_core::{
    ConfirmGate, ContactForm, CoreError, CreateForm, DeleteTarget, EntityId, ExperienceDraft,
    Mutation, Placement, Portfolio, PortfolioConfig, Resource, SectionState, SyncStatus,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(admin: bool) -> (MockServer, Portfolio) {
    let server = MockServer::start().await;
    let config = PortfolioConfig::new(Url::parse(&server.uri()).unwrap()).with_admin(admin);
    let portfolio = Portfolio::new(config).unwrap();
    (server, portfolio)
}

async fn mount_empty(server: &MockServer, routes: &[&str]) {
    for route in routes {
        Mock::given(method("GET"))
            .and(path(*route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
}

fn experience(id: i64, role: &str, order_index: i32) -> serde_json::Value {
    json!({
        "id": id,
        "role": role,
        "company": "Acme",
        "period": "2020 - 2022",
        "description": "Work",
        "tags": ["rust"],
        "order_index": order_index
    })
}

// ── Mount ───────────────────────────────────────────────────────────

#[tokio::test]
async fn mount_loads_public_sections_only() {
    let (server, portfolio) = setup(false).await;
    mount_empty(
        &server,
        &[
            "/about/content",
            "/about/stats",
            "/social-links/",
            "/experiences/",
            "/projects/",
            "/skills/categories",
        ],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let projects = portfolio.projects();
    assert_eq!(projects.current().status, SyncStatus::Idle);
    assert_eq!(projects.current().section(), SectionState::Loading);

    portfolio.mount().await;

    assert_eq!(portfolio.projects().latest().section(), SectionState::Empty);
    assert_eq!(portfolio.contacts().latest().status, SyncStatus::Idle);
}

#[tokio::test]
async fn mount_fetches_inbox_in_admin_mode() {
    let (server, portfolio) = setup(true).await;
    mount_empty(
        &server,
        &[
            "/about/content",
            "/about/stats",
            "/social-links/",
            "/experiences/",
            "/projects/",
            "/skills/categories",
        ],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Bo", "email": "bo@example.com", "message": "Later",
             "status": "read", "created_at": "2024-06-01T09:00:00"},
            {"id": 1, "name": "Ada", "email": "ada@example.com", "message": "Hi"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    portfolio.mount().await;

    let contacts = portfolio.contacts().latest();
    let names: Vec<_> = contacts.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bo", "Ada"]);
    assert_eq!(contacts.items[0].received_label(), "2024-06-01");
}

#[tokio::test]
async fn read_failure_shows_store_message() {
    let (server, portfolio) = setup(false).await;
    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Database unavailable"})),
        )
        .mount(&server)
        .await;

    portfolio.refresh(Resource::Projects).await;

    let snap = portfolio.projects().latest();
    assert_eq!(snap.section(), SectionState::Error("Database unavailable"));
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_refresh_appends_one_entity() {
    let (server, portfolio) = setup(true).await;

    Mock::given(method("GET"))
        .and(path("/experiences/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([experience(1, "Intern", 0)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    portfolio.refresh(Resource::Experiences).await;
    assert_eq!(portfolio.count(Resource::Experiences), 1);

    Mock::given(method("POST"))
        .and(path("/experiences/"))
        .and(body_json(json!({
            "role": "Engineer",
            "company": "Acme",
            "period": "2022 - Present",
            "description": "Shipped",
            "tags": ["react", "node.js"],
            "order_index": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(experience(2, "Engineer", 1)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/experiences/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            experience(2, "Engineer", 1),
            experience(1, "Intern", 0)
        ])))
        .mount(&server)
        .await;

    let mut form = CreateForm::<ExperienceDraft>::new();
    form.open();
    let draft = form.draft_mut();
    draft.set("role", "Engineer");
    draft.set("company", "Acme");
    draft.set("period", "2022 - Present");
    draft.set("description", "Shipped");
    draft.set("tags", "react, node.js ,  ");

    let payload = form
        .submit(Placement::append(portfolio.count(Resource::Experiences)))
        .unwrap();
    let result = portfolio.execute(Mutation::CreateExperience(payload)).await;
    form.complete(result.is_ok());

    assert!(result.is_ok());
    assert!(!form.is_open());
    assert_eq!(form.draft().get("role"), "");

    let snap = portfolio.experiences().latest();
    let roles: Vec<_> = snap.items.iter().map(|e| e.role.as_str()).collect();
    assert_eq!(roles, ["Intern", "Engineer"]);
    assert_eq!(snap.items[1].order_index, 1);
}

#[tokio::test]
async fn create_failure_keeps_form_and_list() {
    let (server, portfolio) = setup(true).await;

    Mock::given(method("POST"))
        .and(path("/experiences/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/experiences/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = CreateForm::<ExperienceDraft>::new();
    form.open();
    for (key, value) in [
        ("role", "Engineer"),
        ("company", "Acme"),
        ("period", "Now"),
        ("description", "d"),
    ] {
        form.draft_mut().set(key, value);
    }

    let payload = form.submit(Placement::append(0)).unwrap();
    let result = portfolio.execute(Mutation::CreateExperience(payload)).await;
    form.complete(result.is_ok());

    assert!(matches!(result, Err(CoreError::Rejected { .. })));
    assert!(form.is_open());
    assert_eq!(form.draft().get("role"), "Engineer");
    assert_eq!(portfolio.experiences().latest().status, SyncStatus::Idle);
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn declined_delete_issues_no_calls() {
    let (server, portfolio) = setup(true).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut gate = ConfirmGate::new();
    gate.request(Mutation::Delete {
        target: DeleteTarget::Project,
        id: EntityId::new(3),
    });
    gate.cancel();

    if let Some(mutation) = gate.confirm() {
        portfolio.execute(mutation).await.unwrap();
    }
}

#[tokio::test]
async fn confirmed_category_delete_refreshes_skills() {
    let (server, portfolio) = setup(true).await;

    Mock::given(method("DELETE"))
        .and(path("/skills/categories/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/skills/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut gate = ConfirmGate::new();
    gate.request(Mutation::Delete {
        target: DeleteTarget::SkillCategory,
        id: EntityId::new(3),
    });
    let mutation = gate.confirm().unwrap();
    portfolio.execute(mutation).await.unwrap();

    assert_eq!(
        portfolio.skill_categories().latest().section(),
        SectionState::Empty
    );
}

// ── Contact ─────────────────────────────────────────────────────────

#[tokio::test]
async fn public_contact_failure_is_shown_inline() {
    let (server, portfolio) = setup(false).await;

    Mock::given(method("POST"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "Network error"})))
        .mount(&server)
        .await;

    let mut form = ContactForm::new();
    form.draft_mut().set("name", "Ada");
    form.draft_mut().set("email", "ada@example.com");
    form.draft_mut().set("message", "Hi");

    let payload = form.submit().unwrap();
    let err = portfolio
        .execute(Mutation::CreateContact(payload))
        .await
        .unwrap_err();
    form.failed(&err);

    assert_eq!(form.error(), Some("Network error"));
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn public_contact_success_skips_inbox_refresh() {
    let (server, portfolio) = setup(false).await;

    Mock::given(method("POST"))
        .and(path("/contacts/"))
        .and(body_json(json!({
            "name": "Ada", "email": "ada@example.com", "message": "Hi"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "name": "Ada", "email": "ada@example.com", "message": "Hi", "status": "new"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = ContactForm::new();
    form.draft_mut().set("name", "Ada");
    form.draft_mut().set("email", "ada@example.com");
    form.draft_mut().set("message", "Hi");

    let payload = form.submit().unwrap();
    portfolio
        .execute(Mutation::CreateContact(payload))
        .await
        .unwrap();
    form.succeeded(std::time::Instant::now());

    assert_eq!(form.button_label(), "Message Sent!");
    assert_eq!(form.draft().get("email"), "");
}

#[tokio::test]
async fn ping_checks_health() {
    let (server, portfolio) = setup(false).await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    portfolio.ping().await.unwrap();
}
