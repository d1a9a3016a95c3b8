//! Integration tests for collections.
//!
//! These tests verify filtering, lazy pagination, counting, creation and
//! the local refusal to read collections the service cannot list.

use serde_json::{json, Map, Value};
use stormpath::rest::resources::{Account, Application};
use stormpath::rest::{Resource, ResourceKind};
use stormpath::{ApiKey, BaseUrl, Client, ResourceError, ResourceType, StormpathConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> Client {
    let config = StormpathConfig::builder()
        .api_key(ApiKey::new("test-id", "test-secret").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    Client::new(&config).unwrap()
}

fn href(server: &MockServer, path: &str) -> String {
    format!("{}/v1/{}", server.uri(), path)
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn account(server: &MockServer, n: u32) -> Value {
    json!({
        "href": href(server, &format!("accounts/acc{n}")),
        "email": format!("user{n}@example.com"),
        "username": format!("user{n}")
    })
}

/// A loaded application whose links point at the mock server.
fn loaded_application(server: &MockServer) -> Application {
    Application::from_resource(Resource::from_body(
        ResourceKind::Application,
        object(json!({
            "href": href(server, "applications/a1"),
            "name": "app",
            "accounts": {"href": href(server, "applications/a1/accounts")},
            "verificationEmails": {"href": href(server, "applications/a1/verificationEmails")}
        })),
    ))
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_iteration_walks_pages_with_default_page_size() {
    let server = MockServer::start().await;

    let first_page: Vec<Value> = (0..25).map(|n| account(&server, n)).collect();
    let second_page: Vec<Value> = (25..30).map(|n| account(&server, n)).collect();

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 25, "size": 30, "items": first_page
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "25"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 25, "limit": 25, "size": 30, "items": second_page
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap();

    assert_eq!(accounts.limit(), 25);
    assert_eq!(accounts.offset(), 0);

    let all = accounts.all(&client).await.unwrap();
    assert_eq!(all.len(), 30);
    assert_eq!(all[29].href(), Some(href(&server, "accounts/acc29").as_str()));
}

#[tokio::test]
async fn test_iteration_without_reported_size_stops_on_short_page() {
    let server = MockServer::start().await;

    let first_page: Vec<Value> = (0..25).map(|n| account(&server, n)).collect();
    let second_page: Vec<Value> = (25..30).map(|n| account(&server, n)).collect();

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 25, "items": first_page
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "25"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 25, "limit": 25, "items": second_page
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 1, "items": [account(&server, 0)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap();

    let all = accounts.all(&client).await.unwrap();
    assert_eq!(all.len(), 30);
    assert_eq!(all[29].href(), Some(href(&server, "accounts/acc29").as_str()));

    let err = accounts.len(&client).await.unwrap_err();
    assert!(matches!(err, ResourceError::Deserialize { ref field, .. } if field == "size"));
}

#[tokio::test]
async fn test_iteration_is_lazy_and_items_are_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 2, "size": 4,
            "items": [account(&server, 0), account(&server, 1)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap().with_limit(2);

    let mut iter = accounts.iter().unwrap();
    let mut first = iter.next(&client).await.unwrap().unwrap();
    let _second = iter.next(&client).await.unwrap().unwrap();

    // Only the first page has been requested so far.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    assert_eq!(
        first.email(&client).await.unwrap().as_deref(),
        Some("user0@example.com")
    );

    let mut handle: Account = client.get(&href(&server, "accounts/acc1"));
    assert_eq!(handle.username(&client).await.unwrap().as_deref(), Some("user1"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_starting_at_offsets_the_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 10, "limit": 5, "size": 12,
            "items": [account(&server, 10), account(&server, 11)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app
        .accounts(&client)
        .await
        .unwrap()
        .starting_at(10)
        .with_limit(5);

    let items = accounts.all(&client).await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_page_reports_position_and_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 2, "size": 5,
            "items": [account(&server, 0), account(&server, 1)]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let page = app
        .accounts(&client)
        .await
        .unwrap()
        .page(&client, 0, 2)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.size(), Some(5));
    assert!(page.has_next_page());
    assert_eq!(page.next_offset(), Some(2));
}

// ============================================================================
// Counting and Creation
// ============================================================================

#[tokio::test]
async fn test_create_increases_len_and_item_appears_in_iteration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 1, "size": 2, "items": [account(&server, 0)]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 1, "size": 3, "items": [account(&server, 0)]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/applications/a1/accounts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(account(&server, 2)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/a1/accounts"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 25, "size": 3,
            "items": [account(&server, 0), account(&server, 1), account(&server, 2)]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap();

    let before = accounts.len(&client).await.unwrap();

    let mut created = accounts
        .create(
            &client,
            &json!({
                "email": "user2@example.com",
                "username": "user2",
                "givenName": "User",
                "surname": "Two",
                "password": "Sup3rS3cret!"
            }),
        )
        .await
        .unwrap();

    assert_eq!(accounts.len(&client).await.unwrap(), before + 1);
    assert_eq!(created.login(&client).await.unwrap(), "user2");

    let all = accounts.all(&client).await.unwrap();
    assert!(all.iter().any(|item| item.href() == created.href()));
}

#[tokio::test]
async fn test_instantiate_then_save_creates_in_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/applications/a1/accounts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(account(&server, 7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap();

    let mut account = accounts.instantiate();
    account.set_email("user7@example.com").unwrap();
    account.set_username("user7").unwrap();
    account.set_password("Sup3rS3cret!").unwrap();
    assert!(account.href().is_none());

    account.save(&client).await.unwrap();

    assert_eq!(account.href(), Some(href(&server, "accounts/acc7").as_str()));
    assert!(!account.is_dirty());
}

// ============================================================================
// Non-iterable Collections
// ============================================================================

#[tokio::test]
async fn test_non_iterable_collection_fails_without_requests() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let mappings = client.account_store_mappings();
    assert!(!mappings.is_iterable());
    assert!(mappings.iter().unwrap_err().is_precondition());
    assert!(mappings.len(&client).await.unwrap_err().is_precondition());
    assert!(mappings.first(&client).await.unwrap_err().is_precondition());
    assert!(mappings
        .page(&client, 0, 10)
        .await
        .unwrap_err()
        .is_precondition());

    let mut app = loaded_application(&server);
    let verification_emails = app.verification_emails(&client).await.unwrap();
    assert!(!verification_emails.is_iterable());

    let filtered = verification_emails.query([("login", "user0")]);
    assert!(filtered.iter().unwrap_err().is_precondition());
    assert!(filtered.all(&client).await.unwrap_err().is_precondition());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_leaves_original_collection_unfiltered() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let mut app = loaded_application(&server);
    let accounts = app.accounts(&client).await.unwrap();
    let filtered = accounts.query([("email", "user0@example.com")]);

    assert!(accounts.filters().is_empty());
    assert_eq!(
        filtered.filters().get("email").map(String::as_str),
        Some("user0@example.com")
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}
