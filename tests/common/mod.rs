use std::sync::Arc;

use serde_json::{json, Value};
use teoria::cache::QuestionCache;
use teoria::query::QuestionService;
use teoria::source::DatastoreClient;
use teoria::{names, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a fake datastore serving the given records, allowing at most
/// `expected_fetches` upstream calls.
pub async fn mock_datastore(records: Vec<Value>, expected_fetches: u64) -> MockServer {
    let server = MockServer::start().await;

    let body = json!({ "success": true, "result": { "records": records } });

    Mock::given(method("GET"))
        .and(path(names::DATASTORE_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(expected_fetches)
        .mount(&server)
        .await;

    server
}

/// Start a fake datastore that always fails.
pub async fn failing_datastore() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(names::DATASTORE_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    server
}

/// Build the app router against the given upstream.
pub fn app(upstream: &MockServer) -> axum::Router {
    let source = DatastoreClient::new(&upstream.uri(), "test-resource");
    let cache = Arc::new(QuestionCache::new(Arc::new(source)));
    teoria::router(AppState {
        questions: QuestionService::new(cache),
    })
}

/// A well-formed question record tagged with one license category.
pub fn question_record(id: usize, license: &str) -> Value {
    json!({
        "_id": id,
        "title2": format!("שאלה {id}"),
        "description4": format!(
            "«{license}»<ul>\
             <li><span id=\"a{id}\">נכון</span></li>\
             <li><span id=\"correctAnswer{id}\">לא נכון</span></li>\
             </ul>"
        ),
        "category4": "חוקי התנועה",
    })
}
