use super::*;
use crate::{config::Transform, response::AqlResponse, transport::FnTransport};
use aql_core::domain::Domain;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::{LazyLock, Mutex};

type Seen = Arc<Mutex<Vec<String>>>;

const RESULTS: &str = r#"{"results":[{"repo":"libs-release-local","name":"app.jar"}],"range":{"start_pos":0,"end_pos":1,"total":1}}"#;

fn mock_with(config: ClientConfig, reply: Result<&'static str, StatusCode>) -> (AqlClient, Seen) {
    let seen: Seen = Arc::default();
    let log = seen.clone();
    let transport = FnTransport::new(move |body: String| {
        log.lock().unwrap().push(body);
        async move {
            match reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(ClientError::Status {
                    status,
                    body: "denied".to_string(),
                }),
            }
        }
    });

    (AqlClient::with_transport(config, Arc::new(transport)), seen)
}

fn mock(reply: Result<&'static str, StatusCode>) -> (AqlClient, Seen) {
    mock_with(ClientConfig::new("http://aql.invalid/api/search/aql"), reply)
}

#[tokio::test]
async fn submit_sends_rendered_query_and_parses_json() {
    let (client, seen) = mock(Ok(RESULTS));
    let query = Domain::Items
        .query()
        .find(Some(json!({ "repo": "libs-release-local" })))
        .include("name")
        .limit(1);

    let value = client.submit(&query).await.unwrap();

    assert_eq!(value["range"]["total"], json!(1));
    assert_eq!(
        *seen.lock().unwrap(),
        [r#"items.find({"repo":"libs-release-local"}).include("name").limit(1)"#]
    );
}

#[tokio::test]
async fn submit_as_decodes_typed_envelope() {
    #[derive(Debug, serde::Deserialize)]
    struct Item {
        name: String,
    }

    let (client, _) = mock(Ok(RESULTS));
    let response: AqlResponse<Item> = client.submit_as(&Domain::Items.query()).await.unwrap();

    assert_eq!(response.len(), 1);
    assert_eq!(response.results[0].name, "app.jar");
    assert_eq!(response.range.total, 1);
}

#[tokio::test]
async fn submit_any_rejects_non_builder_inputs_uniformly() {
    let (client, seen) = mock(Ok(RESULTS));

    let object = json!({});
    let array: Vec<u8> = Vec::new();
    let inputs: [&(dyn Any + Send + Sync); 5] = [&object, &true, &array, &"dafs", &()];

    for input in inputs {
        let err = client.submit_any(input).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidQuery));
        assert_eq!(err.to_string(), "AQL: query parameter is invalid!");
    }
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_any_accepts_builder() {
    let (client, seen) = mock(Ok(RESULTS));
    let query = Domain::Builds.query().include("name");

    client.submit_any(&query).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), [r#"builds.find().include("name")"#]);
}

#[tokio::test]
async fn submit_any_accepts_borrowed_and_shared_builders() {
    static SHARED: LazyLock<DomainQuery> = LazyLock::new(|| Domain::Items.query().include("name"));

    let (client, seen) = mock(Ok(RESULTS));
    let borrowed: &'static DomainQuery = &SHARED;
    let boxed = Box::new(Domain::Builds.query());
    let arced = Arc::new(Domain::ArchiveEntries.query().limit(2));

    client.submit_any(&borrowed).await.unwrap();
    client.submit_any(&boxed).await.unwrap();
    client.submit_any(&arced).await.unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        [
            r#"items.find().include("name")"#,
            "builds.find()",
            "archive.entries.find().limit(2)",
        ]
    );
}

#[tokio::test]
async fn transport_status_error_propagates_unchanged() {
    let (client, _) = mock(Err(StatusCode::FORBIDDEN));

    let err = client.submit(&Domain::Items.query()).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (client, _) = mock(Ok("<html>gateway</html>"));

    let err = client.submit(&Domain::Items.query()).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn text_transform_returns_raw_body() {
    let config =
        ClientConfig::new("http://aql.invalid/api/search/aql").with_transform(Transform::Text);
    let (client, _) = mock_with(config, Ok("raw body"));

    let value = client.submit(&Domain::ArchiveEntries.query()).await.unwrap();

    assert_eq!(value, json!("raw body"));
}

#[tokio::test]
async fn clones_share_transport() {
    let (client, seen) = mock(Ok(RESULTS));
    let other = client.clone();

    client.submit(&Domain::Items.query()).await.unwrap();
    other.submit(&Domain::Builds.query()).await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), 2);
}
