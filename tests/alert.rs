use std::sync::Mutex;
use async_trait::async_trait;
use insightconnect_alert::errors::{InsightConnectError, InsightConnectResult};
use insightconnect_alert::structs::transport_response::TransportResponse;
use insightconnect_alert::traits::alert_transport::AlertTransport;
use insightconnect_alert::workers::command_runner::CommandRunner;
use serde_json::{json, Value};

const URL: &str = "https://us.api.insight.rapid7.com/connect/v1/workflows/abc-123/events/execute";
const ASYNC_URL: &str = "https://us.api.insight.rapid7.com/connect/v1/execute/async/workflows/c3b886da-b345-7abe-cda3-c96173c93de1";

struct RecordingTransport {
    status: u16,
    calls: Mutex<Vec<(String, String, Value)>>,
}

impl RecordingTransport {
    fn new(status: u16) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<'a> AlertTransport for &'a RecordingTransport {
    async fn post_event(&self, url: &str, api_key: &str, body: &Value) -> InsightConnectResult<TransportResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), api_key.to_string(), body.clone()));
        Ok(TransportResponse::new(self.status, "response text"))
    }
}

fn raw_payload(configuration: Value) -> String {
    json!({"configuration": configuration, "field": "v", "result": {"count": 3}}).to_string()
}

#[tokio::test]
async fn forwarded_request_carries_key_header_and_stripped_body() {
    let transport = RecordingTransport::new(200);

    CommandRunner::forward_alert(&transport, &raw_payload(json!({"trigger_url": URL, "x-api-key": "K"})))
        .await
        .unwrap();

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (url, api_key, body) = &calls[0];
    assert_eq!(url, URL);
    assert_eq!(api_key, "K");
    assert_eq!(body, &json!({"field": "v", "result": {"count": 3}}));
}

#[tokio::test]
async fn async_trigger_urls_are_forwarded() {
    let transport = RecordingTransport::new(200);

    CommandRunner::forward_alert(&transport, &raw_payload(json!({"workflow_trigger_url": ASYNC_URL, "api_key": "K"})))
        .await
        .unwrap();

    assert_eq!(transport.calls.lock().unwrap()[0].0, ASYNC_URL);
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let transport = RecordingTransport::new(200);

    let err = CommandRunner::forward_alert(&transport, &raw_payload(json!({"trigger_url": URL})))
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert!(transport.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn documented_failures_surface_their_messages() {
    for (status, expected) in [(400, "Inactive"), (404, "not found"), (500, "error occurred within"), (401, "response text")] {
        let transport = RecordingTransport::new(status);

        let err = CommandRunner::forward_alert(&transport, &raw_payload(json!({"trigger_url": URL, "x-api-key": "K"})))
            .await
            .unwrap_err();

        assert!(matches!(err, InsightConnectError::RemoteFailure { .. }));
        assert!(err.to_string().contains(expected), "{status}: {err}");
    }
}
