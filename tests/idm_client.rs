use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};

use std::sync::{Arc, Mutex};

use hotp_email_node::{EmailServiceError, EmailTransport, IdmEmailService, SendEmailRequest};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    received: Arc<Mutex<Option<(HeaderMap, serde_json::Value)>>>,
}

impl Stub {
    fn returning(status: StatusCode) -> Self {
        Stub {
            status,
            received: Arc::new(Mutex::new(None)),
        }
    }
}

async fn send_email(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    *stub.received.lock().unwrap() = Some((headers, body));
    stub.status
}

async fn spawn_stub(stub: Stub) -> String {
    let router = Router::new()
        .route("/openidm/external/email", post(send_email))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/openidm/external/email?_action=send")
}

fn request() -> SendEmailRequest {
    SendEmailRequest {
        from: "saas@forgerock.com".to_string(),
        to: "bjensen@example.com".to_string(),
        subject: "One Time Password".to_string(),
        body: "Here is your One Time Password. Please enter it into the login browser window: 493762"
            .to_string(),
    }
}

#[tokio::test]
async fn send_posts_a_bearer_token_and_json_body() {
    let stub = Stub::returning(StatusCode::OK);
    let endpoint = spawn_stub(stub.clone()).await;

    let response = IdmEmailService::new()
        .send(&endpoint, "token-123", &request())
        .await
        .unwrap();

    assert_eq!(response.status, 200);

    let (headers, body) = stub.received.lock().unwrap().take().unwrap();
    assert_eq!(headers.get("authorization").unwrap(), "Bearer token-123");
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert_eq!(body["from"], "saas@forgerock.com");
    assert_eq!(body["to"], "bjensen@example.com");
    assert_eq!(body["subject"], "One Time Password");
    assert_eq!(
        body["body"],
        "Here is your One Time Password. Please enter it into the login browser window: 493762"
    );
}

#[tokio::test]
async fn non_success_statuses_are_returned_to_the_caller() {
    let stub = Stub::returning(StatusCode::UNAUTHORIZED);
    let endpoint = spawn_stub(stub).await;

    let response = IdmEmailService::new()
        .send(&endpoint, "expired-token", &request())
        .await
        .unwrap();

    assert_eq!(response.status, 401);
}

#[tokio::test]
async fn an_unreachable_endpoint_is_a_delivery_error() {
    // Bind and drop a listener to get a port nothing is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{addr}/openidm/external/email?_action=send");
    let result = IdmEmailService::new()
        .send(&endpoint, "token-123", &request())
        .await;

    assert!(matches!(result, Err(EmailServiceError::Delivery(_))));
}
