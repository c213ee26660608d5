//! Runs the real listener and talks to it through `PdfServiceClient`

use std::net::SocketAddr;

use pdftext_core::{fixtures, BackendSelection, TextExtractor};
use pdftext_server::{build_router, AppState, ClientError, ParsedPdf, PdfServiceClient};

/// Serve the router on an ephemeral port and return its address
async fn spawn_server(selection: BackendSelection) -> SocketAddr {
    let app = build_router(AppState::new(TextExtractor::new(selection)), 1024 * 1024);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> PdfServiceClient {
    PdfServiceClient::new(&format!("http://{}", addr)).unwrap()
}

#[tokio::test]
async fn client_parses_pdf() {
    let addr = spawn_server(BackendSelection::probe_default()).await;
    let client = client_for(addr);

    let pdf = fixtures::pdf_with_pages(&["Hello World", "Goodbye World"]);
    let parsed: Result<ParsedPdf, ClientError> = client.parse(pdf).await;
    match parsed {
        Ok(result) => {
            assert_eq!(result.pages, 2);
            assert_eq!(result.text, "Hello World\n\nGoodbye World");
            assert!(result.library.is_some());
        }
        // Builds without any backend still answer, just with an error
        Err(ClientError::Service(message)) => {
            assert_eq!(message, "No PDF library installed");
        }
        Err(e) => panic!("unexpected client error: {}", e),
    }
}

#[tokio::test]
async fn client_surfaces_service_errors() {
    let addr = spawn_server(BackendSelection::probe_default()).await;
    let client = client_for(addr);

    let err = client.parse(b"not a pdf".to_vec()).await.unwrap_err();
    assert!(matches!(err, ClientError::Service(ref m) if !m.is_empty()));
    assert!(err.to_string().starts_with("PDF parse error: "));

    let err = client.parse(Vec::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Service(ref m) if m == "No PDF data"));
}

#[tokio::test]
async fn client_health_reflects_selection() {
    let addr = spawn_server(BackendSelection::none()).await;
    let client = client_for(addr);

    assert!(client.is_healthy().await);
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.library, None);

    let err = client.parse(fixtures::pdf_with_pages(&["x"])).await.unwrap_err();
    assert!(matches!(err, ClientError::Service(ref m) if m == "No PDF library installed"));
}

/// A port nothing is listening on right now
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::test]
async fn client_starts_and_stops_service_binary() {
    let binary = std::path::Path::new(env!("CARGO_BIN_EXE_pdftext-server"));
    let client = PdfServiceClient::new(&format!("http://127.0.0.1:{}", free_port())).unwrap();
    assert!(!client.is_healthy().await);

    let handle = client.start_service(binary).await.unwrap();
    assert!(handle.id().is_some());
    assert!(client.is_healthy().await);

    let err = client.parse(Vec::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Service(ref m) if m == "No PDF data"));

    handle.stop().await.unwrap();
    assert!(!client.is_healthy().await);
}

#[tokio::test]
async fn client_reports_service_that_exits_during_startup() {
    // Occupy the port so the launched server fails to bind and exits
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let binary = std::path::Path::new(env!("CARGO_BIN_EXE_pdftext-server"));
    let client = PdfServiceClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let err = client.start_service(binary).await.unwrap_err();
    assert!(matches!(err, ClientError::Exited(ref status) if !status.success()));
}
