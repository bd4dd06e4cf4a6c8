use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use tess::adapter::{FetchConfig, FetchError, PuzzleClient, PuzzleFetcher};
use tess::core::Rules;
use tess::engine::{Config, Session, SessionMode};
use tess::types::Side;

fn puzzle_body() -> String {
    serde_json::json!({
        "game": {"id": "Gm1", "pgn": "1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6"},
        "puzzle": {
            "id": "Pz1",
            "rating": 1510,
            "plays": 42,
            "solution": ["h5f7"],
            "themes": ["mateIn1", "short"],
            "initialPly": 5
        }
    })
    .to_string()
}

/// Serve one canned HTTP response and return the address.
async fn serve_once(status: &'static str, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr) -> FetchConfig {
    FetchConfig {
        url: format!("http://{addr}/api/puzzle/next"),
        timeout: Duration::from_secs(5),
        ..FetchConfig::default()
    }
}

#[tokio::test]
async fn adapter_fetches_and_validates_puzzle() {
    let addr = serve_once("200 OK", puzzle_body()).await;
    let client = PuzzleClient::new(config_for(addr)).unwrap();

    let puzzle = tokio::time::timeout(Duration::from_secs(5), client.fetch_next())
        .await
        .expect("fetch timed out")
        .unwrap();

    assert_eq!(puzzle.id, "Pz1");
    assert_eq!(puzzle.rating, Some(1510));
    assert_eq!(puzzle.user_side(), Side::White);
    assert_eq!(puzzle.solution(), ["h5f7".to_string()]);
}

#[tokio::test]
async fn adapter_reports_http_status() {
    let addr = serve_once("404 Not Found", "{}".to_string()).await;
    let client = PuzzleClient::new(config_for(addr)).unwrap();

    let err = client.fetch_next().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));
}

#[tokio::test]
async fn adapter_rejects_malformed_payload() {
    let addr = serve_once("200 OK", r#"{"game":{}}"#.to_string()).await;
    let client = PuzzleClient::new(config_for(addr)).unwrap();

    let err = client.fetch_next().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn puzzle_session_prepares_through_blocking_fetcher() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let addr = rt.block_on(serve_once("200 OK", puzzle_body()));

    let config = Config {
        fetch: config_for(addr),
        ..Config::default()
    };
    // The listener task keeps running on `rt` while the fetcher blocks on its own runtime.
    let session = Session::prepare(&SessionMode::Puzzle, &config).unwrap();
    assert_eq!(session.board().turn(), Side::White);
    assert!(session.board().move_from_coordinate_text("h5f7").is_ok());
    drop(rt);
}

#[test]
fn blocking_fetcher_surfaces_connection_errors() {
    let fetcher = PuzzleFetcher::new(FetchConfig {
        url: "http://127.0.0.1:9/next".to_string(),
        timeout: Duration::from_secs(2),
        ..FetchConfig::default()
    })
    .unwrap();
    assert!(matches!(fetcher.fetch_next(), Err(FetchError::Http(_))));
}
