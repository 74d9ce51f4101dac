/// Minimal keep-alive HTTP/1.1 responder on a loopback port
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Serve `listing` for `GET /servers` and an empty 200 for everything else.
/// Returns the base URL.
pub async fn spawn_catalog(listing: impl FnOnce(&str) -> String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let listing = Arc::new(listing(&base_url));

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(handle(socket, Arc::clone(&listing)));
        }
    });
    base_url
}

async fn handle(socket: TcpStream, listing: Arc<String>) {
    let (read, mut write) = socket.into_split();
    let mut lines = BufReader::new(read).lines();

    while let Ok(Some(request_line)) = lines.next_line().await {
        loop {
            match lines.next_line().await {
                Ok(Some(header)) if !header.is_empty() => continue,
                Ok(Some(_)) => break,
                _ => return,
            }
        }

        let body = if request_line.starts_with("GET /servers") {
            listing.as_str()
        } else {
            ""
        };
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        if write.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}
