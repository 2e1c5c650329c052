//! Multipart bodies sent as a chunked stream, with no `Content-Length`.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::TestApp;

const BOUNDARY: &str = "tubely-test-boundary";
const CHUNK_SIZE: usize = 16 * 1024;

/// Single-file multipart body split into fixed-size chunks.
fn multipart_chunks(field: &str, file_name: &str, mime_type: &str, data: &[u8]) -> Vec<Bytes> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: {mime_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    body.chunks(CHUNK_SIZE)
        .map(Bytes::copy_from_slice)
        .collect()
}

impl TestApp {
    /// POST a file to `path` as a streamed body; returns status and parsed JSON body.
    pub async fn post_streamed(
        &self,
        path: &str,
        token: &str,
        field: &str,
        file_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> (StatusCode, serde_json::Value) {
        let chunks = multipart_chunks(field, file_name, mime_type, data);
        let stream = futures::stream::iter(chunks.into_iter().map(Ok::<_, std::io::Error>));

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Authorization", super::auth::bearer(token))
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from_stream(stream))
            .expect("Failed to build request");
        assert!(request.headers().get("Content-Length").is_none());

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "Response body is not JSON: {}",
                String::from_utf8_lossy(&bytes)
            )
        });

        (status, body)
    }
}
