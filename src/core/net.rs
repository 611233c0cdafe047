//! One authenticated HTTP round trip per call.
//!
//! REST responses are read in full. URLs whose last path segment is `stream` are
//! newline-delimited JSON feeds: `execute` reads only the first line, `stream_lines`
//! keeps reading until the server closes the connection.

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{OandaClient, OandaError};

const ACCEPT_DATETIME_FORMAT: &str = "Accept-Datetime-Format";

/// Method, URL and optional JSON body of a single call.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) body: Option<Vec<u8>>,
}

impl Request {
    pub(crate) const fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub(crate) fn post<B: Serialize + ?Sized>(url: Url, body: &B) -> Result<Self, OandaError> {
        Ok(Self {
            method: Method::POST,
            url,
            body: Some(serde_json::to_vec(body)?),
        })
    }

    pub(crate) fn put<B: Serialize + ?Sized>(url: Url, body: &B) -> Result<Self, OandaError> {
        Ok(Self {
            method: Method::PUT,
            url,
            body: Some(serde_json::to_vec(body)?),
        })
    }

    /// A `PUT` with no payload, as used by order cancellation.
    pub(crate) const fn put_empty(url: Url) -> Self {
        Self {
            method: Method::PUT,
            url,
            body: None,
        }
    }

    pub(crate) fn is_stream(&self) -> bool {
        self.url
            .path_segments()
            .and_then(|mut segs| segs.next_back())
            == Some("stream")
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, rename = "errorCode")]
    code: Option<String>,
    #[serde(default, rename = "errorMessage")]
    message: Option<String>,
}

/// Map a non-2xx response body onto `Api` when it carries an upstream message, else `Status`.
pub(crate) fn status_error(status: u16, url: String, body: &str) -> OandaError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            code,
            message: Some(message),
        }) => OandaError::Api {
            status,
            url,
            code,
            message,
        },
        _ => OandaError::Status { status, url },
    }
}

impl OandaClient {
    async fn send(&self, http: &Client, req: Request) -> Result<Response, OandaError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(method = %req.method, url = %req.url, "oanda request");

        let mut rb = http
            .request(req.method, req.url)
            .bearer_auth(self.token())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT_DATETIME_FORMAT, "RFC3339");
        if let Some(body) = req.body {
            rb = rb.body(body);
        }

        let resp = rb.send().await?;
        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), url = %resp.url(), "oanda response");

        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), url, &body))
    }

    /// Perform the request and return the raw body, or the first line for stream URLs.
    ///
    /// Both cases run on the REST client, so a silent stream fails with a timeout.
    pub(crate) async fn execute(&self, req: Request) -> Result<String, OandaError> {
        let streaming = req.is_stream();
        let resp = self.send(self.http(), req).await?;
        if streaming {
            first_line(resp).await
        } else {
            Ok(resp.text().await?)
        }
    }

    /// Perform the request and decode the body as `T`; `op` names the operation in decode errors.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        req: Request,
    ) -> Result<T, OandaError> {
        let body = self.execute(req).await?;
        decode(op, &body)
    }

    /// Open a long-lived newline-delimited feed and yield each non-empty line.
    pub(crate) async fn stream_lines(
        &self,
        req: Request,
    ) -> Result<BoxStream<'static, Result<String, OandaError>>, OandaError> {
        let resp = self.send(self.stream_http(), req).await?;
        Ok(lines(resp))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(op: &str, body: &str) -> Result<T, OandaError> {
    serde_json::from_str(body).map_err(|e| OandaError::Data(format!("{op}: json parse error: {e}")))
}

fn line_to_string(mut line: Vec<u8>) -> Result<String, OandaError> {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    String::from_utf8(line).map_err(|e| OandaError::Data(format!("stream line is not utf-8: {e}")))
}

async fn first_line(mut resp: Response) -> Result<String, OandaError> {
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        buf.extend_from_slice(&chunk);
        if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            buf.truncate(pos + 1);
            return line_to_string(buf);
        }
    }
    if buf.is_empty() {
        return Err(OandaError::Data(
            "stream closed before sending any data".into(),
        ));
    }
    line_to_string(buf)
}

fn lines(resp: Response) -> BoxStream<'static, Result<String, OandaError>> {
    let bytes = resp.bytes_stream().boxed();
    stream::unfold(
        (bytes, Vec::<u8>::new(), false),
        |(mut bytes, mut buf, mut done)| async move {
            loop {
                if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buf.drain(..=pos).collect();
                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    return Some((line_to_string(line), (bytes, buf, done)));
                }
                if done {
                    if buf.iter().all(u8::is_ascii_whitespace) {
                        return None;
                    }
                    let line = std::mem::take(&mut buf);
                    return Some((line_to_string(line), (bytes, buf, done)));
                }
                match bytes.next().await {
                    Some(Ok(chunk)) => buf.extend_from_slice(&chunk),
                    Some(Err(e)) => {
                        buf.clear();
                        return Some((Err(OandaError::Http(e)), (bytes, buf, true)));
                    }
                    None => done = true,
                }
            }
        },
    )
    .boxed()
}
