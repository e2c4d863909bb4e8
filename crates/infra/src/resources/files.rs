//! Uploaded files
//!
//! Upload and download move raw bytes and skip schema validation. Local file
//! access happens here; the engine only sees byte buffers.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use dinero_domain::constants::CONTENT_TYPE_HEADER;
use dinero_domain::{ContentType, DineroError, Endpoint, HttpMethod, Resource, Result};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::api::{ApiCall, ApiContext, Payload};

const UPLOAD: Endpoint = Endpoint::new(Resource::Files, HttpMethod::Post, "", "upload");
const LIST: Endpoint = Endpoint::new(Resource::Files, HttpMethod::Get, "", "list").validated();
const DOWNLOAD: Endpoint = Endpoint::new(Resource::Files, HttpMethod::Get, "{file_guid}", "download");

/// Result of [`Files::download`]
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    /// Bytes persisted to the destination
    pub bytes_written: usize,
    /// `Content-Type` reported by the server, if any
    pub content_type: Option<String>,
    /// Body decoded as JSON when it happens to be JSON, else an empty object
    pub metadata: Value,
}

#[derive(Debug, Clone)]
pub struct Files {
    ctx: Arc<ApiContext>,
}

impl Files {
    pub(crate) const fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// Read `path` fully into memory and upload it.
    ///
    /// # Errors
    /// `DineroError::Io` if the file cannot be read; nothing is sent then.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn upload(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            DineroError::Io(format!("Failed to read {}: {err}", path.display()))
        })?;
        debug!(bytes = bytes.len(), "Uploading file");

        let call = ApiCall::endpoint(&UPLOAD, &[])?.bytes(bytes, ContentType::Multipart);
        self.ctx.engine().execute(call)
    }

    pub fn list(&self, params: Option<&Value>) -> Result<Value> {
        self.ctx.dispatch(&LIST, &[], Payload::Query(params))
    }

    /// Download a file and write the raw response bytes to `destination`.
    ///
    /// # Errors
    /// Request errors as for any call; `DineroError::Io` if writing fails.
    #[instrument(skip_all, fields(file_guid = %file_guid, destination = %destination.as_ref().display()))]
    pub fn download(&self, file_guid: &str, destination: impl AsRef<Path>) -> Result<DownloadOutcome> {
        let destination = destination.as_ref();
        let call = ApiCall::endpoint(&DOWNLOAD, &[file_guid])?.content_type(ContentType::OctetStream);
        let response = self.ctx.engine().execute_raw(call)?;

        fs::write(destination, &response.body).map_err(|err| {
            DineroError::Io(format!("Failed to write {}: {err}", destination.display()))
        })?;
        debug!(bytes = response.body.len(), "Download written");

        let metadata = serde_json::from_slice(&response.body)
            .unwrap_or_else(|_| Value::Object(Map::new()));

        Ok(DownloadOutcome {
            bytes_written: response.body.len(),
            content_type: response.header(CONTENT_TYPE_HEADER).map(str::to_string),
            metadata,
        })
    }
}
