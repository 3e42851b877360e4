#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use invitation_core::{
    InvitationService, InvitationStore, NewInvitation, PortResult, WeddingInvitation,
};
use invitation_core::PortError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use web_lib::adapters::FsAssetStore;
use web_lib::web::{build_router, AppState};

pub const BOUNDARY: &str = "----invitation-test-boundary";

/// In-memory `InvitationStore` with store-assigned, never reused ids.
/// `set_unavailable(true)` makes every call fail like a lost connection.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<WeddingInvitation>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> PortResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PortError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InvitationStore for MemoryStore {
    async fn insert_invitation(&self, invitation: &NewInvitation) -> PortResult<i64> {
        self.check_available()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(invitation.clone().with_id(id));
        Ok(id)
    }

    async fn get_invitation_by_id(&self, id: i64) -> PortResult<Option<WeddingInvitation>> {
        self.check_available()?;
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub upload_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(MemoryStore::default());
    let assets = Arc::new(
        FsAssetStore::new(upload_dir.path().to_path_buf())
            .await
            .expect("upload dir"),
    );
    let state = Arc::new(AppState {
        invitations: InvitationService::new(store.clone(), assets),
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
    });
    TestApp {
        router: build_router(state),
        store,
        upload_dir,
    }
}

/// Builds a `multipart/form-data` body from text fields and an optional
/// `cover_image` file.
pub fn multipart_body(fields: &[(&str, &str)], cover: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = cover {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cover_image\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn register_request(fields: &[(&str, &str)], cover: Option<(&str, &[u8])>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, cover)))
        .expect("request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub const STORAGE_FAILURE_BODY: &str = "Something went wrong, please try again later.";

pub const RAJ_AND_SIMI: &[(&str, &str)] = &[
    ("groom", "Raj"),
    ("bride", "Simi"),
    ("wedding_date", "2025-12-01"),
    ("city", "Pune"),
    ("story", ""),
    ("haldi_date", ""),
    ("mehendi_date", "2025-11-29"),
];
