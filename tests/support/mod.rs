//! In-process stand-in for the posts API, backed by a shared in-memory list.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::{net::TcpListener, sync::RwLock};
use url::Url;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: String,
}

#[derive(Deserialize)]
struct CreateBody {
    title: String,
    content: String,
}

#[derive(Deserialize)]
struct PatchBody {
    title: Option<String>,
    content: Option<String>,
    published: Option<bool>,
}

#[derive(Deserialize)]
struct ListParams {
    term: Option<String>,
    page: Option<usize>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct ListBody {
    posts: Vec<StoredPost>,
}

/// Newest first.
pub type Db = Arc<RwLock<Vec<StoredPost>>>;

pub struct FakeApi {
    pub addr: SocketAddr,
    pub db: Db,
}

impl FakeApi {
    pub async fn spawn() -> Self {
        let db: Db = Arc::new(RwLock::new(Vec::new()));
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = app(db.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        Self { addr, db }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.base_url()).expect("base url")
    }

    pub async fn seed(&self, title: &str, content: &str, published: bool) -> StoredPost {
        let post = new_post(title.to_string(), content.to_string(), published);
        self.db.write().await.insert(0, post.clone());
        post
    }

    pub async fn find(&self, id: &str) -> Option<StoredPost> {
        self.db.read().await.iter().find(|p| p.id == id).cloned()
    }
}

fn app(db: Db) -> Router {
    Router::new()
        .route("/posts", get(list_published).post(create_post))
        .route("/posts/draft", get(list_drafts))
        .route(
            "/posts/{id}",
            get(get_post).patch(patch_post).delete(delete_post),
        )
        .with_state(db)
}

fn new_post(title: String, content: String, published: bool) -> StoredPost {
    StoredPost {
        id: Uuid::new_v4().to_string(),
        title,
        content,
        published,
        created_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .expect("format timestamp"),
    }
}

async fn list_published(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<ListBody> {
    list(&db, true, &params).await
}

async fn list_drafts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<ListBody> {
    list(&db, false, &params).await
}

async fn list(db: &Db, published: bool, params: &ListParams) -> Json<ListBody> {
    let term = params.term.as_deref().map(str::to_lowercase);
    let limit = params.limit.unwrap_or(10).max(1);
    let page = params.page.unwrap_or(1).max(1);

    let posts = db
        .read()
        .await
        .iter()
        .filter(|p| p.published == published)
        .filter(|p| {
            term.as_deref()
                .is_none_or(|t| p.title.to_lowercase().contains(t))
        })
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();
    Json(ListBody { posts })
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreateBody>,
) -> (StatusCode, Json<StoredPost>) {
    let post = new_post(input.title, input.content, false);
    db.write().await.insert(0, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<StoredPost>, StatusCode> {
    let posts = db.read().await;
    posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn patch_post(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<PatchBody>,
) -> Result<Json<StoredPost>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(published) = input.published {
        post.published = published;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut posts = db.write().await;
    let before = posts.len();
    posts.retain(|p| p.id != id);
    if posts.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
