use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub content: String,
}

/// Posts in insertion order, like json-server's array-backed store.
pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    app_with_posts(Vec::new())
}

pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", put(update_post).delete(delete_post))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.read().await.clone())
}

async fn create_post(State(db): State<Db>, Json(input): Json<PostInput>) -> (StatusCode, Json<Post>) {
    let post = Post {
        id: Uuid::new_v4(),
        content: input.content,
    };
    tracing::info!(id = %post.id, "created post");
    db.write().await.push(post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.iter_mut().find(|post| post.id == id).ok_or(StatusCode::NOT_FOUND)?;
    post.content = input.content;
    tracing::info!(%id, "updated post");
    Ok(Json(post.clone()))
}

async fn delete_post(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut posts = db.write().await;
    let before = posts.len();
    posts.retain(|post| post.id != id);
    if posts.len() == before {
        return StatusCode::NOT_FOUND;
    }
    tracing::info!(%id, "deleted post");
    StatusCode::NO_CONTENT
}
