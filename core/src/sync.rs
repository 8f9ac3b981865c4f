//! Executes effects against the posts backend and reports typed outcomes.
//!
//! # Design
//! `Syncer` pairs the stateless `PostsClient` with an injected `Transport`.
//! Every `Effect` maps to exactly one `Outcome`; errors are values, never
//! panics or early returns, so the reducer sees every failure. Bulk delete
//! is an explicit join: all deletes run concurrently, and the aggregate
//! succeeds only when every one of them did.

use std::future::Future;

use futures::future::join_all;

use crate::client::PostsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{Effect, Outcome};
use crate::types::{PostContent, TodoId, TodoItem};

/// Executes one HTTP round-trip.
///
/// Implementations return non-2xx responses as `Ok`; only a failure to get
/// any response at all should be an `Err` (normally `ApiError::Transport`).
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct Syncer<T> {
    client: PostsClient,
    transport: T,
}

impl<T: Transport> Syncer<T> {
    pub fn new(client: PostsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform `effect` and wrap the result for `TodoState::apply`.
    pub async fn run(&self, effect: Effect) -> Outcome {
        match effect {
            Effect::FetchAll => Outcome::Loaded(self.fetch_all().await),
            Effect::Create { content } => Outcome::Created(self.create(content).await),
            Effect::Update { id, content } => {
                let result = self.update(&id, content).await;
                Outcome::Updated { id, result }
            }
            Effect::Delete { id } => {
                let result = self.delete(&id).await;
                Outcome::Deleted { id, result }
            }
            Effect::DeleteAll { ids } => Outcome::Cleared(self.delete_all(&ids).await),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.send(self.client.build_list_posts()).await?;
        self.client.parse_list_posts(response)
    }

    pub async fn create(&self, content: String) -> Result<TodoItem, ApiError> {
        let request = self.client.build_create_post(&PostContent { content })?;
        let response = self.send(request).await?;
        self.client.parse_create_post(response)
    }

    pub async fn update(&self, id: &TodoId, content: String) -> Result<TodoItem, ApiError> {
        let request = self.client.build_update_post(id, &PostContent { content })?;
        let response = self.send(request).await?;
        self.client.parse_update_post(response)
    }

    pub async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_post(id)).await?;
        self.client.parse_delete_post(response)
    }

    /// Delete every id concurrently. Waits for all of them to settle, then
    /// reports the first failure if there was any.
    pub async fn delete_all(&self, ids: &[TodoId]) -> Result<(), ApiError> {
        let results = join_all(ids.iter().map(|id| self.delete(id))).await;
        let mut failures = results.into_iter().filter_map(Result::err);
        match failures.next() {
            None => Ok(()),
            Some(first) => {
                let failed = 1 + failures.count();
                tracing::warn!(failed, total = ids.len(), "bulk delete incomplete");
                Err(first)
            }
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::trace!(status = response.status, "received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::ScriptedTransport;

    fn syncer(transport: ScriptedTransport) -> Syncer<ScriptedTransport> {
        Syncer::new(PostsClient::new("http://test"), transport)
    }

    #[tokio::test]
    async fn fetch_all_parses_collection() {
        let s = syncer(ScriptedTransport::new(|_| {
            Ok(HttpResponse::new(200, r#"[{"id":1,"content":"a"}]"#))
        }));
        let outcome = s.run(Effect::FetchAll).await;
        assert_eq!(
            outcome,
            Outcome::Loaded(Ok(vec![TodoItem {
                id: TodoId::from("1"),
                content: "a".to_string()
            }]))
        );
        let sent = s.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].path, "http://test/posts");
    }

    #[tokio::test]
    async fn create_sends_content_and_returns_server_item() {
        let s = syncer(ScriptedTransport::new(|_| {
            Ok(HttpResponse::new(201, r#"{"id":"srv-1","content":"milk"}"#))
        }));
        let outcome = s
            .run(Effect::Create {
                content: "milk".to_string(),
            })
            .await;
        match outcome {
            Outcome::Created(Ok(item)) => assert_eq!(item.id, TodoId::from("srv-1")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        let sent = s.transport().requests();
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"content":"milk"}"#));
    }

    #[tokio::test]
    async fn update_outcome_carries_target_id_on_failure() {
        let s = syncer(ScriptedTransport::new(|_| Ok(HttpResponse::new(404, ""))));
        let outcome = s
            .run(Effect::Update {
                id: TodoId::from("9"),
                content: "x".to_string(),
            })
            .await;
        assert_eq!(
            outcome,
            Outcome::Updated {
                id: TodoId::from("9"),
                result: Err(ApiError::NotFound)
            }
        );
        assert_eq!(s.transport().requests()[0].path, "http://test/posts/9");
    }

    #[tokio::test]
    async fn transport_error_becomes_outcome() {
        let s = syncer(ScriptedTransport::unreachable());
        let outcome = s.run(Effect::Delete { id: TodoId::from("1") }).await;
        assert!(matches!(
            outcome,
            Outcome::Deleted {
                result: Err(ApiError::Transport(_)),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn delete_all_issues_requests_concurrently() {
        let s = syncer(ScriptedTransport::new(|_| Ok(HttpResponse::new(204, ""))));
        let ids: Vec<TodoId> = ["1", "2", "3"].into_iter().map(TodoId::from).collect();
        let outcome = s.run(Effect::DeleteAll { ids }).await;
        assert_eq!(outcome, Outcome::Cleared(Ok(())));
        assert_eq!(s.transport().requests().len(), 3);
        assert_eq!(s.transport().max_in_flight(), 3);
    }

    #[tokio::test]
    async fn delete_all_fails_when_any_delete_fails() {
        let s = syncer(ScriptedTransport::new(|request| {
            if request.path.ends_with("/2") {
                Ok(HttpResponse::new(500, "boom"))
            } else {
                Ok(HttpResponse::new(200, "{}"))
            }
        }));
        let ids: Vec<TodoId> = ["1", "2", "3"].into_iter().map(TodoId::from).collect();
        let outcome = s.run(Effect::DeleteAll { ids }).await;
        assert!(matches!(
            outcome,
            Outcome::Cleared(Err(ApiError::HttpError { status: 500, .. }))
        ));
        // Every delete is still attempted.
        assert_eq!(s.transport().requests().len(), 3);
    }

    #[tokio::test]
    async fn delete_all_of_nothing_succeeds_without_requests() {
        let s = syncer(ScriptedTransport::unreachable());
        let outcome = s.run(Effect::DeleteAll { ids: Vec::new() }).await;
        assert_eq!(outcome, Outcome::Cleared(Ok(())));
        assert!(s.transport().requests().is_empty());
    }
}
