use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, ORIGIN, REFERER},
    Client as ReqwestClient, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{
    auth::{token_expiry, Session},
    error::Error,
    models::{
        ack::{FavoriteAck, StatusAck, VoteAck},
        book::Book,
        comment::Comment,
        dmail::Dmail,
        keyset::Keyset,
        post::Submission,
        user::{NotificationSetting, User},
    },
    result::Result,
    search::{
        BookQuery, CommentQuery, CommentScore, DmailQuery, LikeQuery, SubmissionQuery, VoteQuery,
    },
};

/// Host every endpoint lives under.
const BASE_URL: &str = "https://capi-v2.sankakucomplex.com";

/// Language parameter appended to every request.
const LANG: &str = "en";

/// Selects which account [`Client::user_info`] fetches.
#[derive(Debug, Clone)]
pub enum UserQuery {
    /// The logged in account. Requires a session and refreshes the
    /// snapshot held by the client.
    Me,
    /// Lookup by numeric account id.
    Id(u64),
    /// Lookup by account name.
    Name(String),
}

/// Reply shape of `POST /auth/token`.
#[derive(Debug, Deserialize)]
struct AuthReply {
    access_token: String,
    current_user: User,
}

/// Reply wrapper used by the user-by-id endpoints.
#[derive(Debug, Deserialize)]
struct UserReply {
    user: User,
}

/// The main entry point to the API.
///
/// A `Client` starts out anonymous. After [`Client::login`] it holds the
/// access token, the credentials, and a snapshot of the account, and it
/// silently re-authenticates whenever the token expires. Methods that
/// act on the logged in account fail with [`Error::NotAuthenticated`]
/// while the client is anonymous, before any network traffic happens.
#[derive(Debug)]
pub struct Client {
    http: ReqwestClient,
    extra_headers: HeaderMap,
    session: Option<Session>,
}

impl Client {
    /// Creates an anonymous client.
    pub fn new() -> Client {
        Self::with_headers(HeaderMap::new())
    }

    /// Creates an anonymous client with a set of headers added to every
    /// request it will ever dispatch.
    ///
    /// Per-call headers of the same name take precedence.
    pub fn with_headers(extra_headers: HeaderMap) -> Client {
        Client {
            http: ReqwestClient::new(),
            extra_headers,
            session: None,
        }
    }

    /// Whether a login session is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the snapshot of the logged in account, taken at login
    /// and refreshed by [`Client::user_info`] with [`UserQuery::Me`].
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// Logs in with an account.
    ///
    /// The credentials are kept so the token can be renewed without
    /// caller involvement when it expires. If the credentials are
    /// changed remotely the silent renewal starts failing; call
    /// [`Client::logout`] and log in again.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCredentials`] if the API rejects the pair,
    /// [`Error::Token`] if the returned token cannot be decoded, or a
    /// transport error.
    pub async fn login(&mut self, login: &str, password: &str) -> Result<()> {
        let body = json!({ "login": login, "password": password });
        let reply: AuthReply = match self
            .send(Method::POST, "auth/token", &[], &HeaderMap::new(), Some(&body))
            .await
        {
            Err(Error::Status { status, .. }) if status == StatusCode::UNAUTHORIZED => {
                return Err(Error::InvalidCredentials)
            }
            other => other?,
        };

        let expires_at = token_expiry(&reply.access_token)?;
        debug!("logged in as {login}, token valid until {expires_at}");
        self.session = Some(Session {
            access_token: reply.access_token,
            login: login.to_string(),
            password: password.to_string(),
            expires_at,
            user: reply.current_user,
        });
        Ok(())
    }

    /// Logs out from the current account.
    ///
    /// Local state is dropped immediately; the logout endpoint is then
    /// notified best-effort. The client is anonymous again even when
    /// that notification fails, so its error can usually be ignored.
    ///
    /// # Errors
    ///
    /// Transport errors from the logout notification.
    pub async fn logout(&mut self) -> Result<()> {
        self.session = None;
        debug!("session dropped, notifying the logout endpoint");
        self.execute(Method::POST, "auth/logout", &[], &HeaderMap::new(), None)
            .await?;
        Ok(())
    }

    /// Fetches account info, either of the logged in account or of an
    /// arbitrary one by id or name.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] for [`UserQuery::Me`] on an
    /// anonymous client, otherwise transport and status errors.
    pub async fn user_info(&mut self, query: &UserQuery) -> Result<User> {
        match query {
            UserQuery::Me => {
                self.require_session()?;
                let reply: UserReply = self
                    .dispatch(Method::GET, "users/me", &[], &HeaderMap::new(), None)
                    .await?;
                if let Some(session) = &mut self.session {
                    session.user = reply.user.clone();
                }
                Ok(reply.user)
            }
            UserQuery::Id(id) => {
                let reply: UserReply = self
                    .dispatch(
                        Method::GET,
                        &format!("users/{id}"),
                        &[],
                        &HeaderMap::new(),
                        None,
                    )
                    .await?;
                Ok(reply.user)
            }
            UserQuery::Name(name) => {
                self.dispatch(
                    Method::GET,
                    &format!("users/name/{name}"),
                    &[],
                    &HeaderMap::new(),
                    None,
                )
                .await
            }
        }
    }

    /// Edits info or general settings of the logged in account.
    ///
    /// The change object is sent as the nested `user` field, e.g.
    /// `json!({ "receive_dmails": false })`.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn set_user_info(&mut self, changes: Value) -> Result<StatusAck> {
        let id = self.require_session()?.user.id();
        let body = json!({ "user": changes });
        self.dispatch(
            Method::PUT,
            &format!("notifications/{id}"),
            &[],
            &HeaderMap::new(),
            Some(&body),
        )
        .await
    }

    /// Fetches the per-category notification settings of the logged in
    /// account.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn notification_settings(&mut self) -> Result<Vec<NotificationSetting>> {
        self.require_session()?;
        self.dispatch(
            Method::GET,
            "notifications/settings",
            &[],
            &HeaderMap::new(),
            None,
        )
        .await
    }

    /// Updates one row of the notification settings.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn set_notification_settings(
        &mut self,
        change: &NotificationSetting,
    ) -> Result<StatusAck> {
        self.require_session()?;
        let body = json!(change);
        self.dispatch(
            Method::POST,
            "notifications/settings",
            &[],
            &HeaderMap::new(),
            Some(&body),
        )
        .await
    }

    /// Searches submissions, anonymously or with the logged in account.
    ///
    /// Anonymous searches handle at most two tags; some results carry
    /// no media URLs unless the account may see them. The API answers
    /// 408 when the search takes too long, which surfaces as
    /// [`Error::Status`].
    ///
    /// # Errors
    ///
    /// Transport and status errors.
    pub async fn search_submissions(
        &mut self,
        query: &SubmissionQuery,
    ) -> Result<Keyset<Submission>> {
        let params = vec![
            ("limit", query.limit.to_string()),
            ("next", query.next.clone().unwrap_or_default()),
            ("prev", query.prev.clone().unwrap_or_default()),
            (
                "hide_posts_in_books",
                query.hide_posts_in_books.as_str().to_string(),
            ),
            ("default_threshold", query.threshold.to_string()),
            ("tags", query.tag_string()),
        ];
        self.dispatch(
            Method::GET,
            "posts/keyset",
            &params,
            &Self::search_headers(),
            None,
        )
        .await
    }

    /// Searches books.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn search_books(&mut self, query: &BookQuery) -> Result<Keyset<Book>> {
        self.require_session()?;
        let params = vec![
            ("limit", query.limit.to_string()),
            ("next", query.next.clone().unwrap_or_default()),
            ("prev", query.prev.clone().unwrap_or_default()),
            ("pool_type", "0".to_string()),
            ("tags", query.tag_string()),
        ];
        self.dispatch(
            Method::GET,
            "pools/keyset",
            &params,
            &Self::search_headers(),
            None,
        )
        .await
    }

    /// Fetches a single submission by id.
    ///
    /// When logged in the reply also carries `user_vote` and
    /// `is_favorited`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no submission has the id, otherwise
    /// transport and status errors.
    pub async fn submission(&mut self, id: u64) -> Result<Submission> {
        let params = vec![
            ("limit", "1".to_string()),
            ("tags", format!("id_range:{id}")),
        ];
        let posts: Vec<Submission> = self
            .dispatch(Method::GET, "posts", &params, &HeaderMap::new(), None)
            .await?;
        posts.into_iter().next().ok_or(Error::NotFound(id))
    }

    /// Fetches a single book by id.
    ///
    /// # Errors
    ///
    /// Transport and status errors, including a status error when no
    /// book has the id.
    pub async fn book(&mut self, id: u64) -> Result<Book> {
        let params = vec![("limit", "1".to_string())];
        self.dispatch(
            Method::GET,
            &format!("pools/{id}"),
            &params,
            &HeaderMap::new(),
            None,
        )
        .await
    }

    /// Fetches the comments of a submission or book.
    ///
    /// # Errors
    ///
    /// Transport and status errors.
    pub async fn comments(&mut self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let params = vec![
            ("limit", query.limit.to_string()),
            ("page", query.page.to_string()),
        ];
        self.dispatch(
            Method::GET,
            &format!("{}/{}/comments", query.kind.segment(), query.id),
            &params,
            &HeaderMap::new(),
            None,
        )
        .await
    }

    /// Fetches the private messages of the logged in account.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn dmails(&mut self, query: &DmailQuery) -> Result<Vec<Dmail>> {
        self.require_session()?;
        let params = vec![
            ("limit", query.limit.to_string()),
            ("page", query.page.to_string()),
        ];
        self.dispatch(Method::GET, "dmail", &params, &HeaderMap::new(), None)
            .await
    }

    /// Sends a private message to the account with the given id.
    ///
    /// The reply is passed through unmodified.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors (sending to yourself is rejected by
    /// the API).
    pub async fn send_dmail(&mut self, recipient: u64, title: &str, body: &str) -> Result<Value> {
        self.require_session()?;
        let body = json!({
            "dmail": {
                "user_id": recipient,
                "title": title,
                "body": body,
            }
        });
        self.dispatch(Method::POST, "dmail", &[], &HeaderMap::new(), Some(&body))
            .await
    }

    /// Upvotes or downvotes a comment.
    ///
    /// The reply is passed through unmodified.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn score_comment(&mut self, id: u64, score: CommentScore) -> Result<Value> {
        self.require_session()?;
        let body = json!({ "score": score.as_str() });
        self.dispatch(
            Method::PUT,
            &format!("comments/{id}/vote"),
            &[],
            &HeaderMap::new(),
            Some(&body),
        )
        .await
    }

    /// Adds a favorite to a submission or book, or removes one when
    /// [`LikeQuery::remove`] is set.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn like(&mut self, query: &LikeQuery) -> Result<FavoriteAck> {
        self.require_session()?;
        let method = if query.remove {
            Method::DELETE
        } else {
            Method::POST
        };
        self.dispatch(
            method,
            &format!("{}/{}/favorite", query.kind.segment(), query.id),
            &[],
            &HeaderMap::new(),
            None,
        )
        .await
    }

    /// Casts a vote on a submission or book. A score of zero removes
    /// the vote instead.
    ///
    /// # Errors
    ///
    /// [`Error::NotAuthenticated`] on an anonymous client, otherwise
    /// transport and status errors.
    pub async fn vote(&mut self, query: &VoteQuery) -> Result<VoteAck> {
        self.require_session()?;
        let method = if query.score == 0 {
            Method::DELETE
        } else {
            Method::PUT
        };
        let body = json!({ "score": query.score });
        self.dispatch(
            method,
            &format!("{}/{}/vote", query.kind.segment(), query.id),
            &[],
            &HeaderMap::new(),
            Some(&body),
        )
        .await
    }

    fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(Error::NotAuthenticated)
    }

    /// Re-runs the login flow with the stored credentials when the held
    /// token has expired. Runs before every dispatched request.
    async fn refresh_expired(&mut self) -> Result<()> {
        let credentials = match &self.session {
            Some(session) if session.is_expired() => {
                Some((session.login.clone(), session.password.clone()))
            }
            _ => None,
        };
        if let Some((login, password)) = credentials {
            debug!("access token expired, renewing session for {login}");
            self.login(&login, &password).await?;
        }
        Ok(())
    }

    /// Merges the three header layers: authorization from the session,
    /// then client-wide extras, then call-specific headers, later
    /// layers overriding earlier ones.
    fn merged_headers(&self, call: &HeaderMap) -> Result<HeaderMap> {
        let mut merged = HeaderMap::new();
        if let Some(session) = &self.session {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", session.access_token))
                .map_err(|e| Error::Token(e.to_string()))?;
            merged.insert(AUTHORIZATION, bearer);
        }
        for (name, value) in &self.extra_headers {
            merged.insert(name, value.clone());
        }
        for (name, value) in call {
            merged.insert(name, value.clone());
        }
        Ok(merged)
    }

    /// Browser-mimicking headers the search endpoints expect.
    fn search_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("dnd"), HeaderValue::from_static("1"));
        headers.insert(
            ORIGIN,
            HeaderValue::from_static("https://beta.sankakucomplex.com"),
        );
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://beta.sankakucomplex.com/"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.sankaku.api+json;v=2"),
        );
        headers
    }

    /// The expiry hook followed by the actual request.
    async fn dispatch<T>(
        &mut self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.refresh_expired().await?;
        self.send(method, path, query, headers, body).await
    }

    async fn send<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, query, headers, body).await?;
        response.json::<T>().await.map_err(Into::into)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{BASE_URL}/{path}");
        let merged = self.merged_headers(headers)?;

        debug!("{method} {url} dispatched");
        let mut builder = self
            .http
            .request(method, url.as_str())
            .headers(merged)
            .query(&[("lang", LANG)])
            .query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(response)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session_fixture() -> Session {
        Session {
            access_token: "token-under-test".to_string(),
            login: "user".to_string(),
            password: "hunter2".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            user: serde_json::from_value(json!({ "id": 42, "name": "tester" }))
                .expect("user fixture"),
        }
    }

    #[tokio::test]
    async fn account_methods_fail_fast_when_anonymous() {
        let mut client = Client::new();
        assert!(!client.is_authenticated());

        assert!(matches!(
            client.user_info(&UserQuery::Me).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.set_user_info(json!({ "receive_dmails": false })).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.notification_settings().await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.search_books(&BookQuery::default()).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.dmails(&DmailQuery::default()).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.send_dmail(1, "title", "body").await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.score_comment(1, CommentScore::Plus).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.like(&LikeQuery::new(1)).await,
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(
            client.vote(&VoteQuery::new(1, 5)).await,
            Err(Error::NotAuthenticated)
        ));
    }

    #[test]
    fn authorization_is_injected_from_the_session() {
        let mut client = Client::new();
        client.session = Some(session_fixture());

        let merged = client.merged_headers(&HeaderMap::new()).expect("merge");
        assert_eq!(
            merged.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer token-under-test")
        );
    }

    #[test]
    fn call_headers_override_client_wide_extras() {
        let mut extra = HeaderMap::new();
        extra.insert(
            HeaderName::from_static("x-extra"),
            HeaderValue::from_static("construction"),
        );
        extra.insert(
            HeaderName::from_static("x-kept"),
            HeaderValue::from_static("kept"),
        );
        let client = Client::with_headers(extra);

        let mut call = HeaderMap::new();
        call.insert(
            HeaderName::from_static("x-extra"),
            HeaderValue::from_static("per-call"),
        );

        let merged = client.merged_headers(&call).expect("merge");
        assert_eq!(
            merged.get("x-extra").and_then(|v| v.to_str().ok()),
            Some("per-call")
        );
        assert_eq!(
            merged.get("x-kept").and_then(|v| v.to_str().ok()),
            Some("kept")
        );
    }

    #[test]
    fn extra_headers_may_override_the_authorization_layer() {
        let mut extra = HeaderMap::new();
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer pinned"));
        let mut client = Client::with_headers(extra);
        client.session = Some(session_fixture());

        let merged = client.merged_headers(&HeaderMap::new()).expect("merge");
        assert_eq!(
            merged.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer pinned")
        );
    }

    #[test]
    fn current_user_reflects_the_session_snapshot() {
        let mut client = Client::new();
        assert!(client.current_user().is_none());

        client.session = Some(session_fixture());
        assert_eq!(client.current_user().map(User::id), Some(42));
        assert!(client.is_authenticated());
    }
}
