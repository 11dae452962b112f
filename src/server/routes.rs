use crate::domain::model::{Book, BookMatch, ReviewOutcome};
use crate::server::AppState;
use crate::utils::error::{BookstoreError, Result};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::any::Any;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    fn server_error(detail: impl Into<String>) -> Self {
        Self {
            message: "Server error".to_string(),
            error: Some(detail.into()),
        }
    }
}

impl IntoResponse for BookstoreError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            BookstoreError::InvalidInput { message } => {
                (StatusCode::BAD_REQUEST, MessageBody::new(message))
            }
            BookstoreError::Conflict { message } => {
                (StatusCode::CONFLICT, MessageBody::new(message))
            }
            BookstoreError::NotFound { message } => {
                (StatusCode::NOT_FOUND, MessageBody::new(message))
            }
            other => {
                tracing::error!("request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageBody::server_error(other.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Last line of defense: a panicking handler still answers with the
/// standard 500 body instead of tearing down the connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("request handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::server_error(detail)),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageBody>> {
    let username = request.username.as_deref().unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    state.registration.register(username, password).await?;
    Ok(Json(MessageBody::new(
        "User successfully registered. Now you can login",
    )))
}

pub async fn list_books(State(state): State<AppState>) -> Result<Response> {
    let catalog = state.query.list_all().await?;
    let body = pretty_json(&catalog)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>> {
    Ok(Json(state.query.by_isbn(&isbn).await?))
}

pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<BookMatch>>> {
    Ok(Json(state.query.by_author(&author).await?))
}

pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<BookMatch>>> {
    Ok(Json(state.query.by_title(&title).await?))
}

pub async fn book_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Response> {
    let response = match state.query.reviews(&isbn).await? {
        ReviewOutcome::Reviews(reviews) => Json(reviews).into_response(),
        ReviewOutcome::Empty => {
            Json(MessageBody::new("No reviews found for this book.")).into_response()
        }
    };
    Ok(response)
}

/// Catalog listing keeps the upstream wire format: four-space indentation.
fn pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| BookstoreError::Unexpected {
        message: e.to_string(),
    })
}
