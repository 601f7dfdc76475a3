use crate::prelude::{AppError, Contact, ContactFilter, PhoneBook};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info, warn};
use serde::Serialize;
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;

pub type SharedPhoneBook = Arc<PhoneBook>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "contact not found".to_string()),
            AppError::IllegalContact(reason) => {
                (StatusCode::BAD_REQUEST, format!("illegal contact: {}", reason))
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::IdsExhausted => {
                error!("Request failed: {}", self);
                (StatusCode::INSUFFICIENT_STORAGE, self.to_string())
            }
            _ => {
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(phonebook: SharedPhoneBook) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts).post(add_contact))
        .route(
            "/contacts/:id",
            get(get_contact).put(put_contact).delete(delete_contact),
        )
        .with_state(phonebook)
}

/// Serves the phone book on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    phonebook: SharedPhoneBook,
    shutdown: F,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        "Phone book listening on http://{} ({} contacts)",
        listener.local_addr()?,
        phonebook.len()
    );

    axum::serve(listener, router(phonebook))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Phone book server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

async fn list_contacts(
    State(phonebook): State<SharedPhoneBook>,
    Query(filter): Query<ContactFilter>,
) -> Json<Vec<Contact>> {
    Json(phonebook.find_all(&filter))
}

async fn get_contact(
    State(phonebook): State<SharedPhoneBook>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, AppError> {
    phonebook
        .find_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", id)))
}

async fn add_contact(
    State(phonebook): State<SharedPhoneBook>,
    Json(contact): Json<Contact>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    Ok((StatusCode::CREATED, Json(phonebook.insert(contact)?)))
}

// Creating through PUT answers 200, same as replacing.
async fn put_contact(
    State(phonebook): State<SharedPhoneBook>,
    Path(id): Path<i64>,
    Json(contact): Json<Contact>,
) -> Result<Json<Contact>, AppError> {
    if let Err(err) = contact.ensure_identity(id) {
        warn!("Rejected PUT /contacts/{}: {}", id, err);
        return Err(err);
    }

    Ok(Json(phonebook.upsert(contact)?))
}

async fn delete_contact(
    State(phonebook): State<SharedPhoneBook>,
    Path(id): Path<i64>,
) -> StatusCode {
    phonebook.delete(id);
    StatusCode::NO_CONTENT
}
