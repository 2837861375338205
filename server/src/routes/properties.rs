//! Read-only listing and contact endpoints.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use agency::PropertyListing;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ApiStatus {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub whatsapp_link: String,
}

/// `GET /api` — API liveness message.
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus { message: "Velan Properties API is running", status: "healthy" })
}

/// `GET /api/properties` — all featured listings, in display order.
pub async fn list_properties(State(state): State<AppState>) -> Json<&'static [PropertyListing]> {
    Json(state.listings)
}

/// `GET /api/properties/:id` — one listing.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<&'static PropertyListing>, StatusCode> {
    let Some(listing) = state.listings.iter().find(|listing| listing.id == id) else {
        tracing::debug!(%id, "listing not found");
        return Err(StatusCode::NOT_FOUND);
    };
    Ok(Json(listing))
}

/// `GET /api/contact` — display contact details and the WhatsApp deep link.
pub async fn contact(State(state): State<AppState>) -> Json<ContactResponse> {
    let details = state.contact;
    Json(ContactResponse {
        phone: details.phone,
        email: details.email,
        address: details.address,
        whatsapp_link: details.whatsapp_link(),
    })
}
