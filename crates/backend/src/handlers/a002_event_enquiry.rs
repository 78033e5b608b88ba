use axum::{extract::Path, Json};
use contracts::domain::a002_event_enquiry::aggregate::{EventEnquiry, EventEnquiryDto};

use crate::domain::a002_event_enquiry;
use crate::shared::error::ServiceError;

/// GET /api/enquiries/event
pub async fn list_all() -> Result<Json<Vec<EventEnquiry>>, ServiceError> {
    a002_event_enquiry::service::list_all().await.map(Json)
}

/// GET /api/enquiries/event/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<EventEnquiry>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| ServiceError::NotFound)?;
    a002_event_enquiry::service::get_by_id(uuid).await.map(Json)
}

/// POST /api/enquiries/event
pub async fn create(Json(dto): Json<EventEnquiryDto>) -> Result<Json<EventEnquiry>, ServiceError> {
    a002_event_enquiry::service::create(dto).await.map(Json)
}
