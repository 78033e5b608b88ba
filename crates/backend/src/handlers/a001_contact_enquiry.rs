use axum::{extract::Path, Json};
use contracts::domain::a001_contact_enquiry::aggregate::{ContactEnquiry, ContactEnquiryDto};

use crate::domain::a001_contact_enquiry;
use crate::shared::error::ServiceError;

/// GET /api/enquiries/contact
pub async fn list_all() -> Result<Json<Vec<ContactEnquiry>>, ServiceError> {
    a001_contact_enquiry::service::list_all().await.map(Json)
}

/// GET /api/enquiries/contact/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ContactEnquiry>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| ServiceError::NotFound)?;
    a001_contact_enquiry::service::get_by_id(uuid).await.map(Json)
}

/// POST /api/enquiries/contact
pub async fn create(
    Json(dto): Json<ContactEnquiryDto>,
) -> Result<Json<ContactEnquiry>, ServiceError> {
    a001_contact_enquiry::service::create(dto).await.map(Json)
}
