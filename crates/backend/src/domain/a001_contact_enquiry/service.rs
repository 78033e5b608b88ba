use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_contact_enquiry::aggregate::{ContactEnquiry, ContactEnquiryDto};
use uuid::Uuid;

/// Validate and store a new contact enquiry
pub async fn create(dto: ContactEnquiryDto) -> Result<ContactEnquiry, ServiceError> {
    dto.validate()?;

    let aggregate = ContactEnquiry::new_for_insert(dto);
    repository::insert(&aggregate).await?;

    tracing::info!(
        "Contact enquiry {} stored (subject: {})",
        aggregate.id.value(),
        aggregate.subject.as_str()
    );
    Ok(aggregate)
}

pub async fn get_by_id(id: Uuid) -> Result<ContactEnquiry, ServiceError> {
    repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> Result<Vec<ContactEnquiry>, ServiceError> {
    Ok(repository::list_all().await?)
}
