use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a002_event_enquiry::aggregate::{EventEnquiry, EventEnquiryDto};
use uuid::Uuid;

/// Validate and store a new event enquiry (wedding, corporate, celebration)
pub async fn create(dto: EventEnquiryDto) -> Result<EventEnquiry, ServiceError> {
    dto.validate()?;

    let aggregate = EventEnquiry::new_for_insert(dto);
    repository::insert(&aggregate).await?;

    tracing::info!(
        "Event enquiry {} stored ({} on {})",
        aggregate.id.value(),
        aggregate.event_type,
        aggregate.event_date
    );
    Ok(aggregate)
}

pub async fn get_by_id(id: Uuid) -> Result<EventEnquiry, ServiceError> {
    repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> Result<Vec<EventEnquiry>, ServiceError> {
    Ok(repository::list_all().await?)
}
