use contracts::domain::a002_event_enquiry::aggregate::EventEnquiry;
use contracts::domain::common::EnquiryId;
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use crate::domain::a001_contact_enquiry::repository::LIST_LIMIT;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_event_enquiry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: Option<String>,
    pub message: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EventEnquiry {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        EventEnquiry {
            id: EnquiryId(uuid),
            name: m.name,
            phone: m.phone,
            email: m.email,
            event_type: m.event_type,
            event_date: m.event_date,
            guest_count: m.guest_count,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first, at most `LIST_LIMIT` rows
pub async fn list_all() -> anyhow::Result<Vec<EventEnquiry>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<EventEnquiry>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &EventEnquiry) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        phone: Set(aggregate.phone.clone()),
        email: Set(aggregate.email.clone()),
        event_type: Set(aggregate.event_type.clone()),
        event_date: Set(aggregate.event_date.clone()),
        guest_count: Set(aggregate.guest_count.clone()),
        message: Set(aggregate.message.clone()),
        created_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
