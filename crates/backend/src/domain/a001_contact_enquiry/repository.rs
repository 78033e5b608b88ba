use contracts::domain::a001_contact_enquiry::aggregate::{ContactEnquiry, ContactSubject};
use contracts::domain::common::EnquiryId;
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

/// Upper bound for list endpoints
pub const LIST_LIMIT: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_contact_enquiry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactEnquiry {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        ContactEnquiry {
            id: EnquiryId(uuid),
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: ContactSubject::parse(&m.subject).unwrap_or(ContactSubject::Other),
            message: m.message,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first, at most `LIST_LIMIT` rows
pub async fn list_all() -> anyhow::Result<Vec<ContactEnquiry>> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ContactEnquiry>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ContactEnquiry) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        email: Set(aggregate.email.clone()),
        phone: Set(aggregate.phone.clone()),
        subject: Set(aggregate.subject.as_str().to_string()),
        message: Set(aggregate.message.clone()),
        created_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
