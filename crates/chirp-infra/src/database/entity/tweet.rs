//! Tweet entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tweets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Tweet.
impl From<Model> for chirp_core::domain::Tweet {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            owner: model.owner_id.into(),
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Tweet to SeaORM ActiveModel.
impl From<chirp_core::domain::Tweet> for ActiveModel {
    fn from(tweet: chirp_core::domain::Tweet) -> Self {
        Self {
            id: Set(tweet.id.into()),
            owner_id: Set(tweet.owner.into()),
            content: Set(tweet.content),
            created_at: Set(tweet.created_at.into()),
            updated_at: Set(tweet.updated_at.into()),
        }
    }
}
