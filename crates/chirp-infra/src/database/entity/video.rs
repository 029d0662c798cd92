//! Video entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub video_file: Option<String>,
    pub thumbnail: String,
    pub duration: Option<i32>,
    pub is_published: bool,
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

/// Conversion from SeaORM Model to Domain Video.
impl From<Model> for chirp_core::domain::Video {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            owner: model.owner_id.into(),
            title: model.title,
            description: model.description,
            video_file: model.video_file,
            thumbnail: model.thumbnail,
            duration: model.duration.and_then(|d| u32::try_from(d).ok()),
            is_published: model.is_published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Video to SeaORM ActiveModel.
impl From<chirp_core::domain::Video> for ActiveModel {
    fn from(video: chirp_core::domain::Video) -> Self {
        Self {
            id: Set(video.id.into()),
            owner_id: Set(video.owner.into()),
            title: Set(video.title),
            description: Set(video.description),
            video_file: Set(video.video_file),
            thumbnail: Set(video.thumbnail),
            duration: Set(video.duration.map(|d| i32::try_from(d).unwrap_or(i32::MAX))),
            is_published: Set(video.is_published),
            created_at: Set(video.created_at.into()),
            updated_at: Set(video.updated_at.into()),
        }
    }
}
