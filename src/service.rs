use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::entity::widget;
use crate::models::widget::WidgetPayload;

/// Business-logic façade over the widget table.
///
/// Stateless apart from the injected connection handle; one instance is
/// shared across all requests. Absence of a widget is a normal outcome
/// (`Option`/`bool`), never an error; only store failures surface as `DbErr`.
#[derive(Clone)]
pub struct WidgetService {
    db: DatabaseConnection,
}

impl WidgetService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All widgets, in insertion (id) order.
    pub async fn list(&self) -> Result<Vec<widget::Model>, DbErr> {
        widget::Entity::find()
            .order_by_asc(widget::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<widget::Model>, DbErr> {
        widget::Entity::find_by_id(id).one(&self.db).await
    }

    /// Insert a new widget with both timestamps set to the same instant.
    /// The store assigns the id.
    pub async fn create(&self, payload: &WidgetPayload) -> Result<widget::Model, DbErr> {
        let now = Utc::now();
        let new_widget = widget::ActiveModel {
            name: Set(payload.name.clone()),
            number_of_parts: Set(payload.number_of_parts),
            created_date: Set(now),
            updated_date: Set(now),
            ..Default::default()
        };

        new_widget.insert(&self.db).await
    }

    /// Overwrite `name` and `number_of_parts` and stamp a fresh
    /// `updated_date`; `created_date` is never touched. Returns `None`
    /// without side effects when the id is unknown.
    pub async fn update(
        &self,
        id: i32,
        payload: &WidgetPayload,
    ) -> Result<Option<widget::Model>, DbErr> {
        let Some(existing) = widget::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: widget::ActiveModel = existing.into();
        active.name = Set(payload.name.clone());
        active.number_of_parts = Set(payload.number_of_parts);
        active.updated_date = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Some(model))
    }

    /// Remove the widget; reports whether anything was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let res = widget::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
