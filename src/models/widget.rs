use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum widget name length, in Unicode characters.
pub const MAX_NAME_CHARS: usize = 64;

/// Request body for creating or replacing a widget.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WidgetPayload {
    /// UTF-8 string, limited to 64 characters.
    #[schema(example = "Test Widget", max_length = 64)]
    pub name: String,
    /// Number of parts in the widget.
    #[schema(example = 5)]
    pub number_of_parts: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct WidgetResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Test Widget")]
    pub name: String,
    #[schema(example = 5)]
    pub number_of_parts: i32,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteWidgetResponse {
    #[schema(example = "Widget 1 deleted")]
    pub message: String,
}

impl From<crate::entity::widget::Model> for WidgetResponse {
    fn from(m: crate::entity::widget::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            number_of_parts: m.number_of_parts,
            created_date: m.created_date,
            updated_date: m.updated_date,
        }
    }
}

/// Validate a widget payload (name at most 64 Unicode characters).
pub fn validate_widget_payload(payload: &WidgetPayload) -> Result<(), AppError> {
    if payload.name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "Name must be at most {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(())
}
