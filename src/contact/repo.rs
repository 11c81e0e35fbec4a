use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{ContactSubmission, NewContactSubmission};
use crate::store::StoreError;

impl ContactSubmission {
    pub async fn create(
        db: &PgPool,
        new: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (id, name, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .fetch_one(db)
        .await
        .map_err(StoreError::classify)
    }
}
