use sqlx::PgPool;
use uuid::Uuid;

use super::code::ProfileCode;
use super::repo_types::{NewProfile, Profile};
use crate::store::StoreError;

impl Profile {
    pub async fn find_by_code(
        db: &PgPool,
        code: &ProfileCode,
    ) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, profile_code, first_name, last_name, email, phone,
                   current_height, current_weight, goal_weight, created_at
            FROM profiles
            WHERE profile_code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    /// `email` must already be normalized.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, profile_code, first_name, last_name, email, phone,
                   current_height, current_weight, goal_weight, created_at
            FROM profiles
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn create(db: &PgPool, new: &NewProfile) -> Result<Profile, StoreError> {
        let d = &new.details;
        sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, profile_code, first_name, last_name, email, phone,
                                  current_height, current_weight, goal_weight)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, profile_code, first_name, last_name, email, phone,
                      current_height, current_weight, goal_weight, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.profile_code.as_str())
        .bind(&d.first_name)
        .bind(&d.last_name)
        .bind(&d.email)
        .bind(&d.phone)
        .bind(d.current_height)
        .bind(d.current_weight)
        .bind(d.goal_weight)
        .fetch_one(db)
        .await
        .map_err(StoreError::classify)
    }
}
