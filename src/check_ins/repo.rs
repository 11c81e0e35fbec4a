use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{CheckIn, NewCheckIn};
use crate::store::StoreError;

impl CheckIn {
    pub async fn create(db: &PgPool, new: &NewCheckIn) -> Result<CheckIn, StoreError> {
        sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, profile_id, current_weight, cravings_scale, calorie_goal_met)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, profile_id, current_weight, cravings_scale, calorie_goal_met, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.profile_id)
        .bind(new.current_weight)
        .bind(new.cravings_scale)
        .bind(new.calorie_goal_met.as_ref())
        .fetch_one(db)
        .await
        .map_err(StoreError::classify)
    }
}
