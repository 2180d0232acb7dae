use std::collections::HashMap;

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;
use cruxlog_core::serde::to_json_string;

use super::model::{
    CreateGoalCategoryDto, GoalCategory, GoalCategoryWithProgress, GoalProgress,
    UpdateGoalCategoryDto,
};

const GOAL_COLUMNS: &str = "id, user_id, name, description, required_count, criteria_json, \
     sort_order, created_at, updated_at";

pub struct GoalService;

impl GoalService {
    /// Validated-route counts per category for one user.
    async fn validated_counts(db: &PgPool, user_id: Uuid) -> Result<HashMap<Uuid, i64>, AppError> {
        let rows = sqlx::query_as::<_, (Uuid, i64)>(
            "SELECT goal_category_id, COUNT(*) FROM routes \
             WHERE user_id = $1 AND validated_for_de = TRUE AND goal_category_id IS NOT NULL \
             GROUP BY goal_category_id",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to count validated routes")
        .map_err(AppError::database)?;

        Ok(rows.into_iter().collect())
    }

    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<GoalCategoryWithProgress>, AppError> {
        let categories = sqlx::query_as::<_, GoalCategory>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goal_categories WHERE user_id = $1 ORDER BY sort_order"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to list goal categories")
        .map_err(AppError::database)?;

        let counts = Self::validated_counts(db, user_id).await?;

        Ok(categories
            .into_iter()
            .map(|category| {
                let completed = counts.get(&category.id).copied().unwrap_or(0);
                let progress = GoalProgress::compute(completed, category.required_count);
                GoalCategoryWithProgress { category, progress }
            })
            .collect())
    }

    pub async fn get(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<GoalCategoryWithProgress, AppError> {
        let category = sqlx::query_as::<_, GoalCategory>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goal_categories WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch goal category")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Goal category not found")))?;

        let completed = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM routes \
             WHERE user_id = $1 AND goal_category_id = $2 AND validated_for_de = TRUE",
        )
        .bind(user_id)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to count validated routes for category")
        .map_err(AppError::database)?;

        let progress = GoalProgress::compute(completed, category.required_count);
        Ok(GoalCategoryWithProgress { category, progress })
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateGoalCategoryDto,
    ) -> Result<GoalCategory, AppError> {
        sqlx::query_as::<_, GoalCategory>(&format!(
            "INSERT INTO goal_categories \
                 (user_id, name, description, required_count, criteria_json, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {GOAL_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.required_count)
        .bind(to_json_string(&dto.criteria))
        .bind(dto.sort_order.unwrap_or(1))
        .fetch_one(db)
        .await
        .context("Failed to insert goal category")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdateGoalCategoryDto,
    ) -> Result<GoalCategory, AppError> {
        let criteria_json = dto.criteria.as_ref().map(to_json_string);

        sqlx::query_as::<_, GoalCategory>(&format!(
            "UPDATE goal_categories SET \
                 name = COALESCE($3, name), \
                 description = COALESCE($4, description), \
                 required_count = COALESCE($5, required_count), \
                 criteria_json = COALESCE($6, criteria_json), \
                 sort_order = COALESCE($7, sort_order), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {GOAL_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.required_count)
        .bind(&criteria_json)
        .bind(dto.sort_order)
        .fetch_optional(db)
        .await
        .context("Failed to update goal category")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Goal category not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM goal_categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete goal category")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Goal category not found"
            )));
        }

        Ok(())
    }
}
