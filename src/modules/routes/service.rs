use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use super::model::{CreateRouteDto, Route, RouteFilterParams, UpdateRouteDto};

const ROUTE_COLUMNS: &str = "id, user_id, goal_category_id, name, location, grade, type, \
     length_m, pitch_count, date_completed, style, photo_url, comments, rating, \
     validated_for_de, created_at, updated_at";

pub struct RouteService;

impl RouteService {
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        filter: &RouteFilterParams,
    ) -> Result<Vec<Route>, AppError> {
        sqlx::query_as::<_, Route>(&format!(
            "SELECT {ROUTE_COLUMNS} FROM routes \
             WHERE user_id = $1 \
               AND ($2::route_type IS NULL OR type = $2) \
               AND ($3 = FALSE OR validated_for_de = TRUE) \
             ORDER BY date_completed DESC NULLS LAST LIMIT $4 OFFSET $5"
        ))
        .bind(user_id)
        .bind(filter.route_type)
        .bind(filter.validated_only)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to list routes")
        .map_err(AppError::database)
    }

    pub async fn get(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Route, AppError> {
        sqlx::query_as::<_, Route>(&format!(
            "SELECT {ROUTE_COLUMNS} FROM routes WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch route")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Route not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, user_id: Uuid, dto: CreateRouteDto) -> Result<Route, AppError> {
        sqlx::query_as::<_, Route>(&format!(
            "INSERT INTO routes \
                 (user_id, goal_category_id, name, location, grade, type, length_m, \
                  pitch_count, date_completed, style, photo_url, comments, rating, \
                  validated_for_de) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {ROUTE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.goal_category_id)
        .bind(&dto.name)
        .bind(&dto.location)
        .bind(&dto.grade)
        .bind(dto.route_type)
        .bind(dto.length_m)
        .bind(dto.pitch_count)
        .bind(dto.date_completed)
        .bind(&dto.style)
        .bind(&dto.photo_url)
        .bind(&dto.comments)
        .bind(dto.rating)
        .bind(dto.validated_for_de)
        .fetch_one(db)
        .await
        .context("Failed to insert route")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        dto: UpdateRouteDto,
    ) -> Result<Route, AppError> {
        sqlx::query_as::<_, Route>(&format!(
            "UPDATE routes SET \
                 goal_category_id = COALESCE($3, goal_category_id), \
                 name = COALESCE($4, name), \
                 location = COALESCE($5, location), \
                 grade = COALESCE($6, grade), \
                 type = COALESCE($7, type), \
                 length_m = COALESCE($8, length_m), \
                 pitch_count = COALESCE($9, pitch_count), \
                 date_completed = COALESCE($10, date_completed), \
                 style = COALESCE($11, style), \
                 photo_url = COALESCE($12, photo_url), \
                 comments = COALESCE($13, comments), \
                 rating = COALESCE($14, rating), \
                 validated_for_de = COALESCE($15, validated_for_de), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {ROUTE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.goal_category_id)
        .bind(&dto.name)
        .bind(&dto.location)
        .bind(&dto.grade)
        .bind(dto.route_type)
        .bind(dto.length_m)
        .bind(dto.pitch_count)
        .bind(dto.date_completed)
        .bind(&dto.style)
        .bind(&dto.photo_url)
        .bind(&dto.comments)
        .bind(dto.rating)
        .bind(dto.validated_for_de)
        .fetch_optional(db)
        .await
        .context("Failed to update route")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Route not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete route")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Route not found")));
        }

        Ok(())
    }
}
