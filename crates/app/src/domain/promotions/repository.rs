//! Promotions Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    promotions::{
        data::NewPromotion,
        records::{PromotionRecord, PromotionUuid},
    },
    users::records::UserUuid,
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const LIST_ACTIVE_PROMOTIONS_SQL: &str = include_str!("sql/list_active_promotions.sql");
const GET_PROMOTION_SQL: &str = include_str!("sql/get_promotion.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

#[automock]
#[async_trait]
pub trait PromotionsRepository: Send + Sync {
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error>;

    /// Active promotions, newest first.
    async fn list_active_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error>;

    async fn get_promotion(&self, promotion: PromotionUuid)
    -> Result<PromotionRecord, sqlx::Error>;

    async fn create_promotion(
        &self,
        uuid: PromotionUuid,
        created_by: UserUuid,
        promotion: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error>;

    async fn update_promotion(
        &self,
        uuid: PromotionUuid,
        promotion: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_promotion(&self, promotion: PromotionUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgPromotionsRepository {
    pool: PgPool,
}

impl PgPromotionsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionsRepository for PgPromotionsRepository {
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_active_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_ACTIVE_PROMOTIONS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(GET_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn create_promotion(
        &self,
        uuid: PromotionUuid,
        created_by: UserUuid,
        promotion: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(uuid.into_uuid())
            .bind(&promotion.title)
            .bind(&promotion.message)
            .bind(&promotion.image_url)
            .bind(promotion.is_active)
            .bind(created_by.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn update_promotion(
        &self,
        uuid: PromotionUuid,
        promotion: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(UPDATE_PROMOTION_SQL)
            .bind(uuid.into_uuid())
            .bind(&promotion.title)
            .bind(&promotion.message)
            .bind(&promotion.image_url)
            .bind(promotion.is_active)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_promotion(&self, promotion: PromotionUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PromotionUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            message: row.try_get("message")?,
            image_url: row.try_get("image_url")?,
            is_active: row.try_get("is_active")?,
            created_by: UserUuid::from_uuid(row.try_get("created_by")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
