//! Testimonials Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    testimonials::{
        data::NewTestimonial,
        records::{TestimonialRecord, TestimonialUuid},
    },
    users::records::UserUuid,
};

const LIST_TESTIMONIALS_SQL: &str = include_str!("sql/list_testimonials.sql");
const GET_TESTIMONIAL_SQL: &str = include_str!("sql/get_testimonial.sql");
const CREATE_TESTIMONIAL_SQL: &str = include_str!("sql/create_testimonial.sql");
const UPDATE_TESTIMONIAL_SQL: &str = include_str!("sql/update_testimonial.sql");
const DELETE_TESTIMONIAL_SQL: &str = include_str!("sql/delete_testimonial.sql");

#[automock]
#[async_trait]
pub trait TestimonialsRepository: Send + Sync {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, sqlx::Error>;

    async fn get_testimonial(
        &self,
        testimonial: TestimonialUuid,
    ) -> Result<TestimonialRecord, sqlx::Error>;

    async fn create_testimonial(
        &self,
        uuid: TestimonialUuid,
        user: UserUuid,
        testimonial: &NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error>;

    async fn update_testimonial(
        &self,
        uuid: TestimonialUuid,
        testimonial: &NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_testimonial(&self, testimonial: TestimonialUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgTestimonialsRepository {
    pool: PgPool,
}

impl PgTestimonialsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialsRepository for PgTestimonialsRepository {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(LIST_TESTIMONIALS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_testimonial(
        &self,
        testimonial: TestimonialUuid,
    ) -> Result<TestimonialRecord, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(GET_TESTIMONIAL_SQL)
            .bind(testimonial.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn create_testimonial(
        &self,
        uuid: TestimonialUuid,
        user: UserUuid,
        testimonial: &NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(CREATE_TESTIMONIAL_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(&testimonial.name)
            .bind(&testimonial.review)
            .bind(i16::from(testimonial.rating))
            .fetch_one(&self.pool)
            .await
    }

    async fn update_testimonial(
        &self,
        uuid: TestimonialUuid,
        testimonial: &NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(UPDATE_TESTIMONIAL_SQL)
            .bind(uuid.into_uuid())
            .bind(&testimonial.name)
            .bind(&testimonial.review)
            .bind(i16::from(testimonial.rating))
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_testimonial(&self, testimonial: TestimonialUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_TESTIMONIAL_SQL)
            .bind(testimonial.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for TestimonialRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating = u8::try_from(row.try_get::<i16, _>("rating")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "rating".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: TestimonialUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            name: row.try_get("name")?,
            review: row.try_get("review")?,
            rating,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
