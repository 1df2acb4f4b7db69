//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::products::{
        data::NewProduct,
        records::{ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCTS_SQL: &str = include_str!("sql/get_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Catalog persistence.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, sqlx::Error>;

    /// Fetch every product in `products`; unknown ids are skipped.
    async fn get_products(
        &self,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error>;

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, sqlx::Error>;

    async fn create_product(
        &self,
        uuid: ProductUuid,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error>;

    async fn update_product(
        &self,
        uuid: ProductUuid,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_product(&self, product: ProductUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_products(
        &self,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductRecord>(GET_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn create_product(
        &self,
        uuid: ProductUuid,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(amount_to_i64("price", product.price)?)
            .bind(product.on_sale)
            .bind(
                product
                    .sale_price
                    .map(|sale_price| amount_to_i64("sale_price", sale_price))
                    .transpose()?,
            )
            .bind(&product.image_url)
            .bind(product.available)
            .bind(product.available_date.map(SqlxDate::from))
            .fetch_one(&self.pool)
            .await
    }

    async fn update_product(
        &self,
        uuid: ProductUuid,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(amount_to_i64("price", product.price)?)
            .bind(product.on_sale)
            .bind(
                product
                    .sale_price
                    .map(|sale_price| amount_to_i64("sale_price", sale_price))
                    .transpose()?,
            )
            .bind(&product.image_url)
            .bind(product.available)
            .bind(product.available_date.map(SqlxDate::from))
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let sale_price = row
            .try_get::<Option<i64>, _>("sale_price")?
            .map(u64::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "sale_price".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            on_sale: row.try_get("on_sale")?,
            sale_price,
            image_url: row.try_get("image_url")?,
            available: row.try_get("available")?,
            available_date: row
                .try_get::<Option<SqlxDate>, _>("available_date")?
                .map(SqlxDate::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
