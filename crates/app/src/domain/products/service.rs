//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use tracing::info;

use crate::{
    auth::Identity,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::ProductsRepository,
    },
};

#[derive(Clone)]
pub struct ProductsManager {
    repository: Arc<dyn ProductsRepository>,
}

impl ProductsManager {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

fn require_admin(identity: Identity) -> Result<(), ProductsServiceError> {
    if identity.is_admin {
        Ok(())
    } else {
        Err(ProductsServiceError::Forbidden)
    }
}

#[async_trait]
impl ProductsService for ProductsManager {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products().await?)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.get_product(product).await?)
    }

    async fn create_product(
        &self,
        identity: Identity,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        require_admin(identity)?;

        product.validate(Zoned::now().date())?;

        let created = self
            .repository
            .create_product(ProductUuid::new(), &product)
            .await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        identity: Identity,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        require_admin(identity)?;

        let current = self.repository.get_product(product).await?;
        let merged = update.apply_to(&current);

        merged.validate(Zoned::now().date())?;

        Ok(self.repository.update_product(product, &merged).await?)
    }

    async fn delete_product(
        &self,
        identity: Identity,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        require_admin(identity)?;

        let rows_affected = self.repository.delete_product(product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product. Admin only.
    async fn create_product(
        &self,
        identity: Identity,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update to a product. Admin only.
    async fn update_product(
        &self,
        identity: Identity,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given UUID. Admin only.
    async fn delete_product(
        &self,
        identity: Identity,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_product};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_stored_product() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx
            .products
            .create_product(ctx.admin, new_product("Party Tent", 25_000))
            .await?;

        let fetched = ctx.products.get_product(product.uuid).await?;

        assert_eq!(fetched, product);
        assert_eq!(fetched.price, 25_000);
        assert!(fetched.available, "products default to available");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_requires_admin() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .create_product(ctx.customer, new_product("Party Tent", 25_000))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_rejects_sale_price_above_price() {
        let ctx = TestContext::new();

        let product = NewProduct {
            on_sale: true,
            sale_price: Some(30_000),
            ..new_product("Party Tent", 25_000)
        };

        let result = ctx.products.create_product(ctx.admin, product).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_merges_partial_changes() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx
            .products
            .create_product(ctx.admin, new_product("Party Tent", 25_000))
            .await?;

        let updated = ctx
            .products
            .update_product(
                ctx.admin,
                product.uuid,
                ProductUpdate {
                    on_sale: Some(true),
                    sale_price: Some(Some(20_000)),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Party Tent");
        assert_eq!(updated.price, 25_000);
        assert_eq!(updated.effective_price(), 20_000);

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx
            .products
            .create_product(ctx.admin, new_product("Party Tent", 25_000))
            .await?;

        ctx.products.delete_product(ctx.admin, product.uuid).await?;

        let result = ctx.products.delete_product(ctx.admin, product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }
}
