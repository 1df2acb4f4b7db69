//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, civil::Date};
use mockall::automock;
use tracing::{debug, info, warn};

use crate::{
    auth::Identity,
    domain::{
        carts::{
            data::{AddCartItem, CartDetailsUpdate, NewCart},
            errors::CartsServiceError,
            models::{Cart, CartRemoval},
            records::{CART_TTL, CartLine, CartRecord, CartUuid, snapshot_total},
            repository::CartsRepository,
        },
        lookup::Lookup,
        products::{ProductsRepository, records::ProductUuid},
        users::{UsersRepository, records::UserUuid},
    },
};

#[derive(Clone)]
pub struct CartsManager {
    carts: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsRepository>,
    users: Arc<dyn UsersRepository>,
}

impl CartsManager {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsRepository>,
        products: Arc<dyn ProductsRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            carts,
            products,
            users,
        }
    }

    async fn lookup(&self, records: &[CartRecord]) -> Result<Lookup, sqlx::Error> {
        let product_uuids: Vec<ProductUuid> = records
            .iter()
            .flat_map(|record| record.lines.iter().map(|line| line.product_uuid))
            .collect();
        let user_uuids: Vec<UserUuid> = records.iter().map(|record| record.user_uuid).collect();

        Lookup::load(
            self.products.as_ref(),
            self.users.as_ref(),
            &product_uuids,
            &user_uuids,
        )
        .await
    }

    async fn resolve(&self, record: CartRecord) -> Result<Cart, CartsServiceError> {
        let lookup = self.lookup(std::slice::from_ref(&record)).await?;

        Ok(Cart::resolve(record, &lookup))
    }

    async fn active_cart(&self, user: Identity) -> Result<CartRecord, CartsServiceError> {
        self.carts
            .find_cart_for_user(user.user, Timestamp::now())
            .await?
            .ok_or(CartsServiceError::NotFound)
    }

    /// Recompute the total from current catalog prices, then persist and resolve the cart.
    async fn reprice_and_save(&self, mut cart: CartRecord) -> Result<Cart, CartsServiceError> {
        let lookup = self.lookup(std::slice::from_ref(&cart)).await?;

        cart.total_price = live_total(&cart, &lookup);

        let saved = self.carts.save_cart(&cart).await?;

        Ok(Cart::resolve(saved, &lookup))
    }
}

/// Sum of live effective price times quantity. Lines whose product is gone keep their snapshot.
fn live_total(cart: &CartRecord, lookup: &Lookup) -> u64 {
    cart.lines.iter().fold(0_u64, |total, line| {
        let unit_price = match lookup.product(line.product_uuid) {
            Some(product) => product.effective_price(),
            None => {
                warn!(
                    cart_uuid = %cart.uuid,
                    product_uuid = %line.product_uuid,
                    "product missing while repricing cart, using captured price"
                );

                line.price
            }
        };

        total.saturating_add(line.subtotal(unit_price))
    })
}

fn new_cart(user: Identity, rental_date: Date, lines: &[CartLine]) -> NewCart {
    NewCart {
        uuid: CartUuid::new(),
        user_uuid: user.user,
        lines: lines.iter().copied().collect(),
        rental_date,
        total_price: snapshot_total(lines),
        expires_at: Timestamp::now() + CART_TTL,
    }
}

#[async_trait]
impl CartsService for CartsManager {
    async fn open_cart(
        &self,
        identity: Identity,
        rental_date: Option<Date>,
    ) -> Result<Cart, CartsServiceError> {
        if let Some(existing) = self
            .carts
            .find_cart_for_user(identity.user, Timestamp::now())
            .await?
        {
            return self.resolve(existing).await;
        }

        let rental_date = rental_date.ok_or(CartsServiceError::MissingRequiredData)?;

        let created = self
            .carts
            .create_cart(&new_cart(identity, rental_date, &[]))
            .await?;

        info!(cart_uuid = %created.uuid, user_uuid = %identity.user, "opened cart");

        self.resolve(created).await
    }

    async fn add_item(
        &self,
        identity: Identity,
        item: AddCartItem,
    ) -> Result<Cart, CartsServiceError> {
        let (Some(product_uuid), Some(quantity), Some(rental_date)) =
            (item.product, item.quantity, item.rental_date)
        else {
            return Err(CartsServiceError::MissingRequiredData);
        };

        if quantity == 0 {
            return Err(CartsServiceError::InvalidData);
        }

        let product = match self.products.get_product(product_uuid).await {
            Ok(product) => product,
            Err(sqlx::Error::RowNotFound) => return Err(CartsServiceError::ProductNotFound),
            Err(error) => return Err(error.into()),
        };

        let Some(mut cart) = self
            .carts
            .find_cart_for_user(identity.user, Timestamp::now())
            .await?
        else {
            let line = CartLine {
                product_uuid,
                quantity,
                price: product.effective_price(),
            };

            let created = self
                .carts
                .create_cart(&new_cart(identity, rental_date, &[line]))
                .await?;

            info!(cart_uuid = %created.uuid, user_uuid = %identity.user, "opened cart on first add");

            return self.resolve(created).await;
        };

        if cart.rental_date != rental_date {
            debug!(
                cart_uuid = %cart.uuid,
                cart_date = %cart.rental_date,
                requested_date = %rental_date,
                "rejected item for a different rental date"
            );

            return Err(CartsServiceError::RentalDateConflict);
        }

        let added = match cart.line_mut(product_uuid) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartsServiceError::InvalidData)?;

                line.price.saturating_mul(u64::from(quantity))
            }
            None => {
                let line = CartLine {
                    product_uuid,
                    quantity,
                    price: product.effective_price(),
                };
                let added = line.subtotal(product.effective_price());

                cart.lines.push(line);

                added
            }
        };

        // Earlier live repricing stays in the total; only the new units are added.
        cart.total_price = cart
            .total_price
            .checked_add(added)
            .ok_or(CartsServiceError::InvalidData)?;

        let saved = self.carts.save_cart(&cart).await?;

        self.resolve(saved).await
    }

    async fn update_item(
        &self,
        identity: Identity,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.active_cart(identity).await?;

        if quantity <= 0 {
            if !cart.remove_line(product) {
                return Err(CartsServiceError::NotFound);
            }
        } else {
            let quantity = u32::try_from(quantity).map_err(|_| CartsServiceError::InvalidData)?;

            let line = cart
                .line_mut(product)
                .ok_or(CartsServiceError::NotFound)?;

            line.quantity = quantity;
        }

        self.reprice_and_save(cart).await
    }

    async fn remove_item(
        &self,
        identity: Identity,
        product: ProductUuid,
    ) -> Result<CartRemoval, CartsServiceError> {
        let mut cart = self.active_cart(identity).await?;

        if !cart.remove_line(product) {
            return Err(CartsServiceError::NotFound);
        }

        if cart.lines.is_empty() {
            self.carts.delete_cart(cart.uuid).await?;

            info!(cart_uuid = %cart.uuid, "deleted emptied cart");

            return Ok(CartRemoval::Deleted);
        }

        Ok(CartRemoval::Updated(self.reprice_and_save(cart).await?))
    }

    async fn get_cart(&self, identity: Identity) -> Result<Cart, CartsServiceError> {
        let cart = self.active_cart(identity).await?;

        self.resolve(cart).await
    }

    async fn get_cart_by_id(
        &self,
        identity: Identity,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError> {
        let cart = self.carts.get_cart(cart, Timestamp::now()).await?;

        if !identity.can_access(cart.user_uuid) {
            return Err(CartsServiceError::Forbidden);
        }

        self.resolve(cart).await
    }

    async fn list_carts(&self, identity: Identity) -> Result<Vec<Cart>, CartsServiceError> {
        if !identity.is_admin {
            return Err(CartsServiceError::Forbidden);
        }

        let records = self.carts.list_carts(Timestamp::now()).await?;
        let lookup = self.lookup(&records).await?;

        Ok(records
            .into_iter()
            .map(|record| Cart::resolve(record, &lookup))
            .collect())
    }

    async fn update_details(
        &self,
        identity: Identity,
        details: CartDetailsUpdate,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.active_cart(identity).await?;

        if let Some(delivery_address) = details.delivery_address {
            cart.delivery_address = Some(delivery_address);
        }

        if let Some(event_notes) = details.event_notes {
            cart.event_notes = Some(event_notes);
        }

        if let Some(status) = details.status {
            cart.status = status;
        }

        let saved = self.carts.save_cart(&cart).await?;

        self.resolve(saved).await
    }

    async fn delete_cart(&self, identity: Identity, cart: CartUuid) -> Result<(), CartsServiceError> {
        let record = self.carts.get_cart(cart, Timestamp::now()).await?;

        if !identity.can_access(record.user_uuid) {
            return Err(CartsServiceError::Forbidden);
        }

        if self.carts.delete_cart(cart).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        info!(cart_uuid = %cart, "deleted cart");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Return the caller's active cart, or open an empty one for `rental_date`.
    ///
    /// An existing cart is returned unchanged and `rental_date` is ignored.
    async fn open_cart(
        &self,
        identity: Identity,
        rental_date: Option<Date>,
    ) -> Result<Cart, CartsServiceError>;

    /// Add a product to the caller's cart, opening one if needed.
    ///
    /// Repeat adds bump the quantity and keep the price captured by the first add.
    async fn add_item(&self, identity: Identity, item: AddCartItem)
    -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity; zero or less drops the line but keeps the cart.
    async fn update_item(
        &self,
        identity: Identity,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Drop a line; dropping the last one deletes the cart.
    async fn remove_item(
        &self,
        identity: Identity,
        product: ProductUuid,
    ) -> Result<CartRemoval, CartsServiceError>;

    async fn get_cart(&self, identity: Identity) -> Result<Cart, CartsServiceError>;

    async fn get_cart_by_id(
        &self,
        identity: Identity,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Every live cart, admin only.
    async fn list_carts(&self, identity: Identity) -> Result<Vec<Cart>, CartsServiceError>;

    async fn update_details(
        &self,
        identity: Identity,
        details: CartDetailsUpdate,
    ) -> Result<Cart, CartsServiceError>;

    async fn delete_cart(&self, identity: Identity, cart: CartUuid) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, civil::date};
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::records::{CartLines, CartStatus},
            products::{ProductsService, data::ProductUpdate},
        },
        test::{
            TestContext,
            helpers::{add_item, create_product, rental_date},
        },
    };

    use super::*;

    #[tokio::test]
    async fn adding_same_product_twice_merges_line_at_first_price() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 2, rental_date()).await?;

        ctx.products
            .update_product(
                ctx.admin,
                tent.uuid,
                ProductUpdate {
                    price: Some(5_000),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        let cart = add_item(&ctx, ctx.customer, tent.uuid, 3, rental_date()).await?;

        assert_eq!(cart.items.len(), 1, "one line per product");
        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.items[0].price, 1_000, "captured price survives repricing");
        assert_eq!(cart.total_price, 5_000);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_uses_sale_price_when_on_sale() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        ctx.products
            .update_product(
                ctx.admin,
                tent.uuid,
                ProductUpdate {
                    on_sale: Some(true),
                    sale_price: Some(Some(800)),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        let cart = add_item(&ctx, ctx.customer, tent.uuid, 2, rental_date()).await?;

        assert_eq!(cart.items[0].price, 800);
        assert_eq!(cart.total_price, 1_600);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_for_other_rental_date_conflicts_and_leaves_cart_alone() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;
        let chairs = create_product(&ctx, "Chairs", 200).await?;

        let before = add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let result = add_item(&ctx, ctx.customer, chairs.uuid, 4, date(2027, 1, 2)).await;

        assert!(
            matches!(result, Err(CartsServiceError::RentalDateConflict)),
            "expected RentalDateConflict, got {result:?}"
        );

        let after = ctx.carts.get_cart(ctx.customer).await?;

        assert_eq!(after, before, "a conflicting add must not touch the cart");

        Ok(())
    }

    #[tokio::test]
    async fn add_item_requires_every_field() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        let incomplete = [
            AddCartItem {
                product: None,
                quantity: Some(1),
                rental_date: Some(rental_date()),
            },
            AddCartItem {
                product: Some(tent.uuid),
                quantity: None,
                rental_date: Some(rental_date()),
            },
            AddCartItem {
                product: Some(tent.uuid),
                quantity: Some(1),
                rental_date: None,
            },
        ];

        for item in incomplete {
            let result = ctx.carts.add_item(ctx.customer, item.clone()).await;

            assert!(
                matches!(result, Err(CartsServiceError::MissingRequiredData)),
                "expected MissingRequiredData for {item:?}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn add_item_rejects_zero_quantity() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        let result = add_item(&ctx, ctx.customer, tent.uuid, 0, rental_date()).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_product_is_product_not_found() {
        let ctx = TestContext::new();

        let result = add_item(&ctx, ctx.customer, ProductUuid::new(), 1, rental_date()).await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn open_cart_returns_existing_cart_and_ignores_date() -> TestResult {
        let ctx = TestContext::new();

        let opened = ctx.carts.open_cart(ctx.customer, Some(rental_date())).await?;

        assert!(opened.items.is_empty());
        assert_eq!(opened.total_price, 0);
        assert_eq!(opened.status, CartStatus::Active);
        assert!(opened.expires_at > opened.created_at);
        assert!(opened.expires_at <= opened.created_at + CART_TTL);

        let again = ctx
            .carts
            .open_cart(ctx.customer, Some(date(2027, 6, 1)))
            .await?;

        assert_eq!(again.uuid, opened.uuid);
        assert_eq!(again.rental_date, rental_date());

        Ok(())
    }

    #[tokio::test]
    async fn open_cart_without_date_needs_existing_cart() {
        let ctx = TestContext::new();

        let result = ctx.carts.open_cart(ctx.customer, None).await;

        assert!(
            matches!(result, Err(CartsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn removing_last_item_deletes_cart() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let removal = ctx.carts.remove_item(ctx.customer, tent.uuid).await?;

        assert_eq!(removal, CartRemoval::Deleted);

        let result = ctx.carts.get_cart(ctx.customer).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn removing_one_of_several_items_reprices_live() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;
        let chairs = create_product(&ctx, "Chairs", 200).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;
        add_item(&ctx, ctx.customer, chairs.uuid, 5, rental_date()).await?;

        ctx.products
            .update_product(
                ctx.admin,
                chairs.uuid,
                ProductUpdate {
                    price: Some(300),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        let CartRemoval::Updated(cart) = ctx.carts.remove_item(ctx.customer, tent.uuid).await?
        else {
            panic!("cart with remaining lines should survive");
        };

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, 1_500, "total follows the live price");
        assert_eq!(cart.items[0].price, 200, "line keeps its captured price");

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_missing_line_is_not_found() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        let no_cart = ctx.carts.remove_item(ctx.customer, tent.uuid).await;

        assert!(
            matches!(no_cart, Err(CartsServiceError::NotFound)),
            "expected NotFound without a cart, got {no_cart:?}"
        );

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let no_line = ctx.carts.remove_item(ctx.customer, ProductUuid::new()).await;

        assert!(
            matches!(no_line, Err(CartsServiceError::NotFound)),
            "expected NotFound without a line, got {no_line:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_item_to_zero_keeps_empty_cart() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        let cart = add_item(&ctx, ctx.customer, tent.uuid, 2, rental_date()).await?;

        let updated = ctx.carts.update_item(ctx.customer, tent.uuid, 0).await?;

        assert!(updated.items.is_empty());
        assert_eq!(updated.total_price, 0);

        let fetched = ctx.carts.get_cart_by_id(ctx.customer, cart.uuid).await?;

        assert_eq!(fetched.uuid, cart.uuid, "emptied cart stays retrievable");

        Ok(())
    }

    #[tokio::test]
    async fn update_item_reprices_from_live_catalog() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        ctx.products
            .update_product(
                ctx.admin,
                tent.uuid,
                ProductUpdate {
                    price: Some(1_200),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        let cart = ctx.carts.update_item(ctx.customer, tent.uuid, 3).await?;

        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[0].price, 1_000);
        assert_eq!(cart.total_price, 3_600);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_after_live_repricing_adds_to_existing_total() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;
        let chairs = create_product(&ctx, "Folding Chairs", 200).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        ctx.products
            .update_product(
                ctx.admin,
                tent.uuid,
                ProductUpdate {
                    price: Some(1_200),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        let repriced = ctx.carts.update_item(ctx.customer, tent.uuid, 1).await?;

        assert_eq!(repriced.total_price, 1_200);

        let cart = add_item(&ctx, ctx.customer, chairs.uuid, 1, rental_date()).await?;

        assert_eq!(cart.total_price, 1_400, "prior total plus the new line");

        let cart = add_item(&ctx, ctx.customer, chairs.uuid, 2, rental_date()).await?;

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total_price, 1_800, "merged units add at the captured price");

        Ok(())
    }

    #[tokio::test]
    async fn update_item_falls_back_to_captured_price_for_deleted_product() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;
        let chairs = create_product(&ctx, "Chairs", 200).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;
        add_item(&ctx, ctx.customer, chairs.uuid, 1, rental_date()).await?;

        ctx.products.delete_product(ctx.admin, tent.uuid).await?;

        let cart = ctx.carts.update_item(ctx.customer, chairs.uuid, 2).await?;

        assert_eq!(cart.total_price, 1_400);
        assert!(cart.items[0].product.is_none(), "deleted product has no summary");

        Ok(())
    }

    #[tokio::test]
    async fn update_item_unknown_line_is_not_found() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let result = ctx.carts.update_item(ctx.customer, ProductUuid::new(), 4).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolved_cart_carries_product_and_owner_details() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        let cart = add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let summary = cart.items[0].product.as_ref().ok_or("missing product summary")?;
        let owner = cart.owner.as_ref().ok_or("missing owner contact")?;

        assert_eq!(summary.name, "Party Tent");
        assert_eq!(summary.price, 1_000);
        assert_eq!(owner.first_name, "Casey");

        Ok(())
    }

    #[tokio::test]
    async fn list_carts_requires_admin() -> TestResult {
        let ctx = TestContext::new();
        let tent = create_product(&ctx, "Party Tent", 1_000).await?;

        add_item(&ctx, ctx.customer, tent.uuid, 1, rental_date()).await?;

        let result = ctx.carts.list_carts(ctx.customer).await;

        assert!(
            matches!(result, Err(CartsServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        let carts = ctx.carts.list_carts(ctx.admin).await?;

        assert_eq!(carts.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn get_cart_by_id_is_owner_or_admin_only() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx.carts.open_cart(ctx.admin, Some(rental_date())).await?;

        let result = ctx.carts.get_cart_by_id(ctx.customer, cart.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        let own = ctx.carts.open_cart(ctx.customer, Some(rental_date())).await?;
        let fetched = ctx.carts.get_cart_by_id(ctx.admin, own.uuid).await?;

        assert_eq!(fetched.user_uuid, ctx.customer.user);

        Ok(())
    }

    #[tokio::test]
    async fn expired_cart_is_not_found() -> TestResult {
        let ctx = TestContext::new();
        let created_at = Timestamp::now() - SignedDuration::from_mins(20);

        let expired = CartRecord {
            uuid: CartUuid::new(),
            user_uuid: ctx.customer.user,
            lines: CartLines::new(),
            rental_date: rental_date(),
            total_price: 0,
            delivery_address: None,
            event_notes: None,
            status: CartStatus::Active,
            expires_at: created_at + CART_TTL,
            created_at,
            updated_at: created_at,
        };

        ctx.store.insert_cart(expired.clone());

        let mine = ctx.carts.get_cart(ctx.customer).await;

        assert!(
            matches!(mine, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {mine:?}"
        );

        let by_id = ctx.carts.get_cart_by_id(ctx.admin, expired.uuid).await;

        assert!(
            matches!(by_id, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {by_id:?}"
        );

        let reopened = ctx.carts.open_cart(ctx.customer, Some(rental_date())).await?;

        assert_ne!(reopened.uuid, expired.uuid, "an expired cart is never reused");

        Ok(())
    }

    #[tokio::test]
    async fn delete_cart_removes_it() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx.carts.open_cart(ctx.customer, Some(rental_date())).await?;

        ctx.carts.delete_cart(ctx.customer, cart.uuid).await?;

        let result = ctx.carts.delete_cart(ctx.customer, cart.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_details_sets_checkout_fields() -> TestResult {
        let ctx = TestContext::new();

        ctx.carts.open_cart(ctx.customer, Some(rental_date())).await?;

        let cart = ctx
            .carts
            .update_details(
                ctx.customer,
                CartDetailsUpdate {
                    delivery_address: Some("12 Elm Street".to_string()),
                    event_notes: Some("Back gate".to_string()),
                    status: Some(CartStatus::Pending),
                },
            )
            .await?;

        assert_eq!(cart.delivery_address.as_deref(), Some("12 Elm Street"));
        assert_eq!(cart.event_notes.as_deref(), Some("Back gate"));
        assert_eq!(cart.status, CartStatus::Pending);

        Ok(())
    }
}
