//! Display lookups shared by carts and bookings.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::{
    products::{
        ProductsRepository,
        records::{ProductRecord, ProductSummary, ProductUuid},
    },
    users::{
        UsersRepository,
        records::{UserContact, UserUuid},
    },
};

/// Products and owners referenced by a batch of carts or bookings.
#[derive(Debug, Default)]
pub(crate) struct Lookup {
    products: FxHashMap<ProductUuid, ProductRecord>,
    contacts: FxHashMap<UserUuid, UserContact>,
}

impl Lookup {
    /// Fetch each distinct product and owner once.
    pub(crate) async fn load(
        products: &dyn ProductsRepository,
        users: &dyn UsersRepository,
        product_uuids: &[ProductUuid],
        user_uuids: &[UserUuid],
    ) -> Result<Self, sqlx::Error> {
        let product_uuids: Vec<ProductUuid> = product_uuids
            .iter()
            .copied()
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();

        let user_uuids: Vec<UserUuid> = user_uuids
            .iter()
            .copied()
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();

        let mut lookup = Self::default();

        if !product_uuids.is_empty() {
            lookup.products = products
                .get_products(&product_uuids)
                .await?
                .into_iter()
                .map(|product| (product.uuid, product))
                .collect();
        }

        if !user_uuids.is_empty() {
            lookup.contacts = users
                .get_users(&user_uuids)
                .await?
                .into_iter()
                .map(|user| (user.uuid, user.contact()))
                .collect();
        }

        Ok(lookup)
    }

    pub(crate) fn product(&self, product: ProductUuid) -> Option<&ProductRecord> {
        self.products.get(&product)
    }

    pub(crate) fn summary(&self, product: ProductUuid) -> Option<ProductSummary> {
        self.product(product).map(ProductRecord::summary)
    }

    pub(crate) fn contact(&self, user: UserUuid) -> Option<UserContact> {
        self.contacts.get(&user).cloned()
    }
}
