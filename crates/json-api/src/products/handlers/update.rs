//! Update Product Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use rentals_app::domain::products::data::ProductUpdate;

use crate::{
    dates::parse_optional_date,
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Omitted fields keep their current value. `sale_price` and `available_date`
/// may be sent as `null` to clear them.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub on_sale: Option<bool>,

    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<u64>))]
    pub sale_price: Option<Option<u64>>,

    pub image_url: Option<String>,
    pub available: Option<bool>,

    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub available_date: Option<Option<String>>,
}

/// Distinguishes an explicit `null` from an omitted field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateProductRequest {
    fn into_update(self) -> Result<ProductUpdate, StatusError> {
        let available_date: Option<Option<Date>> = match self.available_date {
            Some(value) => Some(parse_optional_date(value.as_deref())?),
            None => None,
        };

        Ok(ProductUpdate {
            name: self.name,
            description: self.description,
            price: self.price,
            on_sale: self.on_sale,
            sale_price: self.sale_price,
            image_url: self.image_url,
            available: self.available,
            available_date,
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let product = product.into_inner();
    let update = json.into_inner().into_update()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(identity.user));
    span.record("product_uuid", tracing::field::display(product));

    let updated = state
        .app
        .products
        .update_product(identity, product.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}
