//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::products::data::NewProduct;

use crate::{
    dates::parse_optional_date,
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: u64,

    #[serde(default)]
    pub on_sale: bool,

    pub sale_price: Option<u64>,
    pub image_url: String,

    #[serde(default = "available_by_default")]
    pub available: bool,

    /// `YYYY-MM-DD`, within the next 120 days
    pub available_date: Option<String>,
}

const fn available_by_default() -> bool {
    true
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, StatusError> {
        Ok(NewProduct {
            available_date: parse_optional_date(self.available_date.as_deref())?,
            name: self.name,
            description: self.description,
            price: self.price,
            on_sale: self.on_sale,
            sale_price: self.sale_price,
            image_url: self.image_url,
            available: self.available,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let product = json.into_inner().into_new_product()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(identity.user));

    let product = state
        .app
        .products
        .create_product(identity, product)
        .await
        .map_err(into_status_error)?;

    span.record("product_uuid", tracing::field::display(product.uuid));

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
