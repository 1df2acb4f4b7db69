//! User Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::users::records::{DeliveryAddress, UserRecord};

/// Postal address used for deliveries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressBody {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl From<AddressBody> for DeliveryAddress {
    fn from(address: AddressBody) -> Self {
        DeliveryAddress {
            street_address: address.street_address,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
        }
    }
}

impl From<DeliveryAddress> for AddressBody {
    fn from(address: DeliveryAddress) -> Self {
        Self {
            street_address: address.street_address,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
        }
    }
}

/// User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,

    /// `admin` or `user`
    pub role: String,

    pub address: AddressBody,
    pub phone_number: String,
    pub deletion_requested: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            address: user.delivery_address.into(),
            phone_number: user.phone_number,
            deletion_requested: user.deletion_requested,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}
