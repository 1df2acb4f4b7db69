//! Booking Data

use jiff::civil::Date;
use uuid::Uuid;

use crate::domain::{
    bookings::{
        BookingsServiceError,
        records::{BookingLine, BookingLines, BookingStatus, BookingUuid},
    },
    products::records::ProductUuid,
    users::records::UserUuid,
};

/// Checkout payload.
///
/// `total_price` is accepted as sent; it is not checked against the lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBooking {
    pub email: Option<String>,
    pub items: Vec<NewBookingLine>,
    pub total_price: Option<u64>,
    pub rental_date: Option<Date>,
    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,
}

/// Checkout line with the product reference in its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingLine {
    pub product: String,
    pub quantity: u32,
    pub price: u64,
}

impl NewBookingLine {
    fn normalize(&self) -> Result<BookingLine, BookingsServiceError> {
        let product_uuid = Uuid::try_parse(self.product.trim())
            .map(ProductUuid::from_uuid)
            .map_err(|_| BookingsServiceError::InvalidData)?;

        if self.quantity == 0 {
            return Err(BookingsServiceError::InvalidData);
        }

        Ok(BookingLine {
            product_uuid,
            quantity: self.quantity,
            price: self.price,
        })
    }
}

/// Row inserted for a new booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingRecord {
    pub uuid: BookingUuid,
    pub user_uuid: UserUuid,
    pub email: String,
    pub lines: BookingLines,
    pub total_price: u64,
    pub rental_date: Date,
    pub delivery_address: String,
    pub event_notes: Option<String>,
    pub status: BookingStatus,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl NewBooking {
    /// Check required fields and normalize lines for `user`.
    ///
    /// A zero total counts as missing.
    pub(crate) fn into_record(
        self,
        user: UserUuid,
    ) -> Result<NewBookingRecord, BookingsServiceError> {
        let (Some(email), Some(total_price), Some(rental_date), Some(delivery_address)) = (
            present(self.email),
            self.total_price.filter(|total| *total > 0),
            self.rental_date,
            present(self.delivery_address),
        ) else {
            return Err(BookingsServiceError::MissingRequiredData);
        };

        if self.items.is_empty() {
            return Err(BookingsServiceError::MissingRequiredData);
        }

        let lines = self
            .items
            .iter()
            .map(NewBookingLine::normalize)
            .collect::<Result<BookingLines, _>>()?;

        Ok(NewBookingRecord {
            uuid: BookingUuid::new(),
            user_uuid: user,
            email,
            lines,
            total_price,
            rental_date,
            delivery_address,
            event_notes: present(self.event_notes),
            status: BookingStatus::Confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn booking() -> NewBooking {
        NewBooking {
            email: Some("casey@example.com".to_string()),
            items: vec![NewBookingLine {
                product: ProductUuid::new().to_string(),
                quantity: 2,
                price: 10,
            }],
            total_price: Some(20),
            rental_date: Some(date(2026, 12, 24)),
            delivery_address: Some("12 Elm Street".to_string()),
            event_notes: None,
        }
    }

    #[test]
    fn into_record_confirms_and_copies_lines() -> Result<(), BookingsServiceError> {
        let user = UserUuid::new();
        let record = booking().into_record(user)?;

        assert_eq!(record.user_uuid, user);
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert_eq!(record.lines.len(), 1);
        assert_eq!(record.lines[0].quantity, 2);

        Ok(())
    }

    #[test]
    fn zero_total_counts_as_missing() {
        let result = NewBooking {
            total_price: Some(0),
            ..booking()
        }
        .into_record(UserUuid::new());

        assert!(matches!(
            result,
            Err(BookingsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn empty_items_count_as_missing() {
        let result = NewBooking {
            items: Vec::new(),
            ..booking()
        }
        .into_record(UserUuid::new());

        assert!(matches!(
            result,
            Err(BookingsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn malformed_product_reference_is_invalid() {
        let result = NewBooking {
            items: vec![NewBookingLine {
                product: "not-a-uuid".to_string(),
                quantity: 1,
                price: 10,
            }],
            ..booking()
        }
        .into_record(UserUuid::new());

        assert!(matches!(result, Err(BookingsServiceError::InvalidData)));
    }

    #[test]
    fn blank_email_counts_as_missing() {
        let result = NewBooking {
            email: Some("   ".to_string()),
            ..booking()
        }
        .into_record(UserUuid::new());

        assert!(matches!(
            result,
            Err(BookingsServiceError::MissingRequiredData)
        ));
    }
}
