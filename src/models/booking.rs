use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::InProgress => write!(f, "in_progress"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    DepositPaid,
    Paid,
    Refunded,
}

/// A vehicle booking as returned by the booking endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pickup_station: Option<String>,
    pub total_price: f64,
    pub deposit: f64,
    #[serde(default)]
    pub amount_paid: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn outstanding_amount(&self) -> f64 {
        (self.total_price - self.amount_paid).max(0.0)
    }

    /// A reminder is due for confirmed or in-progress bookings that still
    /// owe money. Cancelled and refunded bookings never remind.
    pub fn needs_payment_reminder(&self) -> bool {
        if self.payment_status == PaymentStatus::Paid
            || self.payment_status == PaymentStatus::Refunded
        {
            return false;
        }
        matches!(
            self.status,
            BookingStatus::Confirmed | BookingStatus::InProgress
        ) && self.outstanding_amount() > 0.0
    }
}

/// Payload for the pending-payment reminder banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPaymentReminder {
    pub booking_id: String,
    pub vehicle_name: String,
    pub amount_due: f64,
    pub due_at: DateTime<Utc>,
}

impl PendingPaymentReminder {
    pub fn from_booking(booking: &Booking, vehicle_name: &str) -> Option<Self> {
        if !booking.needs_payment_reminder() {
            return None;
        }
        Some(Self {
            booking_id: booking.id.clone(),
            vehicle_name: vehicle_name.to_string(),
            amount_due: booking.outstanding_amount(),
            due_at: booking.start_date,
        })
    }
}
