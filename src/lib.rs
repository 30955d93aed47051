//! Domain core for the EV rental client.
//!
//! Holds the KYC status resolver that gates vehicle rental, the wire shapes
//! for vehicles, bookings, feedback and chat history, and the form
//! validators shared by the registration and document-upload screens.
//! Fetching is the caller's concern; nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

pub use errors::{AppError, Result};
pub use models::kyc::{
    CanonicalKyc, IdentityInfo, KycRecord, KycStatus, Language, LegacyKyc, LicenseInfo,
};
pub use services::kyc_service::KycResolver;
pub use utils::validation::Validator;
