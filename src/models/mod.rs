pub mod booking;
pub mod chat;
pub mod feedback;
pub mod kyc;
pub mod vehicle;
