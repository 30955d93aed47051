pub mod kyc_service;
