use crate::errors::{AppError, Result};
use regex::Regex;

pub struct Validator;

impl Validator {
    pub fn validate_email(email: &str) -> Result<()> {
        let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .map_err(|e| AppError::InternalError(format!("Regex error: {}", e)))?;

        if !email_regex.is_match(email) {
            return Err(AppError::ValidationError("Invalid email format".to_string()));
        }

        if email.len() > 254 {
            return Err(AppError::ValidationError("Email too long".to_string()));
        }

        Ok(())
    }

    /// Vietnamese mobile numbers: local `0xxxxxxxxx` or international `+84xxxxxxxxx`.
    pub fn validate_phone(phone: &str) -> Result<()> {
        let phone = phone.trim();
        let phone_regex = Regex::new(r"^(0|\+84)\d{9}$")
            .map_err(|e| AppError::InternalError(format!("Regex error: {}", e)))?;
        if !phone_regex.is_match(phone) {
            return Err(AppError::ValidationError(
                "Invalid phone number. Use 0 or +84 followed by 9 digits.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_full_name(name: &str) -> Result<()> {
        let name = name.trim();
        if name.len() < 2 {
            return Err(AppError::ValidationError("Full name must be at least 2 characters long".to_string()));
        }
        if name.chars().count() > 100 {
            return Err(AppError::ValidationError("Full name must be less than 100 characters".to_string()));
        }
        if name.chars().any(|c| c.is_numeric()) {
            return Err(AppError::ValidationError("Full name cannot contain digits".to_string()));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<()> {
        if password.len() < 8 {
            return Err(AppError::ValidationError("Password must be at least 8 characters long".to_string()));
        }

        if password.len() > 128 {
            return Err(AppError::ValidationError("Password must be less than 128 characters".to_string()));
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_numeric());

        if !has_uppercase {
            return Err(AppError::ValidationError("Password must contain at least one uppercase letter".to_string()));
        }

        if !has_lowercase {
            return Err(AppError::ValidationError("Password must contain at least one lowercase letter".to_string()));
        }

        if !has_digit {
            return Err(AppError::ValidationError("Password must contain at least one digit".to_string()));
        }

        Ok(())
    }

    /// Driver's-license numbers issued since 2012 are 12 digits.
    pub fn validate_license_number(number: &str) -> Result<()> {
        let number = number.trim();
        let license_regex = Regex::new(r"^\d{12}$")
            .map_err(|e| AppError::InternalError(format!("Regex error: {}", e)))?;
        if !license_regex.is_match(number) {
            return Err(AppError::ValidationError("License number must be exactly 12 digits".to_string()));
        }
        Ok(())
    }

    pub fn validate_rating(rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::ValidationError("Rating must be between 1 and 5".to_string()));
        }
        Ok(())
    }
}
