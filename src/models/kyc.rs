use serde::{Deserialize, Serialize};
use tracing::warn;

/// Verification status of a customer's KYC record.
///
/// Anything the server sends that is not one of the four known strings is
/// treated as `NotSubmitted`, so a malformed status can never unlock rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

/// Display language for customer-facing labels. Vietnamese is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl KycStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "not_submitted" => KycStatus::NotSubmitted,
            "pending" => KycStatus::Pending,
            "approved" => KycStatus::Approved,
            "rejected" => KycStatus::Rejected,
            other => {
                warn!("unrecognized kyc status '{}', treating as not_submitted", other);
                KycStatus::NotSubmitted
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "not_submitted",
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }

    /// Localized label shown next to the verification badge.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (KycStatus::NotSubmitted, Language::Vi) => "Chưa cập nhật",
            (KycStatus::NotSubmitted, Language::En) => "Not Submitted",
            (KycStatus::Pending, Language::Vi) => "Đang chờ duyệt",
            (KycStatus::Pending, Language::En) => "Pending",
            (KycStatus::Approved, Language::Vi) => "Đã duyệt",
            (KycStatus::Approved, Language::En) => "Approved",
            (KycStatus::Rejected, Language::Vi) => "Bị từ chối",
            (KycStatus::Rejected, Language::En) => "Rejected",
        }
    }

    /// Style token for the status badge, one fixed token per status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "badge-secondary",
            KycStatus::Pending => "badge-warning",
            KycStatus::Approved => "badge-success",
            KycStatus::Rejected => "badge-danger",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Driver's-license document data in the canonical downstream form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub front_image: Option<String>,
    #[serde(default)]
    pub back_image: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub expiry_text: Option<String>,
    #[serde(default)]
    pub class_list: Option<String>,
    #[serde(default)]
    pub front_uploaded: bool,
    #[serde(default)]
    pub back_uploaded: bool,
    #[serde(default)]
    pub uploaded: bool,
}

/// Identity-card document data in the canonical downstream form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub front_image: Option<String>,
    #[serde(default)]
    pub back_image: Option<String>,
    #[serde(default)]
    pub front_uploaded: bool,
    #[serde(default)]
    pub back_uploaded: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Newer nested response shape, discriminated by the `kycStatus` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalKyc {
    pub kyc_status: String,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
    #[serde(default)]
    pub identity: Option<IdentityInfo>,
}

/// Older flat response shape, discriminated by `status` plus `_id`.
///
/// The serde renames on this struct are the legacy-to-canonical field map;
/// `license_info`/`identity_info` are its only consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyKyc {
    pub status: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub license_image: Option<String>,
    #[serde(default)]
    pub license_back_image: Option<String>,
    #[serde(default)]
    pub license_expiry: Option<String>,
    #[serde(default)]
    pub license_expiry_text: Option<String>,
    #[serde(default)]
    pub license_class_list: Option<String>,
    #[serde(default)]
    pub license_front_uploaded: bool,
    #[serde(default)]
    pub license_back_uploaded: bool,
    #[serde(default)]
    pub license_uploaded: bool,
    #[serde(default)]
    pub identity_card: Option<String>,
    #[serde(default)]
    pub identity_card_front_image: Option<String>,
    #[serde(default)]
    pub identity_card_back_image: Option<String>,
    #[serde(default)]
    pub identity_card_front_uploaded: bool,
    #[serde(default)]
    pub identity_card_back_uploaded: bool,
    #[serde(default)]
    pub identity_name: Option<String>,
    #[serde(default)]
    pub identity_dob: Option<String>,
    #[serde(default)]
    pub identity_address: Option<String>,
}

impl LegacyKyc {
    /// Remaps the flat license fields into `LicenseInfo`.
    /// Returns `None` when the record carries no usable license field.
    pub fn license_info(&self) -> Option<LicenseInfo> {
        let has_any = self.license_number.is_some()
            || self.license_image.is_some()
            || self.license_back_image.is_some()
            || self.license_expiry.is_some()
            || self.license_class_list.is_some()
            || self.license_front_uploaded
            || self.license_back_uploaded
            || self.license_uploaded;
        if !has_any {
            return None;
        }
        Some(LicenseInfo {
            id: self.license_number.clone(),
            front_image: self.license_image.clone(),
            back_image: self.license_back_image.clone(),
            expiry: self.license_expiry.clone(),
            expiry_text: self.license_expiry_text.clone(),
            class_list: self.license_class_list.clone(),
            front_uploaded: self.license_front_uploaded,
            back_uploaded: self.license_back_uploaded,
            uploaded: self.license_uploaded,
        })
    }

    /// Remaps the flat identity-card fields into `IdentityInfo`.
    pub fn identity_info(&self) -> Option<IdentityInfo> {
        let has_any = self.identity_card.is_some()
            || self.identity_card_front_image.is_some()
            || self.identity_card_back_image.is_some()
            || self.identity_name.is_some()
            || self.identity_dob.is_some()
            || self.identity_address.is_some()
            || self.identity_card_front_uploaded
            || self.identity_card_back_uploaded;
        if !has_any {
            return None;
        }
        Some(IdentityInfo {
            id: self.identity_card.clone(),
            front_image: self.identity_card_front_image.clone(),
            back_image: self.identity_card_back_image.clone(),
            front_uploaded: self.identity_card_front_uploaded,
            back_uploaded: self.identity_card_back_uploaded,
            name: self.identity_name.clone(),
            dob: self.identity_dob.clone(),
            address: self.identity_address.clone(),
        })
    }
}

/// A KYC record as returned by the status-check endpoint, either shape.
///
/// Variant order matters: a record carrying both discriminators resolves as
/// canonical, matching the precedence the status endpoint has always had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KycRecord {
    Canonical(CanonicalKyc),
    Legacy(LegacyKyc),
}

impl KycRecord {
    pub fn status(&self) -> KycStatus {
        match self {
            KycRecord::Canonical(c) => KycStatus::parse(&c.kyc_status),
            KycRecord::Legacy(l) => KycStatus::parse(&l.status),
        }
    }

    pub fn license(&self) -> Option<LicenseInfo> {
        match self {
            KycRecord::Canonical(c) => c.license.clone(),
            KycRecord::Legacy(l) => l.license_info(),
        }
    }

    pub fn identity(&self) -> Option<IdentityInfo> {
        match self {
            KycRecord::Canonical(c) => c.identity.clone(),
            KycRecord::Legacy(l) => l.identity_info(),
        }
    }
}
