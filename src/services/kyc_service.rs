use crate::models::kyc::{IdentityInfo, KycRecord, KycStatus, Language, LicenseInfo};

/// Business rules derived from a customer's KYC record.
///
/// Every function is total over `Option<&KycRecord>`: a missing record, a
/// partial record, or an unknown status all resolve to the most restrictive
/// state instead of failing. Screens fetch the record fresh on each render
/// and hand it straight in; nothing here caches or mutates it.
pub struct KycResolver;

impl KycResolver {
    pub fn extract_status(record: Option<&KycRecord>) -> KycStatus {
        record.map_or(KycStatus::NotSubmitted, KycRecord::status)
    }

    pub fn is_approved(record: Option<&KycRecord>) -> bool {
        Self::extract_status(record) == KycStatus::Approved
    }

    pub fn is_pending(record: Option<&KycRecord>) -> bool {
        Self::extract_status(record) == KycStatus::Pending
    }

    pub fn is_rejected(record: Option<&KycRecord>) -> bool {
        Self::extract_status(record) == KycStatus::Rejected
    }

    pub fn is_not_submitted(record: Option<&KycRecord>) -> bool {
        Self::extract_status(record) == KycStatus::NotSubmitted
    }

    /// The one authorization gate for booking flows. Callers must consult
    /// this, never the raw status string.
    pub fn can_rent_vehicles(record: Option<&KycRecord>) -> bool {
        Self::is_approved(record)
    }

    /// True when the customer must be prompted to (re-)upload documents.
    pub fn needs_document_submission(record: Option<&KycRecord>) -> bool {
        matches!(
            Self::extract_status(record),
            KycStatus::NotSubmitted | KycStatus::Rejected
        )
    }

    /// License document fields in canonical form, whichever shape arrived.
    pub fn license_data(record: Option<&KycRecord>) -> Option<LicenseInfo> {
        record.and_then(KycRecord::license)
    }

    /// Identity-card fields in canonical form, whichever shape arrived.
    pub fn identity_data(record: Option<&KycRecord>) -> Option<IdentityInfo> {
        record.and_then(KycRecord::identity)
    }

    /// Any partial upload progress: either side of either document.
    pub fn has_uploaded_documents(record: Option<&KycRecord>) -> bool {
        let license = Self::license_data(record);
        let identity = Self::identity_data(record);
        license.map_or(false, |l| l.front_uploaded || l.back_uploaded)
            || identity.map_or(false, |i| i.front_uploaded || i.back_uploaded)
    }

    /// Strict completeness: both sides of both documents uploaded.
    pub fn has_all_required_documents(record: Option<&KycRecord>) -> bool {
        let license_complete = Self::license_data(record)
            .map_or(false, |l| l.front_uploaded && l.back_uploaded);
        let identity_complete = Self::identity_data(record)
            .map_or(false, |i| i.front_uploaded && i.back_uploaded);
        license_complete && identity_complete
    }

    pub fn status_label(record: Option<&KycRecord>, language: Language) -> &'static str {
        Self::extract_status(record).label(language)
    }

    pub fn status_badge_class(record: Option<&KycRecord>) -> &'static str {
        Self::extract_status(record).badge_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical(status: &str) -> KycRecord {
        serde_json::from_value(json!({ "kycStatus": status })).unwrap()
    }

    fn legacy(value: serde_json::Value) -> KycRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn predicates_are_mutually_exclusive_and_exhaustive() {
        for status in ["not_submitted", "pending", "approved", "rejected"] {
            let record = canonical(status);
            let record = Some(&record);
            let hits = [
                KycResolver::is_not_submitted(record),
                KycResolver::is_pending(record),
                KycResolver::is_approved(record),
                KycResolver::is_rejected(record),
            ];
            assert_eq!(hits.iter().filter(|hit| **hit).count(), 1, "status {status}");
            let expected = KycStatus::parse(status);
            assert_eq!(KycResolver::extract_status(record), expected);
        }
    }

    #[test]
    fn can_rent_only_when_approved() {
        assert!(KycResolver::can_rent_vehicles(Some(&canonical("approved"))));
        for status in ["not_submitted", "pending", "rejected", "garbage"] {
            assert!(!KycResolver::can_rent_vehicles(Some(&canonical(status))));
        }
        assert!(!KycResolver::can_rent_vehicles(None));
    }

    #[test]
    fn legacy_shape_gates_the_same_way() {
        let record = legacy(json!({
            "_id": "64f1c0ffee0000aa11bb22cc",
            "status": "approved",
            "licenseFrontUploaded": true,
            "licenseBackUploaded": true,
            "identityCardFrontUploaded": true,
            "identityCardBackUploaded": true
        }));
        assert!(KycResolver::can_rent_vehicles(Some(&record)));
        assert!(KycResolver::has_all_required_documents(Some(&record)));
        assert_eq!(
            KycResolver::status_label(Some(&record), Language::Vi),
            "Đã duyệt"
        );
    }

    #[test]
    fn needs_submission_when_absent_or_rejected() {
        assert!(KycResolver::needs_document_submission(None));
        assert!(KycResolver::needs_document_submission(Some(&canonical("rejected"))));
        assert!(KycResolver::needs_document_submission(Some(&canonical("not_submitted"))));
        assert!(!KycResolver::needs_document_submission(Some(&canonical("pending"))));
        assert!(!KycResolver::needs_document_submission(Some(&canonical("approved"))));
    }

    #[test]
    fn missing_record_resolves_to_not_submitted_defaults() {
        assert_eq!(KycResolver::extract_status(None), KycStatus::NotSubmitted);
        assert!(KycResolver::license_data(None).is_none());
        assert!(KycResolver::identity_data(None).is_none());
        assert!(!KycResolver::has_uploaded_documents(None));
        assert_eq!(KycResolver::status_badge_class(None), "badge-secondary");
        assert_eq!(KycResolver::status_label(None, Language::Vi), "Chưa cập nhật");
        assert_eq!(KycResolver::status_label(None, Language::En), "Not Submitted");
    }

    #[test]
    fn rejected_record_without_documents() {
        let record: KycRecord = serde_json::from_value(json!({
            "kycStatus": "rejected",
            "license": null,
            "identity": null
        }))
        .unwrap();
        let record = Some(&record);
        assert!(KycResolver::license_data(record).is_none());
        assert!(!KycResolver::has_uploaded_documents(record));
        assert_eq!(KycResolver::status_badge_class(record), "badge-danger");
    }

    #[test]
    fn partial_upload_counts_as_progress_but_not_completeness() {
        let record = legacy(json!({
            "_id": "64f1c0ffee0000aa11bb22cc",
            "status": "pending",
            "licenseFrontUploaded": true
        }));
        let record = Some(&record);
        assert!(KycResolver::has_uploaded_documents(record));
        assert!(!KycResolver::has_all_required_documents(record));
    }

    #[test]
    fn completeness_implies_progress() {
        let complete = legacy(json!({
            "_id": "64f1c0ffee0000aa11bb22cc",
            "status": "pending",
            "licenseFrontUploaded": true,
            "licenseBackUploaded": true,
            "identityCardFrontUploaded": true,
            "identityCardBackUploaded": true
        }));
        assert!(KycResolver::has_all_required_documents(Some(&complete)));
        assert!(KycResolver::has_uploaded_documents(Some(&complete)));

        // license complete but identity untouched is progress only
        let half = legacy(json!({
            "_id": "64f1c0ffee0000aa11bb22cc",
            "status": "pending",
            "licenseFrontUploaded": true,
            "licenseBackUploaded": true
        }));
        assert!(!KycResolver::has_all_required_documents(Some(&half)));
        assert!(KycResolver::has_uploaded_documents(Some(&half)));
    }

    #[test]
    fn unknown_status_falls_back_to_not_submitted_labels() {
        let record = canonical("under_review");
        assert_eq!(
            KycResolver::status_label(Some(&record), Language::Vi),
            "Chưa cập nhật"
        );
        assert_eq!(
            KycResolver::status_label(Some(&record), Language::En),
            "Not Submitted"
        );
        assert_eq!(KycResolver::status_badge_class(Some(&record)), "badge-secondary");
        assert!(KycResolver::needs_document_submission(Some(&record)));
    }
}
