//! Application record - the data a single Form A submission carries

use serde::{Deserialize, Serialize};

/// Name, addresses and contact details of one party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInfo {
    pub name: String,
    /// Registered address (the applicant's branch address)
    pub registered_address: String,
    pub correspondence_address: String,
    pub telephone: String,
    pub mobile: String,
    pub email: String,
}

/// The party filing the application
pub type ApplicantInfo = PartyInfo;

/// The party the application is filed against
pub type OppositePartyInfo = PartyInfo;

/// Free-text description of the dispute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeInfo {
    pub nature: String,
}

/// One complete Form A submission
///
/// Built once per request and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    pub applicant: ApplicantInfo,
    pub opposite_party: OppositePartyInfo,
    pub dispute: DisputeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let record: ApplicationRecord =
            serde_json::from_str(r#"{"applicant":{"name":"Jane Doe"}}"#).unwrap();
        assert_eq!(record.applicant.name, "Jane Doe");
        assert_eq!(record.applicant.email, "");
        assert_eq!(record.opposite_party, PartyInfo::default());
        assert_eq!(record.dispute.nature, "");
    }
}
