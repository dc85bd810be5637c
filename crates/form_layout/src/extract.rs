//! Record extraction from submitted key/value fields
//!
//! Extraction is total: every field is optional, unknown keys are ignored
//! and values are taken verbatim. Nothing here can fail.

use crate::{ApplicationRecord, DisputeInfo, PartyInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Submitted field names
pub mod keys {
    pub const CLIENT_NAME: &str = "client_name";
    pub const BRANCH_ADDRESS: &str = "branch_address";
    pub const CORRESPONDENCE_ADDRESS: &str = "correspondence_address";
    pub const TELEPHONE_NO: &str = "telephone_no";
    pub const MOBILE: &str = "mobile";
    pub const EMAIL: &str = "email";

    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const OP_REGISTERED_ADDRESS: &str = "op_registered_address";
    pub const OP_CORRESPONDENCE_ADDRESS: &str = "op_correspondence_address";
    pub const OP_TELEPHONE: &str = "op_telephone";
    pub const OP_MOBILE: &str = "op_mobile";
    pub const OP_EMAIL: &str = "op_email";

    pub const DISPUTE_NATURE: &str = "dispute_nature";

    /// Every field the form submits, in form order
    pub const ALL: [&str; 13] = [
        CLIENT_NAME,
        BRANCH_ADDRESS,
        CORRESPONDENCE_ADDRESS,
        TELEPHONE_NO,
        MOBILE,
        EMAIL,
        CUSTOMER_NAME,
        OP_REGISTERED_ADDRESS,
        OP_CORRESPONDENCE_ADDRESS,
        OP_TELEPHONE,
        OP_MOBILE,
        OP_EMAIL,
        DISPUTE_NATURE,
    ];
}

/// Field names for one party block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyKeys {
    pub name: &'static str,
    pub registered_address: &'static str,
    pub correspondence_address: &'static str,
    pub telephone: &'static str,
    pub mobile: &'static str,
    pub email: &'static str,
}

pub const APPLICANT_KEYS: PartyKeys = PartyKeys {
    name: keys::CLIENT_NAME,
    registered_address: keys::BRANCH_ADDRESS,
    correspondence_address: keys::CORRESPONDENCE_ADDRESS,
    telephone: keys::TELEPHONE_NO,
    mobile: keys::MOBILE,
    email: keys::EMAIL,
};

pub const OPPOSITE_PARTY_KEYS: PartyKeys = PartyKeys {
    name: keys::CUSTOMER_NAME,
    registered_address: keys::OP_REGISTERED_ADDRESS,
    correspondence_address: keys::OP_CORRESPONDENCE_ADDRESS,
    telephone: keys::OP_TELEPHONE,
    mobile: keys::OP_MOBILE,
    email: keys::OP_EMAIL,
};

/// What a field renders as when the submission leaves it out.
///
/// The policy is applied to every field alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Missing fields become empty strings
    #[default]
    Empty,
    /// Missing or blank fields become this literal
    Placeholder(String),
}

impl FieldPolicy {
    /// Resolve one field value under this policy
    pub fn resolve(&self, value: Option<&str>) -> String {
        match (self, value) {
            (FieldPolicy::Empty, Some(v)) => v.to_string(),
            (FieldPolicy::Empty, None) => String::new(),
            (FieldPolicy::Placeholder(text), Some(v)) if v.trim().is_empty() => text.clone(),
            (FieldPolicy::Placeholder(_), Some(v)) => v.to_string(),
            (FieldPolicy::Placeholder(text), None) => text.clone(),
        }
    }
}

impl PartyInfo {
    /// Read one party's fields from a submission
    pub fn from_fields(
        fields: &HashMap<String, String>,
        keys: &PartyKeys,
        policy: &FieldPolicy,
    ) -> Self {
        let get = |key: &str| policy.resolve(fields.get(key).map(String::as_str));
        Self {
            name: get(keys.name),
            registered_address: get(keys.registered_address),
            correspondence_address: get(keys.correspondence_address),
            telephone: get(keys.telephone),
            mobile: get(keys.mobile),
            email: get(keys.email),
        }
    }
}

impl ApplicationRecord {
    /// Build a record from submitted fields
    pub fn from_fields(fields: &HashMap<String, String>, policy: &FieldPolicy) -> Self {
        Self {
            applicant: PartyInfo::from_fields(fields, &APPLICANT_KEYS, policy),
            opposite_party: PartyInfo::from_fields(fields, &OPPOSITE_PARTY_KEYS, policy),
            dispute: DisputeInfo {
                nature: policy.resolve(fields.get(keys::DISPUTE_NATURE).map(String::as_str)),
            },
        }
    }

    /// Build a record from any sequence of key/value pairs.
    ///
    /// When a key repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I, policy: &FieldPolicy) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_fields(&fields, policy)
    }
}
