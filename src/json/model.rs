//! Typed deserialization model for the client JSON document.
//!
//! Every field is optional at the type level; presence is enforced by the
//! verification routine, not by the model. Unknown wire fields are
//! ignored. Instances live only for the duration of one verification.

use serde::Deserialize;

/// Top-level document: a single `client` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDocument {
    /// The client record under verification.
    pub client: Option<ClientRecord>,
}

/// The client record, camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Opaque client identifier.
    pub uuid: Option<String>,
    /// Honorific, e.g. "Mr.".
    pub title: Option<String>,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    pub surname: Option<String>,
    /// Free-form date string, e.g. "12 Jan 1988".
    pub date_of_birth: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Group memberships, order not significant for verification.
    pub user_groups: Option<Vec<String>>,
    /// Postal address.
    pub address: Option<Address>,
}

/// Postal address of a client.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    /// Country name.
    pub country: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// Building number, kept as a string.
    pub building: Option<String>,
    /// Flat number, kept as a string.
    pub flat: Option<String>,
}
