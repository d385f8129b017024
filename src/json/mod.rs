//! Companion JSON verification.
//!
//! Not archive-related, but the same decode-and-assert shape as the entry
//! handlers: parse a JSON byte stream and check fixed expected values. Two
//! independent modes are supported — generic tree navigation and typed
//! deserialization into the model in [`model`].

pub mod model;

use serde_json::Value;

use crate::Result;
use crate::VerifyError;

pub use model::Address;
pub use model::ClientDocument;
pub use model::ClientRecord;

const EXPECTED_DATE_OF_BIRTH: &str = "12 Jan 1988";
const EXPECTED_TITLE: &str = "Mr.";
const EXPECTED_NAME: &str = "John";
const EXPECTED_SURNAME: &str = "Doe";
const EXPECTED_DESCRIPTION: &str = "example client";
const EXPECTED_GROUPS: [&str; 2] = ["EXT", "PREMIUM"];
const EXPECTED_COUNTRY: &str = "France";
const EXPECTED_CITY: &str = "Paris";
const EXPECTED_STREET: &str = "Rue Mumia Abu-Jamal";
const EXPECTED_BUILDING: &str = "6";
const EXPECTED_FLAT: &str = "104";

/// Verifies `client.dateOfBirth` via generic JSON tree navigation.
///
/// `source` is a label used in diagnostics, typically the document's file
/// name.
///
/// # Errors
///
/// Returns [`VerifyError::Decode`] for invalid JSON and
/// [`VerifyError::Mismatch`] if the field is absent, not a string, or not
/// equal to the expected date.
pub fn verify_client_tree(source: &str, data: &[u8]) -> Result<()> {
    let tree: Value = serde_json::from_slice(data)
        .map_err(|e| VerifyError::decode(source, format!("invalid JSON: {e}")))?;

    let actual = tree.pointer("/client/dateOfBirth").and_then(Value::as_str);
    match actual {
        Some(value) if value == EXPECTED_DATE_OF_BIRTH => Ok(()),
        Some(value) => Err(VerifyError::mismatch(
            source,
            "client.dateOfBirth",
            EXPECTED_DATE_OF_BIRTH,
            value,
        )),
        None => Err(VerifyError::mismatch(
            source,
            "client.dateOfBirth",
            EXPECTED_DATE_OF_BIRTH,
            "<missing>",
        )),
    }
}

/// Verifies every expected leaf field via typed deserialization.
///
/// Group membership is checked regardless of stored order; unknown wire
/// fields are ignored by the model.
///
/// # Errors
///
/// Returns [`VerifyError::Decode`] for invalid JSON and
/// [`VerifyError::Mismatch`] naming the first field whose value deviates
/// from the expectation.
pub fn verify_client_model(source: &str, data: &[u8]) -> Result<()> {
    let document: ClientDocument = serde_json::from_slice(data)
        .map_err(|e| VerifyError::decode(source, format!("invalid JSON: {e}")))?;

    let client = document
        .client
        .ok_or_else(|| VerifyError::mismatch(source, "client", "present", "<missing>"))?;

    let uuid = client.uuid.as_deref().unwrap_or_default();
    if uuid.is_empty() {
        return Err(VerifyError::mismatch(
            source,
            "client.uuid",
            "non-empty",
            "<empty>",
        ));
    }

    expect_eq(source, "client.title", EXPECTED_TITLE, client.title.as_deref())?;
    expect_eq(source, "client.name", EXPECTED_NAME, client.name.as_deref())?;
    expect_eq(
        source,
        "client.surname",
        EXPECTED_SURNAME,
        client.surname.as_deref(),
    )?;
    expect_eq(
        source,
        "client.dateOfBirth",
        EXPECTED_DATE_OF_BIRTH,
        client.date_of_birth.as_deref(),
    )?;
    expect_eq(
        source,
        "client.description",
        EXPECTED_DESCRIPTION,
        client.description.as_deref(),
    )?;

    let groups = client.user_groups.unwrap_or_default();
    for required in EXPECTED_GROUPS {
        if !groups.iter().any(|group| group == required) {
            return Err(VerifyError::mismatch(
                source,
                "client.userGroups",
                format!("membership including {required:?}"),
                format!("{groups:?}"),
            ));
        }
    }

    let address = client
        .address
        .ok_or_else(|| VerifyError::mismatch(source, "client.address", "present", "<missing>"))?;
    expect_eq(
        source,
        "client.address.country",
        EXPECTED_COUNTRY,
        address.country.as_deref(),
    )?;
    expect_eq(
        source,
        "client.address.city",
        EXPECTED_CITY,
        address.city.as_deref(),
    )?;
    expect_eq(
        source,
        "client.address.street",
        EXPECTED_STREET,
        address.street.as_deref(),
    )?;
    expect_eq(
        source,
        "client.address.building",
        EXPECTED_BUILDING,
        address.building.as_deref(),
    )?;
    expect_eq(
        source,
        "client.address.flat",
        EXPECTED_FLAT,
        address.flat.as_deref(),
    )?;

    Ok(())
}

fn expect_eq(source: &str, field: &str, expected: &str, actual: Option<&str>) -> Result<()> {
    match actual {
        Some(value) if value == expected => Ok(()),
        Some(value) => Err(VerifyError::mismatch(source, field, expected, value)),
        None => Err(VerifyError::mismatch(source, field, expected, "<missing>")),
    }
}
