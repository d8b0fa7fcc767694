//! OCI compartment data model.

use serde::Deserialize;

/// A compartment as returned by `oci iam compartment list`.
///
/// Only the identifier matters for the walk; the parent relationship is
/// discovered by listing, never stored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Compartment {
    /// Compartment OCID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// OCID of the parent compartment.
    pub compartment_id: Option<String>,
    pub lifecycle_state: Option<String>,
}

impl Compartment {
    pub fn new(id: &str, name: &str) -> Compartment {
        Compartment {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }
}
