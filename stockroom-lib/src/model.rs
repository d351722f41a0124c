//! Records exchanged with the inventory service.
//!
//! Field names match the service's JSON keys, so every type here serializes
//! with plain `serde` derives.

use std::fmt::{self, Formatter};

use derive_more::{Display, From};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identity of an [`Asset`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BranchId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub i64);

/// One inventory record as returned by `GET assets`.
///
/// Text columns the service leaves `null` or omits decode as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub branch_id: BranchId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch_name: String,
    pub group_id: GroupId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub desktop_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub configuration: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tag_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warranty: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asset_get_by: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub serial_number: String,
    /// Joined in by the service; older deployments leave it out.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sub_branch: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST assets` and `PUT assets/{id}`.
///
/// Carries the thirteen user-editable fields of an [`Asset`]; `id` and
/// `group_name` are owned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPayload {
    pub branch_id: BranchId,
    pub branch_name: String,
    pub group_id: GroupId,
    pub desktop_name: String,
    pub configuration: String,
    pub tag_name: String,
    pub warranty: String,
    pub price: f64,
    pub purchase_date: String,
    pub status: String,
    pub asset_get_by: String,
    pub serial_number: String,
    pub sub_branch: String,
}

impl AssetPayload {
    /// Materialize the record the service would store for this payload.
    #[cfg(test)]
    pub(crate) fn into_asset(self, id: AssetId, group_name: impl Into<String>) -> Asset {
        Asset {
            id,
            branch_id: self.branch_id,
            branch_name: self.branch_name,
            group_id: self.group_id,
            desktop_name: self.desktop_name,
            configuration: self.configuration,
            tag_name: self.tag_name,
            warranty: self.warranty,
            price: self.price,
            purchase_date: self.purchase_date,
            status: self.status,
            asset_get_by: self.asset_get_by,
            serial_number: self.serial_number,
            group_name: group_name.into(),
            sub_branch: self.sub_branch,
        }
    }
}

/// An organizational location. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub branch_id: BranchId,
    pub branch_name: String,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.branch_name)
    }
}

/// A categorization tag attached to a branch. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: GroupId,
    pub group_name: String,
    pub branch_id: BranchId,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_asset_without_group_name() {
        let json = r#"{
            "id": 7,
            "branch_id": 2,
            "branch_name": "Head Office",
            "group_id": 3,
            "desktop_name": "HO-ICT-01",
            "configuration": "i5 / 16GB / 512GB SSD",
            "tag_name": "TAG-0007",
            "warranty": "3 years",
            "price": 85000.5,
            "purchase_date": "2024-02-11",
            "status": "Active",
            "asset_get_by": "Procurement",
            "serial_number": "SN-77A",
            "sub_branch": "ICT"
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, AssetId(7));
        assert_eq!(asset.branch_id, BranchId(2));
        assert_eq!(asset.group_name, "");
        assert_eq!(asset.price, 85000.5);
    }

    #[test]
    fn test_asset_with_null_text() {
        let json = r#"{
            "id": 8,
            "branch_id": 2,
            "branch_name": "Motijheel",
            "group_id": 5,
            "desktop_name": "MJ-CASH-02",
            "configuration": null,
            "tag_name": "TAG-0008",
            "warranty": null,
            "price": 30000,
            "purchase_date": "2021-06-30",
            "status": "Active",
            "asset_get_by": "Vendor",
            "serial_number": "SN-88B",
            "group_name": null,
            "sub_branch": null
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, AssetId(8));
        assert_eq!(asset.configuration, "");
        assert_eq!(asset.warranty, "");
        assert_eq!(asset.group_name, "");
        assert_eq!(asset.sub_branch, "");
        assert_eq!(asset.tag_name, "TAG-0008");
    }

    #[test]
    fn test_payload_has_no_identity() {
        let payload = AssetPayload {
            branch_id: BranchId(1),
            branch_name: "Motijheel".into(),
            group_id: GroupId(4),
            desktop_name: "MJ-01".into(),
            configuration: "i3".into(),
            tag_name: "T1".into(),
            warranty: "1 year".into(),
            price: 1000.0,
            purchase_date: "2023-01-01".into(),
            status: "Active".into(),
            asset_get_by: "Vendor".into(),
            serial_number: "S1".into(),
            sub_branch: "N/A".into(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 13);
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("group_name"));
        assert_eq!(object.get("branch_id"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_branch_display() {
        let branch = Branch {
            branch_id: BranchId(1),
            branch_name: "Head Office".into(),
        };

        assert_eq!(branch.to_string(), "Head Office");
    }
}
