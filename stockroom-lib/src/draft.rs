//! The form draft: a staging copy of an asset bound to input controls.
//!
//! Every field is kept as the text the user typed. [`AssetDraft::validate`]
//! applies the required-field rules and turns the draft into an
//! [`AssetPayload`] ready for the service.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

use crate::model::{Asset, AssetId, AssetPayload, BranchId, GroupId};

/// The thirteen required inputs of the asset form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    BranchId,
    BranchName,
    GroupId,
    DesktopName,
    Configuration,
    TagName,
    Warranty,
    Price,
    PurchaseDate,
    Status,
    AssetGetBy,
    SerialNumber,
    SubBranch,
}

impl Field {
    /// Human friendly label for form controls.
    pub fn label(&self) -> &'static str {
        match self {
            Field::BranchId => "Branch",
            Field::BranchName => "Branch name",
            Field::GroupId => "Group",
            Field::DesktopName => "Desktop name",
            Field::Configuration => "Configuration",
            Field::TagName => "Tag name",
            Field::Warranty => "Warranty",
            Field::Price => "Price",
            Field::PurchaseDate => "Purchase date",
            Field::Status => "Status",
            Field::AssetGetBy => "Asset get by",
            Field::SerialNumber => "Serial number",
            Field::SubBranch => "Sub-branch",
        }
    }

    /// Fields the user types into directly. The rest are filled by branch,
    /// group and sub-branch selection.
    pub fn is_free_text(&self) -> bool {
        !matches!(
            self,
            Field::BranchId | Field::BranchName | Field::GroupId | Field::SubBranch
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    Missing(Vec<Field>),
    #[error("{field} is not a valid number: {value:?}")]
    Malformed { field: Field, value: String },
    #[error("{value:?} is not an allowed {field}")]
    NotAllowed { field: Field, value: String },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether a submission creates a new asset or updates an existing one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Create,
    Update(AssetId),
}

impl EditMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, EditMode::Update(_))
    }

    pub fn target(&self) -> Option<AssetId> {
        match self {
            EditMode::Create => None,
            EditMode::Update(id) => Some(*id),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetDraft {
    branch_id: String,
    branch_name: String,
    group_id: String,
    desktop_name: String,
    configuration: String,
    tag_name: String,
    warranty: String,
    price: String,
    purchase_date: String,
    status: String,
    asset_get_by: String,
    serial_number: String,
    sub_branch: String,
}

impl AssetDraft {
    /// Copy every editable field of `asset` into a fresh draft.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            branch_id: asset.branch_id.to_string(),
            branch_name: asset.branch_name.clone(),
            group_id: asset.group_id.to_string(),
            desktop_name: asset.desktop_name.clone(),
            configuration: asset.configuration.clone(),
            tag_name: asset.tag_name.clone(),
            warranty: asset.warranty.clone(),
            price: asset.price.to_string(),
            purchase_date: asset.purchase_date.clone(),
            status: asset.status.clone(),
            asset_get_by: asset.asset_get_by.clone(),
            serial_number: asset.serial_number.clone(),
            sub_branch: asset.sub_branch.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BranchId => &self.branch_id,
            Field::BranchName => &self.branch_name,
            Field::GroupId => &self.group_id,
            Field::DesktopName => &self.desktop_name,
            Field::Configuration => &self.configuration,
            Field::TagName => &self.tag_name,
            Field::Warranty => &self.warranty,
            Field::Price => &self.price,
            Field::PurchaseDate => &self.purchase_date,
            Field::Status => &self.status,
            Field::AssetGetBy => &self.asset_get_by,
            Field::SerialNumber => &self.serial_number,
            Field::SubBranch => &self.sub_branch,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::iter().all(|f| self.get(f).is_empty())
    }

    /// The branch currently entered, if it parses.
    pub fn branch_id(&self) -> Option<BranchId> {
        self.branch_id.trim().parse::<i64>().ok().map(BranchId)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Apply the required-field rules.
    ///
    /// A field holding only whitespace counts as empty. The numeric fields
    /// must also parse; whether the values make sense is for the service to
    /// decide.
    pub fn validate(&self) -> Result<AssetPayload, ValidationError> {
        let missing: Vec<Field> = Field::iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }

        let price: f64 = self.parse(Field::Price)?;
        if !price.is_finite() {
            return Err(ValidationError::Malformed {
                field: Field::Price,
                value: self.price.clone(),
            });
        }

        Ok(AssetPayload {
            branch_id: BranchId(self.parse(Field::BranchId)?),
            branch_name: self.branch_name.clone(),
            group_id: GroupId(self.parse(Field::GroupId)?),
            desktop_name: self.desktop_name.clone(),
            configuration: self.configuration.clone(),
            tag_name: self.tag_name.clone(),
            warranty: self.warranty.clone(),
            price,
            purchase_date: self.purchase_date.clone(),
            status: self.status.clone(),
            asset_get_by: self.asset_get_by.clone(),
            serial_number: self.serial_number.clone(),
            sub_branch: self.sub_branch.clone(),
        })
    }

    fn parse<T: FromStr>(&self, field: Field) -> Result<T, ValidationError> {
        let value = self.get(field);
        value
            .trim()
            .parse()
            .map_err(|_| ValidationError::Malformed {
                field,
                value: value.to_string(),
            })
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::BranchId => &mut self.branch_id,
            Field::BranchName => &mut self.branch_name,
            Field::GroupId => &mut self.group_id,
            Field::DesktopName => &mut self.desktop_name,
            Field::Configuration => &mut self.configuration,
            Field::TagName => &mut self.tag_name,
            Field::Warranty => &mut self.warranty,
            Field::Price => &mut self.price,
            Field::PurchaseDate => &mut self.purchase_date,
            Field::Status => &mut self.status,
            Field::AssetGetBy => &mut self.asset_get_by,
            Field::SerialNumber => &mut self.serial_number,
            Field::SubBranch => &mut self.sub_branch,
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// A draft with every field filled in for the Motijheel branch.
    pub(crate) fn filled() -> AssetDraft {
        let mut draft = AssetDraft::default();
        for (field, value) in [
            (Field::BranchId, "2"),
            (Field::BranchName, "Motijheel"),
            (Field::GroupId, "5"),
            (Field::DesktopName, "MJ-CASH-01"),
            (Field::Configuration, "i5 / 8GB / 256GB"),
            (Field::TagName, "TAG-1001"),
            (Field::Warranty, "2 years"),
            (Field::Price, "42000"),
            (Field::PurchaseDate, "2024-05-01"),
            (Field::Status, "Active"),
            (Field::AssetGetBy, "Head Office Procurement"),
            (Field::SerialNumber, "PF3K9Z"),
            (Field::SubBranch, "N/A"),
        ] {
            draft.set(field, value);
        }
        draft
    }

    #[test]
    fn test_valid() {
        let payload = filled().validate().unwrap();

        assert_eq!(payload.branch_id, BranchId(2));
        assert_eq!(payload.group_id, GroupId(5));
        assert_eq!(payload.price, 42000.0);
        assert_eq!(payload.sub_branch, "N/A");
    }

    #[test]
    fn test_each_field_is_required() {
        for field in Field::iter() {
            let mut draft = filled();
            draft.set(field, "");

            assert_eq!(
                draft.validate(),
                Err(ValidationError::Missing(vec![field])),
                "{field}"
            );
        }
    }

    #[test]
    fn test_whitespace_is_empty() {
        let mut draft = filled();
        draft.set(Field::SerialNumber, "   ");

        assert!(!draft.is_valid());
    }

    #[test]
    fn test_missing_in_form_order() {
        let mut draft = AssetDraft::default();
        draft.set(Field::Price, "10");

        match draft.validate() {
            Err(ValidationError::Missing(fields)) => {
                assert_eq!(fields.len(), 12);
                assert_eq!(fields.first(), Some(&Field::BranchId));
                assert_eq!(fields.last(), Some(&Field::SubBranch));
                assert!(!fields.contains(&Field::Price));
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_numbers() {
        let mut draft = filled();
        draft.set(Field::Price, "forty");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Malformed {
                field: Field::Price,
                value: "forty".into()
            })
        );

        let mut draft = filled();
        draft.set(Field::GroupId, "5a");
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::Malformed {
                field: Field::GroupId,
                ..
            })
        ));

        let mut draft = filled();
        draft.set(Field::Price, "NaN");
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_from_asset_round_trips_through_validate() {
        let asset = filled().validate().unwrap().into_asset(AssetId(9), "Cash");
        let draft = AssetDraft::from_asset(&asset);

        assert_eq!(draft.get(Field::BranchId), "2");
        assert_eq!(draft.get(Field::Price), "42000");
        assert_eq!(draft.validate().unwrap(), filled().validate().unwrap());
    }

    #[test]
    fn test_clear() {
        let mut draft = filled();
        draft.clear();

        assert!(draft.is_empty());
        assert_eq!(draft.branch_id(), None);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::AssetGetBy.to_string(), "asset_get_by");
        assert_eq!("sub_branch".parse::<Field>(), Ok(Field::SubBranch));
        assert_eq!(Field::iter().count(), 13);
    }

    #[test]
    fn test_edit_mode() {
        assert!(!EditMode::default().is_edit());
        assert_eq!(EditMode::Update(AssetId(3)).target(), Some(AssetId(3)));
        assert_eq!(EditMode::Create.target(), None);
    }
}
