use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    Error, Result,
    api::InventoryApi,
    model::{Asset, AssetId, AssetPayload, Branch, BranchId, Group, GroupId},
};

/// A mutation the fake service received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(AssetPayload),
    Update(AssetId, AssetPayload),
    Delete(AssetId),
}

/// An in-memory stand-in for the inventory service.
#[derive(Debug, Default)]
pub(crate) struct MemoryApi {
    assets: Mutex<Vec<Asset>>,
    branches: Vec<Branch>,
    groups: Vec<Group>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<Call>>,
}

impl MemoryApi {
    /// Head Office and two field branches, each with a couple of groups.
    pub fn seeded() -> Self {
        let branches = [(1, "Head Office"), (2, "Motijheel"), (3, "Gulshan")]
            .into_iter()
            .map(|(id, name)| Branch {
                branch_id: BranchId(id),
                branch_name: name.into(),
            })
            .collect();
        let groups = [(4, "ICT Desk", 1), (5, "Cash", 2), (6, "Loans", 2), (7, "Cash", 3)]
            .into_iter()
            .map(|(id, name, branch)| Group {
                group_id: GroupId(id),
                group_name: name.into(),
                branch_id: BranchId(branch),
            })
            .collect();

        Self {
            branches,
            groups,
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    pub fn with_assets(self, assets: Vec<Asset>) -> Self {
        let next = assets.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        *self.assets.lock() = assets;
        *self.next_id.lock() = next;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn group_name(&self, id: GroupId) -> String {
        self.groups
            .iter()
            .find(|g| g.group_id == id)
            .map(|g| g.group_name.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InventoryApi for MemoryApi {
    async fn list_assets(&self) -> Result<Vec<Asset>> {
        Ok(self.assets.lock().clone())
    }

    async fn create_asset(&self, asset: &AssetPayload) -> Result<()> {
        self.calls.lock().push(Call::Create(asset.clone()));

        let id = {
            let mut next = self.next_id.lock();
            let id = AssetId(*next);
            *next += 1;
            id
        };
        let group_name = self.group_name(asset.group_id);
        self.assets
            .lock()
            .push(asset.clone().into_asset(id, group_name));

        Ok(())
    }

    async fn update_asset(&self, id: AssetId, asset: &AssetPayload) -> Result<()> {
        self.calls.lock().push(Call::Update(id, asset.clone()));

        let group_name = self.group_name(asset.group_id);
        let mut assets = self.assets.lock();
        let existing = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::Server {
                status: 404,
                message: format!("asset {id} not found"),
            })?;
        *existing = asset.clone().into_asset(id, group_name);

        Ok(())
    }

    async fn delete_asset(&self, id: AssetId) -> Result<()> {
        self.calls.lock().push(Call::Delete(id));
        self.assets.lock().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_branches(&self) -> Result<Vec<Branch>> {
        Ok(self.branches.clone())
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }
}
