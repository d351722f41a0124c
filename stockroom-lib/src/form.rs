//! The equipment form component.
//!
//! [`EquipmentForm`] owns everything the asset screen shows: the cached asset
//! list, the branches and groups the user may choose from, the sub-branch
//! choices for the selected branch and the [`AssetDraft`] being edited.
//!
//! The synchronous `apply_*`/`select_*` methods only touch local state, so an
//! event-driven front end can run the network calls itself and feed the
//! results back in. The `async` methods chain the same steps for callers
//! that are happy to await the whole operation.

use std::fmt::{self, Formatter};

use tracing::{debug, error, info};

use crate::{
    Error, Result,
    access::scope_branches,
    api::InventoryApi,
    draft::{AssetDraft, EditMode, Field},
    model::{Asset, AssetId, AssetPayload, Branch, BranchId, Group, GroupId},
    session::Session,
    sub_branch,
};

/// Non-blocking feedback for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AssetAdded,
    AssetUpdated,
    Failed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AssetAdded => write!(f, "Asset added successfully!"),
            Notice::AssetUpdated => write!(f, "Asset updated successfully!"),
            Notice::Failed(reason) => write!(f, "{reason}"),
        }
    }
}

/// A validated draft on its way to the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mode: EditMode,
    pub payload: AssetPayload,
}

impl Submission {
    /// Create or update, depending on the mode the form was in.
    pub async fn send(&self, api: &dyn InventoryApi) -> Result<()> {
        match self.mode {
            EditMode::Create => api.create_asset(&self.payload).await,
            EditMode::Update(id) => api.update_asset(id, &self.payload).await,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EquipmentForm {
    session: Session,
    assets: Vec<Asset>,
    branches: Vec<Branch>,
    groups: Vec<Group>,
    sub_branch_options: Vec<String>,
    draft: AssetDraft,
    mode: EditMode,
}

impl EquipmentForm {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Branches the session may choose from.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Groups belonging to the draft's branch, or every group while no branch is chosen.
    pub fn visible_groups(&self) -> Vec<&Group> {
        match self.draft.branch_id() {
            Some(branch) => self
                .groups
                .iter()
                .filter(|g| g.branch_id == branch)
                .collect(),
            None => self.groups.iter().collect(),
        }
    }

    pub fn sub_branch_options(&self) -> &[String] {
        &self.sub_branch_options
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        let id = self.draft.branch_id()?;
        self.branches.iter().find(|b| b.branch_id == id)
    }

    pub fn selected_group(&self) -> Option<&Group> {
        let id = self.draft.get(Field::GroupId).trim().parse::<i64>().ok()?;
        self.groups.iter().find(|g| g.group_id == GroupId(id))
    }

    pub fn apply_assets(&mut self, assets: Vec<Asset>) {
        debug!("Loaded {} assets", assets.len());
        self.assets = assets;
    }

    pub fn apply_groups(&mut self, groups: Vec<Group>) {
        debug!("Loaded {} groups", groups.len());
        self.groups = groups;
    }

    /// Store the fetched branches, narrowed to the session's scope, then
    /// preselect the session's branch on a fresh draft.
    pub fn apply_branches(&mut self, branches: Vec<Branch>) {
        let fetched = branches.len();
        self.branches = scope_branches(branches, &self.session);
        debug!("Loaded {fetched} branches, {} in scope", self.branches.len());

        self.restore_branch();
    }

    fn restore_branch(&mut self) {
        if self.mode.is_edit() || !self.draft.get(Field::BranchId).is_empty() {
            return;
        }

        if let Some(id) = self.session.branch_id() {
            if self.select_branch(id) {
                debug!("Restored branch {id} from session");
            }
        }
    }

    /// Choose a branch: fills in its name and resets the sub-branch to the
    /// first allowed value. Returns `false`, changing nothing, when the branch
    /// is not among [`Self::branches`].
    pub fn select_branch(&mut self, id: BranchId) -> bool {
        let Some(branch) = self.branches.iter().find(|b| b.branch_id == id).cloned() else {
            return false;
        };

        self.draft.set(Field::BranchId, id.to_string());
        self.draft.set(Field::BranchName, branch.branch_name.as_str());

        self.sub_branch_options = sub_branch::options_for(&branch.branch_name)
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.draft
            .set(Field::SubBranch, sub_branch::default_for(&branch.branch_name));

        // A group from another branch no longer fits
        if self
            .selected_group()
            .is_some_and(|g| g.branch_id != branch.branch_id)
        {
            self.draft.set(Field::GroupId, "");
        }

        true
    }

    pub fn select_group(&mut self, id: GroupId) -> bool {
        if !self.groups.iter().any(|g| g.group_id == id) {
            return false;
        }

        self.draft.set(Field::GroupId, id.to_string());
        true
    }

    pub fn select_sub_branch(&mut self, value: &str) -> bool {
        if !self.sub_branch_options.iter().any(|o| o == value) {
            return false;
        }

        self.draft.set(Field::SubBranch, value);
        true
    }

    /// Free-form input into a single field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Load `asset` into the draft and switch to update mode.
    pub fn edit(&mut self, asset: &Asset) {
        self.mode = EditMode::Update(asset.id);
        self.draft = AssetDraft::from_asset(asset);
        self.sub_branch_options = sub_branch::options_for(&asset.branch_name)
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    /// [`Self::edit`] the cached asset with `id`.
    pub fn edit_by_id(&mut self, id: AssetId) -> Result<()> {
        let asset = self
            .assets
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(Error::AssetNotFound(id))?;
        self.edit(&asset);
        Ok(())
    }

    /// Empty the draft and go back to create mode.
    pub fn reset(&mut self) {
        self.mode = EditMode::Create;
        self.draft.clear();
        self.sub_branch_options.clear();
    }

    /// Validate the draft. `None` means the draft is incomplete and nothing
    /// should be sent.
    pub fn prepare_submit(&self) -> Option<Submission> {
        match self.draft.validate() {
            Ok(payload) => Some(Submission {
                mode: self.mode,
                payload,
            }),
            Err(e) => {
                debug!("Submission skipped: {e}");
                None
            }
        }
    }

    /// Record a successful submission: clears the form. The caller reloads
    /// the asset list.
    pub fn finish_submit(&mut self, mode: EditMode) -> Notice {
        self.reset();

        match mode {
            EditMode::Create => Notice::AssetAdded,
            EditMode::Update(_) => Notice::AssetUpdated,
        }
    }

    /// Record a successful delete. The caller reloads the asset list.
    pub fn finish_delete(&mut self, id: AssetId) {
        if self.mode.target() == Some(id) {
            self.reset();
        }
    }

    /// Fetch branches, groups and assets concurrently. A failed fetch is
    /// logged and leaves that list as it was. The session's branch is
    /// restored once the branches have arrived.
    pub async fn initialize(&mut self, api: &dyn InventoryApi) {
        let (branches, groups, assets) =
            tokio::join!(api.list_branches(), api.list_groups(), api.list_assets());

        match groups {
            Ok(groups) => self.apply_groups(groups),
            Err(e) => error!("Could not load groups: {e}"),
        }
        match assets {
            Ok(assets) => self.apply_assets(assets),
            Err(e) => error!("Could not load assets: {e}"),
        }
        match branches {
            Ok(branches) => self.apply_branches(branches),
            Err(e) => error!("Could not load branches: {e}"),
        }
    }

    /// Like [`Self::initialize`], but all three fetches must succeed. On the
    /// first failure (branches, then groups, then assets) the error is
    /// returned and the form is left untouched.
    pub async fn load(&mut self, api: &dyn InventoryApi) -> Result<()> {
        let (branches, groups, assets) =
            tokio::join!(api.list_branches(), api.list_groups(), api.list_assets());
        let (branches, groups, assets) = (branches?, groups?, assets?);

        self.apply_groups(groups);
        self.apply_assets(assets);
        self.apply_branches(branches);

        Ok(())
    }

    pub async fn refresh_assets(&mut self, api: &dyn InventoryApi) {
        match api.list_assets().await {
            Ok(assets) => self.apply_assets(assets),
            Err(e) => error!("Could not load assets: {e}"),
        }
    }

    /// Submit the draft. Returns `Ok(None)` without calling the service when
    /// the draft is incomplete.
    pub async fn submit(&mut self, api: &dyn InventoryApi) -> Result<Option<Notice>> {
        let Some(submission) = self.prepare_submit() else {
            return Ok(None);
        };

        submission.send(api).await?;
        info!("Submitted asset ({:?})", submission.mode);

        self.refresh_assets(api).await;
        Ok(Some(self.finish_submit(submission.mode)))
    }

    pub async fn delete(&mut self, api: &dyn InventoryApi, id: AssetId) -> Result<()> {
        api.delete_asset(id).await?;
        info!("Deleted asset {id}");

        self.finish_delete(id);
        self.refresh_assets(api).await;
        Ok(())
    }
}
