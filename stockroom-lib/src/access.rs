use crate::{
    model::{Branch, BranchId},
    session::Session,
};

/// Which branches a session may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every branch the service returns.
    All,
    /// Only the session's own branch.
    Branch(BranchId),
    /// No branch stored, so nothing is selectable.
    Nothing,
}

impl Scope {
    pub fn of(session: &Session) -> Self {
        if session.is_superadmin() {
            Scope::All
        } else {
            match session.branch_id() {
                Some(id) => Scope::Branch(id),
                None => Scope::Nothing,
            }
        }
    }

    pub fn allows(&self, branch: &Branch) -> bool {
        match self {
            Scope::All => true,
            Scope::Branch(id) => branch.branch_id == *id,
            Scope::Nothing => false,
        }
    }
}

/// Narrow a fetched branch list to what `session` may see.
pub fn scope_branches(branches: Vec<Branch>, session: &Session) -> Vec<Branch> {
    let scope = Scope::of(session);
    branches.into_iter().filter(|b| scope.allows(b)).collect()
}
