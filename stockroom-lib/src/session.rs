//! Client-side session keys.
//!
//! `branch_id` and `user_type` are kept as the raw strings the login flow
//! stored. They only tailor the UI and are never an access-control boundary;
//! the inventory service enforces authorization on its own.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Result, fs::state_dir, model::BranchId};

const FILE_NAME: &str = "session.toml";

/// `user_type` value that unlocks every branch.
pub const SUPERADMIN: &str = "superadmin";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

impl Session {
    pub fn new(branch_id: Option<&str>, user_type: Option<&str>) -> Self {
        Self {
            branch_id: branch_id.map(str::to_string),
            user_type: user_type.map(str::to_string),
        }
    }

    /// The stored branch, read from the leading integer of the raw value:
    /// `"12abc"` is branch 12 and `"3.5"` is branch 3. A value with no
    /// leading digits is no branch at all.
    pub fn branch_id(&self) -> Option<BranchId> {
        self.branch_id
            .as_deref()
            .and_then(leading_integer)
            .map(BranchId)
    }

    pub fn is_superadmin(&self) -> bool {
        self.user_type.as_deref() == Some(SUPERADMIN)
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let sign = raw.len() - unsigned.len();

    raw.get(..sign + digits)?.parse().ok()
}

/// Shared handle to the persisted [`Session`].
///
/// Cloning is cheap; all clones see the same session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: Option<PathBuf>,
    session: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Open the session file in the Stockroom state directory.
    pub fn open() -> Result<Self> {
        Self::open_at(state_dir()?.join(FILE_NAME))
    }

    /// Open a session file at `path`. A missing file is an empty session.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let session = read_session(&path)?;

        Ok(Self {
            path: Some(path),
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// A store that is never written to disk.
    pub fn in_memory(session: Session) -> Self {
        Self {
            path: None,
            session: Arc::new(RwLock::new(session)),
        }
    }

    pub fn get(&self) -> Session {
        self.session.read().clone()
    }

    pub fn set_branch_id(&self, branch_id: Option<&str>) -> Result<()> {
        self.session.write().branch_id = branch_id.map(str::to_string);
        self.save()
    }

    pub fn set_user_type(&self, user_type: Option<&str>) -> Result<()> {
        self.session.write().user_type = user_type.map(str::to_string);
        self.save()
    }

    pub fn clear(&self) -> Result<()> {
        *self.session.write() = Session::default();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let contents = toml::to_string_pretty(&*self.session.read())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        debug!("Saved session to {}", path.display());

        Ok(())
    }
}

fn read_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        return Ok(Session::default());
    }

    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents).unwrap_or_else(|e| {
        warn!("Ignoring unreadable session file {}: {e}", path.display());
        Session::default()
    }))
}
