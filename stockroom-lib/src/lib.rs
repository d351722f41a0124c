//! Client-side core of Stockroom, an equipment inventory front end.
//!
//! The remote inventory service owns persistence and validation. This crate
//! holds everything a front end needs to talk to it: the record types, the
//! form draft and its required-field rules, branch scoping, the sub-branch
//! rules and the [`EquipmentForm`] component that ties them together.

pub mod access;
pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod fs;
pub mod model;
pub mod session;
pub mod sub_branch;

pub use api::{HttpInventoryApi, InventoryApi};
pub use error::{Error, Result};
pub use form::{EquipmentForm, Notice};
pub use session::{Session, SessionStore};
