mod error;
mod identity;
pub mod monitor;
pub mod nav;
pub mod rbac;
mod role;
pub mod settings;
pub mod society;
pub mod user;
pub mod visitor;

pub use error::{Error, Result};
pub use identity::{
    AccountStatus, Identity, SESSION_COOKIE_NAME, ScopeRef, decode_session, encode_session,
};
pub use role::{Role, RoleMetadata};
