//! Value objects shared across the domain.

pub mod culture;
pub mod permission;
pub mod tree_path;
pub mod udi;
pub mod url_info;

pub use culture::Culture;
pub use permission::{Permission, PermissionSet};
pub use tree_path::TreePath;
pub use udi::{Udi, UdiEntityType};
pub use url_info::UrlInfo;
