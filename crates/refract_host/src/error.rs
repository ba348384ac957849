//! Host errors.

use refract_ir::ClassName;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host refused to open a member for reflective access.
    #[error("access to `{owner}.{member}` denied")]
    AccessDenied { owner: ClassName, member: String },
}
