pub mod about;
pub mod contact;
pub mod homepage;
pub mod page;
pub mod portfolio;
pub mod user;
pub mod verticals;

use crate::error::CmsError;

/// Checks a deserialized request body beyond what its shape guarantees.
pub trait Validate {
    fn validate(&self) -> Result<(), CmsError>;
}
