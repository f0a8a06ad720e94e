pub mod router;

pub use router::{CmsState, cms_router};
