//! Role-driven tab strip for the complaint module.

pub mod layout;
pub mod role;
pub mod router;

pub use layout::{
    tabs_for, ComplaintView, Direction, Navigation, TabContent, TabEntry, TabLayoutView,
    TabRouter, ViewSet, LOADING_PLACEHOLDER, SCROLL_STEP_PX,
};
pub use role::RoleCategory;
pub use router::tab_router;
