pub mod dispatch;
pub mod list;
pub mod roles;
pub mod shared;
