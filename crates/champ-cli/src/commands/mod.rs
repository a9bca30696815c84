pub mod dispatch;
pub mod exports;
pub mod extract;
pub mod schema;
pub mod shared;
pub mod show;
