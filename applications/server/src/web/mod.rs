/// Server-rendered dashboard pages
pub mod handlers;
pub mod html;
pub mod layout;
pub mod notification;
pub mod pages;

pub use notification::{Notice, Notification, NotificationKind};
