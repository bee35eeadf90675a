pub mod messages;
pub mod timeline_view;
