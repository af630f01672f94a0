pub mod catalog;
pub mod content;
pub mod dispatch;
pub mod profile;
pub mod projects;
pub mod static_files;
pub mod users;
