pub mod insights;
pub mod notifications;
pub mod overview;
pub mod push;
pub mod workbench;
