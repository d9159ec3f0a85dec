pub mod insight;
pub mod push;
pub mod tasks;
