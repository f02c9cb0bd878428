pub mod chat;
pub mod system;
