pub mod chat;
pub mod knowledge;
pub mod system;

pub use chat::*;
pub use knowledge::*;
pub use system::*;
