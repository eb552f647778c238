pub mod chat;
pub mod mood;
