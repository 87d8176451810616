//! Assistant chat panel.

mod chat;

pub use chat::Chat;
