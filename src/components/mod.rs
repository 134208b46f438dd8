//! Reusable view components rendered on the server.
//!
//! ARCHITECTURE
//! ============
//! Components take plain data props and render static markup; pages decide
//! which components appear and with what data.

pub mod add_password_dialog;
pub mod empty_notice;
pub mod header;
pub mod password_card;
pub mod search_password;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
