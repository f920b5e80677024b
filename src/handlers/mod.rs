pub mod booking;
pub mod chat;
pub mod health;
pub mod site;
