pub mod chat;
pub mod page;
pub mod relay;
pub mod responder;
pub mod submission;
pub mod validation;
