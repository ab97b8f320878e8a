pub mod admin;
pub mod procedure;
pub mod trigger;
pub mod user;
