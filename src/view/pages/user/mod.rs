pub mod panel;
pub mod ticket_create;

pub use panel::UserPanelPage;
pub use ticket_create::{TicketCreatePage, TicketCreateProps};
