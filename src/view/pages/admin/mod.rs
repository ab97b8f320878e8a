pub mod dashboard;
pub mod requester;
pub mod ticket_list;
pub mod ticket_respond;
pub mod ticket_view;

pub use dashboard::{AdminDashboardPage, AdminDashboardProps};
pub use ticket_list::{TicketListPage, TicketListProps};
pub use ticket_respond::{TicketRespondPage, TicketRespondProps};
pub use ticket_view::{TicketViewPage, TicketViewProps};
