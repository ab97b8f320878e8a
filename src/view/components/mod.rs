pub mod alert;
pub mod back_link;
pub mod badge;
pub mod layout;
pub mod select;
pub mod stat_card;
pub mod ticket_table;
pub mod trigger_info;

pub use alert::FlashAlerts;
pub use back_link::BackLink;
pub use badge::{PriorityBadge, StatusBadge};
pub use layout::{Area, Layout};
pub use select::{options, DateField, SelectField, SelectOption};
pub use stat_card::StatCard;
pub use ticket_table::TicketTable;
pub use trigger_info::TriggerInfoPanel;
