pub mod messages;
pub mod month_view;
