// Public library interface for expense-tracker
pub mod action_router;
pub mod api;
pub mod categories;
pub mod cli_helper;
pub mod cli_utils;
pub mod expenses;
pub mod reports;
pub mod schema;
pub mod users;
pub mod utils;
