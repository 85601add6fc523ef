pub mod categories;
pub mod expenses;
pub mod health;
pub mod reports;
pub mod users;
