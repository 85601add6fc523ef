pub mod db_types;
pub mod operations;
pub mod period;
pub mod processor;
pub mod processor_enums;
pub mod sql_queries;
pub mod store;
