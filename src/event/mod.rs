pub mod db;
pub mod selection;
pub mod types;
