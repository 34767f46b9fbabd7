pub mod db;
pub mod sessions;
