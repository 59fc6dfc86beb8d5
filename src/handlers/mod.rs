pub mod data;
pub mod home;

pub use data::{insert_data, list_data};
pub use home::home;
