pub mod auth;
pub mod pages;
pub mod sections;
pub mod uploads;
pub mod users;
