pub mod admin;
pub mod batch;
pub mod fatal;
pub mod notice;
pub mod password;
pub mod quiz;
pub mod results;
pub mod sequential;
pub mod start;
