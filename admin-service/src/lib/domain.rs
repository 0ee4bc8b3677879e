pub mod email;
pub mod employee;
pub mod report;
pub mod user;
