pub mod messages;
pub mod requests;
pub mod response;
