pub mod json;
pub mod route_id;
