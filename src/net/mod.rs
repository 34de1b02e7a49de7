//! Network layer: wire types, REST calls, and the session service driver.

pub mod api;
pub mod auth_client;
pub mod types;
