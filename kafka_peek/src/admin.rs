mod admin_wrapper;
mod broker_admin;

pub use admin_wrapper::*;
pub use broker_admin::*;
