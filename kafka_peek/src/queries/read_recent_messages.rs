mod collector;
mod handler;
mod models;
mod planner;
mod ranker;
mod request;
mod response;

pub use collector::*;
pub use handler::*;
pub use models::*;
pub use planner::*;
pub use ranker::*;
pub use request::*;
pub use response::*;
