//! 外部协作方抽象 trait 定义

mod action_handler;
mod pool_source;
mod route_store;

pub use action_handler::ActionHandler;
pub use pool_source::PoolSource;
pub use route_store::{InMemoryRouteStore, RouteStore};
