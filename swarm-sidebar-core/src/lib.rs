//! Swarm Sidebar Core Library
//!
//! Provides the platform-independent logic behind the Swarm Manager sidebar:
//! - Menu model construction from the polled pool list (`MenuListBuilder`)
//! - Recursive expand/collapse state of every menu level (`MenuActivation`)
//! - Last visited route restore (`RouteHistory`)
//!
//! Data sources are abstracted through traits so the terminal dashboard and
//! the tests can inject their own implementations.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    ClickOutcome, LevelId, MenuActivation, MenuListBuilder, MenuRow, RouteHistory, SubmenuState,
};
pub use traits::{ActionHandler, PoolSource, RouteStore};
