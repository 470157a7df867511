//! 类型定义模块

mod layout;
mod menu;
mod pool;
mod stylesheet;

pub use layout::{DeviceClass, LayoutContext, MenuMode};
pub use menu::{MenuAction, MenuNode, MenuTarget};
pub use pool::Pool;
pub use stylesheet::{StylesheetKind, StylesheetLinks};
