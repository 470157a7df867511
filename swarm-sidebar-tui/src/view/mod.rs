//!
//! src/view/mod.rs
//! View 层：只读地把 Model 渲染到终端
//!
//!     view::render(app, frame)
//!         ├── layout        标题栏 / 菜单 / 内容 / 状态栏的几何计算与绘制
//!         ├── components    菜单（纵向列表、横向菜单栏）、状态栏、帮助
//!         ├── pages         主页、资源池、FAQ、设置
//!         └── theme         由当前布局 / 主题皮肤决定的配色
//!

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
