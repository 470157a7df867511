//! src/event/mod.rs
//! Event 层：把 crossterm 的原始输入翻译成消息
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // poll_event / handle_event
//!         mod keymap;         // 快捷键绑定
//!
//!
//!     键盘：
//!         全局
//!             Ctrl+C / Alt+q  → AppMessage::Quit
//!             ?               → AppMessage::ToggleHelp
//!             Alt+r           → AppMessage::Refresh
//!             Alt+m           → AppMessage::CycleMenuMode
//!             Alt+s           → AppMessage::OpenSettings
//!             Esc             → AppMessage::GoBack
//!             Tab             → AppMessage::ToggleFocus
//!
//!         焦点在菜单
//!             ↑/k ↓/j         → SidebarMessage::SelectPrevious / SelectNext
//!             Enter           → SidebarMessage::Activate
//!
//!         焦点在内容
//!             ↑/k ↓/j         → ContentMessage::SelectPrevious / SelectNext
//!             Enter           → ContentMessage::Confirm
//!             ←/h →/l         → ContentMessage::TogglePrev / ToggleNext（设置页）
//!
//!
//!     鼠标：
//!         命中检测使用 view/components/navigation.rs 中与渲染相同的几何计算
//!
//!             移动到菜单项上   → SidebarMessage::Hover
//!             左键点击菜单项   → SidebarMessage::Click
//!             左键点击菜单以外 → ContentMessage::Click（横向 / 浮层模式下收起菜单）
//!
//!
//!     终端尺寸变化：
//!         Event::Resize(w, h) → AppMessage::Resize(w, h)（重新判断设备类型）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
