//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event , &app);           // 原始事件 → 消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//!     update::update(&mut app , AppMessage::Tick)     // 应用后台轮询到的资源池列表、
//!                                                     // 处理到期的滚动同步
//! }
//!
//!
//! 资源池轮询在 tokio 运行时中进行，结果通过 channel 送回；
//! 主循环本身是同步的，UI 状态只在这里被修改。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    // 记录初始终端尺寸，判断设备类型
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 后台数据与定时任务
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
