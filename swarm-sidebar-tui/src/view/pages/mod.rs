//! 页面

pub mod faq;
pub mod home;
pub mod pools;
pub mod settings;
