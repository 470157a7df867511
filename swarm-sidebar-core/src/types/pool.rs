//! Pool 相关类型定义

use serde::{Deserialize, Serialize};

/// 后端管理的资源池
///
/// 侧边栏只关心 `id` 与 `displayName` 两个字段，其余字段在反序列化时忽略，
/// 因此快照比较也只覆盖这两个字段。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Pool {
    /// 资源池 ID
    pub id: String,
    /// 显示名称
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Pool {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// 该资源池在路由中的路径
    #[must_use]
    pub fn route(&self) -> String {
        format!("pool/{}", self.id)
    }
}
