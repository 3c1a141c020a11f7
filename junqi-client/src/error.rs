//! 错误类型定义

use junqi_board::BoardError;
use thiserror::Error;

/// 阶段控制器错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// 缺少必需的协作者
    #[error("Controller is missing required collaborator: {name}")]
    MissingCollaborator { name: &'static str },

    /// 棋盘构建失败
    #[error("Board build failed: {0}")]
    Board(#[from] BoardError),
}

/// 设置读写错误
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 无法获取配置目录
    #[error("Config directory is unavailable")]
    NoConfigDir,

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
