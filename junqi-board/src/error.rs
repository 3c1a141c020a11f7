//! 错误类型定义

use thiserror::Error;

/// 棋盘错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 坐标不在棋盘内
    #[error("No cell at ({col}, {row})")]
    NotFound { col: u8, row: u8 },

    /// 拓扑构建违反不变量（程序缺陷，不可恢复）
    #[error("Board topology invariant violated: {reason}")]
    Topology { reason: String },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, BoardError>;
