//! 军棋客户端核心
//!
//! 回合/阶段状态机，以及与 UI、AI、规则检查等外部协作者的接口

pub mod board;
pub mod error;
pub mod game;
pub mod settings;
pub mod ui;

pub use error::{ControllerError, SettingsError};

use serde::{Deserialize, Serialize};

/// 游戏阶段
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// 主菜单
    #[default]
    StartMenu,
    /// 布阵
    Setup,
    /// 玩家回合
    PlayerTurn,
    /// 对手（AI）回合
    EnemyTurn,
    /// 走子执行中
    MoveExecution,
    /// 游戏结束
    GameOver,
    /// 暂停
    Paused,
}

impl GamePhase {
    /// 终局阶段只能通过新游戏离开
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    /// 是否接受棋盘输入
    pub fn accepts_input(&self) -> bool {
        matches!(self, GamePhase::PlayerTurn)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
