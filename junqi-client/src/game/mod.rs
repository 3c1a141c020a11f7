//! 游戏逻辑模块
//!
//! 阶段状态机和外部协作者接口

mod ai;
mod controller;
mod rules;
mod state;

pub use ai::*;
pub use controller::*;
pub use rules::*;
pub use state::*;

use junqi_board::Coordinate;
use serde::{Deserialize, Serialize};

use crate::GamePhase;

/// 走法令牌
///
/// 由棋盘输入或 AI 产生，控制器只转发和比对，不解释其含义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl MoveToken {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 驱动阶段变化的外部事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// 开始新游戏，可覆盖设置中的人机/双人模式
    NewGame { single_player: Option<bool> },
    /// 布阵完成
    SetupComplete,
    /// 玩家选择了合法走法
    MoveSelected(MoveToken),
    /// AI 走法已给出
    AiMoveResolved(MoveToken),
    /// 走法执行完成（动画结束）
    ///
    /// 令牌必须与 `MoveSelected` / `AiMoveResolved` 给出的走法相同，
    /// 不一致的信号会被忽略，控制器继续等待。
    MoveApplied(MoveToken),
    /// 暂停
    Pause,
    /// 继续
    Resume,
}

impl PhaseEvent {
    /// 使用设置中的模式开始新游戏
    pub fn new_game() -> Self {
        PhaseEvent::NewGame {
            single_player: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhaseEvent::NewGame { .. } => "new-game",
            PhaseEvent::SetupComplete => "setup-complete",
            PhaseEvent::MoveSelected(_) => "move-selected",
            PhaseEvent::AiMoveResolved(_) => "ai-move-resolved",
            PhaseEvent::MoveApplied(_) => "move-applied",
            PhaseEvent::Pause => "pause",
            PhaseEvent::Resume => "resume",
        }
    }
}

/// 一次阶段切换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: GamePhase,
    pub to: GamePhase,
    pub trigger: PhaseEvent,
}
