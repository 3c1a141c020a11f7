//! 对局状态

use std::sync::Arc;

use junqi_board::{BoardGraph, Side};
use serde::{Deserialize, Serialize};

use super::MoveToken;

/// 游戏模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// 人机对战
    LocalPvE,
    /// 本地双人对战（同一设备）
    LocalPvP,
}

impl GameMode {
    pub fn from_single_player(single_player: bool) -> Self {
        if single_player {
            GameMode::LocalPvE
        } else {
            GameMode::LocalPvP
        }
    }

    /// 是否是人机模式
    pub fn is_pve(&self) -> bool {
        matches!(self, GameMode::LocalPvE)
    }
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 红方胜
    RedWin,
    /// 黑方胜
    BlackWin,
}

impl GameResult {
    pub fn from_winner(side: Side) -> Self {
        match side {
            Side::Red => GameResult::RedWin,
            Side::Black => GameResult::BlackWin,
        }
    }

    pub fn winner(&self) -> Side {
        match self {
            GameResult::RedWin => Side::Red,
            GameResult::BlackWin => Side::Black,
        }
    }
}

/// 执行中的走法
///
/// 暂停期间原样保留，恢复后继续等待执行完成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub token: MoveToken,
    /// 走子方
    pub mover: Side,
    /// 是否由 AI 走出
    pub by_ai: bool,
}

/// 一局游戏的状态，新游戏时整体替换
#[derive(Debug, Clone)]
pub struct GameSession {
    /// 只读棋盘图
    pub board: Arc<BoardGraph>,
    /// 游戏模式
    pub mode: GameMode,
    /// 玩家所属阵营（双人模式下为先手方）
    pub player_side: Side,
    /// 当前走子方
    pub side_to_move: Side,
    /// 执行中的走法
    pub pending_move: Option<PendingMove>,
    /// 已完成的步数
    pub move_count: usize,
    /// 游戏结果
    pub result: Option<GameResult>,
}

impl GameSession {
    /// 初始化新对局，玩家先走
    pub fn new(board: BoardGraph, mode: GameMode, player_side: Side) -> Self {
        Self {
            board: Arc::new(board),
            mode,
            player_side,
            side_to_move: player_side,
            pending_move: None,
            move_count: 0,
            result: None,
        }
    }

    /// AI 执的阵营（仅人机模式）
    pub fn ai_side(&self) -> Option<Side> {
        self.mode.is_pve().then(|| self.player_side.opponent())
    }

    /// 走法执行完成，切换走子方
    pub fn finish_move(&mut self) -> Option<PendingMove> {
        let finished = self.pending_move.take();
        if finished.is_some() {
            self.move_count += 1;
            self.side_to_move = self.side_to_move.opponent();
        }
        finished
    }

    /// 判断玩家是否获胜（仅人机模式有意义）
    pub fn is_player_win(&self) -> Option<bool> {
        self.result.map(|r| r.winner() == self.player_side)
    }
}
