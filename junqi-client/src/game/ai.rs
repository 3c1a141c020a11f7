//! AI 协作者接口
//!
//! 控制器只负责通知 AI 轮到它走，不计算走法

use std::sync::Arc;

use junqi_board::{BoardGraph, Side};

use super::MoveToken;

/// AI 玩家
pub trait AiPlayer {
    /// 轮到 AI 走棋
    ///
    /// 能立即给出走法时返回 `Some`，控制器会把它当作 AI 走法完成处理；
    /// 否则返回 `None`，之后通过 `PhaseEvent::AiMoveResolved` 通知。
    fn begin_turn(&mut self, board: Arc<BoardGraph>, side: Side) -> Option<MoveToken>;

    /// 暂停思考
    fn suspend(&mut self) {}

    /// 恢复思考
    fn resume(&mut self) {}
}
