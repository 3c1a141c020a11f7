//! 军棋棋盘拓扑库
//!
//! 包含:
//! - 坐标、阵营等核心数据结构
//! - 格点类型分类（公路、铁路、行营、大本营）
//! - 棋盘拓扑构建（山界阻断、行营斜线）
//! - 只读的棋盘连通图，供规则检查和 AI 查询

mod cell;
mod constants;
mod coord;
mod error;
mod graph;
mod topology;

pub use cell::{classify, Cell, CellType};
pub use constants::*;
pub use coord::{Coordinate, Side};
pub use error::{BoardError, Result};
pub use graph::BoardGraph;
pub use topology::BoardTopology;
