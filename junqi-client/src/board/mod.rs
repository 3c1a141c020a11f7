//! 棋盘布局
//!
//! 只负责坐标换算，渲染交给外部

use junqi_board::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH, MOUNTAIN_LOWER_ROW, MOUNTAIN_UPPER_ROW};
use serde::{Deserialize, Serialize};

/// 屏幕上的点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 棋盘布局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// 棋盘在屏幕上的起始位置 (第 0 行第 0 列)
    pub start_position: Point,
    /// 格子间距
    pub grid_gap: Point,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            start_position: Point::new(60.0, 100.0),
            grid_gap: Point::new(80.0, 80.0),
        }
    }
}

impl BoardLayout {
    /// 将棋盘坐标转换为屏幕坐标
    ///
    /// 山界（第 5 行和第 6 行之间）额外留出半个格距
    pub fn board_to_screen(&self, coord: Coordinate) -> Point {
        let mut y = self.start_position.y + coord.row as f32 * self.grid_gap.y;
        if coord.row >= MOUNTAIN_UPPER_ROW {
            y += self.grid_gap.y * 0.5;
        }
        Point::new(self.start_position.x + coord.col as f32 * self.grid_gap.x, y)
    }

    /// 将屏幕坐标转换为最近的棋盘坐标
    pub fn screen_to_board(&self, pos: Point) -> Option<Coordinate> {
        let gap = self.grid_gap;
        let rel_x = pos.x - self.start_position.x;
        let rel_y = pos.y - self.start_position.y;

        let col = (rel_x / gap.x + 0.5).floor() as i32;

        // 山界正中：第 5 行中心再往下 0.75 格
        let mountain_mid = (MOUNTAIN_LOWER_ROW as f32 + 0.75) * gap.y;
        let row = if rel_y >= mountain_mid {
            ((rel_y - gap.y * 0.5) / gap.y + 0.5).floor().max(MOUNTAIN_UPPER_ROW as f32) as i32
        } else {
            (rel_y / gap.y + 0.5).floor().min(MOUNTAIN_LOWER_ROW as f32) as i32
        };

        if (0..BOARD_WIDTH as i32).contains(&col) && (0..BOARD_HEIGHT as i32).contains(&row) {
            Coordinate::new(col as u8, row as u8)
        } else {
            None
        }
    }
}
