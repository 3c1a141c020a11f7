//! 坐标与阵营

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, MOUNTAIN_UPPER_ROW};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（在下方，行 0-5）
    Red,
    /// 黑方（在上方，行 6-11）
    Black,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Black => "Black",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 棋盘坐标
///
/// 排序先按列再按行，`edges()` 依赖这个顺序输出无向边。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// 列 (0-4)
    pub col: u8,
    /// 行 (0-11)
    pub row: u8,
}

impl Coordinate {
    /// 创建新坐标
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < BOARD_WIDTH && (row as usize) < BOARD_HEIGHT {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.col as usize) < BOARD_WIDTH && (self.row as usize) < BOARD_HEIGHT
    }

    /// 映射到半场行号 (0-5)，两个半场关于山界对称
    pub fn local_row(&self) -> u8 {
        if self.row >= MOUNTAIN_UPPER_ROW {
            (BOARD_HEIGHT as u8 - 1) - self.row
        } else {
            self.row
        }
    }

    /// 所属半场
    pub fn side(&self) -> Side {
        if self.row < MOUNTAIN_UPPER_ROW {
            Side::Red
        } else {
            Side::Black
        }
    }

    /// 获取偏移后的坐标
    pub fn offset(&self, dc: i8, dr: i8) -> Option<Coordinate> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if col >= 0 && (col as usize) < BOARD_WIDTH && row >= 0 && (row as usize) < BOARD_HEIGHT {
            Some(Coordinate {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_WIDTH + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Coordinate {
                col: (index % BOARD_WIDTH) as u8,
                row: (index / BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }

    /// 按行优先顺序遍历全部 60 个坐标
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(|index| Coordinate {
            col: (index % BOARD_WIDTH) as u8,
            row: (index / BOARD_WIDTH) as u8,
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
