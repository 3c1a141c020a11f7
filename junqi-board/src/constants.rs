//! 棋盘常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 5;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 12;

/// 格点总数
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// 山界下侧的行（红方前线铁路）
pub const MOUNTAIN_LOWER_ROW: u8 = 5;

/// 山界上侧的行（黑方前线铁路）
pub const MOUNTAIN_UPPER_ROW: u8 = 6;

/// 山界阻断的列（其余列可以跨越山界）
pub const MOUNTAIN_BLOCKED_COLS: [u8; 2] = [1, 3];

/// 正交方向（上下左右）
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// 斜向方向（只有行营相关才连通）
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
