//! 格点类型与分类

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// 格点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// 公路
    Normal,
    /// 铁路
    Railroad,
    /// 行营（可斜走，驻守棋子不可被吃）
    Camp,
    /// 大本营
    HQ,
}

impl CellType {
    /// 标签后缀（只有行营和大本营需要标注）
    pub fn label_suffix(&self) -> Option<&'static str> {
        match self {
            CellType::Camp => Some("Camp"),
            CellType::HQ => Some("HQ"),
            CellType::Railroad | CellType::Normal => None,
        }
    }
}

/// 根据坐标确定格点类型
///
/// 先把行号映射到半场再判断，红黑两方的布局关于山界对称。
/// 判断顺序不能调换：行营和大本营的坐标同样满足铁路/公路的条件。
/// 调用方保证坐标在棋盘内。
pub fn classify(col: u8, row: u8) -> CellType {
    let local_row = Coordinate::new_unchecked(col, row).local_row();

    // 1. 行营 (1,2) (3,2) (2,3) (1,4) (3,4)
    let is_camp = (local_row == 2 && (col == 1 || col == 3))
        || (local_row == 3 && col == 2)
        || (local_row == 4 && (col == 1 || col == 3));
    if is_camp {
        return CellType::Camp;
    }

    // 2. 大本营 (1,0) (3,0)
    if local_row == 0 && (col == 1 || col == 3) {
        return CellType::HQ;
    }

    // 3. 铁路：底线后一行、前线，以及左右两条边线
    // 最底行 (local_row == 0) 不是铁路
    if local_row == 1 || local_row == 5 || col == 0 || col == 4 {
        return CellType::Railroad;
    }

    CellType::Normal
}

/// 棋盘格点
///
/// 邻居只记录坐标，格点本身由 `BoardGraph` 统一持有。
/// 只能由拓扑构建器创建。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coordinate: Coordinate,
    cell_type: CellType,
    neighbors: BTreeSet<Coordinate>,
}

impl Cell {
    /// 创建没有邻居的格点，类型由坐标决定
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            cell_type: classify(coordinate.col, coordinate.row),
            neighbors: BTreeSet::new(),
        }
    }

    /// 添加邻居，重复添加或添加自身都会被忽略
    pub(crate) fn add_neighbor(&mut self, neighbor: Coordinate) {
        if neighbor != self.coordinate {
            self.neighbors.insert(neighbor);
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn neighbors(&self) -> &BTreeSet<Coordinate> {
        &self.neighbors
    }

    pub fn is_camp(&self) -> bool {
        self.cell_type == CellType::Camp
    }

    /// 调试标签，例如 `"1,2\nCamp"`
    pub fn label(&self) -> String {
        let mut label = format!("{},{}", self.coordinate.col, self.coordinate.row);
        if let Some(suffix) = self.cell_type.label_suffix() {
            label.push('\n');
            label.push_str(suffix);
        }
        label
    }
}
