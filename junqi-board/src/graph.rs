//! 棋盘连通图
//!
//! 构建完成后只读，供规则检查、AI 和渲染共享查询。

use std::collections::BTreeSet;

use crate::cell::{Cell, CellType};
use crate::coord::{Coordinate, Side};
use crate::error::{BoardError, Result};

/// 棋盘图：按坐标索引的格点集合及其邻接关系
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGraph {
    /// 5x12 格点，索引为 row * 5 + col
    cells: Vec<Cell>,
}

impl BoardGraph {
    /// 由拓扑构建器调用，格点必须按索引顺序排列
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// 获取指定坐标的格点
    pub fn cell_at(&self, coord: Coordinate) -> Result<&Cell> {
        if !coord.is_valid() {
            return Err(BoardError::NotFound {
                col: coord.col,
                row: coord.row,
            });
        }
        self.cells
            .get(coord.to_index())
            .ok_or(BoardError::NotFound {
                col: coord.col,
                row: coord.row,
            })
    }

    /// 获取指定坐标的全部邻居
    pub fn neighbors_of(&self, coord: Coordinate) -> Result<&BTreeSet<Coordinate>> {
        self.cell_at(coord).map(Cell::neighbors)
    }

    /// 两个坐标之间是否有边
    pub fn is_adjacent(&self, a: Coordinate, b: Coordinate) -> bool {
        self.neighbors_of(a).is_ok_and(|n| n.contains(&b))
    }

    /// 坐标是否在棋盘内
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cell_at(coord).is_ok()
    }

    /// 格点数量
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 按行优先顺序遍历所有格点
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// 指定类型的所有格点
    pub fn cells_of_type(&self, cell_type: CellType) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.cell_type() == cell_type)
    }

    /// 所属半场
    pub fn side_of(&self, coord: Coordinate) -> Result<Side> {
        self.cell_at(coord).map(|c| c.coordinate().side())
    }

    /// 每条无向边只输出一次，`a < b`
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.cells.iter().flat_map(|cell| {
            let from = cell.coordinate();
            cell.neighbors()
                .iter()
                .filter(move |to| from < **to)
                .map(move |to| (from, *to))
        })
    }

    /// 无向边数量
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
