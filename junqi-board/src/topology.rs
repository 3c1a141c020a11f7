//! 棋盘拓扑构建
//!
//! 分两步构建：先为 5x12 的每个坐标创建格点，再按几何规则连边。
//! 连边阶段依赖第一步已经填满所有坐标。
//!
//! 连边规则：
//! - 正交相邻的格点互通，但山界（第 5、6 行之间）只在第 0、2、4 列可以通过
//! - 斜向相邻的格点只有一端是行营时才互通

use std::collections::VecDeque;

use tracing::debug;

use crate::cell::{classify, Cell, CellType};
use crate::constants::{
    CELL_COUNT, DIAGONAL_STEPS, MOUNTAIN_BLOCKED_COLS, MOUNTAIN_LOWER_ROW, MOUNTAIN_UPPER_ROW,
    ORTHOGONAL_STEPS,
};
use crate::coord::Coordinate;
use crate::error::{BoardError, Result};
use crate::graph::BoardGraph;

/// 棋盘拓扑构建器
pub struct BoardTopology;

impl BoardTopology {
    /// 构建完整的棋盘图
    ///
    /// 返回前校验所有不变量，任何一条不成立都说明构建逻辑有缺陷，
    /// 此时返回 `BoardError::Topology`，不会交出部分连通的图。
    pub fn build() -> Result<BoardGraph> {
        let mut cells = Self::instantiate();
        Self::connect(&mut cells);

        let graph = BoardGraph::from_cells(cells);
        Self::validate(&graph)?;

        debug!(
            "棋盘拓扑构建完成: {} 个格点, {} 条边",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// 第一步：创建所有格点
    fn instantiate() -> Vec<Cell> {
        Coordinate::all().map(Cell::new).collect()
    }

    /// 第二步：建立连接关系
    fn connect(cells: &mut [Cell]) {
        for index in 0..cells.len() {
            let current = cells[index].coordinate();
            let current_type = cells[index].cell_type();

            // 上下左右
            for (dc, dr) in ORTHOGONAL_STEPS {
                let Some(neighbor) = current.offset(dc, dr) else {
                    continue;
                };
                if !Self::is_mountain_blocked(current, neighbor) {
                    Self::link(cells, current, neighbor);
                }
            }

            // 斜向：自己是行营，或者对方是行营
            for (dc, dr) in DIAGONAL_STEPS {
                let Some(neighbor) = current.offset(dc, dr) else {
                    continue;
                };
                let neighbor_type = cells[neighbor.to_index()].cell_type();
                if current_type == CellType::Camp || neighbor_type == CellType::Camp {
                    Self::link(cells, current, neighbor);
                }
            }
        }
    }

    /// 双向连边（幂等）
    fn link(cells: &mut [Cell], a: Coordinate, b: Coordinate) {
        cells[a.to_index()].add_neighbor(b);
        cells[b.to_index()].add_neighbor(a);
    }

    /// 山界阻断：跨越第 5、6 行且位于第 1 或第 3 列
    pub fn is_mountain_blocked(from: Coordinate, to: Coordinate) -> bool {
        let crossing = (from.row == MOUNTAIN_LOWER_ROW && to.row == MOUNTAIN_UPPER_ROW)
            || (from.row == MOUNTAIN_UPPER_ROW && to.row == MOUNTAIN_LOWER_ROW);
        crossing && MOUNTAIN_BLOCKED_COLS.contains(&from.col)
    }

    /// 校验构建结果
    fn validate(graph: &BoardGraph) -> Result<()> {
        if graph.len() != CELL_COUNT {
            return Err(topology(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                graph.len()
            )));
        }

        for (index, cell) in graph.cells().enumerate() {
            let here = cell.coordinate();
            if here.to_index() != index {
                return Err(topology(format!("cell {} stored at index {}", here, index)));
            }
            if cell.cell_type() != classify(here.col, here.row) {
                return Err(topology(format!(
                    "cell {} has type {:?}",
                    here,
                    cell.cell_type()
                )));
            }

            for &there in cell.neighbors() {
                if there == here {
                    return Err(topology(format!("{} lists itself as a neighbor", here)));
                }
                let back = graph
                    .neighbors_of(there)
                    .map_err(|_| topology(format!("{} links to off-board {}", here, there)))?;
                if !back.contains(&here) {
                    return Err(topology(format!("edge {} -> {} is one-way", here, there)));
                }

                let dc = here.col.abs_diff(there.col);
                let dr = here.row.abs_diff(there.row);
                match (dc, dr) {
                    (0, 1) | (1, 0) => {
                        if Self::is_mountain_blocked(here, there) {
                            return Err(topology(format!(
                                "edge {} - {} crosses the mountain",
                                here, there
                            )));
                        }
                    }
                    (1, 1) => {
                        let there_type = graph.cell_at(there)?.cell_type();
                        if !cell.is_camp() && there_type != CellType::Camp {
                            return Err(topology(format!(
                                "diagonal edge {} - {} has no camp endpoint",
                                here, there
                            )));
                        }
                    }
                    _ => {
                        return Err(topology(format!(
                            "edge {} - {} is not a unit step",
                            here, there
                        )));
                    }
                }
            }
        }

        // 山界通道：第 0、2、4 列必须能跨越
        for col in 0..5u8 {
            if MOUNTAIN_BLOCKED_COLS.contains(&col) {
                continue;
            }
            let lower = Coordinate::new_unchecked(col, MOUNTAIN_LOWER_ROW);
            let upper = Coordinate::new_unchecked(col, MOUNTAIN_UPPER_ROW);
            if !graph.is_adjacent(lower, upper) {
                return Err(topology(format!(
                    "mountain pass {} - {} is missing",
                    lower, upper
                )));
            }
        }

        Self::check_connected(graph)
    }

    /// 任意格点都能到达其他所有格点
    fn check_connected(graph: &BoardGraph) -> Result<()> {
        let mut visited = vec![false; graph.len()];
        let mut queue = VecDeque::new();
        let start = Coordinate::new_unchecked(0, 0);
        visited[start.to_index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &next in graph.neighbors_of(current)? {
                if !visited[next.to_index()] {
                    visited[next.to_index()] = true;
                    queue.push_back(next);
                }
            }
        }

        match visited.iter().position(|seen| !seen) {
            Some(index) => Err(topology(format!(
                "cell {:?} is unreachable",
                Coordinate::from_index(index)
            ))),
            None => Ok(()),
        }
    }
}

fn topology(reason: String) -> BoardError {
    BoardError::Topology { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: u8, row: u8) -> Coordinate {
        Coordinate::new_unchecked(col, row)
    }

    #[test]
    fn test_build_succeeds() {
        let graph = BoardTopology::build().unwrap();
        assert_eq!(graph.len(), 60);
        for coord in Coordinate::all() {
            assert_eq!(graph.cell_at(coord).unwrap().coordinate(), coord);
        }
    }

    #[test]
    fn test_neighbors_symmetric() {
        let graph = BoardTopology::build().unwrap();
        for a in Coordinate::all() {
            for b in Coordinate::all() {
                assert_eq!(
                    graph.is_adjacent(a, b),
                    graph.is_adjacent(b, a),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        let graph = BoardTopology::build().unwrap();
        for cell in graph.cells() {
            assert!(!cell.neighbors().contains(&cell.coordinate()));
        }
    }

    #[test]
    fn test_mountain_blocked_columns() {
        let graph = BoardTopology::build().unwrap();
        assert!(!graph.is_adjacent(c(1, 5), c(1, 6)));
        assert!(!graph.is_adjacent(c(3, 5), c(3, 6)));
    }

    #[test]
    fn test_mountain_passes() {
        let graph = BoardTopology::build().unwrap();
        assert!(graph.is_adjacent(c(0, 5), c(0, 6)));
        assert!(graph.is_adjacent(c(2, 5), c(2, 6)));
        assert!(graph.is_adjacent(c(4, 5), c(4, 6)));
    }

    #[test]
    fn test_is_mountain_blocked() {
        assert!(BoardTopology::is_mountain_blocked(c(1, 5), c(1, 6)));
        assert!(BoardTopology::is_mountain_blocked(c(3, 6), c(3, 5)));
        assert!(!BoardTopology::is_mountain_blocked(c(2, 5), c(2, 6)));
        assert!(!BoardTopology::is_mountain_blocked(c(1, 4), c(1, 5)));
        assert!(!BoardTopology::is_mountain_blocked(c(1, 5), c(2, 5)));
    }

    #[test]
    fn test_camp_diagonals() {
        let graph = BoardTopology::build().unwrap();
        for corner in [c(1, 2), c(3, 2), c(1, 4), c(3, 4)] {
            assert!(graph.is_adjacent(c(2, 3), corner), "{corner}");
        }
        // 对方半场的中心行营
        for corner in [c(1, 9), c(3, 9), c(1, 7), c(3, 7)] {
            assert!(graph.is_adjacent(c(2, 8), corner), "{corner}");
        }
        // 行营到非行营的斜线同样连通
        assert!(graph.is_adjacent(c(1, 2), c(0, 1)));
        assert!(graph.is_adjacent(c(1, 4), c(2, 5)));
    }

    #[test]
    fn test_no_diagonal_without_camp() {
        let graph = BoardTopology::build().unwrap();
        assert!(!graph.is_adjacent(c(0, 0), c(1, 1)));
        assert!(!graph.is_adjacent(c(2, 5), c(1, 6)));

        for (a, b) in graph.edges() {
            if a.col != b.col && a.row != b.row {
                let a_camp = graph.cell_at(a).unwrap().is_camp();
                let b_camp = graph.cell_at(b).unwrap().is_camp();
                assert!(a_camp || b_camp, "{a} - {b}");
            }
        }
    }

    #[test]
    fn test_edge_count() {
        let graph = BoardTopology::build().unwrap();
        let (orthogonal, diagonal): (Vec<_>, Vec<_>) = graph
            .edges()
            .partition(|(a, b)| a.col == b.col || a.row == b.row);
        // 横向 12*4 + 纵向 5*11 - 山界阻断 2
        assert_eq!(orthogonal.len(), 101);
        // 每个半场 16 条行营斜线
        assert_eq!(diagonal.len(), 32);
        assert_eq!(graph.edge_count(), 133);
    }

    #[test]
    fn test_hq_neighbors() {
        let graph = BoardTopology::build().unwrap();
        let neighbors: Vec<_> = graph.neighbors_of(c(1, 0)).unwrap().iter().copied().collect();
        assert_eq!(neighbors, vec![c(0, 0), c(1, 1), c(2, 0)]);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let first = BoardTopology::build().unwrap();
        let second = BoardTopology::build().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.edges().collect::<Vec<_>>(),
            second.edges().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_validate_rejects_one_way_edge() {
        let mut cells = BoardTopology::instantiate();
        BoardTopology::connect(&mut cells);
        cells[c(0, 0).to_index()].add_neighbor(c(2, 2));
        let graph = BoardGraph::from_cells(cells);
        assert!(matches!(
            BoardTopology::validate(&graph),
            Err(BoardError::Topology { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_disconnected_graph() {
        let graph = BoardGraph::from_cells(BoardTopology::instantiate());
        assert!(matches!(
            BoardTopology::validate(&graph),
            Err(BoardError::Topology { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_misplaced_cells() {
        let mut cells = BoardTopology::instantiate();
        BoardTopology::connect(&mut cells);
        cells.swap(0, 1);
        let graph = BoardGraph::from_cells(cells.clone());
        assert!(matches!(
            BoardTopology::validate(&graph),
            Err(BoardError::Topology { .. })
        ));

        cells.truncate(2);
        let graph = BoardGraph::from_cells(cells);
        assert!(matches!(
            BoardTopology::validate(&graph),
            Err(BoardError::Topology { .. })
        ));
    }
}
