//! 网格拓扑构建

use super::add_center;
use crate::net::{CenterId, Router, RouterError};
use crate::queue::QueueKind;

#[derive(Debug, Clone)]
pub struct GridOpts {
    pub rows: usize,
    pub cols: usize,
    /// 同一行相邻中心之间的权重
    pub row_weight: i64,
    /// 同一列相邻中心之间的权重
    pub col_weight: i64,
    pub queue: QueueKind,
    pub monitored: bool,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            row_weight: 1,
            col_weight: 1,
            queue: QueueKind::Fifo,
            monitored: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridTopology {
    pub rows: usize,
    pub cols: usize,
    pub centers: Vec<CenterId>,
}

impl GridTopology {
    pub fn center(&self, row: usize, col: usize) -> &CenterId {
        &self.centers[row * self.cols + col]
    }
}

/// 构建 rows x cols 网格，中心命名为 `r{row}c{col}`
pub fn build_grid(router: &mut Router, opts: &GridOpts) -> Result<GridTopology, RouterError> {
    let mut centers = Vec::with_capacity(opts.rows.saturating_mul(opts.cols));
    for row in 0..opts.rows {
        for col in 0..opts.cols {
            let id = format!("r{row}c{col}");
            add_center(router, id.clone(), opts.queue, opts.monitored)?;
            centers.push(CenterId(id));
        }
    }

    let topo = GridTopology {
        rows: opts.rows,
        cols: opts.cols,
        centers,
    };

    for row in 0..opts.rows {
        for col in 0..opts.cols {
            let here = topo.center(row, col).as_str();
            if col + 1 < opts.cols {
                router.connect(here, topo.center(row, col + 1).as_str(), opts.row_weight)?;
            }
            if row + 1 < opts.rows {
                router.connect(here, topo.center(row + 1, col).as_str(), opts.col_weight)?;
            }
        }
    }

    Ok(topo)
}
