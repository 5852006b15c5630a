// Board型 - 6×12の盤面を表現

use crate::constants::{CELLS, H, SYM_EMPTY, W};
use crate::domain::board::cell::Cell;
use crate::domain::board::layout::{CellGrid, Strides};
use anyhow::{anyhow, Result};
use std::fmt;

/// 6×12の盤面（左下が原点、y は上向き）
///
/// 内部は列優先のバイト列（`index = x * H + y`、ストライド `(H, 1)`）。
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// 新しい空の盤面を作成
    pub fn new() -> Self {
        Self {
            cells: [SYM_EMPTY; CELLS],
        }
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        x * H + y
    }

    /// ストライド表現
    pub fn strides() -> Strides {
        Strides::COLUMN_MAJOR
    }

    /// セルを取得（範囲外はNone）
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= W || y >= H {
            return None;
        }
        Some(Cell::from_symbol(self.cells[Self::index(x, y)]))
    }

    /// セルを設定
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        if x >= W || y >= H {
            return Err(anyhow!("座標が範囲外: ({}, {})", x, y));
        }
        self.cells[Self::index(x, y)] = cell.symbol();
        Ok(())
    }

    /// 生のバイト列（列優先）
    pub fn as_bytes(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// 列優先バイト列から構築（記号は検証しない）
    pub fn from_bytes(cells: [u8; CELLS]) -> Self {
        Self { cells }
    }

    /// 指定セルの個数
    pub fn count(&self, cell: Cell) -> usize {
        let sym = cell.symbol();
        self.cells.iter().filter(|&&c| c == sym).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == SYM_EMPTY)
    }

    /// 列の高さ（最も低い空きマスの y。満杯なら H）
    pub fn column_height(&self, x: usize) -> usize {
        (0..H)
            .find(|&y| self.cells[Self::index(x, y)] == SYM_EMPTY)
            .unwrap_or(H)
    }

    /// 1個落とす。列が満杯なら何もせず false
    pub fn drop_bean(&mut self, x: usize, cell: Cell) -> Result<bool> {
        if x >= W {
            return Err(anyhow!("列が範囲外: {}", x));
        }
        if cell == Cell::Empty || matches!(cell, Cell::Unknown(_)) {
            return Err(anyhow!("落とせないセル: {:?}", cell));
        }
        let y = self.column_height(x);
        if y >= H {
            return Ok(false);
        }
        self.cells[Self::index(x, y)] = cell.symbol();
        Ok(true)
    }

    /// 重力適用（空きを詰める）。何か動いたら true
    pub fn apply_gravity(&mut self) -> bool {
        let mut moved = false;
        for x in 0..W {
            let mut lowest_free = 0;
            for y in 0..H {
                let i = Self::index(x, y);
                if self.cells[i] == SYM_EMPTY {
                    continue;
                }
                if y != lowest_free {
                    self.cells.swap(i, Self::index(x, lowest_free));
                    moved = true;
                }
                lowest_free += 1;
            }
        }
        moved
    }

    /// 上の行から並べた文字列群から構築（足りない上段は空）
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() > H {
            return Err(anyhow!("行数が多すぎます: {}", rows.len()));
        }
        let mut board = Self::new();
        let top_pad = H - rows.len();
        for (i, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != W {
                return Err(anyhow!(
                    "{}行目の文字数が不正: 期待{}、実際{}",
                    i + 1,
                    W,
                    chars.len()
                ));
            }
            let y = H - 1 - (top_pad + i);
            for (x, &ch) in chars.iter().enumerate() {
                board.set(x, y, Cell::from_char(ch)?)?;
            }
        }
        Ok(board)
    }

    /// 改行区切りのテキストから構築
    pub fn from_text(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        // 前後の空行は落とす
        let start = rows.iter().position(|r| !r.is_empty()).unwrap_or(rows.len());
        let end = rows.iter().rposition(|r| !r.is_empty()).map_or(start, |e| e + 1);
        Self::from_rows(&rows[start..end])
    }

    /// テキスト表現（上の行から12行、空は '.'）
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity((W + 1) * H);
        for y in (0..H).rev() {
            for x in 0..W {
                s.push(Cell::from_symbol(self.cells[Self::index(x, y)]).to_char());
            }
            s.push('\n');
        }
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for line in self.to_text().lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl CellGrid for Board {
    #[inline]
    fn symbol(&self, x: usize, y: usize) -> u8 {
        self.cells[Self::index(x, y)]
    }

    #[inline]
    fn set_symbol(&mut self, x: usize, y: usize, symbol: u8) {
        self.cells[Self::index(x, y)] = symbol;
    }
}
