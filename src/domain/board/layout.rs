// ストライド指定による盤面アクセス

use crate::constants::{CELLS, H, W};
use crate::domain::board::cell::Cell;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 座標 (x, y) からバッファ上のオフセットを求めるストライド
///
/// `offset = origin + x * column + y * row`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strides {
    /// x が1増えたときの移動量
    pub column: usize,
    /// y が1増えたときの移動量
    pub row: usize,
    /// (0, 0) の位置（大きなバッファの一部を見る場合）
    pub origin: usize,
}

impl Strides {
    /// 列優先（`board[x][y]` 形式）
    pub const COLUMN_MAJOR: Strides = Strides { column: H, row: 1, origin: 0 };
    /// 行優先（`board[y][x]` 形式）
    pub const ROW_MAJOR: Strides = Strides { column: 1, row: W, origin: 0 };

    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row, origin: 0 }
    }

    pub const fn with_origin(self, origin: usize) -> Self {
        Self { origin, ..self }
    }

    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        self.origin + x * self.column + y * self.row
    }

    /// 長さ `len` のバッファに対して 6×12 全マスが範囲内かつ重複しないか検証
    pub fn validate(&self, len: usize) -> Result<()> {
        let last = self
            .column
            .checked_mul(W - 1)
            .and_then(|a| self.row.checked_mul(H - 1).and_then(|b| a.checked_add(b)))
            .and_then(|a| a.checked_add(self.origin))
            .ok_or_else(|| anyhow!("ストライドが大きすぎます: {:?}", self))?;
        if last >= len {
            return Err(anyhow!(
                "バッファが足りません: 最大オフセット{}、長さ{}",
                last,
                len
            ));
        }

        let mut offsets = [0usize; CELLS];
        for x in 0..W {
            for y in 0..H {
                offsets[x * H + y] = self.offset(x, y);
            }
        }
        offsets.sort_unstable();
        if let Some(w) = offsets.windows(2).find(|w| w[0] == w[1]) {
            return Err(anyhow!("ストライドが重複しています: オフセット{}", w[0]));
        }
        Ok(())
    }
}

impl Default for Strides {
    fn default() -> Self {
        Self::COLUMN_MAJOR
    }
}

/// 消去処理が使う盤面アクセスの抽象
///
/// 座標は x ∈ [0, W)、y ∈ [0, H) に限る。範囲外は呼び出し側の責任。
pub trait CellGrid {
    fn symbol(&self, x: usize, y: usize) -> u8;
    fn set_symbol(&mut self, x: usize, y: usize, symbol: u8);

    #[inline]
    fn cell(&self, x: usize, y: usize) -> Cell {
        Cell::from_symbol(self.symbol(x, y))
    }

    #[inline]
    fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.set_symbol(x, y, cell.symbol());
    }
}

/// 外部所有のバイト列をストライドで見るビュー
#[derive(Debug)]
pub struct StridedBoard<'a> {
    buf: &'a mut [u8],
    strides: Strides,
}

impl<'a> StridedBoard<'a> {
    /// ストライドを検証してビューを作成
    pub fn new(buf: &'a mut [u8], strides: Strides) -> Result<Self> {
        strides.validate(buf.len())?;
        Ok(Self { buf, strides })
    }

    /// テスト用: ビューの内容を列優先バイト列にコピー
    #[cfg(test)]
    pub(crate) fn to_column_major(&self) -> [u8; CELLS] {
        let mut out = [0u8; CELLS];
        for x in 0..W {
            for y in 0..H {
                out[Strides::COLUMN_MAJOR.offset(x, y)] = self.symbol(x, y);
            }
        }
        out
    }
}

impl CellGrid for StridedBoard<'_> {
    #[inline]
    fn symbol(&self, x: usize, y: usize) -> u8 {
        self.buf[self.strides.offset(x, y)]
    }

    #[inline]
    fn set_symbol(&mut self, x: usize, y: usize, symbol: u8) {
        self.buf[self.strides.offset(x, y)] = symbol;
    }
}
