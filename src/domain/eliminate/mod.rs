// 盤面の消去判定 - 4個以上つながった同色を消し、巻き込まれたおじゃまも消す

mod detector;
mod removal;

use crate::constants::{GROUP_BONUS, H, PLAYABLE_COLORS, W};
use crate::domain::board::{Board, CellGrid, StridedBoard, Strides};
use crate::vlog;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 1回の消去パスで使う訪問済みフラグ（`visited[x][y]`）
pub(crate) type Visited = [[bool; H]; W];

/// 上下左右の隣接マス（盤面内のみ）
///
/// 検出と消去で同じ隣接関係を使うこと。ずれると消し残しが出る。
#[inline]
pub(crate) fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    const DIRS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
    DIRS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < W && ny < H).then_some((nx, ny))
    })
}

/// 連結ボーナス（グループサイズが表を超えたら末尾の値）
#[inline]
pub fn group_bonus(size: usize) -> u32 {
    GROUP_BONUS[size.min(GROUP_BONUS.len() - 1)]
}

/// 1回の消去パスの集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    /// 空になったマスの総数（おじゃま込み）
    pub cleared: u32,
    /// 消えた色の種類数
    pub colors: u32,
    /// 連結ボーナスの合計
    pub bonus: u32,
    /// 消えた色ぷよの数（おじゃま抜き）
    pub popped: u32,
    /// 消えたグループ数
    pub groups: u32,
}

impl Elimination {
    /// (消えたマス数, 色数, ボーナス)
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.cleared, self.colors, self.bonus)
    }

    pub fn is_empty(&self) -> bool {
        self.cleared == 0
    }
}

/// 消去パスを1回行い、盤面をその場で書き換える
///
/// x 外側・y 内側の順に全マスを起点候補として走査する。同じグループは
/// 一度しか検出されず、4個以上なら元の盤面にあった連結全体が消える。
pub fn eliminate<G: CellGrid + ?Sized>(grid: &mut G) -> Elimination {
    let mut visited: Visited = [[false; H]; W];
    let mut counted = [false; PLAYABLE_COLORS];
    let mut result = Elimination::default();

    for x in 0..W {
        for y in 0..H {
            if !detector::is_eliminable(&*grid, &mut visited, x, y) {
                continue;
            }

            let color = grid.cell(x, y);
            let removal = removal::remove(grid, color.symbol(), x, y);

            result.cleared += removal.total();
            result.popped += removal.popped;
            result.bonus += group_bonus(removal.popped as usize);
            result.groups += 1;

            let idx = color.color_index();
            if !counted[idx] {
                counted[idx] = true;
                result.colors += 1;
            }

            vlog!(
                "[消去] {} {}個 (おじゃま{}) 起点=({}, {})",
                color.name(),
                removal.popped,
                removal.garbage,
                x,
                y
            );
        }
    }

    result
}

/// 外部バッファをストライドで指定して消去する
pub fn eliminate_strided(buf: &mut [u8], strides: Strides) -> Result<Elimination> {
    let mut view = StridedBoard::new(buf, strides)?;
    Ok(eliminate(&mut view))
}

impl Board {
    /// この盤面に消去パスを1回適用
    pub fn eliminate(&mut self) -> Elimination {
        eliminate(self)
    }
}
