// 消去処理（同色を再帰的に空にし、隣接おじゃまを巻き込む）

use super::neighbors;
use crate::constants::{SYM_EMPTY, SYM_GARBAGE};
use crate::domain::board::CellGrid;

/// 1グループ分の消去結果
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Removal {
    /// 消えた同色ぷよ（起点を含む）
    pub popped: u32,
    /// 巻き込まれたおじゃま
    pub garbage: u32,
}

impl Removal {
    pub fn total(&self) -> u32 {
        self.popped + self.garbage
    }
}

/// (x, y) から `color` の連結を空にする
///
/// おじゃまは空にするが、そこから先へは広げない。再帰の深さは盤面サイズで頭打ち。
pub(crate) fn remove<G: CellGrid + ?Sized>(grid: &mut G, color: u8, x: usize, y: usize) -> Removal {
    let mut removal = Removal { popped: 1, garbage: 0 };
    grid.set_symbol(x, y, SYM_EMPTY);

    for (nx, ny) in neighbors(x, y) {
        let s = grid.symbol(nx, ny);
        if s == color {
            let sub = remove(grid, color, nx, ny);
            removal.popped += sub.popped;
            removal.garbage += sub.garbage;
        } else if s == SYM_GARBAGE {
            grid.set_symbol(nx, ny, SYM_EMPTY);
            removal.garbage += 1;
        }
    }

    removal
}
