// グループ検出（4個見つかった時点で打ち切る連結判定）

use super::{neighbors, Visited};
use crate::constants::POP_THRESHOLD;
use crate::domain::board::{Cell, CellGrid};

/// 作業スタックの容量
///
/// 一致する隣接マスを見つけたときだけ積み、4個目で即終了するので
/// 積まれたまま残るのは高々3個。打ち切りをやめるならこの上限も成り立たない。
const STACK_CAP: usize = POP_THRESHOLD - 1;

/// (sx, sy) を起点に同色の連結を探索し、4個以上つながっていれば true
///
/// 見つけたマスはその場で `visited` に記録する。4個未満で探索し切った場合は
/// グループ全体が訪問済みになるので、同じグループを二度調べることはない。
/// 色ぷよ以外（おじゃま・空・未知）や訪問済みのマスは起点にならない。
pub(crate) fn is_eliminable<G: CellGrid + ?Sized>(
    grid: &G,
    visited: &mut Visited,
    sx: usize,
    sy: usize,
) -> bool {
    if visited[sx][sy] {
        return false;
    }
    let color = grid.symbol(sx, sy);
    if !Cell::from_symbol(color).is_playable() {
        return false;
    }

    let mut stack = [(0usize, 0usize); STACK_CAP];
    let mut len = 1;
    stack[0] = (sx, sy);
    visited[sx][sy] = true;
    let mut found = 1;

    while len > 0 {
        len -= 1;
        let (x, y) = stack[len];

        for (nx, ny) in neighbors(x, y) {
            if visited[nx][ny] || grid.symbol(nx, ny) != color {
                continue;
            }
            visited[nx][ny] = true;
            found += 1;
            if found >= POP_THRESHOLD {
                return true;
            }
            stack[len] = (nx, ny);
            len += 1;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{H, W};
    use crate::domain::board::Board;

    fn fresh() -> Visited {
        [[false; H]; W]
    }

    #[test]
    fn three_in_a_row_is_not_eliminable_but_gets_visited() {
        let board = Board::from_rows(&["rrr..."]).unwrap();
        let mut visited = fresh();
        assert!(!is_eliminable(&board, &mut visited, 0, 0));
        assert!(visited[0][0] && visited[1][0] && visited[2][0]);
        assert!(!visited[3][0]);
    }

    #[test]
    fn stops_as_soon_as_four_are_found() {
        let board = Board::from_rows(&["gggggg"]).unwrap();
        let mut visited = fresh();
        assert!(is_eliminable(&board, &mut visited, 0, 0));
        let marked = (0..W).filter(|&x| visited[x][0]).count();
        assert_eq!(marked, 4);
    }

    #[test]
    fn branching_group_never_overflows_stack() {
        // 十字形（中心から4方向に伸びる）
        let board = Board::from_rows(&[".b....", "bbb...", ".b...."]).unwrap();
        let mut visited = fresh();
        assert!(is_eliminable(&board, &mut visited, 1, 1));
    }

    #[test]
    fn garbage_empty_and_visited_never_seed() {
        let board = Board::from_rows(&["kkkk..", "kkkk.."]).unwrap();
        let mut visited = fresh();
        assert!(!is_eliminable(&board, &mut visited, 0, 0));
        assert!(!is_eliminable(&board, &mut visited, 5, 0));
        assert!(!visited[0][0]);

        let board = Board::from_rows(&["yyyy.."]).unwrap();
        let mut visited = fresh();
        visited[0][0] = true;
        assert!(!is_eliminable(&board, &mut visited, 0, 0));
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let board = Board::from_rows(&["p.p...", ".p.p.."]).unwrap();
        let mut visited = fresh();
        for x in 0..W {
            for y in 0..2 {
                assert!(!is_eliminable(&board, &mut visited, x, y));
            }
        }
    }
}
