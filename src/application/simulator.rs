// 盤面シミュレータ - 落下・連鎖解決・おじゃま・組ぷよの操作

use anyhow::{anyhow, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{H, SPAWN_COLUMN, W};
use crate::domain::board::{Board, Cell};
use crate::domain::chain::{step_score, ChainStep, Combo};
use crate::vlog;

/// 組ぷよ（回転前の上・下）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    top: Cell,
    bottom: Cell,
}

impl Pair {
    pub fn new(top: Cell, bottom: Cell) -> Result<Self> {
        for c in [top, bottom] {
            if !c.is_playable() {
                return Err(anyhow!("組ぷよに使えないセル: {:?}", c));
            }
        }
        Ok(Self { top, bottom })
    }
}

/// 組ぷよの置き方を表すValue Object
///
/// `orientation` は時計回りの90度回転数（0..4）。`position` は組ぷよが占める
/// 左端の列で、縦置き（0, 2）なら 0..6、横置き（1, 3）なら 0..5。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    orientation: u8,
    position: usize,
}

impl Move {
    pub fn new(orientation: u8, position: usize) -> Result<Self> {
        if orientation >= 4 {
            return Err(anyhow!("回転数は0..4: {}", orientation));
        }
        if position >= Self::positions(orientation) {
            return Err(anyhow!(
                "位置が範囲外: 回転{}で位置{}",
                orientation,
                position
            ));
        }
        Ok(Self {
            orientation,
            position,
        })
    }

    /// 回転数ごとの置ける位置の数
    fn positions(orientation: u8) -> usize {
        if orientation % 2 == 1 {
            W - 1
        } else {
            W
        }
    }

    /// 盤面を考えない全22通り
    pub fn all() -> impl Iterator<Item = Move> {
        (0..4u8).flat_map(|o| {
            (0..Self::positions(o)).map(move |p| Move {
                orientation: o,
                position: p,
            })
        })
    }

    fn is_horizontal(&self) -> bool {
        self.orientation % 2 == 1
    }
}

/// 1人分の盤面とゲーム状態
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    board: Board,
    game_over: bool,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// 出現列が埋まった状態で置こうとしたらゲームオーバー
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// 消せるものがなくなるまで 消去 → 重力 を繰り返す
    pub fn resolve(&mut self) -> Combo {
        let mut combo = Combo::new();
        loop {
            let e = self.board.eliminate();
            if e.is_empty() {
                break;
            }
            let link = combo.length + 1;
            let score = step_score(link, &e);
            vlog!(
                "[連鎖] {}連鎖目: 消去{} (色ぷよ{}) 色数{} ボーナス{} 得点{}",
                link,
                e.cleared,
                e.popped,
                e.colors,
                e.bonus,
                score
            );
            combo.add_step(ChainStep::new(link, e, score));
            self.board.apply_gravity();
        }
        combo
    }

    /// 複数のぷよを同時に落として連鎖を解決する
    ///
    /// 満杯の列に落としたぷよは消える。列や色が不正なら盤面を変えずにエラー。
    pub fn drop_beans(&mut self, drops: &[(usize, Cell)]) -> Result<Combo> {
        for &(x, cell) in drops {
            if x >= W {
                return Err(anyhow!("列が範囲外: {}", x));
            }
            if !cell.is_playable() && cell != Cell::Garbage {
                return Err(anyhow!("落とせないセル: {:?}", cell));
            }
        }
        for &(x, cell) in drops {
            self.board.drop_bean(x, cell)?;
        }
        Ok(self.resolve())
    }

    /// 1個落として連鎖を解決する
    pub fn drop_bean(&mut self, x: usize, cell: Cell) -> Result<Combo> {
        self.drop_beans(&[(x, cell)])
    }

    /// おじゃまを `n` 個降らせる。置けた個数を返す
    ///
    /// 6個ごとに1段ずつ全列へ落とし、端数は重複しない列をランダムに選ぶ。
    /// 盤面より上にはみ出した分は捨てる。
    pub fn drop_nuisance<R: Rng + ?Sized>(&mut self, n: u32, rng: &mut R) -> u32 {
        let n = n as usize;
        let mut placed = 0;

        for _ in 0..n / W {
            for x in 0..W {
                placed += self.drop_garbage(x);
            }
        }
        for x in rand::seq::index::sample(rng, W, n % W) {
            placed += self.drop_garbage(x);
        }

        vlog!("[おじゃま] 要求{} 設置{}", n, placed);
        placed
    }

    fn drop_garbage(&mut self, x: usize) -> u32 {
        match self.board.drop_bean(x, Cell::Garbage) {
            Ok(true) => 1,
            _ => 0,
        }
    }

    /// 最上段が空いているか
    fn top_is_free(&self, x: usize) -> bool {
        self.board.get(x, H - 1) == Some(Cell::Empty)
    }

    /// その置き方が可能か
    ///
    /// 組ぷよは出現列から左右へ移動するので、通り道の列の最上段が空いている
    /// 必要がある。180度回転は横向きを経由するため、出現列の左右どちらかが
    /// 空いていなければできない。
    pub fn can_make_move(&self, mv: Move) -> bool {
        if self.game_over {
            return false;
        }

        let p = mv.position;
        if p == SPAWN_COLUMN && mv.orientation == 0 {
            // 出現列が埋まっていても置ける（その場合はゲームオーバー）
            return true;
        }

        if mv.orientation == 2
            && !self.top_is_free(SPAWN_COLUMN - 1)
            && !self.top_is_free(SPAWN_COLUMN + 1)
        {
            return false;
        }

        let (lo, hi) = if p >= SPAWN_COLUMN {
            let right = p + usize::from(mv.is_horizontal());
            (SPAWN_COLUMN, right)
        } else {
            (p, SPAWN_COLUMN)
        };
        (lo..=hi).all(|x| self.top_is_free(x))
    }

    /// 組ぷよを置く。置けない場合は None
    ///
    /// 出現列が埋まっているのに縦置きで出現列に置いた場合はゲームオーバーになり、
    /// 何も落とさず空の結果を返す。
    pub fn make_move(&mut self, pair: Pair, mv: Move) -> Option<Combo> {
        if !self.can_make_move(mv) {
            return None;
        }

        let p = mv.position;
        if p == SPAWN_COLUMN && mv.orientation == 0 && !self.top_is_free(SPAWN_COLUMN) {
            vlog!("[ゲームオーバー] 出現列が埋まっています");
            self.game_over = true;
            return Some(Combo::new());
        }

        // 先に落とす方が下になる
        let (first, second) = if mv.orientation > 1 {
            (pair.top, pair.bottom)
        } else {
            (pair.bottom, pair.top)
        };
        let second_x = if mv.is_horizontal() { p + 1 } else { p };

        for (x, cell) in [(p, first), (second_x, second)] {
            // 列・色とも検証済みなので Err にはならない
            if let Ok(false) = self.board.drop_bean(x, cell) {
                vlog!("[はみ出し] {}列目が満杯のため {} は消えました", x, cell.name());
            }
        }
        Some(self.resolve())
    }

    /// 現在の盤面で可能な置き方
    pub fn iter_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |&mv| self.can_make_move(mv))
    }
}
