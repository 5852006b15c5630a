// 連鎖結果の定義

use crate::domain::eliminate::Elimination;
use serde::{Deserialize, Serialize};

/// 1回の落下で起きた連鎖全体の結果
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    /// 得点
    pub score: u64,
    /// 消した色ぷよの総数（おじゃま抜き）
    pub n_beans: u32,
    /// 連鎖数
    pub length: u32,
    /// 各連鎖の詳細
    pub steps: Vec<ChainStep>,
}

impl Combo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1連鎖分を追加
    pub fn add_step(&mut self, step: ChainStep) {
        self.score += step.score;
        self.n_beans += step.elimination.popped;
        self.length += 1;
        self.steps.push(step);
    }

    /// 何も消えなかったか
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// おじゃま込みで空になったマスの総数
    pub fn total_cleared(&self) -> u32 {
        self.steps.iter().map(|s| s.elimination.cleared).sum()
    }
}

/// 連鎖の1ステップ
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    /// 連鎖番号（1始まり）
    pub link: u32,
    /// この連鎖の消去集計
    pub elimination: Elimination,
    /// この連鎖の得点
    pub score: u64,
}

impl ChainStep {
    pub fn new(link: u32, elimination: Elimination, score: u64) -> Self {
        Self {
            link,
            elimination,
            score,
        }
    }
}
