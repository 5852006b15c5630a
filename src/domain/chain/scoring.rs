// 連鎖の得点計算（初代ぷよぷよの倍率表）

use crate::constants::{CHAIN_POWER, COLOR_BONUS, MAX_MULTIPLIER};
use crate::domain::eliminate::Elimination;

/// 連鎖倍率（`link` は1始まり。表を超えたら末尾）
pub fn chain_power(link: u32) -> u32 {
    let i = (link.max(1) - 1) as usize;
    CHAIN_POWER[i.min(CHAIN_POWER.len() - 1)]
}

/// 色数ボーナス（0色は0）
pub fn color_bonus(colors: u32) -> u32 {
    if colors == 0 {
        return 0;
    }
    let i = (colors - 1) as usize;
    COLOR_BONUS[i.min(COLOR_BONUS.len() - 1)]
}

/// 1連鎖分の得点
///
/// `10 × 消えた色ぷよ数 × clamp(連鎖倍率 + 色数ボーナス + 連結ボーナス, 1, 999)`
pub fn step_score(link: u32, e: &Elimination) -> u64 {
    if e.popped == 0 {
        return 0;
    }
    let multiplier = (chain_power(link) + color_bonus(e.colors) + e.bonus).clamp(1, MAX_MULTIPLIER);
    10 * u64::from(e.popped) * u64::from(multiplier)
}
