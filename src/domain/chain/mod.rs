// 連鎖の結果と得点計算

pub mod result;
pub mod scoring;

pub use result::{ChainStep, Combo};
pub use scoring::{chain_power, color_bonus, step_score};
