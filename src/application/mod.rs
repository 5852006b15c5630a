// アプリケーション層 - 盤面シミュレーションと実行設定

pub mod config;
pub mod simulator;

pub use config::{OutputFormat, RunMode, SimulatorConfig};
pub use simulator::{Move, Pair, Simulator};
