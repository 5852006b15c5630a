// ぷよぷよ盤面の消去判定・連鎖シミュレーション - ライブラリモジュール

pub mod application; // アプリケーション層
pub mod constants;
pub mod domain; // ドメイン層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{Move, Pair, Simulator, SimulatorConfig};
pub use constants::{H, W};
pub use domain::board::{Board, Cell, CellGrid, StridedBoard, Strides};
pub use domain::chain::{ChainStep, Combo};
pub use domain::eliminate::{eliminate, eliminate_strided, Elimination};
