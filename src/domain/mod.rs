// ドメイン層 - 盤面と消去ロジックの中核

pub mod board;
pub mod chain;
pub mod eliminate;

pub use board::{Board, Cell, CellGrid, StridedBoard, Strides};
pub use eliminate::{eliminate, eliminate_strided, group_bonus, Elimination};
