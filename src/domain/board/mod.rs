// 盤面関連のドメイン層

pub mod board;
pub mod cell;
pub mod layout;

pub use board::Board;
pub use cell::Cell;
pub use layout::{CellGrid, StridedBoard, Strides};
