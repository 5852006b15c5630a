// セル型定義（ドメイン層）

use crate::constants::{
    IDX_EMPTY, IDX_GARBAGE, IDX_UNKNOWN, PLAYABLE_COLORS, SYM_BLUE, SYM_EMPTY, SYM_GARBAGE,
    SYM_GREEN, SYM_PURPLE, SYM_RED, SYM_YELLOW,
};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 盤面の1マス
///
/// バッファ上は1バイトの記号で保持され、`from_symbol` で解釈する。
/// 未知の記号は `Unknown` になり、グループを作ることも巻き込まれることもない。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Red,         // 'r'
    Green,       // 'g'
    Blue,        // 'b'
    Yellow,      // 'y'
    Purple,      // 'p'
    Garbage,     // 'k' (おじゃま)
    #[default]
    Empty,       // ' '
    Unknown(u8), // それ以外
}

impl Cell {
    /// 色ぷよ5色（色インデックス順）
    pub const COLORS: [Cell; PLAYABLE_COLORS] =
        [Cell::Red, Cell::Green, Cell::Blue, Cell::Yellow, Cell::Purple];

    /// 記号からCellに変換（失敗しない）
    #[inline]
    pub fn from_symbol(symbol: u8) -> Self {
        match symbol {
            SYM_RED => Cell::Red,
            SYM_GREEN => Cell::Green,
            SYM_BLUE => Cell::Blue,
            SYM_YELLOW => Cell::Yellow,
            SYM_PURPLE => Cell::Purple,
            SYM_GARBAGE => Cell::Garbage,
            SYM_EMPTY => Cell::Empty,
            other => Cell::Unknown(other),
        }
    }

    /// Cellを記号に変換
    #[inline]
    pub fn symbol(self) -> u8 {
        match self {
            Cell::Red => SYM_RED,
            Cell::Green => SYM_GREEN,
            Cell::Blue => SYM_BLUE,
            Cell::Yellow => SYM_YELLOW,
            Cell::Purple => SYM_PURPLE,
            Cell::Garbage => SYM_GARBAGE,
            Cell::Empty => SYM_EMPTY,
            Cell::Unknown(s) => s,
        }
    }

    /// 色インデックス: 色ぷよ 0..=4、おじゃま 5、空 6、未知 7
    #[inline]
    pub fn color_index(self) -> usize {
        match self {
            Cell::Red => 0,
            Cell::Green => 1,
            Cell::Blue => 2,
            Cell::Yellow => 3,
            Cell::Purple => 4,
            Cell::Garbage => IDX_GARBAGE,
            Cell::Empty => IDX_EMPTY,
            Cell::Unknown(_) => IDX_UNKNOWN,
        }
    }

    /// グループの起点になれる色ぷよか
    #[inline]
    pub fn is_playable(self) -> bool {
        self.color_index() < PLAYABLE_COLORS
    }

    /// テキスト盤面の1文字から変換（'.' も空として受け付ける）
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            ' ' | '.' => Ok(Cell::Empty),
            'r' => Ok(Cell::Red),
            'g' => Ok(Cell::Green),
            'b' => Ok(Cell::Blue),
            'y' => Ok(Cell::Yellow),
            'p' => Ok(Cell::Purple),
            'k' => Ok(Cell::Garbage),
            _ => Err(anyhow!("不正な文字: {:?}", ch)),
        }
    }

    /// テキスト盤面用の文字（空は '.'）
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Unknown(_) => '?',
            other => other.symbol() as char,
        }
    }

    /// 表示用の色名
    pub fn name(self) -> &'static str {
        match self {
            Cell::Red => "赤",
            Cell::Green => "緑",
            Cell::Blue => "青",
            Cell::Yellow => "黄",
            Cell::Purple => "紫",
            Cell::Garbage => "おじゃま",
            Cell::Empty => "空",
            Cell::Unknown(_) => "?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_matches_table() {
        assert_eq!(Cell::from_symbol(b'r').color_index(), 0);
        assert_eq!(Cell::from_symbol(b'g').color_index(), 1);
        assert_eq!(Cell::from_symbol(b'b').color_index(), 2);
        assert_eq!(Cell::from_symbol(b'y').color_index(), 3);
        assert_eq!(Cell::from_symbol(b'p').color_index(), 4);
        assert_eq!(Cell::from_symbol(b'k').color_index(), 5);
        assert_eq!(Cell::from_symbol(b' ').color_index(), 6);
        assert_eq!(Cell::from_symbol(b'x').color_index(), 7);
        assert_eq!(Cell::from_symbol(0).color_index(), 7);
    }

    #[test]
    fn only_five_colors_are_playable() {
        for c in Cell::COLORS {
            assert!(c.is_playable());
        }
        assert!(!Cell::Garbage.is_playable());
        assert!(!Cell::Empty.is_playable());
        assert!(!Cell::Unknown(b'R').is_playable());
    }

    #[test]
    fn unknown_symbol_is_preserved() {
        let c = Cell::from_symbol(b'?');
        assert_eq!(c, Cell::Unknown(b'?'));
        assert_eq!(c.symbol(), b'?');
    }

    #[test]
    fn from_char_accepts_dot_and_space_as_empty() {
        assert_eq!(Cell::from_char('.').unwrap(), Cell::Empty);
        assert_eq!(Cell::from_char(' ').unwrap(), Cell::Empty);
        assert_eq!(Cell::from_char('k').unwrap(), Cell::Garbage);
    }

    #[test]
    fn from_char_rejects_invalid() {
        assert!(Cell::from_char('R').is_err());
        assert!(Cell::from_char('x').is_err());
    }

    #[test]
    fn to_char_roundtrip() {
        for c in [Cell::Red, Cell::Purple, Cell::Garbage, Cell::Empty] {
            assert_eq!(Cell::from_char(c.to_char()).unwrap(), c);
        }
    }
}
