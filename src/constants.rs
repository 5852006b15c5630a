// 盤面定数とスコア表

/// ====== 盤面定数 ======
pub const W: usize = 6;
pub const H: usize = 12;
pub const CELLS: usize = W * H;

/// 消去に必要な最小連結数
pub const POP_THRESHOLD: usize = 4;

/// 組ぷよの出現列（この列の最上段が埋まるとゲームオーバー）
pub const SPAWN_COLUMN: usize = 2;

/// ====== セル記号 ======
pub const SYM_RED: u8 = b'r';
pub const SYM_GREEN: u8 = b'g';
pub const SYM_BLUE: u8 = b'b';
pub const SYM_YELLOW: u8 = b'y';
pub const SYM_PURPLE: u8 = b'p';
pub const SYM_GARBAGE: u8 = b'k';
pub const SYM_EMPTY: u8 = b' ';

/// 色インデックス（0..=4 が色ぷよ）
pub const PLAYABLE_COLORS: usize = 5;
pub const IDX_GARBAGE: usize = 5;
pub const IDX_EMPTY: usize = 6;
pub const IDX_UNKNOWN: usize = 7;

/// ====== スコア表（ぷよぷよ通ではなく初代の値） ======

/// 連結ボーナス（グループサイズで引く。末尾で打ち切り）
pub const GROUP_BONUS: [u32; 12] = [0, 0, 0, 0, 0, 2, 3, 4, 5, 6, 7, 10];

/// 連鎖倍率（1連鎖目が先頭。末尾で打ち切り）
pub const CHAIN_POWER: [u32; 9] = [0, 8, 16, 32, 64, 128, 256, 512, 999];

/// 色数ボーナス（1色が先頭）
pub const COLOR_BONUS: [u32; 5] = [0, 3, 6, 12, 24];

/// 1ステップの倍率上限
pub const MAX_MULTIPLIER: u32 = 999;
