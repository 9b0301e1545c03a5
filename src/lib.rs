//! Board-representation core of a chess engine: 64-bit bitboards with
//! LERF square indexing (a1 = 0, h8 = 63), De Bruijn bit scanning, and
//! precomputed mask, leaper-attack and first-rank slider tables.
//!
//! All tables are built exactly once behind `lazy_static` and are read
//! lock-free afterwards. Move legality, slider-line rotation, search and
//! any I/O belong to consuming layers.

pub mod attacks;
pub mod bitboard;
pub mod error;
pub mod masks;
pub mod square;
pub mod startpos;

pub use attacks::{AttackTables, ATTACK_TABLES};
pub use bitboard::{
    clear_bit, count_bits, get_bit, ls1b_scan, msb_scan, occupied_squares, set_bit, to_grid_string,
    toggle_bit, Bitboard, OccupiedSquares,
};
pub use error::BoardError;
pub use masks::{MaskTables, MASK_TABLES};
pub use square::{
    file_of, parse_square, rank_of, square_bb, square_name, Color, File, Piece, Rank,
};
pub use startpos::starting_bitboard;
