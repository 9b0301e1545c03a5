//! Standard starting-position bitboard literals.
//!
//! Position setup lives outside this crate, but these constants are the
//! interface it must reproduce bit-exactly.

use crate::bitboard::Bitboard;
use crate::square::{Color, Piece};

pub const WHITE_PAWNS: Bitboard = 0x000000000000FF00;
pub const WHITE_KNIGHTS: Bitboard = 0x0000000000000042;
pub const WHITE_BISHOPS: Bitboard = 0x0000000000000024;
pub const WHITE_ROOKS: Bitboard = 0x0000000000000081;
pub const WHITE_QUEENS: Bitboard = 0x0000000000000008;
pub const WHITE_KING: Bitboard = 0x0000000000000010;

pub const BLACK_PAWNS: Bitboard = 0x00FF000000000000;
pub const BLACK_KNIGHTS: Bitboard = 0x4200000000000000;
pub const BLACK_BISHOPS: Bitboard = 0x2400000000000000;
pub const BLACK_ROOKS: Bitboard = 0x8100000000000000;
pub const BLACK_QUEENS: Bitboard = 0x0800000000000000;
pub const BLACK_KING: Bitboard = 0x1000000000000000;

pub const WHITE_OCCUPANCY: Bitboard = 0x000000000000FFFF;
pub const BLACK_OCCUPANCY: Bitboard = 0xFFFF000000000000;
pub const FULL_OCCUPANCY: Bitboard = 0xFFFF00000000FFFF;

// Indexed [color][piece].
const STARTING_BITBOARDS: [[Bitboard; 6]; 2] = [
    [
        WHITE_PAWNS,
        WHITE_KNIGHTS,
        WHITE_BISHOPS,
        WHITE_ROOKS,
        WHITE_QUEENS,
        WHITE_KING,
    ],
    [
        BLACK_PAWNS,
        BLACK_KNIGHTS,
        BLACK_BISHOPS,
        BLACK_ROOKS,
        BLACK_QUEENS,
        BLACK_KING,
    ],
];

#[inline(always)]
pub fn starting_bitboard(color: Color, piece: Piece) -> Bitboard {
    STARTING_BITBOARDS[color as usize][piece as usize]
}
