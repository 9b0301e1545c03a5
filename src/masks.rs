//! Precomputed rank, file, diagonal and anti-diagonal masks.
//!
//! Every square belongs to exactly one of the 15 principal diagonals
//! (id = file - rank + 7) and one of the 15 anti-diagonals (id = file + rank);
//! the per-square arrays are copies of the matching line bitboard.

use crate::bitboard::{Bitboard, EMPTY, FILE_A, RANK_1};
use crate::square::{file_of, rank_of};

pub struct MaskTables {
    pub ranks: [Bitboard; 8],
    pub files: [Bitboard; 8],
    pub diagonals: [Bitboard; 15],
    pub anti_diagonals: [Bitboard; 15],
    pub rank_masks: [Bitboard; 64],
    pub file_masks: [Bitboard; 64],
    pub diag_masks: [Bitboard; 64],
    pub anti_diag_masks: [Bitboard; 64],
}

#[inline(always)]
pub fn diag_id(sq: u8) -> usize {
    (file_of(sq) as i8 - rank_of(sq) as i8 + 7) as usize
}

#[inline(always)]
pub fn anti_diag_id(sq: u8) -> usize {
    (file_of(sq) + rank_of(sq)) as usize
}

impl MaskTables {
    pub fn new() -> Self {
        let mut tables = MaskTables {
            ranks: [EMPTY; 8],
            files: [EMPTY; 8],
            diagonals: [EMPTY; 15],
            anti_diagonals: [EMPTY; 15],
            rank_masks: [EMPTY; 64],
            file_masks: [EMPTY; 64],
            diag_masks: [EMPTY; 64],
            anti_diag_masks: [EMPTY; 64],
        };

        for i in 0..8 {
            tables.ranks[i] = RANK_1 << (8 * i);
            tables.files[i] = FILE_A << i;
        }

        for sq in 0..64u8 {
            tables.rank_masks[sq as usize] = tables.ranks[rank_of(sq) as usize];
            tables.file_masks[sq as usize] = tables.files[file_of(sq) as usize];
            tables.diagonals[diag_id(sq)] |= 1u64 << sq;
            tables.anti_diagonals[anti_diag_id(sq)] |= 1u64 << sq;
        }

        // The buckets are only complete after the full pass.
        for sq in 0..64u8 {
            tables.diag_masks[sq as usize] = tables.diagonals[diag_id(sq)];
            tables.anti_diag_masks[sq as usize] = tables.anti_diagonals[anti_diag_id(sq)];
        }

        tables
    }

    /// Principal diagonal and anti-diagonal masks for a square.
    #[inline(always)]
    pub fn diagonal_masks(&self, sq: u8) -> (Bitboard, Bitboard) {
        (self.diag_masks[sq as usize], self.anti_diag_masks[sq as usize])
    }
}

lazy_static::lazy_static! {
    pub static ref MASK_TABLES: MaskTables = MaskTables::new();
}
