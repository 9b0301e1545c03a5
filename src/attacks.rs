//! Precomputed attack tables for the leaper pieces and the first-rank
//! slider primitive.
//!
//! Leaper destinations are built from shifted copies of the origin board.
//! Every shift that moves toward a board edge is guarded by a file mask
//! applied *before* the shift; an unguarded shift would wrap a piece from
//! file h to file a (or back) one rank off.

use crate::bitboard::{
    ls1b_unchecked, msb_unchecked, Bitboard, EMPTY, FILE_A, FILE_B, FILE_G, FILE_H, RANK_2, RANK_7,
};
use crate::square::Color;

pub struct AttackTables {
    pub king_attacks: [Bitboard; 64],
    pub knight_attacks: [Bitboard; 64],
    // Indexed [color][square]; pseudo-moves only, occupancy-blind.
    pub pawn_pushes: [[Bitboard; 64]; 2],
    pub pawn_captures: [[Bitboard; 64]; 2],
    // Indexed [square on line][occupancy byte].
    pub first_rank: [[u8; 256]; 8],
}

impl AttackTables {
    pub fn new() -> Self {
        let mut tables = AttackTables {
            king_attacks: [EMPTY; 64],
            knight_attacks: [EMPTY; 64],
            pawn_pushes: [[EMPTY; 64]; 2],
            pawn_captures: [[EMPTY; 64]; 2],
            first_rank: [[0; 256]; 8],
        };

        tables.init_king_attacks();
        tables.init_knight_attacks();
        tables.init_pawn_tables();
        tables.init_first_rank_attacks();

        tables
    }

    fn init_king_attacks(&mut self) {
        for sq in 0..64 {
            let bb = 1u64 << sq;

            let nw = (bb & !FILE_A) << 7;
            let n = bb << 8;
            let ne = (bb & !FILE_H) << 9;
            let e = (bb & !FILE_H) << 1;
            let se = (bb & !FILE_H) >> 7;
            let s = bb >> 8;
            let sw = (bb & !FILE_A) >> 9;
            let w = (bb & !FILE_A) >> 1;

            self.king_attacks[sq] = nw | n | ne | e | se | s | sw | w;
        }
    }

    fn init_knight_attacks(&mut self) {
        // Moves crossing two files need a double file guard, one file a
        // single guard.
        let not_ab = !(FILE_A | FILE_B);
        let not_a = !FILE_A;
        let not_h = !FILE_H;
        let not_gh = !(FILE_G | FILE_H);

        for sq in 0..64 {
            let bb = 1u64 << sq;

            let s1 = (bb & not_ab) << 6; // up 1, left 2
            let s2 = (bb & not_a) << 15; // up 2, left 1
            let s3 = (bb & not_h) << 17; // up 2, right 1
            let s4 = (bb & not_gh) << 10; // up 1, right 2
            let s5 = (bb & not_gh) >> 6; // down 1, right 2
            let s6 = (bb & not_h) >> 15; // down 2, right 1
            let s7 = (bb & not_a) >> 17; // down 2, left 1
            let s8 = (bb & not_ab) >> 10; // down 1, left 2

            self.knight_attacks[sq] = s1 | s2 | s3 | s4 | s5 | s6 | s7 | s8;
        }
    }

    fn init_pawn_tables(&mut self) {
        for sq in 0..64 {
            let bb = 1u64 << sq;

            // Quiet pushes: one step forward, plus the double step from the
            // starting rank. Blocker filtering belongs to the consumer; the
            // double-push board is present regardless of occupancy.
            self.pawn_pushes[Color::White as usize][sq] = (bb << 8) | ((bb & RANK_2) << 16);
            self.pawn_pushes[Color::Black as usize][sq] = (bb >> 8) | ((bb & RANK_7) >> 16);

            self.pawn_captures[Color::White as usize][sq] =
                ((bb & !FILE_A) << 7) | ((bb & !FILE_H) << 9);
            self.pawn_captures[Color::Black as usize][sq] =
                ((bb & !FILE_A) >> 9) | ((bb & !FILE_H) >> 7);
        }
    }

    fn init_first_rank_attacks(&mut self) {
        for sq in 0..8 {
            for occ in 0..256 {
                self.first_rank[sq as usize][occ as usize] =
                    compute_first_rank_attacks(sq, occ as u8);
            }
        }
    }

    #[inline(always)]
    pub fn first_rank_attacks(&self, line_sq: u8, occ: u8) -> u8 {
        self.first_rank[line_sq as usize][occ as usize]
    }
}

/// Truncated attack byte for a slider at `line_sq` (0..8) on an abstract
/// 8-square line with occupancy `occ`. The attack runs up to and including
/// the nearest blocker on each side; the mover's own square is excluded.
fn compute_first_rank_attacks(line_sq: u8, occ: u8) -> u8 {
    let x = 1u8 << line_sq;

    // All bits strictly below the mover.
    let mut left_attacks = x.wrapping_sub(1);
    let left_blockers = left_attacks & occ;
    if left_blockers != 0 {
        // Nearest blocker leftward is the highest one; drop everything
        // below it, keeping the blocker square.
        let nearest = 1u8 << msb_unchecked(left_blockers as u64);
        left_attacks ^= nearest.wrapping_sub(1);
    }

    // All bits strictly above the mover.
    let mut right_attacks = !x & !x.wrapping_sub(1);
    let right_blockers = right_attacks & occ;
    if right_blockers != 0 {
        let nearest = 1u8 << ls1b_unchecked(right_blockers as u64);
        right_attacks ^= !nearest & !nearest.wrapping_sub(1);
    }

    left_attacks | right_attacks
}

lazy_static::lazy_static! {
    pub static ref ATTACK_TABLES: AttackTables = AttackTables::new();
}
