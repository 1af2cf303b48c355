//! Perft (performance test) for move generation correctness verification.

use crate::board_state::BoardState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them.
pub fn perft(state: &BoardState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves(state.active_color());

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&state.apply(mv), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(state: &BoardState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = state
        .legal_moves(state.active_color())
        .iter()
        .map(|mv| {
            let count = if depth <= 1 { 1 } else { perft(&state.apply(mv), depth - 1) };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(fen: &str) -> BoardState {
        fen.parse().unwrap()
    }

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_shallow() {
        let start = BoardState::starting_position();
        assert_eq!(perft(&start, 0), 1);
        assert_eq!(perft(&start, 1), 20);
        assert_eq!(perft(&start, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&BoardState::starting_position(), 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&BoardState::starting_position(), 4), 197_281);
    }

    // --- Position 2: Kiwipete ---
    // r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_kiwipete() {
        let kiwipete = state(KIWIPETE);
        assert_eq!(perft(&kiwipete, 1), 48);
        assert_eq!(perft(&kiwipete, 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&state(KIWIPETE), 3), 97_862);
    }

    // --- Position 3: en passant and rook endgame ---

    #[test]
    fn perft_position_3() {
        let pos = state("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert_eq!(perft(&pos, 1), 14);
        assert_eq!(perft(&pos, 2), 191);
        assert_eq!(perft(&pos, 3), 2_812);
    }

    // --- Position 4: promotions and castling under fire ---

    #[test]
    fn perft_position_4() {
        let pos = state("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
        assert_eq!(perft(&pos, 1), 6);
        assert_eq!(perft(&pos, 2), 264);
    }

    // --- Position 5 ---

    #[test]
    fn perft_position_5() {
        let pos = state("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8");
        assert_eq!(perft(&pos, 1), 44);
        assert_eq!(perft(&pos, 2), 1_486);
    }

    #[test]
    fn divide_sums_to_perft() {
        let start = BoardState::starting_position();
        let split = divide(&start, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, n)| *n == 20));
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&start, 2));
        assert_eq!(split[0].0, "a2a3");
    }
}
