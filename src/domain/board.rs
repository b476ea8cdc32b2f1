//! Pure chessboard domain types and the fixed initial layout.
//! No GPUI dependencies - this is the domain layer.

use strum::EnumIter;

pub const BOARD_SIZE: usize = 8;
pub const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareColor {
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum Side {
    White,
    Black,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

/// Back-rank piece order, queenside to kingside. Both sides share it; only
/// the rank differs.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The checkerboard pattern: `Light` where `(row + col)` is even.
pub fn generate_layout() -> [SquareColor; SQUARES] {
    let mut layout = [SquareColor::Light; SQUARES];
    for (index, color) in layout.iter_mut().enumerate() {
        let row = index / BOARD_SIZE;
        let col = index % BOARD_SIZE;
        *color = if (row + col) % 2 == 0 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        };
    }
    layout
}

/// The initial position as a sparse table over square indices.
///
/// Row 0 is black's back rank, row 1 black's pawns; rows 6 and 7 mirror
/// them for white. Everything in between starts empty.
pub fn initial_placement() -> [Option<Piece>; SQUARES] {
    let mut placement = [None; SQUARES];
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        placement[col] = Some(Piece {
            kind,
            side: Side::Black,
        });
        placement[BOARD_SIZE + col] = Some(Piece {
            kind: PieceKind::Pawn,
            side: Side::Black,
        });
        placement[6 * BOARD_SIZE + col] = Some(Piece {
            kind: PieceKind::Pawn,
            side: Side::White,
        });
        placement[7 * BOARD_SIZE + col] = Some(Piece {
            kind,
            side: Side::White,
        });
    }
    placement
}

/// One board cell: its fixed color and its occupant at the initial position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub color: SquareColor,
    pub piece: Option<Piece>,
}

/// The full 64-cell board, derived entirely from square indices.
///
/// Immutable after construction; there is no game state to update.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    layout: [SquareColor; SQUARES],
    placement: [Option<Piece>; SQUARES],
}

impl Board {
    pub fn initial() -> Self {
        Self {
            layout: generate_layout(),
            placement: initial_placement(),
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        Cell {
            color: self.layout[index],
            piece: self.placement[index],
        }
    }

    pub fn color_at(&self, row: usize, col: usize) -> SquareColor {
        self.layout[row * BOARD_SIZE + col]
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.placement[row * BOARD_SIZE + col]
    }

    /// Cells in ascending index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..SQUARES).map(|index| self.cell(index))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_checkerboard_parity() {
        let layout = generate_layout();
        for (index, &color) in layout.iter().enumerate() {
            let expected = if (index / BOARD_SIZE + index % BOARD_SIZE) % 2 == 0 {
                SquareColor::Light
            } else {
                SquareColor::Dark
            };
            assert_eq!(color, expected, "square {index}");
        }
    }

    #[test]
    fn layout_has_32_light_and_32_dark_squares() {
        let layout = generate_layout();
        let light = layout
            .iter()
            .filter(|&&c| c == SquareColor::Light)
            .count();
        assert_eq!(light, 32);
        assert_eq!(layout.len() - light, 32);
    }

    #[test]
    fn placement_has_exactly_32_pieces() {
        let placement = initial_placement();
        let occupied = placement.iter().filter(|p| p.is_some()).count();
        assert_eq!(occupied, 32);
    }

    #[test]
    fn each_side_has_the_standard_piece_counts() {
        let placement = initial_placement();
        for side in [Side::White, Side::Black] {
            let count = |kind| {
                placement
                    .iter()
                    .flatten()
                    .filter(|p| p.side == side && p.kind == kind)
                    .count()
            };
            assert_eq!(count(PieceKind::King), 1);
            assert_eq!(count(PieceKind::Queen), 1);
            assert_eq!(count(PieceKind::Rook), 2);
            assert_eq!(count(PieceKind::Knight), 2);
            assert_eq!(count(PieceKind::Bishop), 2);
            assert_eq!(count(PieceKind::Pawn), 8);
        }
    }

    #[test]
    fn sides_occupy_their_own_two_ranks() {
        let placement = initial_placement();
        for (index, piece) in placement.iter().enumerate() {
            match piece {
                Some(p) if p.side == Side::Black => assert!(index < 16, "black at {index}"),
                Some(p) if p.side == Side::White => assert!(index >= 48, "white at {index}"),
                Some(_) => unreachable!(),
                None => assert!((16..48).contains(&index), "gap at {index}"),
            }
        }
    }

    #[test]
    fn board_construction_is_deterministic() {
        assert_eq!(Board::initial(), Board::initial());
    }

    #[test]
    fn known_cells_match_the_initial_position() {
        let board = Board::initial();

        let corner = board.cell(0);
        assert_eq!(corner.color, SquareColor::Light);
        assert_eq!(
            corner.piece,
            Some(Piece {
                kind: PieceKind::Rook,
                side: Side::Black,
            })
        );

        let king = board.cell(4);
        assert_eq!(king.color, SquareColor::Light);
        assert_eq!(
            king.piece,
            Some(Piece {
                kind: PieceKind::King,
                side: Side::Black,
            })
        );

        let middle = board.cell(28);
        assert_eq!(middle.color, SquareColor::Dark);
        assert_eq!(middle.piece, None);

        let queen = board.cell(59);
        assert_eq!(queen.color, SquareColor::Dark);
        assert_eq!(
            queen.piece,
            Some(Piece {
                kind: PieceKind::Queen,
                side: Side::White,
            })
        );
    }

    #[test]
    fn row_col_accessors_agree_with_linear_indexing() {
        let board = Board::initial();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = board.cell(row * BOARD_SIZE + col);
                assert_eq!(board.color_at(row, col), cell.color);
                assert_eq!(board.piece_at(row, col), cell.piece);
            }
        }
    }
}
