pub mod board;

pub use board::{
    BACK_RANK, BOARD_SIZE, Board, Cell, Piece, PieceKind, SQUARES, Side, SquareColor,
    generate_layout, initial_placement,
};
