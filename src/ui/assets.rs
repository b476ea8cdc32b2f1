//! In-memory asset source serving the generated piece icon SVGs.
//!
//! The teacher for this layer is a filesystem asset source; here the icons
//! are pure functions of (fill, stroke), so the source generates the SVG
//! bytes on demand instead of reading files.

use crate::domain::{Piece, PieceKind, Side};
use crate::icons;
use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use strum::IntoEnumIterator;

impl Piece {
    /// Virtual asset path served by [`IconAssets`].
    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.side) {
            (PieceKind::Pawn, Side::White) => "icons/pawn-white.svg",
            (PieceKind::Pawn, Side::Black) => "icons/pawn-black.svg",
            (PieceKind::Rook, Side::White) => "icons/rook-white.svg",
            (PieceKind::Rook, Side::Black) => "icons/rook-black.svg",
            (PieceKind::Knight, Side::White) => "icons/knight-white.svg",
            (PieceKind::Knight, Side::Black) => "icons/knight-black.svg",
            (PieceKind::Bishop, Side::White) => "icons/bishop-white.svg",
            (PieceKind::Bishop, Side::Black) => "icons/bishop-black.svg",
            (PieceKind::Queen, Side::White) => "icons/queen-white.svg",
            (PieceKind::Queen, Side::Black) => "icons/queen-black.svg",
            (PieceKind::King, Side::White) => "icons/king-white.svg",
            (PieceKind::King, Side::Black) => "icons/king-black.svg",
        }
    }
}

fn all_pieces() -> impl Iterator<Item = Piece> {
    Side::iter().flat_map(|side| PieceKind::iter().map(move |kind| Piece { kind, side }))
}

fn piece_for_path(path: &str) -> Option<Piece> {
    all_pieces().find(|piece| piece.svg_path() == path)
}

/// Generates piece SVGs on demand; no assets exist on disk.
pub struct IconAssets;

impl AssetSource for IconAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        Ok(piece_for_path(path)
            .map(|piece| Cow::Owned(icons::draw_piece(piece).to_xml().into_bytes())))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        if path.trim_end_matches('/') != "icons" {
            return Ok(Vec::new());
        }
        Ok(all_pieces()
            .map(|piece| {
                let name = piece.svg_path().trim_start_matches("icons/");
                SharedString::from(name.to_string())
            })
            .collect())
    }
}
