//! The six piece icons. Geometry is fixed; only the paints passed to
//! [`PieceIcon::draw`] vary.

use super::{LineCap, LineJoin, PieceIcon, Shape, SvgDocument};

pub struct PawnIcon;
pub struct KnightIcon;
pub struct BishopIcon;
pub struct RookIcon;
pub struct QueenIcon;
pub struct KingIcon;

/// A black pawn with the standard paints baked in.
pub fn black_pawn() -> SvgDocument {
    PawnIcon.draw("black", "white")
}

/// A white pawn with the standard paints baked in.
pub fn white_pawn() -> SvgDocument {
    PawnIcon.draw("white", "black")
}

impl PieceIcon for PawnIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path(
                "m 22.5,9 c -2.21,0 -4,1.79 -4,4 0,0.89 0.29,1.71 0.78,2.38 C 17.33,16.5 \
                 16,18.59 16,21 c 0,2.03 0.94,3.84 2.41,5.03 C 15.41,27.09 11,31.58 11,39.5 \
                 H 34 C 34,31.58 29.59,27.09 26.59,26.03 C 28.06,24.84 29,23.03 29,21 \
                 29,18.59 27.67,16.5 25.72,15.38 C 26.21,14.71 26.5,13.89 26.5,13 \
                 c 0,-2.21 -1.79,-4 -4,-4 z",
            )
            .fill(fill)
            .stroke(stroke)
            .join(LineJoin::Miter),
        ])
    }
}

impl PieceIcon for KnightIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path("M 22,10 C 32.5,11 38.5,18 38,39 L 15,39 C 15,30 25,32.5 23,18")
                .fill(fill)
                .stroke(stroke),
            Shape::path(
                "M 24,18 C 24.38,20.91 18.45,25.37 16,27 C 13,29 13.18,31.34 11,31 \
                 C 9.958,30.06 12.41,27.96 11,28 C 10,28 11.19,29.23 10,30 C 9,30 5.997,31 \
                 6,26 C 6,24 12,14 12,14 C 12,14 13.89,12.1 14,10.5 C 13.27,9.506 13.5,8.5 \
                 13.5,7.5 C 14.5,6.5 16.5,10 16.5,10 L 18.5,10 C 18.5,10 19.28,8.008 21,7 \
                 C 22,7 22,10 22,10",
            )
            .fill(fill)
            .stroke(stroke),
            // eye and nostril take the outline paint
            Shape::path(
                "M 9.5,25.5 A 0.5,0.5 0 1 1 8.5,25.5 A 0.5,0.5 0 1 1 9.5,25.5 z",
            )
            .fill(stroke)
            .stroke(stroke),
            Shape::path(
                "M 14.933,15.75 A 0.5,1.5 30 1 1 14.067,15.25 A 0.5,1.5 30 1 1 \
                 14.933,15.75 z",
            )
            .fill(stroke)
            .stroke(stroke)
            .stroke_width(1.49997),
        ])
    }
}

impl PieceIcon for BishopIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path(
                "M9 36.6c3.39-.97 10.11.43 13.5-2 3.39 2.43 10.11 1.03 13.5 2 0 0 1.65.54 \
                 3 2-.68.97-1.65.99-3 .5-3.39-.97-10.11.46-13.5-1-3.39 1.46-10.11.03-13.5 \
                 1-1.35.49-2.32.47-3-.5 1.35-1.46 3-2 3-2z",
            )
            .fill(fill)
            .stroke(stroke)
            .cap(LineCap::Butt),
            Shape::path(
                "M15 32.6c2.5 2.5 12.5 2.5 15 0 .5-1.5 0-2 0-2 0-2.5-2.5-4-2.5-4 \
                 5.5-1.5 6-11.5-5-15.5-11 4-10.5 14-5 15.5 0 0-2.5 1.5-2.5 4 0 0-.5.5 0 2z",
            )
            .fill(fill)
            .stroke(stroke)
            .cap(LineCap::Butt),
            Shape::path("M25 8.6a2.5 2.5 0 1 1-5 0 2.5 2.5 0 1 1 5 0z")
                .fill(fill)
                .stroke(stroke)
                .cap(LineCap::Butt),
            Shape::path("M17.5 26h10M15 30h15m-7.5-14.5v5M20 18h5")
                .stroke(stroke)
                .join(LineJoin::Miter)
                .transform("translate(0 .6)"),
        ])
    }
}

impl PieceIcon for RookIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path("M9 39h27v-3H9v3zM12 36v-4h21v4H12zM11 14V9h4v2h5V9h5v2h5V9h4v5")
                .fill(fill)
                .stroke(stroke)
                .cap(LineCap::Butt)
                .transform("translate(0 .3)"),
            Shape::path("m34 14.3-3 3H14l-3-3").fill(fill).stroke(stroke),
            Shape::path("M31 17v12.5H14V17")
                .fill(fill)
                .stroke(stroke)
                .cap(LineCap::Butt)
                .join(LineJoin::Miter)
                .transform("translate(0 .3)"),
            Shape::path("m31 29.8 1.5 2.5h-20l1.5-2.5")
                .fill(fill)
                .stroke(stroke),
            Shape::path("M11 14h23")
                .stroke(stroke)
                .join(LineJoin::Miter)
                .transform("translate(0 .3)"),
        ])
    }
}

impl PieceIcon for QueenIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path(
                "M9 26c8.5-1.5 21-1.5 27 0l2.5-12.5L31 25l-.3-14.1-5.2 13.6-3-14.5-3 \
                 14.5-5.2-13.6L14 25 6.5 13.5 9 26z",
            )
            .fill(fill)
            .stroke(stroke),
            Shape::path(
                "M9 26c0 2 1.5 2 2.5 4 1 1.5 1 1 .5 3.5-1.5 1-1 2.5-1 2.5-1.5 1.5 0 2.5 0 \
                 2.5 6.5 1 16.5 1 23 0 0 0 1.5-1 0-2.5 0 0 .5-1.5-1-2.5-.5-2.5-.5-2 .5-3.5 \
                 1-2 2.5-2 2.5-4-8.5-1.5-18.5-1.5-27 0z",
            )
            .fill(fill)
            .stroke(stroke),
            Shape::path("M11.5 30c3.5-1 18.5-1 22 0M12 33.5c6-1 15-1 21 0").stroke(stroke),
            Shape::circle(6.0, 12.0, 2.0).fill(fill).stroke(stroke),
            Shape::circle(14.0, 9.0, 2.0).fill(fill).stroke(stroke),
            Shape::circle(22.5, 8.0, 2.0).fill(fill).stroke(stroke),
            Shape::circle(31.0, 9.0, 2.0).fill(fill).stroke(stroke),
            Shape::circle(39.0, 12.0, 2.0).fill(fill).stroke(stroke),
        ])
    }
}

impl PieceIcon for KingIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument {
        SvgDocument::new(vec![
            Shape::path("M22.5 11.63V6M20 8h5")
                .stroke(stroke)
                .join(LineJoin::Miter),
            Shape::path(
                "M22.5 25s4.5-7.5 3-10.5c0 0-1-2.5-3-2.5s-3 2.5-3 2.5c-1.5 3 3 10.5 3 10.5",
            )
            .fill(fill)
            .stroke(stroke)
            .cap(LineCap::Butt)
            .join(LineJoin::Miter),
            Shape::path(
                "M12.5 37c5.5 3.5 14.5 3.5 20 0v-7s9-4.5 6-10.5c-4-6.5-13.5-3.5-16 \
                 4V27v-3.5c-2.5-7.5-12-10.5-16-4-3 6 6 10.5 6 10.5v7",
            )
            .fill(fill)
            .stroke(stroke),
            Shape::path(
                "M12.5 30c5.5-3 14.5-3 20 0m-20 3.5c5.5-3 14.5-3 20 0m-20 3.5c5.5-3 \
                 14.5-3 20 0",
            )
            .stroke(stroke),
        ])
    }
}
