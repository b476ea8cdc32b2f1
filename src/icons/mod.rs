//! Vector icon set for the chess pieces.
//!
//! Each icon is a pure function of a fill and a stroke paint: the geometry is
//! fixed per piece kind, only the paints vary. Icons render into a 45x45-unit
//! [`SvgDocument`] that serializes to standalone SVG for the asset pipeline.
//! No GPUI dependencies here.

mod pieces;

pub use pieces::{
    BishopIcon, KingIcon, KnightIcon, PawnIcon, QueenIcon, RookIcon, black_pawn, white_pawn,
};

use std::fmt;

use crate::domain::{Piece, PieceKind, Side};

/// Icon canvas edge length, in SVG user units.
pub const ICON_SIZE: u32 = 45;

/// The one capability every piece icon provides: draw yourself with the
/// given fill and stroke paints.
pub trait PieceIcon {
    fn draw(&self, fill: &str, stroke: &str) -> SvgDocument;
}

/// The icon for a piece kind.
pub fn icon_for(kind: PieceKind) -> &'static dyn PieceIcon {
    match kind {
        PieceKind::Pawn => &PawnIcon,
        PieceKind::Knight => &KnightIcon,
        PieceKind::Bishop => &BishopIcon,
        PieceKind::Rook => &RookIcon,
        PieceKind::Queen => &QueenIcon,
        PieceKind::King => &KingIcon,
    }
}

/// Fill and stroke paints for a side: black pieces are black with white
/// outlines, white pieces the reverse.
pub fn side_paints(side: Side) -> (&'static str, &'static str) {
    match side {
        Side::Black => ("black", "white"),
        Side::White => ("white", "black"),
    }
}

/// Draw a piece with its side's standard paints.
pub fn draw_piece(piece: Piece) -> SvgDocument {
    let (fill, stroke) = side_paints(piece.side);
    icon_for(piece.kind).draw(fill, stroke)
}

/// A fixed-size vector image: an ordered list of drawing primitives.
#[derive(Clone, PartialEq, Debug)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl SvgDocument {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            width: ICON_SIZE,
            height: ICON_SIZE,
            shapes,
        }
    }

    pub fn to_xml(&self) -> String {
        self.to_string()
    }

    /// The geometry of every shape, with paints stripped.
    pub fn geometry(&self) -> Vec<Geometry> {
        self.shapes.iter().map(|s| s.geometry.clone()).collect()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Geometry {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineJoin {
    Miter,
    Round,
}

/// One drawing primitive: geometry plus paint and stroke styling.
#[derive(Clone, PartialEq, Debug)]
pub struct Shape {
    pub geometry: Geometry,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub transform: Option<&'static str>,
}

impl Shape {
    pub fn path(d: &'static str) -> Self {
        Self {
            geometry: Geometry::Path(d),
            fill: None,
            stroke: None,
            stroke_width: 1.5,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            transform: None,
        }
    }

    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            geometry: Geometry::Circle { cx, cy, r },
            fill: None,
            stroke: None,
            stroke_width: 1.5,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            transform: None,
        }
    }

    pub fn fill(mut self, paint: &str) -> Self {
        self.fill = Some(paint.to_owned());
        self
    }

    pub fn stroke(mut self, paint: &str) -> Self {
        self.stroke = Some(paint.to_owned());
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    pub fn join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    pub fn transform(mut self, transform: &'static str) -> Self {
        self.transform = Some(transform);
        self
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        )?;
        for shape in &self.shapes {
            write!(f, "{shape}")?;
        }
        write!(f, "</svg>")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.geometry {
            Geometry::Path(d) => write!(f, r#"<path d="{d}""#)?,
            Geometry::Circle { cx, cy, r } => {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="{r}""#)?
            }
        }
        match &self.fill {
            Some(paint) => write!(f, r#" fill="{paint}""#)?,
            None => write!(f, r#" fill="none""#)?,
        }
        if let Some(paint) = &self.stroke {
            let cap = match self.line_cap {
                LineCap::Butt => "butt",
                LineCap::Round => "round",
            };
            let join = match self.line_join {
                LineJoin::Miter => "miter",
                LineJoin::Round => "round",
            };
            write!(
                f,
                r#" stroke="{paint}" stroke-width="{}" stroke-linecap="{cap}" stroke-linejoin="{join}""#,
                self.stroke_width
            )?;
        }
        if let Some(transform) = self.transform {
            write!(f, r#" transform="{transform}""#)?;
        }
        write!(f, "/>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn drawing_twice_yields_identical_documents() {
        for kind in PieceKind::iter() {
            let first = icon_for(kind).draw("black", "white");
            let second = icon_for(kind).draw("black", "white");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn paints_change_colors_but_not_geometry() {
        for kind in PieceKind::iter() {
            let dark = icon_for(kind).draw("black", "white");
            let light = icon_for(kind).draw("white", "black");
            assert_ne!(dark, light);
            assert_eq!(dark.geometry(), light.geometry());
        }
    }

    #[test]
    fn every_icon_uses_the_standard_canvas() {
        for kind in PieceKind::iter() {
            let doc = icon_for(kind).draw("black", "white");
            assert_eq!(doc.width, ICON_SIZE);
            assert_eq!(doc.height, ICON_SIZE);
            assert!(!doc.shapes.is_empty());
        }
    }

    #[test]
    fn queen_carries_five_crown_circles() {
        let doc = QueenIcon.draw("white", "black");
        let circles = doc
            .shapes
            .iter()
            .filter(|s| matches!(s.geometry, Geometry::Circle { .. }))
            .count();
        assert_eq!(circles, 5);
    }

    #[test]
    fn pawn_presets_match_the_parameterized_draw() {
        assert_eq!(black_pawn(), PawnIcon.draw("black", "white"));
        assert_eq!(white_pawn(), PawnIcon.draw("white", "black"));
    }

    #[test]
    fn serialized_svg_is_well_formed_enough() {
        let xml = draw_piece(Piece {
            kind: PieceKind::Bishop,
            side: Side::Black,
        })
        .to_xml();
        assert!(xml.starts_with("<svg "));
        assert!(xml.ends_with("</svg>"));
        assert!(xml.contains(r#"width="45""#));
        assert!(xml.contains(r#"fill="black""#));
        assert!(xml.contains(r#"stroke="white""#));
    }

    #[test]
    fn shape_transforms_serialize_as_given() {
        let shifted = Shape::path("M11 14h23")
            .stroke("black")
            .transform("translate(0 .3)");
        assert!(shifted.to_string().contains(r#" transform="translate(0 .3)""#));

        let xml = RookIcon.draw("white", "black").to_xml();
        assert!(xml.contains(r#" transform="translate(0 .3)""#));
    }

    #[test]
    fn side_paints_are_opposites() {
        let (black_fill, black_stroke) = side_paints(Side::Black);
        let (white_fill, white_stroke) = side_paints(Side::White);
        assert_eq!((black_fill, black_stroke), ("black", "white"));
        assert_eq!((white_fill, white_stroke), ("white", "black"));
    }
}
