//! The drawing surface a boarding pass is composed on.
//!
//! A [Canvas] doesn't draw anything when its methods are called: each call
//! appends one [DrawCommand] to an ordered list, and the list is turned into a
//! PDF content stream in one pass when the document is written. Coordinates are
//! in millimetres from the card's top-left corner, y growing downwards.

use crate::colour::Colour;
use crate::font::StandardFont;
use crate::image::Image;
use crate::rect::Rect;
use crate::units::Mm;
use id_arena::{Arena, Id};

/// Horizontal alignment of a text run relative to its anchor x-coordinate
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextAlign {
    /// The text starts at the anchor
    Left,
    /// The text is centered on the anchor
    Center,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
    pub text: String,
    pub font: StandardFont,
    pub size: Mm,
    pub colour: Colour,
    /// Anchor point: x per [TextRun::align], y is the top of the line
    pub position: (Mm, Mm),
    pub align: TextAlign,
}

impl TextRun {
    /// Where the run's baseline starts, accounting for alignment and the font's ascent
    pub fn baseline_origin(&self) -> (Mm, Mm) {
        let (x, y) = self.position;
        let x = match self.align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.font.width_of_text(&self.text, self.size) / 2.0,
        };
        (x, y + self.font.ascent(self.size))
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Rect(Rect),
    RoundedRect {
        rect: Rect,
        radius: Mm,
    },
    /// A closed polygon through the given points
    Polygon(Vec<(Mm, Mm)>),
}

#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Fill {
        shape: Shape,
        colour: Colour,
        /// Fill opacity, 0.0 (transparent) to 1.0 (opaque)
        opacity: f32,
    },
    Text(TextRun),
    Image {
        image: Id<Image>,
        position: Rect,
    },
}

/// A fixed-size page and the ordered commands that draw on it
pub struct Canvas {
    pub width: Mm,
    pub height: Mm,
    pub commands: Vec<DrawCommand>,
    pub images: Arena<Image>,
}

impl Canvas {
    pub fn new(width: Mm, height: Mm) -> Canvas {
        Canvas {
            width,
            height,
            commands: Vec::new(),
            images: Arena::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) -> &mut Self {
        log::trace!("canvas command #{}: {command:?}", self.commands.len());
        self.commands.push(command);
        self
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) -> &mut Self {
        self.push(DrawCommand::Fill {
            shape: Shape::Rect(rect),
            colour,
            opacity: 1.0,
        })
    }

    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: Mm,
        colour: Colour,
        opacity: f32,
    ) -> &mut Self {
        self.push(DrawCommand::Fill {
            shape: Shape::RoundedRect { rect, radius },
            colour,
            opacity,
        })
    }

    pub fn fill_polygon(&mut self, points: Vec<(Mm, Mm)>, colour: Colour) -> &mut Self {
        self.push(DrawCommand::Fill {
            shape: Shape::Polygon(points),
            colour,
            opacity: 1.0,
        })
    }

    pub fn text<S: Into<String>>(
        &mut self,
        text: S,
        font: StandardFont,
        size: Mm,
        colour: Colour,
        position: (Mm, Mm),
        align: TextAlign,
    ) -> &mut Self {
        self.push(DrawCommand::Text(TextRun {
            text: text.into(),
            font,
            size,
            colour,
            position,
            align,
        }))
    }

    /// Add an image to the canvas and draw it stretched over `position`
    pub fn image(&mut self, image: Image, position: Rect) -> Id<Image> {
        let id = self.images.alloc(image);
        self.push(DrawCommand::Image {
            image: id,
            position,
        });
        id
    }

    /// The text runs in drawing order
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    /// The distinct fill opacities below 1.0, in order of first use. Each needs
    /// its own graphics state resource.
    pub fn opacities(&self) -> Vec<f32> {
        let mut opacities: Vec<f32> = Vec::new();
        for command in self.commands.iter() {
            if let DrawCommand::Fill { opacity, .. } = command {
                if *opacity < 1.0 && !opacities.contains(opacity) {
                    opacities.push(*opacity);
                }
            }
        }
        opacities
    }
}
