//! Shapes drawn on a host canvas
//!
//! Unrelated to the entity engine; this is the seam a renderer plugs into.

/// Handle the host canvas returns for a drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasItemId(pub u64);

/// Host drawing surface
pub trait Canvas {
    /// Draw a rectangle and return the canvas' handle for it
    fn create_rectangle(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        fill: &str,
        outline: &str,
    ) -> CanvasItemId;
}

/// Bounding box and colours shared by all shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill: String,
    pub outline: String,
}

impl Default for Shape {
    fn default() -> Self {
        Shape {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
            fill: "red".to_string(),
            outline: "blue".to_string(),
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub shape: Shape,
    /// Set once drawn
    pub canvas_id: Option<CanvasItemId>,
}

impl Rectangle {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Rectangle {
            shape: Shape {
                x0,
                y0,
                x1,
                y1,
                ..Shape::default()
            },
            canvas_id: None,
        }
    }

    pub fn with_colors(mut self, fill: impl Into<String>, outline: impl Into<String>) -> Self {
        self.shape.fill = fill.into();
        self.shape.outline = outline.into();
        self
    }

    /// `(x1 - x0) * (y1 - y0)`
    ///
    /// Signed: corners given in reverse order on one axis yield a negative area.
    pub fn area(&self) -> f64 {
        let width = self.shape.x1 - self.shape.x0;
        let height = self.shape.y1 - self.shape.y0;
        width * height
    }

    /// Ask the canvas to draw this rectangle, remembering the returned handle
    pub fn draw(&mut self, canvas: &mut impl Canvas) -> CanvasItemId {
        let shape = &self.shape;
        let id = canvas.create_rectangle(
            shape.x0,
            shape.y0,
            shape.x1,
            shape.y1,
            &shape.fill,
            &shape.outline,
        );
        self.canvas_id = Some(id);
        id
    }
}
