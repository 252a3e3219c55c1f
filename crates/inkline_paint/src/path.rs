//! Path building and representation

use smallvec::SmallVec;

/// A 2D point in surface-local pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    ///
    /// Freehand smoothing anchors curves at the midpoint between raw
    /// samples, so strokes pass near rather than exactly through them.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    /// Append a circle as its own closed subpath, approximated by eight
    /// quadratic segments
    ///
    /// Control points sit at the tangent intersection, slightly outside
    /// the radius. Combined with an even-odd fill or a difference clip,
    /// the subpath punches a circular hole.
    pub fn circle(mut self, cx: f32, cy: f32, radius: f32) -> Self {
        const SEGMENTS: u32 = 8;
        let step = 2.0 * std::f32::consts::PI / SEGMENTS as f32;
        let control_radius = radius / (step / 2.0).cos();

        let at = |angle: f32, r: f32| Point::new(cx + r * angle.cos(), cy + r * angle.sin());
        self.path.commands.push(PathCommand::MoveTo(at(0.0, radius)));
        for i in 0..SEGMENTS {
            let control = at((i as f32 + 0.5) * step, control_radius);
            let end = at((i as f32 + 1.0) * step, radius);
            self.path.commands.push(PathCommand::QuadTo { control, end });
        }
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
