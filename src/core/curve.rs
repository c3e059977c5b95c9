//! Cubic Bézier geometry through a sequence of anchors.
//!
//! ### Layout
//! For N anchors the output holds `1 + 3 * (N - 1)` vertices, each paired with a
//! [`PathCommand`]: one `Move` to the first anchor, then per segment the triplet
//! `(ctrl1, ctrl2, anchor)` tagged `Cubic`. This is the vertex/code layout most
//! path APIs accept directly.
//!
//! Control points sit at the height of their own anchor and are pushed
//! horizontally by `(x1 - x0) * tightness`, so each segment leaves and enters its
//! anchors with a flat tangent. A tightness of zero collapses the controls onto
//! the anchors (straight lines); there is no upper bound.

use std::fmt::Write as _;

use crate::core::error::BumpError;

/// Plain 2-D point in data space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Path code attached to each vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathCommand {
    Move,
    Cubic,
}

/// One cubic segment, anchors included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    /// Evaluate the Bernstein form at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point {
            x: b0 * self.from.x + b1 * self.ctrl1.x + b2 * self.ctrl2.x + b3 * self.to.x,
            y: b0 * self.from.y + b1 * self.ctrl1.y + b2 * self.ctrl2.y + b3 * self.to.y,
        }
    }
}

/// Vertices + matching commands describing one bump line.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveGeometry {
    vertices: Vec<Point>,
    commands: Vec<PathCommand>,
}

impl CurveGeometry {
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Split into raw parts for a backend that wants owned buffers.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Point>, Vec<PathCommand>) {
        (self.vertices, self.commands)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a value built by [`generate_curve`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The on-curve points, i.e. the anchors the curve was built from.
    pub fn anchors(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().step_by(3).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        self.vertices
            .windows(4)
            .step_by(3)
            .map(|w| CubicSegment {
                from: w[0],
                ctrl1: w[1],
                ctrl2: w[2],
                to: w[3],
            })
    }

    /// SVG path data (`M x y C x1 y1 x2 y2 x y ...`).
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(self.vertices.len() * 12);
        for (i, (p, cmd)) in self.vertices.iter().zip(&self.commands).enumerate() {
            match cmd {
                PathCommand::Move => {
                    if !d.is_empty() {
                        d.push(' ');
                    }
                    let _ = write!(d, "M {} {}", p.x, p.y);
                }
                PathCommand::Cubic => {
                    // first vertex of each triplet opens a new `C` group
                    if i % 3 == 1 {
                        d.push_str(" C");
                    }
                    let _ = write!(d, " {} {}", p.x, p.y);
                }
            }
        }
        d
    }
}

/// Build the Bézier path through `(xs[i], ys[i])`.
///
/// # Errors
/// * [`BumpError::LengthMismatch`] - `xs` and `ys` differ in length
/// * [`BumpError::EmptyInput`] - no anchors at all
/// * [`BumpError::InvalidTightness`] - `tightness` is negative or not finite
pub fn generate_curve(xs: &[f64], ys: &[f64], tightness: f64) -> Result<CurveGeometry, BumpError> {
    if xs.len() != ys.len() {
        return Err(BumpError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    build(xs.iter().zip(ys).map(|(&x, &y)| Point { x, y }), xs.len(), tightness)
}

/// Same as [`generate_curve`] for callers that already hold points.
///
/// # Errors
/// See [`generate_curve`]; a length mismatch cannot happen here.
pub fn generate_curve_from_anchors(
    anchors: &[Point],
    tightness: f64,
) -> Result<CurveGeometry, BumpError> {
    build(anchors.iter().copied(), anchors.len(), tightness)
}

fn build(
    mut anchors: impl Iterator<Item = Point>,
    n: usize,
    tightness: f64,
) -> Result<CurveGeometry, BumpError> {
    if !tightness.is_finite() || tightness < 0.0 {
        return Err(BumpError::InvalidTightness(tightness));
    }
    let Some(first) = anchors.next() else {
        return Err(BumpError::EmptyInput);
    };

    let cap = 1 + 3 * (n - 1);
    let mut vertices = Vec::with_capacity(cap);
    let mut commands = Vec::with_capacity(cap);
    vertices.push(first);
    commands.push(PathCommand::Move);

    let mut prev = first;
    for next in anchors {
        let dx = (next.x - prev.x) * tightness;
        vertices.extend([
            Point::new(prev.x + dx, prev.y),
            Point::new(next.x - dx, next.y),
            next,
        ]);
        commands.extend([PathCommand::Cubic; 3]);
        prev = next;
    }

    debug_assert_eq!(vertices.len(), cap);
    Ok(CurveGeometry { vertices, commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tightness_is_straight() {
        let c = generate_curve(&[0.0, 1.0], &[1.0, 2.0], 0.0).unwrap();
        assert_eq!(
            c.vertices(),
            [
                Point::new(0.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 2.0),
                Point::new(1.0, 2.0)
            ]
        );
        assert_eq!(
            c.commands(),
            [
                PathCommand::Move,
                PathCommand::Cubic,
                PathCommand::Cubic,
                PathCommand::Cubic
            ]
        );
    }

    #[test]
    fn controls_are_pushed_horizontally() {
        let c = generate_curve(&[0.0, 2.0, 6.0], &[1.0, 3.0, 2.0], 0.25).unwrap();
        assert_eq!(
            c.vertices(),
            [
                Point::new(0.0, 1.0),
                Point::new(0.5, 1.0),
                Point::new(1.5, 3.0),
                Point::new(2.0, 3.0),
                Point::new(3.0, 3.0),
                Point::new(5.0, 2.0),
                Point::new(6.0, 2.0),
            ]
        );
    }

    #[test]
    fn single_anchor_is_a_lone_move() {
        let c = generate_curve(&[4.0], &[2.0], 1.0).unwrap();
        assert_eq!(c.vertices(), [Point::new(4.0, 2.0)]);
        assert_eq!(c.commands(), [PathCommand::Move]);
        assert_eq!(c.segments().count(), 0);
        assert_eq!(c.to_svg_path(), "M 4 2");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            generate_curve(&[0.0, 1.0], &[1.0], 0.5),
            Err(BumpError::LengthMismatch { xs: 2, ys: 1 })
        ));
        assert!(matches!(
            generate_curve(&[], &[], 0.5),
            Err(BumpError::EmptyInput)
        ));
        assert!(matches!(
            generate_curve(&[0.0], &[0.0], -0.1),
            Err(BumpError::InvalidTightness(_))
        ));
        assert!(matches!(
            generate_curve(&[0.0], &[0.0], f64::NAN),
            Err(BumpError::InvalidTightness(_))
        ));
    }

    #[test]
    fn svg_path_groups_triplets() {
        let c = generate_curve(&[0.0, 1.0, 2.0], &[1.0, 2.0, 1.0], 0.5).unwrap();
        assert_eq!(
            c.to_svg_path(),
            "M 0 1 C 0.5 1 0.5 2 1 2 C 1.5 2 1.5 1 2 1"
        );
    }
}
