//! Zone boundary geometry as a typed segment list.
//!
//! A boundary is a closed vector path: a `MoveTo` followed by line and curve
//! segments, usually ending in `Close`. The segments hold literal scene
//! coordinates; moving a zone rewrites every coordinate rather than stacking
//! a transform on top, so downstream consumers always read raw geometry.
//! Translation maps curve control points too, not just line endpoints.

use seatkit_core::geometry::{point_in_polygon, segment_distance, Point, Rect};
use serde::{Deserialize, Serialize};

/// Number of straight spans a curve segment is flattened into for
/// hit-testing and bounds.
const CURVE_STEPS: usize = 8;

/// One drawing command of a boundary path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// A zone outline: an ordered list of [`PathSegment`]s in scene space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryPath {
    segments: Vec<PathSegment>,
}

impl BoundaryPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Builds a closed polygonal boundary from a vertex list.
    pub fn from_polygon(points: &[Point]) -> Self {
        let mut segments = Vec::with_capacity(points.len() + 1);
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            segments.push(PathSegment::MoveTo(*first));
            for p in iter {
                segments.push(PathSegment::LineTo(*p));
            }
            segments.push(PathSegment::Close);
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The committed vertices of a line-only boundary, in drawing order.
    /// Curve control points are not included; curve endpoints are.
    pub fn to_polygon(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(*p),
                PathSegment::QuadTo { to, .. } | PathSegment::CubicTo { to, .. } => {
                    points.push(*to)
                }
                PathSegment::Close => {}
            }
        }
        points
    }

    /// Translates every segment by `(dx, dy)`, control points included.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for seg in &mut self.segments {
            match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p = p.offset(dx, dy),
                PathSegment::QuadTo { ctrl, to } => {
                    *ctrl = ctrl.offset(dx, dy);
                    *to = to.offset(dx, dy);
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    *ctrl1 = ctrl1.offset(dx, dy);
                    *ctrl2 = ctrl2.offset(dx, dy);
                    *to = to.offset(dx, dy);
                }
                PathSegment::Close => {}
            }
        }
    }

    /// Flattens the path into a polyline, sampling curve segments.
    pub fn flattened(&self) -> Vec<Point> {
        let mut points = Vec::new();
        let mut current = Point::ORIGIN;
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    points.push(*p);
                    current = *p;
                }
                PathSegment::QuadTo { ctrl, to } => {
                    for i in 1..=CURVE_STEPS {
                        let t = i as f64 / CURVE_STEPS as f64;
                        points.push(quad_at(current, *ctrl, *to, t));
                    }
                    current = *to;
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    for i in 1..=CURVE_STEPS {
                        let t = i as f64 / CURVE_STEPS as f64;
                        points.push(cubic_at(current, *ctrl1, *ctrl2, *to, t));
                    }
                    current = *to;
                }
                PathSegment::Close => {}
            }
        }
        points
    }

    /// Axis-aligned bounding box of the flattened outline.
    /// Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(&self.flattened())
    }

    /// Closed-path containment with a tolerance band along the outline.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        let outline = self.flattened();
        if point_in_polygon(p, &outline) {
            return true;
        }
        if tolerance > 0.0 && outline.len() >= 2 {
            for w in outline.windows(2) {
                if segment_distance(p, w[0], w[1]) <= tolerance {
                    return true;
                }
            }
            // Closing edge back to the first vertex.
            if segment_distance(p, outline[outline.len() - 1], outline[0]) <= tolerance {
                return true;
            }
        }
        false
    }

    /// Any-overlap test of the rendered bounds against a rectangle.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.bounds().map(|b| b.intersects(rect)).unwrap_or(false)
    }

    /// Formats the path as SVG-style path data (`M x y L x y ... Z`),
    /// always in absolute commands.
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for seg in &self.segments {
            if !data.is_empty() {
                data.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => data.push_str(&format!("M {} {}", p.x, p.y)),
                PathSegment::LineTo(p) => data.push_str(&format!("L {} {}", p.x, p.y)),
                PathSegment::QuadTo { ctrl, to } => {
                    data.push_str(&format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y))
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => data.push_str(&format!(
                    "C {} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )),
                PathSegment::Close => data.push('Z'),
            }
        }
        data
    }

    /// Parses SVG-style path data into a typed segment list.
    ///
    /// Supports a practical subset of path commands: `M/L/H/V/Q/C/Z` in
    /// both absolute and relative forms, with repeated coordinate groups
    /// (implicit `LineTo` after `MoveTo`, per the SVG grammar). Returns
    /// `None` when the data cannot be parsed; arc commands are out of
    /// contract.
    pub fn from_path_data(data: &str) -> Option<Self> {
        let tokens = tokenize(data);
        let mut segments = Vec::new();
        let mut current = Point::ORIGIN;
        let mut start = Point::ORIGIN;
        let mut i = 0usize;

        while i < tokens.len() {
            let cmd = match &tokens[i] {
                Token::Command(c) => {
                    i += 1;
                    *c
                }
                Token::Number(_) => return None, // number with no command in effect
            };
            let relative = cmd.is_ascii_lowercase();
            match cmd.to_ascii_uppercase() {
                'M' => {
                    let mut first = true;
                    while let Some((x, y)) = take_pair(&tokens, &mut i) {
                        let p = resolve(x, y, current, relative);
                        if first {
                            segments.push(PathSegment::MoveTo(p));
                            start = p;
                            first = false;
                        } else {
                            segments.push(PathSegment::LineTo(p));
                        }
                        current = p;
                    }
                    if first {
                        return None;
                    }
                }
                'L' => {
                    let mut any = false;
                    while let Some((x, y)) = take_pair(&tokens, &mut i) {
                        let p = resolve(x, y, current, relative);
                        segments.push(PathSegment::LineTo(p));
                        current = p;
                        any = true;
                    }
                    if !any {
                        return None;
                    }
                }
                'H' => {
                    let mut any = false;
                    while let Some(x) = take_number(&tokens, &mut i) {
                        let p = if relative {
                            Point::new(current.x + x, current.y)
                        } else {
                            Point::new(x, current.y)
                        };
                        segments.push(PathSegment::LineTo(p));
                        current = p;
                        any = true;
                    }
                    if !any {
                        return None;
                    }
                }
                'V' => {
                    let mut any = false;
                    while let Some(y) = take_number(&tokens, &mut i) {
                        let p = if relative {
                            Point::new(current.x, current.y + y)
                        } else {
                            Point::new(current.x, y)
                        };
                        segments.push(PathSegment::LineTo(p));
                        current = p;
                        any = true;
                    }
                    if !any {
                        return None;
                    }
                }
                'Q' => {
                    let mut any = false;
                    while let Some((cx, cy)) = take_pair(&tokens, &mut i) {
                        let (x, y) = take_pair(&tokens, &mut i)?;
                        let ctrl = resolve(cx, cy, current, relative);
                        let to = resolve(x, y, current, relative);
                        segments.push(PathSegment::QuadTo { ctrl, to });
                        current = to;
                        any = true;
                    }
                    if !any {
                        return None;
                    }
                }
                'C' => {
                    let mut any = false;
                    while let Some((c1x, c1y)) = take_pair(&tokens, &mut i) {
                        let (c2x, c2y) = take_pair(&tokens, &mut i)?;
                        let (x, y) = take_pair(&tokens, &mut i)?;
                        let ctrl1 = resolve(c1x, c1y, current, relative);
                        let ctrl2 = resolve(c2x, c2y, current, relative);
                        let to = resolve(x, y, current, relative);
                        segments.push(PathSegment::CubicTo { ctrl1, ctrl2, to });
                        current = to;
                        any = true;
                    }
                    if !any {
                        return None;
                    }
                }
                'Z' => {
                    segments.push(PathSegment::Close);
                    current = start;
                }
                _ => return None,
            }
        }

        Some(Self { segments })
    }
}

fn resolve(x: f64, y: f64, current: Point, relative: bool) -> Point {
    if relative {
        Point::new(current.x + x, current.y + y)
    } else {
        Point::new(x, y)
    }
}

fn quad_at(p0: Point, ctrl: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * ctrl.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * ctrl.y + t * t * p1.y,
    )
}

fn cubic_at(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * u * p0.x + 3.0 * u * u * t * c1.x + 3.0 * u * t * t * c2.x + t * t * t * p1.x,
        u * u * u * p0.y + 3.0 * u * u * t * c1.y + 3.0 * u * t * t * c2.y + t * t * t * p1.y,
    )
}

enum Token {
    Command(char),
    Number(f64),
}

fn tokenize(data: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let flush = |buf: &mut String, tokens: &mut Vec<Token>| {
        if !buf.is_empty() {
            if let Ok(n) = buf.parse::<f64>() {
                tokens.push(Token::Number(n));
            }
            buf.clear();
        }
    };
    for ch in data.chars() {
        if ch.is_ascii_alphabetic() {
            flush(&mut buf, &mut tokens);
            tokens.push(Token::Command(ch));
        } else if ch.is_ascii_whitespace() || ch == ',' {
            flush(&mut buf, &mut tokens);
        } else if ch == '-' && !buf.is_empty() && !buf.ends_with(['e', 'E']) {
            // A minus sign starts a new number unless it is an exponent sign.
            flush(&mut buf, &mut tokens);
            buf.push(ch);
        } else {
            buf.push(ch);
        }
    }
    flush(&mut buf, &mut tokens);
    tokens
}

fn take_number(tokens: &[Token], i: &mut usize) -> Option<f64> {
    match tokens.get(*i) {
        Some(Token::Number(n)) => {
            *i += 1;
            Some(*n)
        }
        _ => None,
    }
}

fn take_pair(tokens: &[Token], i: &mut usize) -> Option<(f64, f64)> {
    let checkpoint = *i;
    let x = take_number(tokens, i)?;
    match take_number(tokens, i) {
        Some(y) => Some((x, y)),
        None => {
            *i = checkpoint;
            None
        }
    }
}
