use seatkit_designer::path::{BoundaryPath, PathSegment};
use seatkit_designer::Point;

fn triangle() -> BoundaryPath {
    BoundaryPath::from_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 80.0),
    ])
}

#[test]
fn test_from_polygon_structure() {
    let path = triangle();
    assert_eq!(path.segments().len(), 4);
    assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(path.segments()[3], PathSegment::Close);
}

#[test]
fn test_polygon_roundtrip() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 80.0),
    ];
    let path = BoundaryPath::from_polygon(&points);
    assert_eq!(path.to_polygon(), points);
}

#[test]
fn test_translate_rewrites_line_coordinates() {
    let mut path = triangle();
    path.translate(10.0, -5.0);
    assert_eq!(
        path.to_polygon(),
        vec![
            Point::new(10.0, -5.0),
            Point::new(110.0, -5.0),
            Point::new(60.0, 75.0),
        ]
    );
}

#[test]
fn test_translate_moves_curve_control_points() {
    let mut path = BoundaryPath::from_segments(vec![
        PathSegment::MoveTo(Point::new(0.0, 0.0)),
        PathSegment::QuadTo {
            ctrl: Point::new(50.0, 100.0),
            to: Point::new(100.0, 0.0),
        },
        PathSegment::CubicTo {
            ctrl1: Point::new(120.0, 20.0),
            ctrl2: Point::new(140.0, 40.0),
            to: Point::new(160.0, 0.0),
        },
        PathSegment::Close,
    ]);
    path.translate(5.0, 5.0);

    assert_eq!(
        path.segments()[1],
        PathSegment::QuadTo {
            ctrl: Point::new(55.0, 105.0),
            to: Point::new(105.0, 5.0),
        }
    );
    assert_eq!(
        path.segments()[2],
        PathSegment::CubicTo {
            ctrl1: Point::new(125.0, 25.0),
            ctrl2: Point::new(145.0, 45.0),
            to: Point::new(165.0, 5.0),
        }
    );
}

#[test]
fn test_to_path_data_format() {
    let path = BoundaryPath::from_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]);
    assert_eq!(path.to_path_data(), "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn test_path_data_roundtrip() {
    let path = BoundaryPath::from_segments(vec![
        PathSegment::MoveTo(Point::new(-3.5, 2.25)),
        PathSegment::LineTo(Point::new(10.0, 0.0)),
        PathSegment::QuadTo {
            ctrl: Point::new(15.0, 5.0),
            to: Point::new(20.0, 0.0),
        },
        PathSegment::Close,
    ]);
    let data = path.to_path_data();
    let parsed = BoundaryPath::from_path_data(&data).expect("canonical output must parse");
    assert_eq!(parsed, path);
}

#[test]
fn test_parse_relative_commands() {
    let path = BoundaryPath::from_path_data("m 10 10 l 5 0 z").expect("relative subset");
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(Point::new(10.0, 10.0)),
            PathSegment::LineTo(Point::new(15.0, 10.0)),
            PathSegment::Close,
        ]
    );
}

#[test]
fn test_parse_horizontal_vertical() {
    let path = BoundaryPath::from_path_data("M 0 0 H 10 V 5 h -4 v 2").expect("h/v subset");
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 5.0)),
            PathSegment::LineTo(Point::new(6.0, 5.0)),
            PathSegment::LineTo(Point::new(6.0, 7.0)),
        ]
    );
}

#[test]
fn test_parse_implicit_lineto_after_moveto() {
    let path = BoundaryPath::from_path_data("M 0 0 10 0 10 10 Z").expect("implicit lineto");
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 10.0)),
            PathSegment::Close,
        ]
    );
}

#[test]
fn test_parse_rejects_malformed_data() {
    assert!(BoundaryPath::from_path_data("M 10").is_none());
    assert!(BoundaryPath::from_path_data("M 0 0 L 10 0 A 5 5").is_none());
    assert!(BoundaryPath::from_path_data("10 20 30").is_none());
}

#[test]
fn test_parse_empty_data_is_empty_path() {
    let path = BoundaryPath::from_path_data("").expect("empty is a valid empty path");
    assert!(path.is_empty());
}

#[test]
fn test_contains_with_tolerance() {
    let path = BoundaryPath::from_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]);
    assert!(path.contains(Point::new(50.0, 50.0), 0.0));
    assert!(!path.contains(Point::new(150.0, 50.0), 0.0));
    // Just outside the edge, but within tolerance of it.
    assert!(path.contains(Point::new(102.0, 50.0), 3.0));
    assert!(!path.contains(Point::new(105.0, 50.0), 3.0));
}

#[test]
fn test_bounds() {
    let path = triangle();
    let bounds = path.bounds().expect("non-empty path has bounds");
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_x, 100.0);
    assert_eq!(bounds.max_y, 80.0);

    assert!(BoundaryPath::new().bounds().is_none());
}

#[test]
fn test_curve_bounds_cover_sampled_outline() {
    let path = BoundaryPath::from_segments(vec![
        PathSegment::MoveTo(Point::new(0.0, 0.0)),
        PathSegment::QuadTo {
            ctrl: Point::new(50.0, 100.0),
            to: Point::new(100.0, 0.0),
        },
        PathSegment::Close,
    ]);
    let bounds = path.bounds().expect("bounds");
    // The quadratic peaks at y = 50 (half the control height).
    assert!(bounds.max_y > 45.0 && bounds.max_y <= 50.0);
}
