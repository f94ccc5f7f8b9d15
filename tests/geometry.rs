
extern crate polyscan;

use polyscan::Line;
use polyscan::Point;
use polyscan::Polygon;
use polyscan::RasterError;

#[test]
fn point_ops() {
    let a = Point::new(3, 4);
    let b = Point::new(-1, 2);
    assert_eq!(a + b, Point::new(2, 6));
    assert_eq!(a * 3, Point::new(9, 12));
    assert_eq!(-a, Point::new(-3, -4));
    assert_eq!(a.dot(b), 3 * -1 + 4 * 2);
    assert_eq!(a.to(b), Point::new(-4, -2));
    assert_eq!(a.to_abs(b), Point::new(4, 2));
    assert_eq!(Point::new(-3, 4).abs(), Point::new(3, 4));

    let mut c = a;
    c += b;
    assert_eq!(c, Point::new(2, 6));
    c.invert();
    assert_eq!(c, Point::new(-2, -6));
    c *= 2;
    assert_eq!(c, Point::new(-4, -12));
}

#[test]
fn line_helpers() {
    let l = Line::new(1, 1, 4, 3);
    assert_eq!(l.start(), Point::new(1, 1));
    assert_eq!(l.end(), Point::new(4, 3));
    assert_eq!(l.delta(), Point::new(3, 2));
    assert_eq!(Line::new(4, 3, 1, 1).delta_abs(), Point::new(3, 2));
    assert_eq!(l.left_normal(), Point::new(-2, 3));
    assert_eq!(l.right_normal(), Point::new(2, -3));

    let m = Line::new(0, 0, 0, 5);
    // (3,2) x (0,5)
    assert_eq!(l.pseudocross(&m), 15);
    assert_eq!(m.pseudocross(&l), -15);

    let mut s = l;
    s.swap_points();
    assert_eq!(s.start(), Point::new(4, 3));
    assert_eq!(s.end(), Point::new(1, 1));
}

#[test]
fn polygon_from_list() {
    let poly = Polygon::from_list(&[0, 0, 4, 0, 2, 4]).unwrap();
    assert_eq!(poly.len(), 3);
    assert_eq!(poly.get_point(2), Some(Point::new(2, 4)));
    assert_eq!(poly.get_point(3), None);

    assert_eq!(Polygon::from_list(&[0, 0, 4]), Err(RasterError::BadPointList(3)));
    assert_eq!(Polygon::from_list(&[]), Err(RasterError::BadPointList(0)));
}

#[test]
fn lines_iter_wraps_and_restarts() {
    let poly = Polygon::from_list(&[0, 0, 4, 0, 2, 4]).unwrap();
    let lines: Vec<Line> = poly.lines_iter().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], Line::new(0, 0, 4, 0));
    assert_eq!(lines[1], Line::new(4, 0, 2, 4));
    // wraparound edge closes the loop
    assert_eq!(lines[2], Line::new(2, 4, 0, 0));

    // iterator is restartable
    assert_eq!(poly.lines_iter().count(), 3);
    assert_eq!(poly.points_iter().count(), 3);

    assert_eq!(poly.get_line(2), Some(Line::new(2, 4, 0, 0)));
    assert_eq!(poly.get_line(3), None);
}

#[test]
fn orientation() {
    // counter-clockwise square (y up)
    let ccw = Polygon::from_list(&[0, 0, 10, 0, 10, 10, 0, 10]).unwrap();
    assert_eq!(ccw.is_clockwise(), Ok(false));

    let cw = Polygon::from_list(&[0, 10, 10, 10, 10, 0, 0, 0]).unwrap();
    assert_eq!(cw.is_clockwise(), Ok(true));

    let degenerate = Polygon::from_list(&[0, 0, 1, 1]).unwrap();
    assert_eq!(degenerate.is_clockwise(), Err(RasterError::TooFewPoints(2)));
}

#[test]
fn convexity() {
    let square = Polygon::from_list(&[0, 0, 10, 0, 10, 10, 0, 10]).unwrap();
    assert_eq!(square.is_convex(), Ok(true));

    let triangle = Polygon::from_list(&[0, 0, 4, 0, 2, 4]).unwrap();
    assert_eq!(triangle.is_convex(), Ok(true));

    // arrowhead, concave at (2,1); the sign flip is between the first
    // two edge pairs
    let arrow = Polygon::from_list(&[0, 0, 2, 1, 4, 0, 2, 4]).unwrap();
    assert_eq!(arrow.is_convex(), Ok(false));

    // concavity only visible across the wraparound pair
    let hook = Polygon::from_list(&[2, 1, 4, 0, 2, 4, 0, 0]).unwrap();
    assert_eq!(hook.is_convex(), Ok(false));

    let degenerate = Polygon::from_list(&[0, 0, 1, 1]).unwrap();
    assert_eq!(degenerate.is_convex(), Err(RasterError::TooFewPoints(2)));
}
