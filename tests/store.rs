
extern crate polyscan;

use polyscan::Point;
use polyscan::PolygonStore;
use polyscan::RasterError;

fn square(origin: Point) -> [Point; 4] {
    [origin,
     origin + Point::new(4, 0),
     origin + Point::new(4, 4),
     origin + Point::new(0, 4)]
}

#[test]
fn create_get_remove() {
    let mut store = PolygonStore::new();
    let a = store.create(&square(Point::new(0, 0)), "a");
    let b = store.create(&square(Point::new(10, 0)), "b");
    assert_eq!(store.len(), 2);
    assert_ne!(a, b);

    assert_eq!(store.get(a).unwrap().name, "a");
    store.get_mut(b).unwrap().name = "renamed".to_string();
    assert_eq!(store.get(b).unwrap().name, "renamed");

    assert!(store.remove(a));
    assert!(!store.remove(a));
    assert!(store.get(a).is_none());
    assert_eq!(store.len(), 1);

    // removed ids are never reused
    let c = store.create(&square(Point::new(20, 0)), "c");
    assert_ne!(c, a);
    assert_ne!(c, b);
}

#[test]
fn iteration_keeps_insertion_order() {
    let mut store = PolygonStore::new();
    store.create(&square(Point::new(0, 0)), "first");
    store.create(&square(Point::new(10, 0)), "second");
    store.create(&square(Point::new(20, 0)), "third");

    let names: Vec<&str> = store.iter().map(|(_, p)| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn rebuild_all_collects_failures() {
    let mut store = PolygonStore::new();
    let good = store.create(&square(Point::new(0, 0)), "good");
    let bad = store.create(&[Point::new(0, 0), Point::new(4, 4)], "bad");

    let errors = store.rebuild_all();
    assert_eq!(errors, vec![(bad, RasterError::TooFewPoints(2))]);

    // the failing polygon did not stop its neighbor from rebuilding
    assert_eq!(store.get(good).unwrap().spans().unwrap().len(), 4);
    assert_eq!(store.get(bad).unwrap().spans().unwrap_err(), RasterError::NoCache);
}
