//! Tests for `catalog` module

use std::sync::Arc;

use super::catalog::*;
use super::error::Error;
use super::point::Point;
use super::route::Route;

fn taps() -> Vec<Point> {
    vec![
        Point::new(0.2, 0.2),
        Point::new(0.8, 0.2),
        Point::new(0.5, 0.8),
    ]
}

#[test]
fn test_new_catalog_is_empty() {
    let catalog = RouteCatalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.snapshot().is_empty());
}

#[test]
fn test_add_route_and_image() {
    // Arrange
    let catalog = RouteCatalog::new();
    let route_id = catalog.add_route("Overhang");

    // Act
    let image_id = catalog
        .add_image(&route_id, "overhang.jpg", taps())
        .expect("route exists");

    // Assert
    let route = catalog.get(&route_id).expect("route exists");
    assert_eq!(route.name, "Overhang");
    let image = route.image(&image_id).expect("image exists");
    assert_eq!(image.points, taps());
    assert_eq!(image.normalized_points.len(), 3);
}

#[test]
fn test_add_image_to_missing_route() {
    let catalog = RouteCatalog::new();
    let err = catalog
        .add_image("nope", "x.jpg", taps())
        .expect_err("route is missing");
    assert!(matches!(err, Error::RouteNotFound(id) if id == "nope"));
}

#[test]
fn test_delete_route() {
    let catalog = RouteCatalog::new();
    let keep = catalog.add_route("Keep");
    let gone = catalog.add_route("Drop");

    let removed = catalog.delete_route(&gone).expect("route exists");

    assert_eq!(removed.name, "Drop");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(&keep).is_some());
    assert!(matches!(
        catalog.delete_route(&gone),
        Err(Error::RouteNotFound(_))
    ));
}

#[test]
fn test_delete_image() {
    let catalog = RouteCatalog::new();
    let route_id = catalog.add_route("Dihedral");
    let image_id = catalog.add_image(&route_id, "a.jpg", taps()).unwrap();

    let removed = catalog.delete_image(&route_id, &image_id).expect("present");
    assert_eq!(removed.id, image_id);
    assert!(!catalog.get(&route_id).unwrap().has_images());

    assert!(matches!(
        catalog.delete_image(&route_id, &image_id),
        Err(Error::ImageNotFound { .. })
    ));
    assert!(matches!(
        catalog.delete_image("missing", &image_id),
        Err(Error::RouteNotFound(_))
    ));
}

#[test]
fn test_snapshot_is_frozen_against_later_writes() {
    // Arrange
    let catalog = RouteCatalog::new();
    let first = catalog.add_route("First");
    let snapshot = catalog.snapshot();

    // Act: mutate after the snapshot was taken
    catalog.add_route("Second");
    catalog.delete_route(&first).unwrap();

    // Assert
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "First");
    let current = catalog.snapshot();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].name, "Second");
}

#[test]
fn test_snapshots_share_storage_until_write() {
    let catalog = RouteCatalog::from_routes(vec![Route::new("A"), Route::new("B")]);

    let a = catalog.snapshot();
    let b = catalog.snapshot();
    assert!(Arc::ptr_eq(&a, &b));

    catalog.add_route("C");
    assert!(!Arc::ptr_eq(&a, &catalog.snapshot()));
}

#[test]
fn test_into_routes_preserves_order() {
    let catalog = RouteCatalog::from_routes(vec![Route::new("A"), Route::new("B")]);
    catalog.insert(Route::new("C"));

    let names: Vec<String> = catalog.into_routes().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn test_concurrent_readers_and_writer() {
    let catalog = Arc::new(RouteCatalog::new());
    for i in 0..10 {
        catalog.add_route(format!("seed-{i}"));
    }

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                for i in 0..50 {
                    if t == 0 {
                        catalog.add_route(format!("new-{i}"));
                    } else {
                        let snap = catalog.snapshot();
                        assert!(snap.len() >= 10);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread panicked");
    }
    assert_eq!(catalog.len(), 60);
}
