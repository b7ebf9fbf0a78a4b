use super::*;
use crate::point::Point;
use crate::polygon::Polygon;
use proptest::prelude::*;
use std::rc::Rc;

#[test]
fn default_and_reserved_construction() {
    let arr: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(arr.get_size(), 0);
    assert_eq!(arr.get_capacity(), 16);
    assert!(arr.is_empty());

    let arr = DynamicArray::<f64>::with_capacity(10).unwrap();
    assert_eq!(arr.len(), 0);
    assert!(arr.capacity() >= 10);

    assert!(matches!(
        DynamicArray::<i32>::with_capacity(0),
        Err(GeomError::InvalidConfiguration { .. })
    ));
}

#[test]
fn append_chains_and_grows_by_doubling() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.append(1).append(2);
    assert_eq!(arr.capacity(), 2);
    arr.append(3);
    assert_eq!(arr.capacity(), 4);
    arr.append(4).append(5);
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.as_slice(), &[1, 2, 3, 4, 5]);

    let mut big = DynamicArray::new();
    for i in 0..20 {
        big.append(i);
    }
    assert_eq!(big.len(), 20);
    assert_eq!(big.capacity(), 32);
    for i in 0..20 {
        assert_eq!(big[i], i);
    }
}

#[test]
fn remove_first_middle_last() {
    let mut arr: DynamicArray<i32> = [10, 20, 30, 40].into_iter().collect();
    assert_eq!(arr.remove(1).unwrap(), 20);
    assert_eq!(arr.as_slice(), &[10, 30, 40]);
    assert_eq!(arr.remove(0).unwrap(), 10);
    assert_eq!(arr.as_slice(), &[30, 40]);
    assert_eq!(arr.remove(1).unwrap(), 40);
    assert_eq!(arr.as_slice(), &[30]);
}

#[test]
fn out_of_range_access_and_removal() {
    let mut arr = DynamicArray::new();
    assert_eq!(
        arr.remove(0),
        Err(GeomError::OutOfRange { index: 0, len: 0 })
    );
    arr.append(1).append(2);
    assert!(arr.get(2).is_err());
    assert!(arr.get_mut(5).is_err());
    assert!(arr.remove(2).is_err());
    assert!(arr.format_at(2).is_err());
    assert_eq!(arr.len(), 2);
}

#[test]
#[should_panic(expected = "index 3 out of range for length 1")]
fn index_operator_panics_past_end() {
    let mut arr = DynamicArray::new();
    arr.append(1);
    let _ = arr[3];
}

#[test]
fn index_mut_overwrites_in_place() {
    let mut arr = DynamicArray::new();
    arr.append("a".to_string()).append("b".to_string());
    arr[1].push('!');
    *arr.get_mut(0).unwrap() = "z".to_string();
    assert_eq!(arr.as_slice(), &["z".to_string(), "b!".to_string()]);
}

#[test]
fn clone_is_deep_and_independent() {
    let mut original = DynamicArray::with_capacity(3).unwrap();
    original.append(1).append(2).append(3);
    let mut copy = original.clone();
    assert_eq!(copy.capacity(), 3);
    assert_eq!(copy, original);

    copy[0] = 100;
    copy.append(4);
    assert_eq!(original.as_slice(), &[1, 2, 3]);
    original.remove(2).unwrap();
    assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn clone_from_replaces_contents() {
    let mut src = DynamicArray::new();
    src.append(7).append(8);
    let mut dst = DynamicArray::with_capacity(1).unwrap();
    dst.append(1);
    dst.clone_from(&src);
    assert_eq!(dst.as_slice(), &[7, 8]);
    assert_eq!(dst.capacity(), 16);
}

#[test]
fn self_assignment_keeps_contents() {
    let mut arr = DynamicArray::new();
    arr.append(1).append(2).append(3);
    let snapshot = arr.clone();
    arr = snapshot;
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(arr.capacity(), 16);
}

#[test]
fn take_leaves_source_relinquished() {
    let mut src = DynamicArray::new();
    src.append("hello".to_string()).append("world".to_string());
    let moved = src.take();
    assert_eq!(moved.len(), 2);
    assert_eq!(moved[0], "hello");
    assert_eq!(moved[1], "world");
    assert_eq!(src.len(), 0);
    assert_eq!(src.capacity(), 0);

    // a relinquished array regrows on demand
    src.append("again".to_string());
    assert_eq!(src.len(), 1);
    assert_eq!(src.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn display_dump() {
    let empty: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(empty.to_string(), "Array is empty\n");

    let mut arr = DynamicArray::new();
    arr.append(Point::new(1, 1)).append(Point::new(2, 2));
    assert_eq!(arr.to_string(), "(1, 1)(2, 2)");
    assert_eq!(arr.format_at(1).unwrap(), "(2, 2)\n");

    let mut one = DynamicArray::new();
    one.append(42);
    assert!(one.format_at(0).unwrap().contains("42"));
}

#[test]
fn stress_remove_every_other() {
    let mut arr = DynamicArray::new();
    for i in 0..1000 {
        arr.append(i);
    }
    assert_eq!(arr.len(), 1000);
    for i in (0..1000).rev().step_by(2) {
        arr.remove(i).unwrap();
    }
    assert_eq!(arr.len(), 500);
    assert!(arr.iter().enumerate().all(|(k, &v)| v == 2 * k));
}

#[test]
fn holds_owned_polygons() {
    let tri = Polygon::from_vertices(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 2.0),
    ])
    .unwrap();
    let square = Polygon::from_vertices(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap();
    let mut polys = DynamicArray::new();
    polys.append(tri).append(square);
    assert!((polys[0].area() - 2.0).abs() < 1e-9);
    assert!((polys[1].area() - 1.0).abs() < 1e-9);
    assert!((polys.total_area() - 3.0).abs() < 1e-9);

    polys.remove(0).unwrap();
    assert_eq!(polys.len(), 1);
    assert!((polys[0].area() - 1.0).abs() < 1e-9);
}

#[test]
fn holds_shared_figure_handles() {
    let mut tri = Polygon::new(3).unwrap();
    tri.set_vertex(0, Point::new(0.0, 0.0)).unwrap();
    tri.set_vertex(1, Point::new(3.0, 0.0)).unwrap();
    tri.set_vertex(2, Point::new(0.0, 4.0)).unwrap();
    let tri: Rc<dyn Figure> = Rc::new(tri);

    let mut figures: DynamicArray<Rc<dyn Figure>> = DynamicArray::new();
    figures.append(Rc::clone(&tri)).append(Rc::clone(&tri));
    assert_eq!(Rc::strong_count(&tri), 3);
    assert!((figures[0].as_f64() - 6.0).abs() < 1e-9);
    assert!((figures.total_area() - 12.0).abs() < 1e-9);

    drop(figures);
    assert_eq!(Rc::strong_count(&tri), 1);

    let empty: DynamicArray<Rc<dyn Figure>> = DynamicArray::new();
    assert_eq!(empty.total_area(), 0.0);
}

proptest! {
    #[test]
    fn appends_keep_order_and_capacity(values in proptest::collection::vec(any::<i64>(), 0..200)) {
        let arr: DynamicArray<i64> = values.iter().copied().collect();
        prop_assert_eq!(arr.len(), values.len());
        prop_assert!(arr.capacity() >= arr.len());
        prop_assert!(arr.capacity() >= DEFAULT_CAPACITY);
        prop_assert!(arr.capacity().is_power_of_two());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(arr[i], *v);
        }
    }

    #[test]
    fn remove_preserves_relative_order(
        values in proptest::collection::vec(any::<u16>(), 1..64),
        pick in any::<proptest::sample::Index>(),
    ) {
        let idx = pick.index(values.len());
        let mut arr: DynamicArray<u16> = values.iter().copied().collect();
        let removed = arr.remove(idx).unwrap();
        let mut expected = values.clone();
        let want = expected.remove(idx);
        prop_assert_eq!(removed, want);
        prop_assert_eq!(arr.as_slice(), expected.as_slice());
    }
}
