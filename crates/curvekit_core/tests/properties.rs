//! Property-based tests across the vector, spline, sort and binary layers.

use curvekit_core::io::{dump, load};
use curvekit_core::math::interpolators::{cubic_spline, steffen_spline, Boundary};
use curvekit_core::math::sorting::joint_sort;
use curvekit_core::vector::Vector;
use proptest::prelude::*;

/// Strictly increasing abscissae with matching ordinates.
fn samples(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.01f64..5.0, -100.0f64..100.0), 2..max_len).prop_map(|steps| {
        let mut x = -10.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                (x, y)
            })
            .unzip()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Push(f64),
    Pop,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![3 => any::<f64>().prop_map(Op::Push), 2 => Just(Op::Pop)],
        0..200,
    )
}

proptest! {
    #[test]
    fn prop_slice_write_leaves_parent_unchanged(
        data in prop::collection::vec(-1e6f64..1e6, 1..64),
        start in 0usize..64,
        len in 1usize..64,
        value in -1e6f64..1e6,
    ) {
        let parent = Vector::from(data.clone());
        let mut view = parent.slice(start, len);
        prop_assume!(!view.is_empty());
        view.set(0, value).unwrap();
        prop_assert_eq!(parent.as_slice(), data.as_slice());
        prop_assert_eq!(view.get(0), Some(value));
    }

    #[test]
    fn prop_parent_write_leaves_slice_unchanged(
        data in prop::collection::vec(-1e6f64..1e6, 2..64),
        value in -1e6f64..1e6,
    ) {
        let mut parent = Vector::from(data.clone());
        let view = parent.slice(1, data.len() - 1);
        parent.set(1, value).unwrap();
        prop_assert_eq!(view.as_slice(), &data[1..]);
    }

    #[test]
    fn prop_capacity_tracks_push_pop(ops in ops()) {
        let mut v = Vector::new();
        let mut model: Vec<f64> = Vec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    v.push(x).unwrap();
                    model.push(x);
                }
                Op::Pop => {
                    prop_assert_eq!(v.pop().map(f64::to_bits), model.pop().map(f64::to_bits));
                }
            }
            prop_assert!(v.capacity() >= v.len());
            prop_assert_eq!(v.len(), model.len());
        }
    }

    #[test]
    fn prop_shift_drops_front(data in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let mut v = Vector::from(data.clone());
        prop_assert_eq!(v.shift(), Some(data[0]));
        prop_assert_eq!(v.as_slice(), &data[1..]);
        for k in 0..v.len() {
            prop_assert_eq!(v.get(k as isize), Some(data[k + 1]));
        }
    }

    #[test]
    fn prop_splines_exact_at_nodes((xs, ys) in samples(40), left in -5.0f64..5.0, right in -5.0f64..5.0) {
        let natural = cubic_spline(&xs, &ys, Boundary::Natural, Boundary::Natural).unwrap();
        let clamped = cubic_spline(&xs, &ys, Boundary::Clamped(left), Boundary::Clamped(right)).unwrap();
        let steffen = steffen_spline(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            prop_assert_eq!(natural.evaluate(x).unwrap(), y);
            prop_assert_eq!(clamped.evaluate(x).unwrap(), y);
            prop_assert_eq!(steffen.evaluate(x).unwrap(), y);
        }
    }

    #[test]
    fn prop_steffen_stays_within_segment_bounds((xs, ys) in samples(20)) {
        let steffen = steffen_spline(&xs, &ys).unwrap();
        for j in 0..xs.len() - 1 {
            let (lo, hi) = (ys[j].min(ys[j + 1]), ys[j].max(ys[j + 1]));
            let tol = 1e-9 * (1.0 + hi.abs().max(lo.abs()));
            for step in 1..10 {
                let x = xs[j] + (xs[j + 1] - xs[j]) * step as f64 / 10.0;
                let y = steffen.evaluate(x).unwrap();
                prop_assert!(y >= lo - tol && y <= hi + tol, "y({}) = {} outside [{}, {}]", x, y, lo, hi);
            }
        }
    }

    #[test]
    fn prop_joint_sort_keeps_pairs(keys in prop::collection::vec(-1e3f64..1e3, 0..300)) {
        let mut sorted = keys.clone();
        let mut tags: Vec<usize> = (0..keys.len()).collect();
        joint_sort(&mut sorted, &mut tags).unwrap();

        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        for (k, &tag) in sorted.iter().zip(tags.iter()) {
            prop_assert_eq!(*k, keys[tag]);
        }
        let mut seen = tags.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..keys.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_dump_load_bit_exact(values in prop::collection::vec(any::<f64>(), 0..100)) {
        let loaded = load(&dump(&values).unwrap()).unwrap();
        prop_assert_eq!(loaded.len(), values.len());
        for (a, b) in values.iter().zip(loaded.iter()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn natural_spline_overshoots_where_steffen_does_not() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let natural = cubic_spline(&xs, &[0.0, 1.0, 0.0, 1.0], Boundary::Natural, Boundary::Natural)
        .unwrap();
    let overshoot = (1..100)
        .map(|i| natural.evaluate(i as f64 / 100.0).unwrap())
        .any(|y| y > 1.0);
    assert!(overshoot);

    let steffen = steffen_spline(&xs, &[0.0, 1.0, 1.0, 1.0]).unwrap();
    for i in 0..=300 {
        let y = steffen.evaluate(i as f64 / 100.0).unwrap();
        assert!((0.0..=1.0).contains(&y), "y = {}", y);
    }
}

#[test]
fn twenty_pushes_fifteen_pops() {
    let mut v = Vector::new();
    for i in 0..20 {
        v.push(i as f64).unwrap();
    }
    let grown = v.capacity();
    for _ in 0..15 {
        v.pop();
    }
    assert_eq!(v.len(), 5);
    assert!(v.capacity() >= 5 && v.capacity() <= grown);
    assert_eq!(v.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
}
