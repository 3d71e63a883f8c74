mod test_utils;

use closed_fences::{
    core::math::{point, Point},
    fence,
    fence::{visible_edges, Fence},
};
use num_bigint::BigInt;
use test_utils::visit_modified_fences;

const T: bool = true;
const F: bool = false;

fn notched_fence() -> Fence {
    fence![
        (0, 0),
        (10, 0),
        (10, 8),
        (0, 8),
        (0, 4),
        (2, 6),
        (4, 4),
        (4, 6),
        (8, 6),
        (8, 2),
        (4, 2),
        (2, 4),
        (0, 2)
    ]
}

fn comb_fence() -> Fence {
    fence![
        (0, 0),
        (6, 0),
        (6, 4),
        (5, 4),
        (5, 1),
        (4, 1),
        (4, 4),
        (3, 4),
        (3, 1),
        (2, 1),
        (2, 4),
        (1, 4),
        (1, 1),
        (0, 1)
    ]
}

#[test]
fn middle_of_square() {
    let square: Fence = fence![(0, 0), (2, 0), (2, 2), (0, 2)];
    assert_eq!(square.visible_edges(&point(1, 1)), vec![T, T, T, T]);
}

#[test]
fn square_from_outside() {
    let square: Fence = fence![(0, 0), (2, 0), (2, 2), (0, 2)];
    let cases = [
        ((1, -1), [T, F, F, F]),
        ((-1, 1), [F, F, F, T]),
        ((3, 3), [F, T, T, F]),
        ((3, 1), [F, T, F, F]),
        ((1, 3), [F, F, T, F]),
        ((-1, -1), [T, F, F, T]),
        // lined up with an edge end point
        ((2, -1), [T, F, F, F]),
        // lined up with an edge, that edge is seen end on
        ((-2, 0), [F, F, F, T]),
        ((4, 0), [F, T, F, F]),
    ];

    for ((x, y), expected) in cases {
        assert_eq!(
            square.visible_edges(&point(x, y)),
            expected.to_vec(),
            "eye: ({}, {})",
            x,
            y
        );
    }
}

#[test]
fn arrow_shape() {
    let arrow = fence![(0, 0), (2, 0), (2, 2), (0, 2), (1, 1)];
    assert_eq!(arrow.visible_edges(&point(0, -1)), vec![T, F, F, F, F]);
    assert_eq!(arrow.visible_edges(&point(1, -1)), vec![T, F, F, F, F]);
    assert_eq!(arrow.visible_edges(&point(0, 1)), vec![F, F, F, T, T]);
}

#[test]
fn triangle_from_below() {
    let triangle = [point(0, 0), point(2, 0), point(1, 2)];
    assert_eq!(visible_edges(&point(1, -1), &triangle), vec![T, F, F]);
}

#[test]
fn points_left_and_right() {
    let fence = notched_fence();
    assert_eq!(
        fence.visible_edges(&point(6, 4)),
        vec![F, F, F, F, F, F, T, T, T, T, T, F, F]
    );
    assert_eq!(fence.visible_edge_indexes(&point(6, 4)), vec![6, 7, 8, 9, 10]);
}

#[test]
fn comb_teeth() {
    let comb = comb_fence();
    assert_eq!(comb.visible_edge_indexes(&point(3, -2)), vec![0]);
    assert_eq!(comb.visible_edge_indexes(&point(7, 2)), vec![1]);
    assert_eq!(comb.visible_edge_indexes(&point(-1, 3)), vec![11, 12, 13]);
    assert_eq!(
        comb.visible_edge_indexes(&point(2, 6)),
        vec![2, 3, 6, 7, 8, 10]
    );
}

#[test]
fn clockwise_fence() {
    let fence = fence![(1, 1), (0, 2), (2, 2), (2, 0), (0, 0)];
    assert_eq!(fence.visible_edges(&point(0, 1)), vec![T, F, F, F, T]);
}

#[test]
fn big_int_coordinates() {
    let scale = BigInt::from(10).pow(12);
    let scaled = |p: &Point<i64>| {
        point(
            BigInt::from(p.x) * &scale,
            BigInt::from(p.y) * &scale,
        )
    };

    let fence: Fence<BigInt> = notched_fence().vertexes().iter().map(scaled).collect();
    let eye = scaled(&point(6, 4));
    assert_eq!(
        fence.visible_edges(&eye),
        vec![F, F, F, F, F, F, T, T, T, T, T, F, F]
    );
}

#[test]
fn narrow_integer_coordinates() {
    let fence: Fence<i32> = fence![(0, 0), (2, 0), (2, 2), (0, 2), (1, 1)];
    assert_eq!(fence.visible_edges(&point(0, 1)), vec![F, F, F, T, T]);
}

#[test]
fn repeated_calls_match() {
    let fence = notched_fence();
    let eye = point(9, 7);
    let first = fence.visible_edges(&eye);
    for _ in 0..3 {
        assert_eq!(fence.visible_edges(&eye), first);
    }
}

#[test]
fn degenerate_inputs() {
    let empty: Fence = Fence::new();
    assert!(empty.visible_edges(&point(0, 0)).is_empty());
    let two = fence![(0, 0), (1, 0)];
    assert_eq!(two.visible_edges(&point(0, 1)), vec![F, F]);
}

#[test]
fn start_vertex_and_direction_do_not_matter() {
    let eyes = [(6, 4), (3, -2), (7, 2), (2, 6), (-1, 3), (9, 7), (5, 3), (11, 9), (-3, -3)];
    for fence in [notched_fence(), comb_fence()] {
        let vertex_count = fence.vertex_count();
        for (x, y) in eyes {
            let eye = point(x, y);
            let expected = fence.visible_edge_indexes(&eye);
            visit_modified_fences(&fence, true, |modified, state| {
                let mut visible: Vec<usize> = modified
                    .visible_edge_indexes(&eye)
                    .into_iter()
                    .map(|i| state.original_edge_index(i, vertex_count))
                    .collect();
                visible.sort_unstable();
                assert_eq!(visible, expected, "eye: ({}, {}), {:?}", x, y, state);
            });
        }
    }
}
