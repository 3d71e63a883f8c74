use closed_fences::{
    core::math::{point, Point},
    fence,
    fence::Fence,
};
use num_bigint::BigInt;

fn main() {
    env_logger::init();

    square();
    notched();
    big_coordinates();
}

fn print_visible(fence: &Fence, eye: &Point) {
    log::info!("casting sight lines from {} to {} vertexes", eye, fence.vertex_count());
    let visible = fence.visible_edge_indexes(eye);
    println!("eye {}: visible edges {:?}", eye, visible);
    for i in visible {
        if let Some(edge) = fence.edge(i) {
            println!("    {}: {}", i, edge);
        }
    }
}

fn square() {
    println!("Square viewed from inside and outside...");

    let square = fence![(0, 0), (2, 0), (2, 2), (0, 2)];
    for eye in [point(1, 1), point(1, -1), point(3, 3), point(-2, 0)] {
        print_visible(&square, &eye);
    }

    println!();
}

fn notched() {
    println!("Notched fence, the inner wall hides most of the outer edges...");

    let notched = fence![
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
    ];
    print_visible(&notched, &point(6, 4));
    print_visible(&notched, &point(9, 7));

    println!();
}

fn big_coordinates() {
    println!("Coordinates beyond 64 bit products use BigInt...");

    let scale = BigInt::from(10).pow(20);
    let fence: Fence<BigInt> = [(0, 0), (2, 0), (2, 2), (0, 2), (1, 1)]
        .iter()
        .map(|&(x, y)| point(BigInt::from(x) * &scale, BigInt::from(y) * &scale))
        .collect();
    let eye = point(BigInt::from(0), scale.clone());

    println!("visible: {:?}", fence.visible_edges(&eye));
}
