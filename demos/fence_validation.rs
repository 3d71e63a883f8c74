use closed_fences::{
    fence,
    fence::{Fence, FenceValidateOptions},
};

fn main() {
    env_logger::init();

    valid_fences();
    invalid_fences();
    triangles();
}

fn print_validation(name: &str, fence: &Fence) {
    let result = fence.validate();
    log::info!("validated {} fence", name);
    println!("{:<12} {:>2} vertexes: {}", name, fence.vertex_count(), result);
}

fn valid_fences() {
    println!("Validating simple fences...");

    let square = fence![(0, 0), (1, 0), (1, 1), (0, 1)];
    print_validation("square", &square);

    let arrow = fence![(0, 0), (2, 0), (2, 2), (0, 2), (1, 1)];
    print_validation("arrow", &arrow);

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
    print_validation("notched", &notched);

    println!();
}

fn invalid_fences() {
    println!("Validating fences that are not simple...");

    let cases = [
        ("bow tie", fence![(0, 0), (2, 0), (2, 2), (1, -1)]),
        ("fold back", fence![(0, 0), (4, 0), (2, 0), (2, 3)]),
        ("closing", fence![(0, 0), (1, 0), (1, 1), (0, 1), (0, -1)]),
        ("touching", fence![(0, 0), (0, 2), (3, 3), (0, 4)]),
    ];

    for (name, fence) in cases.iter() {
        print_validation(name, fence);
    }

    println!();
}

fn triangles() {
    println!("Validating a triangle...");

    let triangle = fence![(0, 0), (2, 0), (1, 2)];
    print_validation("default", &triangle);

    let options = FenceValidateOptions {
        allow_triangles: true,
    };
    println!(
        "{:<12} {:>2} vertexes: {}",
        "triangles",
        triangle.vertex_count(),
        triangle.validate_opt(&options)
    );
}
