use closed_fences::core::math::{
    classify, grazing_angle_key, point, point_on_segment, side_of, Segment, SegmentIntr,
};

fn main() {
    segment_classification();
    segment_predicates();
}

fn segment_classification() {
    println!("Classifying segment pairs...");

    // (segment1, segment2, description)
    let test_cases = [
        (
            Segment::new(point(0, 0), point(2, 2)),
            Segment::new(point(0, 2), point(2, 0)),
            "crossing diagonals",
        ),
        (
            Segment::new(point(0, 0), point(1, 1)),
            Segment::new(point(1, 1), point(2, 2)),
            "collinear end to end",
        ),
        (
            Segment::new(point(0, 0), point(2, 2)),
            Segment::new(point(1, 1), point(0, 2)),
            "start point on interior",
        ),
        (
            Segment::new(point(0, 0), point(1, 1)),
            Segment::new(point(1, 0), point(2, 1)),
            "parallel",
        ),
        (
            Segment::new(point(0, 0), point(1, 1)),
            Segment::new(point(5, 5), point(-5, 5)),
            "crossing only when extended",
        ),
    ];

    for (seg1, seg2, description) in test_cases.iter() {
        match classify(seg1, seg2) {
            SegmentIntr::NoIntersect => println!("{}: no intersect", description),
            SegmentIntr::IntersectAsSubset => println!("{}: collinear overlap", description),
            SegmentIntr::Intersect { t, s } => {
                println!("{}: lines cross at t = {}, s = {}", description, t, s)
            }
        }
    }

    println!();
}

fn segment_predicates() {
    println!("Point predicates...");

    let seg = Segment::new(point(2, 2), point(0, 0));
    for p in [point(1, 1), point(3, 3), point(-100, 321)] {
        println!(
            "{} on {}: {}, side: {:?}",
            p,
            seg,
            point_on_segment(&p, &seg),
            side_of(&p, &seg)
        );
    }

    let sight = Segment::new(point(0, 0), point(2, 0));
    let leaving = Segment::new(point(2, 0), point(3, 1));
    let turning_back = Segment::new(point(2, 0), point(1, 1));
    println!(
        "angle keys: leaving {}, turning back {}",
        grazing_angle_key(&sight, &leaving),
        grazing_angle_key(&sight, &turning_back)
    );
}
