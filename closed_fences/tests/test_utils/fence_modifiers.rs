use closed_fences::fence::Fence;

/// Cycles all the vertex index positions forward by `n`. E.g. vertex `n` becomes vertex 0, so
/// edge `i` of the result is edge `(i + n) % len` of the input.
pub fn cycle_start_index_forward(input: &Fence, n: usize) -> Fence {
    assert!(n > 0, "cycling forward by 0 just returns the same fence");
    assert!(
        n < input.vertex_count(),
        "cycling forward by more than the fence length is unnecessary"
    );
    input
        .vertexes()
        .iter()
        .cycle()
        .skip(n)
        .take(input.vertex_count())
        .cloned()
        .collect()
}

/// Reverses the vertex order. Edge `j` of the result is edge `(len - 2 - j) % len` of the input.
pub fn invert_direction(input: &Fence) -> Fence {
    input.vertexes().iter().rev().cloned().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedFenceState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedFenceState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }

    /// Map an edge index of the modified fence back to the edge index of the input fence.
    pub fn original_edge_index(&self, edge_index: usize, vertex_count: usize) -> usize {
        let cycled = (edge_index + self.cycle_position) % vertex_count;
        if self.inverted_direction {
            (2 * vertex_count - 2 - cycled) % vertex_count
        } else {
            cycled
        }
    }
}

/// Visit the input fence and every variation of it with a different start vertex and, if
/// `include_inverted` is set, the reversed versions of all of those.
pub fn visit_modified_fences<F>(input: &Fence, include_inverted: bool, mut visitor: F)
where
    F: FnMut(Fence, ModifiedFenceState),
{
    let vertex_count = input.vertex_count();
    let mut visit_cycles = |fence: &Fence, inverted: bool| {
        visitor(fence.clone(), ModifiedFenceState::new(inverted, 0));
        for n in 1..vertex_count {
            visitor(
                cycle_start_index_forward(fence, n),
                ModifiedFenceState::new(inverted, n),
            );
        }
    };

    visit_cycles(input, false);
    if include_inverted {
        visit_cycles(&invert_direction(input), true);
    }
}
