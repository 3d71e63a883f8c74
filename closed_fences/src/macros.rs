/// Macro used for implementing the fence macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a fence with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use closed_fences::fence;
/// # use closed_fences::core::math::point;
/// let square = fence![(0, 0), (1, 0), (1, 1), (0, 1)];
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square[2], point(1, 1));
/// assert!(square.validate().is_valid());
/// ```
#[macro_export]
macro_rules! fence {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut fence = $crate::fence::Fence::with_capacity(size);
            $(
                fence.add($x.0, $x.1);
            )*
            fence
        }
    };
}
