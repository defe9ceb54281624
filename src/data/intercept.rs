use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use num_traits::One;

/// Return a copy of `x` with a column of ones prepended.
///
/// The result has shape `(rows, cols + 1)`; columns `1..` hold `x` unchanged.
pub fn add_intercept<A, S>(x: &ArrayBase<S, Ix2>) -> Array2<A>
where
    A: Clone + One,
    S: Data<Elem = A>,
{
    let (rows, cols) = x.dim();
    let mut out = Array2::from_elem((rows, cols + 1), A::one());
    out.slice_mut(s![.., 1..]).assign(x);
    out
}
