/// Moves the zero-frequency bin to the centre of `data`, in place.
///
/// For odd lengths the centre bin is `n / 2`, so `[x0, x1, x2, x3, x4]`
/// becomes `[x3, x4, x0, x1, x2]`.
pub fn fftshift<T>(data: &mut [T]) {
    let half = data.len() / 2;
    data.rotate_right(half);
}

/// Inverse of [`fftshift`].
pub fn ifftshift<T>(data: &mut [T]) {
    let half = data.len() / 2;
    data.rotate_left(half);
}
