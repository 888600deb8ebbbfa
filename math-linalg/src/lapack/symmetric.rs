use super::Triangle;
use ndarray::Array2;

/// Mirror the `source` triangle onto the other one.
///
/// Works on the leading square block when `a` is not square.
pub fn mksym<T: Clone>(a: &mut Array2<T>, source: Triangle) {
    let n = a.nrows().min(a.ncols());
    for i in 0..n {
        for j in 0..i {
            let [r, c] = source.index(i, j);
            a[[c, r]] = a[[r, c]].clone();
        }
    }
}
