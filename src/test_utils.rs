/// Returns `true` if `a` and `b` hold the same elements with the same
/// multiplicities, in any order.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations() {
        assert!(is_permutation(&[1, 2, 2, 3], &[2, 3, 1, 2]));
        assert!(is_permutation::<i32>(&[], &[]));
        assert!(!is_permutation(&[1, 2, 2], &[1, 1, 2]));
        assert!(!is_permutation(&[1, 2], &[1, 2, 3]));
    }
}
