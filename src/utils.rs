/// Removes the value at `source_idx` and reinserts it so that it ends up at `target_idx`,
/// shifting the values in between by one. Does nothing if `source_idx` is equal to
/// `target_idx` or if either index is outside the vec bounds.
///
/// ```rust
/// use dnd_reorder::utils::relocate;
///
/// let mut letters = vec!['a', 'b', 'c', 'd'];
/// relocate(0, 2, &mut letters);
/// assert_eq!(letters, vec!['b', 'c', 'a', 'd']);
/// ```
pub fn relocate<T>(source_idx: usize, target_idx: usize, vec: &mut Vec<T>) {
    if source_idx == target_idx || source_idx >= vec.len() || target_idx >= vec.len() {
        return;
    }

    let item = vec.remove(source_idx);
    vec.insert(target_idx, item);
}

#[cfg(test)]
mod tests {
    use super::relocate;

    #[test]
    fn moves_forward() {
        let mut v = vec![1, 2, 3, 4, 5];
        relocate(1, 3, &mut v);
        assert_eq!(v, vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn moves_backward() {
        let mut v = vec![1, 2, 3, 4, 5];
        relocate(4, 0, &mut v);
        assert_eq!(v, vec![5, 1, 2, 3, 4]);
    }

    #[test]
    fn ignores_out_of_bounds() {
        let mut v = vec![1, 2, 3];
        relocate(3, 0, &mut v);
        relocate(0, 3, &mut v);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn same_index_is_noop() {
        let mut v = vec!['x', 'y'];
        relocate(1, 1, &mut v);
        assert_eq!(v, vec!['x', 'y']);
    }
}
