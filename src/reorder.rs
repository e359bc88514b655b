//! Reordering a sequence after a drag that moved one or more of its elements.
//!
//! A single move is a plain [`relocate`]. Several elements dragged together are moved one at
//! a time, and every move after the first is aimed at the element moved just before it
//! (the anchor) rather than at the destination the drag engine reported, since earlier moves
//! shift the positions later ones were computed against. Elements are found again by
//! equality before each move, so moved elements have to be distinguishable from each other
//! and from the rest of the sequence. When that can't be guaranteed, use
//! [`move_items_by_key`] with a key that is unique.

use crate::config::InvalidMovePolicy;
use crate::error::Result;
use crate::request::MoveRequest;
use crate::utils::relocate;

/// Returns a copy of `items` with the elements at `sources` moved to `destinations`.
///
/// Both index lists refer to positions in `items` before anything is moved. Indices are not
/// validated: pairs with a source outside `items` are skipped, a destination outside `items`
/// leaves its element in place, and unpaired trailing indices are ignored. Use [`reorder`]
/// to reject such requests instead.
///
/// ```rust
/// use dnd_reorder::move_items;
///
/// let items = ["a", "b", "c", "d", "e"];
/// assert_eq!(move_items(&items, &[0, 1], &[3, 4]), vec!["c", "d", "a", "b", "e"]);
/// ```
pub fn move_items<T: PartialEq + Clone>(
    items: &[T],
    sources: &[usize],
    destinations: &[usize],
) -> Vec<T> {
    move_matching(items, sources, destinations, |a, b| a == b)
}

/// Like [`move_items`], but elements are located by `key` instead of by equality.
pub fn move_items_by_key<T: Clone, K: PartialEq>(
    items: &[T],
    sources: &[usize],
    destinations: &[usize],
    key: impl Fn(&T) -> K,
) -> Vec<T> {
    move_matching(items, sources, destinations, |a, b| key(a) == key(b))
}

/// Checks that `sources` and `destinations` pair up and fit inside `items`, then applies
/// them with [`move_items`].
pub fn reorder<T: PartialEq + Clone>(
    items: &[T],
    sources: &[usize],
    destinations: &[usize],
) -> Result<Vec<T>> {
    let request = MoveRequest::new(sources.to_vec(), destinations.to_vec())?;
    request.validate(items.len())?;
    Ok(move_items(items, sources, destinations))
}

/// Applies `request` after running it through `policy`.
pub fn reorder_with<T: PartialEq + Clone>(
    items: &[T],
    request: &MoveRequest,
    policy: InvalidMovePolicy,
) -> Result<Vec<T>> {
    let request = request.sanitize(items.len(), policy)?;
    Ok(move_items(items, request.sources(), request.destinations()))
}

fn move_matching<T: Clone>(
    items: &[T],
    sources: &[usize],
    destinations: &[usize],
    same: impl Fn(&T, &T) -> bool,
) -> Vec<T> {
    let position = |list: &[T], element: &T| list.iter().position(|other| same(other, element));

    // looked up before anything moves, in the order the drag engine reported
    let targets: Vec<(&T, usize)> = sources
        .iter()
        .zip(destinations)
        .filter_map(|(&source, &destination)| items.get(source).map(|item| (item, destination)))
        .collect();

    let mut result = items.to_vec();
    let mut anchor: Option<&T> = None;
    for (element, destination) in targets {
        let Some(from) = position(&result, element) else {
            continue;
        };

        let to = match anchor.and_then(|anchor| position(&result, anchor)) {
            // land right after the anchor on either side of it
            Some(anchor_idx) if from > anchor_idx => anchor_idx + 1,
            Some(anchor_idx) => anchor_idx,
            None => destination,
        };

        relocate(from, to, &mut result);
        anchor = Some(element);
    }

    result
}
