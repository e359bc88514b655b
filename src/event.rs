use serde::{Deserialize, Serialize};

use crate::request::MoveRequest;

/// Position of one element of a multi-element drag, as reported by the drag engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDragIndex {
    pub index: usize,
}

/// The update notification a drag engine sends after the user dropped something into a new
/// place. `H` is whatever handle the engine uses for the dragged elements.
///
/// Single-element drags only fill in `item`, `old_index` and `new_index`. Multi-element drags
/// also fill in the plural fields, which then take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEvent<H> {
    #[serde(default = "Option::default")]
    pub item: Option<H>,
    #[serde(default = "Vec::new")]
    pub items: Vec<H>,
    #[serde(default)]
    pub old_index: Option<usize>,
    #[serde(default)]
    pub new_index: Option<usize>,
    #[serde(default, alias = "oldIndicies")]
    pub old_indices: Vec<MultiDragIndex>,
    #[serde(default, alias = "newIndicies")]
    pub new_indices: Vec<MultiDragIndex>,
}

impl<H> SortEvent<H> {
    pub fn single(item: H, old_index: usize, new_index: usize) -> Self {
        Self {
            item: Some(item),
            items: Vec::new(),
            old_index: Some(old_index),
            new_index: Some(new_index),
            old_indices: Vec::new(),
            new_indices: Vec::new(),
        }
    }

    /// `moves` holds one `(handle, old index, new index)` entry per dragged element.
    pub fn multi(moves: impl IntoIterator<Item = (H, usize, usize)>) -> Self {
        let mut event = Self {
            item: None,
            items: Vec::new(),
            old_index: None,
            new_index: None,
            old_indices: Vec::new(),
            new_indices: Vec::new(),
        };
        for (handle, old_index, new_index) in moves {
            event.items.push(handle);
            event.old_indices.push(MultiDragIndex { index: old_index });
            event.new_indices.push(MultiDragIndex { index: new_index });
        }
        event
    }

    /// The moves described by this event. The multi-drag lists win when present; an event
    /// without any index yields an empty request.
    pub fn move_request(&self) -> MoveRequest {
        let sources = if self.old_indices.is_empty() {
            self.old_index.into_iter().collect()
        } else {
            self.old_indices.iter().map(|idx| idx.index).collect()
        };
        let destinations = if self.new_indices.is_empty() {
            self.new_index.into_iter().collect()
        } else {
            self.new_indices.iter().map(|idx| idx.index).collect()
        };
        MoveRequest::unchecked(sources, destinations)
    }

    /// Handles of the dragged elements.
    pub fn handles(&self) -> &[H] {
        if self.items.is_empty() {
            self.item.as_slice()
        } else {
            &self.items
        }
    }

    pub fn into_handles(self) -> Vec<H> {
        if self.items.is_empty() {
            self.item.into_iter().collect()
        } else {
            self.items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_drag_falls_back_to_scalar_indices() {
        let event = SortEvent::single("row-2", 2, 0);
        assert_eq!(event.move_request(), MoveRequest::single(2, 0));
        assert_eq!(event.handles(), &["row-2"]);
    }

    #[test]
    fn multi_drag_lists_take_precedence() {
        let mut event = SortEvent::multi([("a", 0, 3), ("b", 1, 4)]);
        event.old_index = Some(0);
        event.new_index = Some(3);
        assert_eq!(
            event.move_request(),
            MoveRequest::new(vec![0, 1], vec![3, 4]).unwrap()
        );
        assert_eq!(event.into_handles(), vec!["a", "b"]);
    }

    #[test]
    fn event_without_indices_is_empty() {
        let event: SortEvent<u32> = SortEvent::multi([]);
        assert!(event.move_request().is_empty());
        assert!(event.handles().is_empty());
    }

    #[test]
    fn deserializes_engine_payload() {
        let raw = r#"{
            "item": 7,
            "items": [7, 8],
            "oldIndex": 0,
            "newIndex": 3,
            "oldIndicies": [{ "index": 0 }, { "index": 1 }],
            "newIndicies": [{ "index": 3 }, { "index": 4 }]
        }"#;
        let event: SortEvent<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(event.handles(), &[7, 8]);
        assert_eq!(event.move_request().sources(), &[0, 1]);
        assert_eq!(event.move_request().destinations(), &[3, 4]);
    }

    #[test]
    fn deserializes_single_payload() {
        let raw = r#"{ "item": "x", "oldIndex": 1, "newIndex": 0 }"#;
        let event: SortEvent<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(event.move_request(), MoveRequest::single(1, 0));
        assert_eq!(event.handles(), &["x".to_string()]);
    }
}
