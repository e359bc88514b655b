use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::InvalidMovePolicy;
use crate::error::{ReorderError, Result};

/// The outcome of one completed drag: `sources[i]` is where the i-th moved element was and
/// `destinations[i]` where it was dropped, both relative to the sequence before the drag.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    sources: Vec<usize>,
    destinations: Vec<usize>,
}

impl MoveRequest {
    pub fn new(sources: Vec<usize>, destinations: Vec<usize>) -> Result<Self> {
        if sources.len() != destinations.len() {
            return Err(ReorderError::LengthMismatch {
                sources: sources.len(),
                destinations: destinations.len(),
            });
        }
        Ok(Self {
            sources,
            destinations,
        })
    }

    /// Builds a request without checking that both lists have the same length. Use
    /// [`MoveRequest::sanitize`] before applying it.
    pub fn unchecked(sources: Vec<usize>, destinations: Vec<usize>) -> Self {
        Self {
            sources,
            destinations,
        }
    }

    pub fn single(source: usize, destination: usize) -> Self {
        Self {
            sources: vec![source],
            destinations: vec![destination],
        }
    }

    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub fn destinations(&self) -> &[usize] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.sources.len().min(self.destinations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(source, destination)` pairs in the order the drag engine reported them.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sources
            .iter()
            .copied()
            .zip(self.destinations.iter().copied())
    }

    /// Checks the request against a sequence of length `len`.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.sources.len() != self.destinations.len() {
            return Err(ReorderError::LengthMismatch {
                sources: self.sources.len(),
                destinations: self.destinations.len(),
            });
        }
        for (source, destination) in self.pairs() {
            if source >= len {
                return Err(ReorderError::SourceOutOfRange { index: source, len });
            }
            if destination >= len {
                return Err(ReorderError::DestinationOutOfRange {
                    index: destination,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Returns a request that is valid for a sequence of length `len`, repairing or
    /// rejecting this one according to `policy`.
    pub fn sanitize(&self, len: usize, policy: InvalidMovePolicy) -> Result<Self> {
        let err = match self.validate(len) {
            Ok(()) => return Ok(self.clone()),
            Err(err) => err,
        };

        let (sources, destinations): (Vec<usize>, Vec<usize>) = match policy {
            InvalidMovePolicy::Reject => return Err(err),
            InvalidMovePolicy::Skip => self
                .pairs()
                .filter(|&(source, destination)| source < len && destination < len)
                .unzip(),
            InvalidMovePolicy::Clamp => self
                .pairs()
                .filter(|&(source, _)| source < len)
                .map(|(source, destination)| (source, destination.min(len - 1)))
                .unzip(),
        };

        warn!(
            ?policy,
            len,
            sources = ?self.sources,
            destinations = ?self.destinations,
            kept = sources.len(),
            %err,
            "repaired invalid move request"
        );

        Ok(Self {
            sources,
            destinations,
        })
    }
}
