//! The catalogue of supported sorting algorithms
//!
//! [`Algorithm`] is a closed set: every other part of the crate dispatches on
//! it with an exhaustive `match` instead of comparing names.

use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five sorts the visualizer knows how to instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Merge,
    Quick,
    Bubble,
    Selection,
    Insertion,
}

impl Algorithm {
    /// Every algorithm, in selector order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
    ];

    /// Lowercase name used on the wire and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Human-readable title for pane headers
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::Merge => "O(n log n)",
            Algorithm::Quick => "O(n log n) average",
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => "O(n²)",
        }
    }

    /// Textbook pseudocode shown beside the chart
    pub fn pseudocode(self) -> &'static str {
        match self {
            Algorithm::Merge => {
                "MERGE-SORT(A, p, r):
  if p < r
    q = floor((p + r) / 2)
    MERGE-SORT(A, p, q)
    MERGE-SORT(A, q+1, r)
    MERGE(A, p, q, r)"
            }
            Algorithm::Quick => {
                "QUICK-SORT(A, low, high):
  if low < high
    pi = PARTITION(A, low, high)
    QUICK-SORT(A, low, pi - 1)
    QUICK-SORT(A, pi + 1, high)"
            }
            Algorithm::Bubble => {
                "BUBBLE-SORT(A):
  for i = 1 to A.length - 1
    for j = 0 to A.length - i - 1
      if A[j] > A[j+1]
        swap(A[j], A[j+1])"
            }
            Algorithm::Selection => {
                "SELECTION-SORT(A):
  for i = 0 to A.length-1
    min_idx = i
    for j = i+1 to A.length
      if A[j] < A[min_idx]
        min_idx = j
    swap(A[i], A[min_idx])"
            }
            Algorithm::Insertion => {
                "INSERTION-SORT(A):
  for i = 1 to A.length - 1
    key = A[i]
    j = i - 1
    while j >= 0 and A[j] > key
      A[j+1] = A[j]
      j = j - 1
    A[j+1] = key"
            }
        }
    }

    /// Next algorithm in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in selector order, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Algorithm::Merge => 0,
            Algorithm::Quick => 1,
            Algorithm::Bubble => 2,
            Algorithm::Selection => 3,
            Algorithm::Insertion => 4,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownAlgorithm {
                name: wanted.to_string(),
            })
    }
}
