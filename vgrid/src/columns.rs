//! Responsive column layout: viewport width → column count.

use alloc::vec::Vec;

use crate::GridError;

/// Widths at which the default policy switches column counts.
pub const DEFAULT_BREAKPOINTS: [Breakpoint; 2] = [
    Breakpoint {
        min_width: 640,
        columns: 3,
    },
    Breakpoint {
        min_width: 1024,
        columns: 4,
    },
];

/// Column count used below the narrowest default breakpoint.
pub const DEFAULT_BASE_COLUMNS: usize = 2;

/// Column count for a viewport `width` under the default policy.
///
/// `>= 1024` → 4, `>= 640` → 3, otherwise 2. Always at least 1 and monotonic in `width`.
pub fn column_count(width: u32) -> usize {
    let mut columns = DEFAULT_BASE_COLUMNS;
    for bp in DEFAULT_BREAKPOINTS.iter() {
        if width >= bp.min_width {
            columns = bp.columns;
        }
    }
    columns
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub columns: usize,
}

/// A validated, monotonic width → column count policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    base: usize,
    steps: Vec<Breakpoint>, // sorted by min_width
}

impl Breakpoints {
    /// Builds a policy from a base column count and a set of breakpoints (any order).
    ///
    /// Rejects zero column counts, duplicate widths, and steps that would make the column count
    /// shrink as the viewport grows.
    pub fn new(
        base: usize,
        steps: impl IntoIterator<Item = Breakpoint>,
    ) -> Result<Self, GridError> {
        if base == 0 {
            return Err(GridError::ZeroColumns);
        }
        let mut steps: Vec<Breakpoint> = steps.into_iter().collect();
        steps.sort_by_key(|bp| bp.min_width);

        let mut prev_columns = base;
        let mut prev_width: Option<u32> = None;
        for bp in steps.iter() {
            if bp.columns == 0 {
                return Err(GridError::ZeroColumns);
            }
            if prev_width == Some(bp.min_width) {
                return Err(GridError::DuplicateBreakpoint {
                    min_width: bp.min_width,
                });
            }
            if bp.columns < prev_columns {
                return Err(GridError::NonMonotonicBreakpoint {
                    min_width: bp.min_width,
                    columns: bp.columns,
                });
            }
            prev_columns = bp.columns;
            prev_width = Some(bp.min_width);
        }

        Ok(Self { base, steps })
    }

    /// A policy that always yields `columns` (clamped to at least 1).
    pub fn fixed(columns: usize) -> Self {
        Self {
            base: columns.max(1),
            steps: Vec::new(),
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    pub fn column_count(&self, width: u32) -> usize {
        // steps are sorted, so the last match is the widest breakpoint not exceeding `width`
        self.steps
            .iter()
            .take_while(|bp| width >= bp.min_width)
            .last()
            .map_or(self.base, |bp| bp.columns)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_COLUMNS,
            steps: DEFAULT_BREAKPOINTS.to_vec(),
        }
    }
}
