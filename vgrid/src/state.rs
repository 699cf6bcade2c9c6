use crate::{ScrollOffset, ViewportSize};

/// Viewport and scroll position of a [`crate::VirtualizedGrid`], detached from the grid.
///
/// Adapters persist this between sessions (or hand it across a remount) and apply it with
/// [`crate::VirtualizedGrid::restore_frame_state`]. Serializable with `feature = "serde"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportSize,
    pub scroll: ScrollOffset,
}
