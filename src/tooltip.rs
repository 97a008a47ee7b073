/// A tooltip behavior provided by the host page, applied to every element
/// matching a selector.
pub trait Tooltip {
    /// Returns `false` when the capability is not available.
    fn is_available(&self) -> bool {
        true
    }

    fn activate(&self, selector: &str);
}

/// Used when the host page has no tooltip library.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTooltip;

impl Tooltip for NoTooltip {
    fn is_available(&self) -> bool {
        false
    }

    fn activate(&self, _selector: &str) {}
}
