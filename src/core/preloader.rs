/// One-shot latch for hiding the preloader; both the load-grace timer and the
/// fallback timeout race to call `hide`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Preloader {
    hidden: bool,
}

impl Preloader {
    /// Returns `true` only for the call that actually hides the overlay.
    pub fn hide(&mut self) -> bool {
        !std::mem::replace(&mut self.hidden, true)
    }
}
