//! Play-once entrance transitions.
//!
//! Each animated element owns a [`RevealState`] that moves from `Hidden` to
//! `Visible` the first time the element intersects the viewport and never
//! moves back. [`Motion`] describes what "hidden" looks like and how long
//! the element waits before transitioning, so sibling cards can stagger.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feeds one visibility observation. Returns true only for the single
    /// observation that flips the element to `Visible`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub offset_px: f32,
    pub scale: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Motion {
    pub const fn fade() -> Self {
        Self {
            offset_px: 0.0,
            scale: 1.0,
            delay_ms: 0,
            duration_ms: 500,
        }
    }

    /// Headline and feature cards.
    pub const fn fade_up() -> Self {
        Self {
            offset_px: 18.0,
            ..Self::fade()
        }
    }

    pub const fn project_card() -> Self {
        Self {
            offset_px: 14.0,
            duration_ms: 400,
            ..Self::fade()
        }
    }

    pub const fn testimonial_card() -> Self {
        Self {
            offset_px: 16.0,
            duration_ms: 400,
            ..Self::fade()
        }
    }

    pub const fn zoom_in() -> Self {
        Self {
            scale: 0.98,
            ..Self::fade()
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay for the `index`-th member of a group, `step_ms` apart.
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        self.delayed(step_ms * index as u32)
    }

    pub fn style(&self, state: RevealState) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms,
        );
        match state {
            RevealState::Hidden => format!(
                "opacity: 0; transform: translateY({}px) scale({}); {}",
                self.offset_px, self.scale, transition
            ),
            RevealState::Visible => format!(
                "opacity: 1; transform: translateY(0px) scale(1); {}",
                transition
            ),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::fade_up()
    }
}

pub const FEATURE_STEP_MS: u32 = 100;
pub const PROJECT_STEP_MS: u32 = 80;
pub const TESTIMONIAL_STEP_MS: u32 = 120;
pub const HERO_SUBTITLE_DELAY_MS: u32 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_reveals() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);
        assert!(state.observe(true));
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn reentry_after_reveal_is_a_no_op() {
        let mut state = RevealState::Hidden;
        state.observe(true);
        let motion = Motion::fade_up();
        let revealed = motion.style(state);

        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert_eq!(state, RevealState::Visible);
        assert_eq!(motion.style(state), revealed);
    }

    #[test]
    fn stagger_spaces_group_members() {
        let delays: Vec<u32> = (0..3)
            .map(|i| Motion::project_card().staggered(i, PROJECT_STEP_MS).delay_ms)
            .collect();
        assert_eq!(delays, [0, 80, 160]);

        // Feature cards start counting at one
        assert_eq!(Motion::fade_up().staggered(1, FEATURE_STEP_MS).delay_ms, 100);
    }

    #[test]
    fn hidden_style_offsets_and_hides() {
        let style = Motion::testimonial_card().style(RevealState::Hidden);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(16px)"));

        let style = Motion::zoom_in().style(RevealState::Hidden);
        assert!(style.contains("scale(0.98)"));
    }

    #[test]
    fn visible_style_keeps_the_delay() {
        let style = Motion::fade()
            .delayed(HERO_SUBTITLE_DELAY_MS)
            .style(RevealState::Visible);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("ease-out 120ms"));
    }
}
