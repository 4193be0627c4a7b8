//! Entrance animation parameters.
//!
//! An [`Entrance`] says how a card appears: which motion, when it starts
//! (on page load or when scrolled into view), how long it runs and how long
//! it waits. It is rendered as CSS classes plus custom properties on a
//! wrapper element and never touches the wrapped content.

/// Shape of the transition from hidden to visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Fade in while sliding up from `offset_px` below the final position.
    SlideUp { offset_px: u16 },
    /// Fade in while growing from `from` to full size.
    ScaleIn { from: f32 },
    /// Opacity only.
    Fade,
}

/// When an entrance plays. Either way it plays at most once per page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the page is interactive.
    Mount,
    /// The first time the element intersects the viewport.
    InView,
}

/// Entrance animation attached to a rendered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub motion: Motion,
    pub trigger: Trigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    /// Delay added per position when cards cascade in.
    pub const STAGGER_MS: u32 = 100;

    /// Class carried by every animated element.
    pub const BASE_CLASS: &'static str = "reveal";

    pub const fn new(motion: Motion, trigger: Trigger, duration_ms: u32) -> Self {
        Self {
            motion,
            trigger,
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Hero content: slides up 30px over 800ms on load.
    pub const fn hero() -> Self {
        Self::new(Motion::SlideUp { offset_px: 30 }, Trigger::Mount, 800)
    }

    /// Feature, event and testimonial cards and the closing call-to-action.
    pub const fn card() -> Self {
        Self::new(Motion::SlideUp { offset_px: 20 }, Trigger::InView, 500)
    }

    /// Statistics pop in from 80% size.
    pub const fn stat() -> Self {
        Self::new(Motion::ScaleIn { from: 0.8 }, Trigger::InView, 400)
    }

    /// Partner logos only fade.
    pub const fn logo() -> Self {
        Self::new(Motion::Fade, Trigger::InView, 500)
    }

    /// Delay proportional to the element's position in its list.
    pub fn staggered(self, index: usize) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay_ms: steps.saturating_mul(Self::STAGGER_MS),
            ..self
        }
    }

    fn motion_class(&self) -> &'static str {
        match self.motion {
            Motion::SlideUp { .. } => "reveal-slide-up",
            Motion::ScaleIn { .. } => "reveal-scale-in",
            Motion::Fade => "reveal-fade",
        }
    }

    fn trigger_class(&self) -> &'static str {
        match self.trigger {
            Trigger::Mount => "reveal-on-mount",
            Trigger::InView => "reveal-in-view",
        }
    }

    /// Space-separated classes for the wrapper element.
    pub fn class(&self) -> String {
        format!(
            "{} {} {}",
            Self::BASE_CLASS,
            self.motion_class(),
            self.trigger_class()
        )
    }

    /// Inline style carrying the timing and motion parameters as CSS
    /// custom properties, `; `-separated without a trailing `;`.
    pub fn style(&self) -> String {
        let mut declarations = vec![
            format!("--reveal-duration: {}ms", self.duration_ms),
            format!("--reveal-delay: {}ms", self.delay_ms),
        ];
        match self.motion {
            Motion::SlideUp { offset_px } => {
                declarations.push(format!("--reveal-offset: {offset_px}px"));
            }
            Motion::ScaleIn { from } => {
                declarations.push(format!("--reveal-scale: {from}"));
            }
            Motion::Fade => {}
        }
        declarations.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_page_sections() {
        let hero = Entrance::hero();
        assert_eq!(hero.motion, Motion::SlideUp { offset_px: 30 });
        assert_eq!(hero.trigger, Trigger::Mount);
        assert_eq!(hero.duration_ms, 800);

        let card = Entrance::card();
        assert_eq!(card.motion, Motion::SlideUp { offset_px: 20 });
        assert_eq!(card.trigger, Trigger::InView);
        assert_eq!(card.duration_ms, 500);

        let stat = Entrance::stat();
        assert_eq!(stat.motion, Motion::ScaleIn { from: 0.8 });
        assert_eq!(stat.duration_ms, 400);

        let logo = Entrance::logo();
        assert_eq!(logo.motion, Motion::Fade);
        assert_eq!(logo.duration_ms, 500);
    }

    #[test]
    fn test_presets_start_without_delay() {
        assert_eq!(Entrance::hero().delay_ms, 0);
        assert_eq!(Entrance::card().delay_ms, 0);
        assert_eq!(Entrance::stat().delay_ms, 0);
        assert_eq!(Entrance::logo().delay_ms, 0);
    }

    #[test]
    fn test_staggered_delay_is_proportional_to_index() {
        let delays: Vec<u32> = (0..6)
            .map(|index| Entrance::logo().staggered(index).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_staggered_keeps_motion_and_duration() {
        let base = Entrance::stat();
        let staggered = base.staggered(3);
        assert_eq!(staggered.motion, base.motion);
        assert_eq!(staggered.trigger, base.trigger);
        assert_eq!(staggered.duration_ms, base.duration_ms);
    }

    #[test]
    fn test_staggered_saturates_on_huge_index() {
        let entrance = Entrance::card().staggered(usize::MAX);
        assert_eq!(entrance.delay_ms, u32::MAX);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            Entrance::hero().class(),
            "reveal reveal-slide-up reveal-on-mount"
        );
        assert_eq!(
            Entrance::stat().class(),
            "reveal reveal-scale-in reveal-in-view"
        );
        assert_eq!(Entrance::logo().class(), "reveal reveal-fade reveal-in-view");
    }

    #[test]
    fn test_style_for_slide_up() {
        assert_eq!(
            Entrance::card().staggered(1).style(),
            "--reveal-duration: 500ms; --reveal-delay: 100ms; --reveal-offset: 20px"
        );
    }

    #[test]
    fn test_style_for_scale_in() {
        assert_eq!(
            Entrance::stat().style(),
            "--reveal-duration: 400ms; --reveal-delay: 0ms; --reveal-scale: 0.8"
        );
    }

    #[test]
    fn test_style_for_fade_has_no_motion_property() {
        let style = Entrance::logo().staggered(5).style();
        assert_eq!(style, "--reveal-duration: 500ms; --reveal-delay: 500ms");
        assert!(!style.contains("--reveal-offset"));
        assert!(!style.contains("--reveal-scale"));
    }

    #[test]
    fn test_style_has_no_trailing_separator() {
        for entrance in [
            Entrance::hero(),
            Entrance::card().staggered(2),
            Entrance::stat(),
            Entrance::logo(),
        ] {
            let style = entrance.style();
            assert!(!style.ends_with(';'), "{style}");
            assert!(!style.contains(";;"), "{style}");
        }
    }
}
