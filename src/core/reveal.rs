use super::constants::{COUNTER_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_THRESHOLD};

/// The three one-shot observers and their element sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Fade,
    Counter,
    SkillBar,
}

impl RevealKind {
    pub const ALL: [RevealKind; 3] = [RevealKind::Fade, RevealKind::Counter, RevealKind::SkillBar];

    pub fn selector(self) -> &'static str {
        match self {
            RevealKind::Fade => "[data-animate]",
            RevealKind::Counter => ".stat-number[data-count]",
            RevealKind::SkillBar => ".skill-fill",
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::Fade => REVEAL_THRESHOLD,
            RevealKind::Counter => COUNTER_THRESHOLD,
            RevealKind::SkillBar => SKILL_THRESHOLD,
        }
    }

    pub fn root_margin(self) -> Option<&'static str> {
        match self {
            RevealKind::Fade => Some(REVEAL_ROOT_MARGIN),
            RevealKind::Counter | RevealKind::SkillBar => None,
        }
    }
}

/// CSS width for a skill bar from its `data-width` attribute.
pub fn skill_width_css(raw: &str) -> Option<String> {
    let pct = raw.trim().trim_end_matches('%').parse::<f64>().ok()?;
    if !pct.is_finite() {
        return None;
    }
    Some(format!("{}%", pct.clamp(0.0, 100.0)))
}
