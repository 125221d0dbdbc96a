//! Static parenting-wisdom card deck.

use rand::Rng;

/// A parenting-wisdom card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WisdomTip {
    /// Stable tip identifier, referenced by the favorites preference.
    pub id: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Card message, also used as reminder body text.
    pub message: &'static str,
    /// Card emoji.
    pub emoji: &'static str,
}

/// The full card deck, in page order.
static WISDOM_TIPS: [WisdomTip; 5] = [
    WisdomTip {
        id: "1",
        title: "Learning Independence",
        message: "When she's taking forever to put on her shoes, remember: she's learning independence with each tiny struggle. Deep breath - she's not giving you a hard time, she's having a hard time.",
        emoji: "👟",
    },
    WisdomTip {
        id: "2",
        title: "Big Feelings",
        message: "During tantrums, remember that big emotions are hard for little hearts. You're her safe space to feel all feelings.",
        emoji: "💗",
    },
    WisdomTip {
        id: "3",
        title: "Growing Mind",
        message: "When she asks 'why' for the hundredth time, remember: her curiosity is building her understanding of the world.",
        emoji: "🌱",
    },
    WisdomTip {
        id: "4",
        title: "Little Helper",
        message: "When simple tasks take longer because she wants to help, remember: you're raising a person who wants to contribute.",
        emoji: "🌟",
    },
    WisdomTip {
        id: "5",
        title: "Gentle Reminder",
        message: "Your patience in her slow moments is teaching her it's okay to take the time she needs.",
        emoji: "🫂",
    },
];

/// Return the card deck in page order.
pub fn wisdom_tips() -> &'static [WisdomTip] {
    &WISDOM_TIPS
}

/// Look up a tip by its stable id.
pub fn tip_by_id(id: &str) -> Option<&'static WisdomTip> {
    WISDOM_TIPS.iter().find(|tip| tip.id == id)
}

/// Pick a random tip, used for reminder bodies.
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static WisdomTip {
    &WISDOM_TIPS[rng.random_range(0..WISDOM_TIPS.len())]
}

/// Position in the swipe-through card deck, clamped at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TipPager {
    /// Zero-based current page.
    page: usize,
}

impl TipPager {
    /// Start at the first card.
    pub fn new() -> Self {
        Self::default()
    }

    /// The card currently shown.
    pub fn current(&self) -> &'static WisdomTip {
        &WISDOM_TIPS[self.page]
    }

    /// Advance one card. Returns false when already on the last card.
    pub fn next(&mut self) -> bool {
        if self.page + 1 < WISDOM_TIPS.len() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one card. Returns false when already on the first card.
    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// One-based page label, e.g. `3 / 5`.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.page + 1, WISDOM_TIPS.len())
    }
}
