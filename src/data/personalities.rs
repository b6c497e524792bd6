use crate::models::{ColorKey, PersonalityBand};

/// Ordered by score range; the first entry doubles as the fallback band.
pub static PERSONALITIES: [PersonalityBand; 5] = [
    PersonalityBand {
        min_score: 0,
        max_score: 10,
        name: "Shadow Holder",
        emoji: "🥷",
        description: "Stealthy & patient. You prefer to observe the market before making moves. A true believer in long-term strategy.",
        color: ColorKey::Slate,
    },
    PersonalityBand {
        min_score: 11,
        max_score: 20,
        name: "Explorer",
        emoji: "🧭",
        description: "Curious wanderer. You love discovering new protocols and opportunities. Always learning, always exploring.",
        color: ColorKey::Ocean,
    },
    PersonalityBand {
        min_score: 21,
        max_score: 30,
        name: "Gas Guzzler",
        emoji: "🔥",
        description: "High-energy trader. You're constantly active on Base, executing trades and chasing opportunities.",
        color: ColorKey::Ember,
    },
    PersonalityBand {
        min_score: 31,
        max_score: 35,
        name: "DeFi Dabbler",
        emoji: "🏦",
        description: "Protocol pro. You understand the intricacies of DeFi and navigate multiple protocols with confidence.",
        color: ColorKey::Emerald,
    },
    PersonalityBand {
        min_score: 36,
        max_score: 40,
        name: "Whale Warrior",
        emoji: "🐋",
        description: "Chain dominator. You're a major player on Base, commanding significant capital and influence.",
        color: ColorKey::Royal,
    },
];
