use crate::models::{AnswerOption, Question};

const fn opt(label: &'static str, points: u32) -> AnswerOption {
    AnswerOption { label, points }
}

pub static QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        prompt: "Your transaction count on Base?",
        options: [
            opt("Less than 10", 1),
            opt("10-50 transactions", 3),
            opt("50+ transactions", 5),
        ],
    },
    Question {
        id: 2,
        prompt: "Your favorite onchain action?",
        options: [
            opt("Swapping tokens", 2),
            opt("Bridging assets", 1),
            opt("Minting NFTs", 5),
        ],
    },
    Question {
        id: 3,
        prompt: "How often do you check gas prices?",
        options: [
            opt("Every transaction", 5),
            opt("Sometimes", 3),
            opt("Never, YOLO", 1),
        ],
    },
    Question {
        id: 4,
        prompt: "Your preferred DeFi protocol?",
        options: [
            opt("Uniswap", 1),
            opt("Aave", 4),
            opt("I try them all", 5),
        ],
    },
    Question {
        id: 5,
        prompt: "How much ETH do you typically hold?",
        options: [
            opt("Less than 0.1 ETH", 1),
            opt("0.1 - 1 ETH", 3),
            opt("1+ ETH", 5),
        ],
    },
    Question {
        id: 6,
        prompt: "Your trading strategy?",
        options: [
            opt("Long-term hodler", 1),
            opt("Active trader", 5),
            opt("Yield farming", 3),
        ],
    },
    Question {
        id: 7,
        prompt: "How do you feel about rugpulls?",
        options: [
            opt("Terrified, I DYOR", 5),
            opt("Cautious but curious", 3),
            opt("Part of the game", 1),
        ],
    },
    Question {
        id: 8,
        prompt: "Your ultimate onchain goal?",
        options: [
            opt("Become a whale", 5),
            opt("Steady gains", 3),
            opt("Just exploring", 1),
        ],
    },
];
