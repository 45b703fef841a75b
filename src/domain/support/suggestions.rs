//! Canned self-kindness ideas and hobby suggestions.

pub const SELF_KINDNESS_IDEAS: [&str; 3] = [
    "Remind yourself that it's okay to feel this way.",
    "Think of a friend who would comfort you; what would they say?",
    "Consider treating yourself to a favorite activity or hobby.",
];

pub const HOBBY_SUGGESTIONS: [&str; 9] = [
    "Drawing or painting",
    "Reading books or writing stories",
    "Playing a musical instrument",
    "Going for a walk or jogging",
    "Cooking or baking new recipes",
    "Gardening",
    "Practicing yoga or meditation",
    "Playing video games or board games",
    "Crafting or DIY projects",
];
