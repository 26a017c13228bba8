//! Embedded word list
//!
//! Words compiled into the binary for offline play.

/// Answer words used when no word service is reachable or `--offline` is set
pub const ANSWERS: &[&str] = &[
    "ABOUT", "ADMIT", "AGENT", "ALARM", "ALBUM", "ALIVE", "APPLE", "ARISE", "AWARD", "BEACH",
    "BENCH", "BLAME", "BLOOM", "BOARD", "BRAIN", "BRAVE", "BREAD", "BRICK", "CABIN", "CANDY",
    "CHAIR", "CHARM", "CHEST", "CLIMB", "CLOUD", "COAST", "CRANE", "CRISP", "CROWN", "DANCE",
    "DEPTH", "DRAFT", "DREAM", "EAGLE", "EARTH", "ERASE", "FAITH", "FEAST", "FIELD", "FLAME",
    "FLOOR", "FRESH", "FRUIT", "GHOST", "GLASS", "GRACE", "GRAPE", "HEART", "HONEY", "HOUSE",
    "JUICE", "KNIFE", "LEMON", "LIGHT", "MAGIC", "MOUNT", "NIGHT", "OCEAN", "PIANO", "PLANT",
    "QUIET", "RIVER", "ROBOT", "SALAD", "SHINE", "SLATE", "SPEED", "STORM", "SUGAR", "TABLE",
    "TIGER", "TRACE", "VOICE", "WATER", "WHALE", "WORLD", "YOUTH", "ZEBRA",
];

/// Number of words in `ANSWERS`
pub const ANSWERS_COUNT: usize = 78;
