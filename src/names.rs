use nanoid::nanoid;
use rand::Rng;

// 0/O, 1/I and L are too easy to misread when a code is shared out loud
const GAME_CODE_ALPHABET: [char; 31] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const GAME_CODE_LEN: usize = 4;

/// Allocate a short session code for a freshly created game.
///
/// Uniqueness against live sessions is the registry's problem; this only
/// guarantees the format.
pub fn generate_game_code() -> String {
    nanoid!(GAME_CODE_LEN, &GAME_CODE_ALPHABET)
}

/// Placeholder handle for a player that has not supplied a name yet.
pub fn generate_guest_name() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}-{}-{}",
        ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
        NOUNS[rng.gen_range(0..NOUNS.len())],
        rng.gen_range(10..100u32),
    )
}

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brisk", "calm", "clever", "daring", "eager", "fleet", "gentle", "keen",
    "lucky", "merry", "nimble", "pale", "quick", "quiet", "rapid", "sly", "steady", "swift",
    "vivid", "wild",
];

const NOUNS: &[&str] = &[
    "badger", "crane", "falcon", "fox", "heron", "ibex", "lynx", "marten", "newt", "otter",
    "owl", "pike", "raven", "seal", "shrew", "stoat", "swan", "tern", "vole", "wren",
];
