//! Raw word data behind [`super::Lexicon`].

pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("very", &["extremely", "remarkably", "deeply", "truly"]),
    ("really", &["genuinely", "truly", "honestly", "indeed"]),
    ("said", &["replied", "murmured", "answered", "remarked"]),
    ("walked", &["strode", "wandered", "ambled", "paced"]),
    ("looked", &["glanced", "stared", "peered", "gazed"]),
    ("big", &["vast", "huge", "massive", "immense"]),
    ("small", &["tiny", "slight", "compact", "modest"]),
    ("good", &["fine", "solid", "decent", "worthy"]),
    ("bad", &["awful", "poor", "grim", "dire"]),
    ("happy", &["glad", "cheerful", "elated", "content"]),
    ("sad", &["gloomy", "sorrowful", "downcast", "forlorn"]),
    ("just", &["simply", "merely", "only", "barely"]),
    ("suddenly", &["abruptly", "without warning", "all at once"]),
    ("felt", &["sensed", "noticed", "experienced"]),
    ("thing", &["object", "item", "matter", "detail"]),
    ("nice", &["pleasant", "kind", "agreeable", "lovely"]),
    ("ran", &["sprinted", "dashed", "raced", "bolted"]),
    ("went", &["headed", "moved", "travelled", "set off"]),
    ("got", &["received", "gained", "fetched", "obtained"]),
    ("began", &["started", "set about", "launched into"]),
    ("quickly", &["swiftly", "briskly", "hastily", "rapidly"]),
    ("slowly", &["gradually", "leisurely", "unhurriedly"]),
    ("smiled", &["grinned", "beamed", "smirked"]),
    ("nodded", &["agreed", "acknowledged", "dipped her head"]),
    ("turned", &["pivoted", "spun", "swung round"]),
    ("whispered", &["murmured", "breathed", "hissed"]),
    ("shouted", &["yelled", "bellowed", "cried"]),
    ("beautiful", &["stunning", "lovely", "radiant", "exquisite"]),
    ("angry", &["furious", "irate", "livid", "incensed"]),
    ("scared", &["afraid", "frightened", "terrified", "uneasy"]),
    ("dark", &["dim", "murky", "shadowy", "gloomy"]),
    ("moved", &["shifted", "stirred", "edged"]),
    ("saw", &["spotted", "noticed", "glimpsed"]),
    ("stood", &["rose", "waited", "lingered"]),
    ("great", &["superb", "grand", "splendid", "tremendous"]),
    ("old", &["ancient", "aged", "weathered", "worn"]),
    ("cold", &["chilly", "frigid", "icy", "bitter"]),
    ("eyes", &["gaze", "stare", "glance"]),
    ("heart", &["chest", "pulse", "core"]),
    ("seemed", &["appeared", "looked", "struck her as"]),
];

pub const POSITIVE_WORDS: &[&str] = &[
    "love", "loved", "joy", "happy", "happiness", "smile", "smiled", "laugh", "laughed",
    "hope", "hopeful", "bright", "warm", "gentle", "kind", "beautiful", "peace", "peaceful",
    "calm", "safe", "trust", "delight", "delighted", "wonderful", "brilliant", "glad",
    "triumph", "victory", "win", "won", "relief", "comfort", "tender", "sweet", "proud",
    "grateful", "free", "alive", "embrace", "cheer", "bliss", "radiant", "success",
    "friend", "friendship", "courage", "brave", "good", "great", "excited",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "hate", "hated", "fear", "afraid", "scared", "terror", "sad", "sorrow", "grief", "cry",
    "cried", "tears", "pain", "hurt", "dark", "death", "dead", "die", "died", "kill",
    "killed", "blood", "angry", "rage", "fury", "cold", "alone", "lonely", "lost", "broken",
    "despair", "dread", "panic", "scream", "screamed", "danger", "threat", "enemy", "war",
    "fail", "failed", "failure", "bitter", "cruel", "shame", "guilt", "betrayed", "wound",
    "bad", "terrible",
];

pub const GLUE_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "that", "this", "these", "those",
    "it", "its", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "should", "could", "may", "might", "must", "can",
    "which", "who", "when", "where", "why", "how", "if", "than", "then", "as", "so",
];

pub const WEASEL_WORDS: &[&str] = &[
    "very",
    "really",
    "actually",
    "basically",
    "literally",
    "totally",
    "definitely",
    "somewhat",
    "quite",
    "rather",
    "seemingly",
];

pub const CLICHES: &[&str] = &[
    "avoid it like the plague",
    "beat around the bush",
    "better late than never",
    "bite the bullet",
    "break the ice",
    "calm before the storm",
    "cut to the chase",
    "dead as a doornail",
    "easy as pie",
    "every cloud has a silver lining",
    "fit as a fiddle",
    "heart of gold",
    "hit the nail on the head",
    "in the nick of time",
    "it goes without saying",
    "last but not least",
    "let the cat out of the bag",
    "light at the end of the tunnel",
    "only time will tell",
    "piece of cake",
    "quiet as a mouse",
    "read between the lines",
    "scared to death",
    "sent shivers down",
    "time stood still",
    "throw in the towel",
    "under the weather",
    "when pigs fly",
    "at the end of the day",
    "all of a sudden",
    "blood ran cold",
    "a chill ran down",
    "released a breath",
    "let out a breath she didn't know",
    "dark and stormy night",
];

pub const SIGHT_WORDS: &[&str] = &[
    "see", "saw", "seen", "look", "looked", "watch", "watched", "bright", "glow", "glowing",
    "shadow", "shadows", "color", "colour", "gleaming", "glimmer", "shimmering", "glimpse",
    "glance", "stare", "gaze", "gazed", "light", "dim", "vivid", "pale", "sparkling",
];

pub const SOUND_WORDS: &[&str] = &[
    "hear", "heard", "listen", "listened", "sound", "noise", "loud", "quiet", "silent",
    "silence", "whisper", "whispered", "shout", "scream", "murmur", "echo", "ring", "buzz",
    "hum", "bang", "crash", "thump", "click", "rustle", "crackle", "hiss", "roar", "howl",
];

pub const TOUCH_WORDS: &[&str] = &[
    "feel", "felt", "touch", "touched", "soft", "rough", "smooth", "texture", "warm",
    "freezing", "burning", "icy", "sticky", "slippery", "damp", "wet", "sharp", "silky",
    "velvety", "prickly", "coarse", "brittle", "grip", "gripped",
];

pub const SMELL_WORDS: &[&str] = &[
    "smell", "smelled", "scent", "odor", "odour", "aroma", "fragrance", "perfume", "stink",
    "stench", "whiff", "sniff", "fragrant", "pungent", "acrid", "musty", "smoky", "rancid",
];

pub const TASTE_WORDS: &[&str] = &[
    "taste", "tasted", "flavor", "flavour", "sweet", "sour", "bitter", "salty", "savory",
    "tangy", "spicy", "bland", "delicious", "tongue", "swallow", "swallowed", "sip", "bite",
    "chewed", "honeyed",
];

pub const FIRST_PERSON: &[&str] = &["i", "me", "my", "mine", "myself", "we", "us", "our", "ours"];

pub const SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself", "yourselves"];

pub const THIRD_PERSON: &[&str] = &[
    "he", "she", "him", "her", "his", "hers", "himself", "herself", "they", "them", "their",
    "theirs", "themselves",
];

pub const DIALOGUE_TAGS: &[&str] = &[
    "said", "asked", "replied", "whispered", "shouted", "muttered", "yelled", "called",
    "answered", "cried",
];

/// Words that legitimately repeat back to back ("had had", "that that").
pub const REPEATABLE_WORDS: &[&str] = &["had", "that"];

/// (US, UK) spelling variants.
pub const SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("color", "colour"),
    ("favorite", "favourite"),
    ("honor", "honour"),
    ("center", "centre"),
    ("realize", "realise"),
    ("organize", "organise"),
    ("gray", "grey"),
    ("theater", "theatre"),
    ("defense", "defence"),
    ("traveled", "travelled"),
    ("analyze", "analyse"),
    ("neighbor", "neighbour"),
    ("apologize", "apologise"),
];
