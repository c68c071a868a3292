//! # Post Generator Service
//!
//! Produces synthetic posts from hacker jargon: the title is an adjective
//! and a noun, the body a phrase built from a template. A seeded generator
//! produces the same posts on every run.

use crate::blog::models::Post;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const ABBREVIATIONS: &[&str] = &[
    "ADP", "AGP", "AI", "API", "ASCII", "CLI", "COM", "CSS", "DNS", "EXE", "FTP", "GB", "HDD",
    "HEX", "HTTP", "IB", "IP", "JBOD", "JSON", "OCR", "PCI", "PNG", "RAM", "RSS", "SAS", "SCSI",
    "SDD", "SMS", "SMTP", "SQL", "SSD", "SSL", "TCP", "THX", "TLS", "UTF8", "XML", "XSS", "USB",
];

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "bluetooth",
    "wireless",
    "1080p",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "program",
    "reboot",
    "parse",
];

const ING_VERBS: &[&str] = &[
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
    "synthesizing",
    "transmitting",
    "programming",
    "parsing",
];

const PHRASES: &[&str] = &[
    "if we {verb} the {noun}, we can get to the {abbreviation} {noun} through the {adjective} {abbreviation} {noun}!",
    "we need to {verb} the {adjective} {abbreviation} {noun}!",
    "try to {verb} the {abbreviation} {noun}, maybe it will {verb} the {adjective} {noun}!",
    "you can't {verb} the {noun} without {ingverb} the {adjective} {abbreviation} {noun}!",
    "use the {adjective} {abbreviation} {noun}, then you can {verb} the {adjective} {noun}!",
    "the {abbreviation} {noun} is down, {verb} the {adjective} {noun} so we can {verb} the {abbreviation} {noun}!",
    "{ingverb} the {noun} won't do anything, we need to {verb} the {adjective} {abbreviation} {noun}!",
    "I'll {verb} the {adjective} {abbreviation} {noun}, that should {noun} the {abbreviation} {noun}!",
];

/// Source of synthetic posts
pub trait PostGenerator {
    /// Produce one post
    fn generate(&mut self) -> Post;

    /// Produce `count` posts
    fn generate_many(&mut self, count: usize) -> Vec<Post> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// Generator drawing titles and phrases from a hacker vocabulary
pub struct HackerPostGenerator {
    rng: StdRng,
}

impl HackerPostGenerator {
    /// Generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn phrase(&mut self) -> String {
        let template = self.pick(PHRASES);
        let mut phrase = String::with_capacity(template.len() * 2);
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            phrase.push_str(&rest[..start]);
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let word = match &rest[start + 1..start + len] {
                "abbreviation" => self.pick(ABBREVIATIONS),
                "adjective" => self.pick(ADJECTIVES),
                "noun" => self.pick(NOUNS),
                "verb" => self.pick(VERBS),
                "ingverb" => self.pick(ING_VERBS),
                other => other,
            };
            phrase.push_str(word);
            rest = &rest[start + len + 1..];
        }
        phrase.push_str(rest);

        capitalize(&phrase)
    }
}

impl Default for HackerPostGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostGenerator for HackerPostGenerator {
    fn generate(&mut self) -> Post {
        let title = format!("{} {}", self.pick(ADJECTIVES), self.pick(NOUNS));
        let body = self.phrase();
        Post::new(title, body)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
