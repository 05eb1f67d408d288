//! Kana to Hepburn romaji, enough for personal names.
//!
//! Katakana is folded onto hiragana first so mixed-script names keep every
//! syllable. Kanji are passed through untouched.

use std::collections::HashMap;

const KANA_TABLE: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('だ', "da"), ('ぢ', "ji"), ('づ', "zu"), ('で', "de"), ('ど', "do"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('ゐ', "i"), ('ゑ', "e"), ('を', "o"), ('ん', "n"),
    ('ゔ', "vu"),
    ('ぁ', "a"), ('ぃ', "i"), ('ぅ', "u"), ('ぇ', "e"), ('ぉ', "o"), ('ゎ', "wa"),
    ('ゕ', "ka"), ('ゖ', "ke"),
];

/// Small kana that fuse with a preceding i-row syllable.
const GLIDES: &[(char, &str)] = &[('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo")];

const SOKUON: char = 'っ';

/// Katakana long-vowel mark.
const CHOONPU: char = 'ー';

const KATAKANA_OFFSET: u32 = 0x60;

lazy_static::lazy_static! {
    static ref KANA: HashMap<char, &'static str> = KANA_TABLE.iter().copied().collect();
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3093}').contains(&c)
}

pub fn contains_hiragana(text: &str) -> bool {
    text.chars().any(is_hiragana)
}

fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// ケ -> け; everything else is returned as is.
fn fold_katakana(c: char) -> char {
    if is_katakana(c) {
        char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

fn glide(c: char) -> Option<&'static str> {
    GLIDES.iter().find(|(k, _)| *k == c).map(|(_, r)| *r)
}

/// きゃ -> kya, しゃ -> sha, ちゃ -> cha, じゃ -> ja
fn contract(base: &str, glide: &str) -> Option<String> {
    let stem = base.strip_suffix('i').filter(|s| !s.is_empty())?;
    if stem.ends_with('h') || stem == "j" {
        Some(format!("{}{}", stem, &glide[1..]))
    } else {
        Some(format!("{}{}", stem, glide))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Romanise hiragana and katakana. A sokuon with nothing to double is
/// written as `tsu`; other characters pass through unchanged.
pub fn hiragana_to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.chars().map(fold_katakana).collect();
    let mut out = String::with_capacity(chars.len() * 3);
    let mut geminate = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == SOKUON {
            if geminate {
                out.push_str("tsu");
            }
            geminate = true;
            i += 1;
            continue;
        }
        if c == CHOONPU {
            flush_sokuon(&mut out, &mut geminate);
            if let Some(vowel) = out.chars().last().filter(|v| is_vowel(*v)) {
                out.push(vowel);
            }
            i += 1;
            continue;
        }

        let syllable = match (KANA.get(&c), chars.get(i + 1).and_then(|n| glide(*n))) {
            (Some(base), Some(g)) => match contract(base, g) {
                Some(fused) => {
                    i += 2;
                    fused
                }
                None => {
                    i += 1;
                    base.to_string()
                }
            },
            (Some(base), None) => {
                i += 1;
                base.to_string()
            }
            (None, _) => {
                i += 1;
                match glide(c) {
                    Some(g) => g.to_string(),
                    None => {
                        flush_sokuon(&mut out, &mut geminate);
                        out.push(c);
                        continue;
                    }
                }
            }
        };

        if geminate {
            if syllable.starts_with("ch") {
                out.push('t');
            } else if let Some(first) = syllable.chars().next().filter(|f| !is_vowel(*f)) {
                out.push(first);
            }
            geminate = false;
        }
        out.push_str(&syllable);
    }

    flush_sokuon(&mut out, &mut geminate);
    out
}

fn flush_sokuon(out: &mut String, geminate: &mut bool) {
    if *geminate {
        out.push_str("tsu");
        *geminate = false;
    }
}
