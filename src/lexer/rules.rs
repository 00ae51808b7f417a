//! The ordered keyword table the scanner consults for longest-match-first
//! disambiguation of multi-word keywords, their prefixes, and identifiers.
//!
//! Keys are whitespace-joined word sequences (e.g. `"I HAS A"`, `"SUM OF"`);
//! a trailing literal `?` glued to the last word with no intervening
//! whitespace is written directly into the key (`"O RLY?"`, `"WTF?"`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::token::TokenKind;

/// All keyword spellings, single- and multi-word, mapped to their kind.
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    use TokenKind::*;
    let mut m = HashMap::new();
    let mut add = |key: &'static str, kind: TokenKind| {
        m.insert(key, kind);
    };

    add("HAI", Hai);
    add("KTHXBYE", Kthxbye);
    add("WAZZUP", Wazzup);
    add("BUHBYE", Buhbye);
    add("I HAS A", IHasA);
    add("ITZ", Itz);
    add("R", R);
    add("IS NOW A", IsNowA);
    add("SUM OF", SumOf);
    add("DIFF OF", DiffOf);
    add("PRODUKT OF", ProduktOf);
    add("QUOSHUNT OF", QuoshuntOf);
    add("MOD OF", ModOf);
    add("BIGGR OF", BiggrOf);
    add("SMALLR OF", SmallrOf);
    add("BOTH OF", BothOf);
    add("EITHER OF", EitherOf);
    add("WON OF", WonOf);
    add("NOT", Not);
    add("ANY OF", AnyOf);
    add("ALL OF", AllOf);
    add("BOTH SAEM", BothSaem);
    add("DIFFRINT", Diffrint);
    add("SMOOSH", Smoosh);
    add("MAEK", Maek);
    add("A", A);
    add("VISIBLE", Visible);
    add("GIMMEH", Gimmeh);
    add("O RLY?", ORly);
    add("YA RLY", YaRly);
    add("MEBBE", Mebbe);
    add("NO WAI", NoWai);
    add("OIC", Oic);
    add("WTF?", Wtf);
    add("OMG", Omg);
    add("OMGWTF", Omgwtf);
    add("IM IN YR", ImInYr);
    add("UPPIN", Uppin);
    add("NERFIN", Nerfin);
    add("YR", Yr);
    add("TIL", Til);
    add("WILE", Wile);
    add("IM OUTTA YR", ImOuttaYr);
    add("HOW IZ I", HowIzI);
    add("IF U SAY SO", IfUSaySo);
    add("GTFO", Gtfo);
    add("FOUND YR", FoundYr);
    add("I IZ", IIz);
    add("MKAY", Mkay);
    add("AN", An);
    add("OF", Of);
    add("CONFINE", Confine);
    add("DISCHARGE", Discharge);
    add("IN", In);
    add("AT", At);

    add("NOOB", Noob);
    add("NUMBR", Numbr);
    add("NUMBAR", Numbar);
    add("YARN", Yarn);
    add("TROOF", Troof);
    add("UHS", Uhs);

    add("WIN", Win);
    add("FAIL", Fail);

    m
});

/// Whether `candidate` (a whitespace-joined word run collected so far,
/// without a trailing `?`) is a strict prefix of some longer keyword —
/// i.e. whether the scanner should keep trying to extend it with another
/// word before giving up and falling back to an identifier or a shorter
/// keyword match.
pub fn can_extend(candidate: &str) -> bool {
    KEYWORDS.keys().any(|k| {
        let k = k.trim_end_matches('?');
        k.len() > candidate.len() && k.starts_with(candidate) && {
            // only a prefix at a word boundary
            k.as_bytes()[candidate.len()] == b' '
        }
    })
}

pub fn lookup(candidate: &str) -> Option<TokenKind> {
    KEYWORDS.get(candidate).copied()
}

/// `BTW`, `OBTW`, `TLDR` are reserved even outside comment position: an
/// identifier that is spelled exactly one of these must be rejected by the
/// lexer rather than silently accepted (spec §4.1).
pub fn is_comment_word(word: &str) -> bool {
    matches!(word, "BTW" | "OBTW" | "TLDR")
}
