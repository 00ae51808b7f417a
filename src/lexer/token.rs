//! Token kinds and the `Token` value produced by the lexer.

/// The closed set of token kinds (spec §6.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Hai,
    Kthxbye,
    Wazzup,
    Buhbye,
    IHasA,
    Itz,
    R,
    IsNowA,
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,
    BothOf,
    EitherOf,
    WonOf,
    Not,
    AnyOf,
    AllOf,
    BothSaem,
    Diffrint,
    Smoosh,
    Maek,
    A,
    Visible,
    Gimmeh,
    ORly,
    YaRly,
    Mebbe,
    NoWai,
    Oic,
    Wtf,
    Omg,
    Omgwtf,
    ImInYr,
    Uppin,
    Nerfin,
    Yr,
    Til,
    Wile,
    ImOuttaYr,
    HowIzI,
    IfUSaySo,
    Gtfo,
    FoundYr,
    IIz,
    Mkay,
    An,
    Of,
    Confine,
    Discharge,
    In,
    At,

    // Types
    Noob,
    Numbr,
    Numbar,
    Yarn,
    Troof,
    Uhs,

    // Literals
    Win,
    Fail,
    Identifier,
    String,
    Integer,
    Float,

    // Punctuation / structure
    Newline,
    Ellipsis,
    Comma,
    Exclamation,
    Quote,
    Plus,
    LBracket,
    RBracket,
}

/// A decoded value attached to literal/identifier tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    None,
    Str(String),
    Int(i64),
    Float(f64),
}

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: Lexeme,
    pub line: usize,
    pub col: usize,
    pub category: &'static str,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        value: Lexeme,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value,
            line,
            col,
            category: kind.category(),
        }
    }
}

impl TokenKind {
    /// Human-readable label for the token-table UI (§3.1).
    pub fn category(self) -> &'static str {
        use TokenKind::*;
        match self {
            Hai | Kthxbye | Wazzup | Buhbye | IHasA | Itz | IsNowA | ORly | YaRly | Mebbe
            | NoWai | Oic | Wtf | Omg | Omgwtf | ImInYr | Uppin | Nerfin | ImOuttaYr | HowIzI
            | IfUSaySo | Gtfo | FoundYr | IIz | Visible | Gimmeh | Maek | Smoosh | SumOf
            | DiffOf | ProduktOf | QuoshuntOf | ModOf | BiggrOf | SmallrOf | BothOf | EitherOf
            | WonOf | Not | AnyOf | AllOf | BothSaem | Diffrint | Confine | Discharge => {
                "Keyword"
            }
            R | Yr | Til | Wile | A | An | Of | In | At | Mkay => "Keyword",
            Noob | Numbr | Numbar | Yarn | Troof | Uhs => "Type",
            Win | Fail => "Boolean Literal",
            Identifier => "Identifier",
            String => "String Literal",
            Integer => "Integer Literal",
            Float => "Float Literal",
            Newline => "Newline",
            Ellipsis => "Ellipsis",
            Comma => "Comma",
            Exclamation => "Exclamation",
            Quote => "Quote",
            Plus => "Plus",
            LBracket => "Left Bracket",
            RBracket => "Right Bracket",
        }
    }
}
