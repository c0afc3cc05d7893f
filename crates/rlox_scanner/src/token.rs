//! TokenKind enum and the token record produced by the scanner.

use std::fmt;

/// The kind of a lexical token.
///
/// This is a closed set known at compile time: punctuation, one-or-two
/// character operators, literal kinds, the sixteen reserved words, and two
/// sentinel kinds (`Unknown` for unrecognized input, `EndOfFileToken` for
/// the end of the token sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Unknown = 0,
    EndOfFileToken = 1,

    // Punctuation
    OpenParenToken = 2,
    CloseParenToken = 3,
    OpenBraceToken = 4,
    CloseBraceToken = 5,
    CommaToken = 6,
    DotToken = 7,
    MinusToken = 8,
    PlusToken = 9,
    SemicolonToken = 10,
    SlashToken = 11,
    AsteriskToken = 12,

    // One or two character operators
    ExclamationToken = 13,
    ExclamationEqualsToken = 14,
    EqualsToken = 15,
    EqualsEqualsToken = 16,
    LessThanToken = 17,
    LessThanEqualsToken = 18,
    GreaterThanToken = 19,
    GreaterThanEqualsToken = 20,

    // Literals
    Identifier = 21,
    StringLiteral = 22,
    NumericLiteral = 23,

    // Keywords
    AndKeyword = 24,
    ClassKeyword = 25,
    ElseKeyword = 26,
    FalseKeyword = 27,
    FunKeyword = 28,
    ForKeyword = 29,
    IfKeyword = 30,
    NilKeyword = 31,
    OrKeyword = 32,
    PrintKeyword = 33,
    ReturnKeyword = 34,
    SuperKeyword = 35,
    ThisKeyword = 36,
    TrueKeyword = 37,
    VarKeyword = 38,
    WhileKeyword = 39,
}

// These can't be enum variants because Rust doesn't allow duplicate discriminants.
impl TokenKind {
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::OpenParenToken;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::GreaterThanEqualsToken;
    pub const FIRST_LITERAL: TokenKind = TokenKind::Identifier;
    pub const LAST_LITERAL: TokenKind = TokenKind::NumericLiteral;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::AndKeyword;
    pub const LAST_KEYWORD: TokenKind = TokenKind::WhileKeyword;
}

impl TokenKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_KEYWORD as u8 && v <= TokenKind::LAST_KEYWORD as u8
    }

    /// Whether this kind represents a punctuation or operator token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_PUNCTUATION as u8 && v <= TokenKind::LAST_PUNCTUATION as u8
    }

    /// Whether this kind represents a literal token.
    #[inline]
    pub fn is_literal(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_LITERAL as u8 && v <= TokenKind::LAST_LITERAL as u8
    }

    /// Look up the keyword kind for an identifier-shaped lexeme.
    ///
    /// Exact, case-sensitive match against the sixteen reserved words;
    /// returns None for everything else, including partial matches.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::AndKeyword),
            "class" => Some(TokenKind::ClassKeyword),
            "else" => Some(TokenKind::ElseKeyword),
            "false" => Some(TokenKind::FalseKeyword),
            "fun" => Some(TokenKind::FunKeyword),
            "for" => Some(TokenKind::ForKeyword),
            "if" => Some(TokenKind::IfKeyword),
            "nil" => Some(TokenKind::NilKeyword),
            "or" => Some(TokenKind::OrKeyword),
            "print" => Some(TokenKind::PrintKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "super" => Some(TokenKind::SuperKeyword),
            "this" => Some(TokenKind::ThisKeyword),
            "true" => Some(TokenKind::TrueKeyword),
            "var" => Some(TokenKind::VarKeyword),
            "while" => Some(TokenKind::WhileKeyword),
            _ => None,
        }
    }

    /// Get the fixed spelling for a punctuation, operator or keyword kind,
    /// or None for literal and sentinel kinds.
    pub fn text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::CommaToken => Some(","),
            TokenKind::DotToken => Some("."),
            TokenKind::MinusToken => Some("-"),
            TokenKind::PlusToken => Some("+"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::EqualsToken => Some("="),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::LessThanEqualsToken => Some("<="),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::AndKeyword => Some("and"),
            TokenKind::ClassKeyword => Some("class"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::FalseKeyword => Some("false"),
            TokenKind::FunKeyword => Some("fun"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::NilKeyword => Some("nil"),
            TokenKind::OrKeyword => Some("or"),
            TokenKind::PrintKeyword => Some("print"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::SuperKeyword => Some("super"),
            TokenKind::ThisKeyword => Some("this"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::VarKeyword => Some("var"),
            TokenKind::WhileKeyword => Some("while"),
            _ => None,
        }
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme text. For string literals this is the content between the
    /// quotes; for punctuation and operators it is their own spelling.
    pub text: String,
    /// The line the token was scanned on. The counter starts at 0 and
    /// increments on each newline consumed, so a token that spans lines
    /// (a multi-line string) records the line where scanning completed.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Whether this token marks the end of the token sequence.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFileToken
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} line {}", self.kind, self.text, self.line)
    }
}
