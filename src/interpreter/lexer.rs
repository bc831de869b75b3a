use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14` or `2.`.
    /// The presence of a decimal point selects a float over an integer;
    /// at most one decimal point belongs to the literal.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. The raw contents between the quotes are
    /// copied verbatim; escape sequences are interpreted later, when the
    /// literal is evaluated.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `bikin`
    #[token("bikin")]
    Bikin,
    /// `fungsi`
    #[token("fungsi")]
    Fungsi,
    /// `fungsi_int`
    #[token("fungsi_int")]
    FungsiInt,
    /// `fungsi_float`
    #[token("fungsi_float")]
    FungsiFloat,
    /// `fungsi_bool`
    #[token("fungsi_bool")]
    FungsiBool,
    /// `fungsi_str`
    #[token("fungsi_str")]
    FungsiStr,
    /// `int`
    #[token("int")]
    TypeInt,
    /// `float`
    #[token("float")]
    TypeFloat,
    /// `bool`
    #[token("bool")]
    TypeBool,
    /// `str`
    #[token("str")]
    TypeStr,
    /// `cetak`
    #[token("cetak")]
    Cetak,
    /// `kalo`
    #[token("kalo")]
    Kalo,
    /// `maka` (reserved; no grammar production consumes it)
    #[token("maka")]
    Maka,
    /// `lain` (reserved; no grammar production consumes it)
    #[token("lain")]
    Lain,
    /// `ulang`
    #[token("ulang")]
    Ulang,
    /// `sampai` (reserved; no grammar production consumes it)
    #[token("sampai")]
    Sampai,
    /// `kembali`
    #[token("kembali")]
    Kembali,
    /// `isi`
    #[token("isi")]
    Isi,
    /// `benar`
    #[token("benar")]
    Benar,
    /// `salah`
    #[token("salah")]
    Salah,
    /// `array`
    #[token("array")]
    Array,
    /// Identifier tokens; variable names such as `x` or `jumlah`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the current line
/// start, used to derive columns. Both exist for diagnostics only.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

/// Source position of a token, carried for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Tokenizes a full source text.
///
/// Produces the token sequence the parser consumes. Tokenizing is
/// deterministic: lexing the same text twice yields the same sequence.
///
/// On the first unrecognized byte, or on an unterminated string literal,
/// scanning stops silently and no further tokens are produced; the parser
/// then reports the premature end of input as a parse error.
///
/// # Parameters
/// - `source`: Raw source text.
///
/// # Returns
/// The tokens paired with their source positions.
///
/// # Example
/// ```
/// use azeng::interpreter::lexer::{lex, Token};
///
/// let tokens = lex("isi x = 2;");
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].0, Token::Isi);
/// assert_eq!(tokens[2].0, Token::Equals);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, Pos)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                // A token containing newlines, a multiline string, moves
                // line_start past its own span start; its column saturates
                // to 1.
                let column = lexer.span().start.saturating_sub(lexer.extras.line_start) + 1;
                tokens.push((
                    token,
                    Pos {
                        line: lexer.extras.line,
                        column,
                    },
                ));
            }
            // Scanning stops on the first unrecognized byte or unterminated
            // string; the parser surfaces the truncation.
            Err(()) => break,
        }
    }

    tokens
}

fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    if let Some(last_newline) = slice.rfind('\n') {
        lex.extras.line += slice.matches('\n').count();
        lex.extras.line_start = lex.span().start + last_newline + 1;
    }
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::{lex, Token};

    #[test]
    fn keywords_are_classified() {
        let tokens = lex("bikin fungsi utama");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].0, Token::Bikin);
        assert_eq!(tokens[1].0, Token::Fungsi);
        assert_eq!(tokens[2].0, Token::Identifier("utama".to_string()));
    }

    #[test]
    fn keyword_prefixes_stay_identifiers() {
        let tokens = lex("isian bikinan");
        assert_eq!(tokens[0].0, Token::Identifier("isian".to_string()));
        assert_eq!(tokens[1].0, Token::Identifier("bikinan".to_string()));
    }

    #[test]
    fn decimal_point_selects_float() {
        let tokens = lex("12 3.5 7.");
        assert_eq!(tokens[0].0, Token::Integer(12));
        assert_eq!(tokens[1].0, Token::Float(3.5));
        assert_eq!(tokens[2].0, Token::Float(7.0));
    }

    #[test]
    fn string_contents_are_verbatim() {
        let tokens = lex(r#""halo \n dunia""#);
        assert_eq!(tokens[0].0, Token::Str(r"halo \n dunia".to_string()));
    }

    #[test]
    fn unknown_byte_stops_scanning() {
        let tokens = lex("isi x @ cetak");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].0, Token::Isi);
    }

    #[test]
    fn unterminated_string_stops_scanning() {
        let tokens = lex("isi x = \"tanpa akhir");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let tokens = lex("isi x = 1; // komentar\nisi y = 2;");
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[5].1.line, 2);
    }

    #[test]
    fn multiline_strings_keep_later_columns_accurate() {
        let tokens = lex("\"a\nb\" isi");
        assert_eq!(tokens[0].0, Token::Str("a\nb".to_string()));
        assert_eq!(tokens[1].0, Token::Isi);
        assert_eq!(tokens[1].1.line, 2);
        assert_eq!(tokens[1].1.column, 4);
    }

    #[test]
    fn lexing_is_deterministic() {
        let source = "bikin fungsi utama() { isi x = 1 + 2.5; cetak(\"ok\"); }";
        assert_eq!(lex(source), lex(source));
    }
}
