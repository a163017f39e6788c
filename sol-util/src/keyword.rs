//! The fixed identifier-to-keyword mapping.

use crate::token::TokenKind;

/// Exact-match keyword table, populated once and consulted by the lexer for
/// every scanned identifier. Order is irrelevant; lookup is an exact string
/// match, never a prefix or case-insensitive match.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("int", TokenKind::Int),
    ("float", TokenKind::FloatKw),
    ("string", TokenKind::StringKw),
    ("bool", TokenKind::BoolKw),
    ("char", TokenKind::CharKw),
    ("void", TokenKind::VoidKw),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("do", TokenKind::Do),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("function", TokenKind::Function),
    ("var", TokenKind::Var),
    ("const", TokenKind::Const),
    ("class", TokenKind::Class),
    ("struct", TokenKind::Struct),
    ("enum", TokenKind::Enum),
    ("interface", TokenKind::Interface),
    ("implements", TokenKind::Implements),
    ("extends", TokenKind::Extends),
    ("public", TokenKind::Public),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("static", TokenKind::Static),
    ("final", TokenKind::Final),
    ("abstract", TokenKind::Abstract),
    ("virtual", TokenKind::Virtual),
    ("override", TokenKind::Override),
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("finally", TokenKind::Finally),
    ("throw", TokenKind::Throw),
    ("import", TokenKind::Import),
    ("export", TokenKind::Export),
    ("module", TokenKind::Module),
    ("namespace", TokenKind::Namespace),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("undefined", TokenKind::Undefined),
];

/// Looks up `ident` in the keyword table. Returns `None` (generic
/// identifier) on anything but an exact match.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_returns_keyword() {
        assert_eq!(lookup_keyword("return"), Some(TokenKind::Return));
        assert_eq!(lookup_keyword("int"), Some(TokenKind::Int));
        assert_eq!(lookup_keyword("true"), Some(TokenKind::True));
    }

    #[test]
    fn non_keyword_returns_none() {
        assert_eq!(lookup_keyword("returner"), None);
        assert_eq!(lookup_keyword("x"), None);
        assert_eq!(lookup_keyword(""), None);
    }

    #[test]
    fn every_keyword_is_recognized() {
        for (word, kind) in KEYWORDS {
            assert_eq!(lookup_keyword(word), Some(*kind));
        }
    }
}
