//! Declaration fragment resolution.

use wrapgen_ir::{Declaration, Modifier, Position};

use crate::registry::TypeRegistry;
use crate::signature::lexer::{Token, TokenKind, tokenize};

/// Turns `[const] [struct] type [*|&] [name]` fragments into [`Declaration`]s.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationResolver<'a> {
    registry: &'a TypeRegistry,
}

/// Parts of a fragment that fit the declaration grammar.
struct Parts<'s> {
    is_const: bool,
    base_type: String,
    modifier: Modifier,
    name: &'s str,
}

impl<'a> DeclarationResolver<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Resolve a fragment in the given position.
    ///
    /// Fragments outside the grammar are kept verbatim and never fail.
    pub fn resolve(&self, fragment: &str, position: Position) -> Declaration {
        let Some(parts) = split(fragment, position) else {
            return Declaration::unresolved(fragment);
        };

        let declaration =
            Declaration::new(&parts.base_type, parts.modifier, parts.is_const, parts.name);

        match self.registry.get(&parts.base_type) {
            Some(descriptor) => {
                let wrapper = match position {
                    Position::Parameter => descriptor.param_type(parts.modifier),
                    Position::Return => descriptor.return_type(parts.modifier),
                };
                let wrapper = if parts.is_const {
                    format!("const {}", wrapper)
                } else {
                    wrapper.to_string()
                };
                declaration.with_wrapper(wrapper)
            }
            None => declaration,
        }
    }

    pub fn resolve_param(&self, fragment: &str) -> Declaration {
        self.resolve(fragment, Position::Parameter)
    }

    pub fn resolve_return(&self, fragment: &str) -> Declaration {
        self.resolve(fragment, Position::Return)
    }
}

fn split(fragment: &str, position: Position) -> Option<Parts<'_>> {
    let tokens: Vec<Token> = tokenize(fragment)
        .into_iter()
        .filter(|t| !t.is(TokenKind::Newline))
        .collect();
    let mut rest = tokens.as_slice();

    let mut is_const = false;
    let mut is_struct = false;
    while let Some((token, tail)) = rest.split_first() {
        let flag = match token.text(fragment) {
            "const" => &mut is_const,
            "struct" => &mut is_struct,
            _ => break,
        };
        if *flag {
            return None;
        }
        *flag = true;
        rest = tail;
    }

    let word_count = rest
        .iter()
        .take_while(|t| t.is(TokenKind::Ident))
        .count();
    let (words, rest) = rest.split_at(word_count);
    let mut words: Vec<&str> = words.iter().map(|t| t.text(fragment)).collect();
    if words.is_empty() || words.iter().any(|w| matches!(*w, "const" | "struct")) {
        return None;
    }

    let (modifier, rest) = match rest {
        [m, tail @ ..] if m.is(TokenKind::Star) || m.is(TokenKind::Amp) => {
            // `**`, `*&` and the like have no modifier of their own
            if tail.first().is_some_and(|t| t.is(TokenKind::Star) || t.is(TokenKind::Amp)) {
                return None;
            }
            (Modifier::from_symbol(m.text(fragment))?, tail)
        }
        _ => (Modifier::None, rest),
    };

    let name = match rest {
        [] if modifier == Modifier::None
            && position == Position::Parameter
            && words.len() > 1 =>
        {
            words.pop().unwrap_or_default()
        }
        [] => "",
        [name] if modifier != Modifier::None && name.is(TokenKind::Ident) => {
            name.text(fragment)
        }
        _ => return None,
    };

    let mut base_type = words.join(" ");
    if is_struct && base_type.starts_with('_') {
        base_type.remove(0);
    }

    Some(Parts {
        is_const,
        base_type,
        modifier,
        name,
    })
}
