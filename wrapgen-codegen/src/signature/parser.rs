use tracing::trace;
use wrapgen_ir::Signature;

use super::lexer::{Token, TokenKind, tokenize};

/// Leading qualifier words stripped from a declaration, at most.
const MAX_QUALIFIERS: usize = 3;

/// Words that start statements, never a return type.
const STATEMENT_KEYWORDS: &[&str] = &["else", "typedef", "return"];

/// Scan header text for function declarations, in order of appearance.
pub fn parse_signatures(src: &str) -> Vec<Signature> {
    let tokens = tokenize(src);
    let mut signatures = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        if tokens[pos].is(TokenKind::Newline) {
            pos += 1;
            continue;
        }
        match recognize(src, &tokens, pos) {
            Some((signature, next)) => {
                trace!(name = %signature.name, "parsed signature");
                signatures.push(signature);
                pos = next;
            }
            None => pos = next_line(&tokens, pos),
        }
    }

    signatures
}

/// Index of the first token after the newline ending the line at `pos`.
fn next_line(tokens: &[Token], pos: usize) -> usize {
    tokens[pos..]
        .iter()
        .position(|t| t.is(TokenKind::Newline))
        .map_or(tokens.len(), |offset| pos + offset + 1)
}

/// Try to read one declaration starting at `start`.
///
/// Returns the signature and the index where scanning resumes.
fn recognize(src: &str, tokens: &[Token], start: usize) -> Option<(Signature, usize)> {
    // qualifiers, return type and name, possibly spread over several lines
    let mut pos = start;
    let mut head: Vec<&Token> = Vec::new();
    while let Some(token) = tokens.get(pos) {
        match token.kind {
            TokenKind::Ident | TokenKind::Star => head.push(token),
            TokenKind::Newline => {}
            _ => break,
        }
        pos += 1;
    }
    let lparen = tokens.get(pos).filter(|t| t.is(TokenKind::LParen))?;

    let (name, prefix) = head.split_last()?;
    if !name.is(TokenKind::Ident) {
        return None;
    }
    let name = name.text(src).trim_start_matches('_');
    if name.is_empty() {
        return None;
    }

    let qualifiers = count_qualifiers(src, prefix);
    let return_run = &prefix[qualifiers..];
    let first = return_run.first().filter(|t| t.is(TokenKind::Ident))?;
    if STATEMENT_KEYWORDS.contains(&first.text(src)) {
        return None;
    }
    let last = return_run.last()?;
    let return_text = &src[first.start..last.end];

    // argument list
    pos += 1;
    let rparen = loop {
        let token = tokens.get(pos)?;
        match token.kind {
            TokenKind::RParen => break token,
            TokenKind::Ident
            | TokenKind::Star
            | TokenKind::Amp
            | TokenKind::Comma
            | TokenKind::Newline => pos += 1,
            _ => return None,
        }
    };
    let params = split_params(&src[lparen.end..rparen.start]);

    // optional `;`, then end of line
    pos += 1;
    if tokens.get(pos).is_some_and(|t| t.is(TokenKind::Semi)) {
        pos += 1;
    }
    let next = match tokens.get(pos) {
        None => tokens.len(),
        Some(t) if t.is(TokenKind::Newline) => pos + 1,
        Some(_) => return None,
    };

    Some((Signature::new(name, return_text, params), next))
}

/// Number of leading qualifier words, leaving a word for the return type.
fn count_qualifiers(src: &str, prefix: &[&Token]) -> usize {
    let mut count = 0;
    while count < MAX_QUALIFIERS
        && prefix
            .get(count)
            .is_some_and(|t| t.is(TokenKind::Ident) && is_qualifier(t.text(src)))
        && prefix
            .get(count + 1)
            .is_some_and(|t| t.is(TokenKind::Ident))
    {
        count += 1;
    }
    count
}

/// `inline`, `static`, or a macro-style all-caps word.
fn is_qualifier(word: &str) -> bool {
    matches!(word, "inline" | "static")
        || word.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

fn split_params(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(src: &str) -> Vec<String> {
        parse_signatures(src).into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_simple_declaration() {
        let sigs = parse_signatures("void lv_timer_pause(lv_timer_t * timer);\n");

        assert_eq!(
            sigs,
            vec![Signature::new("lv_timer_pause", "void", ["lv_timer_t * timer"])]
        );
    }

    #[test]
    fn test_pointer_return_and_params() {
        let sigs = parse_signatures(
            "lv_obj_t * lv_obj_get_child(const lv_obj_t * obj, int32_t id);\n",
        );

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].name, "lv_obj_get_child");
        assert_eq!(sigs[0].return_text, "lv_obj_t *");
        assert_eq!(sigs[0].params, vec!["const lv_obj_t * obj", "int32_t id"]);
    }

    #[test]
    fn test_qualifiers_stripped() {
        let src = "static inline LV_ATTRIBUTE_FAST_MEM uint32_t lv_foo_get(void);\n";
        let sigs = parse_signatures(src);

        assert_eq!(sigs[0].return_text, "uint32_t");
        assert_eq!(sigs[0].params, vec!["void"]);
    }

    #[test]
    fn test_qualifier_leaves_return_type() {
        let sigs = parse_signatures("LV_RES lv_foo_run(lv_foo_t * foo);\n");

        assert_eq!(sigs[0].return_text, "LV_RES");
    }

    #[test]
    fn test_qualifier_limit() {
        // the fourth qualifier is left in the return type
        let sigs = parse_signatures("A B C D int lv_foo(void);\n");

        assert_eq!(sigs[0].return_text, "D int");
    }

    #[test]
    fn test_empty_params() {
        let sigs = parse_signatures("lv_disp_t * lv_disp_get_default();\n");

        assert!(sigs[0].params.is_empty());
    }

    #[test]
    fn test_leading_underscores_stripped() {
        assert_eq!(names("void _lv_foo_init(void);\n"), vec!["lv_foo_init"]);
        assert!(names("void __(void);\n").is_empty());
    }

    #[test]
    fn test_statements_skipped() {
        let src = "\
static inline int lv_foo_get(lv_foo_t * foo)
{
    return lv_foo_read(foo);
}
else lv_bar(x);
typedef void lv_cb(int x);
x = lv_baz(y);
";
        assert_eq!(names(src), vec!["lv_foo_get"]);
    }

    #[test]
    fn test_non_declarations_skipped() {
        let src = "\
#define LV_FOO(x) (x)
typedef struct {
    int x;
} lv_point_t;
void lv_point_set(lv_point_t * p, int (*cb)(void));
void lv_point_reset(lv_point_t * p) { }
int lv_point_len(const lv_point_t * p[]);
";
        assert!(names(src).is_empty());
    }

    #[test]
    fn test_consecutive_declarations() {
        let src = "\
void lv_timer_pause(lv_timer_t * timer);
void lv_timer_resume(lv_timer_t * timer);

/**
 * Doc comment mentioning lv_timer_fake(void);
 */
void lv_timer_ready(lv_timer_t * timer);";

        assert_eq!(
            names(src),
            vec!["lv_timer_pause", "lv_timer_resume", "lv_timer_ready"]
        );
    }

    #[test]
    fn test_multiline_declaration() {
        let src = "\
static inline
void lv_area_copy(lv_area_t * dest,
                  const lv_area_t * src);
";
        let sigs = parse_signatures(src);

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].name, "lv_area_copy");
        assert_eq!(sigs[0].return_text, "void");
        assert_eq!(sigs[0].params, vec!["lv_area_t * dest", "const lv_area_t * src"]);
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert!(names("void lv_foo(int x); int y;\n").is_empty());
        assert!(names("void lv_foo(int x) __attribute__;\n").is_empty());
    }

    #[test]
    fn test_reference_params() {
        let sigs = parse_signatures("void lv_foo_set(lv_foo_t & foo, char *txt)\n");

        assert_eq!(sigs[0].params, vec!["lv_foo_t & foo", "char *txt"]);
    }
}
