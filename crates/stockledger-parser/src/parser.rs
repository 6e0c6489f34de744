//! Instruction parsing: token stream to [`Command`].

use stockledger_core::{Command, Pair};

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{tokenize, Token};
use crate::span::{Span, Spanned};
use crate::{ParseResult, ParsedLine};

/// Parse a single instruction line.
///
/// Spans in the returned error are byte offsets within `line`.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line);
    let mut words = tokens
        .iter()
        .filter(|(token, _)| !matches!(token, Token::Newline));

    let Some((operation, op_span)) = words.next() else {
        // Empty instruction: reported as an unknown operation with an
        // empty name.
        return Err(ParseError::new(
            ParseErrorKind::UnknownOperation(String::new()),
            Span::new(0, 0),
        ));
    };

    let args: Vec<(&str, Span)> = words.map(|(token, span)| (token.lexeme(), *span)).collect();

    match operation {
        Token::SetStock => Ok(Command::SetStock(pair_up(&args))),
        Token::AddStock => Ok(Command::AddStock(pair_up(&args))),
        Token::Order => {
            let Some(((reference, _), rest)) = args.split_first() else {
                return Err(ParseError::new(ParseErrorKind::MissingOrderReference, *op_span)
                    .with_hint("order instructions need a reference token after the keyword"));
            };
            Ok(Command::Order {
                reference: (*reference).to_owned(),
                pairs: pair_up(rest),
            })
        }
        Token::Word(name) => Err(ParseError::new(
            ParseErrorKind::UnknownOperation((*name).to_owned()),
            *op_span,
        )
        .with_hint("expected set-stock, add-stock, or order")),
        // Newlines were filtered above.
        Token::Newline => Err(ParseError::new(
            ParseErrorKind::UnknownOperation(String::new()),
            *op_span,
        )),
    }
}

/// Pair argument tokens positionally: even index is a SKU token, odd index
/// its amount. A trailing unpaired token has no partner and is dropped.
fn pair_up(args: &[(&str, Span)]) -> Vec<Pair> {
    args.chunks_exact(2)
        .map(|chunk| Pair::new(chunk[0].0, chunk[1].0))
        .collect()
}

/// Parse a whole source, one instruction per line.
///
/// Every line yields a record, in input order, so a driver can interleave
/// application and reporting. Spans are byte offsets into `source`; line
/// numbers are 1-based. Lines are trimmed of surrounding whitespace before
/// tokenization.
pub fn parse(source: &str) -> ParseResult {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for (index, raw_line) in source.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        // A trailing newline produces one final empty segment; it is not
        // an instruction line. An empty source has no lines at all.
        let is_final = offset + raw_line.len() >= source.len();
        if is_final && line.is_empty() && (source.ends_with('\n') || source.is_empty()) {
            break;
        }

        let trimmed = line.trim();
        let leading = line.len() - line.trim_start().len();
        let base = offset + leading;

        let parsed = match parse_line(trimmed) {
            Ok(command) => Ok(Spanned::new(
                command,
                Span::new(base, base + trimmed.len()),
            )),
            Err(err) => Err(err.offset(base)),
        };

        lines.push(ParsedLine {
            number: index + 1,
            span: Span::new(offset, offset + line.len()),
            parsed,
        });

        offset += raw_line.len() + 1;
    }

    ParseResult { lines }
}
