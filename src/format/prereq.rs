// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prerequisite free-text parsing.
//!
//! SAP prerequisite strings are Hebrew prose with course ids embedded:
//! `או` is the disjunction, the conjunction appears as the suffix form
//! `ו-`, as a standalone `ו`, or as a comma. `ו` is the second character
//! of `או`, so conjunction matching must never fire inside the
//! disjunction word; the tokenizer resolves this with longest-match
//! priority instead of lookbehind tricks.
//!
//! Grouping follows the source material's reading of the prose: in a
//! mixed run like "A ו-B או C ו-D", the disjunction is outermost and each
//! conjunction binds its immediately preceding run of terms, yielding
//! `Or(And(A, B), And(C, D))`.

use std::fmt;

use crate::model::expr::PrereqExpr;
use crate::model::ids::CourseId;

const OR_FIRST: char = 'א';
const OR_SECOND: char = 'ו';
const AND_WORD: char = 'ו';

/// Parenthesis nesting beyond this is treated as an internal
/// inconsistency rather than recursed into.
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    And,
    Or,
    Course(CourseId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrereqParseError {
    NestingTooDeep { limit: usize },
}

impl fmt::Display for PrereqParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestingTooDeep { limit } => {
                write!(f, "prerequisite expression nests deeper than {limit} levels")
            }
        }
    }
}

impl std::error::Error for PrereqParseError {}

/// Parses a prerequisite string into an expression tree.
///
/// Empty or blank input means "no prerequisites" (`Ok(None)`). Errors are
/// internal inconsistencies; callers are expected to degrade them to "no
/// prerequisites" for the affected course and keep going.
pub fn parse(text: &str) -> Result<Option<PrereqExpr>, PrereqParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let tokens = tokenize(text);
    let mut parser = Parser { tokens: &tokens, pos: 0 };
    parser.parse_expr(0)
}

/// Splits a prerequisite string into tokens.
///
/// Longest-match scanner with fixed priority at every position:
/// parentheses and commas, then the disjunction word `או`, then the
/// conjunction suffix `ו-`, then a standalone `ו` (only when not followed
/// by a word character or `-`, so word-initial `ו` prefixes stay part of
/// their word). Everything else accumulates into raw lexemes; a lexeme
/// that is exactly an 8-digit id becomes a course token, any other lexeme
/// is dropped.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut lexeme = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch.is_whitespace() {
            flush_lexeme(&mut lexeme, &mut tokens);
            pos += 1;
            continue;
        }

        match ch {
            '(' => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::Open);
                pos += 1;
            }
            ')' => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::Close);
                pos += 1;
            }
            ',' => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::And);
                pos += 1;
            }
            OR_FIRST if chars.get(pos + 1) == Some(&OR_SECOND) => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::Or);
                pos += 2;
            }
            AND_WORD if chars.get(pos + 1) == Some(&'-') => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::And);
                pos += 2;
            }
            AND_WORD if !chars.get(pos + 1).is_some_and(|next| is_word_char(*next)) => {
                flush_lexeme(&mut lexeme, &mut tokens);
                tokens.push(Token::And);
                pos += 1;
            }
            _ => {
                lexeme.push(ch);
                pos += 1;
            }
        }
    }

    flush_lexeme(&mut lexeme, &mut tokens);
    tokens
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

fn flush_lexeme(lexeme: &mut String, tokens: &mut Vec<Token>) {
    if lexeme.is_empty() {
        return;
    }
    if let Ok(id) = CourseId::new(lexeme.as_str()) {
        tokens.push(Token::Course(id));
    }
    lexeme.clear();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    /// Collects one expression level as `(pending_operator, term)` items.
    ///
    /// A close paren ends the level (an unmatched one simply ends it
    /// early); an unmatched open paren consumes the remaining tokens into
    /// the open group and yields a partial result.
    fn parse_expr(&mut self, depth: usize) -> Result<Option<PrereqExpr>, PrereqParseError> {
        if depth > MAX_DEPTH {
            return Err(PrereqParseError::NestingTooDeep { limit: MAX_DEPTH });
        }

        let mut items: Vec<(Option<Op>, PrereqExpr)> = Vec::new();
        let mut pending: Option<Op> = None;

        while self.pos < self.tokens.len() {
            match &self.tokens[self.pos] {
                Token::Open => {
                    self.pos += 1;
                    let sub = self.parse_expr(depth + 1)?;
                    // A group that yields nothing contributes nothing,
                    // and the operator consumed by it is spent.
                    if let Some(sub) = sub {
                        items.push((pending, sub));
                    }
                    pending = None;
                }
                Token::Close => {
                    self.pos += 1;
                    break;
                }
                Token::Or => {
                    pending = Some(Op::Or);
                    self.pos += 1;
                }
                Token::And => {
                    pending = Some(Op::And);
                    self.pos += 1;
                }
                Token::Course(id) => {
                    items.push((pending.take(), PrereqExpr::Course(id.clone())));
                    self.pos += 1;
                }
            }
        }

        Ok(group_items(items))
    }
}

/// Applies the grouping policy to one collected expression level.
///
/// Uniform operators yield one flat node. Mixed operators group
/// or-outermost: the item walk keeps a current and-run and closes it on
/// every disjunction, so each closed run becomes one disjunct (a run of
/// one stays a bare term).
fn group_items(items: Vec<(Option<Op>, PrereqExpr)>) -> Option<PrereqExpr> {
    if items.is_empty() {
        return None;
    }

    let ops: Vec<Op> = items.iter().filter_map(|(op, _)| *op).collect();
    if ops.is_empty() {
        // No operator at this level: the first term stands alone.
        return items.into_iter().next().map(|(_, term)| term);
    }
    if ops.iter().all(|op| *op == Op::Or) {
        return PrereqExpr::any(items.into_iter().map(|(_, term)| term).collect());
    }
    if ops.iter().all(|op| *op == Op::And) {
        return PrereqExpr::all(items.into_iter().map(|(_, term)| term).collect());
    }

    let mut groups: Vec<PrereqExpr> = Vec::new();
    let mut current: Vec<PrereqExpr> = Vec::new();
    for (index, (op, term)) in items.into_iter().enumerate() {
        if index > 0 && op == Some(Op::Or) {
            if let Some(run) = PrereqExpr::all(std::mem::take(&mut current)) {
                groups.push(run);
            }
        }
        current.push(term);
    }
    if let Some(run) = PrereqExpr::all(current) {
        groups.push(run);
    }
    PrereqExpr::any(groups)
}
