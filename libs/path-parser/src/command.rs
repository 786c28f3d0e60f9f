//! # Path Commands
//!
//! The closed set of supported path commands, and the decoder that turns a
//! token stream into commands. Each arm reads a fixed number of operands,
//! so a decoded [`Command`] always carries exactly what it needs.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use svg_path_parser::{lexer::Lexer, Command, decode};
//!
//! let commands = decode(&Lexer::new("m1,2 h3 z").tokenize()).unwrap();
//! assert_eq!(commands, vec![
//!     Command::MoveRelative(DVec2::new(1.0, 2.0)),
//!     Command::HLineRelative(3.0),
//!     Command::Close,
//! ]);
//! ```

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use glam::DVec2;

// =============================================================================
// COMMAND
// =============================================================================

/// A single path command with its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `M x y`
    MoveAbsolute(DVec2),
    /// `m dx dy`
    MoveRelative(DVec2),
    /// `L x y`
    LineAbsolute(DVec2),
    /// `l dx dy`
    LineRelative(DVec2),
    /// `H x`
    HLineAbsolute(f64),
    /// `h dx`
    HLineRelative(f64),
    /// `V y`
    VLineAbsolute(f64),
    /// `v dy`
    VLineRelative(f64),
    /// `C x1 y1 x2 y2 x y`
    CubicAbsolute {
        control1: DVec2,
        control2: DVec2,
        end: DVec2,
    },
    /// `c dx1 dy1 dx2 dy2 dx dy`, all relative to the current point.
    CubicRelative {
        control1: DVec2,
        control2: DVec2,
        end: DVec2,
    },
    /// `Z` or `z`
    Close,
}

impl Command {
    /// The letter this command is written with.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveAbsolute(_) => 'M',
            Self::MoveRelative(_) => 'm',
            Self::LineAbsolute(_) => 'L',
            Self::LineRelative(_) => 'l',
            Self::HLineAbsolute(_) => 'H',
            Self::HLineRelative(_) => 'h',
            Self::VLineAbsolute(_) => 'V',
            Self::VLineRelative(_) => 'v',
            Self::CubicAbsolute { .. } => 'C',
            Self::CubicRelative { .. } => 'c',
            Self::Close => 'Z',
        }
    }

    /// Number of numeric operands the command takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::MoveAbsolute(_)
            | Self::MoveRelative(_)
            | Self::LineAbsolute(_)
            | Self::LineRelative(_) => 2,
            Self::HLineAbsolute(_)
            | Self::HLineRelative(_)
            | Self::VLineAbsolute(_)
            | Self::VLineRelative(_) => 1,
            Self::CubicAbsolute { .. } | Self::CubicRelative { .. } => 6,
            Self::Close => 0,
        }
    }

    /// True for `M` and `m`.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveAbsolute(_) | Self::MoveRelative(_))
    }
}

// =============================================================================
// DECODER
// =============================================================================

/// Decode a token stream (as produced by [`crate::lexer::Lexer`]) into commands.
///
/// ## Errors
///
/// - [`LeadingNumber`](crate::ParseErrorKind::LeadingNumber) when a number precedes every command
/// - [`MissingOperands`](crate::ParseErrorKind::MissingOperands) when the input ends mid-command
/// - [`ExpectedNumber`](crate::ParseErrorKind::ExpectedNumber) when a command letter interrupts
///   operands
///
/// Numbers in command position after the first command are ignored.
pub fn decode(tokens: &[Token]) -> Result<Vec<Command>, ParseError> {
    Decoder::new(tokens).decode()
}

struct Decoder<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Decoder<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn decode(mut self) -> Result<Vec<Command>, ParseError> {
        let mut commands = Vec::new();

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Number if commands.is_empty() => {
                    return Err(ParseError::leading_number(&token.text, token.span));
                }
                TokenKind::Number => {
                    log::trace!(
                        "ignoring stray operand '{}' at byte {}",
                        token.text,
                        token.span.start
                    );
                }
                TokenKind::Command(letter) => match self.command(letter, token.span)? {
                    Some(command) => commands.push(command),
                    None => log::trace!("ignoring unsupported command '{letter}'"),
                },
            }
        }

        Ok(commands)
    }

    fn next(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn command(&mut self, letter: char, span: Span) -> Result<Option<Command>, ParseError> {
        let command = match letter {
            'M' => Command::MoveAbsolute(self.point(letter, span)?),
            'm' => Command::MoveRelative(self.point(letter, span)?),
            'L' => Command::LineAbsolute(self.point(letter, span)?),
            'l' => Command::LineRelative(self.point(letter, span)?),
            'H' => Command::HLineAbsolute(self.scalar(letter, span)?),
            'h' => Command::HLineRelative(self.scalar(letter, span)?),
            'V' => Command::VLineAbsolute(self.scalar(letter, span)?),
            'v' => Command::VLineRelative(self.scalar(letter, span)?),
            'C' | 'c' => {
                let [x1, y1, x2, y2, x, y] = self.operands::<6>(letter, span)?;
                let control1 = DVec2::new(x1, y1);
                let control2 = DVec2::new(x2, y2);
                let end = DVec2::new(x, y);
                if letter == 'C' {
                    Command::CubicAbsolute {
                        control1,
                        control2,
                        end,
                    }
                } else {
                    Command::CubicRelative {
                        control1,
                        control2,
                        end,
                    }
                }
            }
            'Z' | 'z' => Command::Close,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    fn point(&mut self, letter: char, span: Span) -> Result<DVec2, ParseError> {
        let [x, y] = self.operands::<2>(letter, span)?;
        Ok(DVec2::new(x, y))
    }

    fn scalar(&mut self, letter: char, span: Span) -> Result<f64, ParseError> {
        let [value] = self.operands::<1>(letter, span)?;
        Ok(value)
    }

    /// Read exactly `N` numeric operands for `letter`.
    fn operands<const N: usize>(
        &mut self,
        letter: char,
        span: Span,
    ) -> Result<[f64; N], ParseError> {
        let mut values = [0.0; N];
        for (found, slot) in values.iter_mut().enumerate() {
            let Some(token) = self.next() else {
                return Err(ParseError::missing_operands(letter, N, found, span));
            };
            *slot = match (token.value(), token.command()) {
                (Some(value), _) => value,
                (None, Some(other)) => {
                    return Err(ParseError::expected_number(letter, other, token.span));
                }
                (None, None) => return Err(ParseError::missing_operands(letter, N, found, span)),
            };
        }
        Ok(values)
    }
}

// =============================================================================
// TESTS
// =============================================================================
