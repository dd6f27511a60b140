//! ITU-R M.1677-1 (10/2009) characters and procedure signals.
//!
//! Compound signs (per cent, per mille, seconds) keep the letter gaps the
//! recommendation writes between their parts.

use super::SymbolSpec as Spec;
use crate::interval::IntervalKind::{Dash, Dot, LetterGap};

#[rustfmt::skip]
pub static ITU_R_M1677_SYMBOLS: &[Spec] = &[
    Spec::char('a', &[Dot, Dash]),
    Spec::char('b', &[Dash, Dot, Dot, Dot]),
    Spec::char('c', &[Dash, Dot, Dash, Dot]),
    Spec::char('d', &[Dash, Dot, Dot]),
    Spec::char('e', &[Dot]),
    Spec::char('é', &[Dot, Dot, Dash, Dot, Dot]),
    Spec::char('f', &[Dot, Dot, Dash, Dot]),
    Spec::char('g', &[Dash, Dash, Dot]),
    Spec::char('h', &[Dot, Dot, Dot, Dot]),
    Spec::char('i', &[Dot, Dot]),
    Spec::char('j', &[Dot, Dash, Dash, Dash]),
    Spec::char('k', &[Dash, Dot, Dash]),
    Spec::char('l', &[Dot, Dash, Dot, Dot]),
    Spec::char('m', &[Dash, Dash]),
    Spec::char('n', &[Dash, Dot]),
    Spec::char('o', &[Dash, Dash, Dash]),
    Spec::char('p', &[Dot, Dash, Dash, Dot]),
    Spec::char('q', &[Dash, Dash, Dot, Dash]),
    Spec::char('r', &[Dot, Dash, Dot]),
    Spec::char('s', &[Dot, Dot, Dot]),
    Spec::char('t', &[Dash]),
    Spec::char('u', &[Dot, Dot, Dash]),
    Spec::char('v', &[Dot, Dot, Dot, Dash]),
    Spec::char('w', &[Dot, Dash, Dash]),
    Spec::char('x', &[Dash, Dot, Dot, Dash]),
    Spec::char('y', &[Dash, Dot, Dash, Dash]),
    Spec::char('z', &[Dash, Dash, Dot, Dot]),
    Spec::char('0', &[Dash, Dash, Dash, Dash, Dash]),
    Spec::char('1', &[Dot, Dash, Dash, Dash, Dash]),
    Spec::char('2', &[Dot, Dot, Dash, Dash, Dash]),
    Spec::char('3', &[Dot, Dot, Dot, Dash, Dash]),
    Spec::char('4', &[Dot, Dot, Dot, Dot, Dash]),
    Spec::char('5', &[Dot, Dot, Dot, Dot, Dot]),
    Spec::char('6', &[Dash, Dot, Dot, Dot, Dot]),
    Spec::char('7', &[Dash, Dash, Dot, Dot, Dot]),
    Spec::char('8', &[Dash, Dash, Dash, Dot, Dot]),
    Spec::char('9', &[Dash, Dash, Dash, Dash, Dot]),
    Spec::char('.', &[Dot, Dash, Dot, Dash, Dot, Dash]),
    Spec::char(',', &[Dash, Dash, Dot, Dot, Dash, Dash]),
    Spec::char('?', &[Dot, Dot, Dash, Dash, Dot, Dot]),
    Spec::char('\'', &[Dot, Dash, Dash, Dash, Dash, Dot]),
    Spec::char('/', &[Dash, Dot, Dot, Dash, Dot]),
    Spec::char('(', &[Dash, Dot, Dash, Dash, Dot]),
    Spec::char(')', &[Dash, Dot, Dash, Dash, Dot, Dash]),
    Spec::char(':', &[Dash, Dash, Dash, Dot, Dot, Dot]),
    Spec::char('+', &[Dot, Dash, Dot, Dash, Dot]),
    Spec::char('-', &[Dash, Dot, Dot, Dot, Dot, Dash]),
    Spec::char('"', &[Dot, Dash, Dot, Dot, Dash, Dot]),
    Spec::char('@', &[Dot, Dash, Dash, Dot, Dash, Dot]),
    Spec::char(
        '%',
        &[
            Dash, Dash, Dash, Dash, Dash, LetterGap,
            Dash, Dot, Dot, Dash, Dot, LetterGap,
            Dash, Dash, Dash, Dash, Dash,
        ],
    ),
    Spec::char(
        '‰',
        &[
            Dash, Dash, Dash, Dash, Dash, LetterGap,
            Dash, Dot, Dot, Dash, Dot, LetterGap,
            Dash, Dash, Dash, Dash, Dash, LetterGap,
            Dash, Dash, Dash, Dash, Dash,
        ],
    ),
    Spec::char('′', &[Dot, Dash, Dash, Dash, Dash, Dot]),
    Spec::char(
        '″',
        &[
            Dot, Dash, Dash, Dash, Dash, Dot, LetterGap,
            Dot, Dash, Dash, Dash, Dash, Dot,
        ],
    ),
    Spec::prosign("double hyphen", &[Dash, Dot, Dot, Dot, Dash]),
    Spec::prosign("end", &[Dot, Dot, Dot, Dash, Dot, Dash]),
    Spec::prosign("error", &[Dot, Dot, Dot, Dot, Dot, Dot, Dot, Dot]),
    Spec::prosign("cross", &[Dot, Dash, Dot, Dash, Dot]),
    Spec::prosign("invitation to transmit", &[Dash, Dot, Dash]),
    Spec::prosign("starting signal", &[Dash, Dot, Dash, Dot, Dash]),
    Spec::prosign("understood", &[Dot, Dot, Dot, Dash, Dot]),
    Spec::prosign("wait", &[Dot, Dash, Dot, Dot, Dot]),
];
