//! International code with the accented letters, punctuation and signals
//! in common use beyond the ITU-R recommendation. Where operators disagree
//! on an encoding, the most widespread one is used.

use super::SymbolSpec as Spec;
use crate::interval::IntervalKind::{Dash, Dot};

pub static EXTENDED_INTERNATIONAL_SYMBOLS: &[Spec] = &[
    Spec::char('a', &[Dot, Dash]),
    Spec::char('à', &[Dot, Dash, Dash, Dot, Dash]),
    Spec::char('ä', &[Dot, Dash, Dot, Dash]),
    Spec::char('å', &[Dot, Dash, Dash, Dot, Dash]),
    Spec::char('ą', &[Dot, Dash, Dot, Dash]),
    Spec::char('æ', &[Dot, Dash, Dot, Dash]),
    Spec::char('b', &[Dash, Dot, Dot, Dot]),
    Spec::char('c', &[Dash, Dot, Dash, Dot]),
    Spec::char('ć', &[Dash, Dot, Dash, Dot, Dot]),
    Spec::char('ĉ', &[Dash, Dot, Dash, Dot, Dot]),
    Spec::char('ç', &[Dash, Dot, Dash, Dot, Dot]),
    Spec::char('č', &[Dash, Dash, Dash, Dash]),
    Spec::char('d', &[Dash, Dot, Dot]),
    Spec::char('đ', &[Dot, Dot, Dash, Dot, Dot]),
    Spec::char('ð', &[Dot, Dot, Dash, Dash, Dot]),
    Spec::char('e', &[Dot]),
    Spec::char('é', &[Dot, Dot, Dash, Dot, Dot]),
    Spec::char('è', &[Dot, Dash, Dot, Dot, Dash]),
    Spec::char('ę', &[Dot, Dot, Dash, Dot, Dot]),
    Spec::char('f', &[Dot, Dot, Dash, Dot]),
    Spec::char('g', &[Dash, Dash, Dot]),
    Spec::char('ĝ', &[Dash, Dash, Dot, Dash, Dot]),
    Spec::char('h', &[Dot, Dot, Dot, Dot]),
    Spec::char('ĥ', &[Dash, Dash, Dash, Dash]),
    Spec::char('i', &[Dot, Dot]),
    Spec::char('j', &[Dot, Dash, Dash, Dash]),
    Spec::char('ĵ', &[Dot, Dash, Dash, Dash, Dot]),
    Spec::char('k', &[Dash, Dot, Dash]),
    Spec::char('l', &[Dot, Dash, Dot, Dot]),
    Spec::char('ł', &[Dot, Dash, Dot, Dot, Dash]),
    Spec::char('m', &[Dash, Dash]),
    Spec::char('n', &[Dash, Dot]),
    Spec::char('ń', &[Dash, Dash, Dot, Dash, Dash]),
    Spec::char('ñ', &[Dash, Dash, Dot, Dash, Dash]),
    Spec::char('o', &[Dash, Dash, Dash]),
    Spec::char('ó', &[Dash, Dash, Dash, Dot]),
    Spec::char('ö', &[Dash, Dash, Dash, Dot]),
    Spec::char('ø', &[Dash, Dash, Dash, Dot]),
    Spec::char('p', &[Dot, Dash, Dash, Dot]),
    Spec::char('q', &[Dash, Dash, Dot, Dash]),
    Spec::char('r', &[Dot, Dash, Dot]),
    Spec::char('s', &[Dot, Dot, Dot]),
    Spec::char('ś', &[Dot, Dot, Dot, Dash, Dot, Dot, Dot]),
    Spec::char('ŝ', &[Dot, Dot, Dot, Dash, Dot]),
    Spec::char('š', &[Dash, Dash, Dash, Dash]),
    Spec::char('t', &[Dash]),
    Spec::char('þ', &[Dot, Dash, Dash, Dot, Dot]),
    Spec::char('u', &[Dot, Dot, Dash]),
    Spec::char('ü', &[Dot, Dot, Dash, Dash]),
    Spec::char('ŭ', &[Dot, Dot, Dash, Dash]),
    Spec::char('v', &[Dot, Dot, Dot, Dash]),
    Spec::char('w', &[Dot, Dash, Dash]),
    Spec::char('x', &[Dash, Dot, Dot, Dash]),
    Spec::char('y', &[Dash, Dot, Dash, Dash]),
    Spec::char('z', &[Dash, Dash, Dot, Dot]),
    Spec::char('ź', &[Dash, Dash, Dot, Dot, Dash, Dot]),
    Spec::char('ż', &[Dash, Dash, Dot, Dot, Dash]),
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
    Spec::char('!', &[Dash, Dot, Dash, Dot, Dash, Dash]),
    Spec::char('/', &[Dash, Dot, Dot, Dash, Dot]),
    Spec::char('(', &[Dash, Dot, Dash, Dash, Dot]),
    Spec::char(')', &[Dash, Dot, Dash, Dash, Dot, Dash]),
    Spec::char('&', &[Dot, Dash, Dot, Dot, Dot]),
    Spec::char(':', &[Dash, Dash, Dash, Dot, Dot, Dot]),
    Spec::char(';', &[Dash, Dot, Dash, Dot, Dash, Dot]),
    Spec::char('⹀', &[Dash, Dot, Dot, Dot, Dash]),
    Spec::char('+', &[Dot, Dash, Dot, Dash, Dot]),
    Spec::char('-', &[Dash, Dot, Dot, Dot, Dot, Dash]),
    Spec::char('−', &[Dash, Dot, Dot, Dot, Dot, Dash]),
    Spec::char('_', &[Dot, Dot, Dash, Dash, Dot, Dash]),
    Spec::char('"', &[Dot, Dash, Dot, Dot, Dash, Dot]),
    Spec::char('$', &[Dot, Dot, Dot, Dash, Dot, Dot, Dash]),
    Spec::char('@', &[Dot, Dash, Dash, Dot, Dash, Dot]),
    Spec::prosign("double hyphen", &[Dash, Dot, Dot, Dot, Dash]),
    Spec::prosign("end", &[Dot, Dot, Dot, Dash, Dot, Dash]),
    Spec::prosign("error", &[Dot, Dot, Dot, Dot, Dot, Dot, Dot, Dot]),
    Spec::prosign("cross", &[Dot, Dash, Dot, Dash, Dot]),
    Spec::prosign("invitation to transmit", &[Dash, Dot, Dash]),
    Spec::prosign("starting signal", &[Dash, Dot, Dash, Dot, Dash]),
    Spec::prosign("new page", &[Dot, Dash, Dot, Dash, Dot]),
    Spec::prosign("understood", &[Dot, Dot, Dot, Dash, Dot]),
    Spec::prosign("wait", &[Dot, Dash, Dot, Dot, Dot]),
];
