//! Symbol tables: characters and prosigns to canonical interval patterns,
//! and the compiler that turns text into one playable sequence.

mod extended;
mod international;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use tracing::{debug, trace};

use crate::error::{MorseError, Result, UnknownSymbol};
use crate::interval::IntervalKind;
use crate::playback::{Playable, StateSetter, Waiter};
use crate::sequence::Sequence;
use crate::timing::MorseTiming;

pub use extended::EXTENDED_INTERNATIONAL_SYMBOLS;
pub use international::ITU_R_M1677_SYMBOLS;

static INTERNATIONAL: LazyLock<Arc<SymbolTable>> = LazyLock::new(|| {
    let table = SymbolTable::new("ITU-R M.1677-1", ITU_R_M1677_SYMBOLS.iter().cloned())
        .expect("ITU-R symbol rows are unique and non-empty");
    Arc::new(table)
});

static EXTENDED_INTERNATIONAL: LazyLock<Arc<SymbolTable>> = LazyLock::new(|| {
    let table = SymbolTable::new(
        "Extended International",
        EXTENDED_INTERNATIONAL_SYMBOLS.iter().cloned(),
    )
    .expect("extended symbol rows are unique and non-empty");
    Arc::new(table)
});

/// Letters, digits, punctuation and prosigns of ITU-R M.1677-1 (2009)
pub fn international() -> Arc<SymbolTable> {
    Arc::clone(&INTERNATIONAL)
}

/// The ITU-R set plus accented letters, extra punctuation and "new page"
pub fn extended_international() -> Arc<SymbolTable> {
    Arc::clone(&EXTENDED_INTERNATIONAL)
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

// ============================================================================
// Keys and table rows
// ============================================================================

/// A single character or a named prosign.
///
/// Keys compare and hash by their lowercase form, so `'A'` equals `'a'` and
/// `"End"` equals `"end"`.
#[derive(Debug, Clone)]
pub enum SymbolKey {
    Char(char),
    Prosign(Cow<'static, str>),
}

impl SymbolKey {
    pub fn prosign(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Prosign(name.into())
    }

    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Prosign(_) => None,
        }
    }

    pub fn as_prosign(&self) -> Option<&str> {
        match self {
            Self::Char(_) => None,
            Self::Prosign(name) => Some(&**name),
        }
    }

    fn folded(&self) -> FoldedKey {
        match self {
            Self::Char(c) => FoldedKey::Char(fold_char(*c)),
            Self::Prosign(name) => FoldedKey::Prosign(fold_name(name)),
        }
    }
}

impl PartialEq for SymbolKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for SymbolKey {}

impl Hash for SymbolKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Prosign(name) => write!(f, "<{name}>"),
        }
    }
}

impl From<char> for SymbolKey {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

#[derive(PartialEq, Eq, Hash)]
enum FoldedKey {
    Char(char),
    Prosign(String),
}

/// One row of a table definition: a key and its dots, dashes and any
/// literal gaps, before element gaps are inserted
#[derive(Debug, Clone)]
pub struct SymbolSpec {
    pub key: SymbolKey,
    pub pattern: Cow<'static, [IntervalKind]>,
}

impl SymbolSpec {
    pub fn new(key: SymbolKey, pattern: impl Into<Cow<'static, [IntervalKind]>>) -> Self {
        Self {
            key,
            pattern: pattern.into(),
        }
    }

    pub const fn char(c: char, pattern: &'static [IntervalKind]) -> Self {
        Self {
            key: SymbolKey::Char(c),
            pattern: Cow::Borrowed(pattern),
        }
    }

    pub const fn prosign(name: &'static str, pattern: &'static [IntervalKind]) -> Self {
        Self {
            key: SymbolKey::Prosign(Cow::Borrowed(name)),
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Element gaps go between two consecutive active kinds only, so literal
    /// letter gaps in compound punctuation stay as written. Prosigns end in
    /// a word gap.
    fn compile(&self) -> Sequence {
        let mut sequence = Sequence::with_capacity(self.pattern.len() * 2);
        let mut previous_active = false;
        for &kind in self.pattern.iter() {
            if previous_active && kind.is_active() {
                sequence.push(IntervalKind::IntraSymbolGap);
            }
            sequence.push(kind);
            previous_active = kind.is_active();
        }
        if !self.key.is_char() {
            sequence.push(IntervalKind::WordGap);
        }
        sequence
    }
}

// ============================================================================
// Entries and tables
// ============================================================================

/// A key with its canonical sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    key: SymbolKey,
    sequence: Sequence,
}

impl SymbolEntry {
    pub fn key(&self) -> &SymbolKey {
        &self.key
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

impl Playable for SymbolEntry {
    fn play<E, S, W, T>(
        &self,
        setter: &mut S,
        waiter: &mut W,
        timing: &T,
    ) -> std::result::Result<(), E>
    where
        S: StateSetter<E> + ?Sized,
        W: Waiter<E> + ?Sized,
        T: MorseTiming + ?Sized,
    {
        self.sequence.play(setter, waiter, timing)
    }
}

/// An immutable set of symbols.
///
/// Lookup maps are built once in [`SymbolTable::new`] and never change, so a
/// table can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    name: String,
    entries: Vec<SymbolEntry>,
    by_char: HashMap<char, usize>,
    by_prosign: HashMap<String, usize>,
    prosigns: Vec<String>,
}

impl SymbolTable {
    /// Build a table from its rows, in order. Fails if two
    /// rows share a key (ignoring case) or a row has an empty pattern.
    pub fn new(
        name: impl Into<String>,
        specs: impl IntoIterator<Item = SymbolSpec>,
    ) -> Result<Self> {
        let name = name.into();
        let mut entries = Vec::new();
        let mut by_char = HashMap::new();
        let mut by_prosign = HashMap::new();
        let mut prosigns = Vec::new();

        for spec in specs {
            if spec.pattern.is_empty() {
                return Err(MorseError::InvalidTable(format!(
                    "{} in {name} has an empty pattern",
                    spec.key
                )));
            }
            let index = entries.len();
            let duplicate = match &spec.key {
                SymbolKey::Char(c) => by_char.insert(fold_char(*c), index).is_some(),
                SymbolKey::Prosign(prosign) => {
                    prosigns.push(prosign.to_string());
                    by_prosign.insert(fold_name(prosign), index).is_some()
                }
            };
            if duplicate {
                return Err(MorseError::InvalidTable(format!(
                    "{} appears more than once in {name}",
                    spec.key
                )));
            }
            entries.push(SymbolEntry {
                sequence: spec.compile(),
                key: spec.key,
            });
        }

        debug!(
            table = %name,
            symbols = entries.len(),
            prosigns = prosigns.len(),
            "Symbol table built"
        );

        Ok(Self {
            name,
            entries,
            by_char,
            by_prosign,
            prosigns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in row order
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &SymbolKey) -> Option<&SymbolEntry> {
        let index = match key {
            SymbolKey::Char(c) => self.by_char.get(&fold_char(*c)),
            SymbolKey::Prosign(name) => self.by_prosign.get(&fold_name(name)),
        };
        index.map(|&i| &self.entries[i])
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.by_char.contains_key(&fold_char(c))
    }

    pub fn lookup_char(&self, c: char) -> Result<&Sequence> {
        self.by_char
            .get(&fold_char(c))
            .map(|&i| &self.entries[i].sequence)
            .ok_or(MorseError::UnknownSymbol(UnknownSymbol::Char(c)))
    }

    pub fn lookup_prosign(&self, name: &str) -> Result<&Sequence> {
        self.by_prosign
            .get(&fold_name(name))
            .map(|&i| &self.entries[i].sequence)
            .ok_or_else(|| MorseError::UnknownSymbol(UnknownSymbol::Prosign(name.to_string())))
    }

    /// Prosign names as written in the table rows, usable as lookup input
    pub fn available_prosigns(&self) -> &[String] {
        &self.prosigns
    }

    /// Compile text into one sequence.
    ///
    /// Each whitespace character becomes a word gap. Characters of one word
    /// are separated by letter gaps. Text that does not end in whitespace
    /// gets a closing word gap. The first character without an encoding
    /// fails the whole compile.
    pub fn compile(&self, text: &str) -> Result<Sequence> {
        let mut sequence = Sequence::new();
        let mut needs_gap = false;

        for c in text.chars() {
            if c.is_whitespace() {
                sequence.push(IntervalKind::WordGap);
                needs_gap = false;
                continue;
            }
            let symbol = self.lookup_char(c)?;
            if needs_gap {
                sequence.push(IntervalKind::LetterGap);
            }
            sequence.append(symbol);
            needs_gap = true;
        }
        if needs_gap {
            sequence.push(IntervalKind::WordGap);
        }

        trace!(table = %self.name, intervals = sequence.len(), "Compiled text");
        Ok(sequence)
    }

    /// Owned copy of a prosign's sequence, trailing word gap included
    pub fn compile_prosign(&self, name: &str) -> Result<Sequence> {
        self.lookup_prosign(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::FarnsworthTiming;
    use std::cell::RefCell;
    use std::time::Duration;
    use IntervalKind::*;

    /// Play against Farnsworth 20/40 and record (on, nanos) pairs
    fn trace(sequence: &Sequence) -> Vec<(bool, u64)> {
        let timing = FarnsworthTiming::new(20.0, 40.0).unwrap();
        let events = RefCell::new(Vec::new());
        let state = RefCell::new(false);
        let mut setter = |on: bool| -> std::result::Result<(), ()> {
            *state.borrow_mut() = on;
            Ok(())
        };
        let mut waiter = |d: Duration| -> std::result::Result<(), ()> {
            events.borrow_mut().push((*state.borrow(), d.as_nanos() as u64));
            Ok(())
        };
        sequence.play(&mut setter, &mut waiter, &timing).unwrap();
        events.into_inner()
    }

    const DOT: (bool, u64) = (true, 30_000_000);
    const DASH: (bool, u64) = (true, 90_000_000);
    const GAP: (bool, u64) = (false, 30_000_000);
    const LETTER: (bool, u64) = (false, 326_842_105);
    const WORD: (bool, u64) = (false, 762_631_580);

    fn both_tables() -> [Arc<SymbolTable>; 2] {
        [international(), extended_international()]
    }

    #[test]
    fn test_paris_trace() {
        #[rustfmt::skip]
        let expected = vec![
            DOT, GAP, DASH, GAP, DASH, GAP, DOT, LETTER,
            DOT, GAP, DASH, LETTER,
            DOT, GAP, DASH, GAP, DOT, LETTER,
            DOT, GAP, DOT, LETTER,
            DOT, GAP, DOT, GAP, DOT, WORD,
        ];
        for table in both_tables() {
            assert_eq!(trace(&table.compile("PARIS").unwrap()), expected, "{}", table.name());
        }
    }

    #[test]
    fn test_codex_trace() {
        #[rustfmt::skip]
        let expected = vec![
            DASH, GAP, DOT, GAP, DASH, GAP, DOT, LETTER,
            DASH, GAP, DASH, GAP, DASH, LETTER,
            DASH, GAP, DOT, GAP, DOT, LETTER,
            DOT, LETTER,
            DASH, GAP, DOT, GAP, DOT, GAP, DASH, WORD,
        ];
        for table in both_tables() {
            assert_eq!(trace(&table.compile("CODEX").unwrap()), expected, "{}", table.name());
        }
    }

    #[test]
    fn test_starting_signal_prosign() {
        let expected = vec![DASH, GAP, DOT, GAP, DASH, GAP, DOT, GAP, DASH, WORD];
        for table in both_tables() {
            let sequence = table.lookup_prosign("starting signal").unwrap();
            assert_eq!(sequence.last(), Some(WordGap));
            assert_eq!(trace(sequence), expected);
        }
    }

    #[test]
    fn test_end_prosign_is_available() {
        for table in both_tables() {
            assert!(table.available_prosigns().iter().any(|p| p == "end"));
            for name in table.available_prosigns() {
                assert!(table.lookup_prosign(name).is_ok());
            }
        }
        assert!(extended_international().lookup_prosign("new page").is_ok());
        assert!(international().lookup_prosign("new page").is_err());
    }

    #[test]
    fn test_lookup_folds_case() {
        let table = international();
        assert_eq!(table.lookup_char('Q').unwrap(), table.lookup_char('q').unwrap());
        assert_eq!(
            table.lookup_prosign("Starting Signal").unwrap(),
            table.lookup_prosign("starting signal").unwrap()
        );
        assert_eq!(table.lookup_char('É').unwrap().to_string(), "..-..");
    }

    #[test]
    fn test_unknown_symbols_carry_input() {
        let table = international();
        assert_eq!(
            table.compile("SOS#OK").unwrap_err(),
            MorseError::UnknownSymbol(UnknownSymbol::Char('#'))
        );
        assert_eq!(
            table.lookup_prosign("over").unwrap_err(),
            MorseError::UnknownSymbol(UnknownSymbol::Prosign("over".into()))
        );
        assert!(table.compile("!").is_err());
        assert!(extended_international().compile("!").is_ok());
    }

    #[test]
    fn test_blank_input_compiles() {
        let table = international();
        assert!(table.compile("").unwrap().is_empty());
        let blank = table.compile("   ").unwrap();
        assert_eq!(blank.len(), 3);
        assert!(blank.kinds().all(|k| k == WordGap));
    }

    #[test]
    fn test_whitespace_separates_words() {
        let table = international();
        assert_eq!(table.compile("e e").unwrap().to_string(), ". / . / ");
        assert_eq!(table.compile("ee").unwrap().to_string(), ". . / ");
        // Trailing whitespace supplies the closing gap itself
        assert_eq!(table.compile("e ").unwrap().kinds().collect::<Vec<_>>(), vec![Dot, WordGap]);
        assert_eq!(table.compile("\te").unwrap().first(), Some(WordGap));
    }

    #[test]
    fn test_transitions_match_element_count() {
        // On and off for each element; the last off is the closing word gap
        fn check(table: &SymbolTable, text: &str) {
            let sequence = table.compile(text).unwrap();
            assert_eq!(sequence.transitions(), 2 * sequence.active_count(), "{text}");
            assert_eq!(sequence.last(), Some(WordGap));
        }
        for table in both_tables() {
            for text in ["PARIS", "CODEX", "73", "?", "SOS"] {
                check(&table, text);
            }
        }
        // Literal letter gaps inside one symbol still alternate with elements
        let international = international();
        for text in ["%", "‰", "″", "5%"] {
            check(&international, text);
        }
        assert!(extended_international().compile("%").is_err());
    }

    #[test]
    fn test_failed_compile_reports_first_unknown_character() {
        let table = international();
        let text = format!("#{}", " e".repeat(10_000));
        assert_eq!(
            table.compile(&text).unwrap_err(),
            MorseError::UnknownSymbol(UnknownSymbol::Char('#'))
        );
        let blank = " ".repeat(10_000);
        assert_eq!(table.compile(&blank).unwrap().len(), 10_000);
        // Multi-byte characters compile to one symbol each
        assert_eq!(table.compile("éé").unwrap().to_string(), "..-.. ..-.. / ");
    }

    #[test]
    fn test_compound_punctuation_keeps_literal_gaps() {
        let table = international();
        let percent = table.lookup_char('%').unwrap();
        assert_eq!(percent.to_string(), "----- -..-. -----");
        assert_eq!(percent.kinds().filter(|&k| k == LetterGap).count(), 2);
        assert_eq!(percent.kinds().filter(|&k| k == IntraSymbolGap).count(), 12);
        assert_eq!(table.lookup_char('″').unwrap().to_string(), ".----. .----.");
    }

    #[test]
    fn test_quotation_mark_resolved() {
        let table = international();
        assert_eq!(table.lookup_char('?').unwrap().to_string(), "..--..");
        assert_eq!(table.lookup_char('"').unwrap().to_string(), ".-..-.");
        assert_eq!(table.lookup_char('x').unwrap().to_string(), "-..-");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let specs = [
            SymbolSpec::char('a', &[Dot, Dash]),
            SymbolSpec::char('A', &[Dash]),
        ];
        assert!(matches!(
            SymbolTable::new("dup", specs),
            Err(MorseError::InvalidTable(_))
        ));

        let specs = [
            SymbolSpec::prosign("Over", &[Dash, Dot, Dash]),
            SymbolSpec::prosign("over", &[Dash]),
        ];
        assert!(SymbolTable::new("dup", specs).is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let specs = [SymbolSpec::new(SymbolKey::prosign("nothing"), Vec::<IntervalKind>::new())];
        assert!(SymbolTable::new("empty", specs).is_err());
    }

    #[test]
    fn test_custom_table() {
        let specs = [
            SymbolSpec::char('k', &[Dash, Dot, Dash]),
            SymbolSpec::new(SymbolKey::prosign("Go Ahead".to_string()), vec![Dash, Dot, Dash]),
        ];
        let table = SymbolTable::new("custom", specs).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.available_prosigns(), ["Go Ahead".to_string()]);
        assert_eq!(table.compile_prosign("go ahead").unwrap().to_string(), "-.- / ");
        assert!(table.get(&SymbolKey::Char('K')).is_some());
        assert!(table.contains_char('K'));
        assert!(!table.contains_char('e'));
    }

    #[test]
    fn test_symbol_key_equality_folds_case() {
        assert_eq!(SymbolKey::Char('A'), SymbolKey::Char('a'));
        assert_eq!(SymbolKey::prosign("END"), SymbolKey::prosign("end"));
        assert_ne!(SymbolKey::Char('e'), SymbolKey::prosign("e"));
        assert_eq!(SymbolKey::prosign("x").as_prosign(), Some("x"));
        assert_eq!(SymbolKey::Char('x').as_char(), Some('x'));
    }

    #[test]
    fn test_tables_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| international().compile("CQ CQ").unwrap()))
            .collect();
        let fresh = SymbolTable::new("fresh", ITU_R_M1677_SYMBOLS.iter().cloned()).unwrap();
        let expected = fresh.compile("CQ CQ").unwrap();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
