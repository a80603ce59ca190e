use crate::property_ty::{classify, WordBreakProperty};
use smallvec::SmallVec;

/// A confirmed word boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Boundary {
    /// Offset of the code point that follows the boundary.
    pub offset: usize,
    /// Word-break property of that code point.
    pub property: WordBreakProperty,
}

/// Boundaries confirmed by a single [`WordBreaker`] call, in ascending offset order.
///
/// At most one boundary is ever pending, so a call confirms at most two.
pub type Breaks = SmallVec<[Boundary; 2]>;

/// Which deferred rule a pending boundary waits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Deferred {
    /// `AHLetter × (MidLetter | MidNumLetQ) AHLetter`
    Letters,
    /// `Hebrew_Letter × Double_Quote Hebrew_Letter`
    HebrewQuote,
    /// `Numeric × (MidNum | MidNumLetQ) Numeric`
    Digits,
}

impl Deferred {
    fn joins(self, next: WordBreakProperty) -> bool {
        match self {
            Deferred::Letters => next.is_ah_letter(),
            Deferred::HebrewQuote => next == WordBreakProperty::HebrewLetter,
            Deferred::Digits => next == WordBreakProperty::Numeric,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    boundary: Boundary,
    rule: Deferred,
}

enum Decision {
    Break,
    Keep,
    Defer(Deferred),
}

/// Finds word boundaries in a stream of code points.
///
/// This complies with the word boundary rules of
/// [UAX #29](https://www.unicode.org/reports/tr29/#Word_Boundaries).
///
/// Code points are fed one at a time, in order, together with their offset.
/// Some rules need to see the next non-ignorable code point before deciding,
/// so a boundary may be confirmed by a later call than the one that
/// supplied its code point. Call [`WordBreaker::finish`] at end of text to
/// flush it.
///
/// No boundary is reported before the first code point, and the end of the
/// text is an implicit boundary that is never reported.
///
/// # Examples
///
/// ```
/// use wordbreak::WordBreaker;
///
/// let text = "it's 3.5";
/// let mut breaker = WordBreaker::new();
/// let mut breaks = Vec::new();
/// for (offset, ch) in text.char_indices() {
///     breaks.extend(breaker.process(offset, ch).iter().map(|b| b.offset));
/// }
/// breaks.extend(breaker.finish().iter().map(|b| b.offset));
/// assert_eq!(breaks, vec![4, 5]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordBreaker {
    /// Property of the last code point not skipped by the ignore rule.
    last: Option<WordBreakProperty>,
    /// Property of the non-ignored code point before `last`.
    before_last: Option<WordBreakProperty>,
    /// Property of the immediately preceding code point.
    last_raw: Option<WordBreakProperty>,
    regional_indicator_odd: bool,
    pending: Option<Pending>,
}

impl WordBreaker {
    /// Creates a breaker positioned at start of text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the breaker to start-of-text state, dropping any pending decision.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feeds the next code point, located at `offset`.
    ///
    /// Returns the boundaries this code point confirms. The boundary before
    /// `ch` is included when it can be decided now; a boundary deferred by an
    /// earlier call is included once `ch` resolves it.
    pub fn process(&mut self, offset: usize, ch: char) -> Breaks {
        let cp = classify(ch);
        let prop = cp.word_break;
        let mut breaks = Breaks::new();

        // Ignore Extend, Format and ZWJ except after sot, CR, LF and Newline.
        let ignored = prop.is_ignorable() && self.last.map_or(false, |last| !last.is_newline());

        if !ignored {
            if let Some(pending) = self.pending.take() {
                if !pending.rule.joins(prop) {
                    breaks.push(pending.boundary);
                }
            }
        }

        let here = Boundary {
            offset,
            property: prop,
        };
        match self.decide(prop, cp.extended_pictographic, ignored) {
            Decision::Break if self.last.is_some() => breaks.push(here),
            Decision::Break | Decision::Keep => {}
            Decision::Defer(rule) => {
                self.pending = Some(Pending {
                    boundary: here,
                    rule,
                })
            }
        }

        self.last_raw = Some(prop);
        if !ignored {
            self.regional_indicator_odd = prop == WordBreakProperty::RegionalIndicator
                && !(self.last == Some(WordBreakProperty::RegionalIndicator)
                    && self.regional_indicator_odd);
            self.before_last = self.last;
            self.last = Some(prop);
        }
        breaks
    }

    /// Signals end of text.
    ///
    /// A boundary still waiting on lookahead is a break. The breaker is
    /// reset afterwards and may be reused for another stream.
    pub fn finish(&mut self) -> Breaks {
        let mut breaks = Breaks::new();
        if let Some(pending) = self.pending.take() {
            breaks.push(pending.boundary);
        }
        self.reset();
        breaks
    }

    fn decide(
        &self,
        prop: WordBreakProperty,
        extended_pictographic: bool,
        ignored: bool,
    ) -> Decision {
        use WordBreakProperty::*;

        let last = self.last;
        let before_last = self.before_last;
        let is = |p: Option<WordBreakProperty>, f: fn(WordBreakProperty) -> bool| {
            p.map_or(false, f)
        };

        // WB3: CR × LF
        if self.last_raw == Some(CR) && prop == LF {
            return Decision::Keep;
        }
        // WB3a, WB3b: (Newline | CR | LF) ÷, ÷ (Newline | CR | LF)
        if is(last, WordBreakProperty::is_newline) || prop.is_newline() {
            return Decision::Break;
        }
        // WB3c: ZWJ × \p{Extended_Pictographic}
        if self.last_raw == Some(ZWJ) && extended_pictographic {
            return Decision::Keep;
        }
        // WB3d: WSegSpace × WSegSpace
        if self.last_raw == Some(WSegSpace) && prop == WSegSpace {
            return Decision::Keep;
        }
        // WB4: X (Extend | Format | ZWJ)* → X
        if ignored {
            return Decision::Keep;
        }

        let Some(last) = last else {
            return Decision::Break;
        };
        let ah_letter = last.is_ah_letter();

        // WB5
        if ah_letter && prop.is_ah_letter() {
            return Decision::Keep;
        }
        // WB7a
        if last == HebrewLetter && prop == SingleQuote {
            return Decision::Keep;
        }
        // WB6
        if ah_letter && (prop == MidLetter || prop.is_mid_num_let_q()) {
            return Decision::Defer(Deferred::Letters);
        }
        // WB7
        if is(before_last, WordBreakProperty::is_ah_letter)
            && (last == MidLetter || last.is_mid_num_let_q())
            && prop.is_ah_letter()
        {
            return Decision::Keep;
        }
        // WB7b
        if last == HebrewLetter && prop == DoubleQuote {
            return Decision::Defer(Deferred::HebrewQuote);
        }
        // WB7c
        if before_last == Some(HebrewLetter) && last == DoubleQuote && prop == HebrewLetter {
            return Decision::Keep;
        }
        // WB8, WB9, WB10
        if (last == Numeric || ah_letter) && (prop == Numeric || prop.is_ah_letter()) {
            return Decision::Keep;
        }
        // WB11
        if before_last == Some(Numeric)
            && (last == MidNum || last.is_mid_num_let_q())
            && prop == Numeric
        {
            return Decision::Keep;
        }
        // WB12
        if last == Numeric && (prop == MidNum || prop.is_mid_num_let_q()) {
            return Decision::Defer(Deferred::Digits);
        }
        // WB13
        if last == Katakana && prop == Katakana {
            return Decision::Keep;
        }
        // WB13a
        if (ah_letter || matches!(last, Numeric | Katakana | ExtendNumLet))
            && prop == ExtendNumLet
        {
            return Decision::Keep;
        }
        // WB13b
        if last == ExtendNumLet && (prop.is_ah_letter() || matches!(prop, Numeric | Katakana)) {
            return Decision::Keep;
        }
        // WB15, WB16
        if last == RegionalIndicator && prop == RegionalIndicator && self.regional_indicator_odd {
            return Decision::Keep;
        }
        // WB999
        Decision::Break
    }
}

/// Returns an iterator over the word boundaries of `s`, as byte offsets.
///
/// Both the start and the end of a non-empty string are included.
///
/// # Examples
///
/// ```
/// use wordbreak::word_boundaries;
/// assert!(word_boundaries("foo bar").eq(vec![0, 3, 4, 7]));
/// assert_eq!(word_boundaries("").count(), 0);
/// ```
pub fn word_boundaries(s: &str) -> WordBoundaries<'_> {
    WordBoundaries {
        text: s,
        chars: s.char_indices(),
        breaker: WordBreaker::new(),
        queued: Breaks::new(),
        next_queued: 0,
        phase: Phase::Start,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Scanning,
    End,
    Done,
}

/// Iterator over the word boundaries of a string. See [`word_boundaries`].
#[derive(Clone, Debug)]
pub struct WordBoundaries<'a> {
    text: &'a str,
    chars: std::str::CharIndices<'a>,
    breaker: WordBreaker,
    queued: Breaks,
    next_queued: usize,
    phase: Phase,
}

impl Iterator for WordBoundaries<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(boundary) = self.queued.get(self.next_queued) {
                self.next_queued += 1;
                return Some(boundary.offset);
            }
            match self.phase {
                Phase::Start => {
                    self.phase = Phase::Scanning;
                    if !self.text.is_empty() {
                        return Some(0);
                    }
                }
                Phase::Scanning => {
                    self.next_queued = 0;
                    match self.chars.next() {
                        Some((offset, ch)) => self.queued = self.breaker.process(offset, ch),
                        None => {
                            self.phase = Phase::End;
                            self.queued = self.breaker.finish();
                        }
                    }
                }
                Phase::End => {
                    self.phase = Phase::Done;
                    if !self.text.is_empty() {
                        return Some(self.text.len());
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for WordBoundaries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boundaries(s: &str) -> Vec<usize> {
        word_boundaries(s).collect()
    }

    #[test]
    fn test_crlf_is_not_split() {
        assert_eq!(vec![0, 2], boundaries("\r\n"));
        assert_eq!(vec![0, 1, 3, 4], boundaries("a\r\nb"));
        assert_eq!(vec![0, 1, 2], boundaries("\n\r"));
    }

    #[test]
    fn test_no_break_reported_before_first_code_point() {
        let mut breaker = WordBreaker::new();
        assert!(breaker.process(0, 'x').is_empty());
        assert!(breaker.finish().is_empty());
        // `finish` resets, so the next stream starts fresh.
        assert!(breaker.process(0, '\n').is_empty());
    }

    #[test]
    fn test_deferred_boundary_confirmed_by_lookahead() {
        let mut breaker = WordBreaker::new();
        assert!(breaker.process(0, 'a').is_empty());
        assert!(breaker.process(1, ':').is_empty());
        let breaks = breaker.process(2, '!');
        assert_eq!(
            vec![1, 2],
            breaks.iter().map(|b| b.offset).collect::<Vec<_>>()
        );
        assert_eq!(WordBreakProperty::MidLetter, breaks[0].property);
        assert_eq!(WordBreakProperty::Other, breaks[1].property);
    }

    #[test]
    fn test_deferred_boundary_survives_ignorables() {
        let mut breaker = WordBreaker::new();
        breaker.process(0, 'a');
        breaker.process(1, '.');
        assert!(breaker.process(2, '\u{308}').is_empty());
        assert!(breaker.process(4, '\u{ad}').is_empty());
        assert!(breaker.process(6, 'b').is_empty());
        assert!(breaker.finish().is_empty());
    }

    #[test]
    fn test_deferred_boundary_flushed_at_end() {
        let mut breaker = WordBreaker::new();
        breaker.process(0, '1');
        assert!(breaker.process(1, ',').is_empty());
        let breaks = breaker.finish();
        assert_eq!(1, breaks.len());
        assert_eq!(1, breaks[0].offset);
    }

    #[test]
    fn test_deferred_boundary_broken_by_newline() {
        assert_eq!(vec![0, 1, 2, 3], boundaries("a.\n"));
    }

    #[test]
    fn test_ignorables_after_newline_are_not_fused() {
        assert_eq!(vec![0, 1, 3], boundaries("\n\u{308}"));
        assert_eq!(vec![0, 2, 3], boundaries("\u{308}a"));
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let flags = "\u{1f1fa}\u{1f1f8}\u{1f1eb}\u{1f1f7}\u{1f1e9}";
        assert_eq!(vec![0, 8, 16, 20], boundaries(flags));
        // Extend between indicators is transparent.
        let extended = "\u{1f1fa}\u{308}\u{1f1f8}\u{1f1eb}";
        assert_eq!(vec![0, 10, 14], boundaries(extended));
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        let family = "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}";
        assert_eq!(vec![0, family.len()], boundaries(family));
    }

    #[test]
    fn test_reuse_after_reset() {
        let mut breaker = WordBreaker::new();
        breaker.process(0, 'a');
        breaker.process(1, '.');
        breaker.reset();
        assert!(breaker.process(0, 'b').is_empty());
        assert_eq!(1, breaker.process(1, ' ').len());
    }
}
