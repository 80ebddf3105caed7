//! Character-level date/time recognition.
//!
//! `DateTimeScanner` walks one input string left to right and decides, by
//! inspecting fixed character positions, whether the text spells a date/time
//! literal — ISO-8601 shapes, several regional variants (`yyyy/MM/dd`,
//! `dd.MM.yyyy`, CJK year/month/day markers) and legacy forms
//! (`/Date(millis+zone)/`, compact `yyyyMMddHHmmss`). No regular expressions
//! and no general-purpose date library: every field is validated by a small
//! character-class predicate and assembled digit by digit.
//!
//! A failed attempt is an ordinary outcome (`ScanOutcome::NoMatch`), never an
//! error: callers fall through to their next candidate format. The cursor
//! only advances when a literal matched.

use crate::datetime::civil;

/// End-of-input sentinel returned by positional reads past the buffer.
pub const EOI: char = '\u{1a}';

const BOM: char = '\u{feff}';

// =============================================================================
// SCAN RESULTS
// =============================================================================

/// Fields extracted from one recognized date/time literal.
///
/// All fields have passed the scanner's character-class validation: month is
/// 1–12, day 1–31, hour 0–24, minute/second 0–60, millisecond 0–999. The
/// ranges are character classes, not calendar checks — `2021-02-31` and
/// `24:00:00` are representable and roll over during epoch conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// UTC offset carried by the literal itself (`Z`, `+07:00`, …), in
    /// milliseconds. `None` means the literal named no zone and the ambient
    /// default applies.
    pub offset_millis: Option<i64>,
}

impl RecognizedDateTime {
    /// Converts the fields to epoch milliseconds.
    ///
    /// The literal's own offset wins; `default_offset_millis` is used when
    /// the literal named no zone.
    pub fn epoch_millis(&self, default_offset_millis: i64) -> i64 {
        let wall = civil::civil_to_epoch_millis(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        );
        wall - self.offset_millis.unwrap_or(default_offset_millis)
    }
}

/// Outcome of a scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The text at the cursor spelled a date/time literal. The cursor has
    /// advanced past the `consumed` characters.
    Match {
        value: RecognizedDateTime,
        consumed: usize,
    },
    /// No recognized spelling. The cursor is unchanged and no field state is
    /// carried over.
    NoMatch,
}

impl ScanOutcome {
    /// Returns the recognized value, if any.
    pub fn value(&self) -> Option<RecognizedDateTime> {
        match self {
            ScanOutcome::Match { value, .. } => Some(*value),
            ScanOutcome::NoMatch => None,
        }
    }

    /// Returns true for `NoMatch`.
    pub fn is_no_match(&self) -> bool {
        matches!(self, ScanOutcome::NoMatch)
    }
}

// =============================================================================
// CHARACTER CLASSES
// =============================================================================

#[inline]
fn is_year_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Month as two digits: `01`–`09`, `10`–`12`.
#[inline]
fn check_month(m0: char, m1: char) -> bool {
    match m0 {
        '0' => ('1'..='9').contains(&m1),
        '1' => matches!(m1, '0' | '1' | '2'),
        _ => false,
    }
}

/// Day-of-month as two digits: `01`–`09`, `10`–`29`, `30`–`31`.
///
/// No month-length or leap-year awareness; `31` passes for every month.
#[inline]
fn check_day(d0: char, d1: char) -> bool {
    match d0 {
        '0' => ('1'..='9').contains(&d1),
        '1' | '2' => d1.is_ascii_digit(),
        '3' => matches!(d1, '0' | '1'),
        _ => false,
    }
}

/// Hour as two digits: `00`–`19`, `20`–`24`. `24` is accepted.
#[inline]
fn check_hour(h0: char, h1: char) -> bool {
    match h0 {
        '0' | '1' => h1.is_ascii_digit(),
        '2' => ('0'..='4').contains(&h1),
        _ => false,
    }
}

/// Minute or second as two digits: `00`–`59` plus the lone `60`.
#[inline]
fn check_sexagesimal(x0: char, x1: char) -> bool {
    match x0 {
        '0'..='5' => x1.is_ascii_digit(),
        '6' => x1 == '0',
        _ => false,
    }
}

fn check_date(
    y0: char,
    y1: char,
    y2: char,
    y3: char,
    m0: char,
    m1: char,
    d0: char,
    d1: char,
) -> bool {
    is_year_digit(y0)
        && is_year_digit(y1)
        && is_year_digit(y2)
        && is_year_digit(y3)
        && check_month(m0, m1)
        && check_day(d0, d1)
}

fn check_time(h0: char, h1: char, m0: char, m1: char, s0: char, s1: char) -> bool {
    check_hour(h0, h1) && check_sexagesimal(m0, m1) && check_sexagesimal(s0, s1)
}

#[inline]
fn digit(c: char) -> u32 {
    c as u32 - '0' as u32
}

#[inline]
fn num2(c0: char, c1: char) -> u32 {
    digit(c0) * 10 + digit(c1)
}

#[inline]
fn num4(c0: char, c1: char, c2: char, c3: char) -> i32 {
    (digit(c0) * 1000 + digit(c1) * 100 + digit(c2) * 10 + digit(c3)) as i32
}

/// Offset milliseconds for a `±HH` + `mm` spelling.
#[inline]
fn zone_offset_millis(sign: char, h0: char, h1: char, m0: char, m1: char) -> i64 {
    let magnitude = i64::from(num2(h0, h1)) * civil::MILLIS_PER_HOUR
        + i64::from(num2(m0, m1)) * civil::MILLIS_PER_MINUTE;
    if sign == '-' { -magnitude } else { magnitude }
}

// =============================================================================
// SCANNER
// =============================================================================

/// Single-pass scanner over one input string.
///
/// Positions are character indices (so the CJK markers count as one), with
/// [`EOI`] standing in for anything past the end. One scanner serves one
/// parse attempt; construct a fresh one per input.
#[derive(Debug, Clone)]
pub struct DateTimeScanner {
    chars: Vec<char>,
    len: usize,
    bp: usize,
    ch: char,
    default_offset_millis: i64,
}

impl DateTimeScanner {
    /// Creates a scanner with a UTC ambient zone.
    pub fn new(text: &str) -> Self {
        Self::with_default_offset(text, 0)
    }

    /// Creates a scanner whose zoneless literals resolve against the given
    /// UTC offset (milliseconds).
    pub fn with_default_offset(text: &str, default_offset_millis: i64) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut scanner = Self {
            chars,
            len,
            bp: 0,
            ch: EOI,
            default_offset_millis,
        };
        scanner.ch = scanner.char_at(0);
        if scanner.ch == BOM {
            scanner.next();
        }
        scanner
    }

    /// Ambient UTC offset applied to zoneless literals, in milliseconds.
    pub fn default_offset_millis(&self) -> i64 {
        self.default_offset_millis
    }

    /// Current cursor position (character index).
    pub fn position(&self) -> usize {
        self.bp
    }

    /// Character at the cursor, or [`EOI`] when exhausted.
    pub fn current(&self) -> char {
        self.ch
    }

    /// Advances the cursor one character and returns the new current
    /// character. Safe to call past end of input; keeps returning [`EOI`].
    pub fn next(&mut self) -> char {
        self.bp = self.bp.saturating_add(1);
        self.ch = self.char_at(self.bp);
        self.ch
    }

    /// Character at an absolute index, or [`EOI`] when out of range. Does not
    /// move the cursor.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        if index >= self.len { EOI } else { self.chars[index] }
    }

    /// The literal slice `[offset, offset + count)`.
    ///
    /// # Panics
    ///
    /// Panics when the range leaves the buffer — that is a caller bug, not a
    /// malformed-input condition.
    pub fn substring(&self, offset: usize, count: usize) -> String {
        assert!(
            offset + count <= self.len,
            "substring [{offset}, {}) out of bounds (len {})",
            offset + count,
            self.len,
        );
        self.chars[offset..offset + count].iter().collect()
    }

    /// Attempts to recognize a date/time literal at the cursor.
    ///
    /// `strict` limits recognition to the tight ISO-8601-like shapes;
    /// lenient mode additionally accepts `/Date(millis+zone)/`, the compact
    /// fixed-width forms, and a space in place of the `T` separator.
    pub fn scan_datetime_if_match(&mut self, strict: bool) -> ScanOutcome {
        let rest = self.len.saturating_sub(self.bp);
        if rest < 8 {
            return ScanOutcome::NoMatch;
        }

        let c0 = self.char_at(self.bp);
        let c1 = self.char_at(self.bp + 1);
        let c2 = self.char_at(self.bp + 2);
        let c3 = self.char_at(self.bp + 3);
        let c4 = self.char_at(self.bp + 4);
        let c5 = self.char_at(self.bp + 5);
        let c6 = self.char_at(self.bp + 6);
        let c7 = self.char_at(self.bp + 7);

        // --- legacy bracketed epoch: /Date(1242357713797+0800)/ ---
        if !strict && rest > 13 {
            let c_r0 = self.char_at(self.bp + rest - 1);
            let c_r1 = self.char_at(self.bp + rest - 2);
            if c0 == '/'
                && c1 == 'D'
                && c2 == 'a'
                && c3 == 't'
                && c4 == 'e'
                && c5 == '('
                && c_r0 == '/'
                && c_r1 == ')'
            {
                let mut plus_index = None;
                for i in 6..rest {
                    let c = self.char_at(self.bp + i);
                    if c == '+' {
                        plus_index = Some(i);
                    } else if !c.is_ascii_digit() {
                        break;
                    }
                }
                let Some(plus_index) = plus_index else {
                    return ScanOutcome::NoMatch;
                };
                let number_text = self.substring(self.bp + 6, plus_index - 6);
                let Ok(epoch) = number_text.parse::<i64>() else {
                    return ScanOutcome::NoMatch;
                };
                // the trailing +zone is carried by the epoch value already;
                // fields are the ambient-zone reading of that instant
                let (year, month, day, hour, minute, second, millisecond) =
                    civil::epoch_millis_to_civil(epoch + self.default_offset_millis);
                let value = RecognizedDateTime {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    millisecond,
                    offset_millis: None,
                };
                return self.matched(value, rest);
            }
        }

        // --- compact fixed-width forms (lenient only) ---
        let c10 = self.char_at(self.bp + 10);
        if rest == 8
            || rest == 14
            || (rest == 16 && (c10 == 'T' || c10 == ' '))
            || (rest == 17 && c6 != '-')
        {
            if strict {
                return ScanOutcome::NoMatch;
            }
            return self.scan_compact(rest, c0, c1, c2, c3, c4, c5, c6, c7);
        }

        if rest < 9 {
            return ScanOutcome::NoMatch;
        }

        // --- separator-detected date ---
        let c8 = self.char_at(self.bp + 8);
        let c9 = self.char_at(self.bp + 9);
        let mut date_len = 10;
        let (y0, y1, y2, y3, m0, m1, d0, d1);
        if (c4 == '-' && c7 == '-') // yyyy-MM-dd
            || (c4 == '/' && c7 == '/') // yyyy/MM/dd
        {
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = c5;
            m1 = c6;
            if c9 == ' ' {
                d0 = '0';
                d1 = c8;
                date_len = 9;
            } else {
                d0 = c8;
                d1 = c9;
            }
        } else if c4 == '-' && c6 == '-' {
            // yyyy-M-dd
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = '0';
            m1 = c5;
            if c8 == ' ' {
                d0 = '0';
                d1 = c7;
                date_len = 8;
            } else {
                d0 = c7;
                d1 = c8;
                date_len = 9;
            }
        } else if (c2 == '.' && c5 == '.') // dd.MM.yyyy
            || (c2 == '-' && c5 == '-') // dd-MM-yyyy
        {
            d0 = c0;
            d1 = c1;
            m0 = c3;
            m1 = c4;
            y0 = c6;
            y1 = c7;
            y2 = c8;
            y3 = c9;
        } else if c8 == 'T' {
            // yyyyMMdd followed by a time
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = c4;
            m1 = c5;
            d0 = c6;
            d1 = c7;
            date_len = 8;
        } else if c4 == '年' || c4 == '년' {
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            if c7 == '月' || c7 == '월' {
                m0 = c5;
                m1 = c6;
                if c9 == '日' || c9 == '일' {
                    d0 = '0';
                    d1 = c8;
                } else if self.char_at(self.bp + 10) == '日' || self.char_at(self.bp + 10) == '일'
                {
                    d0 = c8;
                    d1 = c9;
                    date_len = 11;
                } else {
                    return ScanOutcome::NoMatch;
                }
            } else if c6 == '月' || c6 == '월' {
                m0 = '0';
                m1 = c5;
                if c8 == '日' || c8 == '일' {
                    d0 = '0';
                    d1 = c7;
                } else if c9 == '日' || c9 == '일' {
                    d0 = c7;
                    d1 = c8;
                } else {
                    return ScanOutcome::NoMatch;
                }
            } else {
                return ScanOutcome::NoMatch;
            }
        } else {
            return ScanOutcome::NoMatch;
        }

        if !check_date(y0, y1, y2, y3, m0, m1, d0, d1) {
            return ScanOutcome::NoMatch;
        }
        let year = num4(y0, y1, y2, y3);
        let month = num2(m0, m1);
        let day = num2(d0, d1);

        let t = self.char_at(self.bp + date_len);
        if t == 'T' && rest == 16 && date_len == 8 && self.char_at(self.bp + 15) == 'Z' {
            // yyyyMMddTHHmmssZ
            let h0 = self.char_at(self.bp + date_len + 1);
            let h1 = self.char_at(self.bp + date_len + 2);
            let mi0 = self.char_at(self.bp + date_len + 3);
            let mi1 = self.char_at(self.bp + date_len + 4);
            let s0 = self.char_at(self.bp + date_len + 5);
            let s1 = self.char_at(self.bp + date_len + 6);
            if !check_time(h0, h1, mi0, mi1, s0, s1) {
                return ScanOutcome::NoMatch;
            }
            let value = RecognizedDateTime {
                year,
                month,
                day,
                hour: num2(h0, h1),
                minute: num2(mi0, mi1),
                second: num2(s0, s1),
                millisecond: 0,
                offset_millis: Some(0),
            };
            return self.matched(value, 16);
        } else if t == 'T' || (t == ' ' && !strict) {
            // "0000-00-00T00:00:00".len()
            if rest < date_len + 9 {
                return ScanOutcome::NoMatch;
            }
        } else if t == '"' || t == EOI || t == '日' || t == '일' {
            let value = RecognizedDateTime {
                year,
                month,
                day,
                hour: 0,
                minute: 0,
                second: 0,
                millisecond: 0,
                offset_millis: None,
            };
            return self.matched(value, date_len);
        } else if t == '+' || t == '-' {
            // date plus a bare offset; only the degenerate ±HH:00 shape
            if self.len == date_len + 6 {
                if self.char_at(self.bp + date_len + 3) != ':'
                    || self.char_at(self.bp + date_len + 4) != '0'
                    || self.char_at(self.bp + date_len + 5) != '0'
                {
                    return ScanOutcome::NoMatch;
                }
                let h0 = self.char_at(self.bp + date_len + 1);
                let h1 = self.char_at(self.bp + date_len + 2);
                if !h0.is_ascii_digit() || !h1.is_ascii_digit() {
                    return ScanOutcome::NoMatch;
                }
                let value = RecognizedDateTime {
                    year,
                    month,
                    day,
                    hour: 0,
                    minute: 0,
                    second: 0,
                    millisecond: 0,
                    offset_millis: Some(zone_offset_millis(t, h0, h1, '0', '0')),
                };
                return self.matched(value, date_len + 6);
            }
            return ScanOutcome::NoMatch;
        } else {
            return ScanOutcome::NoMatch;
        }

        // --- full HH:mm:ss time, optional fraction, optional zone ---
        if self.char_at(self.bp + date_len + 3) != ':' {
            return ScanOutcome::NoMatch;
        }
        if self.char_at(self.bp + date_len + 6) != ':' {
            return ScanOutcome::NoMatch;
        }
        let h0 = self.char_at(self.bp + date_len + 1);
        let h1 = self.char_at(self.bp + date_len + 2);
        let mi0 = self.char_at(self.bp + date_len + 4);
        let mi1 = self.char_at(self.bp + date_len + 5);
        let s0 = self.char_at(self.bp + date_len + 7);
        let s1 = self.char_at(self.bp + date_len + 8);
        if !check_time(h0, h1, mi0, mi1, s0, s1) {
            return ScanOutcome::NoMatch;
        }
        let hour = num2(h0, h1);
        let minute = num2(mi0, mi1);
        let second = num2(s0, s1);

        let dot = self.char_at(self.bp + date_len + 9);
        // no fraction leaves the running length one short of the "." slot
        let mut millis_len: isize = -1;
        let mut millisecond = 0;
        if dot == '.' {
            if rest < date_len + 11 {
                return ScanOutcome::NoMatch;
            }
            let f0 = self.char_at(self.bp + date_len + 10);
            if !f0.is_ascii_digit() {
                return ScanOutcome::NoMatch;
            }
            millisecond = digit(f0);
            millis_len = 1;
            if rest > date_len + 11 {
                let f1 = self.char_at(self.bp + date_len + 11);
                if f1.is_ascii_digit() {
                    millisecond = millisecond * 10 + digit(f1);
                    millis_len = 2;
                }
            }
            if millis_len == 2 {
                let f2 = self.char_at(self.bp + date_len + 12);
                if f2.is_ascii_digit() {
                    millisecond = millisecond * 10 + digit(f2);
                    millis_len = 3;
                }
            }
        }

        let at = |delta: isize| -> char {
            self.char_at(((self.bp + date_len + 10) as isize + delta) as usize)
        };
        let mut zone_len: isize = 0;
        let mut zone_flag = at(millis_len);
        if zone_flag == ' ' {
            millis_len += 1;
            zone_flag = at(millis_len);
        }
        let mut offset_millis = None;
        if zone_flag == '+' || zone_flag == '-' {
            let t0 = at(millis_len + 1);
            if !('0'..='1').contains(&t0) {
                return ScanOutcome::NoMatch;
            }
            let t1 = at(millis_len + 2);
            if !t1.is_ascii_digit() {
                return ScanOutcome::NoMatch;
            }
            let t2 = at(millis_len + 3);
            let t3;
            let t4;
            if t2 == ':' {
                t3 = at(millis_len + 4);
                t4 = at(millis_len + 5);
                if t3 == '4' && t4 == '5' {
                    // the only real-world :45 zones:
                    // Pacific/Chatham  => +12:45 (+13:45 DST)
                    // Asia/Kathmandu   => +05:45
                    // Australia/Eucla  => +08:45
                    if t0 == '1' && (t1 == '2' || t1 == '3') {
                    } else if t0 == '0' && (t1 == '5' || t1 == '8') {
                    } else {
                        return ScanOutcome::NoMatch;
                    }
                } else {
                    if t3 != '0' && t3 != '3' {
                        return ScanOutcome::NoMatch;
                    }
                    if t4 != '0' {
                        return ScanOutcome::NoMatch;
                    }
                }
                zone_len = 6;
            } else if t2 == '0' {
                t3 = at(millis_len + 4);
                if t3 != '0' && t3 != '3' {
                    return ScanOutcome::NoMatch;
                }
                t4 = '0';
                zone_len = 5;
            } else if t2 == '3' && at(millis_len + 4) == '0' {
                t3 = '3';
                t4 = '0';
                zone_len = 5;
            } else if t2 == '4' && at(millis_len + 4) == '5' {
                t3 = '4';
                t4 = '5';
                zone_len = 5;
            } else {
                // hours-only ±HH
                t3 = '0';
                t4 = '0';
                zone_len = 3;
            }
            offset_millis = Some(zone_offset_millis(zone_flag, t0, t1, t3, t4));
        } else if zone_flag == 'Z' {
            zone_len = 1;
            offset_millis = Some(0);
        }

        let consumed = ((date_len + 10) as isize + millis_len + zone_len) as usize;
        let end = self.char_at(self.bp + consumed);
        if end != EOI && end != '"' {
            return ScanOutcome::NoMatch;
        }
        let value = RecognizedDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            offset_millis,
        };
        self.matched(value, consumed)
    }

    /// Compact fixed-width forms: `yyyyMMdd`, `yyyyMMddHHmmss[SSS]` and the
    /// 16/17-character separator variants with minute-precision times.
    #[allow(clippy::too_many_arguments)]
    fn scan_compact(
        &mut self,
        rest: usize,
        c0: char,
        c1: char,
        c2: char,
        c3: char,
        c4: char,
        c5: char,
        c6: char,
        c7: char,
    ) -> ScanOutcome {
        let c8 = self.char_at(self.bp + 8);
        let c_47 = c4 == '-' && c7 == '-';
        let sep16 = c_47 && rest == 16;
        let sep17 = c_47 && rest == 17;
        let (y0, y1, y2, y3, m0, m1, d0, d1);
        if sep17 || sep16 {
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = c5;
            m1 = c6;
            d0 = c8;
            d1 = self.char_at(self.bp + 9);
        } else if c4 == '-' && c6 == '-' {
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = '0';
            m1 = c5;
            d0 = '0';
            d1 = c7;
        } else {
            y0 = c0;
            y1 = c1;
            y2 = c2;
            y3 = c3;
            m0 = c4;
            m1 = c5;
            d0 = c6;
            d1 = c7;
        }
        if !check_date(y0, y1, y2, y3, m0, m1, d0, d1) {
            return ScanOutcome::NoMatch;
        }

        let mut hour = 0;
        let mut minute = 0;
        let mut second = 0;
        let mut millisecond = 0;
        if rest != 8 {
            let c9 = self.char_at(self.bp + 9);
            let c10 = self.char_at(self.bp + 10);
            let c11 = self.char_at(self.bp + 11);
            let c12 = self.char_at(self.bp + 12);
            let c13 = self.char_at(self.bp + 13);
            let (h0, h1, mi0, mi1, s0, s1);
            if (sep17 && c10 == 'T' && c13 == ':' && self.char_at(self.bp + 16) == 'Z')
                || (sep16 && (c10 == ' ' || c10 == 'T') && c13 == ':')
            {
                h0 = c11;
                h1 = c12;
                mi0 = self.char_at(self.bp + 14);
                mi1 = self.char_at(self.bp + 15);
                s0 = '0';
                s1 = '0';
            } else {
                h0 = c8;
                h1 = c9;
                mi0 = c10;
                mi1 = c11;
                s0 = c12;
                s1 = c13;
            }
            if !check_time(h0, h1, mi0, mi1, s0, s1) {
                return ScanOutcome::NoMatch;
            }
            if rest == 17 && !sep17 {
                let f0 = self.char_at(self.bp + 14);
                let f1 = self.char_at(self.bp + 15);
                let f2 = self.char_at(self.bp + 16);
                if !f0.is_ascii_digit() || !f1.is_ascii_digit() || !f2.is_ascii_digit() {
                    return ScanOutcome::NoMatch;
                }
                millisecond = digit(f0) * 100 + digit(f1) * 10 + digit(f2);
            }
            hour = num2(h0, h1);
            minute = num2(mi0, mi1);
            second = num2(s0, s1);
        }

        let value = RecognizedDateTime {
            year: num4(y0, y1, y2, y3),
            month: num2(m0, m1),
            day: num2(d0, d1),
            hour,
            minute,
            second,
            millisecond,
            offset_millis: None,
        };
        self.matched(value, rest)
    }

    fn matched(&mut self, value: RecognizedDateTime, consumed: usize) -> ScanOutcome {
        self.bp += consumed;
        self.ch = self.char_at(self.bp);
        ScanOutcome::Match { value, consumed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scan(text: &str, strict: bool) -> ScanOutcome {
        DateTimeScanner::new(text).scan_datetime_if_match(strict)
    }

    fn fields(text: &str, strict: bool) -> RecognizedDateTime {
        scan(text, strict)
            .value()
            .unwrap_or_else(|| panic!("expected a match for {text:?}"))
    }

    #[test]
    fn test_date_only() {
        for text in ["2021-07-01", "2021/07/01"] {
            let value = fields(text, true);
            assert_eq!((value.year, value.month, value.day), (2021, 7, 1));
            assert_eq!((value.hour, value.minute, value.second), (0, 0, 0));
            assert_eq!(value.offset_millis, None);
        }
    }

    #[test]
    fn test_single_digit_month() {
        let value = fields("2021-7-01", true);
        assert_eq!((value.year, value.month, value.day), (2021, 7, 1));
    }

    #[test]
    fn test_day_month_year_order() {
        for text in ["24.12.2021", "24-12-2021"] {
            let value = fields(text, true);
            assert_eq!((value.year, value.month, value.day), (2021, 12, 24));
        }
    }

    #[test]
    fn test_cjk_markers() {
        let value = fields("2021年12月24日", true);
        assert_eq!((value.year, value.month, value.day), (2021, 12, 24));
        let value = fields("2021년1월5일", true);
        assert_eq!((value.year, value.month, value.day), (2021, 1, 5));
    }

    #[test]
    fn test_full_datetime_utc() {
        let value = fields("2018-05-31T19:13:42Z", true);
        assert_eq!((value.year, value.month, value.day), (2018, 5, 31));
        assert_eq!((value.hour, value.minute, value.second), (19, 13, 42));
        assert_eq!(value.millisecond, 0);
        assert_eq!(value.offset_millis, Some(0));
    }

    #[test]
    fn test_fraction_is_equivalent_to_zero_millis() {
        let a = fields("2018-05-31T19:13:42Z", true);
        let b = fields("2018-05-31T19:13:42.000Z", true);
        assert_eq!(a.epoch_millis(0), b.epoch_millis(0));
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fields("2018-05-31T19:13:42.1Z", true).millisecond, 1);
        assert_eq!(fields("2018-05-31T19:13:42.12Z", true).millisecond, 12);
        assert_eq!(fields("2018-05-31T19:13:42.123Z", true).millisecond, 123);
    }

    #[test]
    fn test_numeric_offset() {
        let value = fields("2018-05-31T19:13:42+07:00", true);
        assert_eq!(value.offset_millis, Some(7 * 3_600_000));
        let with_millis = fields("2018-05-31T19:13:42.000+07:00", true);
        assert_eq!(value.epoch_millis(0), with_millis.epoch_millis(0));
        // seven hours behind the same wall reading taken as UTC
        let utc = fields("2018-05-31T19:13:42Z", true);
        assert_eq!(value.epoch_millis(0), utc.epoch_millis(0) - 7 * 3_600_000);
    }

    #[test]
    fn test_negative_offset() {
        let value = fields("2018-05-31T19:13:42-08:00", true);
        assert_eq!(value.offset_millis, Some(-8 * 3_600_000));
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(
            fields("2018-05-31T19:13:42+0800", true).offset_millis,
            Some(8 * 3_600_000)
        );
        assert_eq!(
            fields("2018-05-31T19:13:42+0830", true).offset_millis,
            Some(8 * 3_600_000 + 30 * 60_000)
        );
        assert_eq!(
            fields("2018-05-31T19:13:42+08", true).offset_millis,
            Some(8 * 3_600_000)
        );
    }

    #[test]
    fn test_quarter_hour_offsets() {
        // the four known :45 zones pass
        for (text, hours) in [
            ("2018-05-31T19:13:42+12:45", 12),
            ("2018-05-31T19:13:42+13:45", 13),
            ("2018-05-31T19:13:42+05:45", 5),
            ("2018-05-31T19:13:42+08:45", 8),
        ] {
            assert_eq!(
                fields(text, true).offset_millis,
                Some(hours * 3_600_000 + 45 * 60_000)
            );
        }
        // anything else with :45 is rejected outright
        assert!(scan("2018-05-31T19:13:42+04:45", true).is_no_match());
        assert!(scan("2018-05-31T19:13:42+11:45", true).is_no_match());
    }

    #[test]
    fn test_offset_minutes_must_be_round() {
        assert!(scan("2018-05-31T19:13:42+07:15", true).is_no_match());
        assert!(scan("2018-05-31T19:13:42+07:31", true).is_no_match());
    }

    #[test]
    fn test_date_with_degenerate_offset() {
        let value = fields("2018-05-31+07:00", true);
        assert_eq!((value.year, value.month, value.day), (2018, 5, 31));
        assert_eq!(value.offset_millis, Some(7 * 3_600_000));
        assert!(scan("2018-05-31+07:30", true).is_no_match());
    }

    #[test]
    fn test_basic_format_with_zulu() {
        let value = fields("20180531T191342Z", true);
        assert_eq!((value.year, value.month, value.day), (2018, 5, 31));
        assert_eq!((value.hour, value.minute, value.second), (19, 13, 42));
        assert_eq!(value.offset_millis, Some(0));
    }

    #[test]
    fn test_space_separator_is_lenient_only() {
        assert!(scan("2021-07-01 12:01:00", true).is_no_match());
        let value = fields("2021-07-01 12:01:00", false);
        assert_eq!((value.hour, value.minute, value.second), (12, 1, 0));
    }

    #[test]
    fn test_compact_forms_are_lenient_only() {
        assert!(scan("20210701", true).is_no_match());
        let value = fields("20210701", false);
        assert_eq!((value.year, value.month, value.day), (2021, 7, 1));

        assert!(scan("20210701120100", true).is_no_match());
        let value = fields("20210701120100", false);
        assert_eq!((value.hour, value.minute, value.second), (12, 1, 0));

        let value = fields("20210701120100123", false);
        assert_eq!(value.millisecond, 123);
    }

    #[test]
    fn test_minute_precision_lenient_forms() {
        let value = fields("2021-07-01T12:01", false);
        assert_eq!((value.hour, value.minute, value.second), (12, 1, 0));
        let value = fields("2021-07-01 12:01", false);
        assert_eq!((value.hour, value.minute, value.second), (12, 1, 0));
    }

    #[test]
    fn test_compact_basic_datetime_is_rejected() {
        // 15 characters is below the minimum for a T-separated time
        assert!(scan("20040605T183008", false).is_no_match());
    }

    #[test]
    fn test_legacy_bracketed_epoch() {
        let value = fields("/Date(1242357713797+0800)/", false);
        assert_eq!(value.epoch_millis(0), 1_242_357_713_797);
        // strict mode never looks at the legacy form
        assert!(scan("/Date(1242357713797+0800)/", true).is_no_match());
        // the + is load-bearing
        assert!(scan("/Date(1242357713797)/", false).is_no_match());
    }

    #[test]
    fn test_character_class_quirks_accepted() {
        // not calendar-valid, but inside the accepted character classes
        let value = fields("2021-02-31", true);
        assert_eq!(value.day, 31);
        let value = fields("2021-07-01T24:00:00", true);
        assert_eq!(value.hour, 24);
        let value = fields("2021-07-01T12:60:60", true);
        assert_eq!((value.minute, value.second), (60, 60));
    }

    #[test]
    fn test_character_class_rejections() {
        assert!(scan("2021-13-01", true).is_no_match());
        assert!(scan("2021-00-01", true).is_no_match());
        assert!(scan("2021-07-00", true).is_no_match());
        assert!(scan("2021-07-32", true).is_no_match());
        assert!(scan("2021-07-01T25:00:00", true).is_no_match());
        assert!(scan("2021-07-01T12:61:00", true).is_no_match());
    }

    #[test]
    fn test_structural_mismatches() {
        assert!(scan("2021_07_01", true).is_no_match());
        assert!(scan("2021-07", true).is_no_match());
        assert!(scan("no date here", true).is_no_match());
        assert!(scan("2021-07-01T12:01:00x", true).is_no_match());
        assert!(scan("20210701 12:01:00", false).is_no_match());
    }

    #[test]
    fn test_trailing_quote_terminates() {
        let value = fields("2021-07-01\"", true);
        assert_eq!((value.year, value.month, value.day), (2021, 7, 1));
    }

    #[test]
    fn test_consumed_and_cursor() {
        let mut scanner = DateTimeScanner::new("2018-05-31T19:13:42.123+07:00");
        let ScanOutcome::Match { consumed, .. } = scanner.scan_datetime_if_match(true) else {
            panic!("expected a match");
        };
        assert_eq!(consumed, 29);
        assert_eq!(scanner.position(), 29);
        assert_eq!(scanner.current(), EOI);

        let mut scanner = DateTimeScanner::new("2021-07-01");
        assert!(scanner.scan_datetime_if_match(true).value().is_some());
        assert_eq!(scanner.position(), 10);
    }

    #[test]
    fn test_no_match_leaves_cursor() {
        let mut scanner = DateTimeScanner::new("not a date, honestly");
        assert!(scanner.scan_datetime_if_match(false).is_no_match());
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_bom_is_skipped() {
        let mut scanner = DateTimeScanner::new("\u{feff}2021-07-01");
        let outcome = scanner.scan_datetime_if_match(true);
        let value = outcome.value().expect("BOM then date should match");
        assert_eq!((value.year, value.month, value.day), (2021, 7, 1));
    }

    #[test]
    fn test_next_past_end() {
        let mut scanner = DateTimeScanner::new("ab");
        assert_eq!(scanner.current(), 'a');
        assert_eq!(scanner.next(), 'b');
        assert_eq!(scanner.next(), EOI);
        assert_eq!(scanner.next(), EOI);
    }

    #[test]
    fn test_char_at_is_pure() {
        let scanner = DateTimeScanner::new("2021");
        assert_eq!(scanner.char_at(0), '2');
        assert_eq!(scanner.char_at(3), '1');
        assert_eq!(scanner.char_at(4), EOI);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_substring_out_of_bounds_panics() {
        DateTimeScanner::new("2021").substring(2, 5);
    }

    #[test]
    fn test_default_offset_applies_to_zoneless_literals() {
        let utc = fields("2021-07-01T08:00:00", true).epoch_millis(0);
        let mut scanner = DateTimeScanner::with_default_offset("2021-07-01T08:00:00", 3_600_000);
        let value = scanner.scan_datetime_if_match(true).value().unwrap();
        assert_eq!(value.epoch_millis(scanner.default_offset_millis()), utc - 3_600_000);
        // an explicit zone is not overridden by the ambient default
        let zoned = fields("2021-07-01T08:00:00Z", true);
        assert_eq!(zoned.epoch_millis(3_600_000), utc);
    }

    proptest! {
        #[test]
        fn prop_character_class_valid_dates_accepted(
            year in 1..=9999i32,
            m0 in 0..=1u32,
            d0 in 0..=3u32,
            m1 in 0..=9u32,
            d1 in 0..=9u32,
        ) {
            // constrain the raw digits to the accepted classes
            let month_ok = (m0 == 0 && m1 >= 1) || (m0 == 1 && m1 <= 2);
            let day_ok = (d0 == 0 && d1 >= 1) || d0 == 1 || d0 == 2 || (d0 == 3 && d1 <= 1);
            prop_assume!(month_ok && day_ok);
            let text = format!("{year:04}-{m0}{m1}-{d0}{d1}");
            let value = fields(&text, true);
            prop_assert_eq!(value.year, year);
            prop_assert_eq!(value.month, m0 * 10 + m1);
            prop_assert_eq!(value.day, d0 * 10 + d1);
            prop_assert_eq!((value.hour, value.minute, value.second, value.millisecond), (0, 0, 0, 0));
        }

        #[test]
        fn prop_independent_scanners_agree(text in "\\PC{0,40}") {
            let a = DateTimeScanner::new(&text).scan_datetime_if_match(false);
            let b = DateTimeScanner::new(&text).scan_datetime_if_match(false);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_scan_never_panics(text in "\\PC{0,64}", strict in any::<bool>()) {
            let _ = DateTimeScanner::new(&text).scan_datetime_if_match(strict);
        }
    }
}
