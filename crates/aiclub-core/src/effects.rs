//! Decorative text effects for the hero. Each one is a pure function of the
//! time since the page was shown, so they need no frame requests of their own.

use std::time::Duration;

/// Cycles through a list of words at a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct RotatingText {
    words: &'static [&'static str],
    interval: Duration,
}

impl RotatingText {
    pub const fn new(words: &'static [&'static str], interval: Duration) -> Self {
        Self { words, interval }
    }

    pub fn index_at(&self, elapsed: Duration) -> usize {
        if self.words.is_empty() || self.interval.is_zero() {
            return 0;
        }
        ((elapsed.as_millis() / self.interval.as_millis()) % self.words.len() as u128) as usize
    }

    pub fn word_at(&self, elapsed: Duration) -> &'static str {
        self.words.get(self.index_at(elapsed)).copied().unwrap_or_default()
    }
}

/// Types a line, holds it, erases it, then moves on to the next line forever.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    lines: &'static [&'static str],
    per_char: Duration,
    hold: Duration,
    erase_per_char: Duration,
}

impl Typewriter {
    pub const fn new(lines: &'static [&'static str], per_char: Duration, hold: Duration) -> Self {
        Self {
            lines,
            per_char,
            hold,
            erase_per_char: per_char,
        }
    }

    pub const fn erasing_at(mut self, erase_per_char: Duration) -> Self {
        self.erase_per_char = erase_per_char;
        self
    }

    fn line_cycle_ms(&self, line: &str) -> u128 {
        let chars = line.chars().count() as u128;
        chars * self.per_char.as_millis()
            + self.hold.as_millis()
            + chars * self.erase_per_char.as_millis()
    }

    /// Visible prefix of the current line.
    pub fn text_at(&self, elapsed: Duration) -> &'static str {
        let total: u128 = self.lines.iter().map(|line| self.line_cycle_ms(line)).sum();
        if total == 0 {
            return self.lines.first().copied().unwrap_or_default();
        }

        let mut phase = elapsed.as_millis() % total;
        for line in self.lines {
            let cycle = self.line_cycle_ms(line);
            if phase >= cycle {
                phase -= cycle;
                continue;
            }
            let chars = line.chars().count() as u128;
            let typing = chars * self.per_char.as_millis();
            let visible = if phase < typing {
                phase / self.per_char.as_millis().max(1)
            } else if phase < typing + self.hold.as_millis() {
                chars
            } else {
                let erased = (phase - typing - self.hold.as_millis())
                    / self.erase_per_char.as_millis().max(1);
                chars.saturating_sub(erased + 1)
            };
            return prefix(line, visible as usize);
        }
        ""
    }
}

fn prefix(line: &'static str, chars: usize) -> &'static str {
    match line.char_indices().nth(chars) {
        Some((index, _)) => &line[..index],
        None => line,
    }
}

/// Square-wave blink with the given period; visible for the first half.
pub fn blink_visible(elapsed: Duration, period: Duration) -> bool {
    let period = period.as_millis().max(1);
    elapsed.as_millis() % period < period / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["Innovate", "Learn", "Build", "Grow"];

    #[test]
    fn test_rotating_text_cycles() {
        let rotating = RotatingText::new(WORDS, Duration::from_secs(2));
        assert_eq!(rotating.word_at(Duration::ZERO), "Innovate");
        assert_eq!(rotating.word_at(Duration::from_millis(1999)), "Innovate");
        assert_eq!(rotating.word_at(Duration::from_secs(2)), "Learn");
        assert_eq!(rotating.word_at(Duration::from_secs(6)), "Grow");
        assert_eq!(rotating.word_at(Duration::from_secs(8)), "Innovate");
    }

    #[test]
    fn test_rotating_text_empty() {
        let rotating = RotatingText::new(&[], Duration::from_secs(2));
        assert_eq!(rotating.word_at(Duration::from_secs(3)), "");
    }

    #[test]
    fn test_typewriter_types_holds_and_erases() {
        let typewriter = Typewriter::new(
            &["abc", "xy"],
            Duration::from_millis(100),
            Duration::from_millis(1000),
        );
        assert_eq!(typewriter.text_at(Duration::ZERO), "");
        assert_eq!(typewriter.text_at(Duration::from_millis(100)), "a");
        assert_eq!(typewriter.text_at(Duration::from_millis(250)), "ab");
        assert_eq!(typewriter.text_at(Duration::from_millis(300)), "abc");
        assert_eq!(typewriter.text_at(Duration::from_millis(1299)), "abc");
        assert_eq!(typewriter.text_at(Duration::from_millis(1300)), "ab");
        assert_eq!(typewriter.text_at(Duration::from_millis(1500)), "");
        // second line starts after 3*100 + 1000 + 3*100
        assert_eq!(typewriter.text_at(Duration::from_millis(1700)), "x");
        // whole sequence repeats
        assert_eq!(typewriter.text_at(Duration::from_millis(1600 + 1400 + 300)), "abc");
    }

    #[test]
    fn test_typewriter_respects_char_boundaries() {
        let typewriter = Typewriter::new(&["héllo"], Duration::from_millis(10), Duration::ZERO);
        assert_eq!(typewriter.text_at(Duration::from_millis(20)), "hé");
    }

    #[test]
    fn test_blink() {
        let period = Duration::from_secs(1);
        assert!(blink_visible(Duration::ZERO, period));
        assert!(!blink_visible(Duration::from_millis(600), period));
        assert!(blink_visible(Duration::from_millis(1100), period));
    }
}
