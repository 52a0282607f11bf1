// Spell-check run summary: counts and per-phase timings.

use std::io::{self, Write};
use std::time::Duration;

/// Time spent in each dictionary operation during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub load: Duration,
    pub check: Duration,
    pub size: Duration,
    pub unload: Duration,
}

impl Timings {
    pub fn total(&self) -> Duration {
        self.load + self.check + self.size + self.unload
    }
}

/// Summary printed at the end of a speller run.
#[derive(Debug, Clone, Default)]
pub struct SpellReport {
    pub misspelled: usize,
    pub dictionary_words: usize,
    pub text_words: usize,
    pub timings: Timings,
}

impl SpellReport {
    /// Write the summary block. Times are in seconds with two decimals.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let t = &self.timings;
        writeln!(out)?;
        writeln!(out, "WORDS MISSPELLED:     {}", self.misspelled)?;
        writeln!(out, "WORDS IN DICTIONARY:  {}", self.dictionary_words)?;
        writeln!(out, "WORDS IN TEXT:        {}", self.text_words)?;
        writeln!(out, "TIME IN load:         {:.2}", t.load.as_secs_f64())?;
        writeln!(out, "TIME IN check:        {:.2}", t.check.as_secs_f64())?;
        writeln!(out, "TIME IN size:         {:.2}", t.size.as_secs_f64())?;
        writeln!(out, "TIME IN unload:       {:.2}", t.unload.as_secs_f64())?;
        writeln!(out, "TIME IN TOTAL:        {:.2}", t.total().as_secs_f64())?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_phases() {
        let t = Timings {
            load: Duration::from_millis(250),
            check: Duration::from_millis(500),
            size: Duration::ZERO,
            unload: Duration::from_millis(250),
        };
        assert_eq!(t.total(), Duration::from_secs(1));
    }

    #[test]
    fn report_layout() {
        let report = SpellReport {
            misspelled: 2,
            dictionary_words: 143_091,
            text_words: 17,
            timings: Timings {
                load: Duration::from_millis(1_250),
                ..Timings::default()
            },
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "WORDS MISSPELLED:     2");
        assert_eq!(lines[2], "WORDS IN DICTIONARY:  143091");
        assert_eq!(lines[3], "WORDS IN TEXT:        17");
        assert_eq!(lines[4], "TIME IN load:         1.25");
        assert_eq!(lines[5], "TIME IN check:        0.00");
        assert_eq!(lines[8], "TIME IN TOTAL:        1.25");
    }
}
