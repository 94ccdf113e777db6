use std::io::{self, Write};

use super::config::{LineStyle, PlotColor};

/// Line-drawing pieces used for the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineGlyph {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Cross,
    /// `┤`
    TeeLeft,
    /// `├`
    TeeRight,
    /// `┬`
    TeeDown,
    /// `┴`
    TeeUp,
    Horizontal,
    Vertical,
}

impl LineGlyph {
    /// Character selecting this glyph in the DEC special graphics set.
    pub fn dec_char(self) -> char {
        match self {
            LineGlyph::TopLeft => 'l',
            LineGlyph::TopRight => 'k',
            LineGlyph::BottomLeft => 'm',
            LineGlyph::BottomRight => 'j',
            LineGlyph::Cross => 'n',
            LineGlyph::TeeLeft => 'u',
            LineGlyph::TeeRight => 't',
            LineGlyph::TeeDown => 'w',
            LineGlyph::TeeUp => 'v',
            LineGlyph::Horizontal => 'q',
            LineGlyph::Vertical => 'x',
        }
    }

    pub fn unicode_char(self) -> char {
        match self {
            LineGlyph::TopLeft => '┌',
            LineGlyph::TopRight => '┐',
            LineGlyph::BottomLeft => '└',
            LineGlyph::BottomRight => '┘',
            LineGlyph::Cross => '┼',
            LineGlyph::TeeLeft => '┤',
            LineGlyph::TeeRight => '├',
            LineGlyph::TeeDown => '┬',
            LineGlyph::TeeUp => '┴',
            LineGlyph::Horizontal => '─',
            LineGlyph::Vertical => '│',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Text(String),
    Line(LineGlyph),
}

/// A run of output drawn in one colour. `color: None` means no escape is
/// emitted and the run inherits whatever colour is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub color: Option<PlotColor>,
    pub glyph: Glyph,
}

/// A rendered chart, one entry per output line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    pub lines: Vec<Vec<Segment>>,
}

impl Chart {
    /// Writes the chart with SGR colour escapes. Every coloured segment is
    /// preceded by its escape and the output ends with a colour reset.
    pub fn write_ansi<W: Write>(&self, out: &mut W, style: LineStyle) -> io::Result<()> {
        for line in &self.lines {
            for segment in line {
                if let Some(color) = segment.color {
                    write!(out, "\x1b[{}m", color.sgr_code())?;
                }
                match (&segment.glyph, style) {
                    (Glyph::Text(text), _) => out.write_all(text.as_bytes())?,
                    (Glyph::Line(glyph), LineStyle::Vt100) => {
                        write!(out, "\x1b(0{}\x1b(B", glyph.dec_char())?
                    }
                    (Glyph::Line(glyph), LineStyle::Unicode) => {
                        write!(out, "{}", glyph.unicode_char())?
                    }
                }
            }
            out.write_all(b"\n")?;
        }
        write!(out, "\x1b[{}m", PlotColor::NoColor.sgr_code())
    }

    /// The chart with colours and escapes stripped, lines drawn in Unicode.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for segment in line {
                match &segment.glyph {
                    Glyph::Text(text) => out.push_str(text),
                    Glyph::Line(glyph) => out.push(glyph.unicode_char()),
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Builds one chart line, merging neighbouring uncoloured text.
#[derive(Debug, Default)]
pub(crate) struct LineBuilder {
    segments: Vec<Segment>,
}

impl LineBuilder {
    pub fn text(&mut self, color: Option<PlotColor>, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if color.is_none() {
            if let Some(Segment {
                color: None,
                glyph: Glyph::Text(previous),
            }) = self.segments.last_mut()
            {
                previous.push_str(&text);
                return self;
            }
        }
        self.segments.push(Segment {
            color,
            glyph: Glyph::Text(text),
        });
        self
    }

    pub fn line(&mut self, color: PlotColor, glyph: LineGlyph) -> &mut Self {
        self.segments.push(Segment {
            color: Some(color),
            glyph: Glyph::Line(glyph),
        });
        self
    }

    pub fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
