use anstyle::{AnsiColor, Color, Style};
use std::io::{self, Write};

const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const FAILURE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const LISTING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const HEADER: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const MENU: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
const BANNER: Style = HEADER.bold();

/// Цветной вывод диспетчера. При `color = false` escape-коды не пишутся.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.line(SUCCESS, text)
    }

    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        self.line(FAILURE, text)
    }

    pub fn listing(&mut self, text: &str) -> io::Result<()> {
        self.line(LISTING, text)
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        self.line(HEADER, text)
    }

    pub fn menu(&mut self, text: &str) -> io::Result<()> {
        self.line(MENU, text)
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        self.line(BANNER, text)
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    // Приглашение без перевода строки
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}{}{}", style.render(), text, style.render_reset())
        } else {
            writeln!(self.out, "{text}")
        }
    }
}
