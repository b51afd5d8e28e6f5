use crate::domain::model::{Analysis, BatchSummary, Reaction};
use std::io::{self, Write};
use std::time::Duration;

const STAGE_WIDTH: usize = 40;
const STAGE_HEIGHT: usize = 8;

pub const TITLE: &str = "🧠 Sentiment Analysis App";
pub const SUBTITLE: &str = "Analyze the sentiment of your tweet instantly!";
pub const ABOUT: &str =
    "This app uses a machine learning model trained on tweets to classify sentiment as Positive or Negative.";
pub const FOOTER: &str = "Made with ❤️ using Rust";

pub const EMPTY_INPUT_MESSAGE: &str = "🚫 Please enter a tweet.";
pub const POSITIVE_MESSAGE: &str = "✅ This tweet expresses a Positive sentiment! 😊";
pub const NEGATIVE_MESSAGE: &str = "⚠️ This tweet expresses a Negative sentiment. ☹️";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub animations: bool,
    pub frame_delay: Duration,
}

impl RenderOptions {
    /// Animations redraw in place with cursor escapes, so they only run on a terminal.
    pub fn for_output(animations: bool, frame_delay: Duration, is_terminal: bool) -> Self {
        Self {
            animations: animations && is_terminal,
            frame_delay,
        }
    }
}

/// Draws reactions to a terminal (or any writer in tests).
pub struct TerminalRenderer<W: Write> {
    out: W,
    options: RenderOptions,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let rule = "─".repeat(STAGE_WIDTH);
        writeln!(self.out, "{}", TITLE)?;
        writeln!(self.out, "{}", SUBTITLE)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "💡 About: {}", ABOUT)?;
        writeln!(self.out, "{}", rule)
    }

    pub fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "─".repeat(STAGE_WIDTH))?;
        writeln!(self.out, "{}", FOOTER)
    }

    pub async fn render(&mut self, analysis: &Analysis) -> io::Result<()> {
        match analysis.reaction() {
            Reaction::Warning => writeln!(self.out, "{}", EMPTY_INPUT_MESSAGE)?,
            Reaction::Celebrate => {
                writeln!(self.out, "{}", POSITIVE_MESSAGE)?;
                self.confidence_line(analysis)?;
                if self.options.animations {
                    self.play(&balloon_frames()).await?;
                }
            }
            Reaction::Commiserate => {
                writeln!(self.out, "{}", NEGATIVE_MESSAGE)?;
                self.confidence_line(analysis)?;
                if self.options.animations {
                    self.play(&falling_tears_frames()).await?;
                }
            }
        }
        self.out.flush()
    }

    pub fn render_summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        writeln!(self.out, "✅ Analyzed {} tweets", summary.total)?;
        writeln!(self.out, "  😊 Positive: {}", summary.positive)?;
        writeln!(self.out, "  ☹️ Negative: {}", summary.negative)?;
        if summary.skipped > 0 {
            writeln!(self.out, "  🚫 Skipped (empty): {}", summary.skipped)?;
        }
        writeln!(self.out, "📁 Output saved to: {}", summary.output_path)
    }

    fn confidence_line(&mut self, analysis: &Analysis) -> io::Result<()> {
        if let Some(p) = analysis.prediction().and_then(|p| p.confidence) {
            writeln!(self.out, "   (positive probability: {:.1}%)", p * 100.0)?;
        }
        Ok(())
    }

    async fn play(&mut self, frames: &[Vec<String>]) -> io::Result<()> {
        for (index, frame) in frames.iter().enumerate() {
            if index > 0 {
                // 游標上移，原地重繪
                write!(self.out, "\x1b[{}A", frame.len())?;
            }
            for line in frame {
                writeln!(self.out, "\x1b[2K{}", line)?;
            }
            self.out.flush()?;
            if !self.options.frame_delay.is_zero() {
                tokio::time::sleep(self.options.frame_delay).await;
            }
        }
        Ok(())
    }
}

fn place(glyphs: &[(usize, &str)]) -> String {
    let mut sorted = glyphs.to_vec();
    sorted.sort_by_key(|(column, _)| *column);

    let mut line = String::new();
    let mut cursor = 0;
    for (column, glyph) in sorted {
        if column < cursor {
            continue;
        }
        line.push_str(&" ".repeat(column - cursor));
        line.push_str(glyph);
        // 表情符號佔兩格
        cursor = column + 2;
    }
    line.trim_end().to_string()
}

/// Balloons released one after another, rising to the top of the stage.
pub fn balloon_frames() -> Vec<Vec<String>> {
    let columns = [4, 12, 20, 28, 36];
    let stagger = 2;
    let frame_count = STAGE_HEIGHT + stagger * (columns.len() - 1);

    (0..frame_count)
        .map(|frame| {
            (0..STAGE_HEIGHT)
                .map(|row| {
                    let glyphs: Vec<(usize, &str)> = columns
                        .iter()
                        .enumerate()
                        .filter_map(|(i, &column)| {
                            let step = frame.checked_sub(i * stagger)?;
                            let balloon_row = (STAGE_HEIGHT - 1).saturating_sub(step);
                            (balloon_row == row).then_some((column, "🎈"))
                        })
                        .collect();
                    place(&glyphs)
                })
                .collect()
        })
        .collect()
}

/// 😢 💧 😭 falling from the top at 50%, 40% and 60% of the stage width.
pub fn falling_tears_frames() -> Vec<Vec<String>> {
    let drops = [
        (STAGE_WIDTH / 2, "😢"),
        (STAGE_WIDTH * 2 / 5, "💧"),
        (STAGE_WIDTH * 3 / 5, "😭"),
    ];

    (0..STAGE_HEIGHT)
        .map(|frame| {
            (0..STAGE_HEIGHT)
                .map(|row| {
                    if row == frame {
                        place(&drops)
                    } else {
                        String::new()
                    }
                })
                .collect()
        })
        .collect()
}
