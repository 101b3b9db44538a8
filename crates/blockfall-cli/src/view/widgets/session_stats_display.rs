use std::iter;

use blockfall_engine::{GameSession, GameStats, ShapeSource};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Side panel with score, play time and line counts.
pub struct SessionStatsDisplay<'a> {
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new<S>(session: &'a GameSession<S>) -> Self
    where
        S: ShapeSource,
    {
        Self {
            stats: session.stats(),
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(fn(&GameStats) -> String),
    LabelValue(&'static str, fn(&GameStats) -> String),
}

fn format_time(seconds: u64) -> String {
    format!("{}:{:0>2}", seconds / 60, seconds % 60)
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(|stats| stats.score().to_string()),
    Row::FullLabel("TIME:"),
    Row::FullValue(|stats| format_time(stats.elapsed_seconds())),
    Row::Empty,
    Row::LabelValue("LINES:", |stats| stats.total_cleared_lines().to_string()),
    Row::LabelValue("PIECES:", |stats| stats.completed_pieces().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLES:", |stats| stats.line_cleared_counter()[1].to_string()),
    Row::LabelValue("DOUBLES:", |stats| stats.line_cleared_counter()[2].to_string()),
    Row::LabelValue("TRIPLES:", |stats| stats.line_cleared_counter()[3].to_string()),
    Row::LabelValue("QUADS:", |stats| stats.line_cleared_counter()[4].to_string()),
];

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn test_height_matches_rows() {
        let session = GameSession::new();
        let display = SessionStatsDisplay::new(&session);
        assert_eq!(usize::from(display.height()), ROWS.len());
        let display = display.block(BlockWidget::bordered());
        assert_eq!(usize::from(display.height()), ROWS.len() + 2);
    }
}
