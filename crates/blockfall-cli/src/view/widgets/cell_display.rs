use blockfall_engine::{Cell, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One grid cell, two terminal columns wide.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY_DOT, "."),
            Cell::Filled(kind) => Self::new(shape_style(kind), ""),
        }
    }
}

fn shape_style(kind: ShapeKind) -> Style {
    match kind {
        ShapeKind::I => style::I_BLOCK,
        ShapeKind::J => style::J_BLOCK,
        ShapeKind::O => style::O_BLOCK,
        ShapeKind::S => style::S_BLOCK,
        ShapeKind::T => style::T_BLOCK,
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shape_has_distinct_color() {
        let styles: Vec<Style> = ShapeKind::ALL.into_iter().map(shape_style).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_cell_dots() {
        let empty = CellDisplay::from_cell(Cell::Empty);
        assert_eq!(empty.symbol, ".");
        assert_eq!(empty.style, style::EMPTY_DOT);
        let filled = CellDisplay::from_cell(Cell::Filled(ShapeKind::T));
        assert_eq!(filled.symbol, "");
        assert_eq!(filled.style, style::T_BLOCK);
    }
}
