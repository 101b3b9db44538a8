use std::iter;

use blockfall_engine::Grid;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

/// The 22 × 16 play field.
///
/// Draws whatever grid it is given; pass the session's render grid to see
/// the falling piece together with the locked stack.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    grid: &'a Grid,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Grid::COLS as u16 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Grid::ROWS as u16 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Grid::COLS).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..Grid::ROWS).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Grid::ROWS }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Grid::COLS }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.grid.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::from_cell(*cell).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Cell, ShapeKind};

    use super::*;
    use crate::view::widgets::style;

    #[test]
    fn test_size_includes_border() {
        let grid = Grid::EMPTY;
        let display = BoardDisplay::new(&grid);
        assert_eq!(display.width(), 32);
        assert_eq!(display.height(), 22);
        let display = display.block(BlockWidget::bordered());
        assert_eq!(display.width(), 34);
        assert_eq!(display.height(), 24);
    }

    #[test]
    fn test_render_draws_filled_and_empty_cells() {
        let mut grid = Grid::EMPTY;
        grid.set_cell(0, 1, Cell::Filled(ShapeKind::O));
        let display = BoardDisplay::new(&grid);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert!((0..2).any(|x| buf[(x, 0)].symbol() == "."));
        assert_eq!(Some(buf[(2, 0)].bg), style::O_BLOCK.bg);
        assert_eq!(Some(buf[(3, 0)].bg), style::O_BLOCK.bg);
    }
}
