// Grid Display Module - draws the selector into a ratatui buffer
// Layout runs in points; one terminal row is ROW_ASPECT points tall so the
// squares look square on screen.

use crate::config::GridConfig;
use crate::display::cell::{CellView, BACKGROUND, FOCUS, LABEL};
use crate::grid::layout::{GridLayout, Viewport};
use crate::grid::{GridSelector, GridTrait};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};
use std::time::Instant;

/// Height of a terminal row measured in column widths
pub const ROW_ASPECT: f32 = 2.0;

/// Viewport in points for a terminal area
pub fn viewport_for(area: Rect) -> Viewport {
    Viewport::new(area.width as f32, area.height as f32 * ROW_ASPECT)
}

/// Fresh layout for a terminal area
pub fn layout_for(config: &GridConfig, area: Rect) -> GridLayout {
    GridLayout::compute(viewport_for(area), config)
}

fn snap(value: f32) -> u16 {
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

/// Terminal rectangle covered by a cell, snapped to whole character cells
/// and clipped to `area`
pub fn cell_area(layout: &GridLayout, index: usize, area: Rect) -> Option<Rect> {
    let rect = layout.cell_rect(index)?;
    let x0 = snap(rect.x);
    let x1 = snap(rect.x + rect.size);
    let y0 = snap(rect.y / ROW_ASPECT);
    let y1 = snap((rect.y + rect.size) / ROW_ASPECT);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    let snapped = Rect::new(
        area.x.saturating_add(x0),
        area.y.saturating_add(y0),
        x1 - x0,
        y1 - y0,
    );
    let clipped = snapped.intersection(area);
    (!clipped.is_empty()).then_some(clipped)
}

/// Cell under a terminal position. Uses the snapped rectangles so a click
/// lands on exactly what was drawn.
pub fn cell_at(layout: &GridLayout, area: Rect, column: u16, row: u16) -> Option<usize> {
    (0..layout.cell_count()).find(|&index| {
        cell_area(layout, index, area).is_some_and(|rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
    })
}

pub struct GridWidget<'a> {
    selector: &'a GridSelector,
    focus: Option<usize>,
    now: Instant,
}

impl<'a> GridWidget<'a> {
    pub fn new(selector: &'a GridSelector) -> Self {
        Self {
            selector,
            focus: None,
            now: Instant::now(),
        }
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    /// Sample transitions at `now` instead of the construction time
    pub fn at(mut self, now: Instant) -> Self {
        self.now = now;
        self
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND.into()));

        let layout = layout_for(self.selector.config(), area);
        if layout.is_degenerate() {
            return;
        }

        for index in 0..layout.cell_count() {
            let Some(rect) = cell_area(&layout, index, area) else {
                continue;
            };
            let mut view = self.selector.cell_view(index, layout.cell_size, self.now);
            view.focused = self.focus == Some(index);
            render_cell(&view, rect, area, buf);
        }
    }
}

fn render_cell(view: &CellView, rect: Rect, bounds: Rect, buf: &mut Buffer) {
    let fill: Color = view.appearance.fill.into();

    render_shadow(view, rect, bounds, buf);

    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(fill);
            }
        }
    }

    let mut label_area = rect;
    if view.focused && rect.width >= 2 && rect.height >= 2 {
        let block = Block::bordered().border_style(Style::default().fg(FOCUS.into()).bg(fill));
        let inner = block.inner(rect);
        if !inner.is_empty() {
            label_area = inner;
        }
        block.render(rect, buf);
    }

    if let Some((date, time)) = view.label_lines() {
        let lines = fit_label(&date, &time, label_area.width, label_area.height);
        let style = Style::default().fg(LABEL.into()).bg(fill);
        let top = label_area.y + (label_area.height - lines.len() as u16) / 2;
        for (line, y) in lines.iter().zip(top..) {
            let width = line.chars().count() as u16;
            let x = label_area.x + (label_area.width - width) / 2;
            buf.set_string(x, y, line, style);
        }
    }
}

/// Label lines that fit a `width` x `height` area, shrinking from both
/// lines to the time alone to a clipped hour. Empty only for an empty area.
pub fn fit_label(date: &str, time: &str, width: u16, height: u16) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let width = width as usize;
    let time_width = time.chars().count();
    if height >= 2 && width >= date.chars().count().max(time_width) {
        return vec![date.to_string(), time.to_string()];
    }
    if width >= time_width {
        return vec![time.to_string()];
    }
    let hour = time.split(':').next().unwrap_or(time);
    vec![hour.chars().take(width).collect()]
}

/// One-character strip below and right of the square
fn render_shadow(view: &CellView, rect: Rect, bounds: Rect, buf: &mut Buffer) {
    let shadow: Color = view.appearance.shadow_color().into();
    let right = rect.right();
    let bottom = rect.bottom();

    let strip = (rect.top() + 1..=bottom)
        .map(|y| (right, y))
        .chain((rect.left() + 1..right).map(|x| (x, bottom)));
    for (x, y) in strip {
        if x >= bounds.right() || y >= bounds.bottom() {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(" ").set_bg(shadow);
        }
    }
}
