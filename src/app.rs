// Application state - maps terminal input onto the grid selector

use crate::config::AppConfig;
use crate::display::render_text_grid;
use crate::grid::{GridSelector, GridTrait, SelectionChange};
use crate::grid_display::{cell_at, layout_for, GridWidget};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Instant;

pub struct App {
    selector: GridSelector,
    focus: usize,
    grid_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            selector: GridSelector::new(config.grid.clone())
                .with_transition(config.animation_duration(), config.easing),
            focus: 0,
            grid_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn selector(&self) -> &GridSelector {
        &self.selector
    }

    /// Index of the cell with keyboard focus
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Area the grid occupied on the last draw
    pub fn grid_area(&self) -> Rect {
        self.grid_area
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.selector.has_active_transitions(now)
    }

    /// Housekeeping between frames
    pub fn tick(&mut self, now: Instant) {
        self.selector.settle(now);
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<SelectionChange> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<SelectionChange> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(1, 0),
            KeyCode::Char(' ') | KeyCode::Enter => Some(self.toggle(self.focus)),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Option<SelectionChange> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let layout = layout_for(self.selector.config(), self.grid_area);
        let index = cell_at(&layout, self.grid_area, mouse.column, mouse.row)?;
        self.focus = index;
        Some(self.toggle(index))
    }

    fn move_focus(&mut self, d_row: isize, d_col: isize) -> Option<SelectionChange> {
        let config = self.selector.config();
        if config.cell_count() == 0 {
            return None;
        }
        let (row, col) = config.position_of(self.focus);
        let row = row.saturating_add_signed(d_row).min(config.rows.saturating_sub(1));
        let col = col.saturating_add_signed(d_col).min(config.cols.saturating_sub(1));
        self.focus = config.index_of(row, col);
        None
    }

    fn toggle(&mut self, index: usize) -> SelectionChange {
        let change = self.selector.toggle(index);
        match &change {
            SelectionChange::Selected { index, at } => {
                info!("Selected cell {} at {}", index, at.format("%m/%d %H:%M:%S"))
            }
            SelectionChange::Deselected { index } => info!("Deselected cell {}", index),
        }
        debug!(
            "Selection now:\n{}",
            render_text_grid(self.selector.config(), self.selector.selection())
        );
        change
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());
        self.grid_area = chunks[0];

        frame.render_widget(
            GridWidget::new(&self.selector).focus(Some(self.focus)),
            self.grid_area,
        );
        if layout_for(self.selector.config(), self.grid_area).is_degenerate() {
            let notice = Paragraph::new("Window too small")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(notice, self.grid_area);
        }
        frame.render_widget(self.status_line(), chunks[1]);
    }

    fn status_line(&self) -> Paragraph<'static> {
        let key = Style::default().add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} selected ", self.selector.selected_count()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("│ "),
            Span::styled("click/space/enter", key),
            Span::raw(" toggle  "),
            Span::styled("arrows/hjkl", key),
            Span::raw(" move  "),
            Span::styled("q", key),
            Span::raw(" quit"),
        ]))
    }
}
