//! Control panel with the count and size sliders and the shape buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, LineGauge, Paragraph},
};
use whirl_background::BackgroundState;
use whirl_core::{MAX_COUNT, MAX_SIZE, MIN_COUNT, MIN_SIZE, ShapeKind};

/// Panel width in cells, borders included.
const PANEL_WIDTH: u16 = 36;

/// Panel height in cells, borders included.
const PANEL_HEIGHT: u16 = 8;

/// Something a click on the panel asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetCount(usize),
    SetSize(f64),
    SetShape(ShapeKind),
    /// Inside the panel but not on a control.
    Nothing,
}

/// Where every control sits for a given screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub area: Rect,
    pub count_label: Rect,
    pub count_slider: Rect,
    pub size_label: Rect,
    pub size_slider: Rect,
    pub buttons: [(ShapeKind, Rect); 3],
}

impl PanelLayout {
    /// Top-right corner of `screen`, shrunk to fit.
    pub fn new(screen: Rect) -> Self {
        let width = PANEL_WIDTH.min(screen.width);
        let height = PANEL_HEIGHT.min(screen.height);
        let area = Rect::new(
            screen.x + screen.width - width,
            screen.y,
            width,
            height,
        );

        let inner = area.inner(Margin::new(1, 1));
        let [count_label, count_slider, size_label, size_slider, _, button_row] =
            Layout::vertical([Constraint::Length(1); 6]).areas(inner);
        let [line, triangle, square] = Layout::horizontal([
            Constraint::Length(ShapeKind::Line.label().len() as u16 + 2),
            Constraint::Length(ShapeKind::Triangle.label().len() as u16 + 2),
            Constraint::Length(ShapeKind::Square.label().len() as u16 + 2),
        ])
        .spacing(1)
        .areas(button_row);

        Self {
            area,
            count_label,
            count_slider,
            size_label,
            size_slider,
            buttons: [
                (ShapeKind::Line, line),
                (ShapeKind::Triangle, triangle),
                (ShapeKind::Square, square),
            ],
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        contains(self.area, column, row)
    }

    /// The action for a click at (`column`, `row`), if it hit the panel.
    pub fn hit(&self, column: u16, row: u16) -> Option<PanelAction> {
        if !self.contains(column, row) {
            return None;
        }
        if contains(self.count_slider, column, row) {
            let value = slider_value(self.count_slider, column, MIN_COUNT as f64, MAX_COUNT as f64);
            return Some(PanelAction::SetCount(value.round() as usize));
        }
        if contains(self.size_slider, column, row) {
            let value = slider_value(self.size_slider, column, MIN_SIZE, MAX_SIZE);
            return Some(PanelAction::SetSize(value.round()));
        }
        for (shape, rect) in self.buttons {
            if contains(rect, column, row) {
                return Some(PanelAction::SetShape(shape));
            }
        }
        Some(PanelAction::Nothing)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Map a column inside `slider` linearly onto [`min`, `max`].
fn slider_value(slider: Rect, column: u16, min: f64, max: f64) -> f64 {
    if slider.width <= 1 {
        return min;
    }
    let offset = column.saturating_sub(slider.x).min(slider.width - 1);
    let ratio = offset as f64 / (slider.width - 1) as f64;
    min + ratio * (max - min)
}

fn ratio(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Draw the panel for the current background state.
pub fn render(frame: &mut Frame, layout: &PanelLayout, state: &BackgroundState) {
    let accent = Color::White;

    frame.render_widget(Clear, layout.area);
    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Controls ")
            .style(Style::new().bg(Color::Black)),
        layout.area,
    );

    let count_label = Line::from(vec![
        "Objects ".dark_gray(),
        state.count().to_string().bold().fg(accent),
        "  -/+".dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(count_label), layout.count_label);
    frame.render_widget(
        LineGauge::default()
            .ratio(ratio(state.count() as f64, MIN_COUNT as f64, MAX_COUNT as f64))
            .label("")
            .filled_style(Style::new().fg(accent))
            .unfilled_style(Style::new().fg(Color::DarkGray)),
        layout.count_slider,
    );

    let size_label = Line::from(vec![
        "Size    ".dark_gray(),
        format!("{:.0}", state.size()).bold().fg(accent),
        "  [/]".dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(size_label), layout.size_label);
    frame.render_widget(
        LineGauge::default()
            .ratio(ratio(state.size(), MIN_SIZE, MAX_SIZE))
            .label("")
            .filled_style(Style::new().fg(accent))
            .unfilled_style(Style::new().fg(Color::DarkGray)),
        layout.size_slider,
    );

    for (shape, rect) in layout.buttons {
        let style = if shape == state.shape() {
            Style::new().fg(Color::Black).bg(accent).bold()
        } else {
            Style::new().fg(accent)
        };
        frame.render_widget(
            Paragraph::new(shape.label())
                .alignment(Alignment::Center)
                .style(style),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PanelLayout {
        PanelLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_panel_sits_top_right() {
        let layout = layout();
        assert_eq!(layout.area, Rect::new(64, 0, 36, 8));
        assert_eq!(layout.count_slider.y, 2);
        assert_eq!(layout.size_slider.y, 4);
        assert_eq!(layout.buttons[0].1.y, 6);
    }

    #[test]
    fn test_panel_shrinks_on_small_screens() {
        let layout = PanelLayout::new(Rect::new(0, 0, 20, 5));
        assert_eq!(layout.area, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_click_outside_panel() {
        assert_eq!(layout().hit(10, 10), None);
    }

    #[test]
    fn test_click_slider_ends() {
        let layout = layout();
        let slider = layout.count_slider;
        assert_eq!(
            layout.hit(slider.x, slider.y),
            Some(PanelAction::SetCount(MIN_COUNT))
        );
        assert_eq!(
            layout.hit(slider.right() - 1, slider.y),
            Some(PanelAction::SetCount(MAX_COUNT))
        );

        let slider = layout.size_slider;
        assert_eq!(
            layout.hit(slider.right() - 1, slider.y),
            Some(PanelAction::SetSize(MAX_SIZE))
        );
    }

    #[test]
    fn test_click_shape_buttons() {
        let layout = layout();
        for (shape, rect) in layout.buttons {
            assert_eq!(layout.hit(rect.x, rect.y), Some(PanelAction::SetShape(shape)));
        }
    }

    #[test]
    fn test_click_on_border_does_nothing() {
        let layout = layout();
        assert_eq!(
            layout.hit(layout.area.x, layout.area.y),
            Some(PanelAction::Nothing)
        );
    }

    #[test]
    fn test_slider_value_midpoint() {
        let slider = Rect::new(10, 0, 11, 1);
        assert_eq!(slider_value(slider, 15, 0.0, 100.0), 50.0);
        assert_eq!(slider_value(slider, 0, 0.0, 100.0), 0.0);
        assert_eq!(slider_value(slider, 99, 0.0, 100.0), 100.0);
    }
}
