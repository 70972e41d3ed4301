//! Drawing the history list and its status line

use super::row::{RowSlot, RowTemplate};
use super::surface::TerminalSurface;
use crate::history::wrap::wrap_text;
use crate::history::HistoryList;
use crate::scroller::ScrollSurface;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// History list hosted in a terminal.
pub type TerminalHistory = HistoryList<TerminalSurface, RowTemplate>;

/// Split `area` into the list viewport and a one-row status line below it.
pub fn split_area(area: Rect) -> (Rect, Rect) {
    let status_height = area.height.min(1);
    let list = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + list.height,
        height: status_height,
        ..area
    };
    (list, status)
}

/// Draw every active pooled row that intersects the viewport, then the status line.
///
/// Rows are clipped at the viewport edges: a row scrolled half out of view
/// shows only its visible wrapped lines.
pub fn render_history(frame: &mut Frame, area: Rect, history: &TerminalHistory) {
    let (list_area, status_area) = split_area(area);
    let scroll_top = history
        .scroller()
        .surface()
        .map_or(0, ScrollSurface::scroll_top);

    for slot in history.scroller().slots() {
        if slot.is_active() {
            render_row(frame, list_area, scroll_top, slot.view());
        }
    }

    frame.render_widget(
        Paragraph::new(status_text(history))
            .style(Style::default().add_modifier(Modifier::REVERSED)),
        status_area,
    );
}

fn render_row(frame: &mut Frame, area: Rect, scroll_top: usize, row: &RowSlot) {
    let row_frame = row.frame();
    let view_bottom = scroll_top + usize::from(area.height);
    if row_frame.bottom() <= scroll_top || row_frame.top >= view_bottom {
        return;
    }

    let first = row_frame.top.max(scroll_top);
    let last = row_frame.bottom().min(view_bottom);
    let lines: Vec<Line> = wrap_text(row.text(), usize::from(area.width))
        .into_iter()
        .skip(first - row_frame.top)
        .take(last - first)
        .map(Line::raw)
        .collect();

    // first - scroll_top and last - first are bounded by area.height
    let rect = Rect::new(
        area.x,
        area.y + (first - scroll_top) as u16,
        area.width,
        (last - first) as u16,
    );
    frame.render_widget(Paragraph::new(lines), rect);
}

/// Status line: item count, window start, pool size and follow state.
pub fn status_text(history: &TerminalHistory) -> String {
    let scroller = history.scroller();
    let window = scroller
        .window_start()
        .map_or_else(|| "-".to_string(), |start| format!("#{}", start.get()));
    let position = if history.is_at_bottom() {
        "at bottom"
    } else {
        "scrolled"
    };

    format!(
        "{} items | window {} | pool {} | {}",
        scroller.items_count(),
        window,
        scroller.pool_len(),
        position
    )
}
