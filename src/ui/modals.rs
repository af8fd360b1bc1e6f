//! Modal overlays: the keyboard help box.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::i18n;
use crate::state::AppState;
use crate::theme::theme;

/// Center a `w` x `h` box inside `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Render the keyboard shortcut overview.
pub(super) fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let body = i18n::t(app, "help.body");
    let height = (body.lines().count() as u16).saturating_add(4).min(area.height);
    let rect = centered(area, area.width.saturating_sub(10).min(60), height);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        i18n::t(app, "modals.closeHint"),
        Style::default().fg(th.subtext),
    )));

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", i18n::t(app, "help.title")),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(widget, rect);
}
