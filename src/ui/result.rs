//! Result screen rendering: the QR code plus a summary of the record.

use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n;
use crate::logic::{self, FieldKind};
use crate::state::AppState;
use crate::theme::theme;

/// Render the post-submit QR page into `area`.
pub(super) fn render_result(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let Some(qr) = &app.qr else {
        return;
    };
    let spec = logic::spec_for(app.form_kind);
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        i18n::t(app, "qr.generated"),
        Style::default().fg(th.green).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        i18n::t(app, spec.scan_hint_key),
        Style::default().fg(th.subtext),
    )));
    lines.push(Line::from(""));

    for art_line in qr.art.lines() {
        lines.push(Line::from(Span::styled(
            art_line.to_string(),
            Style::default().fg(th.text),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        i18n::t(app, spec.summary_title_key),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    lines.push(summary_line(
        i18n::t(app, spec.id_label_key),
        app.form.id.to_string(),
    ));
    for field in spec.fields {
        if matches!(field.kind, FieldKind::Photo) {
            continue;
        }
        let value = app.form.value(field.id);
        if value.is_empty() {
            continue;
        }
        lines.push(summary_line(
            i18n::t(app, field.label_key),
            value.to_string(),
        ));
    }
    if let Some(ts) = qr.record.get("timestamp").and_then(|v| v.as_str()) {
        lines.push(summary_line(
            i18n::t(app, "qr.generatedAt"),
            ts.to_string(),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "[N] {} · {}",
            i18n::t(app, "actions.createNew"),
            i18n::t(app, "footer.result")
        ),
        Style::default().fg(th.subtext),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", i18n::t(app, spec.title_key)),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.green));
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(widget, area);
}

/// One `label: value` summary row.
fn summary_line(label: String, value: String) -> Line<'static> {
    let th = theme();
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(th.overlay)),
        Span::styled(value, Style::default().fg(th.text)),
    ])
}
