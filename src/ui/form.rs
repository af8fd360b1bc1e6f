//! Form screen rendering: field list with inline errors, photo status,
//! camera pane, toast and footer.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n;
use crate::logic::{self, FieldKind, FieldSpec};
use crate::state::{AppState, CameraView};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Render the editable form into `area`.
pub(super) fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let spec = logic::spec_for(app.form_kind);
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (idx, field) in spec.fields.iter().enumerate() {
        let focused = idx == app.focus;
        lines.push(label_line(app, field, focused));
        lines.push(value_line(app, field, focused, area.width));
        if let Some(key) = app.form.errors.get(&field.id) {
            lines.push(Line::from(Span::styled(
                format!("  ✗ {}", i18n::t(app, key)),
                Style::default().fg(th.red),
            )));
        }
        lines.push(Line::from(""));
    }

    match app.camera {
        CameraView::Closed => {}
        CameraView::Opening => {
            lines.push(Line::from(Span::styled(
                format!("  {}", i18n::t(app, "camera.opening")),
                Style::default().fg(th.blue),
            )));
            lines.push(Line::from(""));
        }
        CameraView::Live {
            facing,
            width,
            height,
        } => {
            lines.push(Line::from(Span::styled(
                format!(
                    "  ● {} {width}x{height} · {}",
                    i18n::t(app, "camera.live"),
                    i18n::t(app, facing.label_key())
                ),
                Style::default().fg(th.blue).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", i18n::t(app, "footer.camera")),
                Style::default().fg(th.subtext),
            )));
            lines.push(Line::from(""));
        }
    }

    if app.uploading {
        lines.push(Line::from(Span::styled(
            format!("  ⟳ {}", i18n::t(app, "actions.uploading")),
            Style::default().fg(th.yellow),
        )));
    }
    if let Some(err) = &app.inline_error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {err}"),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(toast) = &app.toast_message {
        lines.push(Line::from(Span::styled(
            format!("  ✓ {toast}"),
            Style::default().fg(th.green),
        )));
    }

    lines.push(Line::from(""));
    let submit_label = if app.submitting {
        i18n::t(app, "actions.generating")
    } else {
        i18n::t(app, "actions.generateQR")
    };
    lines.push(Line::from(Span::styled(
        format!("  [Ctrl+S] {submit_label}"),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", i18n::t(app, "footer.form")),
        Style::default().fg(th.subtext),
    )));

    let title = format!(
        " {} · [Ctrl+L] {} ",
        i18n::t(app, spec.title_key),
        i18n::t(app, "language.other")
    );
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay));
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

/// Label line of one field, with required marker and focus accent.
fn label_line(app: &AppState, field: &FieldSpec, focused: bool) -> Line<'static> {
    let th = theme();
    let marker = if field.required { " *" } else { "" };
    let prefix = if focused { "› " } else { "  " };
    let style = if focused {
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay)
    };
    Line::from(Span::styled(
        format!("{prefix}{}{marker}", i18n::t(app, field.label_key)),
        style,
    ))
}

/// Value line of one field, with placeholders for empty values.
fn value_line(app: &AppState, field: &FieldSpec, focused: bool, width: u16) -> Line<'static> {
    let th = theme();
    let raw = app.form.value(field.id);
    let caret = if focused { "▏" } else { "" };

    let (text, dim) = match field.kind {
        FieldKind::Select(options) => options
            .iter()
            .find(|o| o.value == raw)
            .map_or_else(
                || (i18n::t(app, "form.selectServiceType"), true),
                |o| (i18n::t(app, o.label_key), false),
            ),
        FieldKind::Photo => {
            if app.uploading {
                (i18n::t(app, "actions.uploading"), true)
            } else if app.form.has_photo() {
                let shown = truncate_to_width(
                    &app.form.image_preview,
                    width.saturating_sub(10) as usize,
                );
                (format!("✓ {shown}  [Ctrl+R] {}", i18n::t(app, "actions.removePhoto")), false)
            } else if raw.is_empty() {
                (i18n::t(app, "form.photoPathHint"), true)
            } else {
                (raw.to_string(), false)
            }
        }
        _ => {
            if raw.is_empty() {
                (i18n::t(app, field.label_key), true)
            } else {
                (raw.to_string(), false)
            }
        }
    };

    let style = if dim {
        Style::default().fg(th.overlay)
    } else {
        Style::default().fg(th.text)
    };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(text, style),
        Span::styled(caret.to_string(), Style::default().fg(th.mauve)),
    ])
}
