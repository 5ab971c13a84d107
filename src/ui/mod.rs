use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::definitions::LANGUAGE_TOGGLE_ID;
use crate::document::{Effect, Element, ElementKind, NodeId, Tone};
use crate::i18n::Locale;

mod theme;
use theme::*;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 24;
const CARD_WIDTH: u16 = 52;
const CODE_CELL_WIDTH: u16 = 5;
const MIN_CODE_CELL_WIDTH: u16 = 3;
const CODE_CELL_GAP: u16 = 1;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// A horizontal band of the card.
enum Row {
    Element(NodeId),
    /// Consecutive code cells share one band.
    CodeCells(Vec<NodeId>),
}

fn row_height(kind: ElementKind) -> u16 {
    match kind {
        ElementKind::InputField { .. } | ElementKind::CodeCell { .. } => 3,
        ElementKind::Heading => 2,
        _ => 1,
    }
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    app.hit_areas.clear();
    let size = f.size();
    let language = app.controller.locale().language();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let block = Paragraph::new(language.too_small())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(block, size);
        return;
    }

    f.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), size);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(f, app, vertical[0]);
    render_card(f, app, vertical[1]);
    render_status_bar(f, app, vertical[2]);
}

fn tone_color(tone: Option<Tone>) -> Color {
    match tone {
        Some(Tone::Accent) => ACCENT,
        Some(Tone::Neutral) | None => NEUTRAL,
    }
}

fn render_title_bar(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let controller = &app.controller;
    let doc = controller.document();
    let base = Style::default().fg(FG_PRIMARY).bg(BAR_BG);
    f.render_widget(
        Paragraph::new(format!(" {}", doc.title)).style(base.add_modifier(Modifier::BOLD)),
        area,
    );

    let Some(toggle) = doc.find_by_id(LANGUAGE_TOGGLE_ID) else {
        return;
    };
    let mut spans = vec![Span::raw("[ ")];
    for locale in [Locale::Ja, Locale::En] {
        let Some(indicator) = doc.locale_indicator(locale).and_then(|node| doc.get(node)) else {
            continue;
        };
        if spans.len() > 1 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(
            indicator.text.clone(),
            Style::default()
                .fg(tone_color(indicator.tone))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw(" ]"));

    let width: u16 = spans.iter().map(|span| cell_width(&span.content)).sum();
    let rect = Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let style = if controller.focused() == Some(toggle) {
        base.bg(BAR_HIGHLIGHT_BG)
    } else {
        base
    };
    f.render_widget(Paragraph::new(Line::from(spans)).style(style), rect);
    app.hit_areas.push((rect, toggle));
}

fn layout_rows(app: &App) -> Vec<Row> {
    let mut rows = Vec::new();
    for (node, element) in app.controller.document().iter() {
        if element.hidden
            || matches!(
                element.kind,
                ElementKind::LanguageToggle | ElementKind::LocaleIndicator(_)
            )
        {
            continue;
        }
        if let ElementKind::CodeCell { .. } = element.kind {
            if let Some(Row::CodeCells(cells)) = rows.last_mut() {
                cells.push(node);
                continue;
            }
            rows.push(Row::CodeCells(vec![node]));
        } else {
            rows.push(Row::Element(node));
        }
    }
    rows
}

fn first_node(row: &Row) -> NodeId {
    match row {
        Row::Element(node) => *node,
        Row::CodeCells(cells) => cells[0],
    }
}

fn render_card(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let rows = layout_rows(app);
    let heights: Vec<u16> = rows
        .iter()
        .map(|row| {
            app.controller
                .document()
                .get(first_node(row))
                .map_or(1, |element| row_height(element.kind))
        })
        .collect();
    let content_height: u16 = heights.iter().sum();

    let width = CARD_WIDTH.min(area.width);
    let height = (content_height + 2).min(area.height);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(CARD_BG).fg(FG_PRIMARY));
    let inner = block.inner(card).inner(&Margin {
        horizontal: 2,
        vertical: 0,
    });
    f.render_widget(block, card);

    // Scroll just enough to keep the focused row inside the card.
    let focused = app.controller.focused();
    let mut scroll = 0u16;
    let mut offset = 0u16;
    for (row, height) in rows.iter().zip(&heights) {
        let contains_focus = match row {
            Row::Element(node) => Some(*node) == focused,
            Row::CodeCells(cells) => focused.is_some_and(|node| cells.contains(&node)),
        };
        if contains_focus && offset + height > inner.height {
            scroll = offset + height - inner.height;
        }
        offset += height;
    }

    let mut y = inner.y;
    let mut skipped = 0u16;
    for (row, height) in rows.iter().zip(heights) {
        if skipped < scroll {
            skipped += height;
            continue;
        }
        if y + height > inner.bottom() {
            break;
        }
        let rect = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        match row {
            Row::Element(node) => render_element(f, app, *node, rect),
            Row::CodeCells(cells) => render_code_cells(f, app, cells, rect),
        }
        y += height;
    }
}

fn centered(text: &str, area: Rect) -> Rect {
    let width = cell_width(text).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: 1,
    }
}

fn render_element(f: &mut Frame<'_>, app: &mut App, node: NodeId, area: Rect) {
    let Some(element) = app.controller.document().get(node) else {
        return;
    };
    let focused = app.controller.focused() == Some(node);
    let line = Rect { height: 1, ..area };
    match element.kind {
        ElementKind::Heading => {
            let text = Paragraph::new(element.text.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(text, line);
        }
        ElementKind::Paragraph | ElementKind::Timer => {
            let text = Paragraph::new(element.text.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(FG_DIM));
            f.render_widget(text, line);
        }
        ElementKind::Divider => {
            let label = format!(" {} ", element.text);
            let side = line.width.saturating_sub(cell_width(&label)) / 2;
            let rule = "─".repeat(side as usize);
            let text = Paragraph::new(format!("{rule}{label}{rule}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(FG_DIM));
            f.render_widget(text, line);
        }
        ElementKind::Link => {
            let rect = centered(&element.text, line);
            let mut style = Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED);
            if focused {
                style = style.bg(BAR_HIGHLIGHT_BG).add_modifier(Modifier::BOLD);
            }
            f.render_widget(Paragraph::new(element.text.as_str()).style(style), rect);
            app.hit_areas.push((rect, node));
        }
        ElementKind::PrimaryButton => {
            let bg = match (element.effect, focused) {
                (Some(Effect::Ripple), _) => RIPPLE_BG,
                (_, true) => ACCENT_FOCUS,
                _ => ACCENT,
            };
            let text = Paragraph::new(element.text.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(ACCENT_TEXT)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(text, line);
            app.hit_areas.push((line, node));
        }
        ElementKind::SocialButton => {
            let pressed = element.effect == Some(Effect::Pressed);
            // A pressed button shrinks by one cell on each side.
            let rect = if pressed {
                line.inner(&Margin {
                    horizontal: 1,
                    vertical: 0,
                })
            } else {
                line
            };
            let mut style = Style::default().fg(FG_PRIMARY).bg(if pressed {
                PRESSED_BG
            } else {
                ACTIVE_BG
            });
            if focused {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            let text = Paragraph::new(element.text.as_str())
                .alignment(Alignment::Center)
                .style(style);
            f.render_widget(text, rect);
            app.hit_areas.push((line, node));
        }
        ElementKind::InputField { secret } => {
            render_input(f, element, secret, focused, app.controller.locale(), area);
            app.hit_areas.push((area, node));
        }
        ElementKind::CodeCell { .. }
        | ElementKind::LanguageToggle
        | ElementKind::LocaleIndicator(_) => {}
    }
}

fn render_input(
    f: &mut Frame<'_>,
    element: &Element,
    secret: bool,
    focused: bool,
    locale: Locale,
    area: Rect,
) {
    let border = if focused || element.active {
        BORDER_FOCUS
    } else {
        BORDER_IDLE
    };
    let block = Block::default()
        .title(format!(" {} ", element.text))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(if element.active { ACTIVE_BG } else { CARD_BG }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let shown = if secret {
        "•".repeat(element.value.chars().count())
    } else {
        element.value.clone()
    };
    let content = match &element.placeholder {
        Some(placeholder) if shown.is_empty() => Span::styled(
            placeholder.get(locale).to_string(),
            Style::default().fg(FG_DIM),
        ),
        _ => Span::styled(shown.clone(), Style::default().fg(FG_PRIMARY)),
    };
    f.render_widget(Paragraph::new(Line::from(content)), inner);

    if focused {
        let x = inner.x + cell_width(&shown).min(inner.width.saturating_sub(1));
        f.set_cursor(x, inner.y);
    }
}

/// Cell width and gap that fit `count` code cells into `available` columns.
/// Cells shrink to `MIN_CODE_CELL_WIDTH` before the gaps are dropped.
fn code_cell_layout(count: u16, available: u16) -> (u16, u16) {
    if count == 0 {
        return (CODE_CELL_WIDTH, CODE_CELL_GAP);
    }
    for gap in [CODE_CELL_GAP, 0] {
        let room = available.saturating_sub(count.saturating_sub(1) * gap);
        let width = (room / count).min(CODE_CELL_WIDTH);
        if width >= MIN_CODE_CELL_WIDTH {
            return (width, gap);
        }
    }
    (MIN_CODE_CELL_WIDTH, 0)
}

fn render_code_cells(f: &mut Frame<'_>, app: &mut App, cells: &[NodeId], area: Rect) {
    let count = cells.len().min(u16::MAX as usize) as u16;
    let (cell_width, gap) = code_cell_layout(count, area.width);
    let total = count * cell_width + count.saturating_sub(1) * gap;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut registered = Vec::with_capacity(cells.len());

    for &node in cells {
        let Some(element) = app.controller.document().get(node) else {
            continue;
        };
        let rect = Rect {
            x,
            y: area.y,
            width: cell_width.min(area.right().saturating_sub(x)),
            height: 3,
        };
        if rect.width == 0 {
            break;
        }
        let focused = app.controller.focused() == Some(node);
        let border = if element.active {
            BORDER_FOCUS
        } else {
            BORDER_IDLE
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(if element.active { ACTIVE_BG } else { CARD_BG }));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        f.render_widget(
            Paragraph::new(element.value.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)),
            inner,
        );
        if focused {
            let x = inner.x + inner.width / 2 + self::cell_width(&element.value).min(1);
            f.set_cursor(x.min(inner.right().saturating_sub(1)), inner.y);
        }
        registered.push((rect, node));
        x += cell_width + gap;
    }
    app.hit_areas.extend(registered);
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let language = app.controller.locale().language();
    let hints = format!(
        " {} | {} | {} | {}",
        language.focus_hint(),
        language.activate_hint(),
        language.lang_toggle_hint(),
        language.quit_hint()
    );
    let page = app.controller.document().page().document_name();
    let padding = area
        .width
        .saturating_sub(cell_width(&hints) + cell_width(page) + 1);
    let text = format!("{hints}{}{page} ", " ".repeat(padding as usize));
    let bar = Paragraph::new(text).style(Style::default().bg(STATUS_BG).fg(STATUS_TEXT));
    f.render_widget(bar, area);
}
