// Catalog screen - the explorer
//
// Category tabs come straight from the selector; the list shows
// `current_items()` in authored order. On wide terminals a preview pane
// shows the highlighted item's summary. Enter opens the detail overlay.

use crate::theme;
use crate::tui::app::App;
use crate::tui::components::truncate_to_width;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let tokens = theme::resolve(app.theme_mode);
    let catalog = &app.content.catalogs[index];
    let view = &app.catalogs[index];
    let selector = &view.selector;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", catalog.title),
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!(" {}", catalog.intro), tokens.muted())),
    ])
    .style(tokens.base());
    f.render_widget(heading, rows[0]);

    let titles: Vec<Line> = selector
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!("{} {}", i + 1, c.display_name)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(selector.selected_index())
        .style(tokens.base())
        .highlight_style(tokens.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border)),
        );
    f.render_widget(tabs, rows[1]);

    let bp = Breakpoint::from_width(area.width);
    let (list_area, preview_area) = if bp.at_least(Breakpoint::Wide) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[2]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[2], None)
    };

    let text_width = list_area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = selector
        .current_items()
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(truncate_to_width(&entry.title, text_width))];
            if preview_area.is_none() && !entry.summary.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(&entry.summary, text_width),
                    tokens.muted(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let empty = items.is_empty();
    let list = List::new(items)
        .style(tokens.base())
        .highlight_style(tokens.selected())
        .highlight_symbol("› ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.panel_border(true)))
                .title(format!(" {} ", selector.current_category().display_name)),
        );

    let mut state = ListState::default().with_selected((!empty).then_some(view.cursor));
    f.render_stateful_widget(list, list_area, &mut state);

    if empty {
        let note = Paragraph::new(Span::styled("  Nothing listed here yet.", tokens.muted()));
        let inner = Rect::new(
            list_area.x + 1,
            list_area.y + 1,
            list_area.width.saturating_sub(2),
            1,
        );
        f.render_widget(note, inner);
    }

    if let Some(preview_area) = preview_area {
        let lines = match view.highlighted() {
            Some(entry) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        entry.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::raw(""),
                    Line::raw(entry.summary.clone()),
                ];
                if !entry.highlights.is_empty() {
                    lines.push(Line::raw(""));
                    lines.extend(
                        entry
                            .highlights
                            .iter()
                            .map(|h| Line::from(format!("• {}", h))),
                    );
                }
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    "Enter for full details",
                    tokens.muted(),
                )));
                lines
            }
            None => Vec::new(),
        };

        let preview = Paragraph::new(lines)
            .style(tokens.base())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(tokens.border))
                    .title(" Preview "),
            );
        f.render_widget(preview, preview_area);
    }
}
