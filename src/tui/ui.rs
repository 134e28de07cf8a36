use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::{
    domain::ScanMode,
    scan::{
        view::{DETECTED_SPAM_HEADING, NO_SPAM_NOTICE, REPORT_EMAILED_NOTICE, SCANNING_NOTICE},
        BadgeStyle, Field, ResultView, SpamList,
    },
};

use super::state::{AppState, Theme};

struct Palette {
    bg: Color,
    fg: Color,
    muted: Color,
    accent: Color,
    spam: Color,
    safe: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::Reset,
                fg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
                spam: Color::Red,
                safe: Color::Green,
                error: Color::Red,
            },
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::Gray,
                accent: Color::Yellow,
                spam: Color::LightRed,
                safe: Color::LightGreen,
                error: Color::LightRed,
            },
        }
    }
}

pub fn render(f: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let base = Style::default().fg(palette.fg).bg(palette.bg);

    let [header, tabs, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let theme_icon = match state.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("SpamZero", base.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{theme_icon}]"), base.fg(palette.muted)),
        ]))
        .style(base),
        header,
    );

    let selected = match state.panel.mode() {
        ScanMode::Message => 0,
        ScanMode::Inbox => 1,
    };
    f.render_widget(
        Tabs::new(vec![
            ScanMode::Message.tab_title(),
            ScanMode::Inbox.tab_title(),
        ])
        .select(selected)
        .style(base)
        .highlight_style(base.fg(palette.accent).add_modifier(Modifier::BOLD)),
        tabs,
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content);
    render_input(f, state, &palette, base, left);
    render_results(f, &state.result_view(), &palette, base, right);

    let key = |k: &'static str| Span::styled(k, base.add_modifier(Modifier::BOLD));
    f.render_widget(
        Paragraph::new(Line::from(vec![
            key("F1/F2"),
            Span::raw(" mode  "),
            key("Tab"),
            Span::raw(" field  "),
            key("Enter"),
            Span::raw(" scan  "),
            key("C-n"),
            Span::raw(" newline  "),
            key("C-l"),
            Span::raw(" clear  "),
            key("F5"),
            Span::raw(" theme  "),
            key("Esc"),
            Span::raw(" quit"),
        ]))
        .style(base),
        footer,
    );
}

fn render_input(f: &mut Frame, state: &AppState, palette: &Palette, base: Style, area: Rect) {
    let mode = state.panel.mode();
    let title = match mode {
        ScanMode::Message => " Scan Message ",
        ScanMode::Inbox => " Scan Inbox ",
    };
    let card = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(base);
    let inner = card.inner(area);
    f.render_widget(card, area);

    let text_height = if mode == ScanMode::Message {
        Constraint::Min(3)
    } else {
        Constraint::Length(0)
    };
    let [email_area, text_area, button_area] =
        Layout::vertical([Constraint::Length(3), text_height, Constraint::Length(1)])
            .areas(inner);

    let border = |field: Field| {
        if state.panel.focus() == field {
            base.fg(palette.accent)
        } else {
            base.fg(palette.muted)
        }
    };

    let email = if state.panel.email().is_empty() {
        Span::styled("Your email address", base.fg(palette.muted))
    } else {
        Span::styled(state.panel.email(), base)
    };
    f.render_widget(
        Paragraph::new(Line::from(email)).block(
            Block::default()
                .title(" Email ")
                .borders(Borders::ALL)
                .border_style(border(Field::Email)),
        ),
        email_area,
    );

    if mode == ScanMode::Message {
        let text = if state.panel.text().is_empty() {
            Text::styled("Paste message content here...", base.fg(palette.muted))
        } else {
            Text::styled(state.panel.text(), base)
        };
        f.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }).block(
                Block::default()
                    .title(" Message ")
                    .borders(Borders::ALL)
                    .border_style(border(Field::Text)),
            ),
            text_area,
        );
    }

    let (label, style) = if state.controller.is_scanning() {
        (SCANNING_NOTICE, base.fg(palette.muted))
    } else if state.can_submit() {
        (
            "[ Scan Now ]",
            base.fg(palette.accent).add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Scan Now ]", base.fg(palette.muted).add_modifier(Modifier::DIM))
    };
    f.render_widget(Paragraph::new(Span::styled(label, style)), button_area);
}

fn render_results(f: &mut Frame, view: &ResultView, palette: &Palette, base: Style, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let bold = base.add_modifier(Modifier::BOLD);
    let row = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, bold), Span::styled(value, base)])
    };

    match view {
        ResultView::NoScanYet | ResultView::Scanning => {
            let notice = view.to_lines().join(" ");
            lines.push(Line::styled(notice, base.fg(palette.muted)));
        }
        ResultView::Error(message) => {
            lines.push(Line::styled(
                *message,
                base.fg(palette.error).add_modifier(Modifier::BOLD),
            ));
        }
        ResultView::Report(report) => {
            lines.push(row("Scan Type: ", report.scan_type.to_string()));
            lines.push(row("Email: ", report.email.clone()));
            lines.push(row("Scanned At: ", report.scanned_at.clone()));
            lines.push(Line::default());

            if let Some(badge) = &report.badge {
                let color = match badge.style {
                    BadgeStyle::Spam => palette.spam,
                    BadgeStyle::Safe => palette.safe,
                };
                lines.push(Line::styled(
                    format!(" Prediction Result: {} ", badge.text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            if let Some(count) = &report.spam_count {
                lines.push(row("Spam Messages Detected: ", count.clone()));
            }

            lines.push(Line::styled(REPORT_EMAILED_NOTICE, base.fg(palette.muted)));
            lines.push(Line::default());

            match &report.spam_list {
                SpamList::Detected(items) => {
                    lines.push(Line::styled(DETECTED_SPAM_HEADING, bold.fg(palette.spam)));
                    for item in items {
                        lines.push(row("From: ", item.from.clone()));
                        lines.push(Line::styled(item.message.clone(), base));
                        lines.push(Line::default());
                    }
                }
                SpamList::NoneDetected => {
                    lines.push(Line::styled(NO_SPAM_NOTICE, base.fg(palette.muted)));
                }
            }
        }
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Results ").borders(Borders::ALL))
            .style(base),
        area,
    );
}
