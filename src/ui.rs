pub mod charting;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, Gauge, GraphType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use keyquest::{celebration::LevelCelebration, session::Judgment};

use crate::{App, AppScreen};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            AppScreen::Typing => render_typing(self, area, buf),
            AppScreen::Results => render_results(self, area, buf),
        }
    }
}

fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let session = &app.session;

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_dim_bold_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
    let mut prompt_occupied_lines =
        ((session.reference.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

    if session.reference.width() <= max_chars_per_line as usize {
        prompt_occupied_lines = 1;
    }

    // countdown + prompt + accuracy + the two player rows
    let fixed_rows = prompt_occupied_lines + 7;
    let top_pad = area.height.saturating_sub(fixed_rows) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(top_pad),
                Constraint::Length(2),
                Constraint::Length(prompt_occupied_lines),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    let timer = Paragraph::new(Span::styled(
        format!("{}", session.seconds_remaining),
        dim_bold_style,
    ))
    .alignment(Alignment::Center);
    timer.render(chunks[1], buf);

    let mut spans: Vec<Span> = Vec::with_capacity(session.judgments.len());
    for (idx, expected) in session.reference.chars().enumerate() {
        let span = if idx == session.cursor_pos && !session.has_finished() {
            Span::styled(expected.to_string(), underlined_dim_bold_style)
        } else {
            match session.judgments[idx] {
                Judgment::Correct => Span::styled(expected.to_string(), green_bold_style),
                Judgment::Incorrect => {
                    let typed = session.typed().get(idx).copied().unwrap_or(expected);
                    Span::styled(
                        match typed {
                            ' ' => "·".to_owned(),
                            c => c.to_string(),
                        },
                        red_bold_style,
                    )
                }
                Judgment::Unjudged => Span::styled(expected.to_string(), dim_bold_style),
            }
        };
        spans.push(span);
    }

    let prompt = Paragraph::new(Line::from(spans))
        .alignment(if prompt_occupied_lines == 1 {
            // when the reference fits on one line centering gives a nice
            // zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });
    prompt.render(chunks[2], buf);

    let accuracy = Paragraph::new(Span::styled(
        format!("{}% acc", session.live_accuracy),
        bold_style,
    ))
    .alignment(Alignment::Center);
    accuracy.render(chunks[3], buf);

    render_player_bar(app, chunks[5], chunks[6], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let magenta_style = Style::default().fg(Color::Magenta);
    let cyan_style = Style::default().fg(Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(
            [
                Constraint::Min(1),    // trend chart
                Constraint::Length(1), // final stats
                Constraint::Length(1), // history summary
                Constraint::Length(1), // level readout
                Constraint::Length(1), // xp gauge
                Constraint::Length(1), // padding
                Constraint::Length(1), // legend
            ]
            .as_ref(),
        )
        .split(area);

    let wpm_series = app.history.wpm_series();
    let accuracy_series = app.history.accuracy_series();
    let (x_max, y_max) = charting::compute_chart_params(&wpm_series, &accuracy_series);

    let datasets = vec![
        Dataset::default()
            .name("wpm")
            .marker(ratatui::symbols::Marker::Braille)
            .style(magenta_style)
            .graph_type(GraphType::Line)
            .data(&wpm_series),
        Dataset::default()
            .name("acc %")
            .marker(ratatui::symbols::Marker::Braille)
            .style(cyan_style)
            .graph_type(GraphType::Line)
            .data(&accuracy_series),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("test")
                .bounds([1.0, x_max])
                .labels(vec![
                    Span::styled("1", bold_style),
                    Span::styled(charting::format_label(x_max), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("score")
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(y_max), bold_style),
                ]),
        );
    chart.render(chunks[0], buf);

    if let Some(result) = app.session.result() {
        let stats = Paragraph::new(Span::styled(
            format!("{} wpm   {}% acc", result.wpm, result.accuracy),
            bold_style,
        ))
        .alignment(Alignment::Center);
        stats.render(chunks[1], buf);
    }

    if let (Some(avg), Some(last)) = (app.history.mean_wpm(), app.history.last()) {
        let summary = Paragraph::new(Span::styled(
            format!(
                "{} tests   avg {:.0} wpm   recorded {}",
                app.history.len(),
                avg,
                last.recorded_at.format("%H:%M:%S")
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        summary.render(chunks[2], buf);
    }

    render_player_bar(app, chunks[3], chunks[4], buf);

    let legend = Paragraph::new(Span::styled("(r)estart / (esc)ape", italic_style));
    legend.render(chunks[6], buf);

    if app.celebration.is_active {
        render_level_banner(&app.celebration, area, buf);
    }
}

fn render_player_bar(app: &App, readout_area: Rect, gauge_area: Rect, buf: &mut Buffer) {
    let player = &app.player;

    let readout = Paragraph::new(Span::styled(
        format!(
            "level {}   {} / {} xp",
            player.level, player.xp, player.xp_threshold
        ),
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    readout.render(readout_area, buf);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(player.xp_ratio())
        .label(format!("{:.0}%", player.xp_ratio() * 100.0));
    gauge.render(gauge_area, buf);
}

/// Render the level-up banner on top of the results screen
fn render_level_banner(celebration: &LevelCelebration, area: Rect, buf: &mut Buffer) {
    if area.height < 2 {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };

    let banner = Paragraph::new(Span::styled(
        celebration.message.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    banner.render(banner_area, buf);
}
