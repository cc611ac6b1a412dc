use std::time::Instant;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::data;
use crate::state::{App, Mode, ViewId, MENU};
use crate::theme::{self, icons};

pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.size();
    match app.render_mode() {
        Mode::Surprise => render_surprise(f, app, area),
        Mode::LoadingPanel => render_loading(f, app, area),
        Mode::ChartDetail => render_chart_detail(f, area),
        Mode::Shell(_) => render_shell(f, app, area),
    }
}

fn clock_label() -> String {
    Local::now().format("%I:%M %p").to_string()
}

fn render_shell(f: &mut Frame, app: &mut App, area: Rect) {
    let view = app.view();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, app, view, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[1]);

    render_header(f, view, main[0]);

    match view {
        ViewId::Dashboard => render_dashboard(f, main[1]),
        other => render_placeholder(f, other, main[1]),
    }
}

fn render_sidebar(f: &mut Frame, app: &mut App, view: ViewId, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            "{} {}",
            data::HOSPITAL_NAME,
            data::HOSPITAL_SUBTITLE
        ))
        .border_style(theme::HEADER_STYLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let items: Vec<ListItem> = MENU
        .iter()
        .map(|entry| {
            let marker = if *entry == view { "* " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(entry.icon(), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(entry.menu_label()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme::SELECTED_STYLE)
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[0], &mut app.menu_state);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled("j/k move  Enter open", theme::DIM_STYLE)),
        Line::from(Span::styled("1-7 jump  q quit", theme::DIM_STYLE)),
    ]);
    f.render_widget(hints, rows[1]);
}

fn render_header(f: &mut Frame, view: ViewId, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(view.title(), theme::TITLE_STYLE),
            Span::raw("  "),
            Span::styled(clock_label(), theme::DIM_STYLE),
        ]),
        Line::from(Span::styled(view.subtitle(), theme::DIM_STYLE)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_dashboard(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);

    for (card, slot) in data::STAT_CARDS.iter().zip(card_areas.iter()) {
        let block = Block::default().borders(Borders::ALL).title(card.title);
        let inner = block.inner(*slot);
        f.render_widget(block, *slot);
        let lines = vec![
            Line::from(Span::styled(
                card.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.change,
                Style::default().fg(Color::Green),
            )),
        ];
        f.render_widget(Paragraph::new(lines), inner);
    }

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_admissions(f, panels[0]);
    render_alerts(f, panels[1]);
}

fn render_admissions(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Recent Admissions");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for patient in &data::RECENT_ADMISSIONS {
        let status_color = theme::patient_status_color(patient.status);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}, {}", patient.name, patient.age),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", patient.status.label()),
                Style::default().fg(status_color),
            ),
        ]));
        lines.push(Line::from(Span::raw(patient.condition)));
        lines.push(Line::from(Span::styled(
            format!("{}  {}", patient.room, patient.time),
            theme::DIM_STYLE,
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_alerts(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Priority Alerts");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for alert in &data::PRIORITY_ALERTS {
        let color = theme::alert_color(alert.urgent);
        let badge = if alert.urgent { "URGENT" } else { "notice" };
        lines.push(Line::from(vec![
            Span::styled(format!("! {}", alert.kind), Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(badge, Style::default().fg(color)),
        ]));
        lines.push(Line::from(Span::raw(format!(
            "{} - {}",
            alert.patient, alert.room
        ))));
        lines.push(Line::from(Span::styled(alert.time, theme::DIM_STYLE)));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_placeholder(f: &mut Frame, view: ViewId, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(view.title());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if let Some(blurb) = view.placeholder_blurb() {
        f.render_widget(Paragraph::new(blurb).wrap(Wrap { trim: true }), inner);
    }
}

fn render_chart_detail(f: &mut Frame, area: Rect) {
    let patient = &data::CHART_PATIENT;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(7),
        ])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled("Nurse Chart", theme::TITLE_STYLE),
            Span::raw("  "),
            Span::styled(clock_label(), theme::DIM_STYLE),
        ]),
        Line::from(Span::styled(
            "Electronic Health Record - Patient Information",
            theme::DIM_STYLE,
        )),
        Line::from(Span::styled(
            format!("Chart ID: {}", patient.chart_id),
            theme::DIM_STYLE,
        )),
    ];
    f.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        rows[0],
    );

    let info_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    let info_block = Block::default()
        .borders(Borders::ALL)
        .title("Patient Information");
    let info_inner = info_block.inner(info_cols[0]);
    f.render_widget(info_block, info_cols[0]);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(format!("Name: {}", patient.name)),
            Line::from(format!("Age: {}", patient.age)),
            Line::from(format!("Room: {}", patient.room)),
            Line::from(format!("Admission: {}", patient.admitted)),
        ]),
        info_inner,
    );

    let diag_block = Block::default()
        .borders(Borders::ALL)
        .title("Current Diagnosis");
    let diag_inner = diag_block.inner(info_cols[1]);
    f.render_widget(diag_block, info_cols[1]);
    f.render_widget(
        Paragraph::new(patient.diagnosis).wrap(Wrap { trim: true }),
        diag_inner,
    );

    let status_block = Block::default().borders(Borders::ALL).title("Status");
    let status_inner = status_block.inner(info_cols[2]);
    f.render_widget(status_block, info_cols[2]);
    f.render_widget(
        Paragraph::new(Span::styled(
            patient.status.label(),
            Style::default()
                .fg(theme::patient_status_color(patient.status))
                .add_modifier(Modifier::BOLD),
        )),
        status_inner,
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let vitals_rows: Vec<Row> = data::VITAL_SIGNS
        .iter()
        .map(|vital| {
            Row::new(vec![
                Cell::from(vital.time),
                Cell::from(vital.bp),
                Cell::from(vital.hr),
                Cell::from(vital.temp),
                Cell::from(vital.o2),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(5),
    ];
    let vitals = Table::new(vitals_rows, widths)
        .header(Row::new(vec!["Time", "BP", "HR", "Temp", "O2"]).style(theme::HEADER_STYLE))
        .block(Block::default().borders(Borders::ALL).title("Vital Signs"));
    f.render_widget(vitals, middle[0]);

    let meds_block = Block::default().borders(Borders::ALL).title("Medications");
    let meds_inner = meds_block.inner(middle[1]);
    f.render_widget(meds_block, middle[1]);
    let mut med_lines = Vec::new();
    for med in &data::MEDICATIONS {
        med_lines.push(Line::from(vec![
            Span::styled(med.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(med.dose, theme::DIM_STYLE),
        ]));
        med_lines.push(Line::from(Span::raw(med.frequency)));
        med_lines.push(Line::from(Span::styled(
            format!("Last given: {}", med.last_given),
            theme::DIM_STYLE,
        )));
    }
    f.render_widget(Paragraph::new(med_lines).wrap(Wrap { trim: true }), meds_inner);

    let notes_block = Block::default()
        .borders(Borders::ALL)
        .title("Nursing Notes");
    let notes_inner = notes_block.inner(rows[3]);
    f.render_widget(notes_block, rows[3]);
    let note_lines: Vec<Line> = data::NURSING_NOTES
        .iter()
        .map(|note| {
            Line::from(vec![
                Span::styled(note.time, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  {}", note.note)),
                Span::styled(format!("  - {}", note.nurse), theme::DIM_STYLE),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(note_lines).wrap(Wrap { trim: true }),
        notes_inner,
    );
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(area, 36, 7);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(card);
    f.render_widget(block, card);

    let frame = theme::SPINNER_FRAMES[app.spinner_frame % theme::SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            frame,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Loading...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Please wait a moment", theme::DIM_STYLE)),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_surprise(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::SURPRISE_BG)),
        area,
    );

    render_heart_layer(f, area);

    let Some(surprise) = app.surprise.as_ref() else {
        return;
    };

    let elapsed = surprise.elapsed(Instant::now()).as_secs_f32();
    render_confetti(f, area, &surprise.confetti, elapsed);

    let center = centered_rect(area, area.width.min(60), 5);
    let mut lines = Vec::new();
    if surprise.primary_revealed() {
        lines.push(Line::from(Span::styled(
            data::PRIMARY_GREETING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    if surprise.secondary_revealed() {
        lines.push(Line::from(Span::styled(
            data::SECONDARY_GREETING,
            Style::default().fg(Color::White),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );

    if surprise.audio_started() && area.height > 1 {
        let note = Rect {
            x: area.x,
            y: area.bottom() - 1,
            width: 2.min(area.width),
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled("\u{266a}", theme::DIM_STYLE)),
            note,
        );
    }
}

// Decorative 2x3 grid of hearts behind the text.
fn render_heart_layer(f: &mut Frame, area: Rect) {
    if area.width < 6 || area.height < 4 {
        return;
    }
    let buf = f.buffer_mut();
    for row in 0..2u16 {
        for col in 0..3u16 {
            let x = area.x + (2 * col + 1) * area.width / 6;
            let y = area.y + (2 * row + 1) * area.height / 4;
            if x < area.right() && y < area.bottom() {
                buf.get_mut(x, y)
                    .set_symbol(icons::HEART)
                    .set_style(theme::HEART_STYLE.bg(theme::SURPRISE_BG));
            }
        }
    }
}

const FALL_ROWS_PER_SEC: f32 = 4.0;

fn render_confetti(
    f: &mut Frame,
    area: Rect,
    confetti: &[crate::surprise::ConfettiParticle],
    elapsed_secs: f32,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = f.buffer_mut();
    for particle in confetti {
        let fall = elapsed_secs - particle.delay_secs;
        if fall < 0.0 {
            continue;
        }
        let x = area.x + ((particle.left_pct / 100.0) * area.width as f32) as u16;
        let y = area.y + ((fall * FALL_ROWS_PER_SEC) as u32 % area.height as u32) as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let symbol = if particle.id % 2 == 0 {
            icons::CONFETTI_ROUND
        } else {
            icons::CONFETTI_SQUARE
        };
        let color = theme::CONFETTI_PALETTE[particle.id as usize % theme::CONFETTI_PALETTE.len()];
        buf.get_mut(x, y)
            .set_symbol(symbol)
            .set_fg(color)
            .set_bg(theme::SURPRISE_BG);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
