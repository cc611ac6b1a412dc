use ratatui::style::{Color, Modifier, Style};

use crate::data::PatientStatus;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Rgb(142, 192, 124))
    .add_modifier(Modifier::BOLD);
pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(131, 165, 152))
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);
pub const DIM_STYLE: Style = Style::new().fg(Color::Rgb(146, 131, 116));
pub const TITLE_STYLE: Style = Style::new()
    .fg(Color::Rgb(250, 189, 47))
    .add_modifier(Modifier::BOLD);

pub fn patient_status_color(status: PatientStatus) -> Color {
    match status {
        PatientStatus::Stable => Color::Rgb(104, 157, 106),
        PatientStatus::Improving => Color::Rgb(69, 133, 136),
        PatientStatus::Critical => Color::Rgb(214, 93, 14),
    }
}

pub fn alert_color(urgent: bool) -> Color {
    if urgent {
        Color::Rgb(254, 128, 25)
    } else {
        Color::Rgb(250, 189, 47)
    }
}

// Gold, hot pink, sky blue, pale green, light pink.
pub const CONFETTI_PALETTE: [Color; 5] = [
    Color::Rgb(255, 215, 0),
    Color::Rgb(255, 105, 180),
    Color::Rgb(135, 206, 235),
    Color::Rgb(152, 251, 152),
    Color::Rgb(255, 182, 193),
];

pub const SURPRISE_BG: Color = Color::Rgb(190, 46, 80);
pub const HEART_STYLE: Style = Style::new().fg(Color::Rgb(255, 130, 160));

pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub mod icons {
    pub const DASHBOARD: &str = "#";
    pub const PATIENTS: &str = "@";
    pub const CHART: &str = "=";
    pub const MEDICATIONS: &str = "+";
    pub const SCHEDULES: &str = "%";
    pub const REPORTS: &str = "^";
    pub const SETTINGS: &str = "*";
    pub const CONFETTI_ROUND: &str = "o";
    pub const CONFETTI_SQUARE: &str = "#";
    pub const HEART: &str = "\u{2665}";
}
