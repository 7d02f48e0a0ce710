//! Interactive editing session.
//!
//! The session owns a single [`ColorTriad`]. Each edit names one
//! representation; the text is parsed, converted to RGB and all fields are
//! re-derived from that RGB value. Edits that fail to parse are dropped and
//! the previous state is kept.

use std::io::{BufRead, Write};

use tinct_core::parse::{parse_channel_value, parse_hsv, parse_rgb, parse_xyz};
use tinct_core::{Channel, ColorTriad, ParseError, Representation};

use crate::config::AppConfig;
use crate::error::DemoError;
use crate::view::{FieldView, ViewEvent};

/// A single line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the RGB field.
    Rgb(String),
    /// Replace the XYZ field.
    Xyz(String),
    /// Replace the HSV field.
    Hsv(String),
    /// Move one RGB slider.
    Slider(Channel, String),
    /// Print the current state.
    Show,
    /// End the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl SessionCommand {
    /// Parse `<keyword> [argument]`. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, arg) = match line.split_once(char::is_whitespace) {
            Some((k, a)) => (k, a.trim().to_string()),
            None => (line, String::new()),
        };
        match keyword.to_ascii_lowercase().as_str() {
            "rgb" => Self::Rgb(arg),
            "xyz" => Self::Xyz(arg),
            "hsv" => Self::Hsv(arg),
            "r" | "red" => Self::Slider(Channel::Red, arg),
            "g" | "green" => Self::Slider(Channel::Green, arg),
            "b" | "blue" => Self::Slider(Channel::Blue, arg),
            "" | "show" => Self::Show,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State was replaced.
    Applied,
    /// Input was invalid; state is unchanged.
    Rejected,
    /// Nothing to change.
    Unchanged,
    /// The session should end.
    Quit,
}

/// Editor state shared by all fields.
#[derive(Debug, Clone, Default)]
pub struct Session {
    triad: ColorTriad,
}

impl Session {
    pub fn new(triad: ColorTriad) -> Self {
        Self { triad }
    }

    pub fn triad(&self) -> &ColorTriad {
        &self.triad
    }

    /// Apply a field edit. Exactly one representation is read; the others
    /// are derived from the resulting RGB value.
    pub fn edit(&mut self, repr: Representation) {
        self.triad = ColorTriad::from_representation(repr);
        tracing::debug!(source = repr.label(), rgb = %self.triad.rgb(), "edit applied");
    }

    pub fn apply(&mut self, command: &SessionCommand) -> Outcome {
        let parsed: Result<Representation, ParseError> = match command {
            SessionCommand::Rgb(text) => parse_rgb(text).map(Representation::Rgb),
            SessionCommand::Xyz(text) => parse_xyz(text).map(Representation::Xyz),
            SessionCommand::Hsv(text) => parse_hsv(text).map(Representation::Hsv),
            SessionCommand::Slider(channel, text) => parse_channel_value(text).map(|value| {
                let rgb = self.triad.rgb();
                tracing::debug!(%channel, from = rgb.channel(*channel), to = value, "slider moved");
                Representation::Rgb(rgb.with_channel(*channel, value))
            }),
            SessionCommand::Show => return Outcome::Unchanged,
            SessionCommand::Quit => return Outcome::Quit,
            SessionCommand::Unknown(line) => {
                tracing::debug!("ignoring unknown command: {line:?}");
                return Outcome::Rejected;
            }
        };

        match parsed {
            Ok(repr) => {
                self.edit(repr);
                Outcome::Applied
            }
            Err(e) => {
                tracing::debug!("edit rejected: {e}");
                Outcome::Rejected
            }
        }
    }
}

/// Write the current state in the configured format.
pub fn write_view<W: Write>(
    out: &mut W,
    session: &Session,
    config: &AppConfig,
    accepted: bool,
) -> Result<(), DemoError> {
    let view = FieldView::new(session.triad(), config.precision);
    if config.json {
        let event = ViewEvent::State {
            view,
            color: *session.triad(),
            accepted,
        };
        serde_json::to_writer(&mut *out, &event)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", view.to_text())?;
    }
    Ok(())
}

/// Run a session until `quit` or end of input, printing the state after
/// every command.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &AppConfig,
) -> Result<Session, DemoError> {
    let mut session = Session::default();
    tracing::info!("session started");
    write_view(out, &session, config, true)?;

    for line in input.split(b'\n') {
        // Undecodable bytes become U+FFFD and the line is rejected like any
        // other malformed edit; only real read errors end the session.
        let line = line?;
        let command = SessionCommand::parse(&String::from_utf8_lossy(&line));
        let outcome = session.apply(&command);
        if outcome == Outcome::Quit {
            break;
        }
        write_view(out, &session, config, outcome != Outcome::Rejected)?;
    }

    tracing::info!(rgb = %session.triad().rgb(), "session ended");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::{HsvColor, RgbColor, rgb_to_hsv, rgb_to_xyz};

    fn config(json: bool) -> AppConfig {
        AppConfig {
            precision: 3,
            json,
            log_filter: "warn".to_string(),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(
            SessionCommand::parse("  RGB 1, 2, 3 "),
            SessionCommand::Rgb("1, 2, 3".to_string())
        );
        assert_eq!(
            SessionCommand::parse("g 200"),
            SessionCommand::Slider(Channel::Green, "200".to_string())
        );
        assert_eq!(SessionCommand::parse(""), SessionCommand::Show);
        assert_eq!(SessionCommand::parse("quit"), SessionCommand::Quit);
        assert!(matches!(
            SessionCommand::parse("lab 1,2,3"),
            SessionCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_hsv_edit_updates_all_fields() {
        let mut session = Session::default();
        let outcome = session.apply(&SessionCommand::Hsv("240,100,100".to_string()));
        assert_eq!(outcome, Outcome::Applied);
        let triad = session.triad();
        assert_eq!(triad.rgb(), RgbColor::new(0, 0, 255));
        assert_eq!(triad.xyz(), rgb_to_xyz(triad.rgb()));
        assert_eq!(triad.hsv(), HsvColor::new(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_rejected_edit_keeps_previous_state() {
        let mut session = Session::default();
        session.apply(&SessionCommand::Rgb("10,20,30".to_string()));
        let before = *session.triad();

        for bad in [
            SessionCommand::Rgb("10,20".to_string()),
            SessionCommand::Rgb("10,20,300".to_string()),
            SessionCommand::Xyz("a,b,c".to_string()),
            SessionCommand::Hsv("0,101,0".to_string()),
            SessionCommand::Slider(Channel::Red, "-4".to_string()),
            SessionCommand::Unknown("paint it black".to_string()),
        ] {
            assert_eq!(session.apply(&bad), Outcome::Rejected, "{bad:?}");
            assert_eq!(*session.triad(), before, "{bad:?}");
        }
    }

    #[test]
    fn test_slider_moves_one_channel() {
        let mut session = Session::new(ColorTriad::from_rgb(RgbColor::new(10, 20, 30)));
        session.apply(&SessionCommand::Slider(Channel::Red, "255".to_string()));
        assert_eq!(session.triad().rgb(), RgbColor::new(255, 20, 30));
        assert_eq!(session.triad().hsv(), rgb_to_hsv(RgbColor::new(255, 20, 30)));
    }

    #[test]
    fn test_out_of_gamut_xyz_edit_is_clamped() {
        let mut session = Session::default();
        assert_eq!(
            session.apply(&SessionCommand::Xyz("0,0,200".to_string())),
            Outcome::Applied
        );
        let rgb = session.triad().rgb();
        assert_eq!((rgb.r, rgb.b), (0, 255));
    }

    #[test]
    fn test_run_prints_state_after_each_line_and_stops_on_quit() {
        let input = b"rgb 255,0,0\nrgb bogus\nquit\nrgb 0,0,0\n";
        let mut out = Vec::new();
        let session = run(&input[..], &mut out, &config(false)).unwrap();

        assert_eq!(session.triad().rgb(), RgbColor::new(255, 0, 0));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("RGB: ").count(), 3);
        assert!(text.ends_with("RGB: 255,0,0\nXYZ: 41.24,21.26,1.93\nHSV: 0,100,100\nColor: #ff0000 (background-color: rgb(255, 0, 0))\n"));
    }

    #[test]
    fn test_run_survives_undecodable_line() {
        let input = b"rgb 1,2,3\n\xff\xfe\nrgb 4,5,6\n";
        let mut out = Vec::new();
        let session = run(&input[..], &mut out, &config(true)).unwrap();

        assert_eq!(session.triad().rgb(), RgbColor::new(4, 5, 6));
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2]["data"]["accepted"], false);
        assert_eq!(lines[2]["data"]["view"]["rgb"], "1,2,3");
        assert_eq!(lines[3]["data"]["view"]["rgb"], "4,5,6");
    }

    #[test]
    fn test_run_accepts_crlf_line_endings() {
        let input = b"rgb 9,8,7\r\nshow\r\n";
        let mut out = Vec::new();
        let session = run(&input[..], &mut out, &config(false)).unwrap();
        assert_eq!(session.triad().rgb(), RgbColor::new(9, 8, 7));
    }

    #[test]
    fn test_run_json_marks_rejections() {
        let input = b"hsv 0,0,50\nhsv 999,0,0\n";
        let mut out = Vec::new();
        run(&input[..], &mut out, &config(true)).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1]["data"]["accepted"], true);
        assert_eq!(lines[1]["data"]["view"]["rgb"], "128,128,128");
        assert_eq!(lines[2]["data"]["accepted"], false);
        assert_eq!(lines[2]["data"]["view"]["rgb"], "128,128,128");
    }
}
