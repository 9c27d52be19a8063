mod common;
use common::{T0, record};

use time_hedge::cli::commands::status::write_view;
use time_hedge::core::display::{COLOR_CREDIT, COLOR_DEBT, SEPARATOR};
use time_hedge::core::{IconStyle, MenuTarget, RenderOptions, render};
use time_hedge::errors::AppError;
use time_hedge::models::{Mode, Record};

const EXE: &str = "/usr/local/bin/time_hedge";

fn emoji() -> RenderOptions {
    RenderOptions {
        icon_style: IconStyle::Emoji,
        target: MenuTarget::new(EXE),
    }
}

fn sf_symbol() -> RenderOptions {
    RenderOptions {
        icon_style: IconStyle::SfSymbol,
        target: MenuTarget::new(EXE),
    }
}

#[test]
fn test_default_record_renders_idle_zero() {
    let view = render(&Record::default(), T0, &emoji());

    assert_eq!(view.formatted, " 00:00:00");
    assert_eq!(view.color, COLOR_CREDIT);
    assert_eq!(view.mode, Mode::Idle);
    assert_eq!(
        view.lines,
        vec![
            "⚪️  00:00:00 | color=green".to_string(),
            SEPARATOR.to_string(),
            "Status: Idle".to_string(),
            "Balance:  00:00:00 (0.0000h)".to_string(),
            SEPARATOR.to_string(),
            format!(
                "🧪 Start Research | bash='{EXE}' param1='research' terminal=false refresh=true"
            ),
            format!("🔨 Start Work | bash='{EXE}' param1='work' terminal=false refresh=true"),
            format!("⏸ Stop | bash='{EXE}' param1='stop' terminal=false refresh=true"),
            SEPARATOR.to_string(),
            format!("♻️ Reset Balance | bash='{EXE}' param1='reset' terminal=false refresh=true"),
        ]
    );
}

#[test]
fn test_research_in_progress_shows_debt() {
    let view = render(&record(0.0, Mode::Research, T0), T0 + 1800.0, &emoji());

    assert_eq!(view.balance, -2.0);
    assert_eq!(view.color, COLOR_DEBT);
    assert_eq!(view.lines[0], "🧪 -02:00:00 | color=red");
    assert_eq!(view.lines[2], "Status: Researching (4x Debt)");
    assert_eq!(view.lines[3], "Balance: -02:00:00 (-2.0000h)");
}

#[test]
fn test_work_icon_with_credit() {
    let view = render(&record(0.5, Mode::Work, T0), T0 + 3600.0, &emoji());

    assert_eq!(view.lines[0], "🔨 +01:30:00 | color=green");
    assert_eq!(view.lines[2], "Status: Working (Payoff)");
}

#[test]
fn test_idle_icon_wins_over_sign_but_color_follows_balance() {
    let view = render(&record(-3.0, Mode::Idle, 0.0), T0, &emoji());

    assert_eq!(view.lines[0], "⚪️ -03:00:00 | color=red");
}

#[test]
fn test_render_is_pure_for_the_record() {
    let rec = record(1.0, Mode::Work, T0);
    let first = render(&rec, T0 + 60.0, &emoji());
    let second = render(&rec, T0 + 60.0, &emoji());

    assert_eq!(first.lines, second.lines);
    assert_eq!(rec, record(1.0, Mode::Work, T0));
}

#[test]
fn test_sf_symbol_style() {
    let view = render(&record(0.0, Mode::Work, T0), T0 + 3600.0, &sf_symbol());

    assert_eq!(view.lines[0], "+01:00:00 | color=green sfimage=keyboard");
    assert_eq!(view.lines[3], "Balance: +01:00:00 (1.0000h) | font=Menlo");
    assert_eq!(
        view.lines[5],
        format!(
            "Start Research | bash='{EXE}' param1='research' terminal=false refresh=true sfimage=atom"
        )
    );
    assert_eq!(
        view.lines[7],
        format!("Stop | bash='{EXE}' param1='stop' terminal=false refresh=true sfimage=pause.circle")
    );
    assert_eq!(
        view.lines[9],
        format!("Reset Balance | bash='{EXE}' param1='reset' terminal=false refresh=true sfimage=trash")
    );
}

#[test]
fn test_leading_args_are_forwarded_to_triggers() {
    let options = RenderOptions {
        icon_style: IconStyle::Emoji,
        target: MenuTarget::new(EXE).with_args(["--data", "/tmp/hedge.json"]),
    };
    let view = render(&Record::default(), T0, &options);

    assert_eq!(
        view.lines[6],
        format!(
            "🔨 Start Work | bash='{EXE}' param1='--data' param2='/tmp/hedge.json' param3='work' terminal=false refresh=true"
        )
    );
}

#[test]
fn test_display_prints_one_line_each() {
    let view = render(&Record::default(), T0, &emoji());
    let text = view.to_string();

    assert_eq!(text.lines().count(), 10);
    assert!(text.ends_with('\n'));
    assert!(text.starts_with("⚪️  00:00:00 | color=green\n---\n"));
}

struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_view_writes_every_line() {
    let view = render(&Record::default(), T0, &emoji());
    let mut out = Vec::new();

    write_view(&mut out, &view).expect("write");

    assert_eq!(String::from_utf8(out).unwrap(), view.to_string());
}

#[test]
fn test_write_view_reports_closed_pipe_as_io_error() {
    let view = render(&Record::default(), T0, &emoji());

    let err = write_view(&mut ClosedPipe, &view).unwrap_err();

    assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
