//! Status-bar plugin output (xbar / SwiftBar line protocol).
//!
//! The first line is what the bar shows; everything after the first `---`
//! becomes the drop-down menu. Menu triggers make the host re-run this
//! executable with an action parameter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accrual::{current_balance, format_duration};
use super::action::Action;
use crate::models::{Mode, Record};
use crate::utils::formatting::quote_param;

pub const SEPARATOR: &str = "---";

/// Host colour tags.
pub const COLOR_CREDIT: &str = "green";
pub const COLOR_DEBT: &str = "red";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Emoji in the title, works with every host.
    #[default]
    Emoji,
    /// SF Symbols (`sfimage=`), SwiftBar on macOS only.
    SfSymbol,
}

impl IconStyle {
    pub fn mode_icon(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (IconStyle::Emoji, Mode::Idle) => "⚪️",
            (IconStyle::Emoji, Mode::Work) => "🔨",
            (IconStyle::Emoji, Mode::Research) => "🧪",
            (IconStyle::SfSymbol, Mode::Idle) => "pause.circle",
            (IconStyle::SfSymbol, Mode::Work) => "keyboard",
            (IconStyle::SfSymbol, Mode::Research) => "atom",
        }
    }

    fn action_icon(&self, action: &Action) -> &'static str {
        match action {
            Action::Work => self.mode_icon(Mode::Work),
            Action::Research => self.mode_icon(Mode::Research),
            Action::Stop => match self {
                IconStyle::Emoji => "⏸",
                IconStyle::SfSymbol => "pause.circle",
            },
            Action::Reset | Action::Unrecognized(_) => match self {
                IconStyle::Emoji => "♻️",
                IconStyle::SfSymbol => "trash",
            },
        }
    }
}

/// What the menu triggers invoke: an executable plus the arguments that must
/// precede the action (e.g. a `--data` override).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTarget {
    pub executable: String,
    pub leading_args: Vec<String>,
}

impl MenuTarget {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    fn params(&self, action: &Action) -> String {
        self.leading_args
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(action.as_str()))
            .enumerate()
            .map(|(i, arg)| format!("param{}={}", i + 1, quote_param(arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub icon_style: IconStyle,
    pub target: MenuTarget,
}

/// A rendered status: the live figures plus the plugin lines.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub balance: f64,
    pub formatted: String,
    pub mode: Mode,
    pub color: &'static str,
    pub lines: Vec<String>,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn color_for_balance(balance: f64) -> &'static str {
    if balance < 0.0 { COLOR_DEBT } else { COLOR_CREDIT }
}

/// Renders `record` as it stands at `now`. Pure: nothing is stored.
pub fn render(record: &Record, now: f64, options: &RenderOptions) -> StatusView {
    let balance = current_balance(record, now);
    let formatted = format_duration(balance);
    let color = color_for_balance(balance);
    let style = options.icon_style;
    let icon = style.mode_icon(record.mode);

    let mut lines = Vec::with_capacity(10);

    lines.push(match style {
        IconStyle::Emoji => format!("{icon} {formatted} | color={color}"),
        IconStyle::SfSymbol => format!("{formatted} | color={color} sfimage={icon}"),
    });

    lines.push(SEPARATOR.to_string());
    lines.push(format!("Status: {}", record.mode.label()));
    lines.push(match style {
        IconStyle::Emoji => format!("Balance: {formatted} ({balance:.4}h)"),
        IconStyle::SfSymbol => format!("Balance: {formatted} ({balance:.4}h) | font=Menlo"),
    });
    lines.push(SEPARATOR.to_string());

    lines.push(trigger("Start Research", &Action::Research, options));
    lines.push(trigger("Start Work", &Action::Work, options));
    lines.push(trigger("Stop", &Action::Stop, options));
    lines.push(SEPARATOR.to_string());
    lines.push(trigger("Reset Balance", &Action::Reset, options));

    StatusView {
        balance,
        formatted,
        mode: record.mode,
        color,
        lines,
    }
}

fn trigger(label: &str, action: &Action, options: &RenderOptions) -> String {
    let style = options.icon_style;
    let icon = style.action_icon(action);
    let command = format!(
        "bash={} {} terminal=false refresh=true",
        quote_param(&options.target.executable),
        options.target.params(action),
    );

    match style {
        IconStyle::Emoji => format!("{icon} {label} | {command}"),
        IconStyle::SfSymbol => format!("{label} | {command} sfimage={icon}"),
    }
}
