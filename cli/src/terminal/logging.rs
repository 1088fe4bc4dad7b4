use std::fmt::{self, Write as _};

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as subscriber_fmt};
use utilkit_common::config::Config;

use crate::terminal::{colors, spinner::SpinnerWriter};

/// Target used by [`crate::terminal::print::print`] for undecorated lines.
pub const PRINT_TARGET: &str = "utilkit::print";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the level derived from `-q` / `-v`.
pub fn init(cfg: &Config) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_directive()));

    let layer = subscriber_fmt::layer()
        .event_format(UtilkitFormatter)
        .with_writer(|| SpinnerWriter);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

pub struct UtilkitFormatter;

impl<S, N> FormatEvent<S, N> for UtilkitFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            return writeln!(writer, "{}", fields.raw.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), fields.status.as_deref()) {
                (_, Some("success")) => ("[+]", |s| s.green().bold()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[*]", |s| s.cyan().bold()),
                (Level::WARN, _) => ("[!]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
                _ => ("[ ]", |s| s.dimmed()),
            };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        if !fields.extra.is_empty() {
            write!(writer, " {}", fields.extra.trim_end().color(colors::FIELD))?;
        }
        writeln!(writer)
    }
}

/// Splits an event into its message, its `status` tag and everything else.
#[derive(Default)]
struct EventFields {
    message: String,
    status: Option<String>,
    raw: Option<String>,
    extra: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "status" => self.status = Some(value.to_string()),
            "raw_msg" => self.raw = Some(value.to_string()),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "status" => self.status = Some(format!("{value:?}")),
            "raw_msg" => self.raw = Some(format!("{value:?}")),
            name => {
                let _ = write!(self.extra, "{name}={value:?} ");
            }
        }
    }
}
