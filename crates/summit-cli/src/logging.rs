use colored::{ColoredString, Colorize};
use std::{fmt, time::Duration};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Durations above `warn` are shown in yellow, above `slow` in red.
pub struct ElapsedThresholds {
    pub warn: Duration,
    pub slow: Duration,
}

impl Default for ElapsedThresholds {
    fn default() -> Self {
        Self {
            warn: Duration::from_millis(500),
            slow: Duration::from_secs(5),
        }
    }
}

fn elapsed_text(elapsed: Duration) -> String {
    match elapsed.as_secs() {
        secs if secs >= 60 => format!("{}m{}s", secs / 60, secs % 60),
        secs if secs > 0 => format!("{}s", secs),
        _ if elapsed.as_millis() > 0 => format!("{}ms", elapsed.as_millis()),
        _ => format!("{}μs", elapsed.as_micros()),
    }
}

pub fn format_elapsed_time(elapsed: Duration, thresholds: &ElapsedThresholds) -> ColoredString {
    let text = elapsed_text(elapsed);

    if elapsed > thresholds.slow {
        text.red()
    } else if elapsed > thresholds.warn {
        text.yellow()
    } else {
        text.dimmed()
    }
}

pub fn is_quiet() -> bool {
    std::env::args().any(|arg| arg == "--quiet")
}

pub struct EventLoggerFormatter;

impl<S, N> FormatEvent<S, N> for EventLoggerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if is_quiet() && *event.metadata().level() != tracing::Level::ERROR {
            return Ok(());
        }

        if event.metadata().name() == "SKIP_FORMAT" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();

        // Library events use short stage targets (`generate`, `setup`...), ours are module paths.
        let target = event.metadata().target();
        let stage = if target.contains("::") || target == env!("CARGO_CRATE_NAME") {
            String::new()
        } else {
            format!(" {}", target.to_ascii_lowercase().bold().bright_yellow())
        };

        write!(writer, "{}{} ", timestamp, stage)?;

        if *event.metadata().level() == tracing::Level::WARN {
            write!(writer, "{} ", "warning:".yellow().bold())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init_logging() {
    let tracing_formatter = tracing_subscriber::fmt::layer().event_format(EventLoggerFormatter);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=info,config=warn,setup=warn,deploy=warn",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_formatter)
        .init();
}
