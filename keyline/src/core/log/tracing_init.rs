// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, WriterConfig, rolling_file_appender_impl,
            tracing_config::TracingConfig};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Either call
/// [`crate::try_initialize_logging`] or do it manually:
/// `try_create_layers(..).map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Global level filter, so layers added later without their own filter still obey it.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Infallible today, kept fallible to match [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_try_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stderr);
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, writer_config).unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_no_display_layer_for_file_only() {
        let writer_config = WriterConfig::File("unused.log".into());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, writer_config).unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("keyline_test.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let writer_config = WriterConfig::File(file_path.clone());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, writer_config).unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("keyline_test.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let tracing_config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                file_path.clone(),
            ),
            level_filter: LevelFilter::DEBUG,
        };

        let layers = try_create_layers(tracing_config).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }
}
