//! Command line interface definition.

use clap::{Parser, ValueEnum};

use crate::state::{FormKind, Language};

/// Command line arguments accepted by the `qrdrop` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "qrdrop",
    about = "Fill delivery/service hand-off forms, attach a photo and render the record as a QR code",
    version
)]
pub struct Args {
    /// Which form flavor to open.
    #[arg(long, value_enum, default_value_t = FormArg::Delivery)]
    pub form: FormArg,

    /// Override the startup language (defaults to Thai).
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Skip the network upload and record a placeholder image URL instead.
    #[arg(long)]
    pub no_upload: bool,
}

/// CLI spelling of the form flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    /// Courier drop-off form.
    Delivery,
    /// On-site service form.
    Service,
}

impl From<FormArg> for FormKind {
    fn from(value: FormArg) -> Self {
        match value {
            FormArg::Delivery => FormKind::Delivery,
            FormArg::Service => FormKind::Service,
        }
    }
}

/// CLI spelling of the UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    /// English.
    En,
    /// Thai.
    Th,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Language::En,
            LangArg::Th => Language::Th,
        }
    }
}
