//! Command-line interface for the card editor.
//!
//! Each subcommand is one of the discrete user actions the original UI
//! offered: update the card, preview it, download the `.vcf`, exchange
//! JSON data files, clear saved data.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qeo_core::config::Settings;
use qeo_core::model::{CardRecord, CardSize, QrDotStyle, Template, Theme};
use qeo_store::{CardStore, FsStore};

use crate::export::{self, LocalFiles};
use crate::messages;
use crate::session::{EditorSession, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "qeo", version, about = "Editor kartu nama digital")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the stored card as it would be rendered.
    Show,
    /// Update card fields and styling, then save.
    Set(Box<SetArgs>),
    /// Write the vCard (.vcf) download.
    Vcard {
        /// Output directory.
        #[arg(long, default_value = "exports")]
        out: PathBuf,
    },
    /// Write the JSON data export.
    Export {
        /// Output directory.
        #[arg(long, default_value = "exports")]
        out: PathBuf,
    },
    /// Import card data from a JSON file.
    Import {
        /// The JSON file to import.
        file: PathBuf,
    },
    /// Print the exact QR payload text.
    Payload,
    /// Delete the stored card data.
    Clear,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub address: Option<String>,

    /// Layout template.
    #[arg(long)]
    pub template: Option<Template>,
    /// Color theme.
    #[arg(long)]
    pub theme: Option<Theme>,
    /// Card size.
    #[arg(long)]
    pub size: Option<CardSize>,
    /// QR foreground color.
    #[arg(long)]
    pub qr_color: Option<String>,
    /// QR background color.
    #[arg(long)]
    pub qr_bg_color: Option<String>,
    /// QR dot style.
    #[arg(long)]
    pub qr_dot_style: Option<QrDotStyle>,
}

/// Runs one CLI command against the configured store.
///
/// ## Errors
/// Returns an error if storage, export, or import fails.
pub fn run(cli: Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut store = CardStore::new(FsStore::open(&settings.storage.data_dir)?);

    match cli.command {
        Command::Show => {
            if let Some(record) = store.load()? {
                println!("{}", messages::CARD_LOADED);
                println!();
                print_preview(&record);
            } else {
                print_preview(&CardRecord::default());
            }
        }
        Command::Set(args) => {
            let record = store.load()?.unwrap_or_default();
            let mut session = EditorSession::with_record(TextRenderer, record);
            apply_set_args(&mut session, *args)?;
            store.save(session.record())?;
            println!("{}", messages::CARD_UPDATED);
        }
        Command::Vcard { out } => {
            let record = store.load()?.unwrap_or_default();
            let file_name = export::download_vcard(&record.fields, &LocalFiles::new(out))?;
            println!("{} ({file_name})", messages::VCARD_DOWNLOADED);
        }
        Command::Export { out } => {
            let record = store.load()?.unwrap_or_default();
            let file_name = export::export_card_data(&record, &LocalFiles::new(out))?;
            println!("{} ({file_name})", messages::CARD_EXPORTED);
        }
        Command::Import { file } => {
            match export::import_card_data(&file, &LocalFiles::new(".")) {
                Ok(record) => {
                    let mut session = EditorSession::new(TextRenderer);
                    session.replace_record(record)?;
                    store.save(session.record())?;
                    println!("{}", messages::CARD_IMPORTED);
                }
                Err(err) => {
                    if export::is_invalid_format(&err) {
                        tracing::warn!(file = %file.display(), error = %err, "import rejected");
                        eprintln!("{}", messages::INVALID_FILE);
                    }
                    return Err(err);
                }
            }
        }
        Command::Payload => {
            let record = store.load()?.unwrap_or_default();
            let session = EditorSession::with_record(TextRenderer, record);
            print!("{}", session.qr_payload());
        }
        Command::Clear => {
            store.clear()?;
            println!("{}", messages::DATA_CLEARED);
        }
    }

    Ok(())
}

fn apply_set_args(
    session: &mut EditorSession<TextRenderer>,
    args: SetArgs,
) -> anyhow::Result<()> {
    let mut fields = session.record().fields.clone();
    apply_field(&mut fields.name, args.name);
    apply_field(&mut fields.title, args.title);
    apply_field(&mut fields.company, args.company);
    apply_field(&mut fields.phone, args.phone);
    apply_field(&mut fields.email, args.email);
    apply_field(&mut fields.website, args.website);
    apply_field(&mut fields.address, args.address);

    if let Some(template) = args.template {
        session.set_template(template);
    }
    if let Some(theme) = args.theme {
        session.set_theme(theme);
    }
    if let Some(size) = args.size {
        session.set_size(size);
    }
    if let Some(color) = args.qr_color {
        session.set_qr_color(color);
    }
    if let Some(color) = args.qr_bg_color {
        session.set_qr_bg_color(color);
    }
    if let Some(style) = args.qr_dot_style {
        session.set_qr_dot_style(style);
    }

    session.update_fields(fields)
}

fn apply_field(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn print_preview(record: &CardRecord) {
    let fields = &record.fields;
    let presentation = &record.presentation;
    let (width, height) = presentation.size().dimensions_mm();

    println!("{}", fields.display_name());
    println!("{} — {}", fields.display_title(), fields.display_company());
    println!("Telepon : {}", fields.display_phone());
    println!("Email   : {}", fields.display_email());
    println!("Website : {}", fields.display_website());
    println!("Alamat  : {}", fields.display_address());
    println!();
    println!("Template: {}", presentation.template().label());
    println!("Tema    : {}", presentation.theme().label());
    println!("Ukuran  : {} — {width} × {height} mm", presentation.size().label());
}
