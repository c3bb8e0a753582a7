//! Presentación en consola: selector de archivo, tabla de metadata y panel XMP.

mod xml_highlight;

use crate::controller::{AppState, Controller, SelectedFile};
use crate::formatting::{format_optional_time, format_size};
use crate::metadata::{ExtractionOutcome, FieldRow, InfoDictionary, metadata_rows};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row, Table};
use console::style;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

use xml_highlight::highlight_xml;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ PdfLens · Inspector de Metadata PDF ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
    println!(
        "{}",
        style("Todo el análisis ocurre en este equipo: el documento nunca sale del proceso.").dim()
    );
}

pub fn render_file_input_hint() {
    let hint_lines = [
        "┌─ Elige un PDF escribiendo:",
        "│   • Un nombre con extensión (ej. reporte.pdf)",
        "│   • Una ruta relativa (ej. ./docs/reporte.pdf)",
        "│   • Una ruta absoluta (ej. /Users/usuario/reporte.pdf)",
        "│ Comandos: limpiar · json · ayuda · salir",
        "└─",
    ];

    for line in hint_lines.iter() {
        println!("{}", style(line).cyan().dim());
    }

    println!();
}

pub fn render_help() {
    let commands = [
        ("<ruta>", "Selecciona el PDF y lee su metadata"),
        ("limpiar | clear", "Quita la selección actual"),
        ("json", "Muestra la metadata actual en formato JSON"),
        ("ayuda | help", "Muestra esta ayuda"),
        ("salir | exit", "Termina la sesión"),
    ];

    let mut table = base_table();
    table.set_header(vec![header_cell("Comando"), header_cell("Descripción")]);
    for (command, description) in commands {
        table.add_row(Row::from(vec![
            Cell::new(command).fg(Color::Cyan),
            Cell::new(description),
        ]));
    }
    println!("\n{table}\n");
}

/// Imprime el selector de archivo; se muestra siempre antes de leer la entrada.
pub fn render_prompt(state: &AppState) -> io::Result<()> {
    let current = state
        .selected
        .as_ref()
        .map(|file| file.name.as_str())
        .unwrap_or("ningún archivo");
    print!(
        "{} {} {} ",
        style("Archivo PDF").bold().cyan(),
        style(format!("[{current}]")).dim(),
        style("›").cyan()
    );
    io::stdout().flush()
}

/// La tabla y el panel XMP solo se muestran con archivo, diccionario Info y XMP presentes.
///
/// Un paquete XMP vacío cuenta como ausente.
pub fn should_render_results(state: &AppState) -> bool {
    state.selected.is_some()
        && state.info.is_some()
        && state.raw_metadata.as_deref().is_some_and(|raw| !raw.is_empty())
}

pub fn render_state(
    out: &mut impl Write,
    controller: &Controller,
    show_status: bool,
) -> io::Result<()> {
    let state = controller.state();

    if let Some(file) = &state.selected {
        render_selection(out, file)?;
        if controller.is_awaiting_parse() {
            writeln!(out, "{}", style("  Analizando documento…").dim())?;
        }
    }

    if show_status && let Some(outcome) = &state.last_outcome {
        writeln!(out, "{}", style(format!("  Estado: {}", outcome.label())).dim())?;
    }

    if !should_render_results(state) {
        return Ok(());
    }

    if let (Some(info), Some(raw)) = (&state.info, &state.raw_metadata) {
        writeln!(out, "\n{}", build_metadata_table(info))?;
        render_raw_panel(out, raw)?;
    }
    Ok(())
}

fn render_selection(out: &mut impl Write, file: &SelectedFile) -> io::Result<()> {
    let details = fs::metadata(&file.path)
        .map(|metadata| {
            format!(
                "{} · modificado {}",
                format_size(metadata.len()),
                format_optional_time(metadata.modified().ok())
            )
        })
        .unwrap_or_else(|_| "No disponible".to_string());

    writeln!(
        out,
        "\n{} {} {}",
        style("  Seleccionado").cyan().bold(),
        style("→").dim(),
        style(&file.name).white()
    )?;
    writeln!(out, "{}", style(format!("  {details}")).dim())
}

pub fn build_metadata_table(info: &InfoDictionary) -> Table {
    let mut table = base_table();
    table.set_header(vec![header_cell("Propiedad"), header_cell("Valor")]);
    for row in metadata_rows(info) {
        table.add_row(field_row(&row));
    }
    table
}

fn field_row(row: &FieldRow) -> Row {
    let value_color = if row.present {
        Color::White
    } else {
        Color::DarkGrey
    };
    Row::from(vec![
        label_cell(row.label),
        Cell::new(&row.value).fg(value_color),
    ])
}

pub fn render_raw_panel(out: &mut impl Write, raw: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        style("━━━ Metadata XMP (solo lectura) ━━━").cyan().bold()
    )?;
    writeln!(out, "{}\n", highlight_xml(raw))
}

#[derive(Serialize)]
struct JsonView<'a> {
    file: Option<&'a str>,
    info: Option<&'a InfoDictionary>,
    raw_metadata: Option<&'a str>,
    outcome: Option<&'a ExtractionOutcome>,
}

pub fn state_to_json(state: &AppState) -> serde_json::Result<String> {
    let view = JsonView {
        file: state.selected.as_ref().map(|file| file.name.as_str()),
        info: state.info.as_ref(),
        raw_metadata: state.raw_metadata.as_deref(),
        outcome: state.last_outcome.as_ref(),
    };
    serde_json::to_string_pretty(&view)
}

pub fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
        .add_attribute(Attribute::Underlined)
}

pub fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Rgb {
        r: 160,
        g: 196,
        b: 255,
    })
}
