use crate::config::Config;
use crate::controller::{Completion, Controller, SelectedFile, run_ticket};
use crate::error::Result;
use crate::metadata::{DocumentMetadata, LoadOptions, LopdfBackend};
use crate::ui;
use console::style;
use std::env;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc;
use tracing::{debug, warn};

type ParseDone = (u64, Result<DocumentMetadata>);

#[derive(Debug, Eq, PartialEq)]
enum Command<'a> {
    Empty,
    Exit,
    Help,
    Clear,
    Json,
    Select(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    if matches_command(trimmed, &["exit", "salir"]) {
        Command::Exit
    } else if matches_command(trimmed, &["ayuda", "help"]) {
        Command::Help
    } else if matches_command(trimmed, &["limpiar", "clear"]) {
        Command::Clear
    } else if matches_command(trimmed, &["json"]) {
        Command::Json
    } else {
        Command::Select(strip_quotes(trimmed))
    }
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

/// Las terminales suelen envolver en comillas las rutas arrastradas.
fn strip_quotes(input: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = input
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    input
}

#[derive(Debug, Eq, PartialEq)]
enum Input {
    Line(String),
    Skipped,
    End,
}

/// Lee la siguiente línea; las que no son UTF-8 válido se descartan sin cerrar la sesión.
async fn next_input<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) -> io::Result<Input> {
    match lines.next_line().await {
        Ok(Some(line)) => Ok(Input::Line(line)),
        Ok(None) => Ok(Input::End),
        Err(error) if error.kind() == ErrorKind::InvalidData => {
            warn!(%error, "entrada descartada: no es UTF-8 válido");
            Ok(Input::Skipped)
        }
        Err(error) => Err(error),
    }
}

fn resolve_path(base: &Path, input: &str) -> PathBuf {
    let candidate = Path::new(input);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base.join(candidate)
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let backend = Arc::new(LopdfBackend);
    let options = LoadOptions::local_only();
    let current_dir = env::current_dir()?;

    let mut controller = Controller::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<ParseDone>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    ui::render_header();
    ui::render_file_input_hint();
    ui::render_prompt(controller.state())?;

    loop {
        tokio::select! {
            input = next_input(&mut lines) => {
                let line = match input? {
                    Input::Line(line) => line,
                    Input::Skipped => {
                        println!("{}", style("La entrada no es texto UTF-8 válido.").yellow());
                        ui::render_prompt(controller.state())?;
                        continue;
                    }
                    Input::End => {
                        println!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                        break;
                    }
                };

                match parse_command(&line) {
                    Command::Empty => {}
                    Command::Exit => {
                        println!("{}", style("Hasta luego!").dim());
                        break;
                    }
                    Command::Help => ui::render_help(),
                    Command::Json => match ui::state_to_json(controller.state()) {
                        Ok(json) => println!("{json}"),
                        Err(error) => warn!(%error, "no se pudo serializar la metadata"),
                    },
                    Command::Clear => {
                        controller.on_file_selected(None);
                        ui::render_state(&mut io::stdout(), &controller, config.show_status)?;
                    }
                    Command::Select(input) => {
                        let file = SelectedFile::from_path(resolve_path(&current_dir, input));
                        if let Some(ticket) = controller.on_file_selected(Some(file)) {
                            let backend = Arc::clone(&backend);
                            let done_tx = done_tx.clone();
                            tokio::spawn(async move {
                                let done = run_ticket(backend, ticket, options).await;
                                if done_tx.send(done).is_err() {
                                    debug!("la sesión terminó antes que la extracción");
                                }
                            });
                        }
                        ui::render_state(&mut io::stdout(), &controller, config.show_status)?;
                    }
                }

                ui::render_prompt(controller.state())?;
            }
            Some((seq, result)) = done_rx.recv() => {
                if let Completion::Applied(_) = controller.complete(seq, result) {
                    ui::render_state(&mut io::stdout(), &controller, config.show_status)?;
                    ui::render_prompt(controller.state())?;
                }
            }
        }
    }

    Ok(())
}
