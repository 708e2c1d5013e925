//! Interactive command-line surface for the idea laboratory.
//!
//! Line-oriented loop: toggle cues, inspect the assembled report, and
//! save/load named scenarios in a flat CSV file.

use std::io::{self, BufRead, Write};

use cue_rules::Cue;
use idea_lab::{CsvScenarioStore, CueSelection, IdeaEngine, LabReport};

const DEFAULT_STORE_PATH: &str = "scenarios.csv";

fn main() -> io::Result<()> {
    env_logger::init();

    let store_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let mut engine = IdeaEngine::new(CsvScenarioStore::new(store_path));
    let mut selection = CueSelection::new();

    println!("Mind Genomics Idea Laboratory");
    println!("Design ideas not by guessing, but by toggling truths. Type 'help' for commands.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "cues" => print_cues(&selection),
            "show" => print_report(&engine.evaluate(&selection), &selection),
            "toggle" | "on" | "off" => match Cue::from_id(arg) {
                Some(cue) => {
                    match command {
                        "on" => selection.activate(cue),
                        "off" => selection.deactivate(cue),
                        _ => {
                            selection.toggle(cue);
                        }
                    }
                    print_report(&engine.evaluate(&selection), &selection);
                }
                None => println!("unknown cue id '{arg}' (see 'cues')"),
            },
            "clear" => {
                selection.clear();
                println!("all cues off");
            }
            "save" => match engine.save(arg, &selection) {
                Ok(()) => println!("scenario '{arg}' saved"),
                Err(err) => println!("save failed: {err}"),
            },
            "load" => match engine.load(arg) {
                Ok(loaded) => {
                    selection = loaded;
                    print_report(&engine.evaluate(&selection), &selection);
                }
                Err(err) => println!("load failed: {err}"),
            },
            "scenarios" => match engine.scenario_names() {
                Ok(names) if names.is_empty() => println!("no saved scenarios"),
                Ok(names) => {
                    for name in names {
                        println!("{name}");
                    }
                }
                Err(err) => println!("could not read scenarios: {err}"),
            },
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  cues                list the nine cues and their states");
    println!("  toggle <cue-id>     flip a cue and show the report");
    println!("  on <cue-id>         switch a cue on");
    println!("  off <cue-id>        switch a cue off");
    println!("  show                show the report for the current cues");
    println!("  clear               switch every cue off");
    println!("  save <name>         save the current cues as a scenario");
    println!("  load <name>         load a saved scenario");
    println!("  scenarios           list saved scenario names");
    println!("  quit                exit");
}

fn print_cues(selection: &CueSelection) {
    for cue in Cue::ALL {
        let mark = if selection.is_active(cue) { "x" } else { " " };
        println!("  [{mark}] {:<16} {}", cue.id(), cue.label());
    }
}

fn print_report(report: &LabReport, selection: &CueSelection) {
    let active: Vec<&str> = selection.active_cues().iter().map(|cue| cue.id()).collect();
    if active.is_empty() {
        println!("no cues active");
    } else {
        println!("active cues: {}", active.join(", "));
    }

    for reading in &report.readings {
        println!(
            "{}: {} ({})",
            reading.cluster.name(),
            reading.score,
            reading.headline
        );
        println!("    {}", reading.profile);
    }

    for prompt in &report.prompts {
        println!("strategy: {}", prompt.message());
    }
}
