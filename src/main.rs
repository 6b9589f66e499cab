//! Interactive prompt: reads a line, evaluates it, prints the result

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lispify::{Evaluator, VERSION};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Lispify Version {}", VERSION);
    println!("Press Ctrl+c to Exit\n");

    let mut editor = DefaultEditor::new()?;
    let mut evaluator = Evaluator::new();

    loop {
        match editor.readline("lispify> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match evaluator.eval_source(&line) {
                    Ok(value) => println!("{}", value),
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
