use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use uuid::Uuid;

use crate::chat::{Session, Turn, TurnController};
use crate::core::AppConfig;
use crate::openai::OpenAiClient;

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let turns = TurnController::new(Arc::new(OpenAiClient::from_config(&config)));
    let mut session = Session::new(&Uuid::new_v4().to_string(), &config.system_message);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add line to REPL history: {}", e);
                }
                match turns.next_turn(&mut session, &line).await {
                    Ok(Turn::Completed { .. }) => {
                        // Print the bubble for the reply that was just appended
                        if let Some(bubble) = session.transcript().last() {
                            println!("{}", bubble);
                        }
                    }
                    Ok(Turn::Skipped) => {}
                    // The human message stays in the history, retrying
                    // just means sending another message
                    Err(e) => eprintln!("Something went wrong: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
