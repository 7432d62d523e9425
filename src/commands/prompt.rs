//! Deploy confirmation
//!
//! Asks `(y/n)` after the data file is written. Only a `y` deploys; an
//! answer that is not valid UTF-8 also counts as `y`. Piped stdin is read
//! as the answer, so `echo y | practice-log` deploys.

use std::io::{self, BufRead};

use dialoguer::Input;
use is_terminal::IsTerminal;

const PROMPT: &str = "❓ Data updated. Deploy the site now? (y/n)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployDecision {
    Deploy,
    Skip,
}

/// Decide from flags, otherwise from the user's answer on stdin
pub fn decide(yes: bool, no_deploy: bool, json: bool) -> DeployDecision {
    if yes {
        return DeployDecision::Deploy;
    }
    if no_deploy || json {
        return DeployDecision::Skip;
    }

    println!("\n--------------------------------");
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let answer = Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::from);
        interpret_answer(answer)
    } else {
        println!("{}", PROMPT);
        interpret_answer(read_answer(&mut stdin.lock()))
    }
}

/// Read one answer line; end of input is an empty answer
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

/// Map the raw answer to a decision
pub fn interpret_answer(answer: io::Result<String>) -> DeployDecision {
    match answer {
        Ok(text) if text.trim().eq_ignore_ascii_case("y") => DeployDecision::Deploy,
        Ok(_) => DeployDecision::Skip,
        Err(err) if err.kind() == io::ErrorKind::InvalidData => DeployDecision::Deploy,
        Err(_) => DeployDecision::Skip,
    }
}
