//! Assistant CLI command

use crate::error::TrackerResult;
use crate::services::respond;

/// Handle the `ask` command; prints nothing for an empty question
pub fn handle_ask_command(question: &[String]) -> TrackerResult<()> {
    if let Some(topic) = respond(&question.join(" ")) {
        println!("{}", topic.reply());
    }
    Ok(())
}
