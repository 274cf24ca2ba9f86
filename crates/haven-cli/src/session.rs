//! One intake over a line-oriented terminal.
//!
//! Each input line is one answer. Two commands are recognised: `/reset`
//! starts over and `/summary` prints the current snapshot as JSON. Replies
//! are streamed to the output as they are produced.

use std::io::Write;

use haven_core::models::answer::Frequency;
use haven_core::models::assessment::AssessmentData;
use haven_engine::controller::ConversationController;
use haven_engine::reply::ChunkSink;
use haven_instruments::get_instrument;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};

const RETRY_MESSAGE: &str =
    "Sorry, something went wrong on our side and your answer was not recorded. Please send it again.";

/// Run the intake until it completes or the input closes.
pub async fn run<R, W>(controller: &mut ConversationController, input: R, out: &mut W) -> eyre::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    writeln!(out, "{}", controller.opening_message())?;
    let mut lines = input.lines();

    while !controller.state().is_complete() {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            info!(
                assessment_id = %controller.state().id,
                "input closed before the intake was complete"
            );
            return Ok(());
        };

        match line.trim() {
            "/reset" => {
                controller.reset();
                writeln!(out, "\n{}", controller.opening_message())?;
                continue;
            }
            "/summary" => {
                let summary = serde_json::to_string_pretty(&controller.assessment_summary())?;
                writeln!(out, "{summary}")?;
                continue;
            }
            _ => {}
        }

        writeln!(out)?;
        let mut write_error: Option<std::io::Error> = None;
        let result = {
            let sink: &mut ChunkSink<'_> = &mut |chunk: &str| {
                if write_error.is_none()
                    && let Err(e) = out.write_all(chunk.as_bytes()).and_then(|()| out.flush())
                {
                    write_error = Some(e);
                }
            };
            controller.process_response(&line, Some(sink)).await
        };
        if let Some(e) = write_error {
            return Err(e.into());
        }

        match result {
            Ok(_) => writeln!(out)?,
            Err(e) => {
                error!(error = %e, "turn failed");
                writeln!(out, "{RETRY_MESSAGE}")?;
            }
        }
    }

    writeln!(out, "\n{}", report(&controller.state().data)?)?;
    Ok(())
}

/// Reviewer-facing summary of a finished intake.
pub fn report(data: &AssessmentData) -> eyre::Result<String> {
    let mut output = String::from("# Intake summary\n\n");

    let depression = data.depression.unwrap_or_default().all();
    let anxiety = data.anxiety.unwrap_or_default().all();
    let sections: [(&str, &[Frequency]); 2] = [("phq_a", &depression), ("gad7", &anxiety)];
    for (id, responses) in sections {
        output.push_str(&get_instrument(id)?.to_structured_input(responses));
        output.push('\n');
    }

    output.push_str("## Assessment\n\n");
    output.push_str(&serde_json::to_string_pretty(data)?);
    output.push('\n');
    Ok(output)
}
