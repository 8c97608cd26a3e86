//! Interactive session on stdin/stdout.
//!
//! Each line is parsed into an [`Input`], turned into a session event and
//! dispatched to a [`SessionRunner`]; the resulting state is rendered after
//! every command.

use std::sync::Arc;

use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use waypoint_core::{
    Event, HttpPathService, OperationStatus, PathView, Session, SessionHandle, SessionRunner,
    Snapshot, SyncFailurePolicy, ViewState, handle_show_path,
    models::{GenerationRequest, MilestoneId},
    params::{GeneratePath, PathRef},
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `new` generate a learning path
- `open ID` browse a stored path
- `expand N` show or hide details of milestone N
- `done N` mark milestone N done, or not done
- `back` leave the path
- `dismiss` hide the last error
- `help` show this list
- `quit` exit
";

/// One parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    New,
    Open(u64),
    Expand(usize),
    Done(usize),
    Back,
    Dismiss,
    Help,
    Show,
    Quit,
}

/// Parses a command line. Blank lines redraw the current view.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Input::Show);
    };
    let argument = words.next();

    let number = |name: &str| -> Result<u64, String> {
        argument
            .ok_or_else(|| format!("`{name}` needs a number"))?
            .parse::<u64>()
            .map_err(|_| format!("`{name}` needs a number"))
    };

    match command.to_lowercase().as_str() {
        "new" | "n" => Ok(Input::New),
        "open" | "o" => number("open").map(Input::Open),
        "expand" | "e" => number("expand").map(|n| Input::Expand(n as usize)),
        "done" | "d" => number("done").map(|n| Input::Done(n as usize)),
        "back" | "b" | "start-over" => Ok(Input::Back),
        "dismiss" => Ok(Input::Dismiss),
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        other => Err(format!("Unknown command `{other}`. Type `help` for a list.")),
    }
}

/// Id of the milestone shown at 1-based position `n`.
fn milestone_at(snapshot: &Snapshot, n: usize) -> Option<MilestoneId> {
    let path = snapshot.view.path()?;
    n.checked_sub(1)
        .and_then(|i| path.milestones.get(i))
        .map(|m| m.id)
}

fn render_snapshot(snapshot: &Snapshot, renderer: &TerminalRenderer) -> Result<()> {
    match &snapshot.view {
        ViewState::NoPath => {
            if let Some(error) = &snapshot.error {
                renderer.render(&OperationStatus::failure(error.as_str()).to_string())?;
            }
            renderer.render("No learning path yet. Type `new` to create one.\n")
        }
        ViewState::ActivePath { path, expanded } => {
            renderer.render(&PathView::new(path, *expanded).to_string())
        }
    }
}

type InputLines = Lines<BufReader<Stdin>>;

/// Reads the generation form. `None` when stdin closes mid-form.
async fn read_request(
    lines: &mut InputLines,
    renderer: &TerminalRenderer,
) -> Result<Option<GeneratePath>> {
    renderer.prompt("What do you want to learn?")?;
    let Some(goal) = lines.next_line().await? else {
        return Ok(None);
    };

    renderer.prompt("Experience level (beginner/intermediate/advanced) [beginner]:")?;
    let Some(level) = lines.next_line().await? else {
        return Ok(None);
    };

    renderer.prompt("Hours per week (1-5/5-10/10-20/20+) [5-10]:")?;
    let Some(commitment) = lines.next_line().await? else {
        return Ok(None);
    };

    let non_blank = |s: String| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    Ok(Some(GeneratePath {
        goal,
        experience_level: non_blank(level),
        time_commitment: non_blank(commitment),
    }))
}

async fn submit(
    handle: &SessionHandle,
    params: GeneratePath,
    renderer: &TerminalRenderer,
) -> Result<()> {
    let request = match GenerationRequest::try_from(params) {
        Ok(request) => request,
        Err(e) => return renderer.render(&OperationStatus::failure(e.to_string()).to_string()),
    };

    if let Err(e) = handle.dispatch(Event::Submit(request)).await {
        return renderer.render(&OperationStatus::failure(e.to_string()).to_string());
    }

    renderer.render("Generating your learning path...\n")?;
    handle.wait_until(|s| !s.generating).await?;
    Ok(())
}

/// Runs the session until `quit` or end of input.
pub async fn run(
    service: Arc<HttpPathService>,
    renderer: &TerminalRenderer,
    policy: SyncFailurePolicy,
) -> Result<()> {
    let session = Session::new().with_policy(policy);
    let (handle, task) = SessionRunner::spawn(session, service.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    renderer.render(HELP)?;
    render_snapshot(&handle.snapshot(), renderer)?;

    loop {
        renderer.prompt(">")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(message) => {
                renderer.render(&format!("{message}\n"))?;
                continue;
            }
        };
        debug!("Session input: {input:?}");

        let event = match input {
            Input::Quit => break,
            Input::Help => {
                renderer.render(HELP)?;
                continue;
            }
            Input::Show => None,
            Input::New => {
                if handle.snapshot().view.is_active() {
                    renderer.render("Type `back` to leave this path before starting a new one.\n")?;
                    continue;
                }
                let Some(params) = read_request(&mut lines, renderer).await? else {
                    break;
                };
                submit(&handle, params, renderer).await?;
                None
            }
            Input::Open(id) => match handle_show_path(service.as_ref(), PathRef { id }).await {
                Ok(path) => Some(Event::Open(path)),
                Err(e) => {
                    renderer.render(&OperationStatus::failure(e.user_message()).to_string())?;
                    continue;
                }
            },
            Input::Expand(n) | Input::Done(n) => {
                let Some(id) = milestone_at(&handle.snapshot(), n) else {
                    renderer.render(&format!("There is no milestone {n} to select.\n"))?;
                    continue;
                };
                if matches!(input, Input::Expand(_)) {
                    Some(Event::ToggleExpanded(id))
                } else {
                    Some(Event::ToggleCompleted(id))
                }
            }
            Input::Back => Some(Event::Back),
            Input::Dismiss => Some(Event::DismissError),
        };

        if let Some(event) = event {
            if let Err(e) = handle.dispatch(event).await {
                renderer.render(&OperationStatus::failure(e.to_string()).to_string())?;
            }
        }
        render_snapshot(&handle.snapshot(), renderer)?;
    }

    // Let in-flight milestone updates land before exiting
    handle.wait_until(Snapshot::is_idle).await?;
    drop(handle);
    task.await?;
    Ok(())
}
