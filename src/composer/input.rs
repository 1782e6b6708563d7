/// One line of user input, interpreted against the compose form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    To(String),
    Subject(String),
    Body(String),
    Send,
    Show,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
:to <address>    set the recipient
:subject <text>  set the subject
:send            classify the message body
:show            redraw the form
:clear           discard the draft
:quit            leave
Any other line is appended to the message body (start it with :: for a literal colon).";

pub fn parse_line(line: &str) -> FormCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(escaped) = line.strip_prefix("::") {
        return FormCommand::Body(format!(":{escaped}"));
    }
    let Some(command) = line.strip_prefix(':') else {
        return FormCommand::Body(line.to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match name {
        "to" => FormCommand::To(rest.to_string()),
        "subject" => FormCommand::Subject(rest.to_string()),
        "send" => FormCommand::Send,
        "show" => FormCommand::Show,
        "clear" => FormCommand::Clear,
        "help" => FormCommand::Help,
        "quit" | "q" => FormCommand::Quit,
        other => FormCommand::Unknown(other.to_string()),
    }
}
