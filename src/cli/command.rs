use crate::error::{AppError, AppResult};
use crate::views::SessionForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Login { email: String, password: String },
    Register { email: String, first_name: String, last_name: String, password: String },
    Logout,
    Sessions,
    Session(u64),
    Participate(u64),
    Unparticipate(u64),
    Create(SessionForm),
    Update(u64, SessionForm),
    Delete(u64),
    Teachers,
    Me,
    DeleteAccount,
    Back,
    Quit,
}

pub const USAGE: &[&str] = &[
    "help                                             show this help",
    "status                                           api url, identity and current screen",
    "login <email> <password>                         log in",
    "register <email> <first> <last> <password>       create an account",
    "logout                                           log out",
    "sessions                                         list sessions",
    "session <id>                                     session detail",
    "participate <id> | unparticipate <id>            join or leave a session",
    "create <date> <teacher_id> <name> -- <text>      new session (admin)",
    "update <id> <date> <teacher_id> <name> -- <text> edit a session (admin)",
    "delete <id>                                      delete a session (admin)",
    "teachers                                         list teachers",
    "me | delete-account                              your account",
    "back                                             previous screen",
    "quit | exit                                      leave",
];

fn usage(text: &str) -> AppError {
    AppError::validation("usage".to_string(), format!("usage: {}", text))
}

fn id_arg(raw: Option<&str>, text: &str) -> AppResult<u64> {
    raw.and_then(|r| r.parse().ok()).ok_or_else(|| usage(text))
}

/// `<date> <teacher_id> <name...> -- <description...>`
fn form_args(rest: &str, text: &str) -> AppResult<SessionForm> {
    let (head, description) = rest.split_once(" -- ").ok_or_else(|| usage(text))?;
    let mut words = head.split_whitespace();
    let date = words.next().ok_or_else(|| usage(text))?.to_string();
    let teacher_id = Some(id_arg(words.next(), text)?);
    let name = words.collect::<Vec<_>>().join(" ");
    Ok(SessionForm { name, date, teacher_id, description: description.trim().to_string() })
}

/// Parse one shell line. Keywords are case-insensitive.
pub fn parse(line: &str) -> AppResult<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();
    let cmd = match keyword.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "status" => Command::Status,
        "login" => match args.as_slice() {
            [email, password] => Command::Login { email: email.to_string(), password: password.to_string() },
            _ => return Err(usage("login <email> <password>")),
        },
        "register" => match args.as_slice() {
            [email, first, last, password] => Command::Register {
                email: email.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                password: password.to_string(),
            },
            _ => return Err(usage("register <email> <first> <last> <password>")),
        },
        "logout" => Command::Logout,
        "sessions" | "list" => Command::Sessions,
        "session" | "detail" => Command::Session(id_arg(args.first().copied(), "session <id>")?),
        "participate" => Command::Participate(id_arg(args.first().copied(), "participate <id>")?),
        "unparticipate" => Command::Unparticipate(id_arg(args.first().copied(), "unparticipate <id>")?),
        "create" => Command::Create(form_args(rest, "create <date> <teacher_id> <name> -- <description>")?),
        "update" => {
            let text = "update <id> <date> <teacher_id> <name> -- <description>";
            let (id, tail) = rest.split_once(char::is_whitespace).ok_or_else(|| usage(text))?;
            Command::Update(id_arg(Some(id), text)?, form_args(tail.trim_start(), text)?)
        }
        "delete" => Command::Delete(id_arg(args.first().copied(), "delete <id>")?),
        "teachers" => Command::Teachers,
        "me" => Command::Me,
        "delete-account" => Command::DeleteAccount,
        "back" => Command::Back,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AppError::validation(
                "unknown_command".to_string(),
                format!("unknown command '{}', type 'help'", other),
            ))
        }
    };
    Ok(cmd)
}
