// In src/command.rs

use thiserror::Error;

use crate::client_api::RecipeDraft;

pub const HELP: &str = "\
Commands:
  list                                   show all recipes
  get <id>                               show one recipe
  create <name> | <ingredient>, ...      add a recipe
  update <id> <name> | <ingredient>, ... replace a recipe
  delete <id>                            remove a recipe
  health                                 check the server
  help                                   show this message
  quit                                   leave the shell";

/// One line typed into the client shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Get(String),
    Create(RecipeDraft),
    Update(String, RecipeDraft),
    Delete(String),
    Health,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Splits `<name> | <a>, <b>` into a draft. Ingredients are optional.
fn parse_draft(text: &str, usage: &'static str) -> Result<RecipeDraft, ParseError> {
    let (name, ingredients) = match text.split_once('|') {
        Some((name, rest)) => (name.trim(), rest),
        None => (text.trim(), ""),
    };
    if name.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    let ingredients = ingredients
        .split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(String::from)
        .collect();
    Ok(RecipeDraft::new(name, ingredients))
}

fn single_id(args: &str, usage: &'static str) -> Result<String, ParseError> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(id), None) => Ok(id.to_string()),
        _ => Err(ParseError::Usage(usage)),
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (verb, args) = match line.split_once(char::is_whitespace) {
            Some((verb, args)) => (verb, args.trim()),
            None => (line, ""),
        };
        match verb {
            "list" => Ok(Command::List),
            "get" => single_id(args, "get <id>").map(Command::Get),
            "create" => parse_draft(args, "create <name> | <ingredient>, ...").map(Command::Create),
            "update" => {
                let usage = "update <id> <name> | <ingredient>, ...";
                let (id, rest) = args.split_once(char::is_whitespace).ok_or(ParseError::Usage(usage))?;
                parse_draft(rest, usage).map(|draft| Command::Update(id.to_string(), draft))
            }
            "delete" => single_id(args, "delete <id>").map(Command::Delete),
            "health" => Ok(Command::Health),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cmd = Command::parse("create cake | 2 cups flour, 2 eggs").unwrap();
        assert_eq!(
            cmd,
            Command::Create(RecipeDraft::new(
                "cake",
                vec!["2 cups flour".into(), "2 eggs".into()]
            ))
        );

        let cmd = Command::parse("create  plain water ").unwrap();
        assert_eq!(cmd, Command::Create(RecipeDraft::new("plain water", vec![])));
    }

    #[test]
    fn test_parse_update() {
        let cmd = Command::parse("update 42 toast | bread,, butter ").unwrap();
        assert_eq!(
            cmd,
            Command::Update(
                "42".into(),
                RecipeDraft::new("toast", vec!["bread".into(), "butter".into()])
            )
        );
        assert!(matches!(Command::parse("update 42"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(Command::parse("get abc"), Ok(Command::Get("abc".into())));
        assert_eq!(Command::parse("delete abc"), Ok(Command::Delete("abc".into())));
        assert!(matches!(Command::parse("delete"), Err(ParseError::Usage(_))));
        assert!(matches!(Command::parse("get a b"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(Command::parse("bake"), Err(ParseError::Unknown("bake".into())));
        assert!(matches!(Command::parse("create | eggs"), Err(ParseError::Usage(_))));
    }
}
