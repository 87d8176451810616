//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{HELP_TEXT, WORKSPACE_ROOT};
use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::models::OutputLine;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command and return its result.
///
/// Never fails: a [`ShellError`] is rendered as a single error line. The
/// working directory change of a successful `cd` is returned as an effect,
/// not applied here.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem (read-only)
/// * `current_path` - Working directory, an absolute session path
pub fn execute_command(cmd: Command, fs: &VirtualFs, current_path: &str) -> CommandResult {
    let result = match cmd {
        Command::Help => Ok(CommandResult::output(
            HELP_TEXT.lines().map(OutputLine::text).collect(),
        )),
        Command::Ls(path) => execute_ls(path, fs, current_path),
        Command::Cd(path) => execute_cd(path, fs, current_path),
        Command::Cat(file) => execute_cat(file, fs, current_path),
        Command::Pwd => Ok(CommandResult::output(vec![OutputLine::text(current_path)])),
        Command::Echo(text) => Ok(CommandResult::output(vec![OutputLine::text(text)])),
        Command::Clear => Ok(CommandResult::clear()),
        Command::Unknown(verb) => Err(ShellError::CommandNotFound(verb)),
    };

    result.unwrap_or_else(|e| CommandResult::output(vec![OutputLine::error(e.to_string())]))
}

/// Join a typed path onto the working directory.
///
/// The working directory is not re-validated; it is well-formed because it
/// only ever comes from the workspace root or a successful `cd`.
fn join_path(current_path: &str, path: &PathArg) -> String {
    format!("{}/{}", current_path, path)
}

/// Parent of the working directory, or `None` at the workspace root.
fn parent_directory(current_path: &str) -> Option<String> {
    let floor = WORKSPACE_ROOT.split('/').count();
    let mut parts: Vec<&str> = current_path.split('/').collect();
    if parts.len() <= floor {
        return None;
    }
    parts.pop();
    Some(parts.join("/"))
}

/// Execute `ls` command.
fn execute_ls(
    path: Option<PathArg>,
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    let target = match path {
        Some(p) => join_path(current_path, &p),
        None => current_path.to_string(),
    };

    let entries = fs
        .folder_at(&target)
        .ok_or(ShellError::NoSuchDirectory(target.clone()))?;

    Ok(CommandResult::output(
        entries
            .iter()
            .map(|node| OutputLine::list_entry(node.name(), node.kind()))
            .collect(),
    ))
}

/// Execute `cd` command.
fn execute_cd(
    path: PathArg,
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    if path.is_empty() {
        return Ok(CommandResult::empty());
    }

    if path == ".." {
        return Ok(parent_directory(current_path)
            .map(CommandResult::change_directory)
            .unwrap_or_else(CommandResult::empty));
    }

    let target = join_path(current_path, &path);
    if fs.folder_at(&target).is_some() {
        Ok(CommandResult::change_directory(target))
    } else {
        Err(ShellError::NoSuchDirectory(target))
    }
}

/// Execute `cat` command.
fn execute_cat(
    file: PathArg,
    fs: &VirtualFs,
    current_path: &str,
) -> Result<CommandResult, ShellError> {
    let target = join_path(current_path, &file);

    match fs.node_at(&target).and_then(|node| node.content()) {
        Some(content) => Ok(CommandResult::output(vec![OutputLine::text(content)])),
        None => Err(ShellError::NoSuchFile(target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Effect;

    const ROOT: &str = "/home/project";

    fn run(cmd: Command, cwd: &str) -> CommandResult {
        execute_command(cmd, &VirtualFs::seed(), cwd)
    }

    fn ls(path: Option<&str>, cwd: &str) -> Vec<String> {
        run(Command::Ls(path.map(PathArg::new)), cwd).plain_lines()
    }

    #[test]
    fn test_ls_workspace_root() {
        assert_eq!(
            ls(None, ROOT),
            vec!["d src", "- package.json", "- tsconfig.json", "- vite.config.ts"]
        );
    }

    #[test]
    fn test_ls_relative_folder() {
        assert_eq!(
            ls(Some("src"), ROOT),
            vec!["d components", "- App.tsx", "- main.tsx", "- index.css"]
        );
        assert_eq!(
            ls(Some("src/components"), ROOT),
            vec![
                "- Sidebar.tsx",
                "- Terminal.tsx",
                "- CodeEditor.tsx",
                "- AIChatPopup.tsx"
            ]
        );
        assert_eq!(ls(Some("components"), "/home/project/src").len(), 4);
    }

    #[test]
    fn test_ls_trailing_slash() {
        assert_eq!(ls(Some("src/"), ROOT).len(), 4);
    }

    #[test]
    fn test_ls_missing() {
        let result = run(Command::Ls(Some(PathArg::new("nope"))), ROOT);
        assert_eq!(
            result.plain_lines(),
            vec!["No such directory: /home/project/nope"]
        );
        assert_eq!(result.effect, None);
    }

    #[test]
    fn test_ls_file_is_not_a_directory() {
        assert_eq!(
            ls(Some("package.json"), ROOT),
            vec!["No such directory: /home/project/package.json"]
        );
    }

    #[test]
    fn test_ls_outside_workspace() {
        assert_eq!(ls(None, "/home"), vec!["No such directory: /home"]);
    }

    #[test]
    fn test_cd_into_folder() {
        let result = run(Command::Cd(PathArg::new("src")), ROOT);
        assert_eq!(
            result.effect,
            Some(Effect::ChangeDirectory("/home/project/src".to_string()))
        );
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cd_parent() {
        let result = run(Command::Cd(PathArg::new("..")), "/home/project/src/components");
        assert_eq!(
            result.effect,
            Some(Effect::ChangeDirectory("/home/project/src".to_string()))
        );

        let result = run(Command::Cd(PathArg::new("..")), "/home/project/src");
        assert_eq!(
            result.effect,
            Some(Effect::ChangeDirectory(ROOT.to_string()))
        );
    }

    #[test]
    fn test_cd_parent_at_root_is_noop() {
        let result = run(Command::Cd(PathArg::new("..")), ROOT);
        assert_eq!(result, CommandResult::empty());
    }

    #[test]
    fn test_cd_trailing_slash_is_kept() {
        let result = run(Command::Cd(PathArg::new("src/")), ROOT);
        assert_eq!(
            result.effect,
            Some(Effect::ChangeDirectory("/home/project/src/".to_string()))
        );

        // `..` first drops the empty trailing segment.
        let result = run(Command::Cd(PathArg::new("..")), "/home/project/src/");
        assert_eq!(
            result.effect,
            Some(Effect::ChangeDirectory("/home/project/src".to_string()))
        );
    }

    #[test]
    fn test_cd_missing() {
        let result = run(Command::Cd(PathArg::new("nonexistent")), ROOT);
        assert_eq!(
            result.plain_lines(),
            vec!["No such directory: /home/project/nonexistent"]
        );
        assert_eq!(result.effect, None);
    }

    #[test]
    fn test_cd_into_file_fails() {
        let result = run(Command::Cd(PathArg::new("package.json")), ROOT);
        assert_eq!(
            result.plain_lines(),
            vec!["No such directory: /home/project/package.json"]
        );
    }

    #[test]
    fn test_cd_without_path_is_noop() {
        assert_eq!(run(Command::Cd(PathArg::new("")), ROOT), CommandResult::empty());
    }

    #[test]
    fn test_cat_file() {
        let result = run(Command::Cat(PathArg::new("package.json")), ROOT);
        assert_eq!(result.output.len(), 1);
        assert_eq!(
            result.plain_lines(),
            vec!["{\n  \"name\": \"zai-ide\",\n  \"version\": \"1.0.0\"\n}"]
        );
    }

    #[test]
    fn test_cat_nested_file() {
        let result = run(Command::Cat(PathArg::new("components/Terminal.tsx")), "/home/project/src");
        assert_eq!(result.plain_lines(), vec!["// Terminal component code"]);
    }

    #[test]
    fn test_cat_folder_or_missing() {
        assert_eq!(
            run(Command::Cat(PathArg::new("src")), ROOT).plain_lines(),
            vec!["No such file: /home/project/src"]
        );
        assert_eq!(
            run(Command::Cat(PathArg::new("missing.txt")), ROOT).plain_lines(),
            vec!["No such file: /home/project/missing.txt"]
        );
        assert_eq!(
            run(Command::Cat(PathArg::new("")), ROOT).plain_lines(),
            vec!["No such file: /home/project/"]
        );
    }

    #[test]
    fn test_cat_empty_file() {
        let fs = VirtualFs::seed().replace_file_content("main.tsx", "");
        let result = execute_command(Command::Cat(PathArg::new("main.tsx")), &fs, "/home/project/src");
        assert_eq!(result.plain_lines(), vec![""]);
    }

    #[test]
    fn test_pwd() {
        assert_eq!(run(Command::Pwd, "/home/project/src").plain_lines(), vec!["/home/project/src"]);
    }

    #[test]
    fn test_echo() {
        assert_eq!(
            run(Command::Echo("a b c".to_string()), ROOT).plain_lines(),
            vec!["a b c"]
        );
        assert_eq!(run(Command::Echo(String::new()), ROOT).plain_lines(), vec![""]);
    }

    #[test]
    fn test_help() {
        let lines = run(Command::Help, ROOT).plain_lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "  help - Show this help message");
        assert_eq!(lines[7], "  clear - Clear the terminal screen");
    }

    #[test]
    fn test_clear() {
        let result = run(Command::Clear, ROOT);
        assert_eq!(result.effect, Some(Effect::ClearScreen));
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            run(Command::Unknown("foo".to_string()), ROOT).plain_lines(),
            vec!["Command not found: foo"]
        );
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(parent_directory("/home/project"), None);
        assert_eq!(parent_directory("/home/project/a/b"), Some("/home/project/a".to_string()));
    }
}
