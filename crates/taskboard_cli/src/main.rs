//! CLI driver for a local task board.
//!
//! Usage: `taskboard_cli <db_path> [list | add <project> <title> [description]
//! | delete <project> <task> | move <task> <from> <to>]`
//!
//! Logs go to a `logs/` directory next to the database file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use taskboard_core::{
    default_log_level, init_logging, BoardManager, SqliteSlotStore, StateStorage,
};

const USAGE: &str = "usage: taskboard_cli <db_path> [list | add <project> <title> [description] | delete <project> <task> | move <task> <from> <to>]";
const LOG_DIR_NAME: &str = "logs";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((db_path, command)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match log_dir_for(Path::new(db_path)) {
        Ok(log_dir) => {
            if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    let mut board = BoardManager::open(StateStorage::new(SqliteSlotStore::new(db_path)));
    let command: Vec<&str> = command.iter().map(String::as_str).collect();

    match command.as_slice() {
        [] | ["list"] => {}
        ["add", project, title] => {
            if let Err(err) = board.add_task(project, title, None) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
        ["add", project, title, description] => {
            if let Err(err) = board.add_task(project, title, Some(*description)) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
        ["delete", project, task] => board.delete_task(project, task),
        ["move", task, from, to] => board.move_task(task, from, to),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    }

    for project in board.projects() {
        println!("{} {} ({})", project.id, project.name, project.task_count());
        for task in &project.tasks {
            if task.description.is_empty() {
                println!("  {} {}", task.id, task.title);
            } else {
                println!("  {} {} - {}", task.id, task.title, task.description);
            }
        }
    }
    ExitCode::SUCCESS
}

/// Absolute `logs/` directory beside `db_path`.
fn log_dir_for(db_path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    let parent = absolute.parent().unwrap_or(&absolute);
    Ok(parent.join(LOG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::log_dir_for;
    use std::path::Path;

    #[test]
    fn log_dir_sits_next_to_absolute_db_path() {
        let log_dir = log_dir_for(Path::new("/var/lib/board/taskboard.sqlite3")).unwrap();
        assert_eq!(log_dir, Path::new("/var/lib/board/logs"));
    }

    #[test]
    fn relative_db_path_resolves_against_current_dir() {
        let log_dir = log_dir_for(Path::new("taskboard.sqlite3")).unwrap();
        assert!(log_dir.is_absolute());
        assert_eq!(log_dir, std::env::current_dir().unwrap().join("logs"));
    }

    #[test]
    fn logging_starts_for_db_path_and_writes_a_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = log_dir_for(&dir.path().join("taskboard.sqlite3")).unwrap();

        taskboard_core::init_logging("info", log_dir.to_str().unwrap()).unwrap();
        log::logger().flush();

        let has_log = std::fs::read_dir(&log_dir)
            .unwrap()
            .filter_map(Result::ok)
            .any(|entry| entry.file_name().to_string_lossy().starts_with("taskboard"));
        assert!(has_log, "expected a taskboard log file in {}", log_dir.display());
    }
}
