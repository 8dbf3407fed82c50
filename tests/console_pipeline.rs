//! End-to-end tests of the fetch -> execute -> outcome pipeline, driven
//! the way the console front end drives it: one line at a time against a
//! single registry and task list.

use taskline::{CommandError, CommandRegistry, Outcome, TaskList};

struct Session {
    registry: CommandRegistry,
    tasks: TaskList,
}

impl Session {
    fn new() -> Self {
        Self {
            registry: CommandRegistry::standard(),
            tasks: TaskList::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: CommandRegistry::standard(),
            tasks: TaskList::with_capacity(capacity),
        }
    }

    /// Run one line, as the UI loop does, and return its outcome.
    fn run(&mut self, line: &str) -> Outcome {
        match self.registry.fetch(line) {
            Ok(command) => {
                let command = CommandRegistry::execute(command, &mut self.tasks);
                CommandRegistry::outcome_of(command.as_ref())
            }
            Err(err) => Outcome::Error(err),
        }
    }

    fn lines(&mut self, line: &str) -> Vec<String> {
        self.run(line).into_lines().expect("expected success")
    }

    fn error(&mut self, line: &str) -> CommandError {
        self.run(line).into_lines().expect_err("expected failure")
    }
}

#[test]
fn a_full_session() {
    let mut session = Session::new();

    session.lines("todo buy milk");
    session.lines("deadline return book /by 2024-06-01 18:30");
    session.lines("event team lunch /at 2024-06-03 12:00");
    session.lines("mark 2");

    assert_eq!(
        session.lines("list"),
        vec![
            "1. [T][ ] buy milk",
            "2. [D][X] return book (by: Jun 1 2024, 18:30)",
            "3. [E][ ] team lunch (at: Jun 3 2024, 12:00)",
        ]
    );

    session.lines("unmark 2");
    session.lines("delete 1");
    assert_eq!(
        session.lines("list"),
        vec![
            "1. [D][ ] return book (by: Jun 1 2024, 18:30)",
            "2. [E][ ] team lunch (at: Jun 3 2024, 12:00)",
        ]
    );
}

#[test]
fn failures_leave_the_session_usable() {
    let mut session = Session::new();

    assert!(matches!(session.error("list"), CommandError::EmptyList));
    assert!(matches!(
        session.run("nonsense"),
        Outcome::Error(CommandError::InvalidCommand(_))
    ));
    assert!(matches!(
        session.error("deadline pay rent /by eventually"),
        CommandError::Timestamp(_)
    ));
    assert!(matches!(
        session.error("delete 7"),
        CommandError::IndexOutOfRange { index: 7, size: 0 }
    ));

    // The same session still works after every failure above.
    session.lines("todo recover");
    assert_eq!(session.lines("list"), vec!["1. [T][ ] recover"]);
}

#[test]
fn blank_lines_do_nothing() {
    let mut session = Session::new();
    assert_eq!(session.run(""), Outcome::empty());
    assert_eq!(session.run("   \t "), Outcome::empty());
    assert!(session.tasks.is_empty());
}

#[test]
fn capacity_is_reported_and_respected() {
    let mut session = Session::with_capacity(3);
    session.lines("todo a");
    session.lines("todo b");
    session.lines("todo c");

    assert_eq!(session.error("todo d"), CommandError::ListFull { capacity: 3 });
    assert_eq!(session.tasks.len(), 3);

    session.lines("delete 3");
    session.lines("todo d");
    assert_eq!(session.tasks.len(), 3);
}

#[test]
fn find_spans_all_task_kinds() {
    let mut session = Session::new();
    session.lines("todo buy milk");
    session.lines("deadline buy cake /by 2024-06-01");
    session.lines("todo clean house");

    assert_eq!(
        session.lines("find buy"),
        vec![
            "[T][ ] buy milk",
            "[D][ ] buy cake (by: Jun 1 2024, 00:00)",
        ]
    );
    assert_eq!(session.lines("find nothing matches this"), Vec::<String>::new());
}

#[test]
fn exit_ends_the_session_with_a_farewell() {
    let mut session = Session::new();
    let command = session.registry.fetch("bye").unwrap();
    let command = CommandRegistry::execute(command, &mut session.tasks).unwrap();
    assert!(command.requests_exit());
    assert_eq!(
        CommandRegistry::outcome_of(Some(&command)).into_lines().unwrap(),
        vec!["Goodbye."]
    );
}
