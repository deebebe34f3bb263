use std::time::Duration;

pub const WELCOME_MESSAGE: &str = "Welcome to the goal tracker!";

pub const FAREWELL_MESSAGE: &str = "See you next time!";

pub const MSG_EMPTY_GOAL: &str = "goal cannot be empty";
pub const MSG_GOAL_ADDED: &str = "goal added successfully";
pub const MSG_NO_GOALS: &str = "no goals exist";
pub const MSG_NONE_SELECTED: &str = "no goal selected";
pub const MSG_MARKED_COMPLETED: &str = "goal(s) marked completed";
pub const MSG_NO_COMPLETED: &str = "no completed goals";
pub const MSG_NO_PENDING: &str = "no pending goals";
pub const MSG_NONE_SELECTED_DELETE: &str = "no goal selected for deletion";
pub const MSG_GOALS_DELETED: &str = "goal(s) deleted successfully";

pub const LOG_FILE_PATH: &str = "/tmp/goaltrack.log";

/// Default location of the goal store. Environment variables are expanded
/// before use.
pub const STORE_FILE_PATH: &str = "$HOME/.local/share/goaltrack/goals.json";

pub const FRAME_DURATION: Duration = Duration::from_millis(100);
