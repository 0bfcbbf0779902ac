#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    ConfigModuleDefaults,
    PromptSelectModules,
    PromptIdleThreshold,
    PromptIdleBreakThreshold,
    PromptPollInterval,
    PromptDefaultSphere,
    PromptDefaultProject,
    PromptDefaultAction,

    // === SESSION MESSAGES ===
    SessionStarted(String),       // start time
    SessionEnded(String, String), // end time, total duration
    SessionAlreadyActive(String), // start time of the live session
    SessionDeleted(String),       // date + start time
    SessionNotFound(usize),       // list index
    ConfirmDeleteSession(String), // date + start time
    NoSessionsFound,
    NoSessionsForFilter,

    // === TRACKER MESSAGES ===
    TrackerStarted {
        idle_threshold: u64,
        idle_break_threshold: u64,
        poll_interval: u64,
    },
    TrackerStopped,
    TrackerHint,
    TrackerReceivedCtrlC,
    TrackerCtrlCListenFailed(String),
    BreakStarted(String),     // start time
    BreakEnded(String),       // end time
    AutoBreakStarted(String), // start time
    InputClockSkew(f64, f64), // reported ts, clamped-to ts

    // === TAGGING MESSAGES ===
    TagApplied(String),        // tag name
    TagSkippedDefaults(String), // default tag name
    NoUntaggedPeriods,
    PromptSelectSession,
    PromptSelectSphere,
    PromptSelectProject,
    PromptSelectAction,
    PromptSelectSecondary,
    PromptPeriodAction,
    PromptComment,
    PromptSecondaryPercentage,
    InvalidPercentage(u8),
    TaggingCompleted(String), // date + start time

    // === REPORT MESSAGES ===
    ReportHeader(String), // filter description

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // file path
    ExportNothingToDo,

    // === STORE MESSAGES ===
    SessionsFileMalformed(String), // file path
    SessionSaveFailed(String),     // error text
}
