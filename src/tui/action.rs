/// Which output snippet a copy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    CssVariables,
    TailwindConfig,
}

/// Side effects requested by a pure state update, executed by the event
/// loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Copy(CopyTarget),
    SaveDefaults,
    Quit,
}
