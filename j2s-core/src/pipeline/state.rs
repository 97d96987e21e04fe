use std::fmt;

/// Progress of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Idle,
    Compiling,
    Packaging,
    Disassembling,
    Cleaning,
    Done,
    /// A stage failed fatally; later stages did not run.
    Aborted,
}

impl PipelineState {
    /// The state that follows this one on the success path.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Compiling),
            Self::Compiling => Some(Self::Packaging),
            Self::Packaging => Some(Self::Disassembling),
            Self::Disassembling => Some(Self::Cleaning),
            Self::Cleaning => Some(Self::Done),
            Self::Done | Self::Aborted => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }

    /// Whether a fatal error in this state aborts the run.
    pub fn can_abort(self) -> bool {
        matches!(
            self,
            Self::Compiling | Self::Packaging | Self::Disassembling
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Compiling => "compiling",
            Self::Packaging => "packaging",
            Self::Disassembling => "disassembling",
            Self::Cleaning => "cleaning",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}
