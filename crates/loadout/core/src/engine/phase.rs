/// Phases of slot assembly, visited strictly in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssemblyPhase {
    SelectStarter,
    SelectBoots,
    FillSlots,
    Complete,
}

impl AssemblyPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssemblyPhase::SelectStarter => "select_starter",
            AssemblyPhase::SelectBoots => "select_boots",
            AssemblyPhase::FillSlots => "fill_slots",
            AssemblyPhase::Complete => "complete",
        }
    }

    /// The phase that follows this one. `Complete` is terminal.
    pub const fn next(self) -> Self {
        match self {
            AssemblyPhase::SelectStarter => AssemblyPhase::SelectBoots,
            AssemblyPhase::SelectBoots => AssemblyPhase::FillSlots,
            AssemblyPhase::FillSlots | AssemblyPhase::Complete => AssemblyPhase::Complete,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, AssemblyPhase::Complete)
    }
}
