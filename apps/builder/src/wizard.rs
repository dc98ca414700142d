//! Multi-step form flow as an explicit state machine.
//!
//! The four wizard steps mirror the build screen: basic info, professional
//! details, skills, education. Navigation clamps at both ends: there is no
//! way to step outside the range, and completing the last step is signalled
//! by the caller invoking preview/export, not by a fifth step.

use crate::i18n::BuildTranslations;
use crate::models::FormData;

/// One step of the build flow, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    Professional,
    Skills,
    Education,
}

impl Step {
    pub const COUNT: u8 = 4;

    /// 1-based position shown in the step timeline.
    pub fn number(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Professional => 2,
            Step::Skills => 3,
            Step::Education => 4,
        }
    }

    /// Localized timeline label for this step.
    pub fn label(&self, t: &'static BuildTranslations) -> &'static str {
        match self {
            Step::BasicInfo => t.step1,
            Step::Professional => t.step2,
            Step::Skills => t.step3,
            Step::Education => t.step4,
        }
    }

    fn next(&self) -> Option<Step> {
        match self {
            Step::BasicInfo => Some(Step::Professional),
            Step::Professional => Some(Step::Skills),
            Step::Skills => Some(Step::Education),
            Step::Education => None,
        }
    }

    fn prev(&self) -> Option<Step> {
        match self {
            Step::BasicInfo => None,
            Step::Professional => Some(Step::BasicInfo),
            Step::Skills => Some(Step::Professional),
            Step::Education => Some(Step::Skills),
        }
    }
}

/// The build flow: current step plus the form record being filled in.
/// The record is handed immutably to the composer at export time.
#[derive(Debug, Default)]
pub struct Wizard {
    step_index: u8,
    pub form: FormData,
}

impl Wizard {
    pub fn new() -> Self {
        Wizard::default()
    }

    pub fn step(&self) -> Step {
        match self.step_index {
            0 => Step::BasicInfo,
            1 => Step::Professional,
            2 => Step::Skills,
            _ => Step::Education,
        }
    }

    /// Advances to the next step. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        match self.step().next() {
            Some(step) => {
                self.step_index = step.number() - 1;
                true
            }
            None => false,
        }
    }

    /// Goes back one step. Returns whether the step changed.
    pub fn prev(&mut self) -> bool {
        match self.step().prev() {
            Some(step) => {
                self.step_index = step.number() - 1;
                true
            }
            None => false,
        }
    }

    pub fn is_final_step(&self) -> bool {
        self.step() == Step::Education
    }

    /// Fraction of the flow completed, driving the progress bar.
    pub fn progress(&self) -> f32 {
        f32::from(self.step().number()) / f32::from(Step::COUNT)
    }

    /// Draft persistence is an external stub; the flow only produces the
    /// localized confirmation message.
    pub fn save_draft(&self, t: &'static BuildTranslations) -> &'static str {
        t.draft_saved
    }
}
