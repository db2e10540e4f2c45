pub const CTA_HEADING: &str = "Ready to transform your workflow?";
pub const CTA_BLURB: &str =
    "Join thousands of professionals who are already using RE-ASSIST to accelerate their work.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaButton {
    StartFreeTrial,
    ScheduleDemo,
}

impl CtaButton {
    pub const ALL: [CtaButton; 2] = [CtaButton::StartFreeTrial, CtaButton::ScheduleDemo];

    pub fn label(self) -> &'static str {
        match self {
            CtaButton::StartFreeTrial => "Start Free Trial",
            CtaButton::ScheduleDemo => "Schedule Demo",
        }
    }

    /// Landing-page section the button scrolls to. Schedule Demo has none.
    pub fn section_target(self) -> Option<&'static str> {
        match self {
            CtaButton::StartFreeTrial => Some("join"),
            CtaButton::ScheduleDemo => None,
        }
    }
}
