#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Feedback shown above the form once a submission has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Sent,
    Failed,
}

impl Banner {
    pub fn message(self) -> &'static str {
        match self {
            Banner::Sent => "Thank you! Your message has been sent successfully.",
            Banner::Failed => "Sorry, there was an error sending your message. Please try again.",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Banner::Sent => "contact-banner success",
            Banner::Failed => "contact-banner error",
        }
    }
}

impl SubmissionStatus {
    pub fn banner(self) -> Option<Banner> {
        match self {
            SubmissionStatus::Success => Some(Banner::Sent),
            SubmissionStatus::Error => Some(Banner::Failed),
            SubmissionStatus::Idle | SubmissionStatus::Loading => None,
        }
    }

    /// The submit button is only disabled while a request is in flight.
    pub fn accepts_submit(self) -> bool {
        self != SubmissionStatus::Loading
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SubmissionStatus::Loading => "Sending...",
            _ => "Send Message",
        }
    }
}
