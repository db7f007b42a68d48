mod common;

mod eligibility;
mod intake;
mod urgency;
