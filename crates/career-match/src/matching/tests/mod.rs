mod breakdown;
mod common;
mod eligibility;
