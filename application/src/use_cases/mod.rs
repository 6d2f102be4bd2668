//! Use cases (application services)

pub mod fact_check;
pub mod fallback;
pub mod judge_panel;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
