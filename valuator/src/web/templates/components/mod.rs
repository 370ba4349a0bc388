pub(crate) mod client;
pub(crate) mod footer;
pub(crate) mod help_tooltip;
pub(crate) mod numbers;
pub(crate) mod scenario_table;
