pub(crate) mod home_page;
pub(crate) mod results_page;
