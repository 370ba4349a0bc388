//! Page behaviour for results pages: chart bootstrap from the embedded payload and the
//! help tooltips. Everything runs against small DOM traits; the browser bindings live in
//! `dom` behind the `hydrate` feature.

use cfg_if::cfg_if;

pub mod charts;
pub mod error;
pub mod tooltip;

pub use charts::{load_charts, ChartLoad, ChartPage};
pub use error::{AppError, AppResult};
pub use tooltip::{Click, HelpDom, HelpTooltips};

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        pub mod dom;
        pub use dom::mount;
    }
}
