use crate::surface::ChartSurface;

pub const BASE_FALLBACK: &str = "#1F6FEB";
pub const OPT_FALLBACK: &str = "#059669";
pub const PES_FALLBACK: &str = "#DC2626";
pub const GRID_COLOR: &str = "#E2E4E9";
pub const AXIS_COLOR: &str = "#D1D5DB";
pub const TEXT_COLOR: &str = "#949BA5";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub base: String,
    pub opt: String,
    pub pes: String,
    pub grid: &'static str,
    pub axis: &'static str,
    pub text: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: BASE_FALLBACK.to_string(),
            opt: OPT_FALLBACK.to_string(),
            pes: PES_FALLBACK.to_string(),
            grid: GRID_COLOR,
            axis: AXIS_COLOR,
            text: TEXT_COLOR,
        }
    }
}

impl Palette {
    /// Scenario colours come from the active theme; blank or missing variables fall back.
    pub fn resolve<S: ChartSurface + ?Sized>(surface: &S) -> Self {
        let theme = |name: &str, fallback: &str| {
            surface
                .theme_value(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            base: theme("--accent-primary", BASE_FALLBACK),
            opt: theme("--success-text", OPT_FALLBACK),
            pes: theme("--danger-text", PES_FALLBACK),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgDocument;

    #[test]
    fn theme_overrides_and_fallbacks() {
        let doc = SvgDocument::new()
            .with_theme_value("--accent-primary", "  #123456 ")
            .with_theme_value("--success-text", "   ");
        let palette = Palette::resolve(&doc);
        assert_eq!(palette.base, "#123456");
        assert_eq!(palette.opt, OPT_FALLBACK);
        assert_eq!(palette.pes, PES_FALLBACK);
        assert_eq!(palette.grid, GRID_COLOR);
    }
}
