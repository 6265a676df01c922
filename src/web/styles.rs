//! Medical-themed palette and the page stylesheet.
//!
//! Deep teal on slate, with amber for the `severity` class and rose for `urgency`.

/// Medical theme color palette.
pub struct MedicalTheme;

impl MedicalTheme {
    // === Primary Colors ===

    /// Deep teal (#0D9488)
    pub const PRIMARY: &'static str = "#0D9488";
    pub const PRIMARY_LIGHT: &'static str = "#2DD4BF";
    pub const PRIMARY_DARK: &'static str = "#0F766E";

    // === Semantic Colors ===

    pub const SUCCESS: &'static str = "#10B981";
    pub const WARNING: &'static str = "#FBBF24";
    pub const DANGER: &'static str = "#F43F5E";
    pub const INFO: &'static str = "#3B82F6";

    // === Background Colors ===

    pub const BG_DARK: &'static str = "#0F172A";
    pub const BG_SURFACE: &'static str = "#1E293B";
    pub const BG_CARD: &'static str = "#334155";

    // === Text Colors ===

    pub const TEXT_PRIMARY: &'static str = "#F8FAFC";
    pub const TEXT_SECONDARY: &'static str = "#94A3B8";
    pub const TEXT_MUTED: &'static str = "#64748B";

    /// Inline stylesheet for the page.
    #[must_use]
    pub fn stylesheet() -> String {
        format!(
            r#"
body {{ background: {bg}; color: {text}; font-family: system-ui, sans-serif; margin: 0; }}
main {{ max-width: 960px; margin: 0 auto; padding: 1.5rem; }}
h1, h2, h3 {{ color: {text}; }}
.subheader {{ color: {primary_light}; }}
.columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }}
.field {{ display: flex; flex-direction: column; margin-bottom: 0.75rem; }}
.field label {{ color: {text_secondary}; margin-bottom: 0.25rem; }}
.field input, .field select {{ background: {surface}; color: {text}; border: 1px solid {text_secondary}; padding: 0.3rem; }}
button {{ background: {primary}; color: {text}; border: 0; padding: 0.5rem 1rem; cursor: pointer; }}
button:disabled {{ background: {muted}; cursor: default; }}
button.secondary {{ background: {primary_dark}; }}
.card {{ background: {card}; border-radius: 8px; padding: 0.75rem 1rem; margin: 0.75rem 0; }}
.report-title {{ font-weight: bold; font-size: 1.1rem; color: {primary_light}; }}
.severity {{ color: {warning}; }}
.urgency {{ color: {danger}; }}
.report-section {{ background: {surface}; border-left: 4px solid {primary}; padding: 0.75rem 1rem; margin: 1rem 0; }}
.notice {{ color: {success}; }}
.busy {{ color: {info}; }}
.busy progress {{ width: 100%; }}
.disclaimer {{ color: {muted}; border-top: 1px solid {muted}; margin-top: 2rem; padding-top: 0.5rem; font-size: 0.85rem; }}
"#,
            bg = Self::BG_DARK,
            surface = Self::BG_SURFACE,
            card = Self::BG_CARD,
            text = Self::TEXT_PRIMARY,
            text_secondary = Self::TEXT_SECONDARY,
            muted = Self::TEXT_MUTED,
            primary = Self::PRIMARY,
            primary_light = Self::PRIMARY_LIGHT,
            primary_dark = Self::PRIMARY_DARK,
            success = Self::SUCCESS,
            warning = Self::WARNING,
            danger = Self::DANGER,
            info = Self::INFO,
        )
    }
}
