//! Banner and closing summary for the local AI setup.

use crate::ui::UserInterface;

/// Banner shown before the first step.
pub const BANNER: &str = "*** Memorai Local AI Setup";

const TIPS: &[&str] = &[
    "Set PYTHON_PATH environment variable if Python is not in PATH",
    "The model will be cached locally for future use",
    "Fallback to keyword search (Tier 3) if local AI fails",
];

/// Print the banner.
pub fn show_banner(ui: &mut dyn UserInterface) {
    ui.show_header(BANNER);
}

/// Print the success summary with usage tips.
pub fn show_success(ui: &mut dyn UserInterface) {
    ui.message("");
    ui.success("Local AI setup completed successfully!");
    ui.info("Memorai can now run with local embeddings (Tier 2 - Smart Memory)");
    ui.message("");
    ui.info("Tips:");
    for tip in TIPS {
        ui.message(&format!("  • {}", tip));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn banner_names_product() {
        let mut ui = MockUI::new();
        show_banner(&mut ui);
        assert_eq!(ui.headers(), ["*** Memorai Local AI Setup"]);
    }

    #[test]
    fn success_summary_contains_tips() {
        let mut ui = MockUI::new();
        show_success(&mut ui);

        assert!(ui.has_success("Local AI setup completed successfully!"));
        assert!(ui.infos().iter().any(|i| i.contains("Tier 2")));
        assert!(ui.messages().iter().any(|m| m.contains("PYTHON_PATH")));
        assert!(ui.messages().iter().any(|m| m.contains("Tier 3")));
    }
}
