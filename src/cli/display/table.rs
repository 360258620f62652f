//! Table rendering for CLI output

use super::colors::table_color_to_colored_str;
use super::{ColorTheme, RevisionIcon};
use crate::domain::manifest::ServicePlan;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the per-service revision plan of a preview
    pub fn render_plan(&self, slug: &str, plans: &[ServicePlan]) -> String {
        if plans.is_empty() {
            return format!("No services configured for preview '{}'", slug);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("APPLICATION").set_alignment(CellAlignment::Left),
                Cell::new("SERVICE").set_alignment(CellAlignment::Left),
                Cell::new("REVISION").set_alignment(CellAlignment::Left),
                Cell::new("MODE").set_alignment(CellAlignment::Center),
                Cell::new("PARAMETERS").set_alignment(CellAlignment::Left),
            ]);

        for plan in plans {
            let color = self.theme.get_revision_color(&plan.revision);
            let parameters = plan
                .parameters
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect::<Vec<_>>()
                .join("\n");

            table.add_row(vec![
                Cell::new(&plan.application).fg(self.theme.info),
                Cell::new(&plan.service),
                Cell::new(plan.revision.target_revision()).fg(color),
                Cell::new(format!(
                    "{} {}",
                    RevisionIcon::get_revision_icon(&plan.revision),
                    RevisionIcon::get_mode_text(&plan.revision)
                ))
                .fg(color),
                Cell::new(parameters).fg(self.theme.muted),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Preview {} {} ─╮\n",
            slug,
            format!("[{} services]", plans.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} Pinned  {} Track main\n",
            RevisionIcon::PINNED.color(table_color_to_colored_str(self.theme.pinned)),
            RevisionIcon::TRACKING.color(table_color_to_colored_str(self.theme.tracking))
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::HelmParameter;
    use crate::domain::manifest::Revision;

    #[test]
    fn test_render_empty_plan() {
        let renderer = TableRenderer::new();
        let output = renderer.render_plan("my-feature", &[]);
        assert!(output.contains("No services configured for preview 'my-feature'"));
    }

    #[test]
    fn test_render_plan() {
        let renderer = TableRenderer::new();
        let plans = vec![
            ServicePlan {
                application: "my-feature-backend-1".to_string(),
                service: "backend-1".to_string(),
                revision: Revision::Pinned("abc123".to_string()),
                parameters: vec![
                    HelmParameter::new("image.tag", "abc123"),
                    HelmParameter::new("database.name", "backend-1-my-feature"),
                ],
            },
            ServicePlan {
                application: "my-feature-front".to_string(),
                service: "front".to_string(),
                revision: Revision::TrackMain,
                parameters: vec![HelmParameter::new("image.tag", "$ARGOCD_APP_REVISION")],
            },
        ];

        let output = renderer.render_plan("my-feature", &plans);
        assert!(output.contains("my-feature-backend-1"));
        assert!(output.contains("abc123"));
        assert!(output.contains("database.name=backend-1-my-feature"));
        assert!(output.contains("Track main"));
        assert!(output.contains("main"));
    }
}
