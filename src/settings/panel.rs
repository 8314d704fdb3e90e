use super::{CONTROLS, Control, Section, visibility};
use crate::{
    cli::formatting::{format_command, format_description, format_header, format_subheader},
    config::{ClockConfig, ConfigField},
};

const LABEL_WIDTH: usize = 22;

/// One visible control with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    /// The control.
    pub control: &'static Control,
    /// Current value as displayed.
    pub value: String,
}

/// A section heading and its visible rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSection {
    /// The section.
    pub section: Section,
    /// Visible controls of the section, in display order.
    pub rows: Vec<PanelRow>,
}

/// Snapshot of the settings pane for one config.
///
/// Only visible controls are included. Sections are kept even when all of
/// their controls are hidden so the layout stays stable.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPanel {
    sections: Vec<PanelSection>,
}

impl SettingsPanel {
    /// Groups the controls visible for `config` by section.
    pub fn new(config: &ClockConfig) -> Self {
        let sections = Section::ALL
            .into_iter()
            .map(|section| PanelSection {
                section,
                rows: CONTROLS
                    .iter()
                    .filter(|control| control.section == section)
                    .filter(|control| visibility::is_visible(control.field, config))
                    .map(|control| PanelRow {
                        control,
                        value: control.display_value(config),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[PanelSection] {
        &self.sections
    }

    /// Fields whose control is shown.
    pub fn visible_fields(&self) -> Vec<ConfigField> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter().map(|row| row.control.field))
            .collect()
    }

    /// Renders the pane as styled terminal lines.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![
            format_header("Customize Clock"),
            format_description("set <field> <value> | s: close | q: quit"),
        ];

        for section in &self.sections {
            lines.push(String::new());
            lines.push(format_subheader(&section.section.title().to_uppercase()));

            for row in &section.rows {
                lines.push(format!(
                    "  {:<LABEL_WIDTH$}{}  {}",
                    row.control.label,
                    row.value,
                    format_description(&format!(
                        "{} {}",
                        row.control.field.key(),
                        row.control.input_hint()
                    )),
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "  {}  {}",
            format_command("reset"),
            format_description("Reset to Default")
        ));
        lines.push(format!(
            "  {}  {}",
            format_command("export [dir]"),
            format_description("Export Config")
        ));

        lines
    }
}
